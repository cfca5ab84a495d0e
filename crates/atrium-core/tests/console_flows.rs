//! End-to-end console flows over the in-memory backend

use atrium_access::{PolicyTable, Role};
use atrium_client::{MockBackend, Resource};
use atrium_core::{AdminConsole, ConsoleConfig, ConsoleError};
use atrium_forms::{EmployeeForm, ListingForm, SocietyAdminForm};
use atrium_model::{
    AdminLevel, DebitNote, DebitNoteStatus, Employee, Listing, RecordId, SocietyAdmin, StaffRole,
};
use atrium_test_utils::{fixtures, init_tracing, EnvelopeStyle, MemoryBackend};
use chrono::NaiveDate;
use serde_json::json;
use std::sync::Arc;

fn console(backend: Arc<MemoryBackend>, role: Role) -> AdminConsole {
    init_tracing();
    AdminConsole::with_backend(
        ConsoleConfig::default(),
        backend,
        Arc::new(PolicyTable::new()),
        role,
    )
}

#[tokio::test]
async fn member_view_drops_committee_admins() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Message));
    backend.seed(
        Resource::Members,
        vec![
            json!({"_id": "1", "name": "A", "role": "admin", "societyId": "s1"}),
            json!({"_id": "2", "name": "B", "role": "member", "societyId": "s1"}),
        ],
    );

    let console = console(backend, Role::SuperAdmin);
    let members = console.load_members(&RecordId::new("s1")).await.unwrap();

    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id.as_str(), "2");
    assert_eq!(members[0].name, "B");
}

#[tokio::test]
async fn invalid_employee_draft_never_reaches_the_backend() {
    init_tracing();
    let mut backend = MockBackend::new();
    backend.expect_create().times(0);

    let console = AdminConsole::with_backend(
        ConsoleConfig::default(),
        Arc::new(backend),
        Arc::new(PolicyTable::new()),
        Role::SuperAdmin,
    );
    let employees = console.manager::<Employee>();

    // Sub-manager without a reporting manager
    let mut form = EmployeeForm::create();
    form.name = "Arun Mehta".to_string();
    form.email = "arun@example.com".to_string();
    form.role = StaffRole::SubManager;

    let err = employees.submit_create(&form).await.unwrap_err();
    let ConsoleError::Validation(report) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(report.for_field("reportingManager").len(), 1);
}

#[tokio::test]
async fn under_age_employee_draft_is_blocked() {
    init_tracing();
    let mut backend = MockBackend::new();
    backend.expect_create().times(0);

    let console = AdminConsole::with_backend(
        ConsoleConfig::default(),
        Arc::new(backend),
        Arc::new(PolicyTable::new()),
        Role::SuperAdmin,
    );
    let employees = console.manager::<Employee>();

    let mut form = EmployeeForm::create();
    form.name = "Too Young".to_string();
    form.email = "young@example.com".to_string();
    form.role = StaffRole::Manager;
    form.age_reference = NaiveDate::from_ymd_opt(2025, 6, 1);
    form.date_of_birth = NaiveDate::from_ymd_opt(2010, 1, 1);

    let err = employees.submit_create(&form).await.unwrap_err();
    assert!(matches!(err, ConsoleError::Validation(_)));
}

#[tokio::test]
async fn society_admin_without_society_is_created_as_super_admin() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Data));
    let console = console(backend, Role::SuperAdmin);
    let admins = console.manager::<SocietyAdmin>();

    let mut form = SocietyAdminForm::create();
    form.name = "Asha Rao".to_string();
    form.email = "asha@example.com".to_string();
    assert_eq!(form.admin_level(), AdminLevel::SuperAdmin);

    let created = admins.submit_create(&form).await.unwrap();
    assert_eq!(created.level(), AdminLevel::SuperAdmin);
    assert!(created.society_id.is_none());

    let visible = admins.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Asha Rao");
}

#[tokio::test]
async fn created_record_is_prepended_before_refresh() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Data));
    backend.seed(
        Resource::Listings,
        vec![fixtures::listing("l1", "Old bookshelf", 100_000)],
    );

    let console = console(Arc::clone(&backend), Role::SuperAdmin);
    let listings = console.manager::<Listing>();
    listings
        .load(&console.config().default_query())
        .await
        .unwrap();

    // Refresh after the create fails; the optimistic prepend must survive
    backend.fail_next_list(atrium_client::ClientError::Timeout);

    let mut form = ListingForm::create(RecordId::new("soc-1"));
    form.seller = "R. Iyer".to_string();
    form.title = "Teak wardrobe".to_string();
    form.price = 900_000;

    let created = listings.submit_create(&form).await.unwrap();
    let visible = listings.visible();
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].id, created.id);
    assert_eq!(visible[0].title, "Teak wardrobe");
}

#[tokio::test]
async fn failed_load_keeps_last_known_good() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Data));
    backend.seed(
        Resource::Listings,
        vec![
            fixtures::listing("l1", "Bookshelf", 100_000),
            fixtures::listing("l2", "Dining table", 250_000),
        ],
    );

    let console = console(Arc::clone(&backend), Role::SuperAdmin);
    let listings = console.manager::<Listing>();
    let query = console.config().default_query();
    listings.load(&query).await.unwrap();
    assert_eq!(listings.visible().len(), 2);

    backend.fail_next_list(atrium_client::ClientError::Timeout);
    let err = listings.load(&query).await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Backend(atrium_client::ClientError::Timeout)
    ));

    // Store untouched by the failure
    assert_eq!(listings.visible().len(), 2);

    let notices = listings.drain_notices();
    assert!(notices.iter().any(|n| n.is_error()));
}

#[tokio::test]
async fn contractors_cannot_touch_staff_records() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Data));
    backend.seed(
        Resource::Employees,
        vec![fixtures::employee("e1", "Priya Sharma", "manager")],
    );

    let console = console(backend, Role::Contractor);
    let employees = console.manager::<Employee>();

    let err = employees
        .load(&console.config().default_query())
        .await
        .unwrap_err();
    assert!(matches!(err, ConsoleError::PermissionDenied { .. }));
    assert!(employees.visible().is_empty());
}

#[tokio::test]
async fn printing_is_capability_checked() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Data));
    let note = DebitNote {
        id: RecordId::new("dn-1"),
        site_id: RecordId::new("site-1"),
        contractor: "Acme Scaffolding".to_string(),
        violation: "No harness at height".to_string(),
        amount: 2_500_000,
        issued_on: NaiveDate::from_ymd_opt(2025, 2, 12).unwrap(),
        status: DebitNoteStatus::Open,
    };

    let manager_console = console(Arc::clone(&backend), Role::Manager);
    let bytes = manager_console.print_record(&note).await.unwrap();
    let html = String::from_utf8(bytes).unwrap();
    assert!(html.contains("Acme Scaffolding"));

    let resident_console = console(backend, Role::Resident);
    let err = resident_console.print_record(&note).await.unwrap_err();
    assert!(matches!(err, ConsoleError::PermissionDenied { .. }));
}

#[tokio::test]
async fn managers_for_the_same_resource_share_one_store() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Data));
    backend.seed(
        Resource::Listings,
        vec![fixtures::listing("l1", "Bookshelf", 100_000)],
    );

    let console = console(backend, Role::SuperAdmin);
    let first = console.manager::<Listing>();
    let second = console.manager::<Listing>();

    first.load(&console.config().default_query()).await.unwrap();
    assert_eq!(second.visible().len(), 1);
}

#[tokio::test]
async fn legacy_alias_fields_normalize_at_ingress() {
    let backend = Arc::new(MemoryBackend::new(EnvelopeStyle::Bare));
    backend.seed(
        Resource::Employees,
        vec![fixtures::legacy_employee(
            "e7",
            "Sharmila Rao",
            "subManager",
            "site-4",
        )],
    );

    let console = console(backend, Role::SuperAdmin);
    let employees = console.manager::<Employee>();
    employees
        .load(&console.config().default_query())
        .await
        .unwrap();

    let visible = employees.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id.as_str(), "e7");
    assert_eq!(visible[0].role, StaffRole::SubManager);
    assert_eq!(visible[0].site_id.as_ref().unwrap().as_str(), "site-4");
}
