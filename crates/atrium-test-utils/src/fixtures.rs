//! Wire-shaped fixture payloads
//!
//! Shapes match what the backend fleet actually serves, drifted field names
//! included, so fixtures exercise the same decoding paths as production
//! responses.

use serde_json::{json, Value};

/// Employee record as the staff service serves it
#[must_use]
pub fn employee(id: &str, name: &str, role: &str) -> Value {
    json!({
        "_id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "role": role,
        "status": "active",
    })
}

/// Employee record from the older branch service, alias spellings included
#[must_use]
pub fn legacy_employee(id: &str, name: &str, role: &str, branch: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "role": role,
        "status": "active",
        "branch_id": branch,
    })
}

/// Society member as the member directory serves it
#[must_use]
pub fn member(id: &str, name: &str, role: &str) -> Value {
    json!({ "_id": id, "name": name, "role": role })
}

/// Society admin; pass `None` for a Super Admin
#[must_use]
pub fn society_admin(id: &str, name: &str, society: Option<&str>) -> Value {
    let mut record = json!({
        "_id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
    });
    if let Some(society) = society {
        record["societyId"] = json!(society);
    }
    record
}

/// Marketplace listing
#[must_use]
pub fn listing(id: &str, title: &str, price: i64) -> Value {
    json!({
        "_id": id,
        "societyId": "soc-1",
        "seller": "R. Iyer",
        "title": title,
        "price": price,
        "category": "furniture",
        "status": "active",
    })
}

/// Contractor debit note
#[must_use]
pub fn debit_note(id: &str, contractor: &str, amount: i64) -> Value {
    json!({
        "_id": id,
        "siteId": "site-1",
        "contractor": contractor,
        "violation": "No harness at height",
        "amount": amount,
        "issuedOn": "2025-02-12",
        "status": "open",
    })
}
