//! Marketplace listing drafts

use crate::report::ValidationReport;
use crate::{rules, FormMode, Validate};
use atrium_model::{Listing, ListingCategory, ListingStatus, RecordId};
use serde::Serialize;
use ulid::Ulid;

/// Draft for creating or editing a [`Listing`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    /// Client-side draft id, never sent on the wire
    #[serde(skip)]
    pub draft_id: Ulid,
    /// Create or edit
    #[serde(skip)]
    pub mode: FormMode,
    /// Society the listing belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub society_id: Option<RecordId>,
    /// Seller display name
    pub seller: String,
    /// Listing title
    pub title: String,
    /// Price in minor currency units
    pub price: i64,
    /// Category
    pub category: ListingCategory,
    /// Lifecycle state
    pub status: ListingStatus,
}

impl ListingForm {
    /// Blank draft scoped to a society
    #[must_use]
    pub fn create(society_id: RecordId) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Create,
            society_id: Some(society_id),
            seller: String::new(),
            title: String::new(),
            price: 0,
            category: ListingCategory::Other,
            status: ListingStatus::Active,
        }
    }

    /// Draft seeded from an existing record
    #[must_use]
    pub fn edit(listing: &Listing) -> Self {
        Self {
            draft_id: Ulid::new(),
            mode: FormMode::Edit(listing.id.clone()),
            society_id: Some(listing.society_id.clone()),
            seller: listing.seller.clone(),
            title: listing.title.clone(),
            price: listing.price,
            category: listing.category,
            status: listing.status,
        }
    }
}

impl Validate for ListingForm {
    fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();
        rules::required(&mut report, "title", &self.title);
        rules::required(&mut report, "seller", &self.seller);
        rules::required_some(&mut report, "societyId", &self.society_id);
        rules::positive_amount(&mut report, "price", self.price);
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ListingForm {
        let mut form = ListingForm::create(RecordId::new("soc-1"));
        form.seller = "R. Iyer".to_string();
        form.title = "Teak bookshelf".to_string();
        form.price = 450_000;
        form.category = ListingCategory::Furniture;
        form
    }

    #[test]
    fn well_formed_listing_passes() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn free_listing_is_rejected() {
        let mut form = valid_form();
        form.price = 0;
        assert_eq!(form.validate().for_field("price").len(), 1);

        form.price = -100;
        assert_eq!(form.validate().for_field("price").len(), 1);
    }
}
