//! Marketplace listings

use crate::id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Listing category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingCategory {
    /// Furniture and fittings
    Furniture,
    /// Electronics and appliances
    Electronics,
    /// Vehicles and accessories
    Vehicles,
    /// Services offered by residents
    Services,
    /// Everything else
    Other,
}

impl std::str::FromStr for ListingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "furniture" => Ok(Self::Furniture),
            "electronics" => Ok(Self::Electronics),
            "vehicles" => Ok(Self::Vehicles),
            "services" => Ok(Self::Services),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown listing category: {other}")),
        }
    }
}

/// Listing lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Visible in the marketplace
    Active,
    /// Sold to a buyer
    Sold,
    /// Withdrawn by the seller
    Withdrawn,
}

impl std::str::FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "sold" => Ok(Self::Sold),
            "withdrawn" => Ok(Self::Withdrawn),
            other => Err(format!("unknown listing status: {other}")),
        }
    }
}

/// Marketplace listing posted by a resident
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// Server-assigned id
    pub id: RecordId,
    /// Society the listing belongs to
    pub society_id: RecordId,
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
    /// Posting timestamp where the backend supplies one
    pub created_at: Option<DateTime<Utc>>,
}
