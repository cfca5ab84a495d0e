//! Tenancy entities: societies, blocks, units

use crate::id::RecordId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Residential society (the tenant organizational unit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Society {
    /// Server-assigned id
    pub id: RecordId,
    /// Society name
    pub name: String,
    /// Street address
    pub address: String,
    /// City
    pub city: Option<String>,
    /// Creation timestamp where the backend supplies one
    pub created_at: Option<DateTime<Utc>>,
}

/// Building block within a society
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Server-assigned id
    pub id: RecordId,
    /// Owning society
    pub society_id: RecordId,
    /// Owning society name, when the backend embeds it
    pub society_name: Option<String>,
    /// Block name ("A Wing")
    pub name: String,
    /// Number of floors
    pub floors: Option<u32>,
}

/// Occupancy state of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupancy {
    /// Occupied by the owner
    OwnerOccupied,
    /// Rented out
    Rented,
    /// Currently vacant
    Vacant,
}

impl std::str::FromStr for Occupancy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner_occupied" | "ownerOccupied" | "owner" => Ok(Self::OwnerOccupied),
            "rented" | "tenant" => Ok(Self::Rented),
            "vacant" => Ok(Self::Vacant),
            other => Err(format!("unknown occupancy: {other}")),
        }
    }
}

/// Residential unit within a block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Server-assigned id
    pub id: RecordId,
    /// Owning block
    pub block_id: RecordId,
    /// Door number ("A-304")
    pub number: String,
    /// Floor the unit is on
    pub floor: Option<u32>,
    /// Occupancy state
    pub occupancy: Occupancy,
}
