//! Selectable sectors and account types shown during onboarding.

use super::model::{AccountTypeId, SectorId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const SECTORS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "retail",
        label: "Retail",
        description: "Stores, points of sale and merchandising",
    },
    CatalogEntry {
        id: "hospitality",
        label: "Hospitality",
        description: "Hotels, restaurants and venues",
    },
    CatalogEntry {
        id: "healthcare",
        label: "Healthcare",
        description: "Clinics, practices and care facilities",
    },
    CatalogEntry {
        id: "logistics",
        label: "Logistics",
        description: "Warehousing, fleets and distribution",
    },
    CatalogEntry {
        id: "manufacturing",
        label: "Manufacturing",
        description: "Plants, production lines and maintenance",
    },
];

pub const ACCOUNT_TYPES: &[CatalogEntry] = &[
    CatalogEntry {
        id: "owner",
        label: "Owner",
        description: "Full access to every module and setting",
    },
    CatalogEntry {
        id: "manager",
        label: "Manager",
        description: "Runs day-to-day operations for a team",
    },
    CatalogEntry {
        id: "staff",
        label: "Staff",
        description: "Works with assigned tasks and schedules",
    },
];

pub fn sector(id: &SectorId) -> Option<&'static CatalogEntry> {
    SECTORS.iter().find(|e| e.id == id.as_str())
}

pub fn account_type(id: &AccountTypeId) -> Option<&'static CatalogEntry> {
    ACCOUNT_TYPES.iter().find(|e| e.id == id.as_str())
}

/// Label for display; ids from older builds fall back to the raw id.
pub fn sector_label(id: &SectorId) -> String {
    sector(id).map(|e| e.label.to_string()).unwrap_or_else(|| id.to_string())
}

pub fn account_type_label(id: &AccountTypeId) -> String {
    account_type(id)
        .map(|e| e.label.to_string())
        .unwrap_or_else(|| id.to_string())
}
