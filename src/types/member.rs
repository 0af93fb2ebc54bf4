//! Member-related types for the gym ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Member identifier, `"M"` followed by a zero-padded sequence number
pub type MemberId = String;

/// Youngest accepted member age
pub const MIN_AGE: u8 = 15;

/// Oldest accepted member age
pub const MAX_AGE: u8 = 80;

/// Registered gym patron
///
/// Serialized in field order as `id|name|age|contact|package|join_date|expiry`.
/// Status is not stored; see [`Member::status`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub age: u8,
    pub contact: String,

    /// Name of the package at creation or last renewal
    ///
    /// Not re-checked if the catalog changes later.
    pub package: String,

    pub join_date: NaiveDate,
    pub expiry: NaiveDate,
}

impl Member {
    /// Format the id for the `sequence`-th member: `M001`, `M002`, ...
    pub fn format_id(sequence: usize) -> MemberId {
        format!("M{:03}", sequence)
    }

    /// Membership status on `today`
    ///
    /// A membership expiring today is still active.
    pub fn status(&self, today: NaiveDate) -> MembershipStatus {
        if self.expiry >= today {
            MembershipStatus::Active
        } else {
            MembershipStatus::Expired
        }
    }
}

/// Derived membership status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipStatus {
    Active,
    Expired,
}

impl fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipStatus::Active => f.write_str("Active"),
            MembershipStatus::Expired => f.write_str("Expired"),
        }
    }
}
