//! Payment-related types for the gym ledger

use super::member::MemberId;
use super::package::Amount;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Money received from a member
///
/// Serialized as `member_id|amount|date|method`. The member id is a soft
/// reference: it is checked when the payment is entered, never afterwards,
/// so a loaded ledger may mention ids the registry does not contain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub member_id: MemberId,
    pub amount: Amount,
    pub date: NaiveDate,

    /// Free-text payment method, title-cased on entry (e.g. "Cash", "Upi")
    pub method: String,
}
