//! Package-related types for the gym ledger
//!
//! A package is a subscription tier: a unique name, a price, and a duration
//! that is inferred from the name.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Price of a package or amount of a payment, in whole currency units
pub type Amount = i64;

/// Length of a subscription tier
///
/// Months are approximated as 30 days each when computing expiry dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageDuration {
    Monthly,
    Quarterly,
    HalfYearly,
    Yearly,
}

impl PackageDuration {
    /// Name fragments checked in order; the first one contained in a package
    /// name decides its duration. Anything else is yearly.
    const LOOKUP: [(&'static str, PackageDuration); 3] = [
        ("Monthly", PackageDuration::Monthly),
        ("Quarterly", PackageDuration::Quarterly),
        ("Half-Yearly", PackageDuration::HalfYearly),
    ];

    /// Infer the duration from a package name
    ///
    /// The match is a case-sensitive substring test, so `"Monthly Plus"` is
    /// monthly and a name containing both `"Monthly"` and `"Yearly"` is
    /// monthly too.
    pub fn from_package_name(name: &str) -> Self {
        Self::LOOKUP
            .iter()
            .find(|(fragment, _)| name.contains(fragment))
            .map(|&(_, duration)| duration)
            .unwrap_or(PackageDuration::Yearly)
    }

    /// Number of months covered
    pub fn months(self) -> u64 {
        match self {
            PackageDuration::Monthly => 1,
            PackageDuration::Quarterly => 3,
            PackageDuration::HalfYearly => 6,
            PackageDuration::Yearly => 12,
        }
    }

    /// Number of days covered, at 30 days per month
    pub fn days(self) -> u64 {
        30 * self.months()
    }

    /// Expiry date of a subscription of this length starting on `start`
    ///
    /// Saturates at `NaiveDate::MAX` instead of overflowing.
    pub fn expiry_from(self, start: NaiveDate) -> NaiveDate {
        start
            .checked_add_days(Days::new(self.days()))
            .unwrap_or(NaiveDate::MAX)
    }
}

/// Subscription tier as stored in the catalog
///
/// Serialized as `name|price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Unique, case-sensitive package name (e.g. "Half-Yearly")
    pub name: String,

    /// Price in whole currency units
    pub price: Amount,
}

impl Package {
    pub fn new(name: impl Into<String>, price: Amount) -> Self {
        Package {
            name: name.into(),
            price,
        }
    }

    pub fn duration(&self) -> PackageDuration {
        PackageDuration::from_package_name(&self.name)
    }
}
