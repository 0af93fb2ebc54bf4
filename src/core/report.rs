//! Report engine
//!
//! Read-only aggregation over the registry and the ledger.

use crate::core::ledger::PaymentLedger;
use crate::core::registry::MemberRegistry;
use crate::types::{Amount, MembershipStatus};
use chrono::NaiveDate;

/// Snapshot of membership and revenue figures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GymReport {
    pub total_members: usize,
    pub active: usize,
    pub expired: usize,
    pub total_revenue: Amount,

    /// Package name and member count, most popular first
    ///
    /// Packages with equal counts keep the order in which they were first
    /// seen while walking the registry.
    pub package_distribution: Vec<(String, usize)>,
}

/// Build a report as of `today`
pub fn generate_report(
    registry: &MemberRegistry,
    ledger: &PaymentLedger,
    today: NaiveDate,
) -> GymReport {
    let total_members = registry.len();
    let active = registry
        .members()
        .iter()
        .filter(|m| m.status(today) == MembershipStatus::Active)
        .count();

    GymReport {
        total_members,
        active,
        expired: total_members - active,
        total_revenue: ledger.total_revenue(),
        package_distribution: package_distribution(registry),
    }
}

fn package_distribution(registry: &MemberRegistry) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();

    for member in registry.members() {
        match counts.iter_mut().find(|(name, _)| *name == member.package) {
            Some((_, count)) => *count += 1,
            None => counts.push((member.package.clone(), 1)),
        }
    }

    // Stable sort keeps first-seen order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
