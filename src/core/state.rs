//! Application state
//!
//! This module provides `GymState`, which owns the package catalog, the
//! member registry and the payment ledger, and exposes every record
//! operation the console can invoke.
//!
//! The state enforces the cross-collection rules:
//! - A member's package must exist in the catalog when the member is
//!   registered or renewed
//! - A payment can only be recorded for a member that currently exists
//!
//! Nothing here touches the filesystem; see [`crate::io::store`] for loading
//! and saving.

use crate::core::catalog::PackageCatalog;
use crate::core::ledger::PaymentLedger;
use crate::core::registry::{MemberRegistry, NewMember};
use crate::core::report::{self, GymReport};
use crate::types::{Amount, GymError, Member, Package, Payment};
use chrono::NaiveDate;

fn unknown_package(name: &str) -> GymError {
    GymError::invalid_input("package", format!("'{}' is not in the catalog", name))
}

/// In-memory state of one console session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GymState {
    catalog: PackageCatalog,
    registry: MemberRegistry,
    ledger: PaymentLedger,
}

impl GymState {
    /// Create a state from its three collections
    pub fn new(catalog: PackageCatalog, registry: MemberRegistry, ledger: PaymentLedger) -> Self {
        GymState {
            catalog,
            registry,
            ledger,
        }
    }

    /// Fresh state with the default catalog and no members or payments
    pub fn with_default_catalog() -> Self {
        Self::new(
            PackageCatalog::with_defaults(),
            MemberRegistry::new(),
            PaymentLedger::new(),
        )
    }

    pub fn catalog(&self) -> &PackageCatalog {
        &self.catalog
    }

    pub fn registry(&self) -> &MemberRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &PaymentLedger {
        &self.ledger
    }

    /// Resolve a package name against the catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the catalog has no package with that name.
    pub fn package(&self, name: &str) -> Result<&Package, GymError> {
        self.catalog.get(name).ok_or_else(|| unknown_package(name))
    }

    /// Register a new member on `today`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the age is out of range or the package does
    /// not exist. Nothing is stored on error.
    pub fn add_member(
        &mut self,
        new_member: NewMember,
        package_name: &str,
        today: NaiveDate,
    ) -> Result<Member, GymError> {
        let package = self
            .catalog
            .get(package_name)
            .ok_or_else(|| unknown_package(package_name))?;

        self.registry.add(new_member, package, today)
    }

    pub fn find_member(&self, id: &str) -> Option<&Member> {
        self.registry.find_by_id(id)
    }

    pub fn search_members(&self, query: &str) -> Vec<&Member> {
        self.registry.search(query)
    }

    /// Update a member's name and/or contact; blank values are ignored
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no member has the given id.
    pub fn update_member(
        &mut self,
        id: &str,
        new_name: Option<&str>,
        new_contact: Option<&str>,
    ) -> Result<&Member, GymError> {
        self.registry.update(id, new_name, new_contact)
    }

    /// Move a member to another package, restarting the term on `today`
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the member does not exist, otherwise
    /// `InvalidInput` if the package does not exist.
    pub fn renew_membership(
        &mut self,
        id: &str,
        package_name: &str,
        today: NaiveDate,
    ) -> Result<&Member, GymError> {
        if self.registry.find_by_id(id).is_none() {
            return Err(GymError::not_found(id));
        }

        let package = self
            .catalog
            .get(package_name)
            .ok_or_else(|| unknown_package(package_name))?;

        self.registry.renew(id, package, today)
    }

    /// Record a payment received today from an existing member
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no member has the given id, or `InvalidInput` if
    /// the amount would take the total revenue out of range. The ledger is
    /// left unchanged on error.
    pub fn record_payment(
        &mut self,
        member_id: &str,
        amount: Amount,
        method: &str,
        today: NaiveDate,
    ) -> Result<Payment, GymError> {
        if self.registry.find_by_id(member_id).is_none() {
            return Err(GymError::not_found(member_id));
        }

        self.ledger.record(member_id, amount, method, today)
    }

    /// Aggregate figures as of `today`
    pub fn generate_report(&self, today: NaiveDate) -> GymReport {
        report::generate_report(&self.registry, &self.ledger, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MembershipStatus;
    use rstest::{fixture, rstest};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn alice() -> NewMember {
        NewMember {
            name: "Alice Smith".to_string(),
            age: 30,
            contact: "555-1234".to_string(),
        }
    }

    #[fixture]
    fn today() -> NaiveDate {
        date(2026, 1, 15)
    }

    #[fixture]
    fn state(today: NaiveDate) -> GymState {
        let mut state = GymState::with_default_catalog();
        state.add_member(alice(), "Monthly", today).unwrap();
        state
    }

    #[rstest]
    fn test_add_alice_to_empty_registry(today: NaiveDate) {
        let mut state = GymState::with_default_catalog();
        let member = state.add_member(alice(), "Monthly", today).unwrap();

        assert_eq!(
            member,
            Member {
                id: "M001".to_string(),
                name: "Alice Smith".to_string(),
                age: 30,
                contact: "555-1234".to_string(),
                package: "Monthly".to_string(),
                join_date: today,
                expiry: date(2026, 2, 14),
            }
        );
        assert_eq!(member.status(today), MembershipStatus::Active);
    }

    #[rstest]
    #[case::lower_case("monthly")]
    #[case::unknown("Platinum")]
    #[case::empty("")]
    fn test_add_rejects_unknown_package(today: NaiveDate, #[case] package: &str) {
        let mut state = GymState::with_default_catalog();
        let result = state.add_member(alice(), package, today);

        assert!(matches!(result, Err(GymError::InvalidInput { ref field, .. }) if field == "package"));
        assert!(state.registry().is_empty());
    }

    #[rstest]
    fn test_add_allows_duplicate_names(mut state: GymState, today: NaiveDate) {
        let second = state.add_member(alice(), "Yearly", today).unwrap();
        assert_eq!(second.id, "M002");
        assert_eq!(state.search_members("alice smith").len(), 2);
    }

    #[rstest]
    #[case("Half-Yearly", true)]
    #[case("half-yearly", false)]
    fn test_package_lookup(state: GymState, #[case] name: &str, #[case] found: bool) {
        assert_eq!(state.package(name).is_ok(), found);
    }

    #[rstest]
    fn test_search_matches_partial_name(state: GymState) {
        let found = state.search_members("smi");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Alice Smith");
    }

    #[rstest]
    fn test_renew_quarterly_is_ninety_days_from_today(mut state: GymState) {
        let renewal_day = date(2026, 1, 20);
        let member = state
            .renew_membership("M001", "Quarterly", renewal_day)
            .unwrap();

        assert_eq!(member.package, "Quarterly");
        assert_eq!(member.expiry, date(2026, 4, 20));
    }

    #[rstest]
    fn test_renew_unknown_package_leaves_member_unchanged(mut state: GymState, today: NaiveDate) {
        let before = state.find_member("M001").unwrap().clone();
        let result = state.renew_membership("M001", "Platinum", today);

        assert!(matches!(result, Err(GymError::InvalidInput { .. })));
        assert_eq!(state.find_member("M001"), Some(&before));
    }

    #[rstest]
    fn test_renew_missing_member(mut state: GymState, today: NaiveDate) {
        assert_eq!(
            state.renew_membership("M404", "Platinum", today),
            Err(GymError::not_found("M404"))
        );
    }

    #[rstest]
    fn test_update_member(mut state: GymState) {
        let member = state.update_member("M001", Some("alice jones"), None).unwrap();
        assert_eq!(member.name, "Alice Jones");
        assert_eq!(member.contact, "555-1234");
    }

    #[rstest]
    fn test_record_payment(mut state: GymState, today: NaiveDate) {
        let payment = state.record_payment("M001", 2000, "cash", today).unwrap();

        assert_eq!(payment.method, "Cash");
        assert_eq!(state.ledger().total_revenue(), 2000);
    }

    #[rstest]
    fn test_record_payment_for_missing_member(mut state: GymState, today: NaiveDate) {
        let result = state.record_payment("M404", 2000, "Cash", today);

        assert_eq!(result, Err(GymError::not_found("M404")));
        assert!(state.ledger().is_empty());
    }

    #[rstest]
    fn test_report_after_rejected_overflowing_payment(mut state: GymState, today: NaiveDate) {
        state.record_payment("M001", Amount::MAX, "Cash", today).unwrap();

        let result = state.record_payment("M001", 1, "Cash", today);

        assert!(matches!(result, Err(GymError::InvalidInput { .. })));
        assert_eq!(state.ledger().len(), 1);
        assert_eq!(state.generate_report(today).total_revenue, Amount::MAX);
    }

    #[rstest]
    fn test_report_with_active_and_expired(mut state: GymState, today: NaiveDate) {
        // Registered 60 days earlier on a monthly plan, so already expired.
        let long_ago = date(2025, 11, 16);
        state
            .add_member(
                NewMember {
                    name: "Bob Jones".to_string(),
                    age: 44,
                    contact: "555-9876".to_string(),
                },
                "Monthly",
                long_ago,
            )
            .unwrap();
        state.record_payment("M002", 2000, "Card", long_ago).unwrap();

        let report = state.generate_report(today);

        assert_eq!(report.total_members, 2);
        assert_eq!(report.active, 1);
        assert_eq!(report.expired, 1);
        assert_eq!(report.total_revenue, 2000);
        assert_eq!(report.package_distribution, vec![("Monthly".to_string(), 2)]);
    }
}
