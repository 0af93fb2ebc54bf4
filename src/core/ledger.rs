//! Payment ledger
//!
//! Append-only list of payments. Entries are never updated or removed.
//!
//! The ledger does not check that a payment's member exists; that is done
//! once by the caller before recording. Loaded ledgers may therefore refer
//! to ids that are no longer in the registry.
//!
//! The running total is kept with checked arithmetic. A payment that would
//! push it outside the `Amount` range is rejected, so the total can always
//! be read without overflow.

use crate::core::normalize::title_case;
use crate::types::{Amount, GymError, MemberId, Payment};
use chrono::NaiveDate;

/// Append-only payment history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentLedger {
    payments: Vec<Payment>,
    total: Amount,
}

impl PaymentLedger {
    pub fn new() -> Self {
        PaymentLedger {
            payments: Vec::new(),
            total: 0,
        }
    }

    /// Build a ledger from previously persisted records
    ///
    /// # Errors
    ///
    /// Returns `ParseFault` (without a file name) if the amounts do not sum
    /// within the `Amount` range.
    pub fn from_payments(payments: Vec<Payment>) -> Result<Self, GymError> {
        let mut total: Amount = 0;
        for (index, payment) in payments.iter().enumerate() {
            total = total.checked_add(payment.amount).ok_or_else(|| {
                GymError::parse_fault(
                    "",
                    None,
                    format!("payment {} takes total revenue out of range", index + 1),
                )
            })?;
        }

        Ok(PaymentLedger { payments, total })
    }

    /// Append a payment dated `date`
    ///
    /// The method is trimmed and title-cased ("upi" becomes "Upi").
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if adding `amount` would overflow the total
    /// revenue; the ledger is left unchanged.
    pub fn record(
        &mut self,
        member_id: impl Into<MemberId>,
        amount: Amount,
        method: &str,
        date: NaiveDate,
    ) -> Result<Payment, GymError> {
        let total = self.total.checked_add(amount).ok_or_else(|| {
            GymError::invalid_input("amount", "total revenue would exceed the supported range")
        })?;

        let payment = Payment {
            member_id: member_id.into(),
            amount,
            date,
            method: title_case(method.trim()),
        };

        tracing::debug!(member_id = %payment.member_id, amount = payment.amount, "payment recorded");
        self.payments.push(payment.clone());
        self.total = total;

        Ok(payment)
    }

    /// Sum of all recorded amounts, 0 when empty
    pub fn total_revenue(&self) -> Amount {
        self.total
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn len(&self) -> usize {
        self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_empty_ledger_has_zero_revenue() {
        let ledger = PaymentLedger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total_revenue(), 0);
    }

    #[test]
    fn test_record_title_cases_method() {
        let mut ledger = PaymentLedger::new();
        let payment = ledger.record("M001", 2000, " upi ", today()).unwrap();

        assert_eq!(
            payment,
            Payment {
                member_id: "M001".to_string(),
                amount: 2000,
                date: today(),
                method: "Upi".to_string(),
            }
        );
    }

    #[test]
    fn test_total_revenue_sums_all_payments() {
        let mut ledger = PaymentLedger::new();
        ledger.record("M001", 2000, "Cash", today()).unwrap();
        ledger.record("M002", 5500, "Card", today()).unwrap();
        ledger.record("M001", 18000, "Upi", today()).unwrap();

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.total_revenue(), 25500);
    }

    #[test]
    fn test_record_rejects_amount_that_overflows_total() {
        let mut ledger = PaymentLedger::new();
        ledger.record("M001", Amount::MAX, "Cash", today()).unwrap();

        let result = ledger.record("M001", 1, "Cash", today());

        assert!(matches!(result, Err(GymError::InvalidInput { ref field, .. }) if field == "amount"));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total_revenue(), Amount::MAX);
    }

    #[test]
    fn test_record_rejects_amount_that_underflows_total() {
        let mut ledger = PaymentLedger::new();
        ledger.record("M001", -1, "Refund", today()).unwrap();

        assert!(ledger.record("M001", Amount::MIN, "Refund", today()).is_err());
        assert_eq!(ledger.total_revenue(), -1);
    }

    #[test]
    fn test_loaded_amounts_that_overflow_are_rejected() {
        let payment = |amount| Payment {
            member_id: "M001".to_string(),
            amount,
            date: today(),
            method: "Cash".to_string(),
        };

        let result = PaymentLedger::from_payments(vec![payment(Amount::MAX), payment(1)]);

        let error = result.unwrap_err();
        assert!(matches!(error, GymError::ParseFault { .. }));
        assert!(error.to_string().contains("payment 2 takes total revenue out of range"));
    }

    #[test]
    fn test_loaded_ledger_keeps_dangling_ids() {
        let ledger = PaymentLedger::from_payments(vec![Payment {
            member_id: "M999".to_string(),
            amount: 500,
            date: today(),
            method: "Cash".to_string(),
        }])
        .unwrap();

        assert_eq!(ledger.total_revenue(), 500);
        assert_eq!(ledger.payments()[0].member_id, "M999");
    }
}
