//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `package`: Subscription tiers and their durations
//! - `member`: Member records and the derived membership status
//! - `payment`: Payment records
//! - `error`: Error types for the gym ledger

pub mod error;
pub mod member;
pub mod package;
pub mod payment;

pub use error::GymError;
pub use member::{Member, MemberId, MembershipStatus, MAX_AGE, MIN_AGE};
pub use package::{Amount, Package, PackageDuration};
pub use payment::Payment;
