//! Core business logic module
//!
//! This module contains the record model operations:
//! - `traits` - The clock seam used to obtain "today"
//! - `normalize` - Operator input normalization (title case, age, amount)
//! - `catalog` - Package catalog
//! - `registry` - Member registry (add, find, search, update, renew)
//! - `ledger` - Append-only payment ledger
//! - `report` - Aggregate statistics
//! - `state` - Application state that ties the collections together

pub mod catalog;
pub mod ledger;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod state;
pub mod traits;

pub use catalog::PackageCatalog;
pub use ledger::PaymentLedger;
pub use registry::{MemberRegistry, NewMember};
pub use report::{generate_report, GymReport};
pub use state::GymState;
pub use traits::{Clock, FixedClock, SystemClock};
