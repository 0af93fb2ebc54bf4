//! Gym Ledger Library
//! # Overview
//!
//! This library tracks gym members, their subscription packages and the
//! payments they make, persisted to pipe-delimited text files.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Member, Payment, Package, errors)
//! - [`core`] - Business logic components:
//!   - [`core::catalog`] - Package catalog
//!   - [`core::registry`] - Member registration, lookup, updates and renewals
//!   - [`core::ledger`] - Append-only payment ledger
//!   - [`core::report`] - Membership and revenue statistics
//!   - [`core::state`] - Application state owning the three collections
//! - [`io`] - Persistence gateway for the data directory
//! - [`tui`] - Plain-text operator console
//! - [`cli`] - CLI arguments parsing
//!
//! # Membership Rules
//!
//! - Member ids are `M001`, `M002`, ... in registration order
//! - Ages must lie between 15 and 80
//! - A package lasts 1, 3, 6 or 12 months of 30 days each, inferred from its name
//! - Renewing restarts the term from today; remaining time is forfeited
//! - A member is Active while `expiry >= today`

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logger;
pub mod tui;
pub mod types;

pub use crate::core::{GymReport, GymState, MemberRegistry, PackageCatalog, PaymentLedger};
pub use io::{load_state, save_state, DataFiles};
pub use types::{
    Amount, GymError, Member, MemberId, MembershipStatus, Package, PackageDuration, Payment,
};
