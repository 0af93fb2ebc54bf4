//! Terminal UI module
//!
//! The operator-facing menu loop. It only collects input and renders
//! results; all record rules live in [`crate::core`].

pub mod console;

pub use console::{Console, MenuChoice, SessionEnd};
