//! File-backed persistence for the three collections
//!
//! Each collection lives in its own pipe-delimited file inside the data
//! directory. Files are opened, fully read or written, and closed within a
//! single call.
//!
//! # Missing Files
//!
//! - Packages: the default catalog is used
//! - Members and payments: the collection starts empty
//!
//! # Error Handling
//!
//! - Malformed lines are a `ParseFault`; the whole load fails
//! - Saving overwrites each file in place; there is no partial-write
//!   protection across the three files

use crate::core::{GymState, MemberRegistry, PackageCatalog, PaymentLedger};
use crate::io::delimited::{read_records, write_records, DelimitedRecord};
use crate::types::{GymError, Package};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const PACKAGES_FILE: &str = "packages.txt";
pub const MEMBERS_FILE: &str = "members.txt";
pub const PAYMENTS_FILE: &str = "payments.txt";

/// Locations of the three data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub packages: PathBuf,
    pub members: PathBuf,
    pub payments: PathBuf,
}

impl DataFiles {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        DataFiles {
            packages: dir.join(PACKAGES_FILE),
            members: dir.join(MEMBERS_FILE),
            payments: dir.join(PAYMENTS_FILE),
        }
    }
}

/// Read all records from `path`, or `None` if the file does not exist
fn read_file<T: DelimitedRecord>(path: &Path) -> Result<Option<Vec<T>>, GymError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(GymError::Io {
                message: format!("Failed to open '{}': {}", path.display(), e),
            })
        }
    };

    read_records(file, &path.display().to_string()).map(Some)
}

fn write_file<T: DelimitedRecord>(path: &Path, records: &[T]) -> Result<(), GymError> {
    let file = File::create(path).map_err(|e| GymError::Io {
        message: format!("Failed to create '{}': {}", path.display(), e),
    })?;

    write_records(records, file)
}

/// Load the package catalog, seeding defaults when the file is missing
pub fn load_packages(path: &Path) -> Result<PackageCatalog, GymError> {
    match read_file::<Package>(path)? {
        Some(packages) => Ok(packages.into_iter().collect()),
        None => {
            tracing::info!(path = %path.display(), "packages file not found, using default catalog");
            Ok(PackageCatalog::with_defaults())
        }
    }
}

/// Load the member registry; a missing file yields an empty registry
pub fn load_members(path: &Path) -> Result<MemberRegistry, GymError> {
    Ok(MemberRegistry::from_members(
        read_file(path)?.unwrap_or_default(),
    ))
}

/// Load the payment ledger; a missing file yields an empty ledger
pub fn load_payments(path: &Path) -> Result<PaymentLedger, GymError> {
    PaymentLedger::from_payments(read_file(path)?.unwrap_or_default())
        .map_err(|e| e.in_file(&path.display().to_string()))
}

pub fn save_packages(path: &Path, catalog: &PackageCatalog) -> Result<(), GymError> {
    write_file(path, catalog.packages())
}

pub fn save_members(path: &Path, registry: &MemberRegistry) -> Result<(), GymError> {
    write_file(path, registry.members())
}

pub fn save_payments(path: &Path, ledger: &PaymentLedger) -> Result<(), GymError> {
    write_file(path, ledger.payments())
}

/// Load all three collections
///
/// # Errors
///
/// Returns the first `ParseFault` or `Io` error encountered; no partially
/// loaded state is returned.
pub fn load_state(files: &DataFiles) -> Result<GymState, GymError> {
    let catalog = load_packages(&files.packages)?;
    let registry = load_members(&files.members)?;
    let ledger = load_payments(&files.payments)?;

    tracing::info!(
        packages = catalog.len(),
        members = registry.len(),
        payments = ledger.len(),
        "data loaded"
    );

    Ok(GymState::new(catalog, registry, ledger))
}

/// Overwrite all three files from `state`
pub fn save_state(files: &DataFiles, state: &GymState) -> Result<(), GymError> {
    save_packages(&files.packages, state.catalog())?;
    save_members(&files.members, state.registry())?;
    save_payments(&files.payments, state.ledger())?;

    tracing::info!(
        members = state.registry().len(),
        payments = state.ledger().len(),
        "data saved"
    );

    Ok(())
}
