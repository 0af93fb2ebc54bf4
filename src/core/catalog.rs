//! Package catalog
//!
//! This module provides the PackageCatalog component: the ordered set of
//! subscription tiers members can choose from. Order is insertion order and
//! is preserved when the catalog is listed or saved.
//!
//! # Duplicate Handling
//!
//! Inserting a name that already exists replaces its price in place; the
//! package keeps its original position.

use crate::types::Package;

/// Ordered collection of packages keyed by exact name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCatalog {
    packages: Vec<Package>,
}

impl PackageCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        PackageCatalog {
            packages: Vec::new(),
        }
    }

    /// Catalog used when no packages file exists
    ///
    /// Monthly 2000, Quarterly 5500, Half-Yearly 10000, Yearly 18000.
    pub fn with_defaults() -> Self {
        [
            ("Monthly", 2000),
            ("Quarterly", 5500),
            ("Half-Yearly", 10000),
            ("Yearly", 18000),
        ]
        .into_iter()
        .map(|(name, price)| Package::new(name, price))
        .collect()
    }

    /// Insert a package, or update the price of an existing one
    pub fn insert(&mut self, package: Package) {
        match self.packages.iter_mut().find(|p| p.name == package.name) {
            Some(existing) => existing.price = package.price,
            None => self.packages.push(package),
        }
    }

    /// Look up a package by exact, case-sensitive name
    ///
    /// Callers title-case operator input before looking it up.
    pub fn get(&self, name: &str) -> Option<&Package> {
        self.packages.iter().find(|p| p.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All packages in catalog order
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for PackageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Package> for PackageCatalog {
    fn from_iter<I: IntoIterator<Item = Package>>(iter: I) -> Self {
        let mut catalog = PackageCatalog::new();
        for package in iter {
            catalog.insert(package);
        }
        catalog
    }
}
