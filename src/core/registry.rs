//! Member registry
//!
//! This module provides the `MemberRegistry` struct which holds every member
//! record in registration order.
//!
//! The MemberRegistry is responsible for:
//! - Assigning sequential ids on registration
//! - Computing join and expiry dates from a package
//! - Lookup by exact id and case-insensitive search by id or name
//! - Applying contact/name updates and renewals
//!
//! Package names are validated against the catalog by the caller; the
//! registry receives an already-resolved [`Package`].

use crate::core::normalize::{title_case, validate_age};
use crate::types::{GymError, Member, MemberId, Package};
use chrono::NaiveDate;

/// Fields the operator supplies when registering a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub age: u8,
    pub contact: String,
}

/// Manages all member records
///
/// Members are never removed, so the id of the n-th registered member is
/// always `M` + n zero-padded to three digits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberRegistry {
    /// Members in registration order
    members: Vec<Member>,
}

impl MemberRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        MemberRegistry {
            members: Vec::new(),
        }
    }

    /// Build a registry from previously persisted records
    pub fn from_members(members: Vec<Member>) -> Self {
        MemberRegistry { members }
    }

    /// Id the next registered member will receive
    pub fn next_id(&self) -> MemberId {
        Member::format_id(self.members.len() + 1)
    }

    /// Register a new member on `today`
    ///
    /// The name is title-cased and the contact trimmed. The expiry is
    /// `today` plus the package duration at 30 days per month. Returns a copy
    /// of the stored record.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the age is outside the accepted range; the
    /// registry is left unchanged.
    pub fn add(
        &mut self,
        new_member: NewMember,
        package: &Package,
        today: NaiveDate,
    ) -> Result<Member, GymError> {
        let age = validate_age(i64::from(new_member.age))?;

        let member = Member {
            id: self.next_id(),
            name: title_case(new_member.name.trim()),
            age,
            contact: new_member.contact.trim().to_string(),
            package: package.name.clone(),
            join_date: today,
            expiry: package.duration().expiry_from(today),
        };

        tracing::debug!(id = %member.id, package = %member.package, "member registered");
        self.members.push(member.clone());

        Ok(member)
    }

    /// Find a member by exact, case-sensitive id
    pub fn find_by_id(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Result<&mut Member, GymError> {
        self.members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| GymError::not_found(id))
    }

    /// Members whose id or name contains `query`, ignoring case
    ///
    /// Results keep registration order. An empty query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&Member> {
        let query = query.trim().to_lowercase();

        self.members
            .iter()
            .filter(|m| {
                m.id.to_lowercase().contains(&query) || m.name.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Update a member's name and/or contact
    ///
    /// Blank or absent values leave the field untouched. A new name is
    /// title-cased.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no member has the given id.
    pub fn update(
        &mut self,
        id: &str,
        new_name: Option<&str>,
        new_contact: Option<&str>,
    ) -> Result<&Member, GymError> {
        let member = self.find_by_id_mut(id)?;

        if let Some(name) = new_name.map(str::trim).filter(|s| !s.is_empty()) {
            member.name = title_case(name);
        }
        if let Some(contact) = new_contact.map(str::trim).filter(|s| !s.is_empty()) {
            member.contact = contact.to_string();
        }

        tracing::debug!(id = %member.id, "member updated");
        Ok(member)
    }

    /// Switch a member to `package`, restarting the term on `today`
    ///
    /// The new expiry is computed from `today`, not from the old expiry, so
    /// any remaining time on the previous package is forfeited.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no member has the given id.
    pub fn renew(
        &mut self,
        id: &str,
        package: &Package,
        today: NaiveDate,
    ) -> Result<&Member, GymError> {
        let member = self.find_by_id_mut(id)?;

        member.package = package.name.clone();
        member.expiry = package.duration().expiry_from(today);

        tracing::debug!(id = %member.id, package = %member.package, expiry = %member.expiry, "membership renewed");
        Ok(member)
    }

    /// All members in registration order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
