//! User and credential lookups.

use super::Repository;
use crate::fixtures::team_roster;
use crate::models::{TeamMember, User};
use crate::StoreError;

impl Repository {
    pub fn list_users(&self) -> &[User] {
        &self.users
    }

    pub fn get_user(&self, id: &str) -> Result<&User, StoreError> {
        self.users
            .iter()
            .find(|u| u.user_id == id)
            .ok_or_else(|| StoreError::not_found("user", id))
    }

    /// Delivery team members available for staffing, with availability.
    pub fn team_members(&self) -> Vec<TeamMember> {
        team_roster(&self.users)
    }

    /// Resolve an email/password pair to its user.
    ///
    /// Email comparison is case-insensitive; the password must match exactly.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&User, StoreError> {
        let credential = self
            .credentials
            .iter()
            .find(|c| c.email.eq_ignore_ascii_case(email.trim()) && c.password == password)
            .ok_or(StoreError::InvalidCredentials)?;
        self.get_user(&credential.user_id)
    }
}
