//! Professor domain model.
//!
//! # Responsibility
//! - Define the canonical professor record.
//! - Validate scalar fields before any write reaches storage.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one; afterwards it is stable.
//! - `department_id` always names an existing department; existence is
//!   verified by the service before any record is constructed for a write.
//! - `email` is unique across all professors (enforced by the store).

use crate::model::department::DepartmentId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a professor row.
pub type ProfessorId = i64;

/// Field-level validation failures for professor writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfessorValidationError {
    /// `first_name` is empty after trimming.
    BlankFirstName,
    /// `last_name` is empty after trimming.
    BlankLastName,
    /// `email` is empty after trimming.
    BlankEmail,
    /// `email` does not look like an address.
    InvalidEmail(String),
}

impl Display for ProfessorValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankFirstName => write!(f, "professor first name must not be blank"),
            Self::BlankLastName => write!(f, "professor last name must not be blank"),
            Self::BlankEmail => write!(f, "professor email must not be blank"),
            Self::InvalidEmail(email) => write!(f, "professor email `{email}` is not an address"),
        }
    }
}

impl Error for ProfessorValidationError {}

/// Canonical professor record.
///
/// Holds the department reference by identity only. The full department
/// row is resolved on demand through its own repository, never embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    /// Store-assigned row identity. `None` for rows not yet saved.
    pub id: Option<ProfessorId>,
    pub first_name: String,
    pub last_name: String,
    /// Unique contact address.
    pub email: String,
    /// Free-text role label, e.g. `Full Professor` or `Lecturer`.
    pub title: String,
    /// Identity of the owning department.
    pub department_id: DepartmentId,
}

impl Professor {
    /// Creates an unsaved professor record assigned to `department_id`.
    ///
    /// Callers must have confirmed the department exists; this constructor
    /// performs no lookups.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        title: impl Into<String>,
        department_id: DepartmentId,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            title: title.into(),
            department_id,
        }
    }

    /// Checks scalar-field invariants.
    ///
    /// Repositories call this before every insert/update. The department
    /// reference is checked by the service, not here.
    pub fn validate(&self) -> Result<(), ProfessorValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ProfessorValidationError::BlankFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ProfessorValidationError::BlankLastName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ProfessorValidationError::BlankEmail);
        }
        if !email.contains('@') {
            return Err(ProfessorValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}
