//! Department domain model.
//!
//! # Responsibility
//! - Define the canonical department record.
//! - Validate scalar fields before any write reaches storage.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one; afterwards it is stable.
//! - `year_established` never lies in the future.
//! - A department may exist with zero professors.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable store-assigned identifier for a department row.
pub type DepartmentId = i64;

/// Field-level validation failures for department writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentValidationError {
    /// `name` is empty after trimming.
    BlankName,
    /// `code` is empty after trimming.
    BlankCode,
    /// `year_established` lies in the future.
    YearInFuture {
        year_established: i32,
        current_year: i32,
    },
}

impl Display for DepartmentValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "department name must not be blank"),
            Self::BlankCode => write!(f, "department code must not be blank"),
            Self::YearInFuture {
                year_established,
                current_year,
            } => write!(
                f,
                "department year established {year_established} is later than current year {current_year}"
            ),
        }
    }
}

impl Error for DepartmentValidationError {}

/// Canonical department record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Store-assigned row identity. `None` for rows not yet saved.
    pub id: Option<DepartmentId>,
    /// Human-readable department name.
    pub name: String,
    /// Short identifier, e.g. `CS` or `HIST`.
    pub code: String,
    /// Founding year. Must not exceed the current year.
    pub year_established: i32,
}

impl Department {
    /// Creates an unsaved department record.
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        year_established: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            code: code.into(),
            year_established,
        }
    }

    /// Checks scalar-field invariants.
    ///
    /// Repositories call this before every insert/update.
    pub fn validate(&self) -> Result<(), DepartmentValidationError> {
        if self.name.trim().is_empty() {
            return Err(DepartmentValidationError::BlankName);
        }
        if self.code.trim().is_empty() {
            return Err(DepartmentValidationError::BlankCode);
        }
        let current_year = Utc::now().year();
        if self.year_established > current_year {
            return Err(DepartmentValidationError::YearInFuture {
                year_established: self.year_established,
                current_year,
            });
        }
        Ok(())
    }
}
