//! Registry use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Enforce relationship-existence invariants above the gateways.
//!
//! # Invariants
//! - Every existence check runs before the first write of an operation, so
//!   a failed check leaves the store untouched.
//! - Not-found conditions propagate to the caller unchanged; nothing is
//!   retried or recovered here.

use crate::model::department::DepartmentId;
use crate::model::professor::ProfessorId;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod department_service;
pub mod professor_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the registry services.
#[derive(Debug)]
pub enum ServiceError {
    /// Lookup for a department by identity failed.
    DepartmentNotFound(DepartmentId),
    /// Lookup for a professor by identity failed.
    ProfessorNotFound(ProfessorId),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DepartmentNotFound(id) => write!(f, "department not found: {id}"),
            Self::ProfessorNotFound(id) => write!(f, "professor not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::DepartmentNotFound(id) => Self::DepartmentNotFound(id),
            RepoError::ProfessorNotFound(id) => Self::ProfessorNotFound(id),
            other => Self::Repo(other),
        }
    }
}
