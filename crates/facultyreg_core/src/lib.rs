//! Core domain logic for the faculty registry.
//! This crate is the single source of truth for business invariants:
//! every professor write is guarded by department existence here, not in
//! any outer transport layer.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod transfer;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::department::{Department, DepartmentId, DepartmentValidationError};
pub use model::professor::{Professor, ProfessorId, ProfessorValidationError};
pub use repo::department_repo::{DepartmentRepository, SqliteDepartmentRepository};
pub use repo::professor_repo::{ProfessorRepository, SqliteProfessorRepository};
pub use repo::{RepoError, RepoResult};
pub use service::department_service::DepartmentService;
pub use service::professor_service::ProfessorService;
pub use service::{ServiceError, ServiceResult};
pub use transfer::department::{DepartmentRequest, DepartmentResponse, DepartmentSummary};
pub use transfer::professor::{ProfessorRequest, ProfessorResponse};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
