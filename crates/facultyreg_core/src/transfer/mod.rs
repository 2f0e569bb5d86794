//! Transfer shapes and entity/DTO mapping.
//!
//! # Responsibility
//! - Define the externally exposed request/response records.
//! - Convert between stored entities and transfer shapes as pure functions.
//!
//! # Invariants
//! - Mapping functions perform no I/O and never touch a repository;
//!   relationship resolution belongs to the service layer.
//! - Responses expose a department identity/summary, never a nested
//!   object graph.

pub mod department;
pub mod professor;
