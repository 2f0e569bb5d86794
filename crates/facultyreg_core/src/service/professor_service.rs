//! Professor use-case service.
//!
//! # Responsibility
//! - Provide the CRUD surface for professors.
//! - Enforce that every professor write references an existing department.
//!
//! # Invariants
//! - The department is resolved before any professor record is built or
//!   persisted; no orphan row is ever written, independent of the storage
//!   foreign key.
//! - The department reference is re-validated on every update because it
//!   is mutable.
//! - Updates replace the stored record with one fully-formed value; a
//!   failed lookup leaves the prior record intact, including its
//!   department reference.

use crate::model::department::{Department, DepartmentId};
use crate::model::professor::ProfessorId;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::professor_repo::ProfessorRepository;
use crate::service::{ServiceError, ServiceResult};
use crate::transfer::professor::{self, ProfessorRequest, ProfessorResponse};
use std::collections::HashMap;

/// Use-case service for professor CRUD, wired to both entity gateways.
pub struct ProfessorService<P: ProfessorRepository, D: DepartmentRepository> {
    professors: P,
    departments: D,
}

impl<P: ProfessorRepository, D: DepartmentRepository> ProfessorService<P, D> {
    /// Creates a service from explicit repository implementations.
    pub fn new(professors: P, departments: D) -> Self {
        Self {
            professors,
            departments,
        }
    }

    /// Returns every stored professor mapped to the response shape.
    ///
    /// Department summaries are resolved from a single pass over the
    /// department gateway. A dangling reference is surfaced as
    /// `DepartmentNotFound` rather than masked.
    pub fn find_all(&self) -> ServiceResult<Vec<ProfessorResponse>> {
        let departments: HashMap<DepartmentId, Department> = self
            .departments
            .find_all()?
            .into_iter()
            .filter_map(|department| department.id.map(|id| (id, department)))
            .collect();

        let mut responses = Vec::new();
        for record in self.professors.find_all()? {
            let department = departments
                .get(&record.department_id)
                .ok_or(ServiceError::DepartmentNotFound(record.department_id))?;
            responses.push(professor::to_response(&record, department));
        }
        Ok(responses)
    }

    /// Returns one professor by identity.
    pub fn find_by_id(&self, id: ProfessorId) -> ServiceResult<ProfessorResponse> {
        let record = self
            .professors
            .find_by_id(id)?
            .ok_or(ServiceError::ProfessorNotFound(id))?;
        let department = self.resolve_department(record.department_id)?;
        Ok(professor::to_response(&record, &department))
    }

    /// Creates a new professor assigned to an existing department.
    ///
    /// # Contract
    /// - Fails with `DepartmentNotFound` before any professor record is
    ///   constructed or persisted.
    /// - Returns the response carrying the store-assigned identity.
    pub fn create(&self, request: &ProfessorRequest) -> ServiceResult<ProfessorResponse> {
        let department = self.resolve_department(request.department_id)?;
        let record = professor::to_entity(request, &department);
        let saved = self.professors.save(&record)?;
        Ok(professor::to_response(&saved, &department))
    }

    /// Replaces all scalar fields and the department reference of one
    /// professor as a single unit.
    ///
    /// # Contract
    /// - Fails with `ProfessorNotFound` when the target id is unknown.
    /// - Fails with `DepartmentNotFound` when the requested department id
    ///   does not resolve; the stored record is untouched in both cases.
    pub fn update(
        &self,
        id: ProfessorId,
        request: &ProfessorRequest,
    ) -> ServiceResult<ProfessorResponse> {
        if self.professors.find_by_id(id)?.is_none() {
            return Err(ServiceError::ProfessorNotFound(id));
        }
        let department = self.resolve_department(request.department_id)?;

        let mut updated = professor::to_entity(request, &department);
        updated.id = Some(id);
        let saved = self.professors.save(&updated)?;
        Ok(professor::to_response(&saved, &department))
    }

    /// Deletes one professor by identity.
    ///
    /// # Contract
    /// - Fails with `ProfessorNotFound` when the id is unknown, so callers
    ///   can tell "deleted" from "nothing to delete".
    pub fn delete(&self, id: ProfessorId) -> ServiceResult<()> {
        if !self.professors.exists_by_id(id)? {
            return Err(ServiceError::ProfessorNotFound(id));
        }
        self.professors.delete_by_id(id)?;
        Ok(())
    }

    fn resolve_department(&self, id: DepartmentId) -> ServiceResult<Department> {
        self.departments
            .find_by_id(id)?
            .ok_or(ServiceError::DepartmentNotFound(id))
    }
}
