//! Department use-case service.
//!
//! # Responsibility
//! - Provide the CRUD surface for departments.
//!
//! # Invariants
//! - Existence checks run before any write; a failed check leaves the
//!   store untouched.
//! - Deleting a department that still has professors is refused by the
//!   storage foreign key and surfaces as a repository error.

use crate::model::department::DepartmentId;
use crate::repo::department_repo::DepartmentRepository;
use crate::service::{ServiceError, ServiceResult};
use crate::transfer::department::{self, DepartmentRequest, DepartmentResponse};

/// Use-case service for department CRUD.
pub struct DepartmentService<D: DepartmentRepository> {
    departments: D,
}

impl<D: DepartmentRepository> DepartmentService<D> {
    /// Creates a service from an explicit repository implementation.
    pub fn new(departments: D) -> Self {
        Self { departments }
    }

    /// Returns every stored department mapped to the response shape.
    pub fn find_all(&self) -> ServiceResult<Vec<DepartmentResponse>> {
        let departments = self.departments.find_all()?;
        Ok(departments.iter().map(department::to_response).collect())
    }

    /// Returns one department by identity.
    pub fn find_by_id(&self, id: DepartmentId) -> ServiceResult<DepartmentResponse> {
        let record = self
            .departments
            .find_by_id(id)?
            .ok_or(ServiceError::DepartmentNotFound(id))?;
        Ok(department::to_response(&record))
    }

    /// Creates a new department.
    pub fn create(&self, request: &DepartmentRequest) -> ServiceResult<DepartmentResponse> {
        let saved = self.departments.save(&department::to_entity(request))?;
        Ok(department::to_response(&saved))
    }

    /// Replaces all scalar fields of one department as a single unit.
    pub fn update(
        &self,
        id: DepartmentId,
        request: &DepartmentRequest,
    ) -> ServiceResult<DepartmentResponse> {
        if self.departments.find_by_id(id)?.is_none() {
            return Err(ServiceError::DepartmentNotFound(id));
        }

        let mut updated = department::to_entity(request);
        updated.id = Some(id);
        let saved = self.departments.save(&updated)?;
        Ok(department::to_response(&saved))
    }

    /// Deletes one department by identity.
    pub fn delete(&self, id: DepartmentId) -> ServiceResult<()> {
        if !self.departments.exists_by_id(id)? {
            return Err(ServiceError::DepartmentNotFound(id));
        }
        self.departments.delete_by_id(id)?;
        Ok(())
    }
}
