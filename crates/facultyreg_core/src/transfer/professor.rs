//! Professor transfer shapes and mapping.
//!
//! # Responsibility
//! - Convert professor entities to/from externally exposed records.
//!
//! # Invariants
//! - `to_entity` copies scalar fields only and attaches the identity of a
//!   department the caller has already resolved; it never performs the
//!   resolution itself. Taking the resolved `Department` (not a raw id)
//!   makes resolve-before-attach a compile-time property.

use crate::model::department::{Department, DepartmentId};
use crate::model::professor::{Professor, ProfessorId};
use crate::transfer::department::{self, DepartmentSummary};
use serde::{Deserialize, Serialize};

/// Input shape for professor create/update operations.
///
/// Excludes the store-assigned identity; carries the target department
/// by identity only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessorRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub department_id: DepartmentId,
}

/// Externally exposed professor record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessorResponse {
    pub id: ProfessorId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    /// Compact reference to the owning department.
    pub department: DepartmentSummary,
}

/// Maps one stored professor and its resolved department to the response
/// shape.
///
/// # Invariants
/// - Store-loaded rows always carry an identity; callers never pass
///   unsaved drafts here.
/// - `department` is the row `professor.department_id` resolves to.
pub fn to_response(professor: &Professor, department: &Department) -> ProfessorResponse {
    ProfessorResponse {
        id: professor.id.unwrap_or_default(),
        first_name: professor.first_name.clone(),
        last_name: professor.last_name.clone(),
        email: professor.email.clone(),
        title: professor.title.clone(),
        department: department::to_summary(department),
    }
}

/// Builds an unsaved professor record from a request and an
/// already-resolved department.
///
/// # Invariants
/// - `department` is a store-loaded row and always carries an identity.
pub fn to_entity(request: &ProfessorRequest, department: &Department) -> Professor {
    Professor::new(
        request.first_name.clone(),
        request.last_name.clone(),
        request.email.clone(),
        request.title.clone(),
        department.id.unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::{to_entity, to_response, ProfessorRequest};
    use crate::model::department::Department;

    fn cs_department() -> Department {
        let mut department = Department::new("Computer Science", "CS", 1995);
        department.id = Some(1);
        department
    }

    fn lecturer_request() -> ProfessorRequest {
        ProfessorRequest {
            first_name: "Alice".to_string(),
            last_name: "Smith".to_string(),
            email: "a.smith@uni.ca".to_string(),
            title: "Lecturer".to_string(),
            department_id: 1,
        }
    }

    #[test]
    fn request_to_entity_copies_scalars_and_attaches_resolved_department() {
        let entity = to_entity(&lecturer_request(), &cs_department());

        assert_eq!(entity.id, None);
        assert_eq!(entity.first_name, "Alice");
        assert_eq!(entity.last_name, "Smith");
        assert_eq!(entity.email, "a.smith@uni.ca");
        assert_eq!(entity.title, "Lecturer");
        assert_eq!(entity.department_id, 1);
    }

    #[test]
    fn entity_to_response_round_trip_preserves_scalars() {
        let department = cs_department();
        let mut entity = to_entity(&lecturer_request(), &department);
        entity.id = Some(5);

        let response = to_response(&entity, &department);
        assert_eq!(response.id, 5);
        assert_eq!(response.department.id, 1);
        assert_eq!(response.department.code, "CS");

        let back = to_entity(
            &ProfessorRequest {
                first_name: response.first_name.clone(),
                last_name: response.last_name.clone(),
                email: response.email.clone(),
                title: response.title.clone(),
                department_id: response.department.id,
            },
            &department,
        );
        assert_eq!(back.first_name, entity.first_name);
        assert_eq!(back.last_name, entity.last_name);
        assert_eq!(back.email, entity.email);
        assert_eq!(back.title, entity.title);
        assert_eq!(back.department_id, entity.department_id);
    }

    #[test]
    fn response_serializes_with_expected_field_names() {
        let department = cs_department();
        let mut entity = to_entity(&lecturer_request(), &department);
        entity.id = Some(5);

        let json = serde_json::to_value(to_response(&entity, &department)).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["first_name"], "Alice");
        assert_eq!(json["last_name"], "Smith");
        assert_eq!(json["email"], "a.smith@uni.ca");
        assert_eq!(json["title"], "Lecturer");
        assert_eq!(json["department"]["id"], 1);
        assert_eq!(json["department"]["name"], "Computer Science");
    }
}
