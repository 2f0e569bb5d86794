//! Department transfer shapes and mapping.

use crate::model::department::{Department, DepartmentId};
use serde::{Deserialize, Serialize};

/// Input shape for department create/update operations.
///
/// Excludes the store-assigned identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRequest {
    pub name: String,
    pub code: String,
    pub year_established: i32,
}

/// Externally exposed department record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentResponse {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
    pub year_established: i32,
}

/// Compact department reference embedded in professor responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub id: DepartmentId,
    pub name: String,
    pub code: String,
}

/// Maps one stored department to the response shape.
///
/// # Invariants
/// - Store-loaded rows always carry an identity; callers never pass
///   unsaved drafts here.
pub fn to_response(department: &Department) -> DepartmentResponse {
    DepartmentResponse {
        id: department.id.unwrap_or_default(),
        name: department.name.clone(),
        code: department.code.clone(),
        year_established: department.year_established,
    }
}

/// Maps one stored department to the compact summary shape.
///
/// # Invariants
/// - Store-loaded rows always carry an identity; callers never pass
///   unsaved drafts here.
pub fn to_summary(department: &Department) -> DepartmentSummary {
    DepartmentSummary {
        id: department.id.unwrap_or_default(),
        name: department.name.clone(),
        code: department.code.clone(),
    }
}

/// Builds an unsaved department record from a request.
pub fn to_entity(request: &DepartmentRequest) -> Department {
    Department::new(
        request.name.clone(),
        request.code.clone(),
        request.year_established,
    )
}

#[cfg(test)]
mod tests {
    use super::{to_entity, to_response, to_summary, DepartmentRequest};
    use crate::model::department::Department;

    #[test]
    fn request_to_entity_copies_scalars_and_leaves_identity_unset() {
        let request = DepartmentRequest {
            name: "Computer Science".to_string(),
            code: "CS".to_string(),
            year_established: 1995,
        };

        let entity = to_entity(&request);
        assert_eq!(entity.id, None);
        assert_eq!(entity.name, "Computer Science");
        assert_eq!(entity.code, "CS");
        assert_eq!(entity.year_established, 1995);
    }

    #[test]
    fn entity_to_response_round_trip_preserves_scalars() {
        let mut entity = Department::new("History and Politics", "HIST", 1980);
        entity.id = Some(7);

        let response = to_response(&entity);
        assert_eq!(response.id, 7);

        let back = to_entity(&DepartmentRequest {
            name: response.name.clone(),
            code: response.code.clone(),
            year_established: response.year_established,
        });
        assert_eq!(back.name, entity.name);
        assert_eq!(back.code, entity.code);
        assert_eq!(back.year_established, entity.year_established);
    }

    #[test]
    fn response_serializes_with_expected_field_names() {
        let mut entity = Department::new("Physics and Mathematics", "PHYS", 2000);
        entity.id = Some(3);

        let json = serde_json::to_value(to_response(&entity)).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Physics and Mathematics");
        assert_eq!(json["code"], "PHYS");
        assert_eq!(json["year_established"], 2000);
    }

    #[test]
    fn summary_exposes_identity_name_and_code_only() {
        let mut entity = Department::new("Biology", "BIO", 1975);
        entity.id = Some(4);

        let json = serde_json::to_value(to_summary(&entity)).unwrap();
        assert_eq!(json["id"], 4);
        assert_eq!(json["name"], "Biology");
        assert_eq!(json["code"], "BIO");
        assert!(json.get("year_established").is_none());
    }
}
