use chrono::{Datelike, Utc};
use facultyreg_core::{
    Department, DepartmentValidationError, Professor, ProfessorValidationError,
};

#[test]
fn new_department_has_no_identity() {
    let department = Department::new("Computer Science", "CS", 1995);
    assert_eq!(department.id, None);
}

#[test]
fn department_established_this_year_is_valid() {
    let department = Department::new("Law and Justice", "LAW", Utc::now().year());
    assert!(department.validate().is_ok());
}

#[test]
fn department_validation_rejects_blank_fields() {
    let blank_name = Department::new("   ", "CS", 1995);
    assert_eq!(
        blank_name.validate().unwrap_err(),
        DepartmentValidationError::BlankName
    );

    let blank_code = Department::new("Computer Science", "", 1995);
    assert_eq!(
        blank_code.validate().unwrap_err(),
        DepartmentValidationError::BlankCode
    );
}

#[test]
fn department_validation_rejects_future_year() {
    let next_year = Utc::now().year() + 1;
    let department = Department::new("Computer Science", "CS", next_year);

    match department.validate().unwrap_err() {
        DepartmentValidationError::YearInFuture {
            year_established,
            current_year,
        } => {
            assert_eq!(year_established, next_year);
            assert_eq!(current_year, next_year - 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn new_professor_has_no_identity_and_keeps_department_reference() {
    let professor = Professor::new("Alice", "Smith", "a.smith@uni.ca", "Lecturer", 1);
    assert_eq!(professor.id, None);
    assert_eq!(professor.department_id, 1);
}

#[test]
fn professor_validation_rejects_blank_names() {
    let blank_first = Professor::new("", "Smith", "a.smith@uni.ca", "Lecturer", 1);
    assert_eq!(
        blank_first.validate().unwrap_err(),
        ProfessorValidationError::BlankFirstName
    );

    let blank_last = Professor::new("Alice", " ", "a.smith@uni.ca", "Lecturer", 1);
    assert_eq!(
        blank_last.validate().unwrap_err(),
        ProfessorValidationError::BlankLastName
    );
}

#[test]
fn professor_validation_rejects_bad_email() {
    let blank = Professor::new("Alice", "Smith", "", "Lecturer", 1);
    assert_eq!(
        blank.validate().unwrap_err(),
        ProfessorValidationError::BlankEmail
    );

    let malformed = Professor::new("Alice", "Smith", "not-an-address", "Lecturer", 1);
    assert!(matches!(
        malformed.validate().unwrap_err(),
        ProfessorValidationError::InvalidEmail(email) if email == "not-an-address"
    ));
}

#[test]
fn empty_title_is_allowed() {
    let professor = Professor::new("Alice", "Smith", "a.smith@uni.ca", "", 1);
    assert!(professor.validate().is_ok());
}

#[test]
fn entities_round_trip_through_serde() {
    let mut department = Department::new("Philosophy", "PHIL", 1970);
    department.id = Some(10);
    let json = serde_json::to_string(&department).unwrap();
    let back: Department = serde_json::from_str(&json).unwrap();
    assert_eq!(back, department);

    let mut professor = Professor::new("Leo", "White", "l.white@uni.ca", "Full Professor", 10);
    professor.id = Some(12);
    let json = serde_json::to_string(&professor).unwrap();
    let back: Professor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, professor);
}
