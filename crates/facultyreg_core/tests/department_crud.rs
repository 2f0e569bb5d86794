use facultyreg_core::db::migrations::latest_version;
use facultyreg_core::db::open_db_in_memory;
use facultyreg_core::{
    Department, DepartmentRepository, DepartmentValidationError, RepoError,
    SqliteDepartmentRepository,
};
use rusqlite::Connection;

#[test]
fn save_inserts_and_assigns_identity() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Department::new("Computer Science", "CS", 1995))
        .unwrap();
    let id = saved.id.unwrap();

    let loaded = repo.find_by_id(id).unwrap().unwrap();
    assert_eq!(loaded, saved);
    assert_eq!(loaded.name, "Computer Science");
    assert_eq!(loaded.code, "CS");
    assert_eq!(loaded.year_established, 1995);
}

#[test]
fn save_assigns_distinct_identities() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let first = repo.save(&Department::new("Biology", "BIO", 1975)).unwrap();
    let second = repo
        .save(&Department::new("Chemistry", "CHEM", 1990))
        .unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn save_updates_existing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let mut department = repo
        .save(&Department::new("History", "HIST", 1980))
        .unwrap();
    department.name = "History and Politics".to_string();
    department.year_established = 1979;
    repo.save(&department).unwrap();

    let loaded = repo.find_by_id(department.id.unwrap()).unwrap().unwrap();
    assert_eq!(loaded.name, "History and Politics");
    assert_eq!(loaded.year_established, 1979);
}

#[test]
fn save_with_unknown_identity_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let mut department = Department::new("Economics", "ECON", 1985);
    department.id = Some(404);

    let err = repo.save(&department).unwrap_err();
    assert!(matches!(err, RepoError::DepartmentNotFound(404)));
}

#[test]
fn find_all_returns_rows_ordered_by_identity() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let first = repo
        .save(&Department::new("Fine Arts", "ART", 2005))
        .unwrap();
    let second = repo
        .save(&Department::new("Philosophy", "PHIL", 1970))
        .unwrap();

    let all = repo.find_all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id, first.id);
    assert_eq!(all[1].id, second.id);
}

#[test]
fn exists_by_id_reports_presence_without_materializing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let saved = repo
        .save(&Department::new("English Literature", "ENG", 1965))
        .unwrap();

    assert!(repo.exists_by_id(saved.id.unwrap()).unwrap());
    assert!(!repo.exists_by_id(999).unwrap());
}

#[test]
fn delete_by_id_removes_row_and_is_noop_when_absent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    // deleting an absent row is not an error at this layer
    repo.delete_by_id(999).unwrap();

    let saved = repo
        .save(&Department::new("Law and Justice", "LAW", 2010))
        .unwrap();
    let id = saved.id.unwrap();
    repo.delete_by_id(id).unwrap();

    assert!(repo.find_by_id(id).unwrap().is_none());
}

#[test]
fn validation_failure_blocks_writes() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::try_new(&conn).unwrap();

    let err = repo.save(&Department::new("  ", "CS", 1995)).unwrap_err();
    assert!(matches!(
        err,
        RepoError::DepartmentValidation(DepartmentValidationError::BlankName)
    ));

    let err = repo
        .save(&Department::new("Computer Science", "CS", 9999))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::DepartmentValidation(DepartmentValidationError::YearInFuture { .. })
    ));

    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteDepartmentRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteDepartmentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("departments"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE departments (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            code TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteDepartmentRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "departments",
            column: "year_established"
        })
    ));
}
