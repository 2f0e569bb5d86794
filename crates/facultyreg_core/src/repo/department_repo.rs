//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `departments` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Department::validate()` before SQL mutations.
//! - `save` inserts when the record has no identity, updates otherwise.
//! - `delete_by_id` is a no-op for absent rows; existence is the caller's
//!   check, not this layer's.

use crate::model::department::{Department, DepartmentId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    code,
    year_established
FROM departments";

const DEPARTMENT_COLUMNS: &[&str] = &["id", "name", "code", "year_established"];

/// Repository interface for department CRUD operations.
pub trait DepartmentRepository {
    /// Returns every stored department, ordered by identity.
    fn find_all(&self) -> RepoResult<Vec<Department>>;
    /// Returns one department, or `None` when the id is unknown.
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Inserts (no identity) or updates (identity present) one record and
    /// returns the persisted record with its identity populated.
    fn save(&self, department: &Department) -> RepoResult<Department>;
    /// Checks row presence without materializing the record.
    fn exists_by_id(&self, id: DepartmentId) -> RepoResult<bool>;
    /// Removes the row if present.
    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()>;
}

/// SQLite-backed department repository.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "departments", DEPARTMENT_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();
        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }
        Ok(departments)
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }
        Ok(None)
    }

    fn save(&self, department: &Department) -> RepoResult<Department> {
        department.validate()?;

        match department.id {
            None => {
                self.conn.execute(
                    "INSERT INTO departments (name, code, year_established)
                     VALUES (?1, ?2, ?3);",
                    params![
                        department.name.as_str(),
                        department.code.as_str(),
                        department.year_established,
                    ],
                )?;
                let mut saved = department.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE departments
                     SET
                        name = ?1,
                        code = ?2,
                        year_established = ?3,
                        updated_at = (strftime('%s', 'now') * 1000)
                     WHERE id = ?4;",
                    params![
                        department.name.as_str(),
                        department.code.as_str(),
                        department.year_established,
                        id,
                    ],
                )?;
                if changed == 0 {
                    return Err(RepoError::DepartmentNotFound(id));
                }
                Ok(department.clone())
            }
        }
    }

    fn exists_by_id(&self, id: DepartmentId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM departments WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn delete_by_id(&self, id: DepartmentId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    let department = Department {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        code: row.get("code")?,
        year_established: row.get("year_established")?,
    };
    department.validate()?;
    Ok(department)
}
