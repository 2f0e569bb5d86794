//! Professor repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over `professors` storage.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `Professor::validate()` before SQL mutations.
//! - `save` inserts when the record has no identity, updates otherwise.
//! - Department existence is the service's check; this layer never rejects
//!   a write for referential reasons (the schema foreign key remains as a
//!   storage backstop only).
//! - Email uniqueness is enforced by the `UNIQUE` column, not by code.

use crate::model::professor::{Professor, ProfessorId};
use crate::repo::{ensure_connection_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const PROFESSOR_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    email,
    title,
    department_id
FROM professors";

const PROFESSOR_COLUMNS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "email",
    "title",
    "department_id",
];

/// Repository interface for professor CRUD operations.
pub trait ProfessorRepository {
    /// Returns every stored professor, ordered by identity.
    fn find_all(&self) -> RepoResult<Vec<Professor>>;
    /// Returns one professor, or `None` when the id is unknown.
    fn find_by_id(&self, id: ProfessorId) -> RepoResult<Option<Professor>>;
    /// Inserts (no identity) or updates (identity present) one record and
    /// returns the persisted record with its identity populated.
    fn save(&self, professor: &Professor) -> RepoResult<Professor>;
    /// Checks row presence without materializing the record.
    fn exists_by_id(&self, id: ProfessorId) -> RepoResult<bool>;
    /// Removes the row if present.
    fn delete_by_id(&self, id: ProfessorId) -> RepoResult<()>;
}

/// SQLite-backed professor repository.
pub struct SqliteProfessorRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProfessorRepository<'conn> {
    /// Creates a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, "professors", PROFESSOR_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl ProfessorRepository for SqliteProfessorRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Professor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROFESSOR_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut professors = Vec::new();
        while let Some(row) = rows.next()? {
            professors.push(parse_professor_row(row)?);
        }
        Ok(professors)
    }

    fn find_by_id(&self, id: ProfessorId) -> RepoResult<Option<Professor>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROFESSOR_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_professor_row(row)?));
        }
        Ok(None)
    }

    fn save(&self, professor: &Professor) -> RepoResult<Professor> {
        professor.validate()?;

        match professor.id {
            None => {
                self.conn.execute(
                    "INSERT INTO professors (
                        first_name,
                        last_name,
                        email,
                        title,
                        department_id
                    ) VALUES (?1, ?2, ?3, ?4, ?5);",
                    params![
                        professor.first_name.as_str(),
                        professor.last_name.as_str(),
                        professor.email.as_str(),
                        professor.title.as_str(),
                        professor.department_id,
                    ],
                )?;
                let mut saved = professor.clone();
                saved.id = Some(self.conn.last_insert_rowid());
                Ok(saved)
            }
            Some(id) => {
                let changed = self.conn.execute(
                    "UPDATE professors
                     SET
                        first_name = ?1,
                        last_name = ?2,
                        email = ?3,
                        title = ?4,
                        department_id = ?5,
                        updated_at = (strftime('%s', 'now') * 1000)
                     WHERE id = ?6;",
                    params![
                        professor.first_name.as_str(),
                        professor.last_name.as_str(),
                        professor.email.as_str(),
                        professor.title.as_str(),
                        professor.department_id,
                        id,
                    ],
                )?;
                if changed == 0 {
                    return Err(RepoError::ProfessorNotFound(id));
                }
                Ok(professor.clone())
            }
        }
    }

    fn exists_by_id(&self, id: ProfessorId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM professors WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn delete_by_id(&self, id: ProfessorId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM professors WHERE id = ?1;", [id])?;
        Ok(())
    }
}

fn parse_professor_row(row: &Row<'_>) -> RepoResult<Professor> {
    let professor = Professor {
        id: Some(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        email: row.get("email")?,
        title: row.get("title")?,
        department_id: row.get("department_id")?,
    };
    professor.validate()?;
    Ok(professor)
}
