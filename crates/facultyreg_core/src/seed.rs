//! Initial-data loading for the registry.
//!
//! # Responsibility
//! - Load the fixture departments and professors by calling `save`
//!   directly on both gateways.
//!
//! # Invariants
//! - Seeding is skipped when departments already exist.
//! - Every seeded professor references a department saved in the same run,
//!   so the relationship invariant holds without service involvement.
//!
//! Seeding is a collaborator of the core, not part of its service
//! contract; callers run it before treating the registry as ready.

use crate::model::department::{Department, DepartmentId};
use crate::model::professor::Professor;
use crate::repo::department_repo::DepartmentRepository;
use crate::repo::professor_repo::ProfessorRepository;
use crate::repo::{RepoError, RepoResult};
use log::info;
use std::collections::HashMap;

/// (name, code, year established)
const DEPARTMENT_FIXTURES: &[(&str, &str, i32)] = &[
    ("Computer Science", "CS", 1995),
    ("History and Politics", "HIST", 1980),
    ("Physics and Mathematics", "PHYS", 2000),
    ("Biology", "BIO", 1975),
    ("Chemistry", "CHEM", 1990),
    ("English Literature", "ENG", 1965),
    ("Fine Arts", "ART", 2005),
    ("Economics", "ECON", 1985),
    ("Law and Justice", "LAW", 2010),
    ("Philosophy", "PHIL", 1970),
];

/// (first name, last name, email, title, department code)
const PROFESSOR_FIXTURES: &[(&str, &str, &str, &str, &str)] = &[
    ("Alice", "Smith", "a.smith@uni.ca", "Full Professor", "CS"),
    ("Bob", "Johnson", "b.johnson@uni.ca", "Assistant Professor", "CS"),
    ("Carol", "Davis", "c.davis@uni.ca", "Lecturer", "CS"),
    ("David", "Brown", "d.brown@uni.ca", "Full Professor", "HIST"),
    ("Eve", "Miller", "e.miller@uni.ca", "Associate Professor", "HIST"),
    ("Frank", "Wilson", "f.wilson@uni.ca", "Assistant Professor", "PHYS"),
    ("Grace", "Moore", "g.moore@uni.ca", "Lecturer", "PHYS"),
    ("Henry", "Taylor", "h.taylor@uni.ca", "Full Professor", "BIO"),
    ("Ivy", "Anderson", "i.anderson@uni.ca", "Assistant Professor", "CHEM"),
    ("Jack", "Thomas", "j.thomas@uni.ca", "Associate Professor", "ENG"),
    ("Kate", "Jackson", "k.jackson@uni.ca", "Lecturer", "ART"),
    ("Leo", "White", "l.white@uni.ca", "Full Professor", "ECON"),
];

/// Counts of records written by one seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub professors: usize,
}

/// Loads the fixture data through both gateways.
///
/// Returns zero counts without writing when departments already exist.
pub fn seed_registry(
    departments: &impl DepartmentRepository,
    professors: &impl ProfessorRepository,
) -> RepoResult<SeedSummary> {
    if !departments.find_all()?.is_empty() {
        info!("event=seed_data module=seed status=skipped reason=departments_present");
        return Ok(SeedSummary {
            departments: 0,
            professors: 0,
        });
    }

    let mut ids_by_code: HashMap<&str, DepartmentId> = HashMap::new();
    for (name, code, year_established) in DEPARTMENT_FIXTURES {
        let saved = departments.save(&Department::new(*name, *code, *year_established))?;
        if let Some(id) = saved.id {
            ids_by_code.insert(*code, id);
        }
    }

    for (first_name, last_name, email, title, code) in PROFESSOR_FIXTURES {
        let department_id = ids_by_code.get(code).copied().ok_or_else(|| {
            RepoError::InvalidData(format!(
                "seed fixture references unknown department code `{code}`"
            ))
        })?;
        professors.save(&Professor::new(
            *first_name,
            *last_name,
            *email,
            *title,
            department_id,
        ))?;
    }

    let summary = SeedSummary {
        departments: DEPARTMENT_FIXTURES.len(),
        professors: PROFESSOR_FIXTURES.len(),
    };
    info!(
        "event=seed_data module=seed status=ok departments={} professors={}",
        summary.departments, summary.professors
    );
    Ok(summary)
}
