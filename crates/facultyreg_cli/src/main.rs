//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `facultyreg_core` wiring.
//! - Keep output deterministic for quick local sanity checks.

use facultyreg_core::db::open_db_in_memory;
use facultyreg_core::seed::seed_registry;
use facultyreg_core::{
    DepartmentService, ProfessorService, SqliteDepartmentRepository, SqliteProfessorRepository,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("facultyreg_core ping={}", facultyreg_core::ping());
    println!("facultyreg_core version={}", facultyreg_core::core_version());

    match smoke_registry() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("registry smoke check failed: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Seeds an in-memory registry and lists it through both services.
fn smoke_registry() -> Result<(), Box<dyn Error>> {
    let conn = open_db_in_memory()?;

    let summary = seed_registry(
        &SqliteDepartmentRepository::try_new(&conn)?,
        &SqliteProfessorRepository::try_new(&conn)?,
    )?;
    println!(
        "seeded departments={} professors={}",
        summary.departments, summary.professors
    );

    let departments = DepartmentService::new(SqliteDepartmentRepository::try_new(&conn)?);
    let professors = ProfessorService::new(
        SqliteProfessorRepository::try_new(&conn)?,
        SqliteDepartmentRepository::try_new(&conn)?,
    );
    println!(
        "listed departments={} professors={}",
        departments.find_all()?.len(),
        professors.find_all()?.len()
    );

    Ok(())
}
