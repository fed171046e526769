// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod render;

use clap::{Parser, Subcommand};
use error::CliError;
use roster::{AppState, Command, RosterStore, SEED_ACADEMIC_YEAR};
use roster_domain::{DepartmentName, Role, Teacher, TeacherId};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};

/// Roster - views over the volunteer teacher roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON snapshot. If not provided, uses the seed roster.
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Academic year to select before rendering
    #[arg(short, long)]
    year: Option<u16>,

    /// Year used for service lengths. Defaults to the current year.
    #[arg(long)]
    reference_year: Option<u16>,

    #[command(subcommand)]
    view: View,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum View {
    /// Headline counts, department load and anniversaries
    Dashboard,
    /// The department catalog
    Departments,
    /// One department's roster
    Department {
        /// Department name, e.g. `Junior` or `Puitling`
        name: DepartmentName,
        /// Only list entries holding this role, e.g. `Leader` or `"Asst. Leader"`
        #[arg(long)]
        role: Option<Role>,
    },
    /// Teachers with their assignment history
    Teachers {
        /// Only list teachers whose name contains this text
        #[arg(long)]
        search: Option<String>,
    },
    /// One teacher by id
    Teacher {
        /// Teacher id, e.g. `t001`
        id: String,
    },
    /// The first teacher whose name contains the term
    Search {
        /// Text to look for
        term: String,
    },
    /// Tenure, department and service reports
    Reports,
    /// Assignments that reference unknown teachers
    Orphans,
    /// Print the roster as a JSON snapshot
    Export,
}

fn main() -> ExitCode {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(out) => {
            print!("{out}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn current_year() -> u16 {
    u16::try_from(time::OffsetDateTime::now_utc().year()).unwrap_or(SEED_ACADEMIC_YEAR)
}

fn read_snapshot(path: &Path) -> Result<AppState, CliError> {
    let json: String = std::fs::read_to_string(path).map_err(|source| CliError::ReadSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(AppState::from_snapshot_json(&json)?)
}

fn load_store(args: &Args) -> Result<RosterStore, CliError> {
    let mut store: RosterStore = if let Some(path) = &args.snapshot {
        info!("Loading roster from {}", path.display());
        RosterStore::new(read_snapshot(path)?)
    } else {
        info!("Using seed roster");
        RosterStore::seeded()
    };

    if let Some(year) = args.year {
        store.dispatch(Command::SetAcademicYear { year })?;
    }
    Ok(store)
}

fn run(args: &Args) -> Result<String, CliError> {
    let store: RosterStore = load_store(args)?;
    let reference_year: u16 = args.reference_year.unwrap_or_else(current_year);
    render_view(store.state(), &args.view, reference_year)
}

fn render_view(state: &AppState, view: &View, reference_year: u16) -> Result<String, CliError> {
    let mut out: String = String::new();
    match view {
        View::Dashboard => render::render_dashboard(&mut out, state, reference_year)?,
        View::Departments => render::render_departments(&mut out, state)?,
        View::Department { name, role } => {
            render::render_department(&mut out, state, *name, *role)?;
        }
        View::Teachers { search } => {
            render::render_teachers(&mut out, state, search.as_deref())?;
        }
        View::Teacher { id } => {
            let teacher: &Teacher = state
                .teacher(&TeacherId::new(id))
                .ok_or_else(|| CliError::TeacherNotFound(id.clone()))?;
            render::render_teacher(&mut out, state, teacher)?;
        }
        View::Search { term } => render::render_search(&mut out, state, term)?,
        View::Reports => render::render_reports(&mut out, state, reference_year)?,
        View::Orphans => render::render_orphans(&mut out, state)?,
        View::Export => {
            out = state.to_snapshot_json()?;
            out.push('\n');
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use roster::seed_state;

    #[test]
    fn test_parse_department_view() {
        let args: Args = Args::try_parse_from(["roster", "department", "puitling"]).unwrap();

        assert_eq!(
            args.view,
            View::Department {
                name: DepartmentName::Adult,
                role: None,
            }
        );
        assert!(args.snapshot.is_none());
    }

    #[test]
    fn test_parse_department_role_filter() {
        let args: Args = Args::try_parse_from([
            "roster",
            "department",
            "Junior",
            "--role",
            "assistant leader",
        ])
        .unwrap();

        assert_eq!(
            args.view,
            View::Department {
                name: DepartmentName::Junior,
                role: Some(Role::AssistantLeader),
            }
        );
        assert!(
            Args::try_parse_from(["roster", "department", "Junior", "--role", "Deacon"]).is_err()
        );
    }

    #[test]
    fn test_parse_rejects_unknown_department() {
        assert!(Args::try_parse_from(["roster", "department", "Nursery"]).is_err());
    }

    #[test]
    fn test_parse_global_options() {
        let args: Args = Args::try_parse_from([
            "roster",
            "--year",
            "2023",
            "--reference-year",
            "2030",
            "teachers",
            "--search",
            "pu",
        ])
        .unwrap();

        assert_eq!(args.year, Some(2023));
        assert_eq!(args.reference_year, Some(2030));
        assert_eq!(
            args.view,
            View::Teachers {
                search: Some(String::from("pu"))
            }
        );
    }

    #[test]
    fn test_year_option_selects_academic_year() {
        let args: Args = Args::try_parse_from(["roster", "-y", "2023", "dashboard"]).unwrap();

        let store: RosterStore = load_store(&args).unwrap();

        assert_eq!(store.state().current_academic_year, 2023);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_unknown_teacher_id_is_an_error() {
        let view: View = View::Teacher {
            id: String::from("t999"),
        };

        let err: CliError = render_view(&seed_state(), &view, 2024).unwrap_err();

        assert!(matches!(err, CliError::TeacherNotFound(ref id) if id == "t999"));
    }

    #[test]
    fn test_missing_snapshot_file_is_an_error() {
        let args: Args =
            Args::try_parse_from(["roster", "-s", "/nonexistent/roster.json", "export"]).unwrap();

        let err: CliError = load_store(&args).unwrap_err();

        assert!(matches!(err, CliError::ReadSnapshot { .. }));
    }

    #[test]
    fn test_export_reloads_to_the_same_state() {
        let state: AppState = seed_state();

        let json: String = render_view(&state, &View::Export, 2024).unwrap();

        assert_eq!(AppState::from_snapshot_json(&json).unwrap(), state);
    }
}
