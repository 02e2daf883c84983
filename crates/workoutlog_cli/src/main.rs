//! Command-line front end for the workout log core.
//!
//! # Responsibility
//! - Render the in-session collection (the list view).
//! - Assemble a record from arguments and append it (the add form),
//!   then render the list again.
//!
//! The store lives and dies with the process, so an `add` only affects
//! the listing printed by the same invocation.

use std::process::ExitCode;
use workoutlog_core::{default_log_level, init_logging, WorkoutRecord, WorkoutService, WorkoutStore};

fn main() -> ExitCode {
    if let Ok(dir) = std::env::var("WORKOUTLOG_LOG_DIR") {
        if let Err(err) = init_logging(default_log_level(), &dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut service = WorkoutService::new(WorkoutStore::new());

    match args.first().map(String::as_str) {
        // No command defaults to the list view, like the original app's
        // root route.
        None | Some("list") => {
            print_workouts(&service.list_workouts());
            ExitCode::SUCCESS
        }
        Some("add") => match parse_record(&args[1..]) {
            Ok(record) => {
                service.log_workout(record);
                print_workouts(&service.list_workouts());
                ExitCode::SUCCESS
            }
            Err(message) => {
                eprintln!("error: {message}");
                print_usage();
                ExitCode::from(2)
            }
        },
        Some("version") => {
            println!("workoutlog_core {}", workoutlog_core::core_version());
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("error: unknown command `{other}`");
            print_usage();
            ExitCode::from(2)
        }
    }
}

fn parse_record(args: &[String]) -> Result<WorkoutRecord, String> {
    let [id, name, kind, minutes] = args else {
        return Err(format!(
            "`add` expects 4 arguments (id name type minutes), got {}",
            args.len()
        ));
    };
    let id: i64 = id
        .parse()
        .map_err(|_| format!("id must be an integer, got `{id}`"))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| format!("minutes must be a non-negative integer, got `{minutes}`"))?;
    Ok(WorkoutRecord::new(id, name.as_str(), kind.as_str(), minutes))
}

fn print_workouts(records: &[WorkoutRecord]) {
    for record in records {
        println!(
            "{:>4}  {:<20} {:<12} {:>4} min",
            record.id, record.name, record.kind, record.minutes
        );
    }
}

fn print_usage() {
    eprintln!("usage: workoutlog_cli [list]");
    eprintln!("       workoutlog_cli add <id> <name> <type> <minutes>");
    eprintln!("       workoutlog_cli version");
}
