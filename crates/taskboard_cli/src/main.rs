//! Demo entry point for `taskboard_core`.
//!
//! Environment:
//! - `TASKBOARD_LOG_LEVEL`: trace|debug|info|warn|error (build default when unset).
//! - `TASKBOARD_LOG_DIR`: absolute directory for rolling log files; file
//!   logging stays off when unset.

mod demo;
mod render;

use std::io::{self, Write};
use std::process::ExitCode;
use taskboard_core::{core_version, default_log_level, init_logging, TaskRegistry};

const LOG_LEVEL_ENV: &str = "TASKBOARD_LOG_LEVEL";
const LOG_DIR_ENV: &str = "TASKBOARD_LOG_DIR";

fn main() -> ExitCode {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run(&mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("taskboard demo failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "==================================================")?;
    writeln!(out, "  Collaborative To-Do List (taskboard {})", core_version())?;
    writeln!(out, "==================================================\n")?;

    let registry = TaskRegistry::new();
    demo::run(&registry, out)?;

    write!(out, "{}", render::stats(&registry.stats()))?;
    writeln!(out, "Demo completed successfully.")?;
    Ok(())
}
