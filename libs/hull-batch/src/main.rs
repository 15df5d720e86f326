//! Batch convex-hull generator entry point.
//!
//! Running with no arguments executes the default batch job: every STL file
//! under the configured input directory gets a `<stem>.stl.convex.stl`
//! sibling containing the convex hull of its vertex cloud.

use std::io::Write;
use std::process::ExitCode;

use hull_batch::{batch_generate, BatchOptions};
use log::{error, info};

fn main() -> ExitCode {
    init_logging();

    let options = BatchOptions::default();
    match batch_generate(&options) {
        Ok(report) => {
            if !report.is_empty() {
                info!(
                    "Batch complete: {} written, {} skipped",
                    report.written_count(),
                    report.skipped_count()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Batch failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Plain `[LEVEL] message` lines on stdout, info level by default.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .target(env_logger::Target::Stdout)
        .init();
}
