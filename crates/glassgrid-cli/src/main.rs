//! `glassgrid` binary: replays an edit script and writes the resulting grid.

use std::{fmt::Write as _, process::ExitCode, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};
use miette::GraphicalReportHandler;

use glassgrid::GlassGridError;
use glassgrid_cli::{Args, error_adapter::to_reportables};

fn main() -> ExitCode {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logging(&args.log_level);
    debug!(args:?; "Parsed arguments");

    match glassgrid_cli::run(&args) {
        Ok(()) => {
            info!("Layout written");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", render(&err));
            ExitCode::FAILURE
        }
    }
}

/// Falls back to `warn` when `level` is not a valid filter.
fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level `{level}`, using `warn`");
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn render(err: &GlassGridError) -> String {
    let handler = GraphicalReportHandler::new();
    let mut out = String::new();
    for reportable in to_reportables(err) {
        if handler.render_report(&mut out, &reportable).is_err() {
            // Fall back to the plain message.
            let _ = write!(out, "{reportable}");
        }
    }
    out
}
