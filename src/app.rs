//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and installs logging
//! - parses CLI arguments
//! - evaluates distances
//! - prints reports
//! - writes optional exports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, DistanceArgs, ShowArgs, TableArgs};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `cosmo` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    // `cosmo` and `cosmo --preset open` behave like `cosmo show ...`.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);
    init_logging(cli.verbose);

    match cli.command {
        Command::Show(args) => handle_show(args),
        Command::Distance(args) => handle_distance(args),
        Command::Table(args) => handle_table(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn handle_show(args: ShowArgs) -> Result<(), AppError> {
    let cosmo = pipeline::resolve_cosmology(&args.cosmo)?;
    let config = pipeline::distance_config(&args.cosmo)?;
    println!("{}", crate::report::format_cosmology(&cosmo, &config)?);

    if let Some(path) = &args.save {
        crate::io::write_cosmology_json(path, &cosmo)?;
    }
    Ok(())
}

fn handle_distance(args: DistanceArgs) -> Result<(), AppError> {
    let run = pipeline::run_distances(&args.cosmo, &args.scale_factors)?;
    print!("{}", crate::report::format_rows(&run.rows));

    if let Some(path) = &args.export {
        crate::io::write_rows_csv(path, &run.rows, &run.cosmology)?;
    }
    Ok(())
}

fn handle_table(args: TableArgs) -> Result<(), AppError> {
    let run = pipeline::run_grid(&args.cosmo, args.a_min, args.a_max, args.steps)?;
    if !args.quiet {
        print!("{}", crate::report::format_rows(&run.rows));
    }

    if let Some(path) = &args.export_csv {
        crate::io::write_rows_csv(path, &run.rows, &run.cosmology)?;
    }
    if let Some(path) = &args.export_json {
        let table = crate::io::build_table(&run.cosmology, &run.config, run.rows.clone())?;
        crate::io::write_table_json(path, &table)?;
    }
    Ok(())
}

/// Rewrite argv so `cosmo` defaults to `cosmo show`.
///
/// Rules:
/// - `cosmo`                      -> `cosmo show`
/// - `cosmo --preset open ...`    -> `cosmo show --preset open ...`
/// - `cosmo --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("show".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "show" | "distance" | "table");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "show".to_string());
        return argv;
    }

    argv
}
