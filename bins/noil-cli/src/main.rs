//! noil-cli — Score oil-consumption logs from the command line.
//!
//! Reads log histories and regional populations from JSON files, prints
//! honesty assessments, reward point adjustments and regional standings.

mod input;
mod settings;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use noil_compare::Region;
use noil_core::reward::calculate_total_points;
use noil_core::{compute_honesty, Honesty, PointsAdjustment, RewardMultiplier};
use serde::Serialize;
use tracing::{error, info};

use crate::settings::CliConfig;

/// Noil honesty scoring and rewards.
#[derive(Parser, Debug)]
#[command(name = "noil-cli", version, about = "Noil honesty scoring and rewards")]
struct Cli {
    /// Config file (default: <config_dir>/noil/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). Overrides config.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Log output format ("text" or "json"). Overrides config.
    #[arg(long, global = true)]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a household's log history.
    Score(ScoreArgs),
    /// Apply a reward multiplier to base points.
    Points(PointsArgs),
    /// Rank a per-person average against a regional population.
    Rank(RankArgs),
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON array of {"date": "YYYY-MM-DD", "amount_ml": n} rows.
    #[arg(short, long)]
    input: PathBuf,

    /// People in the household.
    #[arg(long)]
    household: Option<u32>,

    /// Base points to run through the resulting multiplier.
    #[arg(long)]
    base_points: Option<u64>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct PointsArgs {
    /// Base points.
    #[arg(short, long)]
    base: u64,

    /// Multiplier: 0.5, 1.0 or 1.2.
    #[arg(short, long)]
    multiplier: f64,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct RankArgs {
    /// JSON array of per-person daily averages (ml).
    #[arg(short, long)]
    input: PathBuf,

    /// Per-person daily average (ml) to rank.
    #[arg(short, long)]
    value: f64,

    /// Region label used in output and logs.
    #[arg(long, default_value = "region")]
    region: String,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

/// Everything `score --json` prints.
#[derive(Serialize)]
struct ScoreReport {
    honesty: Honesty,
    multiplier: RewardMultiplier,
    base_points: u64,
    points: PointsAdjustment,
}

fn main() {
    let cli = Cli::parse();

    let mut cfg = match CliConfig::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    };
    if let Some(level) = cli.log_level {
        cfg.log_level = level;
    }
    if let Some(format) = cli.log_format {
        cfg.log_format = format;
    }

    init_logging(&cfg.log_level, &cfg.log_format);
    info!("noil-cli v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Score(args) => score(args, &cfg),
        Commands::Points(args) => points(args),
        Commands::Rank(args) => rank(args),
    };

    if let Err(e) = result {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

/// Score a log file and print the assessment and point adjustment.
fn score(args: ScoreArgs, cfg: &CliConfig) -> Result<()> {
    let rows = input::load_log(&args.input)?;
    let household = args.household.unwrap_or(cfg.default_household_size);
    let base_points = args.base_points.unwrap_or(cfg.default_base_points);
    info!(rows = rows.len(), household, "scoring log");

    let honesty = compute_honesty(&rows, household)
        .with_context(|| format!("Failed to score {}", args.input.display()))?;
    let multiplier = honesty.multiplier();
    let points = calculate_total_points(base_points, multiplier);

    if args.json {
        let report = ScoreReport { honesty, multiplier, base_points, points };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &honesty {
        Honesty::Assessed(a) => {
            println!("logged_days: {}", a.logged_days);
            println!("score:       {} ({})", a.score, a.level);
            let flags: Vec<_> = a.flags.iter().map(|f| f.as_str()).collect();
            if flags.is_empty() {
                println!("flags:       none");
            } else {
                println!("flags:       {}", flags.join(", "));
            }
        }
        Honesty::InsufficientData { logged_days } => {
            println!("insufficient data ({logged_days} logged days); using standard multiplier");
        }
    }
    print_points(base_points, multiplier, &points);
    Ok(())
}

/// Apply a raw multiplier to base points.
fn points(args: PointsArgs) -> Result<()> {
    let multiplier = RewardMultiplier::from_factor(args.multiplier)?;
    let points = calculate_total_points(args.base, multiplier);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        print_points(args.base, multiplier, &points);
    }
    Ok(())
}

/// Rank a value against a population file.
fn rank(args: RankArgs) -> Result<()> {
    let population = input::load_population(&args.input)?;
    let region = Region::from_averages(args.region, &population)
        .with_context(|| format!("Invalid population in {}", args.input.display()))?;
    let standing = region.standing(args.value)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&standing)?);
    } else {
        println!("region:     {}", region.name());
        println!("median:     {:.1} ml", region.median());
        println!("rank:       {} of {}", standing.rank, standing.population);
        println!("percentile: {}", standing.percentile);
    }
    Ok(())
}

fn print_points(base: u64, multiplier: RewardMultiplier, points: &PointsAdjustment) {
    match multiplier.description() {
        Some(desc) => println!("multiplier:  {multiplier} ({desc})"),
        None => println!("multiplier:  {multiplier}"),
    }
    println!(
        "points:      {base} -> {} (bonus {:+})",
        points.final_points, points.bonus
    );
}

/// Initialize tracing subscriber with the given log level and output format.
///
/// Logs go to stderr so `--json` output on stdout stays machine-readable.
fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
