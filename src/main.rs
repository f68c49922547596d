//! Motor TOPSIS command line entry point.
//!
//! Configuration comes from `MOTOR_TOPSIS__*` environment variables (see
//! `motor_topsis::config`). Reports go to stdout, logs to stderr.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info};

use motor_topsis::adapters::{CsvAlternativeSource, RankingReport, ReportWriter};
use motor_topsis::application::{
    ComputeRankingHandler, ComputeRankingQuery, RecommendHandler, RecommendQuery,
    SortByCriterionHandler, SortByCriterionQuery,
};
use motor_topsis::config::AppConfig;
use motor_topsis::domain::foundation::DomainError;
use motor_topsis::domain::projection::{
    CriterionRange, Recommendation, Recommendations, SortDirection,
};
use motor_topsis::telemetry;

/// Motor TOPSIS - Motorcycle ranking and recommendation
#[derive(Debug, Parser)]
#[command(name = "motor-topsis")]
#[command(version)]
#[command(about = "Rank motorcycles with TOPSIS and recommend within value ranges")]
struct Cli {
    /// Operation to run (defaults to `rank`)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Rank every motorcycle and print closeness, distances and artifacts
    Rank,
    /// Recommend motorcycles whose values fall inside every range
    Recommend {
        /// Inclusive ranges as criterion=min..max, e.g. price=15..25
        #[arg(value_parser = parse_range)]
        ranges: Vec<CriterionRange>,

        /// Maximum number of recommendations (overrides configuration)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List every motorcycle ordered by one criterion's raw value
    Sort {
        /// Criterion to order by, e.g. fuel_consumption
        criterion: String,

        #[arg(short, long, value_enum, default_value_t = DirectionArg::Ascending)]
        direction: DirectionArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum DirectionArg {
    #[value(alias = "asc")]
    Ascending,
    #[value(alias = "desc")]
    Descending,
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Ascending => SortDirection::Ascending,
            DirectionArg::Descending => SortDirection::Descending,
        }
    }
}

/// Output of the `recommend` command
#[derive(Debug, Serialize)]
struct RecommendationReport<'a> {
    top: &'a Recommendation,
    matched: usize,
    recommendations: &'a Recommendations,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }
    if let Err(e) = telemetry::init_tracing(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(&config, cli.command.unwrap_or(Commands::Rank)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = %e.code, "{}", e.message);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig, command: Commands) -> Result<(), DomainError> {
    info!(path = %config.data.path, "Starting motor-topsis");

    let source = CsvAlternativeSource::new(&config.data.path)
        .with_columns(config.data.id_column.as_str(), config.data.name_column.as_str());
    let ranking = Arc::new(ComputeRankingHandler::new(
        Arc::new(source),
        config.ranking.engine(),
    ));
    let weights = config.ranking.weights.to_weight_map();
    let writer = ReportWriter::new(config.output.format);

    match command {
        Commands::Rank => {
            let result = ranking.handle(ComputeRankingQuery { weights })?;
            writer.write_to(&RankingReport::from_result(&result), io::stdout().lock())?;
        }
        Commands::Recommend { ranges, limit } => {
            let result = RecommendHandler::new(ranking).handle(RecommendQuery {
                weights,
                ranges,
                limit: limit.unwrap_or(config.ranking.recommendation_limit),
            })?;
            let report = RecommendationReport {
                top: &result.top,
                matched: result.matched,
                recommendations: &result.recommendations,
            };
            writer.write_to(&report, io::stdout().lock())?;
        }
        Commands::Sort {
            criterion,
            direction,
        } => {
            let rows = SortByCriterionHandler::new(ranking).handle(SortByCriterionQuery {
                weights,
                criterion,
                direction: direction.into(),
            })?;
            writer.write_to(&rows, io::stdout().lock())?;
        }
    }

    Ok(())
}

/// Parses `criterion=min..max`
fn parse_range(arg: &str) -> Result<CriterionRange, String> {
    let invalid = || format!("expected criterion=min..max, got '{}'", arg);

    let (criterion, bounds) = arg.split_once('=').ok_or_else(invalid)?;
    let (min, max) = bounds.split_once("..").ok_or_else(invalid)?;
    let min: f64 = min.trim().parse().map_err(|_| invalid())?;
    let max: f64 = max.trim().parse().map_err(|_| invalid())?;

    let criterion = criterion.trim();
    if criterion.is_empty() {
        return Err(invalid());
    }
    Ok(CriterionRange::new(criterion, min, max))
}
