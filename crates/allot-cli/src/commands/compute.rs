//! Compute command implementation.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use allot_portfolio::{
    amount_histogram, compute_with_config, constraint_deviations, AllocationOptions,
    AllocationResult, ConstraintSet, EngineConfig, Instrument,
};

use crate::cli::{AlgorithmArg, OutputFormat};
use crate::error::{read_file, CliError, CliResult};
use crate::output::{
    format_percent, print_header, print_json_value, print_output, print_success, print_table,
    print_warning, KeyValue,
};

/// Arguments for the compute command.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Allocation request: JSON object with instruments, constraints and options
    #[arg(short, long)]
    pub input: PathBuf,

    /// Engine configuration file (TOML)
    #[arg(short, long, env = "ALLOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the total amount of the request
    #[arg(long)]
    pub total: Option<Decimal>,

    /// Override the minimum amount per instrument
    #[arg(long)]
    pub min_amount: Option<Decimal>,

    /// Override the tick
    #[arg(long)]
    pub tick: Option<Decimal>,

    /// Override the apportionment method
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
}

/// An allocation request as read from disk.
///
/// Constraint labels stay strings until the request is validated, so that an
/// unknown label is reported as a configuration error rather than a parse error.
#[derive(Debug, Deserialize)]
pub struct AllocationRequest {
    /// Instruments, in the order amounts are reported.
    pub instruments: Vec<Instrument>,
    /// Target proportion per category label.
    #[serde(default)]
    pub constraints: BTreeMap<String, f64>,
    /// Monetary options.
    pub options: AllocationOptions,
}

impl AllocationRequest {
    fn constraint_set(&self) -> Result<ConstraintSet> {
        let set = ConstraintSet::from_labels(
            self.constraints
                .iter()
                .map(|(label, proportion)| (label.as_str(), *proportion)),
        )?;
        Ok(set)
    }
}

fn load_request(path: &Path) -> CliResult<AllocationRequest> {
    let content = read_file(path)?;
    serde_json::from_str(&content).map_err(|e| CliError::parse("allocation request", path, e))
}

fn load_config(path: &Path) -> CliResult<EngineConfig> {
    let content = read_file(path)?;
    toml::from_str(&content).map_err(|e| CliError::parse("engine configuration", path, e))
}

/// Amount row for display.
#[derive(Debug, Serialize, Tabled)]
struct AmountRow {
    #[tabled(rename = "Instrument")]
    id: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Weight")]
    weight: String,
}

/// Constraint row for display.
#[derive(Debug, Serialize, Tabled)]
struct DeviationRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Dimension")]
    dimension: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Realised")]
    realised: String,
    #[tabled(rename = "Deviation")]
    deviation: String,
}

/// Executes the compute command.
pub fn execute(args: ComputeArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let request = load_request(&args.input)?;
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    let mut options = request.options.clone();
    if let Some(total) = args.total {
        options.total_amount = total;
    }
    if let Some(min_amount) = args.min_amount {
        options.min_amount = min_amount;
    }
    if let Some(tick) = args.tick {
        options.tick = tick;
    }
    if let Some(algorithm) = args.algorithm {
        options.algorithm = algorithm.into();
    }

    let constraints = request.constraint_set()?;
    tracing::debug!(
        instruments = request.instruments.len(),
        constraints = constraints.len(),
        algorithm = %options.algorithm,
        "Loaded allocation request"
    );

    let result = compute_with_config(&request.instruments, &constraints, &options, &config)?;

    match format {
        OutputFormat::Json => print_json_value(&result)?,
        OutputFormat::Csv => print_output(&amount_rows(&result), format)?,
        OutputFormat::Table => {
            if !quiet {
                print_header("Allocation");
            }
            print_table(&amount_rows(&result))?;
            if !quiet {
                print_summary(&result, &options)?;
                if !constraints.is_empty() {
                    print_header("Constraints");
                    print_table(&deviation_rows(&request.instruments, &constraints, &result))?;
                }
                if result.is_exact() {
                    print_success("All constraints met");
                } else {
                    print_warning(&format!(
                        "Constraints cannot all be met (RSE {:.6e}); showing the closest allocation",
                        result.rse
                    ));
                }
            }
        }
    }

    Ok(())
}

fn amount_rows(result: &AllocationResult) -> Vec<AmountRow> {
    let total = result.total();
    result
        .weighted_instruments
        .iter()
        .map(|w| {
            let weight = if total.is_zero() {
                0.0
            } else {
                (w.amount / total).to_f64().unwrap_or(0.0)
            };
            AmountRow {
                id: w.id.clone(),
                amount: w.amount.normalize().to_string(),
                weight: format_percent(weight),
            }
        })
        .collect()
}

fn deviation_rows(
    instruments: &[Instrument],
    constraints: &ConstraintSet,
    result: &AllocationResult,
) -> Vec<DeviationRow> {
    constraint_deviations(instruments, constraints, result)
        .into_iter()
        .map(|d| DeviationRow {
            category: d.category.to_string(),
            dimension: d.category.dimension().to_string(),
            target: format_percent(d.target),
            realised: format_percent(d.realised),
            deviation: format!("{:+.4}%", d.deviation * 100.0),
        })
        .collect()
}

fn print_summary(result: &AllocationResult, options: &AllocationOptions) -> Result<()> {
    print_header("Summary");
    let diagnostics = &result.diagnostics;
    let rows = vec![
        KeyValue::new("Total", result.total().normalize()),
        KeyValue::new("Instruments", result.weighted_instruments.len()),
        KeyValue::new("Distinct amounts", amount_histogram(result).len()),
        KeyValue::new("Method", options.algorithm.name()),
        KeyValue::new("RSE", format!("{:.6e}", result.rse)),
        KeyValue::new("Constraints", diagnostics.constraints),
        KeyValue::new("Iterations", diagnostics.iterations),
        KeyValue::new("Passive set", diagnostics.passive),
        KeyValue::new("Floor repairs", diagnostics.floor_repairs),
    ];
    print_table(&rows)
}
