//! Defaults command implementation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use allot_core::Dimension;
use allot_portfolio::{ConstraintSet, Instrument};

use crate::cli::{DimensionArg, OutputFormat};
use crate::error::{read_file, CliError, CliResult};
use crate::output::{format_percent, print_header, print_json_value, print_output, print_warning};

/// Arguments for the defaults command.
#[derive(Args, Debug)]
pub struct DefaultsArgs {
    /// Instruments: a JSON array, or an allocation request holding one
    #[arg(short, long)]
    pub input: PathBuf,

    /// Dimensions to cover (repeatable; all four when omitted)
    #[arg(short, long, value_enum)]
    pub dimension: Vec<DimensionArg>,

    /// Also show the smallest proportion each category reaches at this minimum weight
    #[arg(short, long)]
    pub min_weight: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InstrumentsFile {
    List(Vec<Instrument>),
    Request { instruments: Vec<Instrument> },
}

fn load_instruments(path: &Path) -> CliResult<Vec<Instrument>> {
    let content = read_file(path)?;
    let file: InstrumentsFile =
        serde_json::from_str(&content).map_err(|e| CliError::parse("instrument list", path, e))?;
    Ok(match file {
        InstrumentsFile::List(instruments) | InstrumentsFile::Request { instruments } => instruments,
    })
}

/// A default constraint for display.
#[derive(Debug, Serialize, Tabled)]
struct DefaultRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Dimension")]
    dimension: String,
    #[tabled(rename = "Proportion")]
    proportion: f64,
    #[tabled(rename = "Minimum")]
    minimum: String,
}

/// Executes the defaults command.
pub fn execute(args: DefaultsArgs, format: OutputFormat, quiet: bool) -> Result<()> {
    let instruments = load_instruments(&args.input)?;
    let dimensions: Vec<Dimension> = if args.dimension.is_empty() {
        Dimension::ALL.to_vec()
    } else {
        args.dimension.iter().map(|&d| d.into()).collect()
    };

    let defaults = ConstraintSet::equal_weight(&instruments, &dimensions);
    let minimum = args
        .min_weight
        .map(|w| ConstraintSet::minimum_proportions(&instruments, w));

    if format == OutputFormat::Json {
        return print_json_value(&defaults);
    }

    let rows: Vec<DefaultRow> = defaults
        .iter()
        .map(|(category, proportion)| DefaultRow {
            label: category.to_string(),
            dimension: category.dimension().to_string(),
            proportion,
            minimum: minimum
                .as_ref()
                .and_then(|m| m.get(category))
                .map_or_else(|| "-".to_string(), format_percent),
        })
        .collect();

    if format == OutputFormat::Table && !quiet {
        print_header(&format!("Equal-weight constraints ({} instruments)", instruments.len()));
    }
    print_output(&rows, format)?;

    if !quiet {
        for &dimension in &dimensions {
            if !defaults.is_complete(dimension) && defaults.dimension(dimension).next().is_some() {
                print_warning(&format!(
                    "{} proportions sum to {:.6}: some instruments carry no {} classification",
                    dimension,
                    defaults.dimension_sum(dimension),
                    dimension
                ));
            }
        }
    }

    Ok(())
}
