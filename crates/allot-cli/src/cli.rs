//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CategoriesArgs, ComputeArgs, DefaultsArgs};

/// Allot - Constrained portfolio weight allocation CLI
#[derive(Parser)]
#[command(name = "allot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log solver statistics to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Allocate a total amount across instruments under category constraints
    Compute(ComputeArgs),

    /// List the category labels accepted in constraints
    Categories(CategoriesArgs),

    /// Print the equal-weight constraints of a set of instruments
    Defaults(DefaultsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
}

/// Classification dimension selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    /// Geographic regions
    Region,
    /// Economic sectors
    Sector,
    /// Market capitalisation buckets
    Size,
    /// Value/growth buckets
    Style,
}

impl From<DimensionArg> for allot_core::Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Region => allot_core::Dimension::Region,
            DimensionArg::Sector => allot_core::Dimension::Sector,
            DimensionArg::Size => allot_core::Dimension::Size,
            DimensionArg::Style => allot_core::Dimension::Style,
        }
    }
}

/// Apportionment method selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Sainte-Laguë/Schepers divisor method
    SainteLague,
    /// Hare/Niemeyer largest remainder method
    HareNiemeyer,
}

impl From<AlgorithmArg> for allot_portfolio::ApportionmentMethod {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::SainteLague => allot_portfolio::ApportionmentMethod::SainteLague,
            AlgorithmArg::HareNiemeyer => allot_portfolio::ApportionmentMethod::HareNiemeyer,
        }
    }
}
