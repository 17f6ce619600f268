//! Categories command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use allot_core::{Category, Dimension};

use crate::cli::{DimensionArg, OutputFormat};
use crate::output::print_output;

/// Arguments for the categories command.
#[derive(Args, Debug)]
pub struct CategoriesArgs {
    /// Only list labels of this dimension
    #[arg(short, long, value_enum)]
    pub dimension: Option<DimensionArg>,
}

/// A category label for display.
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Dimension")]
    dimension: &'static str,
    #[tabled(rename = "Name")]
    name: &'static str,
}

impl From<Category> for CategoryRow {
    fn from(category: Category) -> Self {
        Self {
            label: category.id(),
            dimension: category.dimension().name(),
            name: category.name(),
        }
    }
}

/// Executes the categories command.
pub fn execute(args: CategoriesArgs, format: OutputFormat) -> Result<()> {
    let dimensions: Vec<Dimension> = match args.dimension {
        Some(dimension) => vec![dimension.into()],
        None => Dimension::ALL.to_vec(),
    };

    let rows: Vec<CategoryRow> = dimensions
        .into_iter()
        .flat_map(Dimension::categories)
        .map(CategoryRow::from)
        .collect();

    print_output(&rows, format)
}
