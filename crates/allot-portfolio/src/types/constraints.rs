//! Target proportions per category.

use std::collections::btree_map;
use std::collections::BTreeMap;

use allot_core::{Category, Dimension};
use serde::{Deserialize, Serialize};

use super::Instrument;
use crate::classifier::belongs_to;
use crate::error::ConfigurationError;

/// Target proportions keyed by category.
///
/// Entries are kept in [`Category`] order (regions, then sectors, sizes and
/// styles), which fixes the row order of the constraint system. On the wire the
/// set is a plain object from label to proportion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintSet {
    targets: BTreeMap<Category, f64>,
}

impl ConstraintSet {
    /// Creates an empty constraint set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a constraint set from string labels.
    ///
    /// A repeated label keeps its last proportion.
    pub fn from_labels<'a, I>(entries: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let mut set = Self::new();
        for (label, proportion) in entries {
            let category: Category = label.parse()?;
            set.insert(category, proportion);
        }
        Ok(set)
    }

    /// Sets the target for a category, returning the previous one.
    pub fn insert(&mut self, category: impl Into<Category>, proportion: f64) -> Option<f64> {
        self.targets.insert(category.into(), proportion)
    }

    /// Target for a category.
    #[must_use]
    pub fn get(&self, category: impl Into<Category>) -> Option<f64> {
        self.targets.get(&category.into()).copied()
    }

    /// Iterates over targets in category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.targets.iter().map(|(c, p)| (*c, *p))
    }

    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns true if there are no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Constraints of one dimension.
    pub fn dimension(&self, dimension: Dimension) -> impl Iterator<Item = (Category, f64)> + '_ {
        self.iter().filter(move |(c, _)| c.dimension() == dimension)
    }

    /// Sum of the targets of one dimension.
    #[must_use]
    pub fn dimension_sum(&self, dimension: Dimension) -> f64 {
        self.dimension(dimension).map(|(_, p)| p).sum()
    }

    /// Returns true if the targets of `dimension` sum to one.
    ///
    /// The comparison allows `len · f64::EPSILON` of rounding, `len` being the
    /// number of constraints in the dimension.
    #[must_use]
    pub fn is_complete(&self, dimension: Dimension) -> bool {
        let count = self.dimension(dimension).count();
        count > 0 && (self.dimension_sum(dimension) - 1.0).abs() <= count as f64 * f64::EPSILON
    }

    /// Proportions that equal weights would produce in the given dimensions.
    ///
    /// Each instrument contributes `1 / N` to the category it falls into along
    /// every listed dimension.
    #[must_use]
    pub fn equal_weight(instruments: &[Instrument], dimensions: &[Dimension]) -> Self {
        let mut set = Self::new();
        if instruments.is_empty() {
            return set;
        }
        let share = 1.0 / instruments.len() as f64;
        for instrument in instruments {
            for &dimension in dimensions {
                if let Some(category) = instrument.category(dimension) {
                    *set.targets.entry(category).or_insert(0.0) += share;
                }
            }
        }
        set
    }

    /// Smallest proportion each category can receive when every instrument holds
    /// at least `min_weight`.
    ///
    /// Covers every category matched by at least one instrument.
    #[must_use]
    pub fn minimum_proportions(instruments: &[Instrument], min_weight: f64) -> Self {
        Category::all()
            .filter_map(|category| {
                let count = instruments
                    .iter()
                    .filter(|i| belongs_to(i, category))
                    .count();
                (count > 0).then(|| (category, min_weight * count as f64))
            })
            .collect()
    }
}

impl FromIterator<(Category, f64)> for ConstraintSet {
    fn from_iter<T: IntoIterator<Item = (Category, f64)>>(iter: T) -> Self {
        Self {
            targets: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = (&'a Category, &'a f64);
    type IntoIter = btree_map::Iter<'a, Category, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}
