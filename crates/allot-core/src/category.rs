//! Constraint labels and their dimensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CoreError;
use crate::taxonomy::{Region, Sector, Size, Style};

/// One of the four disjoint classification dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    /// Geographic region, derived from the country.
    Region,
    /// Economic sector, derived from the industry.
    Sector,
    /// Market capitalisation bucket.
    Size,
    /// Investment style bucket.
    Style,
}

impl Dimension {
    /// All dimensions, in canonical order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Region,
        Dimension::Sector,
        Dimension::Size,
        Dimension::Style,
    ];

    /// Returns the lowercase name of the dimension.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::Sector => "sector",
            Dimension::Size => "size",
            Dimension::Style => "style",
        }
    }

    /// Returns every category of this dimension, in declaration order.
    #[must_use]
    pub fn categories(self) -> Vec<Category> {
        match self {
            Dimension::Region => Region::ALL.iter().map(|&r| Category::Region(r)).collect(),
            Dimension::Sector => Sector::ALL.iter().map(|&s| Category::Sector(s)).collect(),
            Dimension::Size => Size::ALL.iter().map(|&s| Category::Size(s)).collect(),
            Dimension::Style => Style::ALL.iter().map(|&s| Category::Style(s)).collect(),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dimension {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "region" => Ok(Dimension::Region),
            "sector" => Ok(Dimension::Sector),
            "size" => Ok(Dimension::Size),
            "style" => Ok(Dimension::Style),
            _ => Err(CoreError::unknown_identifier("dimension", s)),
        }
    }
}

/// A constraint label: exactly one value of exactly one dimension.
///
/// Ordering is by dimension first, then by declaration order within the
/// dimension, which gives constraint sets a stable row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// A geographic region.
    Region(Region),
    /// An economic sector.
    Sector(Sector),
    /// A capitalisation bucket.
    Size(Size),
    /// A style bucket.
    Style(Style),
}

impl Category {
    /// Returns the dimension this label belongs to.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Category::Region(_) => Dimension::Region,
            Category::Sector(_) => Dimension::Sector,
            Category::Size(_) => Dimension::Size,
            Category::Style(_) => Dimension::Style,
        }
    }

    /// The label identifier, e.g. `"NorthAmerica"`.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Category::Region(r) => r.id(),
            Category::Sector(s) => s.id(),
            Category::Size(s) => s.id(),
            Category::Style(s) => s.id(),
        }
    }

    /// The human-readable name, e.g. `"North America"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Region(r) => r.name(),
            Category::Sector(s) => s.name(),
            Category::Size(s) => s.name(),
            Category::Style(s) => s.name(),
        }
    }

    /// Every label of every dimension.
    pub fn all() -> impl Iterator<Item = Category> {
        Dimension::ALL.into_iter().flat_map(Dimension::categories)
    }
}

impl From<Region> for Category {
    fn from(value: Region) -> Self {
        Category::Region(value)
    }
}

impl From<Sector> for Category {
    fn from(value: Sector) -> Self {
        Category::Sector(value)
    }
}

impl From<Size> for Category {
    fn from(value: Size) -> Self {
        Category::Size(value)
    }
}

impl From<Style> for Category {
    fn from(value: Style) -> Self {
        Category::Style(value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        // The four identifier sets are disjoint, so lookup order is irrelevant.
        Region::from_id(label)
            .map(Category::Region)
            .or_else(|| Sector::from_id(label).map(Category::Sector))
            .or_else(|| Size::from_id(label).map(Category::Size))
            .or_else(|| Style::from_id(label).map(Category::Style))
            .ok_or_else(|| CoreError::unknown_category(s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashSet};

    #[test]
    fn test_dimension_dispatch() {
        let cases = [
            ("NorthAmerica", Dimension::Region),
            ("Technology", Dimension::Sector),
            ("Small", Dimension::Size),
            ("Growth", Dimension::Style),
        ];
        for (label, dimension) in cases {
            let category: Category = label.parse().unwrap();
            assert_eq!(category.dimension(), dimension);
            assert_eq!(category.to_string(), label);
        }
    }

    #[test]
    fn test_unknown_label() {
        let err = "Semiconductors".parse::<Category>().unwrap_err();
        assert_eq!(err, CoreError::unknown_category("Semiconductors"));
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_label_sets_are_disjoint() {
        let all: Vec<_> = Category::all().collect();
        let ids: HashSet<_> = all.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), all.len());
        assert_eq!(all.len(), 11 + 11 + 3 + 3);
    }

    #[test]
    fn test_ordering_groups_by_dimension() {
        let mut labels: Vec<Category> = ["Large", "Value", "Eurozone", "Energy", "NorthAmerica"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        labels.sort();
        let dims: Vec<_> = labels.iter().map(|c| c.dimension()).collect();
        assert_eq!(
            dims,
            vec![
                Dimension::Region,
                Dimension::Region,
                Dimension::Sector,
                Dimension::Size,
                Dimension::Style
            ]
        );
        assert_eq!(labels[0], Category::Region(Region::NorthAmerica));
    }

    #[test]
    fn test_serde_as_map_key() {
        let mut map = BTreeMap::new();
        map.insert(Category::Size(Size::Mid), 0.3);
        map.insert(Category::Region(Region::Eurozone), 0.6);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"Eurozone":0.6,"Mid":0.3}"#);

        let parsed: BTreeMap<Category, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, map);

        let bad: Result<BTreeMap<Category, f64>, _> = serde_json::from_str(r#"{"Moon":1.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("Region".parse::<Dimension>().unwrap(), Dimension::Region);
        assert_eq!("style".parse::<Dimension>().unwrap(), Dimension::Style);
        assert!("colour".parse::<Dimension>().is_err());
        assert_eq!(Dimension::Sector.categories().len(), 11);
    }
}
