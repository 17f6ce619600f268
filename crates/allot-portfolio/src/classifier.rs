//! Category membership.
//!
//! Region and sector membership are derived from the instrument's country and
//! industry; size and style are stored attributes. An instrument lacking the
//! attribute a dimension needs matches no label of that dimension.

use allot_core::Category;

use crate::error::ConfigurationError;
use crate::types::Instrument;

/// Returns true if `instrument` falls into `category`.
#[must_use]
pub fn belongs_to(instrument: &Instrument, category: Category) -> bool {
    instrument.category(category.dimension()) == Some(category)
}

/// Returns true if `instrument` falls into the category named by `label`.
///
/// Fails if the label names no known category.
pub fn belongs_to_label(instrument: &Instrument, label: &str) -> Result<bool, ConfigurationError> {
    let category: Category = label.parse()?;
    Ok(belongs_to(instrument, category))
}

/// Indices of the instruments that fall into `category`.
pub fn members(instruments: &[Instrument], category: Category) -> impl Iterator<Item = usize> + '_ {
    instruments
        .iter()
        .enumerate()
        .filter(move |(_, i)| belongs_to(i, category))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use allot_core::{Country, Industry, Region, Sector, Size, Style};

    #[test]
    fn test_derived_membership() {
        let toyota = Instrument::new("7203")
            .with_country(Country::JP)
            .with_industry(Industry::AutoManufacturers)
            .with_size(Size::Large)
            .with_style(Style::Value);

        assert!(belongs_to(&toyota, Region::Japan.into()));
        assert!(!belongs_to(&toyota, Region::AsiaDeveloped.into()));
        assert!(belongs_to(&toyota, Sector::ConsumerCyclical.into()));
        assert!(belongs_to(&toyota, Size::Large.into()));
        assert!(belongs_to(&toyota, Style::Value.into()));
        assert!(!belongs_to(&toyota, Style::Growth.into()));
    }

    #[test]
    fn test_missing_attributes_match_nothing() {
        let bare = Instrument::new("x");
        assert!(Category::all().all(|c| !belongs_to(&bare, c)));
    }

    #[test]
    fn test_label_dispatch() {
        let inst = Instrument::new("BNP")
            .with_country(Country::FR)
            .with_industry(Industry::BanksDiversified);
        assert!(belongs_to_label(&inst, "Eurozone").unwrap());
        assert!(belongs_to_label(&inst, "FinancialServices").unwrap());
        assert!(!belongs_to_label(&inst, "Small").unwrap());
        assert_eq!(
            belongs_to_label(&inst, "Banks").unwrap_err(),
            ConfigurationError::UnknownCategory {
                label: "Banks".into()
            }
        );
    }

    #[test]
    fn test_members() {
        let instruments = vec![
            Instrument::new("a").with_country(Country::US),
            Instrument::new("b").with_country(Country::DE),
            Instrument::new("c").with_country(Country::US),
        ];
        let na: Vec<usize> = members(&instruments, Region::NorthAmerica.into()).collect();
        assert_eq!(na, vec![0, 2]);
    }
}
