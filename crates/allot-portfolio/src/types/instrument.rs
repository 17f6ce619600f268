//! Instrument representation.

use allot_core::{Category, Country, Dimension, Industry, Region, Sector, Size, Style};
use serde::{Deserialize, Serialize};

/// An instrument to allocate to.
///
/// Region and sector are derived from the stored country and industry; size and
/// style are stored directly. Any attribute may be absent, in which case the
/// instrument matches no label of that dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Unique identifier (e.g. a ticker).
    #[serde(alias = "ticker")]
    pub id: String,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Country of the operational headquarters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Country>,

    /// Industry in the Morningstar classification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Industry>,

    /// Market capitalisation bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,

    /// Investment style bucket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
}

impl Instrument {
    /// Creates an unclassified instrument.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            country: None,
            industry: None,
            size: None,
            style: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn with_country(mut self, country: Country) -> Self {
        self.country = Some(country);
        self
    }

    /// Sets the industry.
    #[must_use]
    pub fn with_industry(mut self, industry: Industry) -> Self {
        self.industry = Some(industry);
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Region of the country, if known.
    #[must_use]
    pub fn region(&self) -> Option<Region> {
        self.country.map(Country::region)
    }

    /// Sector of the industry, if known.
    #[must_use]
    pub fn sector(&self) -> Option<Sector> {
        self.industry.map(Industry::sector)
    }

    /// The category this instrument falls into along `dimension`.
    #[must_use]
    pub fn category(&self, dimension: Dimension) -> Option<Category> {
        match dimension {
            Dimension::Region => self.region().map(Category::Region),
            Dimension::Sector => self.sector().map(Category::Sector),
            Dimension::Size => self.size.map(Category::Size),
            Dimension::Style => self.style.map(Category::Style),
        }
    }

    /// Every category this instrument falls into, in dimension order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Dimension::ALL.into_iter().filter_map(|d| self.category(d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_categories() {
        let inst = Instrument::new("SAP")
            .with_country(Country::DE)
            .with_industry(Industry::SoftwareApplication)
            .with_size(Size::Large);

        assert_eq!(inst.region(), Some(Region::Eurozone));
        assert_eq!(inst.sector(), Some(Sector::Technology));
        assert_eq!(inst.category(Dimension::Style), None);
        assert_eq!(
            inst.categories().collect::<Vec<_>>(),
            vec![
                Category::Region(Region::Eurozone),
                Category::Sector(Sector::Technology),
                Category::Size(Size::Large),
            ]
        );
    }

    #[test]
    fn test_serde_accepts_ticker() {
        let json = r#"{"ticker":"AAPL","country":"US","industry":"ConsumerElectronics","size":"Large"}"#;
        let inst: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(inst.id, "AAPL");
        assert_eq!(inst.country, Some(Country::US));
        assert_eq!(inst.style, None);

        let out = serde_json::to_string(&inst).unwrap();
        assert!(out.starts_with(r#"{"id":"AAPL""#));
        assert!(!out.contains("style"));
    }
}
