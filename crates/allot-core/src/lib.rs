//! # Allot Core
//!
//! Closed category taxonomy for the Allot portfolio allocation engine.
//!
//! Instruments are classified along four disjoint dimensions:
//!
//! - **Region**: derived from the country of the operational headquarters
//! - **Sector**: derived from the industry via its industry group
//!   (Morningstar Global Equity Classification Structure)
//! - **Size**: market capitalisation bucket of the Style Box
//! - **Style**: value/growth bucket of the Style Box
//!
//! A constraint label names exactly one value of one of these dimensions. The
//! [`Category`] tagged union carries that value together with its [`Dimension`],
//! so dispatch never depends on string inspection after parsing.
//!
//! ## Example
//!
//! ```rust
//! use allot_core::prelude::*;
//!
//! let label: Category = "Eurozone".parse().unwrap();
//! assert_eq!(label.dimension(), Dimension::Region);
//! assert_eq!(Country::DE.region(), Region::Eurozone);
//! assert_eq!(Industry::Semiconductors.sector(), Sector::Technology);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::upper_case_acronyms)]

pub mod category;
pub mod error;
pub mod taxonomy;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::category::{Category, Dimension};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::taxonomy::{
        Country, Industry, IndustryGroup, Region, Sector, Size, Style, SuperRegion, SuperSector,
    };
}

pub use category::{Category, Dimension};
pub use error::{CoreError, CoreResult};
pub use taxonomy::{
    Country, Industry, IndustryGroup, Region, Sector, Size, Style, SuperRegion, SuperSector,
};
