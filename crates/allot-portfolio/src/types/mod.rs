//! Domain types for allocation.
//!
//! - [`Instrument`]: an instrument with its classifying attributes
//! - [`ConstraintSet`]: target proportions per category
//! - [`AllocationOptions`]: total, minimum, tick and apportionment method
//! - [`AllocationResult`]: per-instrument amounts and the residual error
//! - [`EngineConfig`]: solver configuration

mod config;
mod constraints;
mod instrument;
mod options;
mod result;

pub use config::{EngineConfig, DEFAULT_DAMPING};
pub use constraints::ConstraintSet;
pub use instrument::Instrument;
pub use options::AllocationOptions;
pub use result::{AllocationDiagnostics, AllocationResult, WeightedInstrument};
