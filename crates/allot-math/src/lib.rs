//! # Allot Math
//!
//! Numerical building blocks for the Allot portfolio allocation engine.
//!
//! This crate provides:
//!
//! - **Linear Algebra**: QR least squares, shifted range solves and matrix norms
//! - **NNLS**: Lawson–Hanson active-set solver, plain and Tikhonov-damped
//! - **Apportionment**: Sainte-Laguë/Schepers divisor method and Hare/Niemeyer
//!   largest remainder method over exact integer vote counts
//!
//! ## Design Philosophy
//!
//! - **Exactness where it matters**: seat counts are computed in integer arithmetic,
//!   so totals never drift
//! - **Determinism**: every tie is broken by input order
//! - **Bundled**: no dependency beyond `nalgebra` for the numerics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::uninlined_format_args)]

pub mod apportionment;
pub mod error;
pub mod linear_algebra;
pub mod nnls;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::apportionment::{
        apportion, Apportionment, ApportionmentMethod, HareNiemeyer, SainteLague,
    };
    pub use crate::error::{MathError, MathResult};
    pub use crate::nnls::{damped_nnls, nnls, refine_support, NnlsConfig, NnlsSolution};
}

pub use error::{MathError, MathResult};
