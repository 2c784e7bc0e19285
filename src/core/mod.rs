//! Core order types, builders, normalization, and totals.
//!
//! This module provides the data model for one purchase order: immutable
//! metadata, a caller-owned line-item collection, and full-precision
//! VAT arithmetic. No I/O happens here.

mod builder;
mod error;
mod filename;
mod normalize;
mod totals;
mod types;

pub use builder::*;
pub use error::*;
pub use filename::sanitize_filename;
pub use normalize::clean;
pub use totals::*;
pub use types::*;
