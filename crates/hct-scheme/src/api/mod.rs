//! Public API for the hct-scheme crate.
//!
//! This module provides the high-level API: the [`SchemeExtractor`] builder,
//! its [`Extraction`] result and the [`ExtractError`] unified error type.

mod builder;
mod error;

pub use builder::{Extraction, SchemeExtractor};
pub use error::ExtractError;
