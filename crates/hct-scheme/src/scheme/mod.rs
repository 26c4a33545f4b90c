//! Color schemes
//!
//! Maps the tonal palettes of a [`CorePalette`](crate::palette::CorePalette)
//! onto a fixed set of UI roles. Light schemes put accents at tone 40 on
//! near-white surfaces; dark schemes put them at tone 80 on near-black.

mod custom;
mod role;
mod scheme;

pub use custom::{ColorGroup, CustomColor, CustomColorGroup};
pub use role::{Role, UnknownRole};
pub use scheme::{Appearance, Scheme, SchemePair};
