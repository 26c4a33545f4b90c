//! Tonal palettes and the core palette set derived from a source color.

mod core_palette;
pub mod dislike;
pub mod temperature;
mod tonal;

pub use core_palette::{CorePalette, SchemeVariant};
pub use temperature::TemperatureCache;
pub use tonal::{TonalPalette, KEY_TONES};
