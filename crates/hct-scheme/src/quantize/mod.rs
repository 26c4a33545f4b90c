//! Color quantization
//!
//! Reduces a multiset of pixel colors to a handful of representatives with
//! population counts:
//!
//! - [`QuantizerMap`]: exact histogram
//! - [`QuantizerWu`]: greedy box splitting on a 5-bit RGB histogram
//! - [`QuantizerWsmeans`]: weighted k-means in L*a*b*
//! - [`QuantizerCelebi`]: Wu seeding Wsmeans, used by the pipeline
//!
//! Output order is deterministic and populations always sum to the number
//! of input pixels.

mod celebi;
mod map;
mod point;
mod wsmeans;
mod wu;

pub use celebi::QuantizerCelebi;
pub use map::QuantizerMap;
pub use point::{LabPointProvider, Point, PointProvider};
pub use wsmeans::QuantizerWsmeans;
pub use wu::QuantizerWu;

use crate::color::Argb;

/// Default upper bound on the number of quantized colors.
pub const DEFAULT_MAX_COLORS: usize = 128;

/// A representative color and the number of pixels it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizedColor {
    pub argb: Argb,
    pub population: u32,
}
