// Colorimetric constants are quoted at full published precision
#![allow(
    clippy::excessive_precision,
    clippy::needless_range_loop,
    clippy::module_inception,
    clippy::manual_range_contains
)]

//! hct-scheme: Material color schemes from images
//!
//! This library reduces an image to a small set of representative colors,
//! picks the one best suited to drive a UI theme, and expands it into
//! light and dark color schemes built from HCT tonal palettes.
//!
//! # Quick Start
//!
//! The [`SchemeExtractor`] builder is the primary entry point:
//!
//! ```
//! use hct_scheme::{PixelLayout, Role, SchemeExtractor};
//!
//! // 2x2 image, all pure red
//! let pixels = [255u8, 0, 0, 255].repeat(4);
//! let extraction = SchemeExtractor::new()
//!     .extract(&pixels, 2, 2, PixelLayout::Rgba)
//!     .unwrap();
//!
//! assert_eq!(extraction.source().to_hex(), "#ff0000");
//! let light_primary = extraction.schemes().light.get(Role::Primary);
//! let dark_primary = extraction.schemes().dark.get(Role::Primary);
//! assert_ne!(light_primary, dark_primary);
//! ```
//!
//! # Building Blocks
//!
//! Each stage is usable on its own:
//!
//! - [`quantize`]: histogram, Wu, weighted k-means and the Celebi
//!   combination of the two
//! - [`score`]: ranks quantized colors for use as a theme source
//! - [`hct`]: CAM16 and the HCT color space, with a solver from HCT back
//!   to sRGB
//! - [`palette`]: tonal palettes and the six-palette [`CorePalette`]
//! - [`scheme`]: role assignment for light and dark appearances, plus
//!   custom color groups
//! - [`blend`]: hue harmonization toward a source color
//!
//! # Color Spaces
//!
//! | Color Space | Used For |
//! |-------------|----------|
//! | **sRGB** (packed [`Argb`]) | Input pixels, palette output |
//! | **L\*a\*b\*** | k-means distances during quantization |
//! | **CAM16** | Hue and chroma for scoring and palettes |
//! | **HCT** | CAM16 hue and chroma with L\* as tone |
//!
//! Tone is L\*, so any two colors whose tones differ by 50 or more meet
//! WCAG 4.5:1 contrast. Schemes rely on this: every foreground role sits at
//! least that far in tone from the role it is drawn on.
//!
//! ## Pipeline Overview
//!
//! ```text
//! decoded pixels          (RGB or RGBA bytes)
//!     |
//!     v
//! PixelSampler            (one opaque Argb per pixel)
//!     |
//!     v
//! QuantizerWu             (5-bit histogram, box splitting)
//!     |
//!     v
//! QuantizerWsmeans        (k-means in L*a*b*, seeded by Wu)
//!     |
//!     v
//! score()                 (chroma, hue share, hue diversity)
//!     |
//!     v
//! source color
//!     |
//!     v
//! CorePalette             (six TonalPalettes via the HCT solver)
//!     |
//!     +---> Scheme (light)
//!     +---> Scheme (dark)
//! ```
//!
//! # Determinism
//!
//! No stage draws random numbers or depends on hash iteration order. The
//! same pixels and the same configuration always produce byte-identical
//! schemes.

pub mod api;
pub mod blend;
pub mod color;
pub mod hct;
pub mod palette;
pub mod quantize;
pub mod sample;
pub mod scheme;
pub mod score;


pub use api::{ExtractError, Extraction, SchemeExtractor};
pub use color::{Argb, ParseColorError};
pub use hct::{Cam16, GamutMappingFailure, Hct, ViewingConditions};
pub use palette::{CorePalette, SchemeVariant, TonalPalette};
pub use quantize::{QuantizedColor, QuantizerCelebi};
pub use sample::{DecodeError, PixelLayout, PixelSampler};
pub use scheme::{Appearance, CustomColor, CustomColorGroup, Role, Scheme, SchemePair};
pub use score::{score, Fallback, ScoreOptions, ScoredColor};
