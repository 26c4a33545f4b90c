//! Test fixtures and constants.

use hct_scheme::PixelLayout;

/// Config documents used across tests
pub mod configs {
    pub const DEFAULT: &str = "{}";

    pub const TONAL_SPOT: &str = r##"
max_colors: 64
variant: tonal_spot
"##;

    pub const FIXED_FALLBACK: &str = r##"
score:
  fallback: "#4285f4"
"##;

    pub const FIDELITY_WITH_CUSTOM: &str = r##"
variant: fidelity
custom_colors:
  - name: brand
    value: "#e8175d"
  - name: success
    value: "#2e7d32"
    blend: false
"##;

    pub const INVALID_YAML: &str = "max_colors: [1, 2";
}

/// A decoded image together with its shape
pub struct TestImage {
    pub bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub layout: PixelLayout,
}

impl TestImage {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Every pixel the same RGBA color
pub fn solid_rgba(rgb: [u8; 3], width: usize, height: usize) -> TestImage {
    let [r, g, b] = rgb;
    TestImage {
        bytes: [r, g, b, 255].repeat(width * height),
        width,
        height,
        layout: PixelLayout::Rgba,
    }
}

/// Vertical bands of the given colors, equal width, RGB layout
pub fn bands(colors: &[[u8; 3]], band_width: usize, height: usize) -> TestImage {
    let width = colors.len() * band_width;
    let mut bytes = Vec::with_capacity(width * height * 3);
    for _ in 0..height {
        for color in colors {
            for _ in 0..band_width {
                bytes.extend_from_slice(color);
            }
        }
    }
    TestImage {
        bytes,
        width,
        height,
        layout: PixelLayout::Rgb,
    }
}

/// Mostly gray with one saturated accent band, like a muted photo
pub fn muted_with_accent() -> TestImage {
    bands(
        &[
            [120, 120, 118],
            [96, 98, 100],
            [140, 138, 136],
            [32, 120, 200],
        ],
        8,
        8,
    )
}

/// Smooth two-axis gradient, exercises many quantizer boxes
pub fn gradient(width: usize, height: usize) -> TestImage {
    let mut bytes = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width.max(1)) as u8;
            let g = (y * 255 / height.max(1)) as u8;
            let b = 255 - r / 2;
            bytes.extend_from_slice(&[r, g, b]);
        }
    }
    TestImage {
        bytes,
        width,
        height,
        layout: PixelLayout::Rgb,
    }
}
