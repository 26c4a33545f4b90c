use std::collections::HashMap;

use crate::color::Argb;

/// Exact histogram: every distinct color with its pixel count.
pub struct QuantizerMap;

impl QuantizerMap {
    /// Count each distinct color. Entries are in order of first appearance.
    pub fn quantize(pixels: &[Argb]) -> Vec<(Argb, u32)> {
        let mut slots: HashMap<Argb, usize> = HashMap::new();
        let mut counts: Vec<(Argb, u32)> = Vec::new();
        for &pixel in pixels {
            let slot = *slots.entry(pixel).or_insert_with(|| {
                counts.push((pixel, 0));
                counts.len() - 1
            });
            counts[slot].1 += 1;
        }
        counts
    }
}
