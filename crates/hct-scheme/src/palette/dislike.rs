//! Dark yellow-greens read as bile or mold; the same hue lighter reads as
//! olive and is fine. Colors in that region are lifted to tone 70.

use crate::hct::{GamutMappingFailure, Hct};

/// Hue 90..=111, chroma above 16 and tone below 65, all rounded.
pub fn is_disliked(hct: &Hct) -> bool {
    let hue = hct.hue().round();
    let hue_passes = (90.0..=111.0).contains(&hue);
    let chroma_passes = hct.chroma().round() > 16.0;
    let tone_passes = hct.tone().round() < 65.0;
    hue_passes && chroma_passes && tone_passes
}

/// `hct` at tone 70 if it is disliked, unchanged otherwise.
pub fn fix_if_disliked(hct: Hct) -> Result<Hct, GamutMappingFailure> {
    if is_disliked(&hct) {
        Hct::solve(hct.hue(), hct.chroma(), 70.0)
    } else {
        Ok(hct)
    }
}
