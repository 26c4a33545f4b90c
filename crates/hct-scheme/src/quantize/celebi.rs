use super::wsmeans::QuantizerWsmeans;
use super::wu::QuantizerWu;
use super::QuantizedColor;
use crate::color::Argb;

/// Wu box splitting for a fast, stable first guess, then weighted k-means to
/// refine it. This is the quantizer the extraction pipeline uses.
pub struct QuantizerCelebi;

impl QuantizerCelebi {
    /// Reduce `pixels` to at most `max_colors` colors with populations.
    ///
    /// # Example
    ///
    /// ```
    /// use hct_scheme::quantize::QuantizerCelebi;
    /// use hct_scheme::Argb;
    ///
    /// let red = Argb::from_rgb(255, 0, 0);
    /// let result = QuantizerCelebi::quantize(&[red; 4], 128);
    /// assert_eq!(result.len(), 1);
    /// assert_eq!(result[0].argb, red);
    /// assert_eq!(result[0].population, 4);
    /// ```
    pub fn quantize(pixels: &[Argb], max_colors: usize) -> Vec<QuantizedColor> {
        let wu_clusters = QuantizerWu::new().quantize(pixels, max_colors);
        QuantizerWsmeans::quantize(pixels, &wu_clusters, max_colors)
    }
}
