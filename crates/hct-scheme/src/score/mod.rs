//! Dominant color scoring
//!
//! Ranks quantized colors by how well they would work as a theme source.
//! Two things count: how much of the image sits near the color's hue (the
//! "excited proportion", summed over a 30° window so that a hue family
//! counts as a whole) and how close its chroma is to a target. Grays and
//! rare hues are filtered out, then the ranking is thinned so the chosen
//! colors are spread around the hue circle.

use crate::color::math::{difference_degrees, sanitize_degrees_int};
use crate::color::Argb;
use crate::hct::Hct;
use crate::quantize::QuantizedColor;

const TARGET_CHROMA: f64 = 48.0;
const WEIGHT_PROPORTION: f64 = 0.7;
const WEIGHT_CHROMA_ABOVE: f64 = 0.3;
const WEIGHT_CHROMA_BELOW: f64 = 0.1;
const CUTOFF_CHROMA: f64 = 5.0;
const CUTOFF_EXCITED_PROPORTION: f64 = 0.01;

/// Widest hue separation tried when picking diverse colors.
const MAX_HUE_DIFFERENCE: u32 = 90;
/// Narrowest hue separation tried.
const MIN_HUE_DIFFERENCE: u32 = 15;

/// Google Blue, the fixed fallback of the Material reference tooling.
pub const GOOGLE_BLUE: Argb = Argb::new(0xff4285f4);

/// A candidate source color and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredColor {
    pub argb: Argb,
    pub score: f64,
}

/// What to return when every color is filtered out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fallback {
    /// The most populous quantized color, whatever its chroma.
    #[default]
    MostPopulous,
    /// A fixed color.
    Color(Argb),
}

/// Scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreOptions {
    /// How many hue-diverse colors to return at most.
    pub desired: usize,
    /// Drop colors below the chroma and proportion cutoffs.
    pub filter: bool,
    pub fallback: Fallback,
}

impl Default for ScoreOptions {
    fn default() -> Self {
        Self {
            desired: 4,
            filter: true,
            fallback: Fallback::MostPopulous,
        }
    }
}

struct Candidate {
    hct: Hct,
    score: f64,
}

/// Rank `colors` as theme sources, best first.
///
/// Returns at most `options.desired` colors, each differing in hue from the
/// ones before it. Equal scores keep the order of `colors`. The result is
/// only empty when `colors` is empty and the fallback is
/// [`Fallback::MostPopulous`].
///
/// # Example
///
/// ```
/// use hct_scheme::quantize::QuantizedColor;
/// use hct_scheme::score::{score, ScoreOptions};
/// use hct_scheme::Argb;
///
/// let colors = [
///     QuantizedColor { argb: Argb::new(0xff000000), population: 1 },
///     QuantizedColor { argb: Argb::new(0xffffffff), population: 1 },
///     QuantizedColor { argb: Argb::new(0xff0000ff), population: 1 },
/// ];
/// let ranked = score(&colors, &ScoreOptions::default());
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].argb, Argb::new(0xff0000ff));
/// ```
pub fn score(colors: &[QuantizedColor], options: &ScoreOptions) -> Vec<ScoredColor> {
    let hcts: Vec<Hct> = colors.iter().map(|c| Hct::from_argb(c.argb)).collect();

    let mut hue_population = [0u64; 360];
    let mut population_sum = 0u64;
    for (color, hct) in colors.iter().zip(&hcts) {
        let hue = (hct.hue().floor() as usize).min(359);
        hue_population[hue] += color.population as u64;
        population_sum += color.population as u64;
    }

    let mut excited_proportions = [0.0f64; 360];
    if population_sum > 0 {
        for (hue, &population) in hue_population.iter().enumerate() {
            let proportion = population as f64 / population_sum as f64;
            let hue = hue as i32;
            for neighbor in (hue - 14)..(hue + 16) {
                excited_proportions[sanitize_degrees_int(neighbor)] += proportion;
            }
        }
    }

    let mut candidates: Vec<Candidate> = Vec::with_capacity(colors.len());
    for hct in &hcts {
        let proportion = excited_proportions[sanitize_degrees_int(hct.hue().round() as i32)];
        if options.filter
            && (hct.chroma() < CUTOFF_CHROMA || proportion <= CUTOFF_EXCITED_PROPORTION)
        {
            continue;
        }
        candidates.push(Candidate {
            hct: *hct,
            score: score_of(hct, proportion),
        });
    }
    // Stable: equal scores keep quantization order
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let chosen = choose_diverse(&candidates, options.desired);
    if !chosen.is_empty() {
        return chosen
            .into_iter()
            .map(|c| ScoredColor {
                argb: c.hct.to_argb(),
                score: c.score,
            })
            .collect();
    }

    match options.fallback {
        Fallback::Color(argb) => vec![ScoredColor { argb, score: 0.0 }],
        Fallback::MostPopulous => most_populous(colors)
            .map(|i| {
                let hct = &hcts[i];
                let proportion =
                    excited_proportions[sanitize_degrees_int(hct.hue().round() as i32)];
                ScoredColor {
                    argb: hct.to_argb(),
                    score: score_of(hct, proportion),
                }
            })
            .into_iter()
            .collect(),
    }
}

fn score_of(hct: &Hct, proportion: f64) -> f64 {
    let proportion_score = proportion * 100.0 * WEIGHT_PROPORTION;
    let chroma_weight = if hct.chroma() < TARGET_CHROMA {
        WEIGHT_CHROMA_BELOW
    } else {
        WEIGHT_CHROMA_ABOVE
    };
    proportion_score + (hct.chroma() - TARGET_CHROMA) * chroma_weight
}

/// Greedily pick up to `desired` candidates whose hues are pairwise at least
/// some separation apart, starting at 90° and relaxing to 15°.
fn choose_diverse(candidates: &[Candidate], desired: usize) -> Vec<&Candidate> {
    let mut chosen: Vec<&Candidate> = Vec::new();
    if desired == 0 {
        return chosen;
    }
    for difference in (MIN_HUE_DIFFERENCE..=MAX_HUE_DIFFERENCE).rev() {
        let difference = difference as f64;
        chosen.clear();
        for candidate in candidates {
            let duplicate = chosen
                .iter()
                .any(|c| difference_degrees(candidate.hct.hue(), c.hct.hue()) < difference);
            if !duplicate {
                chosen.push(candidate);
            }
            if chosen.len() >= desired {
                break;
            }
        }
        if chosen.len() >= desired {
            break;
        }
    }
    chosen
}

/// Index of the largest population; ties go to the earliest.
fn most_populous(colors: &[QuantizedColor]) -> Option<usize> {
    (0..colors.len()).max_by(|&a, &b| {
        colors[a]
            .population
            .cmp(&colors[b].population)
            .then(b.cmp(&a))
    })
}
