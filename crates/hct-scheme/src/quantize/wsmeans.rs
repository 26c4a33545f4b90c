//! Weighted square means (k-means refinement)
//!
//! Identical pixels are deduplicated and carried as weighted points. The
//! triangle inequality skips any cluster that cannot beat the current one:
//! with squared distances, if d(prev, j) >= 4 * d(point, prev) then
//! cluster j is at least as far from the point as prev.
//!
//! M. Emre Celebi, "Improving the Performance of K-Means for Color
//! Quantization" (2011).

use super::map::QuantizerMap;
use super::point::{LabPointProvider, Point, PointProvider};
use super::QuantizedColor;
use crate::color::Argb;

const MAX_ITERATIONS: usize = 10;
const MIN_MOVEMENT_DISTANCE: f64 = 3.0;

/// K-means over deduplicated pixels in L*a*b*.
pub struct QuantizerWsmeans;

impl QuantizerWsmeans {
    /// Refine `starting_clusters` against `pixels`.
    ///
    /// With no starting clusters, seeds are taken from the distinct input
    /// colors at evenly spaced positions in first-seen order. Every point
    /// starts in its nearest cluster, so the result depends only on the
    /// inputs.
    ///
    /// Empty clusters are dropped. Clusters whose centroids land on the same
    /// color are merged, so populations always sum to `pixels.len()`.
    pub fn quantize(
        pixels: &[Argb],
        starting_clusters: &[Argb],
        max_colors: usize,
    ) -> Vec<QuantizedColor> {
        Self::quantize_with(&LabPointProvider, pixels, starting_clusters, max_colors)
    }

    /// Same as [`quantize`](Self::quantize) in the space of `provider`.
    pub fn quantize_with<P: PointProvider>(
        provider: &P,
        pixels: &[Argb],
        starting_clusters: &[Argb],
        max_colors: usize,
    ) -> Vec<QuantizedColor> {
        let histogram = QuantizerMap::quantize(pixels);
        let points: Vec<Point> = histogram
            .iter()
            .map(|&(color, _)| provider.from_argb(color))
            .collect();
        let counts: Vec<u32> = histogram.iter().map(|&(_, count)| count).collect();
        let point_count = points.len();

        let mut cluster_count = max_colors.min(point_count);
        if !starting_clusters.is_empty() {
            cluster_count = cluster_count.min(starting_clusters.len());
        }
        if cluster_count == 0 {
            return Vec::new();
        }

        let mut clusters: Vec<Point> = if starting_clusters.is_empty() {
            (0..cluster_count)
                .map(|i| points[i * point_count / cluster_count])
                .collect()
        } else {
            starting_clusters[..cluster_count]
                .iter()
                .map(|&color| provider.from_argb(color))
                .collect()
        };

        let mut cluster_indices: Vec<usize> = points
            .iter()
            .map(|&point| nearest(provider, point, &clusters))
            .collect();

        let mut distances = vec![vec![0.0f64; cluster_count]; cluster_count];
        let mut pixel_count_sums = vec![0u64; cluster_count];

        for iteration in 0..MAX_ITERATIONS {
            for i in 0..cluster_count {
                for j in (i + 1)..cluster_count {
                    let distance = provider.distance(clusters[i], clusters[j]);
                    distances[i][j] = distance;
                    distances[j][i] = distance;
                }
            }

            let mut points_moved = 0usize;
            for (i, &point) in points.iter().enumerate() {
                let previous_index = cluster_indices[i];
                let previous_distance = provider.distance(point, clusters[previous_index]);
                let mut minimum_distance = previous_distance;
                let mut new_index = None;
                for j in 0..cluster_count {
                    if distances[previous_index][j] >= 4.0 * previous_distance {
                        continue;
                    }
                    let distance = provider.distance(point, clusters[j]);
                    if distance < minimum_distance {
                        minimum_distance = distance;
                        new_index = Some(j);
                    }
                }
                if let Some(new_index) = new_index {
                    let change = (minimum_distance.sqrt() - previous_distance.sqrt()).abs();
                    if change > MIN_MOVEMENT_DISTANCE {
                        points_moved += 1;
                        cluster_indices[i] = new_index;
                    }
                }
            }

            if points_moved == 0 && iteration != 0 {
                break;
            }

            let mut component_sums = vec![[0.0f64; 3]; cluster_count];
            pixel_count_sums.fill(0);
            for ((point, &cluster), &count) in points.iter().zip(&cluster_indices).zip(&counts) {
                pixel_count_sums[cluster] += count as u64;
                let weight = count as f64;
                component_sums[cluster][0] += point[0] * weight;
                component_sums[cluster][1] += point[1] * weight;
                component_sums[cluster][2] += point[2] * weight;
            }
            for ((cluster, sums), &count) in clusters
                .iter_mut()
                .zip(&component_sums)
                .zip(&pixel_count_sums)
            {
                // An empty cluster keeps its last centroid
                if count > 0 {
                    let count = count as f64;
                    *cluster = [sums[0] / count, sums[1] / count, sums[2] / count];
                }
            }
        }

        let mut result: Vec<QuantizedColor> = Vec::with_capacity(cluster_count);
        for (cluster, &count) in clusters.iter().zip(&pixel_count_sums) {
            if count == 0 {
                continue;
            }
            let argb = provider.to_argb(*cluster);
            let population = count as u32;
            match result.iter_mut().find(|existing| existing.argb == argb) {
                Some(existing) => existing.population += population,
                None => result.push(QuantizedColor { argb, population }),
            }
        }
        result
    }
}

fn nearest<P: PointProvider>(provider: &P, point: Point, clusters: &[Point]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (j, &cluster) in clusters.iter().enumerate() {
        let distance = provider.distance(point, cluster);
        if distance < best_distance {
            best_distance = distance;
            best = j;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Argb = Argb::from_rgb(255, 0, 0);
    const GREEN: Argb = Argb::from_rgb(0, 255, 0);
    const BLUE: Argb = Argb::from_rgb(0, 0, 255);

    fn total(result: &[QuantizedColor]) -> u64 {
        result.iter().map(|c| c.population as u64).sum()
    }

    #[test]
    fn test_one_color() {
        let result = QuantizerWsmeans::quantize(&[RED; 4], &[], 128);
        assert_eq!(
            result,
            vec![QuantizedColor {
                argb: RED,
                population: 4
            }]
        );
    }

    #[test]
    fn test_seeded_clusters_keep_order() {
        let pixels = [RED, GREEN, GREEN, BLUE, BLUE, BLUE];
        let result = QuantizerWsmeans::quantize(&pixels, &[BLUE, GREEN, RED], 128);
        let colors: Vec<Argb> = result.iter().map(|c| c.argb).collect();
        assert_eq!(colors, vec![BLUE, GREEN, RED]);
        let populations: Vec<u32> = result.iter().map(|c| c.population).collect();
        assert_eq!(populations, vec![3, 2, 1]);
    }

    #[test]
    fn test_populations_sum_to_pixel_count() {
        let pixels: Vec<Argb> = (0..400u32)
            .map(|i| Argb::from_rgb((i * 7 % 256) as u8, (i * 13 % 256) as u8, (i % 256) as u8))
            .collect();
        let result = QuantizerWsmeans::quantize(&pixels, &[], 8);
        assert!(result.len() <= 8);
        assert_eq!(total(&result), 400);
    }

    #[test]
    fn test_drops_empty_clusters() {
        // Two seeds on the same color: ties go to the first, the second
        // stays empty.
        let result = QuantizerWsmeans::quantize(&[RED, RED], &[RED, RED], 8);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].population, 2);
    }

    #[test]
    fn test_deterministic() {
        let pixels: Vec<Argb> = (0..200u32)
            .map(|i| Argb::from_rgb((i * 31 % 256) as u8, (i * 3 % 256) as u8, 128))
            .collect();
        let a = QuantizerWsmeans::quantize(&pixels, &[], 16);
        let b = QuantizerWsmeans::quantize(&pixels, &[], 16);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty() {
        assert!(QuantizerWsmeans::quantize(&[], &[RED], 8).is_empty());
        assert!(QuantizerWsmeans::quantize(&[RED], &[], 0).is_empty());
    }
}
