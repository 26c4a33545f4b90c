//! Color spaces the k-means refinement can cluster in.

use crate::color::{argb_from_lab, lab_from_argb, Argb};

/// A point in some three-component color space.
pub type Point = [f64; 3];

/// Maps colors into a space where clustering happens and back.
///
/// `distance` only needs to preserve ordering, so implementations are free
/// to return the squared Euclidean distance.
pub trait PointProvider {
    fn from_argb(&self, argb: Argb) -> Point;
    fn to_argb(&self, point: Point) -> Argb;
    fn distance(&self, from: Point, to: Point) -> f64;
}

/// Clusters in CIE L*a*b* with squared Euclidean distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabPointProvider;

impl PointProvider for LabPointProvider {
    #[inline]
    fn from_argb(&self, argb: Argb) -> Point {
        lab_from_argb(argb)
    }

    #[inline]
    fn to_argb(&self, point: Point) -> Argb {
        argb_from_lab(point[0], point[1], point[2])
    }

    #[inline]
    fn distance(&self, from: Point, to: Point) -> f64 {
        let d_l = from[0] - to[0];
        let d_a = from[1] - to[1];
        let d_b = from[2] - to[2];
        d_l * d_l + d_a * d_a + d_b * d_b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_squared() {
        let provider = LabPointProvider;
        assert_eq!(provider.distance([0.0, 0.0, 0.0], [3.0, 4.0, 0.0]), 25.0);
        assert_eq!(provider.distance([1.0, 2.0, 3.0], [1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_round_trip() {
        let provider = LabPointProvider;
        let color = Argb::from_rgb(200, 40, 90);
        assert_eq!(provider.to_argb(provider.from_argb(color)), color);
    }
}
