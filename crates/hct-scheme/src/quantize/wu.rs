//! Wu's greatest-variance box-splitting quantizer
//!
//! Colors are binned into a 33x33x33 histogram (5 bits per channel plus a
//! zero border) and turned into cumulative moments, so the weight and color
//! sums of any axis-aligned box come from eight lookups. Boxes are split
//! repeatedly along the cut that maximizes the between-box variance, always
//! splitting the box with the largest variance next.
//!
//! Xiaolin Wu, "Efficient Statistical Computations for Optimal Color
//! Quantization", Graphics Gems II (1991).

use super::map::QuantizerMap;
use crate::color::Argb;

const INDEX_BITS: u32 = 5;
const BITS_TO_REMOVE: u32 = 8 - INDEX_BITS;
const SIDE_LENGTH: usize = (1 << INDEX_BITS) + 1;
const TOTAL_SIZE: usize = SIDE_LENGTH * SIDE_LENGTH * SIDE_LENGTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Red,
    Green,
    Blue,
}

/// Box in histogram coordinates; lower bounds exclusive, upper inclusive.
#[derive(Debug, Clone, Copy, Default)]
struct Cube {
    r0: usize,
    r1: usize,
    g0: usize,
    g1: usize,
    b0: usize,
    b1: usize,
    vol: usize,
}

impl Cube {
    fn update_vol(&mut self) {
        self.vol = (self.r1 - self.r0) * (self.g1 - self.g0) * (self.b1 - self.b0);
    }
}

struct Maximized {
    cut: Option<usize>,
    maximum: f64,
}

#[inline]
fn index(r: usize, g: usize, b: usize) -> usize {
    (r << (INDEX_BITS * 2)) + (r << (INDEX_BITS + 1)) + r + (g << INDEX_BITS) + g + b
}

/// Box-splitting quantizer over a cumulative moment cube.
pub struct QuantizerWu {
    weights: Vec<i64>,
    moments_r: Vec<i64>,
    moments_g: Vec<i64>,
    moments_b: Vec<i64>,
    moments: Vec<f64>,
    cubes: Vec<Cube>,
}

impl Default for QuantizerWu {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantizerWu {
    pub fn new() -> Self {
        Self {
            weights: vec![0; TOTAL_SIZE],
            moments_r: vec![0; TOTAL_SIZE],
            moments_g: vec![0; TOTAL_SIZE],
            moments_b: vec![0; TOTAL_SIZE],
            moments: vec![0.0; TOTAL_SIZE],
            cubes: Vec::new(),
        }
    }

    /// Reduce `pixels` to at most `max_colors` box centroids.
    ///
    /// Fewer colors come back when the histogram runs out of boxes worth
    /// splitting. Centroids are rounded to the nearest channel value.
    pub fn quantize(&mut self, pixels: &[Argb], max_colors: usize) -> Vec<Argb> {
        if pixels.is_empty() || max_colors == 0 {
            return Vec::new();
        }
        let occupied = self.construct_histogram(pixels);
        self.compute_moments();
        // Every box holds at least one occupied cell
        let color_count = self.create_boxes(max_colors.min(occupied));
        self.create_result(color_count)
    }

    /// Bin `pixels` and return how many histogram cells they touch.
    fn construct_histogram(&mut self, pixels: &[Argb]) -> usize {
        self.weights.fill(0);
        self.moments_r.fill(0);
        self.moments_g.fill(0);
        self.moments_b.fill(0);
        self.moments.fill(0.0);

        let mut occupied = 0;
        for (color, count) in QuantizerMap::quantize(pixels) {
            let [red, green, blue] = color.to_rgb();
            let i = index(
                (red as usize >> BITS_TO_REMOVE) + 1,
                (green as usize >> BITS_TO_REMOVE) + 1,
                (blue as usize >> BITS_TO_REMOVE) + 1,
            );
            let (r, g, b, count) = (red as i64, green as i64, blue as i64, count as i64);
            if self.weights[i] == 0 {
                occupied += 1;
            }
            self.weights[i] += count;
            self.moments_r[i] += count * r;
            self.moments_g[i] += count * g;
            self.moments_b[i] += count * b;
            self.moments[i] += (count * (r * r + g * g + b * b)) as f64;
        }
        occupied
    }

    fn compute_moments(&mut self) {
        for r in 1..SIDE_LENGTH {
            let mut area = [0i64; SIDE_LENGTH];
            let mut area_r = [0i64; SIDE_LENGTH];
            let mut area_g = [0i64; SIDE_LENGTH];
            let mut area_b = [0i64; SIDE_LENGTH];
            let mut area2 = [0.0f64; SIDE_LENGTH];

            for g in 1..SIDE_LENGTH {
                let mut line = 0i64;
                let mut line_r = 0i64;
                let mut line_g = 0i64;
                let mut line_b = 0i64;
                let mut line2 = 0.0f64;

                for b in 1..SIDE_LENGTH {
                    let i = index(r, g, b);
                    line += self.weights[i];
                    line_r += self.moments_r[i];
                    line_g += self.moments_g[i];
                    line_b += self.moments_b[i];
                    line2 += self.moments[i];

                    area[b] += line;
                    area_r[b] += line_r;
                    area_g[b] += line_g;
                    area_b[b] += line_b;
                    area2[b] += line2;

                    let previous = index(r - 1, g, b);
                    self.weights[i] = self.weights[previous] + area[b];
                    self.moments_r[i] = self.moments_r[previous] + area_r[b];
                    self.moments_g[i] = self.moments_g[previous] + area_g[b];
                    self.moments_b[i] = self.moments_b[previous] + area_b[b];
                    self.moments[i] = self.moments[previous] + area2[b];
                }
            }
        }
    }

    /// Split boxes until `max_colors` exist or no box has variance left.
    /// Returns the number of boxes produced.
    fn create_boxes(&mut self, max_colors: usize) -> usize {
        self.cubes = vec![Cube::default(); max_colors];
        let mut volume_variance = vec![0.0f64; max_colors];
        self.cubes[0] = Cube {
            r1: SIDE_LENGTH - 1,
            g1: SIDE_LENGTH - 1,
            b1: SIDE_LENGTH - 1,
            ..Cube::default()
        };

        let mut generated = max_colors;
        let mut next = 0usize;
        let mut i = 1usize;
        while i < max_colors {
            if self.cut(next, i) {
                volume_variance[next] = if self.cubes[next].vol > 1 {
                    self.variance(&self.cubes[next])
                } else {
                    0.0
                };
                volume_variance[i] = if self.cubes[i].vol > 1 {
                    self.variance(&self.cubes[i])
                } else {
                    0.0
                };
            } else {
                volume_variance[next] = 0.0;
                i -= 1;
            }

            next = 0;
            let mut temp = volume_variance[0];
            for (j, &variance) in volume_variance.iter().enumerate().take(i + 1).skip(1) {
                if variance > temp {
                    temp = variance;
                    next = j;
                }
            }
            if temp <= 0.0 {
                generated = i + 1;
                break;
            }
            i += 1;
        }
        generated
    }

    fn create_result(&self, color_count: usize) -> Vec<Argb> {
        self.cubes[..color_count]
            .iter()
            .filter_map(|cube| {
                let weight = volume(cube, &self.weights);
                if weight <= 0 {
                    return None;
                }
                let channel = |moment: &[i64]| {
                    (volume(cube, moment) as f64 / weight as f64)
                        .round()
                        .clamp(0.0, 255.0) as u8
                };
                Some(Argb::from_rgb(
                    channel(&self.moments_r),
                    channel(&self.moments_g),
                    channel(&self.moments_b),
                ))
            })
            .collect()
    }

    fn variance(&self, cube: &Cube) -> f64 {
        let dr = volume(cube, &self.moments_r) as f64;
        let dg = volume(cube, &self.moments_g) as f64;
        let db = volume(cube, &self.moments_b) as f64;
        let xx = volume_f64(cube, &self.moments);
        let hypotenuse = dr * dr + dg * dg + db * db;
        let weight = volume(cube, &self.weights) as f64;
        xx - hypotenuse / weight
    }

    fn cut(&mut self, next: usize, current: usize) -> bool {
        let mut one = self.cubes[next];
        let mut two = self.cubes[current];

        let whole = [
            volume(&one, &self.moments_r),
            volume(&one, &self.moments_g),
            volume(&one, &self.moments_b),
            volume(&one, &self.weights),
        ];

        let max_r = self.maximize(&one, Direction::Red, one.r0 + 1, one.r1, whole);
        let max_g = self.maximize(&one, Direction::Green, one.g0 + 1, one.g1, whole);
        let max_b = self.maximize(&one, Direction::Blue, one.b0 + 1, one.b1, whole);

        let (direction, cut) = if max_r.maximum >= max_g.maximum && max_r.maximum >= max_b.maximum
        {
            match max_r.cut {
                Some(cut) => (Direction::Red, cut),
                None => return false,
            }
        } else if max_g.maximum >= max_r.maximum && max_g.maximum >= max_b.maximum {
            (Direction::Green, max_g.cut.unwrap_or_default())
        } else {
            (Direction::Blue, max_b.cut.unwrap_or_default())
        };

        two.r1 = one.r1;
        two.g1 = one.g1;
        two.b1 = one.b1;

        match direction {
            Direction::Red => {
                one.r1 = cut;
                two.r0 = one.r1;
                two.g0 = one.g0;
                two.b0 = one.b0;
            }
            Direction::Green => {
                one.g1 = cut;
                two.r0 = one.r0;
                two.g0 = one.g1;
                two.b0 = one.b0;
            }
            Direction::Blue => {
                one.b1 = cut;
                two.r0 = one.r0;
                two.g0 = one.g0;
                two.b0 = one.b1;
            }
        }

        one.update_vol();
        two.update_vol();
        self.cubes[next] = one;
        self.cubes[current] = two;
        true
    }

    fn maximize(
        &self,
        cube: &Cube,
        direction: Direction,
        first: usize,
        last: usize,
        whole: [i64; 4],
    ) -> Maximized {
        let [whole_r, whole_g, whole_b, whole_w] = whole;
        let bottom_r = bottom(cube, direction, &self.moments_r);
        let bottom_g = bottom(cube, direction, &self.moments_g);
        let bottom_b = bottom(cube, direction, &self.moments_b);
        let bottom_w = bottom(cube, direction, &self.weights);

        let mut maximum = 0.0;
        let mut cut = None;
        for i in first..last {
            let mut half_r = bottom_r + top(cube, direction, i, &self.moments_r);
            let mut half_g = bottom_g + top(cube, direction, i, &self.moments_g);
            let mut half_b = bottom_b + top(cube, direction, i, &self.moments_b);
            let mut half_w = bottom_w + top(cube, direction, i, &self.weights);
            if half_w == 0 {
                continue;
            }
            let mut temp = sum_of_squares(half_r, half_g, half_b) / half_w as f64;

            half_r = whole_r - half_r;
            half_g = whole_g - half_g;
            half_b = whole_b - half_b;
            half_w = whole_w - half_w;
            if half_w == 0 {
                continue;
            }
            temp += sum_of_squares(half_r, half_g, half_b) / half_w as f64;

            if temp > maximum {
                maximum = temp;
                cut = Some(i);
            }
        }
        Maximized { cut, maximum }
    }
}

#[inline]
fn sum_of_squares(r: i64, g: i64, b: i64) -> f64 {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    r * r + g * g + b * b
}

fn volume(cube: &Cube, moment: &[i64]) -> i64 {
    moment[index(cube.r1, cube.g1, cube.b1)]
        - moment[index(cube.r1, cube.g1, cube.b0)]
        - moment[index(cube.r1, cube.g0, cube.b1)]
        + moment[index(cube.r1, cube.g0, cube.b0)]
        - moment[index(cube.r0, cube.g1, cube.b1)]
        + moment[index(cube.r0, cube.g1, cube.b0)]
        + moment[index(cube.r0, cube.g0, cube.b1)]
        - moment[index(cube.r0, cube.g0, cube.b0)]
}

fn volume_f64(cube: &Cube, moment: &[f64]) -> f64 {
    moment[index(cube.r1, cube.g1, cube.b1)]
        - moment[index(cube.r1, cube.g1, cube.b0)]
        - moment[index(cube.r1, cube.g0, cube.b1)]
        + moment[index(cube.r1, cube.g0, cube.b0)]
        - moment[index(cube.r0, cube.g1, cube.b1)]
        + moment[index(cube.r0, cube.g1, cube.b0)]
        + moment[index(cube.r0, cube.g0, cube.b1)]
        - moment[index(cube.r0, cube.g0, cube.b0)]
}

/// Moment of the face at the box's lower bound along `direction`.
fn bottom(cube: &Cube, direction: Direction, moment: &[i64]) -> i64 {
    match direction {
        Direction::Red => {
            -moment[index(cube.r0, cube.g1, cube.b1)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Green => {
            -moment[index(cube.r1, cube.g0, cube.b1)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g0, cube.b1)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
        Direction::Blue => {
            -moment[index(cube.r1, cube.g1, cube.b0)]
                + moment[index(cube.r1, cube.g0, cube.b0)]
                + moment[index(cube.r0, cube.g1, cube.b0)]
                - moment[index(cube.r0, cube.g0, cube.b0)]
        }
    }
}

/// Moment of the face at `position` along `direction`.
fn top(cube: &Cube, direction: Direction, position: usize, moment: &[i64]) -> i64 {
    match direction {
        Direction::Red => {
            moment[index(position, cube.g1, cube.b1)]
                - moment[index(position, cube.g1, cube.b0)]
                - moment[index(position, cube.g0, cube.b1)]
                + moment[index(position, cube.g0, cube.b0)]
        }
        Direction::Green => {
            moment[index(cube.r1, position, cube.b1)]
                - moment[index(cube.r1, position, cube.b0)]
                - moment[index(cube.r0, position, cube.b1)]
                + moment[index(cube.r0, position, cube.b0)]
        }
        Direction::Blue => {
            moment[index(cube.r1, cube.g1, position)]
                - moment[index(cube.r1, cube.g0, position)]
                - moment[index(cube.r0, cube.g1, position)]
                + moment[index(cube.r0, cube.g0, position)]
        }
    }
}
