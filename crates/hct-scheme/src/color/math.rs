//! Small numeric helpers shared by the color transforms.

/// Linear interpolation: `start` at `amount = 0`, `stop` at `amount = 1`.
#[inline]
pub fn lerp(start: f64, stop: f64, amount: f64) -> f64 {
    (1.0 - amount) * start + amount * stop
}

/// Sign of `num` as -1, 0 or 1 (unlike `f64::signum`, zero maps to zero).
#[inline]
pub fn signum(num: f64) -> f64 {
    if num < 0.0 {
        -1.0
    } else if num == 0.0 {
        0.0
    } else {
        1.0
    }
}

/// Wrap an integer angle into 0..360.
#[inline]
pub fn sanitize_degrees_int(degrees: i32) -> usize {
    degrees.rem_euclid(360) as usize
}

/// Wrap an angle into 0.0..360.0.
#[inline]
pub fn sanitize_degrees_double(degrees: f64) -> f64 {
    let degrees = degrees % 360.0;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Distance of two points on a circle, in degrees (0.0..=180.0).
#[inline]
pub fn difference_degrees(a: f64, b: f64) -> f64 {
    180.0 - ((a - b).abs() - 180.0).abs()
}

/// 1.0 when the shortest turn from `from` to `to` is increasing hue,
/// -1.0 otherwise.
#[inline]
pub fn rotation_direction(from: f64, to: f64) -> f64 {
    if sanitize_degrees_double(to - from) <= 180.0 {
        1.0
    } else {
        -1.0
    }
}

/// Row vector times the transpose of `matrix`, i.e. `matrix · row`.
#[inline]
pub fn matrix_multiply(row: [f64; 3], matrix: &[[f64; 3]; 3]) -> [f64; 3] {
    [
        row[0] * matrix[0][0] + row[1] * matrix[0][1] + row[2] * matrix[0][2],
        row[0] * matrix[1][0] + row[1] * matrix[1][1] + row[2] * matrix[1][2],
        row[0] * matrix[2][0] + row[1] * matrix[2][1] + row[2] * matrix[2][2],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_degrees() {
        assert_eq!(sanitize_degrees_int(-1), 359);
        assert_eq!(sanitize_degrees_int(360), 0);
        assert_eq!(sanitize_degrees_int(725), 5);
        assert_eq!(sanitize_degrees_double(-30.0), 330.0);
        assert_eq!(sanitize_degrees_double(420.0), 60.0);
        assert_eq!(sanitize_degrees_double(0.0), 0.0);
    }

    #[test]
    fn test_difference_degrees_wraps() {
        assert_eq!(difference_degrees(10.0, 350.0), 20.0);
        assert_eq!(difference_degrees(350.0, 10.0), 20.0);
        assert_eq!(difference_degrees(0.0, 180.0), 180.0);
        assert_eq!(difference_degrees(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_rotation_direction_takes_short_way() {
        assert_eq!(rotation_direction(10.0, 40.0), 1.0);
        assert_eq!(rotation_direction(40.0, 10.0), -1.0);
        assert_eq!(rotation_direction(350.0, 10.0), 1.0);
        assert_eq!(rotation_direction(10.0, 350.0), -1.0);
        assert_eq!(rotation_direction(0.0, 180.0), 1.0);
    }

    #[test]
    fn test_signum_and_lerp() {
        assert_eq!(signum(-0.5), -1.0);
        assert_eq!(signum(0.0), 0.0);
        assert_eq!(signum(3.0), 1.0);
        assert_eq!(lerp(2.0, 4.0, 0.5), 3.0);
    }
}
