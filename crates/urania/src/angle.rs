//! Degree-valued angle arithmetic shared by both engines.
//!
//! All functions are total: any finite or infinite input produces a value,
//! although NaN propagates unchanged.

/// Reduces an angle to `[0, 360)`.
pub fn normalize(angle: f64) -> f64 {
    let value = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if value >= 360.0 {
        0.0
    } else {
        value
    }
}

/// Reduces an angle to `(-180, 180]`.
pub fn normalize_signed(angle: f64) -> f64 {
    let value = normalize(angle);
    if value > 180.0 {
        value - 360.0
    } else {
        value
    }
}

/// Counter-clockwise distance from `a` to `b`, in `[0, 360)`.
pub fn forward_distance(a: f64, b: f64) -> f64 {
    normalize(b - a)
}

/// Signed shortest distance from `a` to `b`, counter-clockwise positive.
pub fn closest_distance(a: f64, b: f64) -> f64 {
    normalize_signed(b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(360.0), 0.0);
        assert_eq!(normalize(370.0), 10.0);
        assert_eq!(normalize(-10.0), 350.0);
        assert_eq!(normalize(-720.0), 0.0);
        assert!(normalize(-1e-20) < 360.0);
    }

    #[test]
    fn test_normalize_signed() {
        assert_eq!(normalize_signed(180.0), 180.0);
        assert_eq!(normalize_signed(-180.0), 180.0);
        assert_eq!(normalize_signed(190.0), -170.0);
        assert_eq!(normalize_signed(-90.0), -90.0);
    }

    #[test]
    fn test_distances() {
        assert_eq!(forward_distance(350.0, 10.0), 20.0);
        assert_eq!(forward_distance(10.0, 350.0), 340.0);
        assert_eq!(closest_distance(350.0, 10.0), 20.0);
        assert_eq!(closest_distance(10.0, 350.0), -20.0);
        assert_eq!(closest_distance(10.0, 100.0), 90.0);
    }
}
