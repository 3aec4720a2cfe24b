use urania::angle::{closest_distance, forward_distance, normalize, normalize_signed};

const SAMPLES: &[f64] = &[
    -720.5, -361.0, -180.0, -90.25, -0.0001, 0.0, 0.5, 29.99, 90.0, 179.999, 180.0, 180.001,
    270.0, 359.9999, 360.0, 725.0,
];

#[test]
fn test_normalize_ranges() {
    for &a in SAMPLES {
        let n = normalize(a);
        assert!((0.0..360.0).contains(&n), "normalize({a}) = {n}");
        let s = normalize_signed(a);
        assert!(s > -180.0 && s <= 180.0, "normalize_signed({a}) = {s}");
    }
}

#[test]
fn test_closest_distance_is_antisymmetric() {
    for &a in SAMPLES {
        for &b in SAMPLES {
            let ab = closest_distance(a, b);
            let ba = closest_distance(b, a);
            assert!(ab.abs() <= 180.0);
            if ab.abs() < 180.0 - 1e-9 {
                assert!((ab + ba).abs() < 1e-9, "{a} {b}: {ab} vs {ba}");
            } else {
                assert!((ab.abs() - ba.abs()).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_forward_and_closest_agree() {
    for &a in SAMPLES {
        for &b in SAMPLES {
            let forward = forward_distance(a, b);
            assert!((0.0..360.0).contains(&forward));
            let closest = closest_distance(a, b);
            let expected = if forward > 180.0 { forward - 360.0 } else { forward };
            assert!((closest - expected).abs() < 1e-9);
        }
    }
}

#[test]
fn test_known_distances() {
    assert_eq!(closest_distance(10.0, 100.0), 90.0);
    assert_eq!(closest_distance(100.0, 10.0), -90.0);
    assert!((closest_distance(350.0, 10.0) - 20.0).abs() < 1e-9);
    assert!((closest_distance(10.0, 350.0) + 20.0).abs() < 1e-9);
    assert_eq!(closest_distance(0.0, 180.0), 180.0);
    assert!((forward_distance(350.0, 10.0) - 20.0).abs() < 1e-9);
}
