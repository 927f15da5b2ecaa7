use trinkets::rounding::{ceil_of, floor_of, round_of, RoundingAccessors};

#[test]
fn test_rounding_views() {
    let view = 22.11_f64.rounding();
    assert_eq!(view.ceil(), 23.0);
    assert_eq!(view.floor(), 22.0);
    assert_eq!(view.round(), 22.0);
}

#[test]
fn test_views_agree_with_free_functions() {
    for x in [-3.5_f64, -2.5, -0.4, 0.0, 0.5, 1.49, 7.0, 22.11, 1e15 + 0.5] {
        let view = x.rounding();
        assert_eq!(view.ceil(), ceil_of(x));
        assert_eq!(view.floor(), floor_of(x));
        assert_eq!(view.round(), round_of(x));
        assert!(view.floor() <= view.round() && view.round() <= view.ceil());
    }
}

#[test]
fn test_integers_are_fixed_points() {
    for n in [-7_i64, 0, 1, 42, 1 << 40] {
        let view = n.rounding();
        assert_eq!(view.ceil(), n as f64);
        assert_eq!(view.floor(), n as f64);
        assert_eq!(view.round(), n as f64);
    }
}
