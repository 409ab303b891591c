use super::*;

fn all_curves() -> Vec<Ease> {
    vec![
        Ease::Linear,
        Ease::EASE,
        Ease::in_out(Ease::EASE),
        Ease::CubicBezier {
            x1: 0.25,
            y1: 0.1,
            x2: 0.25,
            y2: 1.0,
        },
    ]
}

#[test]
fn endpoints_are_stable() {
    for ease in all_curves() {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn inputs_outside_unit_interval_clamp() {
    for ease in all_curves() {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in all_curves() {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn in_out_is_point_symmetric() {
    let ease = Ease::in_out(Ease::EASE);
    assert!((ease.apply(0.5) - 0.5).abs() < 1e-9);
    for t in [0.1, 0.2, 0.3, 0.45] {
        let lo = ease.apply(t);
        let hi = ease.apply(1.0 - t);
        assert!((lo + hi - 1.0).abs() < 1e-9, "t={t}");
    }
}

#[test]
fn ease_curve_starts_slow() {
    // cubic-bezier(0.42, 0, 1, 1) lags the identity across the open interval.
    for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
        assert!(Ease::EASE.apply(t) < t, "t={t}");
    }
}

#[test]
fn linear_bezier_matches_identity() {
    let ease = Ease::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };
    for t in [0.1, 0.33, 0.5, 0.8] {
        assert!((ease.apply(t) - t).abs() < 1e-9);
    }
}

#[test]
fn parses_from_json() {
    let e: Ease = serde_json::from_str("\"linear\"").unwrap();
    assert_eq!(e, Ease::Linear);
    let e: Ease =
        serde_json::from_str(r#"{"in_out": {"cubic_bezier": {"x1": 0.42, "y1": 0.0, "x2": 1.0, "y2": 1.0}}}"#)
            .unwrap();
    assert_eq!(e, Ease::in_out(Ease::EASE));
}
