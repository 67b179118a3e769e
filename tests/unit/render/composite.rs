use super::*;

fn process_inks() -> PerChannel<Rgb> {
    PerChannel {
        cyan: Rgb::new(0.0, 1.0, 1.0),
        magenta: Rgb::new(1.0, 0.0, 1.0),
        yellow: Rgb::new(1.0, 1.0, 0.0),
        black: Rgb::BLACK,
    }
}

#[test]
fn no_coverage_shows_background() {
    let bg = Rgb::new(0.9, 0.8, 0.7);
    assert_eq!(composite_inks(&[0.0; 4], &process_inks(), bg), bg);
}

#[test]
fn full_coverage_multiplies_inks() {
    let out = composite_inks(&[1.0, 1.0, 0.0, 0.0], &process_inks(), Rgb::WHITE);
    assert_eq!(out, Rgb::new(0.0, 0.0, 1.0));
    let out = composite_inks(&[0.0, 0.0, 0.0, 1.0], &process_inks(), Rgb::WHITE);
    assert_eq!(out, Rgb::BLACK);
}

#[test]
fn partial_coverage_mixes_toward_tint() {
    let out = composite_inks(&[0.5, 0.0, 0.0, 0.0], &process_inks(), Rgb::WHITE);
    assert_eq!(out, Rgb::new(0.5, 1.0, 1.0));
}

#[test]
fn layer_order_matters_for_partial_coverage() {
    let inks = PerChannel {
        cyan: Rgb::gray(0.5),
        magenta: Rgb::gray(0.2),
        yellow: Rgb::WHITE,
        black: Rgb::WHITE,
    };
    let swapped = PerChannel {
        cyan: inks.magenta,
        magenta: inks.cyan,
        ..inks
    };
    let a = composite_inks(&[0.5, 1.0, 0.0, 0.0], &inks, Rgb::WHITE);
    let b = composite_inks(&[0.5, 1.0, 0.0, 0.0], &swapped, Rgb::WHITE);
    assert!((a.r - b.r).abs() > 1e-6);
}

#[test]
fn overlay_blend_with_mid_gray_is_identity() {
    for i in 0..=10 {
        let v = f64::from(i) / 10.0;
        assert!((overlay_blend(v, 0.5) - v).abs() < 1e-12);
    }
    assert_eq!(overlay_blend(0.25, 1.0), 0.5);
    assert_eq!(overlay_blend(0.75, 0.0), 0.5);
}

#[test]
fn disabled_grain_is_a_no_op_for_any_size() {
    let color = Rgb::new(0.3, 0.6, 0.9);
    for size in [0.0, 0.01, 0.5, 40.0] {
        let grain = GrainParams {
            mixing: 0.0,
            overlay: 0.0,
            size,
        };
        assert_eq!(apply_grain(color, Vec2::new(10.5, 3.5), &grain), color);
    }
}

#[test]
fn mixing_pulls_toward_gray_by_at_most_thirty_percent() {
    let grain = GrainParams {
        mixing: 1.0,
        overlay: 0.0,
        size: 0.0,
    };
    for x in 0..50 {
        let out = apply_grain(Rgb::WHITE, Vec2::new(f64::from(x) + 0.5, 0.5), &grain);
        assert!(out.r >= 0.7 - 1e-12 && out.r <= 1.0);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }
}

#[test]
fn overlay_modulates_brightness_within_bounds() {
    let grain = GrainParams {
        mixing: 0.0,
        overlay: 1.0,
        size: 0.0,
    };
    let base = Rgb::gray(0.5);
    let mut seen_dark = false;
    let mut seen_bright = false;
    for x in 0..200 {
        let out = apply_grain(base, Vec2::new(f64::from(x) + 0.5, 7.5), &grain);
        assert!(out.r >= 0.25 - 1e-12 && out.r < 0.75);
        seen_dark |= out.r < 0.5;
        seen_bright |= out.r > 0.5;
    }
    assert!(seen_dark && seen_bright);
}

#[test]
fn grain_size_groups_pixels_into_clumps() {
    let grain = GrainParams {
        mixing: 1.0,
        overlay: 0.0,
        size: 2.0,
    };
    // pitch = 10px: pixels within one 10px lattice cell share a grain value.
    let a = apply_grain(Rgb::WHITE, Vec2::new(0.5, 0.5), &grain);
    let b = apply_grain(Rgb::WHITE, Vec2::new(9.5, 9.5), &grain);
    assert_eq!(a, b);
}
