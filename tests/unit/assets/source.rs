use super::*;

fn assert_rgb_close(a: Rgb, b: Rgb) {
    let d = (a.r - b.r).abs().max((a.g - b.g).abs()).max((a.b - b.b).abs());
    assert!(d < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn rejects_empty_and_mismatched_buffers() {
    assert!(matches!(
        SourceImage::new(0, 3, Vec::new()),
        Err(HalftoneError::InvalidInput(_))
    ));
    assert!(matches!(
        SourceImage::solid(4, 0, Rgb::WHITE),
        Err(HalftoneError::InvalidInput(_))
    ));
    assert!(SourceImage::new(2, 2, vec![Rgb::WHITE; 3]).is_err());
    assert!(SourceImage::from_rgba8(1, 1, &[0, 0, 0]).is_err());
}

#[test]
fn from_rgba8_drops_alpha() {
    let img = SourceImage::from_rgba8(1, 1, &[255, 0, 51, 0]).unwrap();
    assert_eq!(img.pixel(0, 0), Rgb::new(1.0, 0.0, 0.2));
}

#[test]
fn sample_at_texel_centers_is_exact() {
    let img = SourceImage::from_fn(2, 1, |x, _| Rgb::gray(f64::from(x))).unwrap();
    assert_rgb_close(img.sample(Vec2::new(0.25, 0.5)), Rgb::gray(0.0));
    assert_rgb_close(img.sample(Vec2::new(0.75, 0.5)), Rgb::gray(1.0));
}

#[test]
fn sample_interpolates_between_texels() {
    let img = SourceImage::from_fn(2, 1, |x, _| Rgb::gray(f64::from(x))).unwrap();
    assert_rgb_close(img.sample(Vec2::new(0.5, 0.5)), Rgb::gray(0.5));
}

#[test]
fn sample_clamps_outside_unit_square() {
    let img = SourceImage::from_fn(3, 3, |x, y| Rgb::new(f64::from(x) / 2.0, f64::from(y) / 2.0, 0.0))
        .unwrap();
    assert_rgb_close(img.sample(Vec2::new(-4.0, -1.0)), img.pixel(0, 0));
    assert_rgb_close(img.sample(Vec2::new(9.0, 2.0)), img.pixel(2, 2));
    assert_rgb_close(img.sample(Vec2::new(f64::NAN, 1.0)), img.pixel(0, 2));
}

#[test]
fn single_pixel_image_samples_constant() {
    let img = SourceImage::solid(1, 1, Rgb::new(0.1, 0.2, 0.3)).unwrap();
    for uv in [Vec2::new(0.0, 0.0), Vec2::new(0.5, 0.9), Vec2::new(1.0, 1.0)] {
        assert_rgb_close(img.sample(uv), Rgb::new(0.1, 0.2, 0.3));
    }
}
