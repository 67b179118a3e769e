use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    a.write_bytes(b"halftone");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_bytes(b"half");
    b.write_bytes(b"tone");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn cell_jitter_is_deterministic_and_bounded() {
    for ix in -20..20 {
        for iy in -20..20 {
            let j = cell_jitter(ix, iy);
            assert_eq!(j, cell_jitter(ix, iy));
            assert!((-1.0..1.0).contains(&j.x));
            assert!((-1.0..1.0).contains(&j.y));
        }
    }
}

#[test]
fn cell_jitter_differs_between_neighbours() {
    let a = cell_jitter(3, 7);
    assert_ne!(a, cell_jitter(4, 7));
    assert_ne!(a, cell_jitter(3, 8));
}

#[test]
fn cell_jitter_is_roughly_centered() {
    let mut sum = Vec2::ZERO;
    let n = 64 * 64;
    for ix in 0..64 {
        for iy in 0..64 {
            sum += cell_jitter(ix, iy);
        }
    }
    let mean = sum / f64::from(n);
    assert!(mean.x.abs() < 0.05 && mean.y.abs() < 0.05, "{mean:?}");
}

#[test]
fn grain_noise_is_constant_within_a_lattice_cell() {
    let a = grain_noise(Vec2::new(4.1, 9.2));
    assert_eq!(a, grain_noise(Vec2::new(4.9, 9.8)));
    assert!((0.0..1.0).contains(&a));
}

#[test]
fn smoothstep_edges_and_degenerate_band() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
    assert_eq!(smoothstep(1.0, 1.0, 0.99), 0.0);
    assert_eq!(smoothstep(1.0, 1.0, 1.0), 1.0);
}

#[test]
fn rotate_quarter_turn() {
    let (s, c) = std::f64::consts::FRAC_PI_2.sin_cos();
    let p = rotate(Vec2::new(1.0, 0.0), s, c);
    assert!((p.x - 0.0).abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
}
