use kurbo::Vec2;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

const JITTER_X_SALT: u64 = 0x9e37_79b9_7f4a_7c15;
const JITTER_Y_SALT: u64 = 0xc2b2_ae3d_27d4_eb4f;
const GRAIN_SALT: u64 = 0x1656_67b1_9e37_79f9;

// FNV's low bits are weak for short inputs; finish with a 64-bit mixer.
fn avalanche(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(0xff51_afd7_ed55_8ccd);
    h ^= h >> 33;
    h = h.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    h ^= h >> 33;
    h
}

pub(crate) fn hash_lattice(ix: i64, iy: i64, salt: u64) -> u64 {
    let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS ^ salt);
    h.write_u64(ix as u64);
    h.write_u64(iy as u64);
    avalanche(h.finish())
}

/// Map the top 53 bits of a hash onto `[0, 1)`.
pub(crate) fn unit_from_bits(bits: u64) -> f64 {
    (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// Deterministic per-cell offset in `[-1, 1)²`.
pub(crate) fn cell_jitter(ix: i64, iy: i64) -> Vec2 {
    let x = unit_from_bits(hash_lattice(ix, iy, JITTER_X_SALT));
    let y = unit_from_bits(hash_lattice(ix, iy, JITTER_Y_SALT));
    Vec2::new(x * 2.0 - 1.0, y * 2.0 - 1.0)
}

/// Deterministic grain value in `[0, 1)` for the lattice cell containing `p`.
pub(crate) fn grain_noise(p: Vec2) -> f64 {
    unit_from_bits(hash_lattice(floor_i64(p.x), floor_i64(p.y), GRAIN_SALT))
}

pub(crate) fn floor_i64(v: f64) -> i64 {
    // `as` saturates and maps NaN to 0.
    v.floor() as i64
}

/// Hermite smoothstep. A degenerate band (`e0 == e1`) behaves like a step at `e0`.
pub(crate) fn smoothstep(e0: f64, e1: f64, x: f64) -> f64 {
    if e1 <= e0 {
        return if x < e0 { 0.0 } else { 1.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub(crate) fn mix(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Counter-clockwise rotation by a precomputed `(sin, cos)` pair.
pub(crate) fn rotate(p: Vec2, sin: f64, cos: f64) -> Vec2 {
    Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
