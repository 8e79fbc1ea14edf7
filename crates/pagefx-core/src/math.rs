/// Ease-out cubic: fast start, decelerating to rest at `t = 1`.
pub fn ease_out_cubic(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Clamp to [0,1], mapping NaN to 0.
pub fn saturate(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Collapse `-0.0` to `0.0` so formatted CSS never reads `-0deg`.
#[inline]
pub fn unsign_zero(x: f32) -> f32 {
    x + 0.0
}

/// Uniform sample in `[lo, hi]`, tolerating an empty range.
pub fn sample_range<R: rand::Rng>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
