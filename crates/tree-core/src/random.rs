use rand::Rng;

/// Uniform integer in `lo..=hi`.
#[inline]
pub fn rand_int<R: Rng + ?Sized>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    rng.gen_range(lo..=hi)
}

/// Uniform float in `[lo, hi)`.
///
/// Computed as `lo + (hi - lo) * u` so a degenerate range yields `lo` instead
/// of panicking. A draw that rounds up to `hi` falls back to `lo`.
#[inline]
pub fn rand_float<R: Rng + ?Sized>(rng: &mut R, lo: f32, hi: f32) -> f32 {
    let v = lo + (hi - lo) * rng.gen::<f32>();
    if v < hi {
        v
    } else {
        lo
    }
}

#[inline]
pub fn rand_in<R: Rng + ?Sized>(rng: &mut R, range: (f32, f32)) -> f32 {
    rand_float(rng, range.0, range.1)
}

/// Uniform float in `(-range / 2, range / 2]`.
#[inline]
pub fn rand_spread<R: Rng + ?Sized>(rng: &mut R, range: f32) -> f32 {
    range * (0.5 - rng.gen::<f32>())
}

/// Uniform angle in radians over a full turn.
#[inline]
pub fn rand_angle<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.gen::<f32>() * 360.0).to_radians()
}

#[inline]
pub fn rand_rgb<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    [rng.gen(), rng.gen(), rng.gen()]
}
