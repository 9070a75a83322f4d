// Union operators for combining SDF distance values.
//
// The scene is a single union of primitives; the smooth variant rounds the
// seams where two shapes meet, with the blend radius `k`.

/// Boolean union of two SDF values (logical OR).
/// The point is inside whichever shape is closer.
pub fn union(d1: f64, d2: f64) -> f64 {
    d1.min(d2)
}

/// Smooth (polynomial) union with blending radius `k`.
///
/// `h = clamp(0.5 + 0.5 * (d2 - d1) / k, 0, 1)`, result
/// `lerp(d2, d1, h) - k * h * (1 - h)`. The blend dips below `min(d1, d2)`
/// by at most `k / 4` where the operands are equal.
/// A non-positive `k` degenerates to a sharp union.
pub fn smooth_union(d1: f64, d2: f64, k: f64) -> f64 {
    if k <= 0.0 {
        return union(d1, d2);
    }
    let h = (0.5 + 0.5 * (d2 - d1) / k).clamp(0.0, 1.0);
    d2 * (1.0 - h) + d1 * h - k * h * (1.0 - h)
}

/// Fold one more distance into a running union.
///
/// Operands at or beyond `max_distance` (disabled or far-away primitives)
/// take a plain `min`: blending against a huge sentinel would drag the
/// result away from the near shape.
pub fn blend_step(acc: f64, d: f64, k: f64, max_distance: f64) -> f64 {
    if acc >= max_distance || d >= max_distance {
        union(acc, d)
    } else {
        smooth_union(acc, d, k)
    }
}
