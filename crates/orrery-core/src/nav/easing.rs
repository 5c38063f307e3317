//! Pure easing function for the section scroll animation.

/// Cubic ease-in-out: accelerate through the first half, decelerate
/// symmetrically through the second.
///
/// `f(t) = 4t³` for `t < 0.5`, else `1 - 4(1-t)³`.
#[inline]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = 1.0 - t;
        1.0 - 4.0 * inv * inv * inv
    }
}
