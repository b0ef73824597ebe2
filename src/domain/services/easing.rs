/// Cubic ease-in-out over [0, 1]. Inputs outside the range are clamped.
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear blend between `start` and `end`
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}
