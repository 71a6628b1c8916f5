//! Easing curves.

/// Cubic ease-in-out over `progress` in `[0, 1]`. Inputs outside the range
/// are clamped.
pub fn ease_in_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}
