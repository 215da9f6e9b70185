//! Easing curves for the interval-driven fallback animation

/// Control points of the ease-out curve used by the fallback animator
pub const EASE_OUT_POINTS: [f32; 4] = [0.0, 0.7, 1.0, 1.0];

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a) * t + a
}

/// Evaluate a one-dimensional cubic Bezier curve at `t` by repeated linear
/// interpolation of its control points
#[inline]
pub fn cubic_bezier(points: [f32; 4], t: f32) -> f32 {
    let [p0, p1, p2, p3] = points;
    let a = lerp(p0, p1, t);
    let b = lerp(p1, p2, t);
    let c = lerp(p2, p3, t);
    lerp(lerp(a, b, t), lerp(b, c, t), t)
}

/// Ease-out curve: fast start, gentle landing
#[inline]
pub fn ease_out(t: f32) -> f32 {
    cubic_bezier(EASE_OUT_POINTS, t.clamp(0.0, 1.0))
}
