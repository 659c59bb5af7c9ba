//! Critically damped smoothing
//!
//! Spring-damper approach toward a moving target, stable for any frame time.
//! The exponential decay is approximated with the 3rd-order polynomial
//! `1 / (1 + x + 0.48x^2 + 0.235x^3)` from Game Programming Gems 4, ch. 1.10.
//!
//! The output never passes the target: if a step would cross it, the result is
//! pinned to the target and the rate is zeroed.

/// Smallest accepted smoothing time in seconds.
pub const MIN_SMOOTH_TIME: f32 = 0.0001;

/// Move `current` toward `target`, updating the caller-owned rate `velocity`.
///
/// # Arguments
/// * `smooth_time` - Approximate time in seconds to reach the target
/// * `max_speed` - Cap on the rate of change, `f32::INFINITY` for none
/// * `dt` - Elapsed time in seconds. Zero, negative or NaN leaves everything unchanged.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    max_speed: f32,
    dt: f32,
) -> f32 {
    if !dt.is_finite() || dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let requested = target;
    let max_change = max_speed * smooth_time;
    let change = (current - target).clamp(-max_change, max_change);
    let target = current - change;

    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    // Pin to the target instead of crossing it
    if (requested - current > 0.0) == (output > requested) {
        output = requested;
        *velocity = 0.0;
    }

    output
}

/// Shortest signed difference from `current` to `target` in degrees, in `(-180, 180]`.
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

/// [`smooth_damp`] for angles in degrees, taking the short way around.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let target = current + delta_angle(current, target);
    smooth_damp(current, target, velocity, smooth_time, f32::INFINITY, dt)
}
