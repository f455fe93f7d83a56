//! Movement domain: critically damped approach toward a target value.

/// Move `current` toward `target` with a critically damped spring.
///
/// `velocity` is the spring's own rate of change and must be kept by the
/// caller between calls. `smooth_time` is roughly the time to reach the
/// target, and zero snaps straight to it. A step that would cross the
/// target lands on it instead.
pub fn smooth_damp(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    if smooth_time <= 0.0 {
        *velocity = 0.0;
        return target;
    }

    let omega = 2.0 / smooth_time;

    // Pade approximation of exp(-omega * dt)
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = 0.0;
    }

    output
}
