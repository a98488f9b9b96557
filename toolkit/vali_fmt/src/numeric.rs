//! Numeric clamping, boundary tests, and power-of-two helpers.

/// Clamp `v` into `[min, max]`.
///
/// Matches the host formulation `min(max(v, min), max)`: when the bounds
/// are inverted, `max` wins.
pub fn limit_into(v: f64, min: f64, max: f64) -> f64 {
    v.max(min).min(max)
}

/// Whether `v` lies in the closed range `[min, max]`.
pub fn is_between_equals(v: f64, min: f64, max: f64) -> bool {
    v >= min && v <= max
}

/// Whether `v` lies in the open range `(min, max)`.
pub fn is_between_not_equals(v: f64, min: f64, max: f64) -> bool {
    v > min && v < max
}

/// Whether `v` is a power of two. Zero is not a power of two.
pub fn is_power_of_two(v: u32) -> bool {
    v != 0 && v & v.wrapping_sub(1) == 0
}

/// Round `v` up to the nearest power of two.
///
/// Zero rounds up to 1; values above 2^31 saturate to 2^31 (the largest
/// representable power).
pub fn next_power_of_two(v: u32) -> u32 {
    const MAX_POWER: u32 = 1 << 31;
    if v <= 1 {
        return 1;
    }
    if v > MAX_POWER {
        return MAX_POWER;
    }
    let mut result = 1;
    while result < v {
        result <<= 1;
    }
    result
}
