// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::math_integer::normalization::FULL_TURN;
use crate::math_integer::quarter_wave::{QuarterWave, WordTable, QUARTER_TURN};
use crate::math_integer::trigonometry::{quarter_shift, sin_scaled};

/// Sine of a whole-degree angle from table `T`, normalized to `[-1.0, 1.0]`.
#[inline]
pub fn sin_unit<T: QuarterWave>(angle: i32) -> f32 {
    sin_scaled::<T>(angle) as f32 / T::AMPLITUDE as f32
}

/// Word-scaled sine, `[-1.0, 1.0]`
#[inline]
pub fn sin_f(angle: i32) -> f32 {
    sin_unit::<WordTable>(angle)
}

/// Word-scaled cosine, `[-1.0, 1.0]`
#[inline]
pub fn cos_f(angle: i32) -> f32 {
    sin_unit::<WordTable>(quarter_shift(angle))
}

/// Word-scaled tangent.
///
/// ### Notes
/// * At odd multiples of 90 degrees the cosine is `+0.0`, so the result is an infinity
///   carrying the sign of the sine.
#[inline]
pub fn tan_f(angle: i32) -> f32 {
    sin_f(angle) / cos_f(angle)
}

/// Sine of a fractional angle, linearly interpolated between two whole-degree samples of `T`.
///
/// ### Arguments
/// * `angle` - Angle in degrees, fractional part allowed.
///
/// ### Returns
/// * `a + t * (b - a)` where `a`, `b` are the samples at `floor(angle)` and `floor(angle) + 1`
///   and `t` is the fractional part. `NaN` for non-finite input.
///
/// ### Notes
/// * `floor` is used instead of truncation so negative angles blend toward the right neighbour.
/// * The whole part is reduced with `fmodf`, which is exact, before converting to an integer.
pub fn sin_interp_with<T: QuarterWave>(angle: f32) -> f32 {
    if !angle.is_finite() {
        return f32::NAN;
    }

    let whole = libm::floorf(angle);
    let frac = angle - whole;

    // (-360, 360), integral because `whole` is
    let degree = libm::fmodf(whole, FULL_TURN as f32) as i32;

    let a = sin_unit::<T>(degree);
    let b = sin_unit::<T>(degree + 1);

    a + frac * (b - a)
}

/// Word-scaled interpolated sine, `[-1.0, 1.0]`
#[inline]
pub fn sin_interp(angle: f32) -> f32 {
    sin_interp_with::<WordTable>(angle)
}

/// Word-scaled interpolated cosine, `[-1.0, 1.0]`
#[inline]
pub fn cos_interp(angle: f32) -> f32 {
    sin_interp(libm::fmodf(angle, FULL_TURN as f32) + QUARTER_TURN as f32)
}
