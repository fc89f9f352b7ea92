// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

// Integer sine, cosine and tangent in whole degrees.
//
// All lookups go through `normalize_degrees` and read a single quarter-wave sample,
// so a call costs a few comparisons, one modulo and one read from flash.
// The byte functions (`sin_i`, `cos_i`, `tan_i`) use the 127-scaled table: +-127 stands for +-1.0.

use super::normalization::{normalize_degrees, FULL_TURN};
use super::quarter_wave::{ByteTable, QuarterWave, I_SCALE, QUARTER_TURN};
use crate::error::{Result, TrigError};

/// Computes the sine of a whole-degree angle scaled by the amplitude of table `T`.
///
/// ### Arguments
/// * `angle` - Angle in degrees, any sign and any number of revolutions.
///
/// ### Returns
/// * Sine in `[-T::AMPLITUDE, T::AMPLITUDE]`.
#[inline]
pub fn sin_scaled<T: QuarterWave>(angle: i32) -> i32 {
    let folded = normalize_degrees(angle);
    folded.apply(T::sample(folded.index))
}

/// Computes the cosine of a whole-degree angle scaled by the amplitude of table `T`.
///
/// ### Notes
/// * cos(x) = sin(x + 90). The angle is reduced to one turn before the shift,
///   so the shifted value (90..=449) never overflows and stays congruent to `angle + 90`.
#[inline]
pub fn cos_scaled<T: QuarterWave>(angle: i32) -> i32 {
    sin_scaled::<T>(quarter_shift(angle))
}

/// `angle + 90` reduced to the same class modulo 360 without overflow
#[inline(always)]
pub(crate) const fn quarter_shift(angle: i32) -> i32 {
    angle.rem_euclid(FULL_TURN as i32) + QUARTER_TURN as i32
}

/// Byte-scaled sine, `[-127, 127]`
#[inline]
pub fn sin_i(angle: i32) -> i32 {
    sin_scaled::<ByteTable>(angle)
}

/// Byte-scaled cosine, `[-127, 127]`
#[inline]
pub fn cos_i(angle: i32) -> i32 {
    cos_scaled::<ByteTable>(angle)
}

/// Byte-scaled sine and cosine of the same angle.
///
/// ### Returns
/// * A tuple `(sine, cosine)`, both in `[-127, 127]`.
#[inline]
pub fn sincos_i(angle: i32) -> (i32, i32) {
    (sin_i(angle), cos_i(angle))
}

/// Byte-scaled tangent: `sin * 127 / cos`.
///
/// ### Notes
/// * Integer division truncates toward zero.
/// * At odd multiples of 90 degrees the cosine reads zero. Instead of faulting,
///   the result saturates to `i32::MAX` or `i32::MIN` following the sign of the sine.
///   Use `checked_tan_i` to get an error there instead.
pub fn tan_i(angle: i32) -> i32 {
    match checked_tan_i(angle) {
        Ok(tan) => tan,
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("TAN: pole at {} deg, result saturated", angle);

            if sin_i(angle) < 0 {
                i32::MIN
            } else {
                i32::MAX
            }
        }
    }
}

/// Byte-scaled tangent, failing where the cosine is zero.
///
/// ### Returns
/// * `Ok(sin * 127 / cos)`, or `TrigError::DivideByZero` at odd multiples of 90 degrees.
pub fn checked_tan_i(angle: i32) -> Result<i32> {
    let (sin, cos) = sincos_i(angle);
    if cos == 0 {
        return Err(TrigError::DivideByZero { angle });
    }
    Ok(sin * I_SCALE / cos)
}
