// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use super::quarter_wave::QUARTER_TURN;

/// Degrees in a full revolution
pub const FULL_TURN: u32 = 360;

/// Degrees in a half revolution
pub const HALF_TURN: u32 = 180;

/// An angle folded into the first quadrant.
///
/// `index` addresses a quarter-wave table, `negative` tells whether the sine
/// read from that index has to be negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NormalizedAngle {
    /// Table index in `0..=90`
    pub index: u8,
    /// Sign of the sine at the original angle
    pub negative: bool,
}

impl NormalizedAngle {
    /// Applies the folded sign to a sample read at `index`.
    #[inline(always)]
    pub const fn apply(self, sample: i32) -> i32 {
        if self.negative {
            -sample
        } else {
            sample
        }
    }
}

/// Folds any angle in degrees into a quarter-wave table index and a sign.
///
/// ### Arguments
/// * `angle` - Angle in whole degrees, any sign, any number of revolutions.
///
/// ### Returns
/// * `NormalizedAngle` with `index` in `0..=90`.
///
/// ### Notes
/// * sin(-x) = -sin(x): negative angles are mirrored and the sign flipped.
/// * Revolutions are dropped with one modulo, so the cost does not depend on the magnitude.
/// * sin(x) = -sin(x - 180) for x in (180, 360), sin(x) = sin(180 - x) for x in (90, 180].
/// * Exactly 180 is not flipped, it reflects straight to index 0.
pub const fn normalize_degrees(angle: i32) -> NormalizedAngle {
    let mut negative = angle < 0;

    // unsigned_abs keeps i32::MIN representable
    let mut x = angle.unsigned_abs() % FULL_TURN;

    if x > HALF_TURN {
        x -= HALF_TURN;
        negative = !negative;
    }

    if x > QUARTER_TURN as u32 {
        x = HALF_TURN - x;
    }

    NormalizedAngle {
        index: x as u8,
        negative,
    }
}
