//! Sine, cosine and tangent in degrees from precomputed quarter-wave tables.
//!
//! Meant for cores without fast floating point transcendental functions: every call folds
//! the angle into 0..=90 degrees and reads one sample from a table kept in flash.
//!
//! | Function | Table | Output |
//! |----------|-------|--------|
//! | `sin_i`, `cos_i`, `tan_i` | `i8`, scaled by 127 | `i32`, +-127 is +-1.0 |
//! | `sin_f`, `cos_f`, `tan_f` | `u16`, scaled by 65535 | `f32` in `[-1.0, 1.0]` |
//! | `sin_interp`, `cos_interp` | `u16`, scaled by 65535 | `f32`, linear between whole degrees |
//!
//! The generic functions (`sin_scaled`, `sin_unit`, `sin_interp_with`) accept any
//! `QuarterWave` table, including the 255-scaled `UByteTable`.
//!
//! ## Feature Flags
//!
//! - `std` (default): links std and implements `std::error::Error` for `TrigError`
//! - `defmt`: derives `defmt::Format` for public types and logs tangent saturation

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod math_float;
pub mod math_integer;

pub use error::{Result, TrigError};
pub use math_float::trigonometry::{
    cos_f, cos_interp, sin_f, sin_interp, sin_interp_with, sin_unit, tan_f,
};
pub use math_integer::normalization::{normalize_degrees, NormalizedAngle};
pub use math_integer::quarter_wave::{
    ByteTable, QuarterWave, UByteTable, WordTable, I_SCALE, QUARTER_WAVE_LEN,
};
pub use math_integer::trigonometry::{
    checked_tan_i, cos_i, cos_scaled, sin_i, sin_scaled, sincos_i, tan_i,
};
