// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use thiserror::Error;

/// Errors reported by the checked lookup functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrigError {
    /// Tangent requested where the cosine table reads zero (odd multiples of 90 degrees).
    #[error("tangent is undefined at {angle} degrees (cosine is zero)")]
    DivideByZero {
        /// Angle as passed by the caller
        angle: i32,
    },
}

/// Result alias for checked lookups
pub type Result<T> = core::result::Result<T, TrigError>;
