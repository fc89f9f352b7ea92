// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

// Quarter-wave sine tables sampled at every whole degree from 0 to 90.
//
// Every table holds 91 entries: index `i` is sin(i°) scaled to the table amplitude and
// rounded to the nearest integer. Entry 0 is always 0 and entry 90 is always the amplitude,
// values never decrease in between. The rest of the circle is rebuilt from these samples
// by the folding rules in `normalization`.
//
// The tables are `static` items without interior mutability, so they end up in `.rodata`
// (flash on Cortex-M) and can be read from any context, interrupts included, without locking.

/// Number of samples in every quarter-wave table (0..=90 degrees).
pub const QUARTER_WAVE_LEN: usize = 91;

/// Highest valid table index, a quarter turn in degrees.
pub const QUARTER_TURN: u8 = 90;

/// Amplitude of the byte-scaled table, the integer that stands for 1.0.
pub const I_SCALE: i32 = 127;

/// Sine of 0..=90 degrees scaled by 127 (i8, 91 bytes)
static SINE_QUARTER_WAVE_I8: [i8; QUARTER_WAVE_LEN] = [
    0, 2, 4, 7, 9, 11, 13, 15, 18, 20, 22, //
    24, 26, 29, 31, 33, 35, 37, 39, 41, 43, //
    46, 48, 50, 52, 54, 56, 58, 60, 62, 64, //
    65, 67, 69, 71, 73, 75, 76, 78, 80, 82, //
    83, 85, 87, 88, 90, 91, 93, 94, 96, 97, //
    99, 100, 101, 103, 104, 105, 107, 108, 109, 110, //
    111, 112, 113, 114, 115, 116, 117, 118, 119, 119, //
    120, 121, 121, 122, 123, 123, 124, 124, 125, 125, //
    125, 126, 126, 126, 127, 127, 127, 127, 127, 127,
];

/// Sine of 0..=90 degrees scaled by 65535 (u16, 182 bytes)
static SINE_QUARTER_WAVE_U16: [u16; QUARTER_WAVE_LEN] = [
    0, 1144, 2287, 3430, 4571, 5712, 6850, 7987, 9121, 10252, 11380, //
    12505, 13625, 14742, 15854, 16962, 18064, 19161, 20251, 21336, 22414, //
    23486, 24550, 25607, 26655, 27696, 28729, 29752, 30767, 31772, 32768, //
    33753, 34728, 35693, 36647, 37589, 38521, 39440, 40347, 41243, 42125, //
    42995, 43851, 44695, 45524, 46340, 47142, 47929, 48702, 49460, 50203, //
    50930, 51642, 52339, 53019, 53683, 54331, 54962, 55577, 56174, 56755, //
    57318, 57864, 58392, 58902, 59395, 59869, 60325, 60763, 61182, 61583, //
    61965, 62327, 62671, 62996, 63302, 63588, 63855, 64103, 64331, 64539, //
    64728, 64897, 65047, 65176, 65286, 65375, 65445, 65495, 65525, 65535,
];

/// Sine of 0..=90 degrees scaled by 255 (u8, 91 bytes)
static SINE_QUARTER_WAVE_U8: [u8; QUARTER_WAVE_LEN] = [
    0, 4, 9, 13, 18, 22, 27, 31, 35, 40, 44, //
    49, 53, 57, 62, 66, 70, 75, 79, 83, 87, //
    91, 96, 100, 104, 108, 112, 116, 120, 124, 128, //
    131, 135, 139, 143, 146, 150, 153, 157, 160, 164, //
    167, 171, 174, 177, 180, 183, 186, 190, 192, 195, //
    198, 201, 204, 206, 209, 211, 214, 216, 219, 221, //
    223, 225, 227, 229, 231, 233, 235, 236, 238, 240, //
    241, 243, 244, 245, 246, 247, 248, 249, 250, 251, //
    252, 253, 253, 254, 254, 254, 255, 255, 255, 255,
];

/// Descriptor of a quarter-wave table: sample width, amplitude and the read-only samples.
///
/// Implementors are zero-sized markers, the lookup engine is generic over them so the
/// folding logic exists once for every precision.
pub trait QuarterWave {
    /// Storage type of one sample
    type Sample: Copy + Into<i32> + 'static;

    /// Scaled value standing for 1.0 (value of entry 90)
    const AMPLITUDE: i32;

    /// Read-only samples for 0..=90 degrees
    fn samples() -> &'static [Self::Sample; QUARTER_WAVE_LEN];

    /// Reads the sample for a folded index.
    ///
    /// ### Notes
    /// * Indexes above 90 are an internal invariant violation: the normalizer never produces them.
    ///
    /// ### Panics
    /// * If `index` is above 90, in release builds too (slice bounds check).
    #[inline(always)]
    fn sample(index: u8) -> i32 {
        debug_assert!(index <= QUARTER_TURN, "quarter-wave index out of range");
        Self::samples()[index as usize].into()
    }
}

/// Signed byte table, amplitude 127 (`I_SCALE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteTable;

/// Unsigned word table, amplitude 65535
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordTable;

/// Unsigned byte table, amplitude 255
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UByteTable;

impl QuarterWave for ByteTable {
    type Sample = i8;
    const AMPLITUDE: i32 = I_SCALE;

    #[inline(always)]
    fn samples() -> &'static [i8; QUARTER_WAVE_LEN] {
        &SINE_QUARTER_WAVE_I8
    }
}

impl QuarterWave for WordTable {
    type Sample = u16;
    const AMPLITUDE: i32 = u16::MAX as i32;

    #[inline(always)]
    fn samples() -> &'static [u16; QUARTER_WAVE_LEN] {
        &SINE_QUARTER_WAVE_U16
    }
}

impl QuarterWave for UByteTable {
    type Sample = u8;
    const AMPLITUDE: i32 = u8::MAX as i32;

    #[inline(always)]
    fn samples() -> &'static [u8; QUARTER_WAVE_LEN] {
        &SINE_QUARTER_WAVE_U8
    }
}
