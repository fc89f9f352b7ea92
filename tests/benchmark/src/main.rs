#![no_std]
#![no_main]

// Sweeps angles through the lookup functions and libm, reporting cycles per call and
// the worst deviation from libm over RTT.

use core::f32::consts::PI;
use core::hint::black_box;

use cortex_m::peripheral::DWT;
use cortex_m_rt::entry; // The runtime

use hal::{clocks::Clocks, pac};

use int_trig::{cos_i, sin_f, sin_i, sin_interp, tan_f};

use defmt_rtt as _;
// global logger
use panic_probe as _;

/// First angle of the sweep, degrees
const SWEEP_START: i32 = -720;
/// Last angle of the sweep, degrees
const SWEEP_END: i32 = 720;
/// Fractional step for the interpolated sweep, tenths of a degree
const INTERP_STEPS_PER_DEGREE: i32 = 10;

struct Report {
    calls: u32,
    cycles: u32,
    max_error: f32,
}

impl Report {
    fn new() -> Self {
        Self {
            calls: 0,
            cycles: 0,
            max_error: 0.0,
        }
    }

    fn add(&mut self, cycles: u32, value: f32, reference: f32) {
        self.calls += 1;
        self.cycles = self.cycles.wrapping_add(cycles);
        let error = libm::fabsf(value - reference);
        if error > self.max_error {
            self.max_error = error;
        }
    }

    fn print(&self, name: &str) {
        defmt::println!(
            "{}: {} calls, {} cycles/call, max error {}",
            name,
            self.calls,
            self.cycles / self.calls.max(1),
            self.max_error
        );
    }
}

#[inline(always)]
fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Runs `f` once and returns its result with the elapsed core cycles
#[inline(always)]
fn timed<T>(f: impl FnOnce() -> T) -> (T, u32) {
    let start = DWT::cycle_count();
    let value = black_box(f());
    (value, DWT::cycle_count().wrapping_sub(start))
}

#[entry]
fn main() -> ! {
    // Set up CPU peripherals
    let mut cp = cortex_m::Peripherals::take().unwrap();
    // Set up microcontroller peripherals
    let _dp = pac::Peripherals::take().unwrap();

    let clock_cfg = Clocks::default();
    clock_cfg.setup().unwrap();

    // Cycle counter for timing
    cp.DCB.enable_trace();
    cp.DWT.enable_cycle_counter();

    defmt::println!("sweep {}..={} deg", SWEEP_START, SWEEP_END);

    let mut byte_sin = Report::new();
    let mut byte_cos = Report::new();
    let mut word_sin = Report::new();
    let mut word_tan = Report::new();
    let mut libm_sin = Report::new();

    for angle in SWEEP_START..=SWEEP_END {
        let exact = libm::sinf(to_radians(angle as f32));

        let (v, c) = timed(|| sin_i(black_box(angle)));
        byte_sin.add(c, v as f32 / 127.0, exact);

        let (v, c) = timed(|| cos_i(black_box(angle)));
        byte_cos.add(c, v as f32 / 127.0, libm::cosf(to_radians(angle as f32)));

        let (v, c) = timed(|| sin_f(black_box(angle)));
        word_sin.add(c, v, exact);

        // Skip the poles, both sides are infinite there
        if angle.rem_euclid(180) != 90 {
            let (v, c) = timed(|| tan_f(black_box(angle)));
            word_tan.add(c, v, libm::tanf(to_radians(angle as f32)));
        }

        let (v, c) = timed(|| libm::sinf(black_box(to_radians(angle as f32))));
        libm_sin.add(c, v, exact);
    }

    let mut interp_sin = Report::new();
    for step in (SWEEP_START * INTERP_STEPS_PER_DEGREE)..=(SWEEP_END * INTERP_STEPS_PER_DEGREE) {
        let angle = step as f32 / INTERP_STEPS_PER_DEGREE as f32;
        let (v, c) = timed(|| sin_interp(black_box(angle)));
        interp_sin.add(c, v, libm::sinf(to_radians(angle)));
    }

    byte_sin.print("sin_i");
    byte_cos.print("cos_i");
    word_sin.print("sin_f");
    word_tan.print("tan_f");
    interp_sin.print("sin_interp");
    libm_sin.print("libm::sinf");

    loop {
        cortex_m::asm::wfi();
    }
}

// same panicking *behavior* as `panic-probe` but doesn't print a panic message
// this prevents the panic message being printed *twice* when `defmt::panic` is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
