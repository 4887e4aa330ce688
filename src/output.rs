//! Tone output capability.
//!
//! The surrounding hardware driver (piezo PWM, DAC beeper, desktop audio
//! shim) supplies the implementation; the engine only ever calls these two
//! effects.

/// A single-voice square-tone sink.
pub trait ToneOutput {
    /// Start (or retune) a continuous tone.
    ///
    /// `duty` is the duty-cycle fraction in `0.0..=1.0`; the engine drives
    /// notes at 0.5.
    fn set_tone(&mut self, frequency_hz: u32, duty: f32);

    /// Stop any tone currently sounding.
    fn silence(&mut self);
}
