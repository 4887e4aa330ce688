//! RTTTL Ringtone Parser and Replayer
//!
//! Decodes compact-notation ringtone descriptors (`name[:defaults]:notes`)
//! and plays them back note-by-note from a cooperative, poll-driven loop.
//! Built for long-running embedded-style targets: nothing blocks, timing
//! comes from polling a wraparound-safe countdown over a fixed-width
//! millisecond counter, and all hardware access goes through two capability
//! traits the surrounding application supplies.
//!
//! # Architecture
//! - [`TickTimer`] - wraparound-safe countdown/interval primitive
//! - [`pitch`] - static pitch-to-frequency table
//! - [`parse_descriptor`] - descriptor text to an ordered [`Tune`]
//! - [`RtttlPlayer`] - catalog owner and note-by-note playback scheduler
//!
//! # Quick start
//! ```
//! use rtttl_replayer::{ManualClock, RtttlPlayer, ToneOutput};
//!
//! struct Beeper;
//! impl ToneOutput for Beeper {
//!     fn set_tone(&mut self, _frequency_hz: u32, _duty: f32) { /* drive PWM */ }
//!     fn silence(&mut self) { /* stop PWM */ }
//! }
//!
//! let clock = ManualClock::new(0);
//! let mut player = RtttlPlayer::new(Beeper, clock);
//! let name = player.load("scale:d=4,o=5,b=120:c,d,e").unwrap();
//! player.play(&name, false);
//! loop {
//!     player.step(); // call from the outer poll loop
//!     # break;
//! }
//! ```

#![warn(missing_docs)]

// Error handling
mod error;
pub use error::{Result, RtttlError};

// Capability traits supplied by the surrounding hardware
pub mod clock;
pub mod output;
pub use clock::{ManualClock, MonotonicClock, StdClock};
pub use output::ToneOutput;

// Core modules
pub mod parser;
pub mod pitch;
pub mod tick;
pub mod tune;
pub use parser::parse_descriptor;
pub use tick::{TickTimer, TICKS_DURATION_MAX, TICKS_HALF_PERIOD, TICKS_MAX, TICKS_PERIOD};
pub use tune::{NoteEvent, Tune, TuneCatalog};

// Playback engine
pub mod player;
pub use player::{RtttlPlayer, DEFAULT_IDLE_PERIOD_MS};
