//! Ringtone Playback Engine
//!
//! Owns the tune catalog and drives note-by-note playback from a single
//! cooperative poll loop. Nothing here blocks: [`RtttlPlayer::step`] is
//! called every loop iteration and does work only when its private
//! [`TickTimer`] fires, so the engine composes with unrelated peripherals
//! polled from the same loop.

use log::{debug, trace};

use crate::clock::MonotonicClock;
use crate::error::Result;
use crate::output::ToneOutput;
use crate::parser::parse_descriptor;
use crate::tick::TickTimer;
use crate::tune::{Tune, TuneCatalog};

/// Re-poll period while nothing is playing, in milliseconds.
///
/// Keeps the scheduler from busy-checking the clock on every outer loop
/// iteration; also bounds the worst-case latency of an audible `stop()`.
pub const DEFAULT_IDLE_PERIOD_MS: u32 = 333;

/// Duty-cycle fraction the engine drives pitched notes at.
const NOTE_DUTY: f32 = 0.5;

/// Playback position, private to the engine.
///
/// A cursor equal to the note count marks "end reached" and is resolved at
/// the start of the same `step()` that observes it (repeat wraps to 0,
/// single-shot deactivates); it is never visible from outside.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Playback {
    Idle,
    Playing {
        name: String,
        cursor: usize,
        repeat: bool,
    },
}

/// Cooperatively-scheduled ringtone player.
///
/// Generic over the two capabilities the surrounding hardware supplies: a
/// tone sink and a free-running millisecond clock.
#[derive(Debug)]
pub struct RtttlPlayer<T: ToneOutput, C: MonotonicClock> {
    catalog: TuneCatalog,
    output: T,
    clock: C,
    tick: TickTimer,
    state: Playback,
    /// Whether the sink is currently emitting a tone.
    sounding: bool,
    idle_period_ms: u32,
}

impl<T: ToneOutput, C: MonotonicClock> RtttlPlayer<T, C> {
    /// Create an idle player.
    ///
    /// The internal timer starts armed for one idle period, so stepping
    /// begins on schedule without a prior `play()`.
    pub fn new(output: T, clock: C) -> Self {
        let mut tick = TickTimer::new();
        tick.write(&clock, DEFAULT_IDLE_PERIOD_MS, false);
        RtttlPlayer {
            catalog: TuneCatalog::new(),
            output,
            clock,
            tick,
            state: Playback::Idle,
            sounding: false,
            idle_period_ms: DEFAULT_IDLE_PERIOD_MS,
        }
    }

    /// Override the idle re-poll period.
    ///
    /// Takes effect the next time the scheduler re-arms while idle.
    pub fn set_idle_period_ms(&mut self, idle_period_ms: u32) {
        self.idle_period_ms = idle_period_ms;
    }

    /// Decode a ringtone descriptor and store it in the catalog.
    ///
    /// Returns the parsed tune name; a reused name overwrites the prior
    /// tune. On failure the catalog is left untouched.
    pub fn load(&mut self, text: &str) -> Result<String> {
        let tune = parse_descriptor(text)?;
        let name = tune.name().to_string();
        debug!("loaded {name:?} ({} notes)", tune.len());
        self.catalog.insert(tune);
        Ok(name)
    }

    /// Start playing a loaded tune from its first note.
    ///
    /// Returns `false` (with no state change) when the name is unknown.
    /// Calling with the already-active name restarts from the top; any
    /// same-tune de-duplication belongs to the caller. Sound is emitted on
    /// the next [`step`](Self::step), once the running note timer expires.
    pub fn play(&mut self, name: &str, repeat: bool) -> bool {
        let known = self.catalog.contains(name);
        if known {
            self.state = Playback::Playing {
                name: name.to_string(),
                cursor: 0,
                repeat,
            };
        }
        debug!("play({name:?}, repeat={repeat}) = {known}");
        known
    }

    /// Stop playback; returns whether a tune was active.
    ///
    /// The tone is silenced on the next [`step`](Self::step), at most one
    /// idle period later.
    pub fn stop(&mut self) -> bool {
        let had_active = self.state != Playback::Idle;
        self.state = Playback::Idle;
        debug!("stop() = {had_active}");
        had_active
    }

    /// Advance playback by one poll cycle. Never blocks.
    pub fn step(&mut self) {
        if !self.tick.read(&self.clock) {
            return;
        }

        // Resolve an end-of-tune cursor before emitting anything.
        let mut finished = false;
        if let Playback::Playing {
            name,
            cursor,
            repeat,
        } = &mut self.state
        {
            let len = self.catalog.get(name).map_or(0, Tune::len);
            if *cursor >= len {
                if *repeat {
                    *cursor = 0;
                } else {
                    finished = true;
                }
            }
        }
        if finished {
            debug!("playback finished");
            self.state = Playback::Idle;
        }

        let mut played = None;
        if let Playback::Playing { name, cursor, .. } = &mut self.state {
            if let Some(note) = self.catalog.get(name).and_then(|t| t.notes().get(*cursor)) {
                played = Some(*note);
                *cursor += 1;
            }
        }

        match played {
            Some(note) => {
                trace!("note {} Hz for {} ms", note.frequency_hz, note.duration_ms);
                if note.frequency_hz == 0 {
                    self.output.silence();
                    self.sounding = false;
                } else {
                    self.output.set_tone(note.frequency_hz, NOTE_DUTY);
                    self.sounding = true;
                }
                self.tick.write(&self.clock, note.duration_ms, false);
            }
            None => {
                if self.sounding {
                    self.output.silence();
                    self.sounding = false;
                }
                self.tick.write(&self.clock, self.idle_period_ms, false);
            }
        }
    }

    /// Name of the currently playing tune, if any.
    pub fn current_tune(&self) -> Option<&str> {
        match &self.state {
            Playback::Playing { name, .. } => Some(name),
            Playback::Idle => None,
        }
    }

    /// Whether a tune is active.
    pub fn is_playing(&self) -> bool {
        self.state != Playback::Idle
    }

    /// The loaded tune catalog.
    pub fn catalog(&self) -> &TuneCatalog {
        &self.catalog
    }

    /// Names of all loaded tunes.
    pub fn tune_names(&self) -> impl Iterator<Item = &str> {
        self.catalog.names()
    }

    /// The clock the engine polls.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The tone sink the engine drives.
    pub fn output(&self) -> &T {
        &self.output
    }

    /// Mutable access to the tone sink, for application-side effects
    /// between poll cycles.
    pub fn output_mut(&mut self) -> &mut T {
        &mut self.output
    }
}
