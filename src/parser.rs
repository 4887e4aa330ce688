//! Ringtone Descriptor Parser
//!
//! Decodes the compact `name[:defaults]:notes` ringtone notation into a
//! [`Tune`]. The format is case-insensitive and whitespace-insignificant.
//!
//! The parser is deliberately lenient: only a wrong field count, an empty
//! name, or an empty note list fail a load. Every other irregularity in a
//! descriptor (bad default assignments, unrecognized duration digits,
//! missing octaves, unknown pitch letters) degrades to a default and is
//! reported at `debug` level, never as an error.

use log::debug;

use crate::error::{Result, RtttlError};
use crate::pitch;
use crate::tune::{NoteEvent, Tune};

/// Note-length denominators the format accepts (fractions of a whole note).
const VALID_DENOMINATORS: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// Digits that may appear in the leading duration slot of a note token.
/// Covers every spelling of the valid denominators.
const DURATION_DIGITS: [char; 6] = ['1', '2', '3', '4', '6', '8'];

/// Per-descriptor default settings from the optional middle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Defaults {
    /// Default note-length denominator.
    pub duration: u32,
    /// Default octave, 4..=7.
    pub octave: u32,
    /// Tempo in beats per minute, 25..=900.
    pub bpm: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            duration: 4,
            octave: 6,
            bpm: 63,
        }
    }
}

impl Defaults {
    /// Parse the comma-separated defaults field.
    ///
    /// Each entry is matched only as a prefix (`d=`, `o=`, `b=`); values
    /// outside the accepted sets and anything unrecognized are silently
    /// ignored, leaving the fallback in place.
    pub(crate) fn parse(field: &str) -> Self {
        let mut defaults = Defaults::default();
        for entry in field.split(',') {
            if let Some(value) = entry.strip_prefix("d=") {
                match value.parse::<u32>() {
                    Ok(d) if VALID_DENOMINATORS.contains(&d) => defaults.duration = d,
                    _ => debug!("ignoring default duration {value:?}"),
                }
            } else if let Some(value) = entry.strip_prefix("o=") {
                match value.parse::<u32>() {
                    Ok(o) if (4..=7).contains(&o) => defaults.octave = o,
                    _ => debug!("ignoring default octave {value:?}"),
                }
            } else if let Some(value) = entry.strip_prefix("b=") {
                match value.parse::<u32>() {
                    Ok(b) if (25..=900).contains(&b) => defaults.bpm = b,
                    _ => debug!("ignoring default tempo {value:?}"),
                }
            } else if !entry.is_empty() {
                debug!("ignoring unrecognized default entry {entry:?}");
            }
        }
        defaults
    }
}

/// Length of a whole note in milliseconds for the given defaults, rounded
/// down to a multiple of 32 ms so every 1/32-note length divides evenly.
pub(crate) fn whole_note_ms(defaults: &Defaults) -> u32 {
    (60_000 * defaults.duration / defaults.bpm) / 32 * 32
}

/// Scanner state for one note token.
///
/// The token is consumed left to right with a single forward-only index;
/// each state decides whether to capture the current character, advance, or
/// hand over to the next state without advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Leading duration digits (optional).
    Duration,
    /// Exactly one pitch letter `a..g`, or `p` for pause. A non-matching
    /// character defaults the pitch to pause without being consumed.
    Pitch,
    /// Sharp markers after a pitched letter.
    Sharp,
    /// Octave digit and/or dot, in either order; consumes the remainder.
    Suffix,
    /// Pause tail: the remainder carries no information.
    PauseTail,
}

/// Raw captures from scanning one note token.
#[derive(Debug, Default, PartialEq, Eq)]
struct NoteScan {
    /// Captured duration digits, possibly empty or invalid.
    duration: String,
    /// Pitch letter plus any sharp markers.
    key: String,
    /// First octave digit seen, if any.
    octave: Option<char>,
    /// Whether a dot was seen.
    dotted: bool,
}

/// Run the five-state scan over a single note token.
fn scan_token(token: &str) -> NoteScan {
    let mut scan = NoteScan::default();
    let mut state = ScanState::Duration;
    let chars: Vec<char> = token.chars().collect();
    let mut index = 0;

    while index < chars.len() {
        let c = chars[index];
        match state {
            ScanState::Duration => {
                if DURATION_DIGITS.contains(&c) {
                    scan.duration.push(c);
                    index += 1;
                } else {
                    state = ScanState::Pitch;
                }
            }
            ScanState::Pitch => {
                if matches!(c, 'a'..='g' | 'p') {
                    scan.key.push(c);
                    index += 1;
                } else {
                    scan.key.push('p');
                }
                state = if scan.key == "p" {
                    ScanState::PauseTail
                } else {
                    ScanState::Sharp
                };
            }
            ScanState::Sharp => {
                if c == '#' {
                    scan.key.push(c);
                    index += 1;
                } else {
                    state = ScanState::Suffix;
                }
            }
            ScanState::Suffix => {
                if matches!(c, '4'..='7') {
                    if scan.octave.is_none() {
                        scan.octave = Some(c);
                    }
                } else if c == '.' {
                    scan.dotted = true;
                }
                index += 1;
            }
            ScanState::PauseTail => {
                index += 1;
            }
        }
    }
    scan
}

/// Resolve one scanned token into a note, degrading every undecidable
/// sub-field to the descriptor defaults.
fn resolve_note(token: &str, defaults: &Defaults, whole_ms: u32) -> NoteEvent {
    let mut scan = scan_token(token);

    let denominator = match scan.duration.parse::<u32>() {
        Ok(d) if VALID_DENOMINATORS.contains(&d) => d,
        _ => {
            if !scan.duration.is_empty() {
                debug!(
                    "token {token:?}: duration {:?} not a valid denominator, using default {}",
                    scan.duration, defaults.duration
                );
            }
            defaults.duration
        }
    };

    let mut duration_ms = whole_ms / denominator;
    if scan.dotted {
        duration_ms += duration_ms / 2;
    }

    // The octave digit is appended even for pauses; "p6" misses the table
    // and resolves to silence all the same.
    match scan.octave {
        Some(digit) => scan.key.push(digit),
        None => scan.key.push_str(&defaults.octave.to_string()),
    }
    let frequency_hz = pitch::frequency_hz(&scan.key);

    NoteEvent {
        frequency_hz,
        duration_ms,
    }
}

/// Decode a ringtone descriptor into a [`Tune`].
///
/// The descriptor is the ASCII form `name[:defaults]:notes`, lowercased and
/// stripped of whitespace before decoding. On structural failure (wrong
/// field count, empty name, empty note list) the error names the problem
/// and nothing is produced; every other irregularity degrades to a default.
pub fn parse_descriptor(text: &str) -> Result<Tune> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    let fields: Vec<&str> = normalized.split(':').collect();
    if fields.len() != 2 && fields.len() != 3 {
        return Err(RtttlError::FieldCount {
            found: fields.len(),
        });
    }

    let name = fields[0];
    if name.is_empty() {
        return Err(RtttlError::EmptyName);
    }

    let (defaults, notes_field) = if fields.len() == 3 {
        (Defaults::parse(fields[1]), fields[2])
    } else {
        (Defaults::default(), fields[1])
    };
    let whole_ms = whole_note_ms(&defaults);
    debug!(
        "descriptor {name:?}: d={}, o={}, b={}, whole_ms={whole_ms}",
        defaults.duration, defaults.octave, defaults.bpm
    );

    let notes: Vec<NoteEvent> = notes_field
        .split(',')
        .map(|token| resolve_note(token, &defaults, whole_ms))
        .collect();
    if notes.is_empty() {
        return Err(RtttlError::EmptyTune);
    }

    Ok(Tune::new(name.to_string(), notes))
}
