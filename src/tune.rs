//! Parsed tune data model.
//!
//! A [`Tune`] is produced once by the parser and never mutated afterwards;
//! the [`TuneCatalog`] owns every loaded tune for the life of the player.

use std::collections::HashMap;

/// One resolved note: a frequency (0 = rest) and how long to hold it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoteEvent {
    /// Tone frequency in Hz; 0 means rest/silence.
    pub frequency_hz: u32,
    /// Duration in milliseconds, always > 0.
    pub duration_ms: u32,
}

/// A named, ordered sequence of notes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tune {
    name: String,
    notes: Vec<NoteEvent>,
}

impl Tune {
    /// Build a tune from a parsed name and note list.
    pub(crate) fn new(name: String, notes: Vec<NoteEvent>) -> Self {
        Tune { name, notes }
    }

    /// Tune name (the descriptor's first field).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The resolved notes, in playback order.
    pub fn notes(&self) -> &[NoteEvent] {
        &self.notes
    }

    /// Number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the tune has no notes. Never true for a tune that came out
    /// of the parser.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Total playback time in milliseconds.
    pub fn total_ms(&self) -> u32 {
        self.notes.iter().map(|n| n.duration_ms).sum()
    }
}

/// Mapping from tune name to loaded tune.
#[derive(Debug, Clone, Default)]
pub struct TuneCatalog {
    tunes: HashMap<String, Tune>,
}

impl TuneCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tune under its own name. Loading a reused name overwrites
    /// the prior entry.
    pub fn insert(&mut self, tune: Tune) {
        self.tunes.insert(tune.name.clone(), tune);
    }

    /// Look up a tune by name.
    pub fn get(&self, name: &str) -> Option<&Tune> {
        self.tunes.get(name)
    }

    /// Whether a tune with this name is loaded.
    pub fn contains(&self, name: &str) -> bool {
        self.tunes.contains_key(name)
    }

    /// Names of all loaded tunes, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tunes.keys().map(String::as_str)
    }

    /// Number of loaded tunes.
    pub fn len(&self) -> usize {
        self.tunes.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tunes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beep(name: &str, hz: u32) -> Tune {
        Tune::new(
            name.to_string(),
            vec![NoteEvent {
                frequency_hz: hz,
                duration_ms: 100,
            }],
        )
    }

    #[test]
    fn insert_and_lookup() {
        let mut catalog = TuneCatalog::new();
        assert!(catalog.is_empty());

        catalog.insert(beep("alert", 440));
        assert!(catalog.contains("alert"));
        assert_eq!(catalog.get("alert").unwrap().notes()[0].frequency_hz, 440);
        assert!(catalog.get("other").is_none());
    }

    #[test]
    fn reused_name_overwrites() {
        let mut catalog = TuneCatalog::new();
        catalog.insert(beep("alert", 440));
        catalog.insert(beep("alert", 880));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("alert").unwrap().notes()[0].frequency_hz, 880);
    }

    #[test]
    fn total_ms_sums_note_durations() {
        let tune = Tune::new(
            "t".to_string(),
            vec![
                NoteEvent {
                    frequency_hz: 440,
                    duration_ms: 496,
                },
                NoteEvent {
                    frequency_hz: 0,
                    duration_ms: 248,
                },
            ],
        );
        assert_eq!(tune.total_ms(), 744);
    }
}
