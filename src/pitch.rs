//! Pitch-to-Frequency Table
//!
//! Fixed equal-temperament table (a4 = 440 Hz) covering octaves 4-7 plus the
//! dedicated pause key `"p"`. Keys are the lowercase note spelling used by
//! the descriptor format: pitch letter, optional `#`, octave digit.

/// Frequency of a rest (silence).
pub const PAUSE_HZ: u32 = 0;

/// Pitch keys and their frequencies in Hz. 48 pitched entries plus the
/// pause key.
const FREQUENCIES: [(&str, u32); 49] = [
    ("p", PAUSE_HZ),
    ("c4", 262),
    ("c#4", 277),
    ("d4", 294),
    ("d#4", 311),
    ("e4", 330),
    ("f4", 349),
    ("f#4", 370),
    ("g4", 392),
    ("g#4", 415),
    ("a4", 440),
    ("a#4", 466),
    ("b4", 494),
    ("c5", 523),
    ("c#5", 554),
    ("d5", 587),
    ("d#5", 622),
    ("e5", 659),
    ("f5", 698),
    ("f#5", 740),
    ("g5", 784),
    ("g#5", 831),
    ("a5", 880),
    ("a#5", 932),
    ("b5", 988),
    ("c6", 1047),
    ("c#6", 1109),
    ("d6", 1175),
    ("d#6", 1245),
    ("e6", 1319),
    ("f6", 1397),
    ("f#6", 1480),
    ("g6", 1568),
    ("g#6", 1661),
    ("a6", 1760),
    ("a#6", 1865),
    ("b6", 1976),
    ("c7", 2093),
    ("c#7", 2217),
    ("d7", 2349),
    ("d#7", 2489),
    ("e7", 2637),
    ("f7", 2794),
    ("f#7", 2960),
    ("g7", 3136),
    ("g#7", 3322),
    ("a7", 3520),
    ("a#7", 3729),
    ("b7", 3951),
];

/// Look up the frequency for a pitch key.
///
/// Unknown keys degrade to 0 Hz (silence) rather than failing; the parser
/// relies on this for malformed note tokens.
pub fn frequency_hz(key: &str) -> u32 {
    FREQUENCIES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, hz)| *hz)
        .unwrap_or(PAUSE_HZ)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concert_pitch_anchors() {
        assert_eq!(frequency_hz("a4"), 440);
        assert_eq!(frequency_hz("c4"), 262);
        assert_eq!(frequency_hz("c6"), 1047);
        assert_eq!(frequency_hz("b7"), 3951);
    }

    #[test]
    fn sharps_are_spelled_with_hash() {
        assert_eq!(frequency_hz("c#5"), 554);
        assert_eq!(frequency_hz("g#7"), 3322);
    }

    #[test]
    fn pause_and_unknown_keys_are_silent() {
        assert_eq!(frequency_hz("p"), 0);
        assert_eq!(frequency_hz(""), 0);
        assert_eq!(frequency_hz("h5"), 0);
        assert_eq!(frequency_hz("c8"), 0);
        assert_eq!(frequency_hz("6"), 0);
    }

    #[test]
    fn table_has_four_octaves_plus_pause() {
        assert_eq!(FREQUENCIES.len(), 49);
        for octave in 4..=7 {
            for letter in ["a", "b", "c", "d", "e", "f", "g"] {
                assert_ne!(frequency_hz(&format!("{letter}{octave}")), 0);
            }
        }
    }
}
