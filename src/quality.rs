//! Chord qualities and their interval sets.
//!
//! The number of intervals of a quality is the exact note count every
//! resolved shape of that quality must have.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ShapeError;
use crate::pitch::interval_label;

/// The intervallic flavour of a chord relative to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
}

impl Quality {
    pub const ALL: [Quality; 10] = [
        Quality::Major,
        Quality::Minor,
        Quality::Diminished,
        Quality::Augmented,
        Quality::Sus2,
        Quality::Sus4,
        Quality::Dominant7,
        Quality::Major7,
        Quality::Minor7,
        Quality::HalfDiminished7,
    ];

    /// Parse a quality label.
    ///
    /// Accepts the display name (`"Major"`, `"HalfDiminished7"`) and the usual
    /// chord-symbol suffix (`"maj"`, `"m"`, `"dim"`, `"m7b5"`, ...).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Major" | "maj" | "M" => Some(Quality::Major),
            "Minor" | "min" | "m" => Some(Quality::Minor),
            "Diminished" | "dim" => Some(Quality::Diminished),
            "Augmented" | "aug" | "+" => Some(Quality::Augmented),
            "Sus2" | "sus2" => Some(Quality::Sus2),
            "Sus4" | "sus4" => Some(Quality::Sus4),
            "Dominant7" | "7" => Some(Quality::Dominant7),
            "Major7" | "maj7" | "M7" => Some(Quality::Major7),
            "Minor7" | "min7" | "m7" => Some(Quality::Minor7),
            "HalfDiminished7" | "m7b5" => Some(Quality::HalfDiminished7),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Quality::Major => "Major",
            Quality::Minor => "Minor",
            Quality::Diminished => "Diminished",
            Quality::Augmented => "Augmented",
            Quality::Sus2 => "Sus2",
            Quality::Sus4 => "Sus4",
            Quality::Dominant7 => "Dominant7",
            Quality::Major7 => "Major7",
            Quality::Minor7 => "Minor7",
            Quality::HalfDiminished7 => "HalfDiminished7",
        }
    }

    /// Semitone offsets from the root, root first, ascending.
    pub fn intervals(self) -> &'static [u8] {
        match self {
            Quality::Major => &[0, 4, 7],
            Quality::Minor => &[0, 3, 7],
            Quality::Diminished => &[0, 3, 6],
            Quality::Augmented => &[0, 4, 8],
            Quality::Sus2 => &[0, 2, 7],
            Quality::Sus4 => &[0, 5, 7],
            Quality::Dominant7 => &[0, 4, 7, 10],
            Quality::Major7 => &[0, 4, 7, 11],
            Quality::Minor7 => &[0, 3, 7, 10],
            Quality::HalfDiminished7 => &[0, 3, 6, 10],
        }
    }

    pub fn note_count(self) -> usize {
        self.intervals().len()
    }

    pub fn contains(self, offset: u8) -> bool {
        self.intervals().contains(&(offset % 12))
    }

    /// Interval label spelled for this quality (`#5` instead of `b6` for
    /// augmented chords).
    pub fn interval_label(self, offset: u8) -> &'static str {
        match (self, offset % 12) {
            (Quality::Augmented, 8) => "#5",
            (_, offset) => interval_label(offset),
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Interval set for a quality label, failing on labels that are not registered.
pub fn intervals_for(label: &str) -> Result<&'static [u8], ShapeError> {
    Quality::from_label(label)
        .map(Quality::intervals)
        .ok_or_else(|| ShapeError::UnknownQuality(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triad_intervals() {
        assert_eq!(Quality::Major.intervals(), &[0, 4, 7]);
        assert_eq!(Quality::Minor.intervals(), &[0, 3, 7]);
        assert_eq!(Quality::Diminished.intervals(), &[0, 3, 6]);
        assert_eq!(Quality::Augmented.intervals(), &[0, 4, 8]);
    }

    #[test]
    fn test_note_counts() {
        assert_eq!(Quality::Sus4.note_count(), 3);
        assert_eq!(Quality::Dominant7.note_count(), 4);
        for quality in Quality::ALL {
            assert_eq!(quality.intervals()[0], 0, "{} must start at the root", quality);
        }
    }

    #[test]
    fn test_labels_round_trip_through_name() {
        for quality in Quality::ALL {
            assert_eq!(Quality::from_label(quality.name()), Some(quality));
        }
        assert_eq!(Quality::from_label("m7b5"), Some(Quality::HalfDiminished7));
        assert_eq!(Quality::from_label("m"), Some(Quality::Minor));
    }

    #[test]
    fn test_unknown_quality() {
        assert_eq!(
            intervals_for("Sus9"),
            Err(ShapeError::UnknownQuality("Sus9".to_string()))
        );
        assert_eq!(intervals_for("Major"), Ok(&[0u8, 4, 7][..]));
    }

    #[test]
    fn test_augmented_fifth_spelling() {
        assert_eq!(Quality::Augmented.interval_label(8), "#5");
        assert_eq!(Quality::Major.interval_label(8), "b6");
        assert_eq!(Quality::Diminished.interval_label(6), "d5");
        assert_eq!(Quality::Minor7.interval_label(10), "b7");
    }
}
