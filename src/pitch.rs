//! # Pitch Model
//!
//! Octave-independent pitch arithmetic on the twelve pitch classes.
//!
//! Pitch class 0 is **A**; the remaining classes ascend by semitone, so
//! `C = 3`, `E = 7` and the standard guitar tuning reads `[7, 0, 5, 10, 2, 7]`.
//!
//! ```text
//!  0 A    1 A#/Bb   2 B    3 C    4 C#/Db   5 D
//!  6 D#/Eb  7 E     8 F    9 F#/Gb  10 G    11 G#/Ab
//! ```
//!
//! The first spelling of each class is the primary one used for display;
//! lookup accepts every spelling.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spellings per pitch class, primary spelling first.
const PITCH_NAMES: [&[&str]; 12] = [
    &["A"],
    &["A#", "Bb"],
    &["B"],
    &["C"],
    &["C#", "Db"],
    &["D"],
    &["D#", "Eb"],
    &["E"],
    &["F"],
    &["F#", "Gb"],
    &["G"],
    &["G#", "Ab"],
];

/// Interval labels indexed by semitone distance from the root.
const INTERVAL_LABELS: [&str; 12] = [
    "R", "b2", "2", "b3", "3", "4", "d5", "5", "b6", "6", "b7", "7",
];

/// One of the twelve octave-independent note identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Build a pitch class from any integer, reducing it modulo 12.
    pub fn new(value: i32) -> Self {
        Self(value.rem_euclid(12) as u8)
    }

    /// Look up a pitch class by name.
    ///
    /// Matching is case-sensitive and accepts both enharmonic spellings.
    /// Returns `None` for unknown names so callers can report them.
    ///
    /// ```
    /// use fretshape::PitchClass;
    ///
    /// assert_eq!(PitchClass::from_name("C"), Some(PitchClass::new(3)));
    /// assert_eq!(PitchClass::from_name("Bb"), PitchClass::from_name("A#"));
    /// assert_eq!(PitchClass::from_name("c"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        PITCH_NAMES
            .iter()
            .position(|spellings| spellings.contains(&name))
            .map(|idx| Self(idx as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Primary display spelling.
    pub fn name(self) -> &'static str {
        PITCH_NAMES[self.0 as usize][0]
    }

    /// All accepted spellings, primary first.
    pub fn spellings(self) -> &'static [&'static str] {
        PITCH_NAMES[self.0 as usize]
    }

    /// Transpose by a signed number of semitones.
    pub fn transpose(self, semitones: i32) -> Self {
        Self::new(self.0 as i32 + semitones)
    }

    /// Semitones from `root` up to this pitch class, in `0..12`.
    pub fn interval_from(self, root: PitchClass) -> u8 {
        (self.0 as i32 - root.0 as i32).rem_euclid(12) as u8
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Label for a semitone distance above the root.
///
/// Offsets are reduced modulo 12 first. Offset 8 reads `b6` here; qualities
/// with an augmented fifth relabel it, see [`crate::Quality::interval_label`].
pub fn interval_label(offset: u8) -> &'static str {
    INTERVAL_LABELS[(offset % 12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_primary_and_alternate_spelling() {
        assert_eq!(PitchClass::from_name("A"), Some(PitchClass::new(0)));
        assert_eq!(PitchClass::from_name("A#"), Some(PitchClass::new(1)));
        assert_eq!(PitchClass::from_name("Bb"), Some(PitchClass::new(1)));
        assert_eq!(PitchClass::from_name("C"), Some(PitchClass::new(3)));
        assert_eq!(PitchClass::from_name("Gb"), Some(PitchClass::new(9)));
        assert_eq!(PitchClass::from_name("G#"), Some(PitchClass::new(11)));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(PitchClass::from_name("bb"), None);
        assert_eq!(PitchClass::from_name("e"), None);
    }

    #[test]
    fn test_unknown_names() {
        assert_eq!(PitchClass::from_name("H"), None);
        assert_eq!(PitchClass::from_name(""), None);
        assert_eq!(PitchClass::from_name("Cb"), None);
    }

    #[test]
    fn test_primary_spelling_is_sharp() {
        assert_eq!(PitchClass::new(1).name(), "A#");
        assert_eq!(PitchClass::new(4).spellings(), &["C#", "Db"]);
        assert_eq!(PitchClass::new(3).to_string(), "C");
    }

    #[test]
    fn test_modular_arithmetic() {
        assert_eq!(PitchClass::new(15), PitchClass::new(3));
        assert_eq!(PitchClass::new(-1), PitchClass::new(11));
        assert_eq!(PitchClass::new(10).transpose(5), PitchClass::new(3));
        assert_eq!(PitchClass::new(2).interval_from(PitchClass::new(3)), 11);
        assert_eq!(PitchClass::new(7).interval_from(PitchClass::new(3)), 4);
    }

    #[test]
    fn test_interval_labels() {
        assert_eq!(interval_label(0), "R");
        assert_eq!(interval_label(3), "b3");
        assert_eq!(interval_label(6), "d5");
        assert_eq!(interval_label(7), "5");
        assert_eq!(interval_label(11), "7");
        assert_eq!(interval_label(16), "3");
    }
}
