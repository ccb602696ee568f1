//! # Tuning
//!
//! A tuning is six semitone offsets, one per string, ordered from the lowest
//! string (index 0) to the highest (index 5). Each offset is the pitch class
//! of the open string, see [`crate::pitch`] for the reference.
//!
//! ## Presets
//! | Name           | Strings         | Offsets                |
//! |----------------|-----------------|------------------------|
//! | Standard       | E A D G B E     | `[7, 0, 5, 10, 2, 7]`  |
//! | Drop D         | D A D G B E     | `[5, 0, 5, 10, 2, 7]`  |
//! | Half-step down | Eb Ab Db Gb Bb Eb | `[6, 11, 4, 9, 1, 6]` |
//! | Drop C         | C G C F A D     | `[3, 10, 3, 8, 0, 5]`  |
//! | DADGAD         | D A D G A D     | `[5, 0, 5, 10, 0, 5]`  |
//! | Open G         | D G D G B D     | `[5, 10, 5, 10, 2, 5]` |
//! | Open D         | D A D F# A D    | `[5, 0, 5, 9, 0, 5]`   |
//! | Open E         | E B E G# B E    | `[7, 2, 7, 11, 2, 7]`  |

use serde::Serialize;

use crate::error::ShapeError;
use crate::pitch::PitchClass;

/// Number of strings on the instrument.
pub const STRING_COUNT: usize = 6;

const PRESETS: [(&str, [u8; STRING_COUNT]); 8] = [
    ("Standard", [7, 0, 5, 10, 2, 7]),
    ("Drop D", [5, 0, 5, 10, 2, 7]),
    ("Half-step down", [6, 11, 4, 9, 1, 6]),
    ("Drop C", [3, 10, 3, 8, 0, 5]),
    ("DADGAD", [5, 0, 5, 10, 0, 5]),
    ("Open G", [5, 10, 5, 10, 2, 5]),
    ("Open D", [5, 0, 5, 9, 0, 5]),
    ("Open E", [7, 2, 7, 11, 2, 7]),
];

/// Open-string pitch classes of the six strings, low to high.
///
/// Two tunings are equal when their offsets are; the preset name is a label.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tuning {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    offsets: [u8; STRING_COUNT],
}

impl Tuning {
    /// Build a tuning from raw offsets.
    ///
    /// Exactly six values in `0..=11` are required; anything else is a
    /// configuration error.
    ///
    /// ```
    /// use fretshape::Tuning;
    ///
    /// let tuning = Tuning::new(&[7, 0, 5, 10, 2, 7]).unwrap();
    /// assert_eq!(tuning, Tuning::standard());
    /// assert!(Tuning::new(&[7, 0, 5, 10, 2]).is_err());
    /// assert!(Tuning::new(&[7, 0, 5, 10, 2, 12]).is_err());
    /// ```
    pub fn new(offsets: &[i64]) -> Result<Self, ShapeError> {
        if offsets.len() != STRING_COUNT {
            return Err(ShapeError::MalformedTuning(format!(
                "expected {} string offsets, got {}",
                STRING_COUNT,
                offsets.len()
            )));
        }
        let mut values = [0u8; STRING_COUNT];
        for (string, (&offset, value)) in offsets.iter().zip(values.iter_mut()).enumerate() {
            if !(0..=11).contains(&offset) {
                return Err(ShapeError::MalformedTuning(format!(
                    "string {} offset {} is outside 0-11",
                    string, offset
                )));
            }
            *value = offset as u8;
        }
        Ok(Self { name: None, offsets: values })
    }

    /// Build a tuning from six whitespace-separated pitch names, low to high.
    pub fn from_note_names(names: &str) -> Result<Self, ShapeError> {
        let offsets = names
            .split_whitespace()
            .map(|name| {
                PitchClass::from_name(name)
                    .map(|pitch| pitch.value() as i64)
                    .ok_or_else(|| ShapeError::UnknownPitch(name.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&offsets)
    }

    pub fn standard() -> Self {
        Self {
            name: Some(PRESETS[0].0.to_string()),
            offsets: PRESETS[0].1,
        }
    }

    /// Look up a named preset, ignoring ASCII case.
    pub fn preset(name: &str) -> Option<Self> {
        let name = name.trim();
        PRESETS
            .iter()
            .find(|(preset, _)| preset.eq_ignore_ascii_case(name))
            .map(|(preset, offsets)| Self {
                name: Some(preset.to_string()),
                offsets: *offsets,
            })
    }

    pub fn presets() -> Vec<Self> {
        PRESETS
            .iter()
            .map(|(name, offsets)| Self {
                name: Some(name.to_string()),
                offsets: *offsets,
            })
            .collect()
    }

    /// Resolve a tuning spec: a preset name, or six pitch names.
    pub fn parse(spec: &str) -> Result<Self, ShapeError> {
        if let Some(preset) = Self::preset(spec) {
            return Ok(preset);
        }
        if spec.split_whitespace().count() == STRING_COUNT {
            return Self::from_note_names(spec);
        }
        Err(ShapeError::MalformedTuning(format!(
            "'{}' is neither a known preset nor six pitch names",
            spec
        )))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn offsets(&self) -> &[u8; STRING_COUNT] {
        &self.offsets
    }

    /// Open-string pitch class of `string`.
    ///
    /// # Panics
    /// Panics if `string >= STRING_COUNT`.
    pub fn open_pitch(&self, string: usize) -> PitchClass {
        PitchClass::new(self.offsets[string] as i32)
    }

    /// Pitch class sounded by `string` stopped at `fret`.
    ///
    /// ```
    /// use fretshape::{PitchClass, Tuning};
    ///
    /// let standard = Tuning::standard();
    /// // Low E string, 8th fret: C
    /// assert_eq!(standard.pitch_at(0, 8), PitchClass::from_name("C").unwrap());
    /// ```
    pub fn pitch_at(&self, string: usize, fret: u8) -> PitchClass {
        self.open_pitch(string).transpose(fret as i32)
    }

    /// The same tuning with string order reversed (high string first).
    pub fn reversed(&self) -> Self {
        let mut offsets = self.offsets;
        offsets.reverse();
        Self { name: None, offsets }
    }
}

impl PartialEq for Tuning {
    fn eq(&self, other: &Self) -> bool {
        self.offsets == other.offsets
    }
}

impl Eq for Tuning {}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}
