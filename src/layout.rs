//! # Coordinate Mapper
//!
//! Maps a (string, fret) position to a point on the diagram.
//!
//! Strings run left to right, frets top to bottom. Fretted notes sit in the
//! middle of their fret cell; open strings (fret 0) and muted markers sit on a
//! row above the nut.
//!
//! ```text
//!   x = left + visual_index * string_spacing
//!   y = top + (fret - 0.5) * fret_spacing     fret > 0
//!   y = top - note_radius * 1.5               fret <= 0
//! ```
//!
//! Left-handed diagrams are a mirror image: [`visual_index`] is the only place
//! the mirroring happens, so notes and connectors always agree.

use serde::{Deserialize, Serialize};

use crate::tuning::STRING_COUNT;

/// Which hand frets the instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handedness {
    #[default]
    Right,
    Left,
}

impl Handedness {
    /// Parse `"left"`/`"right"` (or `l`/`r`), ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "right" | "r" => Some(Handedness::Right),
            "left" | "l" => Some(Handedness::Left),
            _ => None,
        }
    }
}

/// A point on the diagram canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Column a string is drawn in, after mirroring for handedness.
pub fn visual_index(string: usize, handedness: Handedness) -> usize {
    match handedness {
        Handedness::Right => string,
        Handedness::Left => STRING_COUNT - 1 - string,
    }
}

/// Diagram geometry in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Layout {
    pub left: f64,
    pub top: f64,
    pub string_spacing: f64,
    pub fret_spacing: f64,
    pub note_radius: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            left: 20.0,
            top: 30.0,
            string_spacing: 20.0,
            fret_spacing: 30.0,
            note_radius: 8.0,
        }
    }
}

impl Layout {
    /// Draw position of `string` at `fret`.
    ///
    /// Any fret `<= 0` maps to the open-string row above the nut, which is
    /// also where muted markers (`-1`) are drawn.
    ///
    /// ```
    /// use fretshape::{Handedness, Layout};
    ///
    /// let layout = Layout::default();
    /// let p = layout.coordinate_of(0, 1, Handedness::Right);
    /// assert_eq!((p.x, p.y), (20.0, 45.0));
    /// ```
    pub fn coordinate_of(&self, string: usize, fret: i32, handedness: Handedness) -> Point {
        let x = self.left + visual_index(string, handedness) as f64 * self.string_spacing;
        let y = if fret > 0 {
            self.top + (fret as f64 - 0.5) * self.fret_spacing
        } else {
            self.top - self.note_radius * 1.5
        };
        Point { x, y }
    }
}
