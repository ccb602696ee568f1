//! Shape resolution type definitions
//!
//! Value types produced by the engine and consumed by the diagram renderer.

use serde::Serialize;
use std::fmt;

use crate::catalog::RelativeShape;
use crate::pitch::PitchClass;
use crate::quality::Quality;

/// Which catalog variants a request wants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum VariantFilter {
    /// Every variant of the quality (the `"all"` sentinel).
    #[default]
    All,
    Named(String),
}

impl VariantFilter {
    /// `"all"` (any case) selects every variant; anything else is a label.
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            VariantFilter::All
        } else {
            VariantFilter::Named(trimmed.to_string())
        }
    }

    pub fn matches(&self, variant: &str) -> bool {
        match self {
            VariantFilter::All => true,
            VariantFilter::Named(name) => name == variant,
        }
    }
}

/// One resolved note of a shape instance.
///
/// # Fields
/// - `string_index`: 0 = lowest string
/// - `fret`: absolute fret, 0 = open
/// - `interval`: semitones above the requested root
/// - `is_root`: `interval == 0`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeNote {
    pub string_index: usize,
    pub fret: u8,
    pub pitch_class: PitchClass,
    pub interval: u8,
    pub interval_label: &'static str,
    pub is_root: bool,
}

/// One concrete, validated placement of a catalog shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInstance {
    pub quality: Quality,
    pub variant: String,
    pub root: PitchClass,
    pub anchor_string: usize,
    pub anchor_fret: u8,
    /// Distinct per instance within a call; used by renderers to pick colors.
    pub display_group: u32,
    pub notes: Vec<ShapeNote>,
}

impl ShapeInstance {
    /// Sorted `(string, fret)` pairs; equal keys mean the same placement.
    pub fn placement_key(&self) -> Vec<(usize, u8)> {
        placement_key(&self.notes)
    }

    /// The note placed on the anchor string.
    pub fn anchor_note(&self) -> Option<&ShapeNote> {
        self.notes.iter().find(|n| n.string_index == self.anchor_string)
    }

    /// Lowest and highest fret used.
    pub fn fret_span(&self) -> (u8, u8) {
        let min = self.notes.iter().map(|n| n.fret).min().unwrap_or(0);
        let max = self.notes.iter().map(|n| n.fret).max().unwrap_or(0);
        (min, max)
    }
}

pub(crate) fn placement_key(notes: &[ShapeNote]) -> Vec<(usize, u8)> {
    let mut key: Vec<(usize, u8)> = notes.iter().map(|n| (n.string_index, n.fret)).collect();
    key.sort_unstable();
    key
}

/// Why a catalog entry contributed no instances.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// The entry spans a different number of strings than the quality has notes.
    #[serde(rename_all = "camelCase")]
    NoteCountMismatch { expected: usize, found: usize },
    /// Every anchor fret sounding the root pushed some note past the fret range.
    #[serde(rename_all = "camelCase")]
    OutOfRange { anchors: usize },
    /// Some placement sounded a pitch outside the quality (the pattern does
    /// not fit this tuning, or the entry is wrong).
    #[serde(rename_all = "camelCase")]
    IntervalMismatch { anchors: usize },
}

/// A per-entry problem found while resolving.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDiagnostic {
    pub quality: Quality,
    pub variant: String,
    pub strings: Vec<usize>,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl ShapeDiagnostic {
    pub(crate) fn new(shape: &RelativeShape, kind: DiagnosticKind) -> Self {
        Self {
            quality: shape.quality,
            variant: shape.variant.clone(),
            strings: shape.strings.clone(),
            kind,
        }
    }
}

impl fmt::Display for ShapeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on strings {:?}: ", self.quality, self.variant, self.strings)?;
        match self.kind {
            DiagnosticKind::NoteCountMismatch { expected, found } => {
                write!(f, "spans {} strings but the quality has {} notes", found, expected)
            }
            DiagnosticKind::OutOfRange { anchors } => {
                write!(f, "all {} anchor positions fall outside the fret range", anchors)
            }
            DiagnosticKind::IntervalMismatch { anchors } => {
                write!(f, "{} anchor positions produced notes outside the chord", anchors)
            }
        }
    }
}

/// Result of one resolution call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    /// Discovery order: catalog order, then ascending anchor fret.
    pub instances: Vec<ShapeInstance>,
    pub diagnostics: Vec<ShapeDiagnostic>,
    /// First display group not used by this call.
    pub next_display_group: u32,
}

/// A note position, used as a connector endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRef {
    pub string_index: usize,
    pub fret: u8,
}

impl From<&ShapeNote> for NoteRef {
    fn from(note: &ShapeNote) -> Self {
        Self {
            string_index: note.string_index,
            fret: note.fret,
        }
    }
}

/// A line joining two notes of the same instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub from: NoteRef,
    pub to: NoteRef,
    pub display_group: u32,
}
