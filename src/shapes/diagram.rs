//! Render-ready output: notes with coordinates, plus connectors.

use serde::Serialize;

use super::connectors::derive_connectors;
use super::types::{Connector, NoteRef, Resolution, ShapeDiagnostic, ShapeInstance};
use crate::layout::{Handedness, Layout};
use crate::pitch::PitchClass;
use crate::quality::Quality;

/// A shape note with its draw position attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedNote {
    pub string_index: usize,
    pub fret: u8,
    pub pitch_class: PitchClass,
    pub pitch_name: &'static str,
    pub interval_label: &'static str,
    pub is_root: bool,
    pub x: f64,
    pub y: f64,
}

impl From<&RenderedNote> for NoteRef {
    fn from(note: &RenderedNote) -> Self {
        Self {
            string_index: note.string_index,
            fret: note.fret,
        }
    }
}

/// One instance ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedShape {
    pub quality: Quality,
    pub variant: String,
    pub root: PitchClass,
    pub display_group: u32,
    pub notes: Vec<RenderedNote>,
    pub connectors: Vec<Connector>,
}

/// Everything a renderer needs for one diagram panel.
///
/// An empty `shapes` list is a normal outcome; the caller decides what to
/// show for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagram {
    pub handedness: Handedness,
    pub shapes: Vec<RenderedShape>,
    pub diagnostics: Vec<ShapeDiagnostic>,
    pub next_display_group: u32,
}

/// Attach coordinates to an instance and outline it.
pub fn render_instance(
    instance: &ShapeInstance,
    layout: &Layout,
    handedness: Handedness,
) -> RenderedShape {
    let notes: Vec<RenderedNote> = instance
        .notes
        .iter()
        .map(|note| {
            let point = layout.coordinate_of(note.string_index, note.fret as i32, handedness);
            RenderedNote {
                string_index: note.string_index,
                fret: note.fret,
                pitch_class: note.pitch_class,
                pitch_name: note.pitch_class.name(),
                interval_label: note.interval_label,
                is_root: note.is_root,
                x: point.x,
                y: point.y,
            }
        })
        .collect();
    let connectors = derive_connectors(notes.iter().map(NoteRef::from), instance.display_group);

    RenderedShape {
        quality: instance.quality,
        variant: instance.variant.clone(),
        root: instance.root,
        display_group: instance.display_group,
        notes,
        connectors,
    }
}

/// Render every instance of a resolution.
pub fn render_resolution(
    resolution: Resolution,
    layout: &Layout,
    handedness: Handedness,
) -> Diagram {
    Diagram {
        handedness,
        shapes: resolution
            .instances
            .iter()
            .map(|instance| render_instance(instance, layout, handedness))
            .collect(),
        diagnostics: resolution.diagnostics,
        next_display_group: resolution.next_display_group,
    }
}
