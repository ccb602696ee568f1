pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod layout;
pub mod pitch;
pub mod quality;
pub mod shapes;
pub mod tuning;

pub use api::{resolve_by_name, resolve_diagram, resolve_from_yaml};
pub use catalog::{CatalogDiagnostic, RelativeShape, ShapeCatalog, StringGroup};
pub use config::DiagramConfig;
pub use error::ShapeError;
pub use layout::{visual_index, Handedness, Layout, Point};
pub use pitch::{interval_label, PitchClass};
pub use quality::{intervals_for, Quality};
pub use shapes::{
    derive_connectors, render_instance, render_resolution, resolve_shapes, Connector, Diagram,
    DiagnosticKind, NoteRef, RenderedNote, RenderedShape, Resolution, ShapeDiagnostic,
    ShapeInstance, ShapeNote, ShapeRequest, VariantFilter,
};
pub use tuning::{Tuning, STRING_COUNT};
