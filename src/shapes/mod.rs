//! # Shapes Module
//!
//! Resolve movable chord shapes onto the fretboard and turn them into
//! drawable notes and outline connectors.
//!
//! ## Sub-modules
//! - `types` - ShapeInstance, ShapeNote, Connector, Resolution and diagnostics
//! - `engine` - anchor search, transposition, validation and dedup
//! - `connectors` - which notes of an instance get joined by a line
//! - `diagram` - coordinates and connectors attached for rendering
//!
//! ## Entry Point
//! [`resolve_shapes()`] - all placements of a quality on a string group
//!
//! ## Example
//! ```rust
//! use fretshape::shapes::{render_resolution, resolve_shapes, ShapeRequest};
//! use fretshape::{Handedness, Layout, PitchClass, Quality, ShapeCatalog, StringGroup, Tuning};
//!
//! let tuning = Tuning::standard();
//! let request = ShapeRequest::new(
//!     PitchClass::from_name("G").unwrap(),
//!     Quality::Major,
//!     &tuning,
//!     StringGroup::parse("3-5").unwrap(),
//!     12,
//! );
//! let resolution = resolve_shapes(&request, ShapeCatalog::builtin().unwrap()).unwrap();
//! let diagram = render_resolution(resolution, &Layout::default(), Handedness::Right);
//!
//! assert_eq!(diagram.shapes.len(), 3);
//! assert!(diagram.shapes.iter().all(|s| s.connectors.len() == 2));
//! ```
//!
//! ## Invariants
//! For every returned instance:
//! - every note is a chord tone of the quality and lies within `0..=fret_limit`
//! - it has exactly as many notes as the quality has intervals
//! - the note on the anchor string sounds the requested root
//! - no two instances of one call share the same `(string, fret)` set
//!
//! ## Display groups
//! Instances are numbered from the request's `display_group_start` in
//! discovery order. Callers resolving several panels can feed
//! `next_display_group` into the next request to keep colors distinct.

mod connectors;
mod diagram;
mod engine;
mod types;


pub use connectors::derive_connectors;
pub use diagram::{render_instance, render_resolution, Diagram, RenderedNote, RenderedShape};
pub use engine::{resolve_shapes, ShapeRequest};
pub use types::{
    Connector, DiagnosticKind, NoteRef, Resolution, ShapeDiagnostic, ShapeInstance, ShapeNote,
    VariantFilter,
};
