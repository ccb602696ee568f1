//! # Public API
//!
//! Entry points for callers that start from configuration text rather than
//! typed values.
//!
//! - [`resolve_diagram()`] - typed config + catalog to a render-ready diagram
//! - [`resolve_from_yaml()`] - YAML request to a diagram, using the built-in catalog
//! - [`resolve_by_name()`] - string inputs to raw shape instances
//!
//! ## Typical Usage
//!
//! ```rust
//! use fretshape::resolve_from_yaml;
//!
//! let diagram = resolve_from_yaml(r#"
//! root: C
//! quality: Major
//! strings: 0-2
//! "#)?;
//!
//! for shape in &diagram.shapes {
//!     println!("{} ({} notes)", shape.variant, shape.notes.len());
//! }
//! # Ok::<(), fretshape::ShapeError>(())
//! ```

use crate::catalog::{ShapeCatalog, StringGroup};
use crate::config::{parse_root, DiagramConfig};
use crate::error::ShapeError;
use crate::quality::Quality;
use crate::shapes::{
    render_resolution, resolve_shapes, Diagram, Resolution, ShapeRequest, VariantFilter,
};
use crate::tuning::Tuning;

/// Resolve a validated request against `catalog` and lay it out.
///
/// # Errors
/// Returns [`ShapeError::UnknownVariant`] if the variant filter names a
/// voicing the catalog does not have, and [`ShapeError::Config`] if
/// `display-group-start` leaves no room to number the shapes.
pub fn resolve_diagram(
    config: &DiagramConfig,
    catalog: &ShapeCatalog,
) -> Result<Diagram, ShapeError> {
    let resolution = resolve_shapes(&config.request(), catalog)?;
    log::debug!(
        "Resolved {} {} on strings {}: {} shapes",
        config.root,
        config.quality,
        config.string_group,
        resolution.instances.len()
    );
    Ok(render_resolution(resolution, &config.layout, config.handedness))
}

/// Parse a YAML request and resolve it with the built-in catalog.
///
/// # Example
/// ```rust
/// use fretshape::resolve_from_yaml;
///
/// let diagram = resolve_from_yaml("root: C#\nquality: Major\nstrings: 0-2\nfret-limit: 2\n")?;
/// assert!(diagram.shapes.is_empty());
/// # Ok::<(), fretshape::ShapeError>(())
/// ```
pub fn resolve_from_yaml(source: &str) -> Result<Diagram, ShapeError> {
    let config = DiagramConfig::from_yaml(source)?;
    resolve_diagram(&config, ShapeCatalog::builtin()?)
}

/// Resolve from plain strings, as typed into a settings panel.
///
/// `tuning` is a preset name or six pitch names, `strings` a range such as
/// `"0-2"`, and `variant` a label or `"all"`.
pub fn resolve_by_name(
    root: &str,
    quality: &str,
    variant: &str,
    tuning: &str,
    strings: &str,
    fret_limit: u8,
) -> Result<Resolution, ShapeError> {
    let root = parse_root(root)?;
    let quality = Quality::from_label(quality)
        .ok_or_else(|| ShapeError::UnknownQuality(quality.to_string()))?;
    let tuning = Tuning::parse(tuning)?;
    let string_group = StringGroup::parse(strings)?;

    let request = ShapeRequest::new(root, quality, &tuning, string_group, fret_limit)
        .with_variant(VariantFilter::parse(variant));
    resolve_shapes(&request, ShapeCatalog::builtin()?)
}
