//! Anchor search and transposition of catalog shapes.

use std::collections::HashSet;

use super::types::{
    placement_key, DiagnosticKind, Resolution, ShapeDiagnostic, ShapeInstance, ShapeNote,
    VariantFilter,
};
use crate::catalog::{RelativeShape, ShapeCatalog, StringGroup};
use crate::error::ShapeError;
use crate::pitch::PitchClass;
use crate::quality::Quality;
use crate::tuning::Tuning;

/// Everything one resolution call depends on.
#[derive(Debug, Clone)]
pub struct ShapeRequest<'a> {
    pub root: PitchClass,
    pub quality: Quality,
    pub variant: VariantFilter,
    pub tuning: &'a Tuning,
    pub string_group: StringGroup,
    /// Highest fret any note may use; 0 allows open strings only.
    pub fret_limit: u8,
    /// Display group given to the first emitted instance.
    pub display_group_start: u32,
}

impl<'a> ShapeRequest<'a> {
    pub fn new(
        root: PitchClass,
        quality: Quality,
        tuning: &'a Tuning,
        string_group: StringGroup,
        fret_limit: u8,
    ) -> Self {
        Self {
            root,
            quality,
            variant: VariantFilter::All,
            tuning,
            string_group,
            fret_limit,
            display_group_start: 0,
        }
    }

    pub fn with_variant(mut self, variant: VariantFilter) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_display_group_start(mut self, start: u32) -> Self {
        self.display_group_start = start;
        self
    }
}

/// Why a single placement was thrown away.
enum Rejection {
    OutOfRange,
    NotInQuality,
}

/// Per-entry bookkeeping, used to explain entries that produced nothing.
#[derive(Default)]
struct EntryTally {
    anchors: usize,
    out_of_range: usize,
    not_in_quality: usize,
    duplicates: usize,
    emitted: usize,
}

impl EntryTally {
    fn diagnostic(&self) -> Option<DiagnosticKind> {
        if self.anchors == 0 || self.emitted > 0 || self.duplicates > 0 {
            return None;
        }
        if self.not_in_quality > 0 {
            Some(DiagnosticKind::IntervalMismatch { anchors: self.anchors })
        } else {
            Some(DiagnosticKind::OutOfRange { anchors: self.out_of_range })
        }
    }
}

/// Resolve every placement of the matching catalog shapes.
///
/// # Algorithm
/// 1. Candidates are the entries for the quality spanning exactly the
///    requested string group, narrowed to the requested variant.
/// 2. For each candidate, every anchor fret in `0..=fret_limit` that sounds
///    the root on the anchor string is tried.
/// 3. Each string is shifted by its offset from the anchor. A placement is
///    rejected if any fret leaves `0..=fret_limit`, or if any note is not a
///    chord tone of the quality.
/// 4. Placements whose sorted `(string, fret)` set was already emitted in
///    this call are merged into the earlier instance.
///
/// Entries whose string count differs from the quality's note count, or
/// whose every anchor was rejected, yield a [`ShapeDiagnostic`] instead of
/// instances. An empty result is not an error.
///
/// # Errors
/// [`ShapeError::UnknownVariant`] if a named variant is not in the catalog
/// for the quality, and [`ShapeError::Config`] if the display groups would
/// run past `u32::MAX`.
///
/// # Example
/// ```
/// use fretshape::{
///     resolve_shapes, PitchClass, Quality, ShapeCatalog, ShapeRequest, StringGroup, Tuning,
/// };
///
/// let tuning = Tuning::standard();
/// let request = ShapeRequest::new(
///     PitchClass::from_name("C").unwrap(),
///     Quality::Major,
///     &tuning,
///     StringGroup::parse("0-2").unwrap(),
///     12,
/// );
/// let resolution = resolve_shapes(&request, ShapeCatalog::builtin().unwrap()).unwrap();
/// assert_eq!(resolution.instances.len(), 3);
/// assert_eq!(resolution.instances[0].anchor_fret, 8);
/// ```
pub fn resolve_shapes(
    request: &ShapeRequest<'_>,
    catalog: &ShapeCatalog,
) -> Result<Resolution, ShapeError> {
    let quality = request.quality;
    if let VariantFilter::Named(name) = &request.variant {
        if !catalog.has_variant(quality, name) {
            return Err(ShapeError::UnknownVariant {
                quality,
                variant: name.clone(),
            });
        }
    }

    let expected = quality.note_count();
    let mut instances: Vec<ShapeInstance> = Vec::new();
    let mut diagnostics = Vec::new();
    let mut seen: HashSet<Vec<(usize, u8)>> = HashSet::new();

    let candidates = catalog
        .candidates(quality, request.string_group)
        .filter(|shape| request.variant.matches(&shape.variant));

    for shape in candidates {
        // Every placement of an entry has one note per spanned string.
        if shape.strings.len() != expected {
            let kind = DiagnosticKind::NoteCountMismatch {
                expected,
                found: shape.strings.len(),
            };
            let diagnostic = ShapeDiagnostic::new(shape, kind);
            log::warn!("Skipping catalog shape: {}", diagnostic);
            diagnostics.push(diagnostic);
            continue;
        }

        let mut tally = EntryTally::default();
        let anchor_string = shape.anchor_string();

        for anchor_fret in 0..=request.fret_limit {
            if request.tuning.pitch_at(anchor_string, anchor_fret) != request.root {
                continue;
            }
            tally.anchors += 1;

            let notes = match place(shape, anchor_fret, request) {
                Ok(notes) => notes,
                Err(Rejection::OutOfRange) => {
                    tally.out_of_range += 1;
                    continue;
                }
                Err(Rejection::NotInQuality) => {
                    log::debug!(
                        "{} {} at fret {} sounds a note outside {}",
                        quality,
                        shape.variant,
                        anchor_fret,
                        quality
                    );
                    tally.not_in_quality += 1;
                    continue;
                }
            };

            if !seen.insert(placement_key(&notes)) {
                log::debug!(
                    "{} {} at fret {} duplicates an earlier placement",
                    quality,
                    shape.variant,
                    anchor_fret
                );
                tally.duplicates += 1;
                continue;
            }

            instances.push(ShapeInstance {
                quality,
                variant: shape.variant.clone(),
                root: request.root,
                anchor_string,
                anchor_fret,
                display_group: display_group(request, instances.len())?,
                notes,
            });
            tally.emitted += 1;
        }

        if let Some(kind) = tally.diagnostic() {
            let diagnostic = ShapeDiagnostic::new(shape, kind);
            log::debug!("No placements: {}", diagnostic);
            diagnostics.push(diagnostic);
        }
    }

    Ok(Resolution {
        next_display_group: display_group(request, instances.len())?,
        instances,
        diagnostics,
    })
}

/// Display group of the `index`-th emitted instance.
fn display_group(request: &ShapeRequest<'_>, index: usize) -> Result<u32, ShapeError> {
    u32::try_from(index)
        .ok()
        .and_then(|index| request.display_group_start.checked_add(index))
        .ok_or_else(|| {
            ShapeError::Config(format!(
                "display-group-start {} leaves no room for {} shapes",
                request.display_group_start,
                index + 1
            ))
        })
}

/// Transpose `shape` so its anchor sits on `anchor_fret`, then validate.
///
/// Bounds are checked for every note before any pitch is considered.
fn place(
    shape: &RelativeShape,
    anchor_fret: u8,
    request: &ShapeRequest<'_>,
) -> Result<Vec<ShapeNote>, Rejection> {
    let limit = request.fret_limit as i32;
    let frets = shape
        .relative_frets()
        .map(|(string, delta)| {
            let fret = anchor_fret as i32 + delta;
            if (0..=limit).contains(&fret) {
                Ok((string, fret as u8))
            } else {
                Err(Rejection::OutOfRange)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    frets
        .into_iter()
        .map(|(string, fret)| {
            let pitch_class = request.tuning.pitch_at(string, fret);
            let interval = pitch_class.interval_from(request.root);
            if !request.quality.contains(interval) {
                return Err(Rejection::NotInQuality);
            }
            Ok(ShapeNote {
                string_index: string,
                fret,
                pitch_class,
                interval,
                interval_label: request.quality.interval_label(interval),
                is_root: interval == 0,
            })
        })
        .collect()
}
