//! # Shape Catalog
//!
//! Hand-authored movable fingering patterns, one entry per quality, variant
//! and string group.
//!
//! ## Entry format
//! Entries live in the YAML files under `catalog/` and are embedded at build
//! time:
//!
//! ```yaml
//! shapes:
//!   - { quality: Major, variant: "Root position", strings: [0, 1, 2], offsets: [3, 2, 0], anchor: 0 }
//! ```
//!
//! - `strings` - the spanned string indices, low to high
//! - `offsets` - one fret offset per spanned string, in any common frame
//! - `anchor` - index into `strings` of the string that carries the root
//!
//! Only differences between offsets matter: the engine places the anchor on
//! a fret that sounds the root and shifts every other string by
//! `offsets[i] - offsets[anchor]`.
//!
//! ## Validation
//! Structural problems (offset count, anchor outside the span, unknown or
//! repeated strings) are caught when the catalog is built; the entry is
//! dropped and a [`CatalogDiagnostic`] is recorded. Musical correctness is
//! *not* checked here, it is enforced per placement by the engine.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use crate::error::ShapeError;
use crate::quality::Quality;
use crate::tuning::STRING_COUNT;

include!(concat!(env!("OUT_DIR"), "/catalog.rs"));

/// A set of string indices, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StringGroup(u8);

impl StringGroup {
    /// Build a group from string indices. Duplicates collapse.
    pub fn from_indices(indices: &[usize]) -> Result<Self, ShapeError> {
        if indices.is_empty() {
            return Err(ShapeError::InvalidStringGroup("no strings selected".to_string()));
        }
        let mut mask = 0u8;
        for &string in indices {
            if string >= STRING_COUNT {
                return Err(missing_string(string));
            }
            mask |= 1 << string;
        }
        Ok(Self(mask))
    }

    /// `len` adjacent strings starting at `first`.
    pub fn contiguous(first: usize, len: usize) -> Result<Self, ShapeError> {
        match first.checked_add(len) {
            Some(end) if end <= STRING_COUNT => {
                let indices: Vec<usize> = (first..end).collect();
                Self::from_indices(&indices)
            }
            _ => Err(missing_string(first.max(STRING_COUNT))),
        }
    }

    /// Parse `"0-2"` (inclusive range) or `"3,4,5"` (list).
    ///
    /// ```
    /// use fretshape::StringGroup;
    ///
    /// assert_eq!(StringGroup::parse("0-2"), StringGroup::from_indices(&[0, 1, 2]));
    /// assert_eq!(StringGroup::parse("5, 3, 4"), StringGroup::contiguous(3, 3));
    /// assert!(StringGroup::parse("4-7").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ShapeError> {
        let invalid = || ShapeError::InvalidStringGroup(format!("cannot parse '{}'", s));
        let parse_index = |part: &str| part.trim().parse::<usize>().map_err(|_| invalid());

        if let Some((from, to)) = s.split_once('-') {
            let (from, to) = (parse_index(from)?, parse_index(to)?);
            if from > to {
                return Err(invalid());
            }
            if to >= STRING_COUNT {
                return Err(missing_string(from.max(STRING_COUNT)));
            }
            return Self::contiguous(from, to - from + 1);
        }
        let indices = s.split(',').map(parse_index).collect::<Result<Vec<_>, _>>()?;
        Self::from_indices(&indices)
    }

    pub fn contains(self, string: usize) -> bool {
        string < STRING_COUNT && self.0 & (1 << string) != 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Member strings, ascending.
    pub fn strings(self) -> impl Iterator<Item = usize> {
        (0..STRING_COUNT).filter(move |&s| self.contains(s))
    }
}

fn missing_string(string: usize) -> ShapeError {
    ShapeError::InvalidStringGroup(format!(
        "string {} does not exist (strings are 0-{})",
        string,
        STRING_COUNT - 1
    ))
}

impl fmt::Display for StringGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strings: Vec<String> = self.strings().map(|s| s.to_string()).collect();
        write!(f, "[{}]", strings.join(","))
    }
}

/// A movable fingering pattern, as authored in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeShape {
    pub quality: Quality,
    pub variant: String,
    pub strings: Vec<usize>,
    pub offsets: Vec<i32>,
    pub anchor: usize,
}

impl RelativeShape {
    /// Check the structural invariants a shape must satisfy to be placed.
    fn check(&self) -> Result<(), String> {
        if self.strings.is_empty() {
            return Err("spans no strings".to_string());
        }
        if self.offsets.len() != self.strings.len() {
            return Err(format!(
                "{} offsets for {} strings",
                self.offsets.len(),
                self.strings.len()
            ));
        }
        if self.anchor >= self.strings.len() {
            return Err(format!(
                "anchor index {} is outside its {}-string span",
                self.anchor,
                self.strings.len()
            ));
        }
        if let Some(&string) = self.strings.iter().find(|&&s| s >= STRING_COUNT) {
            return Err(format!("string {} does not exist", string));
        }
        let group = self.string_group();
        if group.len() != self.strings.len() {
            return Err("repeats a string".to_string());
        }
        Ok(())
    }

    /// The string the root is placed on.
    pub fn anchor_string(&self) -> usize {
        self.strings[self.anchor]
    }

    /// `(string, fret offset from the anchor)` for every spanned string.
    pub fn relative_frets(&self) -> impl Iterator<Item = (usize, i32)> + '_ {
        let anchor_offset = self.offsets[self.anchor];
        self.strings
            .iter()
            .zip(&self.offsets)
            .map(move |(&string, &offset)| (string, offset - anchor_offset))
    }

    pub fn string_group(&self) -> StringGroup {
        StringGroup(
            self.strings
                .iter()
                .filter(|&&s| s < STRING_COUNT)
                .fold(0u8, |mask, &s| mask | 1 << s),
        )
    }
}

/// A catalog entry that was rejected while building the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDiagnostic {
    /// Position of the entry in the authored source order.
    pub entry: usize,
    pub quality: Quality,
    pub variant: String,
    pub message: String,
}

impl fmt::Display for CatalogDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry {} ({} {}): {}",
            self.entry, self.quality, self.variant, self.message
        )
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    shapes: Vec<RelativeShape>,
}

/// Read-only table of validated shapes, indexed for candidate lookup.
#[derive(Debug, Clone, Default)]
pub struct ShapeCatalog {
    shapes: Vec<RelativeShape>,
    by_group: HashMap<(Quality, StringGroup), Vec<usize>>,
    variants: HashMap<Quality, Vec<String>>,
    diagnostics: Vec<CatalogDiagnostic>,
}

impl ShapeCatalog {
    /// Build a catalog, dropping structurally malformed entries.
    pub fn new(entries: Vec<RelativeShape>) -> Self {
        let mut catalog = Self::default();
        for (idx, shape) in entries.into_iter().enumerate() {
            if let Err(message) = shape.check() {
                log::warn!(
                    "Skipping catalog entry {} ({} {}): {}",
                    idx,
                    shape.quality,
                    shape.variant,
                    message
                );
                catalog.diagnostics.push(CatalogDiagnostic {
                    entry: idx,
                    quality: shape.quality,
                    variant: shape.variant,
                    message,
                });
                continue;
            }

            let position = catalog.shapes.len();
            catalog
                .by_group
                .entry((shape.quality, shape.string_group()))
                .or_default()
                .push(position);
            let variants = catalog.variants.entry(shape.quality).or_default();
            if !variants.contains(&shape.variant) {
                variants.push(shape.variant.clone());
            }
            catalog.shapes.push(shape);
        }
        catalog
    }

    /// Parse one or more catalog documents and build a single catalog.
    pub fn from_yaml_sources<'a>(
        sources: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, ShapeError> {
        let mut entries = Vec::new();
        for source in sources {
            let file: CatalogFile =
                serde_yaml::from_str(source).map_err(|e| ShapeError::Catalog(e.to_string()))?;
            entries.extend(file.shapes);
        }
        Ok(Self::new(entries))
    }

    pub fn from_yaml(source: &str) -> Result<Self, ShapeError> {
        Self::from_yaml_sources([source])
    }

    /// The catalog shipped with the crate, parsed on first use.
    pub fn builtin() -> Result<&'static ShapeCatalog, ShapeError> {
        static BUILTIN: OnceLock<Result<ShapeCatalog, ShapeError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| {
                let catalog =
                    Self::from_yaml_sources(CATALOG_SOURCES.iter().map(|(_, source)| *source));
                if let Ok(catalog) = &catalog {
                    log::debug!(
                        "Loaded {} shapes from {} catalog files",
                        catalog.len(),
                        CATALOG_SOURCES.len()
                    );
                }
                catalog
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shapes(&self) -> &[RelativeShape] {
        &self.shapes
    }

    pub fn diagnostics(&self) -> &[CatalogDiagnostic] {
        &self.diagnostics
    }

    /// Variant labels registered for `quality`, in first-seen order.
    pub fn variants(&self, quality: Quality) -> &[String] {
        self.variants.get(&quality).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_variant(&self, quality: Quality, variant: &str) -> bool {
        self.variants(quality).iter().any(|v| v == variant)
    }

    /// Entries for `quality` spanning exactly `group`, in catalog order.
    pub fn candidates(
        &self,
        quality: Quality,
        group: StringGroup,
    ) -> impl Iterator<Item = &RelativeShape> + '_ {
        self.by_group
            .get(&(quality, group))
            .into_iter()
            .flatten()
            .map(move |&idx| &self.shapes[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(strings: Vec<usize>, offsets: Vec<i32>, anchor: usize) -> RelativeShape {
        RelativeShape {
            quality: Quality::Major,
            variant: "Root position".to_string(),
            strings,
            offsets,
            anchor,
        }
    }

    #[test]
    fn test_string_group_parsing() {
        let group = StringGroup::parse("1-3").unwrap();
        assert_eq!(group.strings().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(group.len(), 3);
        assert!(group.contains(2));
        assert!(!group.contains(0));
        assert_eq!(group.to_string(), "[1,2,3]");

        assert!(matches!(StringGroup::parse("3-1"), Err(ShapeError::InvalidStringGroup(_))));
        assert!(matches!(StringGroup::parse("a,b"), Err(ShapeError::InvalidStringGroup(_))));
        assert!(matches!(StringGroup::from_indices(&[]), Err(ShapeError::InvalidStringGroup(_))));
        assert!(matches!(StringGroup::from_indices(&[6]), Err(ShapeError::InvalidStringGroup(_))));
    }

    #[test]
    fn test_string_group_ranges_past_the_neck() {
        let missing = |string: usize| {
            Err(ShapeError::InvalidStringGroup(format!(
                "string {} does not exist (strings are 0-5)",
                string
            )))
        };
        assert_eq!(StringGroup::parse("0-18446744073709551615"), missing(6));
        assert_eq!(StringGroup::parse("0-4000000000"), missing(6));
        assert_eq!(StringGroup::parse("7-9"), missing(7));
        assert_eq!(StringGroup::contiguous(usize::MAX, 2), missing(usize::MAX));
        assert_eq!(StringGroup::contiguous(4, usize::MAX), missing(6));
        assert_eq!(StringGroup::contiguous(3, 3), StringGroup::parse("3-5"));
    }

    #[test]
    fn test_relative_frets_subtract_anchor_offset() {
        let entry = shape(vec![0, 1, 2], vec![3, 2, 0], 0);
        assert_eq!(entry.anchor_string(), 0);
        let frets: Vec<_> = entry.relative_frets().collect();
        assert_eq!(frets, vec![(0, 0), (1, -1), (2, -3)]);
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let catalog = ShapeCatalog::new(vec![
            shape(vec![0, 1, 2], vec![3, 2, 0], 0),
            shape(vec![0, 1, 2], vec![3, 2], 0),
            shape(vec![0, 1, 2], vec![3, 2, 0], 3),
            shape(vec![4, 5, 6], vec![0, 0, 0], 0),
            shape(vec![1, 1, 2], vec![0, 0, 0], 0),
            shape(vec![], vec![], 0),
        ]);

        assert_eq!(catalog.len(), 1);
        let skipped: Vec<usize> = catalog.diagnostics().iter().map(|d| d.entry).collect();
        assert_eq!(skipped, vec![1, 2, 3, 4, 5]);
        assert!(catalog.diagnostics()[1].message.contains("anchor index 3"));
    }

    #[test]
    fn test_candidates_keep_catalog_order() {
        let mut second = shape(vec![0, 1, 2], vec![2, 0, 0], 2);
        second.variant = "1st inversion".to_string();
        let mut other_group = shape(vec![3, 4, 5], vec![0, 0, 0], 0);
        other_group.variant = "Elsewhere".to_string();

        let catalog = ShapeCatalog::new(vec![
            shape(vec![0, 1, 2], vec![3, 2, 0], 0),
            other_group,
            second,
        ]);
        let group = StringGroup::contiguous(0, 3).unwrap();
        let variants: Vec<&str> = catalog
            .candidates(Quality::Major, group)
            .map(|s| s.variant.as_str())
            .collect();
        assert_eq!(variants, vec!["Root position", "1st inversion"]);
        assert_eq!(catalog.candidates(Quality::Minor, group).count(), 0);
        assert_eq!(
            catalog.variants(Quality::Major),
            &["Root position", "Elsewhere", "1st inversion"]
        );
        assert!(catalog.has_variant(Quality::Major, "Elsewhere"));
        assert!(!catalog.has_variant(Quality::Minor, "Root position"));
    }

    #[test]
    fn test_parse_catalog_yaml() {
        let source = r#"
shapes:
  - { quality: Minor, variant: "Root position", strings: [3, 4, 5], offsets: [2, 1, 0], anchor: 0 }
  - { quality: Minor, variant: "Broken", strings: [3, 4, 5], offsets: [2, 1, 0], anchor: 5 }
"#;
        let catalog = ShapeCatalog::from_yaml(source).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.diagnostics().len(), 1);
        assert_eq!(catalog.shapes()[0].quality, Quality::Minor);

        assert!(matches!(
            ShapeCatalog::from_yaml("shapes: [{ quality: Sus9 }]"),
            Err(ShapeError::Catalog(_))
        ));
    }

    #[test]
    fn test_builtin_catalog_is_clean() {
        let catalog = ShapeCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 120);
        assert!(catalog.diagnostics().is_empty(), "{:?}", catalog.diagnostics());
        for quality in Quality::ALL {
            assert!(!catalog.variants(quality).is_empty(), "no shapes for {}", quality);
        }
        assert_eq!(
            catalog.variants(Quality::Major),
            &["Root position", "1st inversion", "2nd inversion"]
        );
        assert_eq!(catalog.variants(Quality::Dominant7).len(), 4);
    }
}
