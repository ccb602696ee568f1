//! # Diagram Request Configuration
//!
//! A diagram panel is described by a small YAML document:
//!
//! ```yaml
//! tuning: Drop D            # preset name, six pitch names, or six offsets
//! root: C                   # pitch name or pitch class number
//! quality: Major
//! variant: all              # or a variant label such as "1st inversion"
//! strings: 0-2              # range, comma list, or YAML list
//! fret-limit: 12
//! handedness: left
//! display-group-start: 0
//! layout:
//!   string-spacing: 24
//! ```
//!
//! Only `root` and `quality` are required. Values are validated into a
//! [`DiagramConfig`] before anything is resolved, so every input problem is
//! reported as a typed [`ShapeError`].

use serde::Deserialize;

use crate::catalog::StringGroup;
use crate::error::ShapeError;
use crate::layout::{Handedness, Layout};
use crate::pitch::PitchClass;
use crate::quality::Quality;
use crate::shapes::{ShapeRequest, VariantFilter};
use crate::tuning::Tuning;

pub const DEFAULT_FRET_LIMIT: u8 = 12;
pub const DEFAULT_STRINGS: &str = "3-5";

/// Raw request for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub tuning: Option<RawTuning>,
    pub root: Option<RawPitch>,
    pub quality: Option<String>,
    pub variant: Option<String>,
    pub strings: Option<RawStrings>,
    pub fret_limit: Option<i64>,
    pub handedness: Option<String>,
    pub display_group_start: Option<u32>,
    pub layout: Option<Layout>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawTuning {
    Offsets(Vec<i64>),
    Spec(String),
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawPitch {
    Class(i64),
    Name(String),
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawStrings {
    List(Vec<usize>),
    Spec(String),
}

/// A validated diagram request.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagramConfig {
    pub tuning: Tuning,
    pub root: PitchClass,
    pub quality: Quality,
    pub variant: VariantFilter,
    pub string_group: StringGroup,
    pub fret_limit: u8,
    pub handedness: Handedness,
    pub layout: Layout,
    pub display_group_start: u32,
}

impl DiagramConfig {
    /// Parse and validate a YAML request.
    pub fn from_yaml(source: &str) -> Result<Self, ShapeError> {
        let raw: RawConfig =
            serde_yaml::from_str(source).map_err(|e| ShapeError::Config(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> Result<Self, ShapeError> {
        let tuning = match raw.tuning {
            Some(RawTuning::Offsets(offsets)) => Tuning::new(&offsets)?,
            Some(RawTuning::Spec(spec)) => Tuning::parse(&spec)?,
            None => Tuning::standard(),
        };

        let root = match raw.root {
            Some(RawPitch::Name(name)) => parse_root(&name)?,
            Some(RawPitch::Class(class)) if (0..12).contains(&class) => {
                PitchClass::new(class as i32)
            }
            Some(RawPitch::Class(class)) => return Err(ShapeError::UnknownPitch(class.to_string())),
            None => return Err(ShapeError::Config("root is required".to_string())),
        };

        let quality = match raw.quality {
            Some(label) => {
                Quality::from_label(&label).ok_or(ShapeError::UnknownQuality(label))?
            }
            None => return Err(ShapeError::Config("quality is required".to_string())),
        };

        let variant = raw
            .variant
            .as_deref()
            .map(VariantFilter::parse)
            .unwrap_or_default();

        let string_group = match raw.strings {
            Some(RawStrings::List(strings)) => StringGroup::from_indices(&strings)?,
            Some(RawStrings::Spec(spec)) => StringGroup::parse(&spec)?,
            None => StringGroup::parse(DEFAULT_STRINGS)?,
        };

        let fret_limit = match raw.fret_limit {
            Some(limit) => u8::try_from(limit).map_err(|_| {
                ShapeError::Config(format!("fret-limit must be between 0 and 255, got {}", limit))
            })?,
            None => DEFAULT_FRET_LIMIT,
        };

        let handedness = match raw.handedness {
            Some(s) => Handedness::parse(&s)
                .ok_or_else(|| ShapeError::Config(format!("Invalid handedness: {}", s)))?,
            None => Handedness::default(),
        };

        Ok(Self {
            tuning,
            root,
            quality,
            variant,
            string_group,
            fret_limit,
            handedness,
            layout: raw.layout.unwrap_or_default(),
            display_group_start: raw.display_group_start.unwrap_or(0),
        })
    }

    /// The engine request described by this config.
    pub fn request(&self) -> ShapeRequest<'_> {
        ShapeRequest::new(
            self.root,
            self.quality,
            &self.tuning,
            self.string_group,
            self.fret_limit,
        )
        .with_variant(self.variant.clone())
        .with_display_group_start(self.display_group_start)
    }
}

/// Look up a root pitch by name, reporting unknown names.
pub fn parse_root(name: &str) -> Result<PitchClass, ShapeError> {
    PitchClass::from_name(name.trim()).ok_or_else(|| ShapeError::UnknownPitch(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = DiagramConfig::from_yaml("root: G\nquality: Major\n").unwrap();
        assert_eq!(config.tuning, Tuning::standard());
        assert_eq!(config.root, PitchClass::new(10));
        assert_eq!(config.variant, VariantFilter::All);
        assert_eq!(config.string_group, StringGroup::contiguous(3, 3).unwrap());
        assert_eq!(config.fret_limit, DEFAULT_FRET_LIMIT);
        assert_eq!(config.handedness, Handedness::Right);
        assert_eq!(config.layout, Layout::default());
        assert_eq!(config.display_group_start, 0);
    }

    #[test]
    fn test_full_config() {
        let source = r#"
tuning: D A D G B E
root: 3
quality: m7
variant: 1st inversion
strings: [1, 2, 3, 4]
fret-limit: 15
handedness: left
display-group-start: 4
layout:
  string-spacing: 24
"#;
        let config = DiagramConfig::from_yaml(source).unwrap();
        assert_eq!(config.tuning, Tuning::preset("Drop D").unwrap());
        assert_eq!(config.root, PitchClass::new(3));
        assert_eq!(config.quality, Quality::Minor7);
        assert_eq!(config.variant, VariantFilter::Named("1st inversion".to_string()));
        assert_eq!(config.string_group, StringGroup::contiguous(1, 4).unwrap());
        assert_eq!(config.fret_limit, 15);
        assert_eq!(config.handedness, Handedness::Left);
        assert_eq!(config.display_group_start, 4);
        assert_eq!(config.layout.string_spacing, 24.0);
        assert_eq!(config.layout.fret_spacing, Layout::default().fret_spacing);

        let request = config.request();
        assert_eq!(request.display_group_start, 4);
        assert_eq!(request.fret_limit, 15);
    }

    #[test]
    fn test_tuning_as_offsets() {
        let config =
            DiagramConfig::from_yaml("tuning: [5, 0, 5, 10, 0, 5]\nroot: D\nquality: Sus4\n")
                .unwrap();
        assert_eq!(config.tuning, Tuning::preset("DADGAD").unwrap());
    }

    #[test]
    fn test_input_errors() {
        assert_eq!(
            DiagramConfig::from_yaml("root: H\nquality: Major\n"),
            Err(ShapeError::UnknownPitch("H".to_string()))
        );
        assert_eq!(
            DiagramConfig::from_yaml("root: C\nquality: Sus9\n"),
            Err(ShapeError::UnknownQuality("Sus9".to_string()))
        );
        assert!(matches!(
            DiagramConfig::from_yaml("root: C\nquality: Major\ntuning: [7, 0, 5]\n"),
            Err(ShapeError::MalformedTuning(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("root: C\nquality: Major\nstrings: 4-6\n"),
            Err(ShapeError::InvalidStringGroup(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("root: C\nquality: Major\nfret-limit: -1\n"),
            Err(ShapeError::Config(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("quality: Major\n"),
            Err(ShapeError::Config(_))
        ));
        assert!(matches!(
            DiagramConfig::from_yaml("root: C\nquality: Major\ncapo: 2\n"),
            Err(ShapeError::Config(_))
        ));
        assert_eq!(
            DiagramConfig::from_yaml("root: 12\nquality: Major\n"),
            Err(ShapeError::UnknownPitch("12".to_string()))
        );
    }
}
