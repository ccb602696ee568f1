//! # Error Types
//!
//! This module defines the error type for shape resolution.
//!
//! Every variant describes a caller-side input problem and carries enough
//! detail to build a user-facing message. Catalog data problems are *not*
//! errors: they are reported as diagnostics next to a (possibly partial)
//! result, see [`crate::CatalogDiagnostic`] and [`crate::ShapeDiagnostic`].
//!
//! ## Usage
//! ```rust
//! use fretshape::{resolve_by_name, ShapeError};
//!
//! match resolve_by_name("C", "Sus9", "all", "Standard", "0-2", 12) {
//!     Ok(resolution) => println!("{} shapes", resolution.instances.len()),
//!     Err(ShapeError::UnknownQuality(label)) => eprintln!("No such quality: {}", label),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

use crate::quality::Quality;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A pitch name matched none of the canonical spellings.
    ///
    /// # Example
    /// ```
    /// # use fretshape::ShapeError;
    /// let err = ShapeError::UnknownPitch("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown pitch name: H");
    /// ```
    #[error("Unknown pitch name: {0}")]
    UnknownPitch(String),

    /// A chord quality label is not registered in the interval table.
    #[error("Unknown quality: {0}")]
    UnknownQuality(String),

    /// A variant filter names a voicing the catalog has no entry for.
    ///
    /// # Example
    /// ```
    /// # use fretshape::{Quality, ShapeError};
    /// let err = ShapeError::UnknownVariant {
    ///     quality: Quality::Major,
    ///     variant: "4th inversion".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Unknown variant '4th inversion' for Major");
    /// ```
    #[error("Unknown variant '{variant}' for {quality}")]
    UnknownVariant { quality: Quality, variant: String },

    /// The tuning is not six semitone offsets in 0-11.
    #[error("Malformed tuning: {0}")]
    MalformedTuning(String),

    /// A string group is empty or references a string that does not exist.
    #[error("Invalid string group: {0}")]
    InvalidStringGroup(String),

    /// The request document could not be read as YAML or has an invalid field.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The shape catalog document itself could not be parsed.
    #[error("Invalid shape catalog: {0}")]
    Catalog(String),
}
