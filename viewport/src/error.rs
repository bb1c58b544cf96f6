use thiserror::Error;

use crate::anchor::Field;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ViewportError {
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: ureq::Error },

    #[error("{url} responded with status {status}")]
    Status { url: String, status: u16 },

    #[error("{url} served non-text content type {content_type:?}")]
    ContentType { url: String, content_type: String },

    #[error("could not read body of {url}: {source}")]
    Body { url: String, source: ureq::Error },
}

/// An anchor pair could not be located in the source document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("start anchor {anchor:?} for {field} not found")]
    StartAnchorMissing { field: Field, anchor: &'static str },

    #[error("end anchor {anchor:?} for {field} not found")]
    EndAnchorMissing { field: Field, anchor: &'static str },

    #[error("end anchor for {field} at byte {end} precedes start anchor at byte {start}")]
    AnchorsOutOfOrder { field: Field, start: usize, end: usize },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed {field} literal {fragment:?}: {reason}")]
    Malformed {
        field: Field,
        fragment: String,
        reason: String,
    },

    #[error("{field} literal {fragment:?} has {found} values, expected {expected}")]
    Arity {
        field: Field,
        fragment: String,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} latitude {value} outside [-90, 90]")]
    Latitude { field: Field, value: f64 },

    #[error("{field} longitude {value} outside [-180, 180]")]
    Longitude { field: Field, value: f64 },

    #[error("zoom {value} outside [{min}, {max}]")]
    Zoom { value: i64, min: u8, max: u8 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}
