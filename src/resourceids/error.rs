//! Resource ID parse errors.

use thiserror::Error;

/// A resource ID could not be parsed.
///
/// Every variant except `Empty` names the first segment that was missing or
/// malformed, and carries a rendered example of the expected format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parsing {id_type} ID: the input was empty")]
    Empty { id_type: &'static str },

    #[error(
        "parsing {input:?} as a {id_type} ID: the segment {segment:?} was not found\n\n\
         Expected a {id_type} ID that matched:\n\n> {expected}"
    )]
    MissingSegment {
        id_type: &'static str,
        input: String,
        segment: &'static str,
        expected: String,
    },

    #[error(
        "parsing {input:?} as a {id_type} ID: the segment {segment:?} has the value {value:?} \
         but {requirement}\n\nExpected a {id_type} ID that matched:\n\n> {expected}"
    )]
    InvalidSegment {
        id_type: &'static str,
        input: String,
        segment: &'static str,
        value: String,
        requirement: String,
        expected: String,
    },

    #[error(
        "parsing {input:?} as a {id_type} ID: found unexpected trailing segments {extra:?}\n\n\
         Expected a {id_type} ID that matched:\n\n> {expected}"
    )]
    UnexpectedSegments {
        id_type: &'static str,
        input: String,
        extra: String,
        expected: String,
    },
}

impl ParseError {
    /// The segment the error is about, if any.
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingSegment { segment, .. }
            | ParseError::InvalidSegment { segment, .. } => Some(*segment),
            _ => None,
        }
    }

    pub fn id_type(&self) -> &'static str {
        match self {
            ParseError::Empty { id_type }
            | ParseError::MissingSegment { id_type, .. }
            | ParseError::InvalidSegment { id_type, .. }
            | ParseError::UnexpectedSegments { id_type, .. } => *id_type,
        }
    }
}

/// A schema field did not hold a valid resource ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{key}: {source}")]
pub struct ValidationError {
    pub key: String,
    #[source]
    pub source: ParseError,
}
