//! Resource ID parsing and formatting.
//!
//! # Data Flow
//! ```text
//! user input / server response
//!     → parser.rs (split, match each typed segment)
//!     → ParseResult (segment name → value)
//!     → ResourceId::from_parse_result (typed ID struct)
//!     → ResourceId::id (canonical path, used to build request URLs)
//! ```
//!
//! # Design Decisions
//! - IDs are immutable values; they are rebuilt rather than edited
//! - `parse` validates user input; `parse_insensitively` normalizes IDs returned by ARM
//! - `id(parse(s))` is the canonical spelling of `s`
//! - ID types are declared with [`resource_id!`](crate::resource_id)

pub mod error;
pub mod parser;
pub mod segment;

mod macros;

pub use error::{ParseError, ValidationError};
pub use parser::{format_id, ParseResult, Parser};
pub use segment::{Segment, SegmentKind};

/// A typed Azure resource ID.
pub trait ResourceId: Sized {
    /// Human-readable name of the ID type, e.g. `Subnet`.
    const ID_TYPE: &'static str;

    /// The ordered segments making up this ID type.
    fn segments() -> Vec<Segment>;

    /// Build the typed ID from parsed segment values.
    fn from_parse_result(result: &ParseResult) -> Result<Self, ParseError>;

    /// Value of a non-fixed segment by name.
    fn segment_value(&self, name: &str) -> Option<&str>;

    /// Parse user input, requiring the canonical casing of keyword segments.
    fn parse(input: &str) -> Result<Self, ParseError> {
        let result = Parser::new(Self::ID_TYPE, Self::segments()).parse(input, false)?;
        Self::from_parse_result(&result)
    }

    /// Parse an ID whose keyword segments may use any casing, e.g. one returned by the API.
    fn parse_insensitively(input: &str) -> Result<Self, ParseError> {
        let result = Parser::new(Self::ID_TYPE, Self::segments()).parse(input, true)?;
        Self::from_parse_result(&result)
    }

    /// The canonical string form of this ID.
    fn id(&self) -> String {
        format_id(&Self::segments(), |name| self.segment_value(name))
    }
}

/// Check that a schema field holds a valid ID of type `T`.
pub fn validate<T: ResourceId>(input: &str, key: &str) -> Result<(), ValidationError> {
    T::parse(input).map(|_| ()).map_err(|source| ValidationError {
        key: key.to_string(),
        source,
    })
}
