//! Segment-by-segment resource ID parser.
//!
//! # Rules
//! - One leading and one trailing `/` are tolerated
//! - Static segments match exactly, or ignoring ASCII case when parsing insensitively
//! - Resource provider namespaces always match ignoring ASCII case
//! - Static, provider and constant values are stored in their canonical spelling
//! - Names (subscription, resource group, user specified) must be non-empty and are kept verbatim
//! - A leading scope segment takes every component before the fixed suffix

use std::collections::HashMap;

use crate::resourceids::error::ParseError;
use crate::resourceids::segment::{render_example, Segment, SegmentKind};

/// The values captured for each segment of a successfully parsed ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult {
    id_type: &'static str,
    input: String,
    expected: String,
    values: HashMap<&'static str, String>,
}

impl ParseResult {
    /// Value captured for the named segment.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value captured for the named segment, or a `MissingSegment` error.
    pub fn required(&self, name: &'static str) -> Result<&str, ParseError> {
        self.get(name).ok_or_else(|| ParseError::MissingSegment {
            id_type: self.id_type,
            input: self.input.clone(),
            segment: name,
            expected: self.expected.clone(),
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parser for one ID type.
#[derive(Debug, Clone)]
pub struct Parser {
    id_type: &'static str,
    segments: Vec<Segment>,
}

impl Parser {
    pub fn new(id_type: &'static str, segments: Vec<Segment>) -> Self {
        Self { id_type, segments }
    }

    /// Parse `input` into per-segment values.
    pub fn parse(&self, input: &str, insensitively: bool) -> Result<ParseResult, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Empty {
                id_type: self.id_type,
            });
        }

        let trimmed = input.strip_prefix('/').unwrap_or(input);
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let components: Vec<&str> = trimmed.split('/').collect();

        let mut values = HashMap::with_capacity(self.segments.len());

        let (segments, components) = match self.segments.split_first() {
            Some((first, rest)) if first.kind == SegmentKind::Scope => {
                let split = self.scope_split(rest, &components, insensitively);
                let scope = components[..split].join("/");
                if split == 0 || scope.is_empty() {
                    return Err(self.missing(input, first));
                }
                values.insert(first.name, format!("/{}", scope));
                (rest, &components[split..])
            }
            _ => (self.segments.as_slice(), components.as_slice()),
        };

        for (i, segment) in segments.iter().enumerate() {
            let raw = match components.get(i) {
                Some(raw) if !raw.is_empty() => *raw,
                _ => return Err(self.missing(input, segment)),
            };
            let value = self.match_segment(input, segment, raw, insensitively)?;
            values.insert(segment.name, value);
        }

        if components.len() > segments.len() {
            return Err(ParseError::UnexpectedSegments {
                id_type: self.id_type,
                input: input.to_string(),
                extra: components[segments.len()..].join("/"),
                expected: self.expected(),
            });
        }

        Ok(ParseResult {
            id_type: self.id_type,
            input: input.to_string(),
            expected: self.expected(),
            values,
        })
    }

    /// Rendered example of a valid ID.
    pub fn expected(&self) -> String {
        render_example(&self.segments)
    }

    /// Index of the first component belonging to the fixed suffix that follows a scope.
    fn scope_split(&self, suffix: &[Segment], components: &[&str], insensitively: bool) -> usize {
        let anchor = match suffix.first().and_then(Segment::fixed_value) {
            Some(anchor) => anchor,
            None => return components.len().saturating_sub(suffix.len()),
        };
        let matches_anchor =
            |c: &str| c == anchor || (insensitively && c.eq_ignore_ascii_case(anchor));

        if components.len() > suffix.len() {
            let forced = components.len() - suffix.len();
            if matches_anchor(components[forced]) {
                return forced;
            }
        }

        // The suffix is incomplete: anchor on its last keyword so the missing
        // segment is reported instead of a mismatch inside the scope.
        components
            .iter()
            .rposition(|c| matches_anchor(c))
            .filter(|&p| p > 0)
            .unwrap_or_else(|| components.len().saturating_sub(suffix.len()))
    }

    fn match_segment(
        &self,
        input: &str,
        segment: &Segment,
        raw: &str,
        insensitively: bool,
    ) -> Result<String, ParseError> {
        let matched = match segment.kind {
            SegmentKind::Static(expected) => {
                let ok = raw == expected || (insensitively && raw.eq_ignore_ascii_case(expected));
                ok.then(|| expected.to_string())
            }
            SegmentKind::ResourceProvider(expected) => raw
                .eq_ignore_ascii_case(expected)
                .then(|| expected.to_string()),
            SegmentKind::Constant(possible) => possible
                .iter()
                .find(|v| **v == raw || (insensitively && v.eq_ignore_ascii_case(raw)))
                .map(|v| v.to_string()),
            SegmentKind::SubscriptionId
            | SegmentKind::ResourceGroup
            | SegmentKind::UserSpecified => Some(raw.to_string()),
            SegmentKind::Scope => Some(format!("/{}", raw)),
        };

        matched.ok_or_else(|| ParseError::InvalidSegment {
            id_type: self.id_type,
            input: input.to_string(),
            segment: segment.name,
            value: raw.to_string(),
            requirement: segment.requirement(),
            expected: self.expected(),
        })
    }

    fn missing(&self, input: &str, segment: &Segment) -> ParseError {
        ParseError::MissingSegment {
            id_type: self.id_type,
            input: input.to_string(),
            segment: segment.name,
            expected: self.expected(),
        }
    }
}

/// Format an ID from its segments, looking up non-fixed values by segment name.
pub fn format_id<'a, F>(segments: &[Segment], value_of: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let parts: Vec<&str> = segments
        .iter()
        .map(|segment| match segment.kind {
            SegmentKind::Static(value) | SegmentKind::ResourceProvider(value) => value,
            SegmentKind::Scope => value_of(segment.name).unwrap_or_default().trim_matches('/'),
            _ => value_of(segment.name).unwrap_or_default(),
        })
        .collect();
    format!("/{}", parts.join("/"))
}
