//! Resource Graph query facets.
//!
//! A facet is either a result or an error, told apart by `resultType`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::client::ErrorDetail;
use crate::models::discriminator::{decode_variant, discriminator, encode_variant};

const RESULT_TYPE: &str = "resultType";

/// A successfully evaluated facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetResult {
    pub expression: String,
    pub total_records: i64,
    pub count: i64,
    #[serde(default)]
    pub data: Value,
}

/// A facet whose evaluation failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetError {
    pub expression: String,
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
}

/// A facet of a Resource Graph query response.
#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    Result(FacetResult),
    Error(FacetError),
    /// A facet with an unrecognised `resultType`, kept verbatim.
    Raw(Value),
}

impl Facet {
    pub fn expression(&self) -> Option<&str> {
        match self {
            Facet::Result(r) => Some(&r.expression),
            Facet::Error(e) => Some(&e.expression),
            Facet::Raw(v) => v.get("expression").and_then(Value::as_str),
        }
    }

    pub fn result_type(&self) -> Option<&str> {
        match self {
            Facet::Result(_) => Some("FacetResult"),
            Facet::Error(_) => Some("FacetError"),
            Facet::Raw(v) => discriminator(v, RESULT_TYPE),
        }
    }
}

impl<'de> Deserialize<'de> for Facet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let payload = Value::deserialize(deserializer)?;
        match discriminator(&payload, RESULT_TYPE) {
            Some(t) if t.eq_ignore_ascii_case("FacetResult") => {
                decode_variant(payload).map(Facet::Result)
            }
            Some(t) if t.eq_ignore_ascii_case("FacetError") => {
                decode_variant(payload).map(Facet::Error)
            }
            _ => Ok(Facet::Raw(payload)),
        }
    }
}

impl Serialize for Facet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Facet::Result(r) => encode_variant(r, RESULT_TYPE, "FacetResult", serializer),
            Facet::Error(e) => encode_variant(e, RESULT_TYPE, "FacetError", serializer),
            Facet::Raw(v) => v.serialize(serializer),
        }
    }
}
