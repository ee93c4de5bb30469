//! Helpers for discriminated unions.

use serde::de::{self, DeserializeOwned};
use serde::ser::{self, Serialize, Serializer};
use serde_json::Value;

/// The discriminator value of `payload`, if present and a string.
pub fn discriminator<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload.get(field)?.as_str()
}

/// Decode a known variant from its payload.
pub fn decode_variant<T: DeserializeOwned, E: de::Error>(payload: Value) -> Result<T, E> {
    serde_json::from_value(payload).map_err(E::custom)
}

/// Serialize a known variant, writing its discriminator alongside its fields.
pub fn encode_variant<T: Serialize, S: Serializer>(
    inner: &T,
    field: &str,
    tag: &str,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut payload = serde_json::to_value(inner).map_err(ser::Error::custom)?;
    if let Value::Object(map) = &mut payload {
        map.insert(field.to_string(), Value::String(tag.to_string()));
    }
    payload.serialize(serializer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_discriminator_lookup() {
        let payload = json!({"objectType": "Foo", "n": 1});
        assert_eq!(discriminator(&payload, "objectType"), Some("Foo"));
        assert_eq!(discriminator(&payload, "n"), None);
        assert_eq!(discriminator(&payload, "missing"), None);
    }

    #[test]
    fn test_encode_adds_tag() {
        #[derive(serde::Serialize)]
        struct Inner {
            n: u32,
        }
        let value = encode_variant(&Inner { n: 2 }, "kind", "Two", serde_json::value::Serializer)
            .unwrap();
        assert_eq!(value, json!({"n": 2, "kind": "Two"}));
    }
}
