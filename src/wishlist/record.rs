//! Wish record and its request payload

use std::fmt;

use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

/// A single wish entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wish {
    pub id: u64,
    pub description: String,
}

/// Record-shaped request body for create and replace.
///
/// Decoding is lenient in the same places a zero-value decoder is:
/// - field names match case-insensitively (`Description`, `ID`)
/// - missing or `null` fields keep their zero value
/// - unknown fields are skipped
/// - a `null` body is an all-zero payload
/// - only the first JSON value in the body is read
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WishPayload {
    pub id: u64,
    pub description: String,
}

impl WishPayload {
    /// Decode a payload from raw body bytes
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        let first = serde_json::Deserializer::from_slice(bytes)
            .into_iter::<Option<WishPayload>>()
            .next();

        match first {
            Some(payload) => Ok(payload?.unwrap_or_default()),
            None => Err(de::Error::custom("EOF while parsing a value")),
        }
    }
}

enum Field {
    Id,
    Description,
    Other,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a field name")
            }

            fn visit_str<E: de::Error>(self, key: &str) -> Result<Field, E> {
                Ok(if key.eq_ignore_ascii_case("id") {
                    Field::Id
                } else if key.eq_ignore_ascii_case("description") {
                    Field::Description
                } else {
                    Field::Other
                })
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = WishPayload;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a wish object")
    }

    // Keys are applied in body order, so a repeated field keeps its last value
    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WishPayload, A::Error> {
        let mut payload = WishPayload::default();

        while let Some(field) = map.next_key::<Field>()? {
            match field {
                Field::Id => {
                    if let Some(id) = map.next_value::<Option<u64>>()? {
                        payload.id = id;
                    }
                }
                Field::Description => {
                    if let Some(description) = map.next_value::<Option<String>>()? {
                        payload.description = description;
                    }
                }
                Field::Other => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(payload)
    }
}

impl<'de> Deserialize<'de> for WishPayload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(id: u64, description: &str) -> WishPayload {
        WishPayload {
            id,
            description: description.to_string(),
        }
    }

    #[test]
    fn test_wish_serialization() {
        let wish = Wish {
            id: 3,
            description: "Pony".to_string(),
        };
        let json = serde_json::to_value(&wish).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["description"], "Pony");
    }

    #[test]
    fn test_payload_defaults() {
        let decoded = WishPayload::from_slice(br#"{"description":"Bike"}"#).unwrap();
        assert_eq!(decoded, payload(0, "Bike"));

        let empty = WishPayload::from_slice(b"{}").unwrap();
        assert_eq!(empty, WishPayload::default());
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let decoded =
            WishPayload::from_slice(br#"{"id":4,"description":"Kite","colour":{"r":1}}"#).unwrap();
        assert_eq!(decoded, payload(4, "Kite"));
    }

    #[test]
    fn test_payload_field_names_ignore_case() {
        let decoded = WishPayload::from_slice(br#"{"ID":2,"Description":"Bike"}"#).unwrap();
        assert_eq!(decoded, payload(2, "Bike"));

        let shouted = WishPayload::from_slice(br#"{"Id":5,"DESCRIPTION":"Drum"}"#).unwrap();
        assert_eq!(shouted, payload(5, "Drum"));
    }

    #[test]
    fn test_payload_repeated_field_last_wins() {
        let decoded =
            WishPayload::from_slice(br#"{"description":"first","Description":"second"}"#).unwrap();
        assert_eq!(decoded.description, "second");

        let decoded =
            WishPayload::from_slice(br#"{"Description":"first","description":"second"}"#).unwrap();
        assert_eq!(decoded.description, "second");
    }

    #[test]
    fn test_payload_null_body_and_fields() {
        assert_eq!(WishPayload::from_slice(b"null").unwrap(), WishPayload::default());

        let decoded = WishPayload::from_slice(br#"{"id":null,"description":"Sled"}"#).unwrap();
        assert_eq!(decoded, payload(0, "Sled"));
    }

    #[test]
    fn test_payload_reads_first_value_only() {
        let decoded = WishPayload::from_slice(br#"{"description":"Bike"} trailing"#).unwrap();
        assert_eq!(decoded, payload(0, "Bike"));

        let decoded =
            WishPayload::from_slice(br#"{"description":"Bike"}{"description":"Kite"}"#).unwrap();
        assert_eq!(decoded, payload(0, "Bike"));
    }

    #[test]
    fn test_payload_rejects_malformed() {
        assert!(WishPayload::from_slice(b"").is_err());
        assert!(WishPayload::from_slice(b"   ").is_err());
        assert!(WishPayload::from_slice(b"not json").is_err());
        assert!(WishPayload::from_slice(b"[1,2]").is_err());
        assert!(WishPayload::from_slice(b"5").is_err());
        assert!(WishPayload::from_slice(br#"{"id":"one"}"#).is_err());
        assert!(WishPayload::from_slice(br#"{"id":-1}"#).is_err());
        assert!(WishPayload::from_slice(br#"{"description":"#).is_err());
    }
}
