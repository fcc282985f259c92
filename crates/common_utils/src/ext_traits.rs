//!
//! This module holds traits for extending functionalities for existing
//! datatypes & inbuilt datatypes.
//!

use error_stack::ResultExt;
use masking::{ExposeInterface, Secret, Strategy};
use serde::{Deserialize, Serialize};

use crate::errors::{self, CustomResult};

/// Encode interface
/// An interface for performing type conversions and serialization
pub trait Encode<'e>
where
    Self: 'e + std::fmt::Debug,
{
    /// Serialize `Self` into a JSON `String` using `serde::Serialize`
    fn encode_to_string_of_json(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize;

    /// Serialize `Self` into a `serde_json::Value`
    fn encode_to_value(&'e self) -> CustomResult<serde_json::Value, errors::ParsingError>
    where
        Self: Serialize;

    /// Serialize `Self` into a flat `application/x-www-form-urlencoded` string
    /// using `serde_urlencoded`
    fn url_encode(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize;

    /// Serialize `Self` into an `application/x-www-form-urlencoded` string,
    /// recursively expanding nested mappings into bracketed keys
    /// (`source[card][card_number]=...`) and arrays into repeated `key[]=v`
    /// pairs. Blank values are omitted.
    fn url_encode_nested(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize;
}

impl<'e, A> Encode<'e> for A
where
    Self: 'e + std::fmt::Debug,
{
    fn encode_to_string_of_json(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize,
    {
        serde_json::to_string(self)
            .change_context(errors::ParsingError::EncodeError("json"))
            .attach_printable_lazy(|| format!("Unable to convert {self:?} to a request"))
    }

    fn encode_to_value(&'e self) -> CustomResult<serde_json::Value, errors::ParsingError>
    where
        Self: Serialize,
    {
        serde_json::to_value(self)
            .change_context(errors::ParsingError::EncodeError("json-value"))
            .attach_printable_lazy(|| format!("Unable to convert {self:?} to a value"))
    }

    fn url_encode(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize,
    {
        serde_urlencoded::to_string(self)
            .change_context(errors::ParsingError::EncodeError("url-encoded"))
            .attach_printable_lazy(|| format!("Unable to convert {self:?} to a request"))
    }

    fn url_encode_nested(&'e self) -> CustomResult<String, errors::ParsingError>
    where
        Self: Serialize,
    {
        let value = self.encode_to_value()?;
        Ok(url_encode_nested_value(&value))
    }
}

/// Form-url encode a JSON value, expanding nested objects into bracketed keys
/// and arrays into repeated `key[]=value` pairs, omitting blank values.
pub fn url_encode_nested_value(value: &serde_json::Value) -> String {
    let mut pairs = Vec::new();
    collect_form_pairs(None, value, &mut pairs);
    pairs.join("&")
}

fn collect_form_pairs(prefix: Option<&str>, value: &serde_json::Value, out: &mut Vec<String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, item) in map {
                let key = match prefix {
                    Some(parent) => format!("{parent}[{key}]"),
                    None => key.clone(),
                };
                collect_form_pairs(Some(&key), item, out);
            }
        }
        serde_json::Value::Array(items) => {
            if let Some(parent) = prefix {
                let key = format!("{parent}[]");
                for item in items {
                    collect_form_pairs(Some(&key), item, out);
                }
            }
        }
        scalar => {
            if let Some(key) = prefix {
                push_form_scalar(key, scalar, out);
            }
        }
    }
}

fn push_form_scalar(key: &str, value: &serde_json::Value, out: &mut Vec<String>) {
    let rendered = match value {
        // blank values are omitted, `false` is kept
        serde_json::Value::Null => return,
        serde_json::Value::String(inner) if inner.is_empty() => return,
        serde_json::Value::String(inner) => inner.clone(),
        other => other.to_string(),
    };
    let escaped: String = url::form_urlencoded::byte_serialize(rendered.as_bytes()).collect();
    out.push(format!("{key}={escaped}"));
}

/// Extending functionalities of `bytes::Bytes`
pub trait BytesExt {
    /// Convert `bytes::Bytes` into type `<T>` using `serde::Deserialize`
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl BytesExt for bytes::Bytes {
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        use bytes::Buf;

        serde_json::from_slice::<T>(self.chunk())
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| {
                let variable_type = std::any::type_name::<T>();
                format!("Unable to parse {variable_type} from bytes")
            })
    }
}

/// Extending functionalities of `[u8]` for performing parsing
pub trait ByteSliceExt {
    /// Convert `[u8]` into type `<T>` by using `serde::Deserialize`
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>;
}

impl ByteSliceExt for [u8] {
    fn parse_struct<'de, T>(
        &'de self,
        type_name: &'static str,
    ) -> CustomResult<T, errors::ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_slice(self)
            .change_context(errors::ParsingError::StructParseFailure(type_name))
    }
}

/// Extending functionalities of `serde_json::Value` for performing parsing
pub trait ValueExt {
    /// Convert `serde_json::Value` into type `<T>` by using `serde::Deserialize`
    fn parse_value<T>(self, type_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: serde::de::DeserializeOwned;
}

impl ValueExt for serde_json::Value {
    fn parse_value<T>(self, type_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: serde::de::DeserializeOwned,
    {
        let debug = format!("Unable to parse {type_name} from serde_json::Value: {self:?}");
        serde_json::from_value::<T>(self)
            .change_context(errors::ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| debug)
    }
}

impl<MaskingStrategy> ValueExt for Secret<serde_json::Value, MaskingStrategy>
where
    MaskingStrategy: Strategy<serde_json::Value>,
{
    fn parse_value<T>(self, type_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: serde::de::DeserializeOwned,
    {
        self.expose().parse_value(type_name)
    }
}

/// Extending functionalities of `String` for performing parsing
pub trait StringExt {
    /// Convert `String` into type `<T>` (which being an `enum`)
    fn parse_enum<T>(self, enum_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: std::str::FromStr,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static;
}

impl StringExt for String {
    fn parse_enum<T>(self, enum_name: &'static str) -> CustomResult<T, errors::ParsingError>
    where
        T: std::str::FromStr,
        <T as std::str::FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        T::from_str(&self)
            .change_context(errors::ParsingError::StructParseFailure(enum_name))
            .attach_printable_lazy(|| format!("Invalid enum variant {self:?} for enum {enum_name}"))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn nested_form_encoding_expands_bracketed_keys() {
        let body = json!({
            "payment_type": "credit",
            "source": {
                "amount": 100,
                "card": {
                    "card_number": "4111111111111111",
                    "card_holder_name": ""
                }
            }
        });

        let encoded = url_encode_nested_value(&body);
        assert!(encoded.contains("source[card][card_number]=4111111111111111"));
        assert!(encoded.contains("source[amount]=100"));
        assert!(encoded.contains("payment_type=credit"));
        // blank values are omitted
        assert!(!encoded.contains("card_holder_name"));
    }

    #[test]
    fn nested_form_encoding_renders_arrays_as_repeated_keys() {
        let body = json!({ "items": ["a", "b"], "empty": null, "kept": false });

        let encoded = url_encode_nested_value(&body);
        assert!(encoded.contains("items[]=a"));
        assert!(encoded.contains("items[]=b"));
        assert!(encoded.contains("kept=false"));
        assert!(!encoded.contains("empty"));
    }

    #[test]
    fn nested_form_encoding_escapes_values() {
        let body = json!({ "description": "caf & co" });
        assert_eq!(
            url_encode_nested_value(&body),
            "description=caf+%26+co"
        );
    }
}
