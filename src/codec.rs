//! Payload codec: request bodies to bytes, response bytes to typed results.
//!
//! Selection is driven only by the declared [`ContentType`] of each side of a
//! call, never by sniffing the bytes. Payload types use Rust's `snake_case`
//! field names, which is also the wire convention, so derived serde impls need
//! no renaming.

use crate::{Error, ErrorContext, Result};
use bytes::Bytes;
use serde::de::value::SeqDeserializer;
use serde::de::{DeserializeOwned, Deserializer, Visitor};
use serde::forward_to_deserialize_any;
use serde::Serialize;

/// How a request or response payload is represented on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// A JSON document.
    Json,
    /// Raw bytes (audio, images), passed through untouched.
    Binary,
}

impl ContentType {
    pub fn mime(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Binary => "application/octet-stream",
        }
    }
}

/// Request payload as supplied by a task wrapper.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(serde_json::Value),
    Binary(Bytes),
}

impl RequestBody {
    /// Serialize any payload struct into a JSON body.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        serde_json::to_value(value).map(RequestBody::Json).map_err(|e| {
            Error::configuration_with_context(
                format!("Request body is not serializable: {}", e),
                ErrorContext::new().with_source("payload_codec"),
            )
        })
    }

    pub fn binary(bytes: impl Into<Bytes>) -> Self {
        RequestBody::Binary(bytes.into())
    }

    pub fn content_type(&self) -> ContentType {
        match self {
            RequestBody::Json(_) => ContentType::Json,
            RequestBody::Binary(_) => ContentType::Binary,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary payload does not fit the requested type: {0}")]
    Binary(#[from] serde::de::value::Error),
}

/// Encode a request body into the bytes sent on the wire.
///
/// The body must agree with the declared content type.
pub fn encode(body: &RequestBody, declared: ContentType) -> Result<Bytes> {
    match (body, declared) {
        (RequestBody::Json(value), ContentType::Json) => serde_json::to_vec(value)
            .map(Bytes::from)
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to encode JSON body: {}", e),
                    ErrorContext::new().with_source("payload_codec"),
                )
            }),
        (RequestBody::Binary(bytes), ContentType::Binary) => Ok(bytes.clone()),
        (body, declared) => Err(Error::configuration_with_context(
            "Request body does not match the declared request content type",
            ErrorContext::new()
                .with_field_path("request_content_type")
                .with_details(format!(
                    "declared {:?}, body is {:?}",
                    declared,
                    body.content_type()
                ))
                .with_source("payload_codec"),
        )),
    }
}

/// Decode response bytes into `T` according to the declared content type.
///
/// Binary responses are handed to `T` as a byte buffer, so `bytes::Bytes`,
/// `Vec<u8>` and other byte containers get the exact sequence received.
/// Structured types fail with [`CodecError::Binary`].
pub fn decode<T: DeserializeOwned>(
    body: &Bytes,
    declared: ContentType,
) -> std::result::Result<T, CodecError> {
    match declared {
        ContentType::Json => Ok(serde_json::from_slice(body)?),
        ContentType::Binary => Ok(T::deserialize(BinaryDeserializer(&body[..]))?),
    }
}

/// Presents raw response bytes as a byte buffer or as a sequence of `u8`.
struct BinaryDeserializer<'a>(&'a [u8]);

impl<'de, 'a> Deserializer<'de> for BinaryDeserializer<'a> {
    type Error = serde::de::value::Error;

    fn deserialize_any<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> std::result::Result<V::Value, Self::Error> {
        visitor.visit_bytes(self.0)
    }

    fn deserialize_byte_buf<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> std::result::Result<V::Value, Self::Error> {
        visitor.visit_byte_buf(self.0.to_vec())
    }

    fn deserialize_seq<V: Visitor<'de>>(
        self,
        visitor: V,
    ) -> std::result::Result<V::Value, Self::Error> {
        visitor.visit_seq(SeqDeserializer::<_, Self::Error>::new(self.0.iter().copied()))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes option unit unit_struct newtype_struct tuple tuple_struct map
        struct enum identifier ignored_any
    }
}
