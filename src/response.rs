//! Response unwrapping shared by every request path.
//!
//! HTTP 4xx/5xx answers become [`ApiError`] with the body text left untouched. Success
//! bodies are decoded as JSON; an empty or whitespace-only body decodes as `null` so it
//! cannot be mistaken for a malformed payload.

// crates.io
use reqwest::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	error::{ApiError, DecodeError, TransportError},
	stream::JsonStream,
};

/// Successful outcome of an API call.
#[derive(Debug)]
pub enum Reply {
	/// Buffered and decoded body.
	Json(Value),
	/// Body left on the wire, decoded line by line.
	Stream(JsonStream),
}
impl Reply {
	/// Returns `true` for streamed replies.
	pub fn is_stream(&self) -> bool {
		matches!(self, Self::Stream(_))
	}

	/// Borrows the decoded body of a buffered reply.
	pub fn json(&self) -> Option<&Value> {
		match self {
			Self::Json(value) => Some(value),
			Self::Stream(_) => None,
		}
	}

	/// Resolves to a single JSON value; streams are drained into an array.
	pub async fn into_json(self) -> Result<Value> {
		match self {
			Self::Json(value) => Ok(value),
			Self::Stream(stream) => stream.collect().await.map(Value::Array),
		}
	}
}

/// Turns a raw response into a [`Reply`] or an error.
pub(crate) async fn read_reply(response: Response, stream: bool) -> Result<Reply> {
	let status = response.status();

	if status.is_client_error() || status.is_server_error() {
		let body = response.text().await.map_err(TransportError::from)?;

		return Err(ApiError::new(status.as_u16(), body).into());
	}
	if stream {
		return Ok(Reply::Stream(JsonStream::new(response)));
	}

	let bytes = response.bytes().await.map_err(TransportError::from)?;

	decode_json(&bytes, Some(status.as_u16())).map(Reply::Json)
}

/// Decodes a success body, treating a blank body as JSON `null`.
pub(crate) fn decode_json<T>(bytes: &[u8], status: Option<u16>) -> Result<T>
where
	T: DeserializeOwned,
{
	let decoded = if bytes.trim_ascii().is_empty() {
		serde_path_to_error::deserialize(Value::Null)
	} else {
		serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_slice(bytes))
	};

	decoded.map_err(|source| DecodeError::new(source, status).into())
}

/// Deserializes an already decoded value into `T`.
pub(crate) fn decode_value<T>(value: Value) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_path_to_error::deserialize(value).map_err(|source| DecodeError::new(source, None).into())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[derive(Debug, Deserialize)]
	struct Envelope {
		data: User,
	}

	#[derive(Debug, Deserialize)]
	struct User {
		id: String,
	}

	#[test]
	fn blank_body_decodes_as_null() {
		let value: Value = decode_json(b"  \r\n", Some(204)).expect("Blank bodies should decode.");

		assert!(value.is_null());
	}

	#[test]
	fn malformed_body_reports_status() {
		let err = decode_json::<Value>(b"<html>oops</html>", Some(200))
			.expect_err("HTML should not decode as JSON.");

		assert!(matches!(err, Error::Decode(DecodeError { status: Some(200), .. })));
	}

	#[test]
	fn typed_decode_reports_json_path() {
		let err = decode_json::<Envelope>(br#"{"data":{"id":12}}"#, Some(200))
			.expect_err("Numeric ids should not decode into strings.");
		match err {
			Error::Decode(decode) => assert_eq!(decode.source.path().to_string(), "data.id"),
			other => panic!("Unexpected error variant: {other:?}."),
		}

		let envelope: Envelope =
			decode_value(serde_json::json!({ "data": { "id": "12" } })).expect("Value should decode.");

		assert_eq!(envelope.data.id, "12");
	}

	#[tokio::test]
	async fn buffered_reply_resolves_to_its_value() {
		let reply = Reply::Json(serde_json::json!({ "data": [] }));

		assert!(!reply.is_stream());
		assert_eq!(reply.json().map(|v| v["data"].is_array()), Some(true));
		assert_eq!(
			reply.into_json().await.expect("Buffered replies resolve immediately."),
			serde_json::json!({ "data": [] })
		);
	}
}
