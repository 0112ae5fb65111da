//! Adapter-level error types shared by every request path.

// std
use std::path::PathBuf;
// self
use crate::_prelude::*;

/// Adapter-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical adapter error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// API answered with an HTTP client or server error.
	#[error(transparent)]
	Api(#[from] ApiError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) or a broken stream frame.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Success body could not be decoded as JSON.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// Media file could not be read from disk.
	#[error("Failed to read media file {}.", path.display())]
	MediaRead {
		/// Path handed to the upload call.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},
}

/// HTTP 4xx/5xx answer with the raw body preserved verbatim.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("API responded with HTTP {status}.")]
pub struct ApiError {
	/// HTTP status code.
	pub status: u16,
	/// Response body text, unchanged.
	pub body: String,
}
impl ApiError {
	/// Builds an error from a status code and the raw body.
	pub fn new(status: u16, body: impl Into<String>) -> Self {
		Self { status, body: body.into() }
	}

	/// Returns `true` for 4xx answers.
	pub fn is_client_error(&self) -> bool {
		(400..500).contains(&self.status)
	}

	/// Returns `true` for 5xx answers.
	pub fn is_server_error(&self) -> bool {
		(500..600).contains(&self.status)
	}

	/// Parses the body as JSON, if it is JSON.
	pub fn json(&self) -> Option<serde_json::Value> {
		serde_json::from_str(&self.body).ok()
	}
}

/// Configuration and validation failures raised by the adapter.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Endpoint or request URL cannot be parsed.
	#[error("URL `{url}` is invalid.")]
	InvalidUrl {
		/// Offending URL text.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// API version segment is empty.
	#[error("API version must not be empty.")]
	EmptyVersion,
	/// Credentials required by the chosen auth scheme are absent.
	#[error("No {scheme} credentials were configured.")]
	MissingCredentials {
		/// Auth scheme label.
		scheme: &'static str,
	},
	/// Credential mapping holds neither a bearer token nor a full OAuth 1.0a key set.
	#[error("Credentials must contain a bearer token or a complete OAuth 1.0a key set.")]
	IncompleteCredentials,
	/// A header value contains characters HTTP does not allow.
	#[error(transparent)]
	InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
	/// HMAC key could not be initialized.
	#[error("OAuth 1.0a signing key is invalid.")]
	InvalidSigningKey,
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a URL parse failure together with the offending text.
	pub fn invalid_url(url: impl Into<String>, source: url::ParseError) -> Self {
		Self::InvalidUrl { url: url.into(), source }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures: the network, or a stream that breaks line framing.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// A streamed line grew past the decoder limit without a newline.
	#[error("Streamed line exceeded {limit} bytes without a newline.")]
	LineTooLong {
		/// Maximum number of bytes buffered for one line.
		limit: usize,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// JSON decoding failures for success bodies and stream lines.
#[derive(Debug, ThisError)]
#[error("API returned malformed JSON.")]
pub struct DecodeError {
	/// Structured parsing failure, including the JSON path where it occurred.
	#[source]
	pub source: serde_path_to_error::Error<serde_json::Error>,
	/// HTTP status code, when available.
	pub status: Option<u16>,
}
impl DecodeError {
	/// Pairs a parsing failure with the status code of the response it came from.
	pub fn new(source: serde_path_to_error::Error<serde_json::Error>, status: Option<u16>) -> Self {
		Self { source, status }
	}
}
