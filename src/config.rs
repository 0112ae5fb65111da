//! Client configuration: API origins, default version, and user agent.
//!
//! Every [`ClientConfig`] passes through [`ClientConfigBuilder::build`], including ones
//! deserialized from a settings file. The [`Default`] impl points at the public Twitter
//! origins with API version `2`.

/// Builder API for assembling client configuration.
pub mod builder;

pub use builder::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Public REST API origin.
pub const DEFAULT_API_ORIGIN: &str = "https://api.twitter.com/";
/// Public media upload origin.
pub const DEFAULT_UPLOAD_ORIGIN: &str = "https://upload.twitter.com/";
/// API version used when a request does not pick one.
pub const DEFAULT_VERSION: &str = "2";
/// Path of the media upload endpoint, relative to the upload origin.
pub const MEDIA_UPLOAD_PATH: &str = "1.1/media/upload.json";

/// Origins the adapter talks to. Inside a [`ClientConfig`] both always end in `/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiEndpoints {
	/// REST API origin; requests go to `{api}{version}/{path}`.
	pub api: Url,
	/// Media upload origin; uploads go to `{upload}1.1/media/upload.json`.
	pub upload: Url,
}
impl ApiEndpoints {
	/// Builds the URL for a REST call, appending `query` verbatim when present.
	///
	/// The string is assembled by hand and parsed once, so characters the URL
	/// standard allows in a query (`:` in particular) reach the wire unescaped.
	pub fn api_url(&self, version: &str, path: &str, query: Option<&str>) -> Result<Url> {
		let path = path.trim_start_matches('/');
		let raw = match query {
			Some(query) if !query.is_empty() => format!("{}{version}/{path}?{query}", self.api),
			_ => format!("{}{version}/{path}", self.api),
		};

		Url::parse(&raw).map_err(|source| ConfigError::invalid_url(raw, source).into())
	}

	/// Returns the media upload endpoint.
	pub fn media_upload_url(&self) -> Result<Url> {
		self.upload
			.join(MEDIA_UPLOAD_PATH)
			.map_err(|source| ConfigError::invalid_url(MEDIA_UPLOAD_PATH, source).into())
	}
}
impl Default for ApiEndpoints {
	fn default() -> Self {
		Self {
			api: Url::parse(DEFAULT_API_ORIGIN).expect("Default API origin is a valid URL."),
			upload: Url::parse(DEFAULT_UPLOAD_ORIGIN)
				.expect("Default upload origin is a valid URL."),
		}
	}
}

/// Validated configuration consumed by [`ApiClient`](crate::client::ApiClient).
///
/// Only [`ClientConfigBuilder::build`] and [`Default`] produce values. Deserialization
/// reads the plain layout below and runs it through the builder, so an insecure origin
/// or an empty version is rejected instead of reaching the wire:
///
/// ```json
/// {
///   "endpoints": { "api": "https://api.twitter.com/", "upload": "https://upload.twitter.com/" },
///   "default_version": "2",
///   "user_agent": "bots/0.1"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ConfigFile", into = "ConfigFile")]
pub struct ClientConfig {
	endpoints: ApiEndpoints,
	default_version: String,
	user_agent: String,
}
impl ClientConfig {
	/// Creates a builder seeded with the defaults.
	pub fn builder() -> ClientConfigBuilder {
		ClientConfigBuilder::default()
	}

	/// Origins for REST and upload calls.
	pub fn endpoints(&self) -> &ApiEndpoints {
		&self.endpoints
	}

	/// Version segment used when a request leaves it unset.
	pub fn default_version(&self) -> &str {
		&self.default_version
	}

	/// `User-Agent` header sent with every call.
	pub fn user_agent(&self) -> &str {
		&self.user_agent
	}
}
impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			endpoints: ApiEndpoints::default(),
			default_version: DEFAULT_VERSION.into(),
			user_agent: default_user_agent(),
		}
	}
}

/// Unvalidated on-disk layout of [`ClientConfig`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
	endpoints: ApiEndpoints,
	#[serde(skip_serializing_if = "Option::is_none")]
	default_version: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	user_agent: Option<String>,
}
impl TryFrom<ConfigFile> for ClientConfig {
	type Error = ConfigError;

	fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
		let mut builder = ClientConfig::builder()
			.api_origin(file.endpoints.api)
			.upload_origin(file.endpoints.upload);

		if let Some(version) = file.default_version {
			builder = builder.default_version(version);
		}
		if let Some(user_agent) = file.user_agent {
			builder = builder.user_agent(user_agent);
		}

		builder.build()
	}
}
impl From<ClientConfig> for ConfigFile {
	fn from(config: ClientConfig) -> Self {
		Self {
			endpoints: config.endpoints,
			default_version: Some(config.default_version),
			user_agent: Some(config.user_agent),
		}
	}
}

pub(crate) fn default_user_agent() -> String {
	format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn api_url_keeps_literal_colons() {
		let endpoints = ApiEndpoints::default();
		let url = endpoints
			.api_url("2", "tweets/search/recent", Some("query=from:someuser"))
			.expect("Search URL should parse.");

		assert_eq!(url.as_str(), "https://api.twitter.com/2/tweets/search/recent?query=from:someuser");
		assert_eq!(url.query(), Some("query=from:someuser"));
	}

	#[test]
	fn api_url_omits_empty_query_and_leading_slash() {
		let endpoints = ApiEndpoints::default();
		let url = endpoints.api_url("1.1", "/account/settings.json", Some("")).expect("URL should parse.");

		assert_eq!(url.as_str(), "https://api.twitter.com/1.1/account/settings.json");
	}

	#[test]
	fn media_upload_url_uses_upload_origin() {
		let url = ApiEndpoints::default().media_upload_url().expect("Upload URL should parse.");

		assert_eq!(url.as_str(), "https://upload.twitter.com/1.1/media/upload.json");
	}

	#[test]
	fn default_config_targets_version_two() {
		let config = ClientConfig::default();

		assert_eq!(config.default_version(), "2");
		assert!(config.user_agent().starts_with("twitter-request/"));
	}

	#[test]
	fn deserialized_config_is_validated() {
		let err = serde_json::from_str::<ClientConfig>(
			r#"{"endpoints":{"api":"http://proxy.example.com/twitter"},"default_version":"2"}"#,
		)
		.expect_err("Plain HTTP origins should be rejected when loading from a file.");

		assert!(err.to_string().contains("must use HTTPS"));

		let err = serde_json::from_str::<ClientConfig>(r#"{"default_version":""}"#)
			.expect_err("Empty versions should be rejected when loading from a file.");

		assert!(err.to_string().contains("version must not be empty"));
	}

	#[test]
	fn deserialized_config_is_normalized() {
		let config = serde_json::from_str::<ClientConfig>(
			r#"{"endpoints":{"api":"https://proxy.example.com/twitter"},"user_agent":"bots/0.1"}"#,
		)
		.expect("A partial HTTPS config should load.");
		let url = config
			.endpoints()
			.api_url(config.default_version(), "users/me", None)
			.expect("URL should parse.");

		assert_eq!(url.as_str(), "https://proxy.example.com/twitter/2/users/me");
		assert_eq!(config.endpoints().upload.as_str(), DEFAULT_UPLOAD_ORIGIN);
		assert_eq!(config.user_agent(), "bots/0.1");

		let value = serde_json::to_value(&config).expect("Config should serialize.");

		assert_eq!(value["endpoints"]["api"], "https://proxy.example.com/twitter/");
		assert_eq!(
			serde_json::from_value::<ClientConfig>(value).expect("Config should reload."),
			config
		);
	}
}
