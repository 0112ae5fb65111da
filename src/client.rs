//! The request adapter.
//!
//! [`ApiClient`] owns the credentials, the configuration, and one shared reqwest
//! client. Each call is a single round trip with no retries; the scheme-specific
//! paths live in the submodules so each one reads top to bottom.

mod bearer;
mod media;
mod user_context;

pub use media::MEDIA_FIELD;

// crates.io
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	auth::Credentials,
	config::ClientConfig,
	error::ConfigError,
	http::ReqwestHttpClient,
	request::ApiRequest,
	response::{self, Reply},
};

/// Sends authenticated requests to the Twitter API.
///
/// Cloning is cheap: the credentials sit behind an [`Arc`] and the reqwest client
/// shares its connection pool.
#[derive(Clone)]
pub struct ApiClient {
	/// HTTP client wrapper used for every outbound request.
	pub http_client: ReqwestHttpClient,
	/// Origins, default version, and user agent.
	pub config: ClientConfig,
	credentials: Arc<Credentials>,
}
impl ApiClient {
	/// Creates a client for the public API origins.
	pub fn new(credentials: impl Into<Credentials>) -> Result<Self> {
		Self::with_config(credentials, ClientConfig::default())
	}

	/// Creates a client for a custom configuration.
	pub fn with_config(credentials: impl Into<Credentials>, config: ClientConfig) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Ok(Self::with_http_client(credentials, config, http_client))
	}

	/// Creates a client that reuses a caller-provided transport.
	pub fn with_http_client(
		credentials: impl Into<Credentials>,
		config: ClientConfig,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self { http_client, config, credentials: Arc::new(credentials.into()) }
	}

	/// Credentials held by this client.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Routes to [`ApiClient::user_context_request`] when `request.signed` is set,
	/// else to [`ApiClient::bearer_token_request`].
	pub async fn authorised_request(&self, request: ApiRequest) -> Result<Reply> {
		if request.signed {
			self.user_context_request(request).await
		} else {
			self.bearer_token_request(request).await
		}
	}

	/// Same as [`ApiClient::authorised_request`], then deserializes the reply into `T`.
	///
	/// Streamed replies are drained first, so `T` must accept a JSON array for them.
	pub async fn authorised_request_as<T>(&self, request: ApiRequest) -> Result<T>
	where
		T: DeserializeOwned,
	{
		let value = self.authorised_request(request).await?.into_json().await?;

		response::decode_value(value)
	}

	fn version<'a>(&'a self, request: &'a ApiRequest) -> &'a str {
		request.version_or(self.config.default_version())
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("config", &self.config)
			.field("bearer_set", &self.credentials.bearer().is_some())
			.field("oauth1_set", &self.credentials.oauth1().is_some())
			.finish()
	}
}

/// Builds an `Authorization` header value that HTTP/2 will not index.
fn authorization_value(value: &str) -> Result<HeaderValue> {
	let mut header = HeaderValue::from_str(value).map_err(ConfigError::from)?;

	header.set_sensitive(true);

	Ok(header)
}
