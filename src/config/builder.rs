// self
use crate::{
	_prelude::*,
	config::{ApiEndpoints, ClientConfig},
	error::ConfigError,
};

/// Builder for [`ClientConfig`] values.
#[derive(Debug)]
pub struct ClientConfigBuilder {
	/// REST API origin.
	pub api_origin: Url,
	/// Media upload origin.
	pub upload_origin: Url,
	/// Version segment used when a request leaves it unset.
	pub default_version: String,
	/// `User-Agent` header value.
	pub user_agent: String,
}
impl ClientConfigBuilder {
	/// Overrides the REST API origin.
	pub fn api_origin(mut self, url: Url) -> Self {
		self.api_origin = url;

		self
	}

	/// Overrides the media upload origin.
	pub fn upload_origin(mut self, url: Url) -> Self {
		self.upload_origin = url;

		self
	}

	/// Overrides the default API version.
	pub fn default_version(mut self, version: impl Into<String>) -> Self {
		self.default_version = version.into();

		self
	}

	/// Overrides the `User-Agent` header.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = user_agent.into();

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ClientConfig, ConfigError> {
		let api = normalize_origin("api", self.api_origin)?;
		let upload = normalize_origin("upload", self.upload_origin)?;
		let default_version = self.default_version.trim().trim_matches('/').to_owned();

		if default_version.is_empty() {
			return Err(ConfigError::EmptyVersion);
		}

		Ok(ClientConfig {
			endpoints: ApiEndpoints { api, upload },
			default_version,
			user_agent: self.user_agent,
		})
	}
}
impl Default for ClientConfigBuilder {
	fn default() -> Self {
		let ClientConfig { endpoints, default_version, user_agent } = ClientConfig::default();

		Self { api_origin: endpoints.api, upload_origin: endpoints.upload, default_version, user_agent }
	}
}

fn normalize_origin(name: &'static str, mut url: Url) -> Result<Url, ConfigError> {
	if url.scheme() != "https" {
		return Err(ConfigError::InsecureEndpoint { endpoint: name, url: url.to_string() });
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());

		url.set_path(&path);
	}

	url.set_query(None);
	url.set_fragment(None);

	Ok(url)
}
