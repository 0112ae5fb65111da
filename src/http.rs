//! Transport wrapper around the shared reqwest client.
//!
//! Every request path funnels through [`ReqwestHttpClient::execute`] so transport
//! failures are mapped in one place. Status handling happens later, in
//! [`crate::response`].

// std
use std::ops::Deref;
// crates.io
use reqwest::{RequestBuilder, Response};
// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	error::{ConfigError, TransportError},
};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// The inner client is reference counted by reqwest, so cloning the wrapper shares
/// the connection pool.
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Builds a client carrying the configured `User-Agent`.
	pub fn from_config(config: &ClientConfig) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder().user_agent(config.user_agent()).build()?;

		Ok(Self(client))
	}

	/// Sends a prepared request, mapping reqwest failures to [`TransportError`].
	pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<Response> {
		request.send().await.map_err(|e| TransportError::from(e).into())
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
