//! Helpers shared by the integration tests.

#![allow(dead_code)]

// crates.io
use httpmock::MockServer;
// self
use twitter_request::{
	auth::{BearerCredentials, Credentials, OAuth1Credentials},
	client::ApiClient,
	config::ClientConfig,
	http::ReqwestHttpClient,
	reqwest::Client,
	url::Url,
};

pub const BEARER_TOKEN: &str = "AAAAAAAAAAAAAAAAAAAAAMLheAAAAAAA0%2BuSeid";

/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
/// `httpmock` during tests.
pub fn test_reqwest_http_client() -> ReqwestHttpClient {
	let client = Client::builder()
		.danger_accept_invalid_certs(true)
		.danger_accept_invalid_hostnames(true)
		.build()
		.expect("Failed to build insecure Reqwest client for tests.");

	ReqwestHttpClient::with_client(client)
}

/// Points both API and upload origins at the mock server.
pub fn mock_config(server: &MockServer) -> ClientConfig {
	let origin = Url::parse(&server.url("/")).expect("Mock server URL should parse.");

	ClientConfig::builder()
		.api_origin(origin.clone())
		.upload_origin(origin)
		.build()
		.expect("Mock client configuration should build.")
}

pub fn test_credentials() -> Credentials {
	Credentials::both(
		BearerCredentials::new(BEARER_TOKEN),
		OAuth1Credentials::new(
			"consumer-key",
			"consumer-secret",
			"1234-user-token",
			"user-token-secret",
		),
	)
}

/// Constructs an [`ApiClient`] that talks to `server` with both credential sets.
pub fn build_test_client(server: &MockServer) -> ApiClient {
	build_test_client_with(server, test_credentials())
}

pub fn build_test_client_with(server: &MockServer, credentials: impl Into<Credentials>) -> ApiClient {
	ApiClient::with_http_client(credentials, mock_config(server), test_reqwest_http_client())
}
