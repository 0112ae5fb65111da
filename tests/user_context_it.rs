mod common;

// crates.io
use httpmock::prelude::*;
use serde_json::json;
// self
use common::*;
use twitter_request::{
	auth::BearerCredentials,
	error::{ConfigError, Error},
	request::ApiRequest,
};

#[tokio::test]
async fn users_me_is_signed_and_decoded() {
	let server = MockServer::start_async().await;
	let client = build_test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/2/users/me")
				.query_param("user.fields", "created_at,public_metrics")
				.header_exists("authorization")
				.header("accept", "application/json");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"data": { "id": "2244994945", "name": "Twitter Dev", "username": "TwitterDev" }
			}));
		})
		.await;
	let reply = client
		.authorised_request(
			ApiRequest::get("users/me")
				.with_param("user.fields", "created_at,public_metrics")
				.signed(),
		)
		.await
		.expect("Signed lookup should succeed.");

	assert_eq!(
		reply.json().map(|v| v["data"]["username"].clone()),
		Some(json!("TwitterDev"))
	);

	mock.assert_async().await;
}

#[tokio::test]
async fn signed_post_sends_json_body() {
	let server = MockServer::start_async().await;
	let client = build_test_client(&server);
	let mock = server
		.mock_async(|when, then| {
			when.method(POST)
				.path("/2/tweets")
				.header_exists("authorization")
				.json_body(json!({ "text": "Hello from the adapter" }));
			then.status(201).header("content-type", "application/json").json_body(json!({
				"data": { "id": "1445880548472328192", "text": "Hello from the adapter" }
			}));
		})
		.await;
	let reply = client
		.user_context_request(
			ApiRequest::post("tweets").with_body(json!({ "text": "Hello from the adapter" })),
		)
		.await
		.expect("Signed tweet creation should succeed.");

	assert_eq!(reply.json().map(|v| v["data"]["id"].clone()), Some(json!("1445880548472328192")));

	mock.assert_async().await;
}

#[tokio::test]
async fn signed_errors_return_raw_body() {
	let server = MockServer::start_async().await;
	let client = build_test_client(&server);
	let body = "{\"title\":\"Unauthorized\",\"status\":401,\"detail\":\"Unauthorized\"}";
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/2/users/me");
			then.status(401).header("content-type", "application/problem+json").body(body);
		})
		.await;
	let err = client
		.authorised_request(ApiRequest::get("users/me").signed())
		.await
		.expect_err("HTTP 401 should surface as an API error.");

	match err {
		Error::Api(api) => {
			assert_eq!(api.status, 401);
			assert_eq!(api.body, body);
			assert_eq!(api.json().map(|v| v["status"].clone()), Some(json!(401)));
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}

	mock.assert_async().await;
}

#[tokio::test]
async fn signed_request_without_oauth1_credentials_never_hits_the_network() {
	let server = MockServer::start_async().await;
	let client = build_test_client_with(&server, BearerCredentials::new(BEARER_TOKEN));
	let mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/2/users/me");
			then.status(200).body("{}");
		})
		.await;
	let err = client
		.authorised_request(ApiRequest::get("users/me").signed())
		.await
		.expect_err("Bearer-only clients cannot sign requests.");

	assert!(matches!(err, Error::Config(ConfigError::MissingCredentials { scheme: "OAuth 1.0a" })));

	mock.assert_calls_async(0).await;
}
