//! Recent search with an app-only bearer token.
//!
//! Reads `TWITTER_BEARER_TOKEN` from the environment, searches the last seven days for
//! the query given as the first argument (default `from:TwitterDev`), and prints the
//! decoded response. API errors are printed with their status and raw body.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
// self
use twitter_request::{
	auth::BearerCredentials, client::ApiClient, error::Error, request::ApiRequest,
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let token = env::var("TWITTER_BEARER_TOKEN")
		.map_err(|_| eyre!("Set TWITTER_BEARER_TOKEN to an app-only bearer token."))?;
	let query = env::args().nth(1).unwrap_or_else(|| "from:TwitterDev".into());
	let client = ApiClient::new(BearerCredentials::new(token))?;
	let request = ApiRequest::get("tweets/search/recent")
		.with_param("query", &query)
		.with_param("tweet.fields", "created_at,author_id")
		.with_param("max_results", 10);

	match client.authorised_request(request).await {
		Ok(reply) => {
			let value = reply.into_json().await?;

			println!("{}", serde_json::to_string_pretty(&value)?);
		},
		Err(Error::Api(api)) => {
			eprintln!("Search for `{query}` failed with HTTP {}: {}", api.status, api.body);
		},
		Err(e) => return Err(e.into()),
	}

	Ok(())
}
