//! Uploads a local image with OAuth 1.0a user credentials, then posts a tweet with it.
//!
//! Expects `TWITTER_CONSUMER_KEY`, `TWITTER_CONSUMER_SECRET`, `TWITTER_ACCESS_TOKEN`, and
//! `TWITTER_ACCESS_TOKEN_SECRET` in the environment and the image path as the first
//! argument. Pass a second argument to use it as the tweet text.

// std
use std::env;
// crates.io
use color_eyre::{Result, eyre::eyre};
use serde_json::json;
// self
use twitter_request::{auth::OAuth1Credentials, client::ApiClient, request::ApiRequest};

fn var(name: &str) -> Result<String> {
	env::var(name).map_err(|_| eyre!("Set {name} before running this demo."))
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let path = env::args().nth(1).ok_or_else(|| eyre!("Usage: upload_media <image> [text]"))?;
	let text = env::args().nth(2).unwrap_or_else(|| "Uploaded with twitter-request.".into());
	let credentials = OAuth1Credentials::new(
		var("TWITTER_CONSUMER_KEY")?,
		var("TWITTER_CONSUMER_SECRET")?,
		var("TWITTER_ACCESS_TOKEN")?,
		var("TWITTER_ACCESS_TOKEN_SECRET")?,
	);
	let client = ApiClient::new(credentials)?;
	let media = client.upload_media(&path).await?;
	let media_id = media["media_id_string"]
		.as_str()
		.ok_or_else(|| eyre!("Upload response carried no media id: {media}"))?
		.to_owned();

	println!("Uploaded {path} as media {media_id}.");

	let tweet = client
		.authorised_request(
			ApiRequest::post("tweets")
				.with_body(json!({ "text": text, "media": { "media_ids": [media_id] } }))
				.signed(),
		)
		.await?
		.into_json()
		.await?;

	println!("{}", serde_json::to_string_pretty(&tweet)?);

	Ok(())
}
