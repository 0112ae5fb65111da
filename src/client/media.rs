//! Media upload through the v1.1 upload endpoint.

// std
use std::{fs, path::Path};
// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{Method, header::AUTHORIZATION, multipart::Form};
use serde_json::Value;
// self
use crate::{
	_prelude::*,
	client::{self, ApiClient},
	obs::{self, RequestKind},
	response,
};

/// Multipart field carrying the base64-encoded file.
pub const MEDIA_FIELD: &str = "media_data";

impl ApiClient {
	/// Reads `media` from disk and uploads it, signed with OAuth 1.0a.
	///
	/// The whole file is loaded into memory and sent base64-encoded in the
	/// [`MEDIA_FIELD`] multipart field. Multipart fields are not part of the signature.
	///
	/// The read is a blocking [`fs::read`] on the calling task. For large files on a
	/// busy runtime, read the bytes elsewhere (for example `spawn_blocking`) and call
	/// [`ApiClient::upload_media_bytes`].
	pub async fn upload_media(&self, media: impl AsRef<Path>) -> Result<Value> {
		let path = media.as_ref();

		obs::observe(RequestKind::MediaUpload, "upload_media", async move {
			self.credentials.require_oauth1()?;

			let bytes = fs::read(path)
				.map_err(|source| Error::MediaRead { path: path.to_path_buf(), source })?;

			self.send_media(&bytes).await
		})
		.await
	}

	/// Uploads media already held in memory; same wire format as [`ApiClient::upload_media`].
	pub async fn upload_media_bytes(&self, bytes: &[u8]) -> Result<Value> {
		obs::observe(RequestKind::MediaUpload, "upload_media_bytes", self.send_media(bytes)).await
	}

	async fn send_media(&self, bytes: &[u8]) -> Result<Value> {
		let oauth1 = self.credentials.require_oauth1()?;
		let url = self.config.endpoints().media_upload_url()?;
		let authorization = oauth1.authorization_header(&Method::POST, &url, &[])?;
		let builder = self
			.http_client
			.post(url)
			.header(AUTHORIZATION, client::authorization_value(&authorization)?)
			.multipart(media_form(bytes));
		let response = self.http_client.execute(builder).await?;

		response::read_reply(response, false).await?.into_json().await
	}
}

fn media_form(bytes: &[u8]) -> Form {
	Form::new().text(MEDIA_FIELD, encode_media(bytes))
}

fn encode_media(bytes: &[u8]) -> String {
	STANDARD.encode(bytes)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn media_is_standard_padded_base64_of_exact_bytes() {
		let bytes = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0xff];

		assert_eq!(encode_media(&bytes), "iVBORw0KGgr/");
		assert_eq!(encode_media(b"gif"), "Z2lm");
		assert_eq!(encode_media(b"ab"), "YWI=");
		assert_eq!(
			STANDARD.decode(encode_media(&bytes)).expect("Encoding should round-trip."),
			bytes
		);
	}
}
