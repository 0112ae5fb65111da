//! App-only calls authorized with the bearer token.

// crates.io
use reqwest::{
	RequestBuilder,
	header::{ACCEPT, AUTHORIZATION},
};
// self
use crate::{
	_prelude::*,
	client::{self, ApiClient},
	obs::{self, RequestKind},
	request::{self, ApiRequest},
	response::{self, Reply},
};

impl ApiClient {
	/// Sends `request` with `Authorization: Bearer <token>`.
	///
	/// Parameters are form-encoded by hand and appended verbatim with colons left
	/// unescaped; see [`request::bearer_query`]. The JSON body is sent only when present.
	pub async fn bearer_token_request(&self, request: ApiRequest) -> Result<Reply> {
		obs::observe(RequestKind::Bearer, "bearer_token_request", async move {
			let builder = self.prepare_bearer_request(&request)?;
			let response = self.http_client.execute(builder).await?;

			response::read_reply(response, request.stream).await
		})
		.await
	}

	fn prepare_bearer_request(&self, request: &ApiRequest) -> Result<RequestBuilder> {
		let bearer = self.credentials.require_bearer()?;
		let query = request::bearer_query(&request.params);
		let url =
			self.config.endpoints().api_url(self.version(request), &request.path, query.as_deref())?;
		let authorization =
			client::authorization_value(&format!("Bearer {}", bearer.token.expose()))?;
		let mut builder = self
			.http_client
			.request(request.method.clone(), url)
			.header(AUTHORIZATION, authorization)
			.header(ACCEPT, "application/json");

		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		Ok(builder)
	}
}
