//! User-context calls signed with OAuth 1.0a.

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
	request::ApiRequest,
	response::{self, Reply},
};

impl ApiClient {
	/// Sends `request` with an OAuth 1.0a `Authorization` header.
	///
	/// Query parameters are signed, then attached through reqwest's own query
	/// encoder. The JSON body is sent only when present and is not signed.
	pub async fn user_context_request(&self, request: ApiRequest) -> Result<Reply> {
		obs::observe(RequestKind::UserContext, "user_context_request", async move {
			let builder = self.prepare_user_context_request(&request)?;
			let response = self.http_client.execute(builder).await?;

			response::read_reply(response, request.stream).await
		})
		.await
	}

	fn prepare_user_context_request(&self, request: &ApiRequest) -> Result<RequestBuilder> {
		let oauth1 = self.credentials.require_oauth1()?;
		let url = self.config.endpoints().api_url(self.version(request), &request.path, None)?;
		let authorization =
			oauth1.authorization_header(&request.method, &url, &request.param_pairs())?;
		let mut builder = self
			.http_client
			.request(request.method.clone(), url)
			.header(AUTHORIZATION, client::authorization_value(&authorization)?)
			.header(ACCEPT, "application/json");

		if !request.params.is_empty() {
			builder = builder.query(&request.params);
		}
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}

		Ok(builder)
	}
}
