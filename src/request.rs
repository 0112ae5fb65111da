//! Per-call request description consumed by [`ApiClient`](crate::client::ApiClient).

// crates.io
use reqwest::Method;
use url::form_urlencoded;
// self
use crate::_prelude::*;

/// Query parameters. Ordering carries no meaning, so a sorted map keeps URLs stable.
pub type Params = BTreeMap<String, String>;

/// One API call: method, path, parameters, optional JSON body, and dispatch flags.
///
/// ```
/// use twitter_request::request::ApiRequest;
///
/// let request = ApiRequest::get("tweets/search/recent")
/// 	.with_param("query", "from:someuser")
/// 	.with_param("max_results", 10);
///
/// assert!(!request.signed);
/// assert_eq!(request.params["max_results"], "10");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Path relative to `{origin}{version}/`.
	pub path: String,
	/// Query parameters.
	pub params: Params,
	/// JSON body, sent only when present.
	pub body: Option<serde_json::Value>,
	/// Read the body as a newline-delimited JSON stream.
	pub stream: bool,
	/// Sign with OAuth 1.0a user context instead of the bearer token.
	pub signed: bool,
	/// Version segment; falls back to the client default when unset.
	pub version: Option<String>,
}
impl ApiRequest {
	/// Creates an unsigned, non-streaming request.
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			params: Params::new(),
			body: None,
			stream: false,
			signed: false,
			version: None,
		}
	}

	/// Shorthand for a `GET` request.
	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	/// Shorthand for a `POST` request.
	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::POST, path)
	}

	/// Shorthand for a `PUT` request.
	pub fn put(path: impl Into<String>) -> Self {
		Self::new(Method::PUT, path)
	}

	/// Shorthand for a `DELETE` request.
	pub fn delete(path: impl Into<String>) -> Self {
		Self::new(Method::DELETE, path)
	}

	/// Adds one query parameter; scalar values are rendered with [`Display`].
	pub fn with_param(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.params.insert(key.into(), value.to_string());

		self
	}

	/// Adds several query parameters.
	pub fn with_params<I, K, V>(mut self, params: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Display,
	{
		for (key, value) in params {
			self.params.insert(key.into(), value.to_string());
		}

		self
	}

	/// Attaches a JSON body.
	pub fn with_body(mut self, body: serde_json::Value) -> Self {
		self.body = Some(body);

		self
	}

	/// Marks the request for OAuth 1.0a user-context signing.
	pub fn signed(mut self) -> Self {
		self.signed = true;

		self
	}

	/// Reads the response as a newline-delimited JSON stream.
	pub fn streaming(mut self) -> Self {
		self.stream = true;

		self
	}

	/// Pins the API version segment (for example `"1.1"`).
	pub fn version(mut self, version: impl Into<String>) -> Self {
		self.version = Some(version.into());

		self
	}

	pub(crate) fn version_or<'a>(&'a self, default: &'a str) -> &'a str {
		self.version.as_deref().unwrap_or(default)
	}

	pub(crate) fn param_pairs(&self) -> Vec<(String, String)> {
		self.params.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
	}
}

/// Form-encodes `params` and turns `%3A` back into `:`.
///
/// The search and filter syntaxes use operators such as `from:name`, and the API reads
/// them as intended only when the colon is sent literally.
pub fn bearer_query(params: &Params) -> Option<String> {
	if params.is_empty() {
		return None;
	}

	let encoded = form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish();

	Some(encoded.replace("%3A", ":"))
}
