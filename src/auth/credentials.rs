//! Credential shapes accepted by the adapter.
//!
//! [`Credentials`] is a tagged union chosen at construction time, so request paths
//! look up the scheme they need once instead of probing for keys. It still
//! deserializes from the flat mapping most callers keep in their settings files:
//!
//! ```json
//! {
//!   "bearer_token": "...",
//!   "consumer_key": "...",
//!   "consumer_secret": "...",
//!   "token_identifier": "...",
//!   "token_secret": "..."
//! }
//! ```

// self
use crate::{_prelude::*, auth::Secret, error::ConfigError};

/// App-only credentials (OAuth 2.0 bearer token).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BearerCredentials {
	/// Bearer token sent in the `Authorization` header.
	pub token: Secret,
}
impl BearerCredentials {
	/// Wraps a bearer token.
	pub fn new(token: impl Into<Secret>) -> Self {
		Self { token: token.into() }
	}
}

/// User-context credentials for OAuth 1.0a request signing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuth1Credentials {
	/// Consumer (API) key identifying the app.
	pub consumer_key: String,
	/// Consumer (API) secret.
	pub consumer_secret: Secret,
	/// Access token identifying the user.
	pub token: String,
	/// Access token secret.
	pub token_secret: Secret,
}
impl OAuth1Credentials {
	/// Bundles the four OAuth 1.0a values.
	pub fn new(
		consumer_key: impl Into<String>,
		consumer_secret: impl Into<Secret>,
		token: impl Into<String>,
		token_secret: impl Into<Secret>,
	) -> Self {
		Self {
			consumer_key: consumer_key.into(),
			consumer_secret: consumer_secret.into(),
			token: token.into(),
			token_secret: token_secret.into(),
		}
	}
}

/// Credentials held by an [`ApiClient`](crate::client::ApiClient).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CredentialMap", into = "CredentialMap")]
pub enum Credentials {
	/// App-only access.
	Bearer(BearerCredentials),
	/// User-context access.
	OAuth1(OAuth1Credentials),
	/// Both schemes, so signed and unsigned calls share one client.
	Both {
		/// App-only credentials.
		bearer: BearerCredentials,
		/// User-context credentials.
		oauth1: OAuth1Credentials,
	},
}
impl Credentials {
	/// Combines app-only and user-context credentials.
	pub fn both(bearer: BearerCredentials, oauth1: OAuth1Credentials) -> Self {
		Self::Both { bearer, oauth1 }
	}

	/// Returns the bearer credentials, if held.
	pub fn bearer(&self) -> Option<&BearerCredentials> {
		match self {
			Self::Bearer(bearer) | Self::Both { bearer, .. } => Some(bearer),
			Self::OAuth1(_) => None,
		}
	}

	/// Returns the OAuth 1.0a credentials, if held.
	pub fn oauth1(&self) -> Option<&OAuth1Credentials> {
		match self {
			Self::OAuth1(oauth1) | Self::Both { oauth1, .. } => Some(oauth1),
			Self::Bearer(_) => None,
		}
	}

	pub(crate) fn require_bearer(&self) -> Result<&BearerCredentials> {
		self.bearer().ok_or_else(|| ConfigError::MissingCredentials { scheme: "bearer" }.into())
	}

	pub(crate) fn require_oauth1(&self) -> Result<&OAuth1Credentials> {
		self.oauth1().ok_or_else(|| ConfigError::MissingCredentials { scheme: "OAuth 1.0a" }.into())
	}
}
impl From<BearerCredentials> for Credentials {
	fn from(value: BearerCredentials) -> Self {
		Self::Bearer(value)
	}
}
impl From<OAuth1Credentials> for Credentials {
	fn from(value: OAuth1Credentials) -> Self {
		Self::OAuth1(value)
	}
}

/// Flat on-disk representation of [`Credentials`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
struct CredentialMap {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	bearer_token: Option<Secret>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	consumer_key: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	consumer_secret: Option<Secret>,
	#[serde(default, skip_serializing_if = "Option::is_none", alias = "token")]
	token_identifier: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	token_secret: Option<Secret>,
}
impl TryFrom<CredentialMap> for Credentials {
	type Error = ConfigError;

	fn try_from(map: CredentialMap) -> Result<Self, Self::Error> {
		let present = |value: &String| !value.trim().is_empty();
		let bearer = map.bearer_token.filter(|token| !token.is_blank()).map(BearerCredentials::new);
		let consumer_key = map.consumer_key.filter(present);
		let consumer_secret = map.consumer_secret.filter(|secret| !secret.is_blank());
		let token = map.token_identifier.filter(present);
		let token_secret = map.token_secret.filter(|secret| !secret.is_blank());
		let oauth1 = match (consumer_key, consumer_secret, token, token_secret) {
			(Some(consumer_key), Some(consumer_secret), Some(token), Some(token_secret)) =>
				Some(OAuth1Credentials { consumer_key, consumer_secret, token, token_secret }),
			(None, None, None, None) => None,
			_ => return Err(ConfigError::IncompleteCredentials),
		};

		match (bearer, oauth1) {
			(Some(bearer), Some(oauth1)) => Ok(Self::Both { bearer, oauth1 }),
			(Some(bearer), None) => Ok(Self::Bearer(bearer)),
			(None, Some(oauth1)) => Ok(Self::OAuth1(oauth1)),
			(None, None) => Err(ConfigError::IncompleteCredentials),
		}
	}
}
impl From<Credentials> for CredentialMap {
	fn from(value: Credentials) -> Self {
		let mut map = CredentialMap::default();

		if let Some(bearer) = value.bearer() {
			map.bearer_token = Some(bearer.token.clone());
		}
		if let Some(oauth1) = value.oauth1() {
			map.consumer_key = Some(oauth1.consumer_key.clone());
			map.consumer_secret = Some(oauth1.consumer_secret.clone());
			map.token_identifier = Some(oauth1.token.clone());
			map.token_secret = Some(oauth1.token_secret.clone());
		}

		map
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn flat_mapping_selects_the_matching_variant() {
		let bearer: Credentials = serde_json::from_str(r#"{"bearer_token":"app-token"}"#)
			.expect("Bearer-only mapping should deserialize.");

		assert!(matches!(bearer, Credentials::Bearer(_)));
		assert!(bearer.oauth1().is_none());

		let user: Credentials = serde_json::from_str(
			r#"{"consumer_key":"ck","consumer_secret":"cs","token_identifier":"t","token_secret":"ts"}"#,
		)
		.expect("OAuth 1.0a mapping should deserialize.");
		let oauth1 = user.oauth1().expect("OAuth 1.0a credentials should be present.");

		assert!(matches!(user, Credentials::OAuth1(_)));
		assert_eq!(oauth1.token, "t");
		assert_eq!(oauth1.token_secret.expose(), "ts");

		let both: Credentials = serde_json::from_str(
			r#"{"bearer_token":"app","consumer_key":"ck","consumer_secret":"cs","token":"t","token_secret":"ts"}"#,
		)
		.expect("Combined mapping should deserialize.");

		assert!(matches!(both, Credentials::Both { .. }));
		assert_eq!(both.bearer().map(|b| b.token.expose()), Some("app"));
	}

	#[test]
	fn partial_oauth1_mapping_is_rejected() {
		let err = serde_json::from_str::<Credentials>(
			r#"{"bearer_token":"app","consumer_key":"ck","consumer_secret":"cs"}"#,
		)
		.expect_err("A partial OAuth 1.0a key set should be rejected.");

		assert!(err.to_string().contains("complete OAuth 1.0a key set"));

		serde_json::from_str::<Credentials>("{}")
			.expect_err("An empty mapping should be rejected.");
		serde_json::from_str::<Credentials>(r#"{"bearer_token":"  "}"#)
			.expect_err("A blank bearer token should be rejected.");
	}

	#[test]
	fn credentials_round_trip_through_flat_mapping() {
		let credentials = Credentials::both(
			BearerCredentials::new("app"),
			OAuth1Credentials::new("ck", "cs", "t", "ts"),
		);
		let value = serde_json::to_value(&credentials).expect("Credentials should serialize.");

		assert_eq!(value["token_identifier"], "t");
		assert_eq!(value["bearer_token"], "app");
		assert_eq!(
			serde_json::from_value::<Credentials>(value).expect("Credentials should deserialize."),
			credentials
		);
	}

	#[test]
	fn require_reports_missing_scheme() {
		let credentials = Credentials::from(BearerCredentials::new("app"));
		let err = credentials
			.require_oauth1()
			.expect_err("Bearer-only credentials cannot sign user-context calls.");

		assert!(matches!(
			err,
			Error::Config(ConfigError::MissingCredentials { scheme: "OAuth 1.0a" })
		));
		assert!(credentials.require_bearer().is_ok());
	}
}
