//! Thin Twitter (X) API request adapter: bearer and OAuth 1.0a signed calls, newline-delimited
//! JSON streaming, and media upload over reqwest, with structured errors instead of ambiguous
//! payloads.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod obs;
pub mod request;
pub mod response;
pub mod stream;

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use serde_json;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
