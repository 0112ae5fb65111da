//! Credential models and the OAuth 1.0a request signer.

pub mod credentials;
pub mod oauth1;
pub mod secret;

pub use credentials::*;
pub use secret::*;
