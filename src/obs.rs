//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `twitter_request.call` with the `kind`
//!   (auth scheme) and `stage` (call site) fields.
//!   The span's `outcome` field is filled when the call resolves.
//! - Enable `metrics` to increment the `twitter_request_total` counter for every
//!   attempt/success/failure, labeled by `kind` + `outcome`, and to record call latency
//!   in the `twitter_request_duration_seconds` histogram.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// std
use std::time::Instant;
// self
use crate::_prelude::*;

/// Request kinds observed by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestKind {
	/// App-only call authorized with the bearer token.
	Bearer,
	/// User-context call signed with OAuth 1.0a.
	UserContext,
	/// Media upload.
	MediaUpload,
}
impl RequestKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestKind::Bearer => "bearer",
			RequestKind::UserContext => "user_context",
			RequestKind::MediaUpload => "media_upload",
		}
	}
}
impl Display for RequestKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a request helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `fut` inside a request span and records attempt plus final outcome.
pub(crate) async fn observe<T, Fut>(kind: RequestKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = RequestSpan::new(kind, stage);
	let started = Instant::now();

	record_request_outcome(kind, RequestOutcome::Attempt);

	let result = span.instrument(fut).await;
	let outcome = if result.is_ok() { RequestOutcome::Success } else { RequestOutcome::Failure };

	span.record_outcome(outcome);
	record_request_outcome(kind, outcome);
	record_request_duration(kind, outcome, started.elapsed());

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn labels_are_stable() {
		assert_eq!(RequestKind::UserContext.to_string(), "user_context");
		assert_eq!(RequestKind::MediaUpload.as_str(), "media_upload");
		assert_eq!(RequestOutcome::Failure.to_string(), "failure");
	}

	#[tokio::test]
	async fn observe_passes_results_through() {
		let ok = observe(RequestKind::Bearer, "observe_ok", async { Ok(7) }).await;
		let err = observe::<(), _>(RequestKind::Bearer, "observe_err", async {
			Err(crate::error::ConfigError::EmptyVersion.into())
		})
		.await;

		assert_eq!(ok.expect("Successful futures should pass through."), 7);
		assert!(matches!(err, Err(Error::Config(_))));
	}
}
