//! `twitter_request.call` spans.
//!
//! Each call opens one span carrying `kind` and `stage`; the `outcome` field stays
//! empty until the call resolves.

// self
use crate::{
	_prelude::*,
	obs::{RequestKind, RequestOutcome},
};

/// Future returned by [`RequestSpan::instrument`].
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`RequestSpan::instrument`]; the input future itself.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// Span wrapping a single API call.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Opens the span for `kind` at call site `stage`.
	pub fn new(kind: RequestKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			Self {
				span: tracing::info_span!(
					"twitter_request.call",
					kind = kind.as_str(),
					stage,
					outcome = tracing::field::Empty
				),
			}
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Runs `fut` inside the span; nothing is entered across `.await`.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			tracing::Instrument::instrument(fut, self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}

	/// Fills the `outcome` field once the call has resolved.
	pub fn record_outcome(&self, outcome: RequestOutcome) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = outcome;
		}
	}
}
