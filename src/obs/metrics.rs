//! Call counters and latency histograms.

// std
use std::time::Duration;
// self
use crate::obs::{RequestKind, RequestOutcome};

/// Counter bumped once per attempt and once per resolution.
pub const REQUEST_COUNTER: &str = "twitter_request_total";
/// Histogram of call latency in seconds, recorded on resolution.
pub const REQUEST_DURATION: &str = "twitter_request_duration_seconds";

/// Bumps [`REQUEST_COUNTER`] for `kind` and `outcome`.
pub fn record_request_outcome(kind: RequestKind, outcome: RequestOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(REQUEST_COUNTER, "kind" => kind.as_str(), "outcome" => outcome.as_str())
		.increment(1);
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome);
}

/// Records how long a resolved call took in [`REQUEST_DURATION`].
pub fn record_request_duration(kind: RequestKind, outcome: RequestOutcome, elapsed: Duration) {
	#[cfg(feature = "metrics")]
	metrics::histogram!(REQUEST_DURATION, "kind" => kind.as_str(), "outcome" => outcome.as_str())
		.record(elapsed.as_secs_f64());
	#[cfg(not(feature = "metrics"))]
	let _ = (kind, outcome, elapsed);
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn recording_without_a_recorder_is_silent() {
		record_request_outcome(RequestKind::MediaUpload, RequestOutcome::Failure);
		record_request_duration(
			RequestKind::Bearer,
			RequestOutcome::Success,
			Duration::from_millis(120),
		);

		assert_eq!(REQUEST_COUNTER, "twitter_request_total");
	}
}
