use thiserror::Error;
use vigil_deps::{reqwest, serde_json};

/// The ways a single predict exchange can fail. All three are absorbed uniformly at the trigger boundary, so callers that only care that the exchange failed can match on the enum without inspecting the variant.
#[derive(Debug, Error)]
pub enum PredictError {
	#[error("the prediction service responded with status {status}")]
	Request { status: u16 },
	#[error("the request to the prediction service did not complete")]
	Transport(#[source] reqwest::Error),
	#[error("the prediction service returned a malformed analysis")]
	Parse(#[source] serde_json::Error),
}
