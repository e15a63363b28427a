/*!
This crate implements the client for the vigil prediction service. A [`PredictionClient`](PredictionClient) sends one [`TrafficSample`](sample::TrafficSample) per call to the service's `/predict` endpoint and returns the parsed [`Analysis`](verdict::Analysis).
*/

pub mod error;
pub mod protocol;
pub mod sample;
pub mod verdict;

use self::{error::PredictError, sample::TrafficSample, verdict::Analysis};
use vigil_deps::{reqwest, serde_json, url::Url};

pub struct PredictionClient {
	client: reqwest::Client,
	url: Url,
}

impl PredictionClient {
	pub fn new(url: Url) -> PredictionClient {
		PredictionClient {
			client: reqwest::Client::new(),
			url,
		}
	}

	/**
	Send one sample to the prediction service and return its analysis.

	This issues exactly one POST to `<url>/predict` with the sample as a JSON body. There is no retry: a non-2xx status fails with [`PredictError::Request`](error::PredictError::Request) carrying the status code, a request that never completes fails with [`PredictError::Transport`](error::PredictError::Transport), and a body that is not a well formed analysis fails with [`PredictError::Parse`](error::PredictError::Parse). Calls are independent of each other, so repeated or concurrent calls race freely.
	*/
	pub async fn predict(&self, sample: &TrafficSample) -> Result<Analysis, PredictError> {
		let url = format!("{}/predict", self.url.as_str().trim_end_matches('/'));
		let response = self
			.client
			.post(&url)
			.json(sample)
			.send()
			.await
			.map_err(PredictError::Transport)?;
		let status = response.status();
		if !status.is_success() {
			return Err(PredictError::Request {
				status: status.as_u16(),
			});
		}
		let body = response.bytes().await.map_err(PredictError::Transport)?;
		let analysis = serde_json::from_slice(&body).map_err(PredictError::Parse)?;
		Ok(analysis)
	}
}
