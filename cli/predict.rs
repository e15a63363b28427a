use crate::view::AnalysisView;
use vigil_client::{sample::TrafficSample, PredictionClient};

/// Run one predict exchange and apply the outcome to the view. Every failure is absorbed here: a one line trace goes to stderr and the view takes the fixed failure state, so nothing propagates to the caller and the outcome is visible only through the view.
pub async fn trigger(client: &PredictionClient, sample: &TrafficSample, view: &mut AnalysisView) {
	match client.predict(sample).await {
		Ok(analysis) => view.complete(&analysis),
		Err(error) => {
			eprintln!("prediction failed: {}", error);
			view.fail();
		}
	}
}

#[cfg(test)]
struct StubContext {
	status: u16,
	body: &'static str,
}

#[cfg(test)]
async fn handle(
	context: std::sync::Arc<StubContext>,
	_request: vigil_deps::http::Request<vigil_deps::hyper::Body>,
) -> vigil_deps::http::Response<vigil_deps::hyper::Body> {
	vigil_deps::http::Response::builder()
		.status(context.status)
		.body(vigil_deps::hyper::Body::from(context.body))
		.unwrap()
}

#[cfg(test)]
fn stub_sample() -> TrafficSample {
	TrafficSample {
		packet_count: 10.0,
		total_bytes: 1200.0,
		duration: 0.5,
		protocol: 17.0,
		tcp_syn_count: 0.0,
		tcp_fin_count: 0.0,
		tcp_rst_count: 0.0,
		alert_count: 0.0,
		session_anomaly_count: 0.0,
	}
}

#[cfg(test)]
fn trigger_against_stub(status: u16, body: &'static str) -> AnalysisView {
	use std::sync::Arc;
	use vigil_deps::{tokio, url::Url};
	let mut runtime = tokio::runtime::Builder::new()
		.basic_scheduler()
		.enable_all()
		.build()
		.unwrap();
	runtime.block_on(async {
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();
		let context = Arc::new(StubContext { status, body });
		tokio::spawn(async move {
			vigil_util::serve::serve(listener, context, handle).await.unwrap();
		});
		let url = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
		let client = PredictionClient::new(url);
		let mut view = AnalysisView::new();
		trigger(&client, &stub_sample(), &mut view).await;
		view
	})
}

#[test]
fn test_trigger_success() {
	let view = trigger_against_stub(
		200,
		r#"{
			"final_verdict": "Benign",
			"isolation_forest": { "verdict": "Benign", "anomaly_score": 0.01 },
			"random_forest": { "verdict": "Benign", "probability": 0.02 }
		}"#,
	);
	assert_eq!(view.status, "Analysis completed. Result is displayed below.");
	assert_eq!(view.final_verdict, "Benign");
	assert_eq!(view.isolation_forest, "Benign (0.01)");
	assert_eq!(view.random_forest, "Benign (0.02)");
}

#[test]
fn test_trigger_error_status() {
	let view = trigger_against_stub(500, "internal server error");
	assert_eq!(view.status, "Analysis failed!");
	assert_eq!(view.final_verdict, "ERROR");
	assert_eq!(view.output, "");
}

#[test]
fn test_trigger_malformed_body() {
	let view = trigger_against_stub(200, r#"{ "final_verdict": "Attack" }"#);
	assert_eq!(view.status, "Analysis failed!");
	assert_eq!(view.final_verdict, "ERROR");
	assert_eq!(view.output, "");
}
