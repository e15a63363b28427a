use std::sync::{
	atomic::{AtomicUsize, Ordering},
	Arc,
};
use vigil_client::{error::PredictError, sample::TrafficSample, PredictionClient};
use vigil_deps::{http, hyper, serde_json, tokio, url::Url};

struct Context {
	requests: AtomicUsize,
	status: u16,
	body: &'static str,
}

fn sample() -> TrafficSample {
	TrafficSample {
		packet_count: 120.0,
		total_bytes: 64000.0,
		duration: 1.5,
		protocol: 6.0,
		tcp_syn_count: 2.0,
		tcp_fin_count: 1.0,
		tcp_rst_count: 0.0,
		alert_count: 3.0,
		session_anomaly_count: 1.0,
	}
}

/// The stub prediction service. It checks the request against the client contract and returns the canned response from its context.
async fn handle(
	context: Arc<Context>,
	mut request: http::Request<hyper::Body>,
) -> http::Response<hyper::Body> {
	context.requests.fetch_add(1, Ordering::SeqCst);
	assert_eq!(request.method(), http::Method::POST);
	assert_eq!(request.uri().path(), "/predict");
	let content_type = request.headers().get(http::header::CONTENT_TYPE).unwrap();
	assert_eq!(content_type, "application/json");
	let body = hyper::body::to_bytes(request.body_mut()).await.unwrap();
	let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
	let object = body.as_object().unwrap();
	assert_eq!(object.len(), 9);
	for (name, value) in sample().features().iter() {
		assert_eq!(object.get(*name).unwrap().as_f64().unwrap(), *value);
	}
	http::Response::builder()
		.status(context.status)
		.body(hyper::Body::from(context.body))
		.unwrap()
}

/// Bind a local port, serve the stub on it, and return the shared context and the url to reach it. Must be called from within a tokio runtime.
fn serve_stub(context: Context) -> (Arc<Context>, Url) {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();
	let context = Arc::new(context);
	let server_context = context.clone();
	tokio::spawn(async move {
		vigil_util::serve::serve(listener, server_context, handle)
			.await
			.unwrap();
	});
	let url = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
	(context, url)
}

fn runtime() -> tokio::runtime::Runtime {
	tokio::runtime::Builder::new()
		.basic_scheduler()
		.enable_all()
		.build()
		.unwrap()
}

#[test]
fn test_predict_success() {
	runtime().block_on(async {
		let (context, url) = serve_stub(Context {
			requests: AtomicUsize::new(0),
			status: 200,
			body: r#"{
				"final_verdict": "Suspicious",
				"protocol": { "number": 6, "name": "TCP" },
				"isolation_forest": { "verdict": "Attack", "anomaly_score": 0.23, "threshold": 0.0416 },
				"random_forest": { "verdict": "Benign", "probability": 0.04, "threshold": 0.0864 }
			}"#,
		});
		let client = PredictionClient::new(url);
		let analysis = client.predict(&sample()).await.unwrap();
		assert_eq!(analysis.final_verdict.as_deref(), Some("Suspicious"));
		assert_eq!(analysis.isolation_forest.verdict, "Attack");
		assert_eq!(analysis.isolation_forest.anomaly_score, 0.23);
		assert_eq!(analysis.random_forest.verdict, "Benign");
		assert_eq!(analysis.random_forest.probability, 0.04);
		assert_eq!(context.requests.load(Ordering::SeqCst), 1);
	});
}

#[test]
fn test_predict_missing_final_verdict() {
	runtime().block_on(async {
		let (context, url) = serve_stub(Context {
			requests: AtomicUsize::new(0),
			status: 200,
			body: r#"{
				"isolation_forest": { "verdict": "Benign", "anomaly_score": 0.01 },
				"random_forest": { "verdict": "Benign", "probability": 0.02 }
			}"#,
		});
		let client = PredictionClient::new(url);
		let analysis = client.predict(&sample()).await.unwrap();
		assert!(analysis.final_verdict.is_none());
		assert_eq!(analysis.isolation_forest.verdict, "Benign");
		assert_eq!(context.requests.load(Ordering::SeqCst), 1);
	});
}

#[test]
fn test_predict_error_status() {
	runtime().block_on(async {
		let (context, url) = serve_stub(Context {
			requests: AtomicUsize::new(0),
			status: 500,
			body: "internal server error",
		});
		let client = PredictionClient::new(url);
		let error = client.predict(&sample()).await.unwrap_err();
		match error {
			PredictError::Request { status } => assert_eq!(status, 500),
			error => panic!("unexpected error: {}", error),
		}
		assert_eq!(context.requests.load(Ordering::SeqCst), 1);
	});
}

#[test]
fn test_predict_malformed_body() {
	runtime().block_on(async {
		let (_, url) = serve_stub(Context {
			requests: AtomicUsize::new(0),
			status: 200,
			body: r#"{ "final_verdict": "Attack" }"#,
		});
		let client = PredictionClient::new(url);
		let error = client.predict(&sample()).await.unwrap_err();
		match error {
			PredictError::Parse(_) => {}
			error => panic!("unexpected error: {}", error),
		}
	});
}

#[test]
fn test_predict_transport_failure() {
	runtime().block_on(async {
		// Bind a port to find a free one, then drop the listener so nothing is serving on it.
		let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
		let port = listener.local_addr().unwrap().port();
		drop(listener);
		let url = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
		let client = PredictionClient::new(url);
		let error = client.predict(&sample()).await.unwrap_err();
		match error {
			PredictError::Transport(_) => {}
			error => panic!("unexpected error: {}", error),
		}
	});
}

#[test]
fn test_predict_sequential_calls_are_independent() {
	runtime().block_on(async {
		let (context, url) = serve_stub(Context {
			requests: AtomicUsize::new(0),
			status: 200,
			body: r#"{
				"isolation_forest": { "verdict": "Benign", "anomaly_score": 0.01 },
				"random_forest": { "verdict": "Benign", "probability": 0.02 }
			}"#,
		});
		let client = PredictionClient::new(url);
		client.predict(&sample()).await.unwrap();
		client.predict(&sample()).await.unwrap();
		assert_eq!(context.requests.load(Ordering::SeqCst), 2);
	});
}
