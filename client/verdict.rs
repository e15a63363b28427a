/*!
This module defines the analysis the prediction service returns for one sample. The two model blocks are required, so a body missing either fails to parse instead of surfacing later as a missing field. The final verdict, the protocol echo, and the per model thresholds are optional because older deployments of the service omit them.
*/

/// The verdicts returned for one submitted sample.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct Analysis {
	pub final_verdict: Option<String>,
	pub protocol: Option<ProtocolOutput>,
	pub isolation_forest: IsolationForestOutput,
	pub random_forest: RandomForestOutput,
}

/// The normalized protocol echoed back by the service.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct ProtocolOutput {
	pub number: i64,
	pub name: String,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct IsolationForestOutput {
	pub verdict: String,
	pub anomaly_score: f32,
	pub threshold: Option<f32>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct RandomForestOutput {
	pub verdict: String,
	pub probability: f32,
	pub threshold: Option<f32>,
}

impl std::fmt::Display for IsolationForestOutput {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.verdict, self.anomaly_score)
	}
}

impl std::fmt::Display for RandomForestOutput {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{} ({})", self.verdict, self.probability)
	}
}

#[test]
fn test_parse_full() {
	use vigil_deps::serde_json;
	let body = r#"{
		"final_verdict": "Suspicious",
		"protocol": { "number": 6, "name": "TCP" },
		"isolation_forest": { "verdict": "Attack", "anomaly_score": 0.23, "threshold": 0.0416 },
		"random_forest": { "verdict": "Benign", "probability": 0.04, "threshold": 0.0864 }
	}"#;
	let analysis: Analysis = serde_json::from_str(body).unwrap();
	assert_eq!(analysis.final_verdict.as_deref(), Some("Suspicious"));
	assert_eq!(analysis.protocol.as_ref().unwrap().name, "TCP");
	assert_eq!(analysis.isolation_forest.verdict, "Attack");
	assert_eq!(analysis.isolation_forest.anomaly_score, 0.23);
	assert_eq!(analysis.random_forest.verdict, "Benign");
	assert_eq!(analysis.random_forest.probability, 0.04);
}

#[test]
fn test_parse_missing_final_verdict() {
	use vigil_deps::serde_json;
	let body = r#"{
		"isolation_forest": { "verdict": "Benign", "anomaly_score": 0.01 },
		"random_forest": { "verdict": "Benign", "probability": 0.02 }
	}"#;
	let analysis: Analysis = serde_json::from_str(body).unwrap();
	assert!(analysis.final_verdict.is_none());
	assert!(analysis.protocol.is_none());
	assert!(analysis.isolation_forest.threshold.is_none());
}

#[test]
fn test_parse_missing_model_block() {
	use vigil_deps::serde_json;
	let body = r#"{ "final_verdict": "Attack" }"#;
	let result = serde_json::from_str::<Analysis>(body);
	assert!(result.is_err());
}

#[test]
fn test_display() {
	let output = IsolationForestOutput {
		verdict: "Attack".to_owned(),
		anomaly_score: 0.23,
		threshold: None,
	};
	assert_eq!(output.to_string(), "Attack (0.23)");
}
