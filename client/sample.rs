/// A `TrafficSample` holds the nine numeric features describing one observed network session. It serializes to the JSON object the prediction service expects, with one key per feature.
#[derive(Clone, Debug, serde::Serialize)]
pub struct TrafficSample {
	pub packet_count: f64,
	pub total_bytes: f64,
	pub duration: f64,
	pub protocol: f64,
	pub tcp_syn_count: f64,
	pub tcp_fin_count: f64,
	pub tcp_rst_count: f64,
	pub alert_count: f64,
	pub session_anomaly_count: f64,
}

impl TrafficSample {
	/// Return the features as name/value pairs in the order the service trains on.
	pub fn features(&self) -> [(&'static str, f64); 9] {
		[
			("packet_count", self.packet_count),
			("total_bytes", self.total_bytes),
			("duration", self.duration),
			("protocol", self.protocol),
			("tcp_syn_count", self.tcp_syn_count),
			("tcp_fin_count", self.tcp_fin_count),
			("tcp_rst_count", self.tcp_rst_count),
			("alert_count", self.alert_count),
			("session_anomaly_count", self.session_anomaly_count),
		]
	}
}

#[test]
fn test_serialize() {
	use vigil_deps::serde_json;
	let sample = TrafficSample {
		packet_count: 120.0,
		total_bytes: 64000.0,
		duration: 1.5,
		protocol: 6.0,
		tcp_syn_count: 2.0,
		tcp_fin_count: 1.0,
		tcp_rst_count: 0.0,
		alert_count: 3.0,
		session_anomaly_count: 1.0,
	};
	let value = serde_json::to_value(&sample).unwrap();
	let object = value.as_object().unwrap();
	assert_eq!(object.len(), 9);
	for (name, value) in sample.features().iter() {
		assert_eq!(object.get(*name).unwrap().as_f64().unwrap(), *value);
	}
}
