use std::fmt::Write;
use vigil_client::verdict::Analysis;

/**
An `AnalysisView` holds the five display regions of an analysis: the status line, the detail output, and the three summary fields. Applying an outcome with [`complete`](AnalysisView::complete) or [`fail`](AnalysisView::fail) rewrites every region, so a view always reflects exactly the most recent application and nothing older.
*/
pub struct AnalysisView {
	pub status: String,
	pub output: String,
	pub final_verdict: String,
	pub isolation_forest: String,
	pub random_forest: String,
}

impl AnalysisView {
	pub fn new() -> AnalysisView {
		AnalysisView {
			status: String::new(),
			output: String::new(),
			final_verdict: String::new(),
			isolation_forest: String::new(),
			random_forest: String::new(),
		}
	}

	/// Fill the view from a successful analysis. A missing final verdict renders as "N/A".
	pub fn complete(&mut self, analysis: &Analysis) {
		let final_verdict = analysis.final_verdict.as_deref().unwrap_or("N/A");
		let mut output = String::new();
		writeln!(output, "Final Verdict: {}", final_verdict).unwrap();
		if let Some(protocol) = &analysis.protocol {
			writeln!(output, "Protocol: {} ({})", protocol.name, protocol.number).unwrap();
		}
		writeln!(output, "Isolation Forest: {}", analysis.isolation_forest).unwrap();
		write!(output, "Random Forest: {}", analysis.random_forest).unwrap();
		self.status = "Analysis completed. Result is displayed below.".to_owned();
		self.output = output;
		self.final_verdict = final_verdict.to_owned();
		self.isolation_forest = analysis.isolation_forest.to_string();
		self.random_forest = analysis.random_forest.to_string();
	}

	/// Put the view in the fixed failure state: failed status, "ERROR" final verdict, empty detail output, placeholder summaries.
	pub fn fail(&mut self) {
		self.status = "Analysis failed!".to_owned();
		self.output.clear();
		self.final_verdict = "ERROR".to_owned();
		self.isolation_forest = "N/A".to_owned();
		self.random_forest = "N/A".to_owned();
	}
}

impl std::fmt::Display for AnalysisView {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		writeln!(f, "{}", self.status)?;
		if !self.output.is_empty() {
			writeln!(f)?;
			writeln!(f, "{}", self.output)?;
		}
		writeln!(f)?;
		writeln!(f, "final verdict:    {}", self.final_verdict)?;
		writeln!(f, "isolation forest: {}", self.isolation_forest)?;
		write!(f, "random forest:    {}", self.random_forest)?;
		Ok(())
	}
}

#[cfg(test)]
fn analysis() -> Analysis {
	use vigil_client::verdict::{IsolationForestOutput, ProtocolOutput, RandomForestOutput};
	Analysis {
		final_verdict: Some("Suspicious".to_owned()),
		protocol: Some(ProtocolOutput {
			number: 6,
			name: "TCP".to_owned(),
		}),
		isolation_forest: IsolationForestOutput {
			verdict: "Attack".to_owned(),
			anomaly_score: 0.23,
			threshold: None,
		},
		random_forest: RandomForestOutput {
			verdict: "Benign".to_owned(),
			probability: 0.04,
			threshold: None,
		},
	}
}

#[test]
fn test_complete() {
	let mut view = AnalysisView::new();
	view.complete(&analysis());
	insta::assert_display_snapshot!(view, @r###"
 Analysis completed. Result is displayed below.

 Final Verdict: Suspicious
 Protocol: TCP (6)
 Isolation Forest: Attack (0.23)
 Random Forest: Benign (0.04)

 final verdict:    Suspicious
 isolation forest: Attack (0.23)
 random forest:    Benign (0.04)
 "###);
}

#[test]
fn test_complete_missing_final_verdict() {
	let mut view = AnalysisView::new();
	let mut analysis = analysis();
	analysis.final_verdict = None;
	analysis.protocol = None;
	view.complete(&analysis);
	assert_eq!(view.final_verdict, "N/A");
	assert_eq!(view.isolation_forest, "Attack (0.23)");
	assert_eq!(view.random_forest, "Benign (0.04)");
	assert_eq!(view.status, "Analysis completed. Result is displayed below.");
}

#[test]
fn test_fail() {
	let mut view = AnalysisView::new();
	view.fail();
	insta::assert_display_snapshot!(view, @r###"
 Analysis failed!

 final verdict:    ERROR
 isolation forest: N/A
 random forest:    N/A
 "###);
}

#[test]
fn test_reapply_leaves_no_residual_state() {
	let mut view = AnalysisView::new();
	view.complete(&analysis());
	let mut second = analysis();
	second.final_verdict = Some("Benign".to_owned());
	second.isolation_forest.verdict = "Benign".to_owned();
	second.isolation_forest.anomaly_score = 0.01;
	view.complete(&second);
	assert_eq!(view.final_verdict, "Benign");
	assert_eq!(view.isolation_forest, "Benign (0.01)");
	view.fail();
	assert_eq!(view.status, "Analysis failed!");
	assert_eq!(view.final_verdict, "ERROR");
	assert_eq!(view.output, "");
	assert_eq!(view.isolation_forest, "N/A");
	assert_eq!(view.random_forest, "N/A");
}
