//! This module contains the main entrypoint to the vigil cli.

use clap::Clap;
use colored::Colorize;
use url::Url;
use vigil_client::{protocol, sample::TrafficSample, PredictionClient};
use vigil_deps::{lexical, serde_json, tokio};
use vigil_util::{err, error::Result, table::Table};

mod predict;
mod view;

#[derive(Clap)]
#[clap(
	about = "Score network traffic with the vigil prediction service.",
	setting = clap::AppSettings::DisableHelpSubcommand,
)]
enum Options {
	#[clap(name = "predict")]
	Predict(Box<PredictOptions>),
}

#[derive(Clap, Debug)]
#[clap(about = "score one traffic sample")]
#[clap(long_about = "send one traffic sample to the prediction service and display the verdicts")]
struct PredictOptions {
	#[clap(
		long,
		env = "VIGIL_URL",
		default_value = "http://localhost:8080",
		about = "the base url of the prediction service"
	)]
	url: Url,
	#[clap(long, about = "the number of packets observed in the session")]
	packet_count: String,
	#[clap(long, about = "the total number of bytes transferred")]
	total_bytes: String,
	#[clap(long, about = "the session duration in seconds")]
	duration: String,
	#[clap(long, about = "the protocol, as a name or an iana number")]
	protocol: String,
	#[clap(long, about = "the number of tcp syn packets")]
	tcp_syn_count: String,
	#[clap(long, about = "the number of tcp fin packets")]
	tcp_fin_count: String,
	#[clap(long, about = "the number of tcp rst packets")]
	tcp_rst_count: String,
	#[clap(long, about = "the number of alerts raised for the session")]
	alert_count: String,
	#[clap(long, about = "the number of session anomalies observed")]
	session_anomaly_count: String,
	#[clap(long, about = "print the request body to stderr")]
	verbose: bool,
}

fn main() {
	let options = Options::parse();
	let result = match options {
		Options::Predict(options) => cli_predict(*options),
	};
	if let Err(error) = result {
		eprintln!("{}: {}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_predict(options: PredictOptions) -> Result<()> {
	let sample = TrafficSample {
		packet_count: parse_feature("packet-count", &options.packet_count)?,
		total_bytes: parse_feature("total-bytes", &options.total_bytes)?,
		duration: parse_feature("duration", &options.duration)?,
		protocol: protocol::parse(&options.protocol)?,
		tcp_syn_count: parse_feature("tcp-syn-count", &options.tcp_syn_count)?,
		tcp_fin_count: parse_feature("tcp-fin-count", &options.tcp_fin_count)?,
		tcp_rst_count: parse_feature("tcp-rst-count", &options.tcp_rst_count)?,
		alert_count: parse_feature("alert-count", &options.alert_count)?,
		session_anomaly_count: parse_feature(
			"session-anomaly-count",
			&options.session_anomaly_count,
		)?,
	};
	// Refuse to send a sample with a non-finite feature.
	for (name, value) in sample.features().iter() {
		if !value.is_finite() {
			return Err(err!("{} must be a finite number", name));
		}
	}
	if options.verbose {
		eprintln!("sending {}", serde_json::to_string(&sample)?);
	}
	// Echo the submitted features.
	let header = ["FEATURE", "VALUE"];
	let rows: Vec<Vec<String>> = sample
		.features()
		.iter()
		.map(|(name, value)| vec![name.to_string(), value.to_string()])
		.collect();
	println!("{}", Table::new(&header, &rows));
	let client = PredictionClient::new(options.url);
	let mut view = view::AnalysisView::new();
	tokio::runtime::Builder::new()
		.threaded_scheduler()
		.enable_all()
		.build()
		.unwrap()
		.block_on(predict::trigger(&client, &sample, &mut view));
	println!("{}", view);
	Ok(())
}

fn parse_feature(name: &str, value: &str) -> Result<f64> {
	lexical::parse::<f64, _>(value).map_err(|_| err!("{} is not a number: {:?}", name, value))
}
