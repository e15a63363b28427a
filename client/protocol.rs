/*!
This module maps protocol names to the IANA protocol numbers the prediction service trains on. Numeric input passes through unchanged, so a sample captured with numeric protocols never needs the map.
*/

use std::collections::BTreeMap;
use thiserror::Error;
use vigil_deps::{lexical, once_cell::sync::Lazy};

// Names are stored normalized: uppercased with dots and spaces removed.
static PROTOCOL_NUMBERS: Lazy<BTreeMap<&'static str, u8>> = Lazy::new(|| {
	let mut map = BTreeMap::new();
	map.insert("ICMP", 1);
	map.insert("TCP", 6);
	map.insert("UDP", 17);
	map.insert("DNS", 17);
	map.insert("QUIC", 17);
	map.insert("SSL", 6);
	map.insert("TLS", 6);
	map.insert("TLSV12", 6);
	map.insert("TLSV13", 6);
	map.insert("HTTPS", 6);
	map.insert("HTTP", 6);
	map
});

#[derive(Debug, Error)]
#[error("unknown protocol {0:?}")]
pub struct UnknownProtocolError(pub String);

/// Parse a protocol given either as a number or as a protocol name. Name lookup is case insensitive and ignores dots and spaces, so `tls v1.2` and `TLSv1.2` both resolve to 6.
pub fn parse(value: &str) -> Result<f64, UnknownProtocolError> {
	if let Ok(number) = lexical::parse::<f64, _>(value) {
		return Ok(number);
	}
	let name = value.to_uppercase().replace('.', "").replace(' ', "");
	PROTOCOL_NUMBERS
		.get(name.as_str())
		.map(|number| f64::from(*number))
		.ok_or_else(|| UnknownProtocolError(value.to_owned()))
}

#[test]
fn test_parse_names() {
	assert_eq!(parse("TCP").unwrap(), 6.0);
	assert_eq!(parse("udp").unwrap(), 17.0);
	assert_eq!(parse("icmp").unwrap(), 1.0);
	assert_eq!(parse("TLSv1.2").unwrap(), 6.0);
	assert_eq!(parse("tls v1.3").unwrap(), 6.0);
	assert_eq!(parse("https").unwrap(), 6.0);
	assert_eq!(parse("dns").unwrap(), 17.0);
}

#[test]
fn test_parse_numbers() {
	assert_eq!(parse("6").unwrap(), 6.0);
	assert_eq!(parse("17").unwrap(), 17.0);
	assert_eq!(parse("132").unwrap(), 132.0);
}

#[test]
fn test_parse_unknown() {
	let error = parse("carrier-pigeon").unwrap_err();
	assert_eq!(error.to_string(), "unknown protocol \"carrier-pigeon\"");
}
