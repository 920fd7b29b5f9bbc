use serde_json::json;

use crate::cmd::test_support::{fixture_arg, run_matchwire, run_matchwire_json};

#[test]
fn interface_json_output_carries_canonical_form() {
	let fixture = fixture_arg("interface_one.json");
	let json = run_matchwire_json(&["decode", &fixture, "--as", "interface", "--json"]);

	assert_eq!(json["kind"], "interface");
	assert_eq!(json["compression"], "none");
	assert_eq!(json["decoded"], "Interface.One(name=x, data=Data(name=n))");
	assert_eq!(json["canonical"], json!({"type": "One", "name": "x", "data": {"name": "n"}}));
}

#[test]
fn point_sentinel_decodes_to_fixed_pair() {
	let fixture = fixture_arg("point_sentinel.json");
	let json = run_matchwire_json(&["decode", &fixture, "--as", "point", "--json"]);

	assert_eq!(json["canonical"], json!([42, 41.2]));
}

#[test]
fn type_string_is_canonicalized_to_mapping() {
	let fixture = fixture_arg("type_string.json");
	let json = run_matchwire_json(&["decode", &fixture, "--as", "type", "--json"]);

	assert_eq!(json["canonical"], json!({"data": "s"}));
}

#[test]
fn text_output_lists_decoded_and_canonical() {
	let fixture = fixture_arg("point_pair.json");
	let output = run_matchwire(&["decode", &fixture, "--as", "point"]);
	assert!(output.status.success(), "decode should succeed");

	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("decoded: Point(timestamp=3, value=4.5)"));
	assert!(stdout.contains("canonical: [3,4.5]"));
}

#[test]
fn unknown_variant_exits_with_error() {
	let fixture = fixture_arg("interface_bogus.json");
	let output = run_matchwire(&["decode", &fixture, "--as", "interface"]);

	assert!(!output.status.success(), "bogus tag should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("error: bad type: bogus"));
}

#[test]
fn missing_required_field_exits_with_error() {
	let fixture = fixture_arg("data_missing_name.json");
	let output = run_matchwire(&["decode", &fixture, "--as", "data"]);

	assert!(!output.status.success(), "missing name should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("name: is a required field (in Data)"));
}

#[test]
fn unknown_kind_exits_with_error() {
	let fixture = fixture_arg("data.json");
	let output = run_matchwire(&["decode", &fixture, "--as", "record"]);

	assert!(!output.status.success(), "unknown kind should fail");
	assert!(String::from_utf8_lossy(&output.stderr).contains("unknown kind: record"));
}
