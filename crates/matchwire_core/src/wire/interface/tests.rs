use serde_json::json;

use crate::wire::{Data, Decode, Encode, Interface, One, Two, Variant, WireError};

#[test]
fn tag_one_routes_to_one() {
	let wire = json!({"type": "one", "name": "x", "data": {"name": "n"}});
	let decoded = Interface::decode(&wire).expect("one decodes");

	let Interface::One(one) = &decoded else {
		panic!("expected One variant, got {decoded:?}");
	};
	assert_eq!(one.name.as_deref(), Some("x"));
	assert_eq!(one.data, Some(Data::new("n")));
	assert_eq!(decoded.name(), Some("x"));
	assert_eq!(decoded.variant_type(), "One");
}

#[test]
fn reencoding_stamps_capitalized_type_first() {
	let wire = json!({"type": "one", "name": "x", "data": {"name": "n"}});
	let Interface::One(one) = Interface::decode(&wire).expect("one decodes") else {
		panic!("expected One variant");
	};

	let encoded = one.encode().expect("one encodes");
	assert_eq!(encoded, json!({"type": "One", "name": "x", "data": {"name": "n"}}));

	let keys: Vec<_> = encoded.as_object().expect("mapping").keys().cloned().collect();
	assert_eq!(keys, ["type", "name", "data"]);
}

#[test]
fn tag_two_routes_to_two() {
	let wire = json!({"type": "two", "name": "y", "data": {"name": "m"}});
	let decoded = Interface::decode(&wire).expect("two decodes");
	assert_eq!(decoded, Interface::Two(Two::new("y", Data::new("m"))));

	let Interface::Two(two) = decoded else {
		panic!("expected Two variant");
	};
	assert_eq!(two.encode().expect("two encodes")["type"], "Two");
}

#[test]
fn unknown_tag_is_rejected() {
	let err = Interface::decode(&json!({"type": "bogus"})).expect_err("bogus tag");
	assert!(matches!(&err, WireError::UnknownVariant { discriminator: Some(tag) } if tag == "bogus"));
	assert_eq!(err.to_string(), "bad type: bogus");
}

#[test]
fn matching_is_case_sensitive() {
	let err = Interface::decode(&json!({"type": "One", "name": "x"})).expect_err("encoded tag is not a decode tag");
	assert!(matches!(&err, WireError::UnknownVariant { discriminator: Some(tag) } if tag == "One"));
}

#[test]
fn missing_or_null_tag_is_rejected() {
	for wire in [json!({"name": "x"}), json!({"type": null})] {
		let err = Interface::decode(&wire).expect_err("no tag");
		assert!(matches!(err, WireError::UnknownVariant { discriminator: None }));
	}
}

#[test]
fn non_string_tag_is_rendered_as_wire_text() {
	let err = Interface::decode(&json!({"type": 1})).expect_err("numeric tag");
	assert!(matches!(&err, WireError::UnknownVariant { discriminator: Some(tag) } if tag == "1"));
}

#[test]
fn non_mapping_input_is_a_shape_error() {
	let err = Interface::decode(&json!("one")).expect_err("bare string");
	assert!(matches!(err, WireError::ExpectedShape { type_name: "Interface", .. }));
}

#[test]
fn variant_decode_ignores_discriminator() {
	let one = One::decode(&json!({"type": "two", "name": "x", "data": {"name": "n"}})).expect("decodes");
	assert_eq!(one, One::new("x", Data::new("n")));
	assert_eq!(one.encode().expect("encodes")["type"], One::TYPE);
}

#[test]
fn missing_fields_fail_at_encode_in_declaration_order() {
	let empty = Two::decode(&json!({"type": "two"})).expect("absence is not a decode error");
	let err = empty.encode().expect_err("name is first");
	assert!(matches!(err, WireError::MissingField { type_name: "Interface.Two", field: "name" }));

	let no_data = Two {
		name: Some("y".to_owned()),
		data: None,
	};
	let err = no_data.encode().expect_err("data is required");
	assert!(matches!(err, WireError::MissingField { field: "data", .. }));
}

#[test]
fn nested_record_errors_propagate() {
	let one = One::new("x", Data::default());
	let err = one.encode().expect_err("nested name missing");
	assert!(matches!(err, WireError::MissingField { type_name: "Data", field: "name" }));
}

#[test]
fn variant_constants_are_fixed_per_type() {
	assert_eq!((One::TAG, One::TYPE), ("one", "One"));
	assert_eq!((Two::TAG, Two::TYPE), ("two", "Two"));
}

#[test]
fn display_uses_qualified_variant_name() {
	let decoded = Interface::One(One::new("x", Data::new("n")));
	assert_eq!(decoded.to_string(), "Interface.One(name=x, data=Data(name=n))");
}
