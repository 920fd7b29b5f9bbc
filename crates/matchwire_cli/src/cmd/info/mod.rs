use std::path::PathBuf;

use matchwire::wire::{Result, WireDocument, WireValue, shape_of};

use crate::cmd::util::{LoadArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub load: LoadArgs,
}

/// Print document storage details and root shape.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json, load } = args;

	let doc = WireDocument::open(&path, &load.options())?;
	let keys: Vec<String> = match &doc.root {
		WireValue::Object(map) => map.keys().cloned().collect(),
		_ => Vec::new(),
	};
	let discriminator = doc.discriminator().map(discriminator_label);

	if json {
		emit_json(&InfoJson {
			path: path.display().to_string(),
			compression: doc.compression.as_str(),
			len: doc.len,
			shape: shape_of(&doc.root),
			keys,
			discriminator,
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("compression: {}", doc.compression.as_str());
	println!("len: {}", doc.len);
	println!("shape: {}", shape_of(&doc.root));
	if !keys.is_empty() {
		println!("keys: {}", keys.join(", "));
	}
	if let Some(discriminator) = discriminator {
		println!("discriminator: {discriminator}");
	}

	Ok(())
}

fn discriminator_label(value: &WireValue) -> String {
	match value {
		WireValue::String(text) => text.clone(),
		other => other.to_string(),
	}
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	len: usize,
	shape: &'static str,
	keys: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	discriminator: Option<String>,
}
