use std::path::PathBuf;

use matchwire::wire::{Result, WireDocument, WireKind, decode_as};

use crate::cmd::util::{LoadArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Type to decode as: data, point, one, two, interface, or type.
	#[arg(long = "as")]
	pub kind: String,
	#[arg(long)]
	pub json: bool,
	#[command(flatten)]
	pub load: LoadArgs,
}

/// Decode a document as the requested kind and print its canonical encoding.
pub fn run(args: Args) -> Result<()> {
	let Args { path, kind, json, load } = args;

	let kind: WireKind = kind.parse()?;
	let doc = WireDocument::open(&path, &load.options())?;
	let decoded = decode_as(kind, &doc.root)?;
	let canonical = decoded.encode()?;

	if json {
		emit_json(&DecodeJson {
			path: path.display().to_string(),
			kind: kind.as_str(),
			compression: doc.compression.as_str(),
			decoded: decoded.to_string(),
			canonical,
		});
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("kind: {kind}");
	println!("compression: {}", doc.compression.as_str());
	println!("decoded: {decoded}");
	println!("canonical: {canonical}");

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	kind: &'static str,
	compression: &'static str,
	decoded: String,
	canonical: serde_json::Value,
}

#[cfg(test)]
mod tests;
