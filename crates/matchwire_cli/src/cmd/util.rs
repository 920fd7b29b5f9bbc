use matchwire::wire::LoadOptions;

/// Document loading flags shared by every command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct LoadArgs {
	/// Refuse zstd-compressed input.
	#[arg(long = "no-zstd")]
	pub no_zstd: bool,
	/// Maximum document size in bytes after decompression.
	#[arg(long = "max-bytes")]
	pub max_bytes: Option<usize>,
}

impl LoadArgs {
	/// Overlay CLI flags on default load options.
	pub(crate) fn options(&self) -> LoadOptions {
		let mut opt = LoadOptions::default();
		if self.no_zstd {
			opt.allow_zstd = false;
		}
		if let Some(max_bytes) = self.max_bytes {
			opt.max_bytes = max_bytes;
		}
		opt
	}
}

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) {
	match serde_json::to_string_pretty(payload) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}
