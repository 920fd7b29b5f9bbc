use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use matchwire_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static MATCHWIRE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn fixture_arg(name: &str) -> String {
	fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_matchwire(args: &[&str]) -> Output {
	Command::new(matchwire_bin()).args(args).output().expect("matchwire command executes")
}

pub(crate) fn run_matchwire_json(args: &[&str]) -> serde_json::Value {
	let output = run_matchwire(args);
	assert!(
		output.status.success(),
		"matchwire command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn matchwire_bin() -> &'static PathBuf {
	MATCHWIRE_BIN.get_or_init(resolve_matchwire_bin)
}

fn resolve_matchwire_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_matchwire") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "matchwire.exe" } else { "matchwire" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "matchwire"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build matchwire binary at {}", bin.display());

	bin
}
