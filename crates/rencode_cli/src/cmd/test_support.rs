use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static RENCODE_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture(name: &str) -> String {
	rencode_testkit::fixture_path(name).display().to_string()
}

pub(crate) fn run_rencode(args: &[&str]) -> Output {
	Command::new(rencode_bin()).args(args).output().expect("rencode command executes")
}

pub(crate) fn run_rencode_json(args: &[&str]) -> serde_json::Value {
	rencode_testkit::json_stdout(&run_rencode(args))
}

fn rencode_bin() -> &'static PathBuf {
	RENCODE_BIN.get_or_init(resolve_rencode_bin)
}

fn resolve_rencode_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_rencode") {
		return PathBuf::from(path);
	}

	let mut bin = rencode_testkit::target_dir().join("debug");
	bin.push(if cfg!(windows) { "rencode.exe" } else { "rencode" });

	let status = Command::new("cargo")
		.current_dir(rencode_testkit::workspace_root())
		.args(["build", "--quiet", "--bin", "rencode"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build rencode binary at {}", bin.display());

	bin
}
