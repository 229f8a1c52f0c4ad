//! Test helpers for writing CLI fixtures and reading command output.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use tempfile::TempDir;

/// Temporary directory addressed through UTF-8 paths.
pub(super) struct Scratch {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Scratch {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Parse captured command output as JSON.
pub(super) fn output_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("command output is JSON")
}

/// Extract the `risk_score` of every annotated route in `output`.
pub(super) fn risk_scores(output: &[u8]) -> Vec<f64> {
    output_json(output)
        .as_array()
        .expect("annotated routes array")
        .iter()
        .map(|route| route["risk_score"].as_f64().expect("numeric risk score"))
        .collect()
}
