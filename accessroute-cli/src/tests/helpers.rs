//! Test helpers for temporary catalogue files.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// A one-point catalogue outside the built-in fixture.
pub(super) const LIGHTHOUSE_CATALOG: &str = r#"[
    {
        "id": 10,
        "name": "Faro della Vittoria",
        "location": { "x": 13.7567, "y": 45.6697 },
        "category": "monument",
        "ratings": { "wheelchair": 0.3, "hearing-impairment": 0.9 }
    }
]"#;

pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write file");
}
