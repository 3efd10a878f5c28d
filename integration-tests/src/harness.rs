use std::fs;
use std::path::{Path, PathBuf};

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("failed to write config file");
    path
}
