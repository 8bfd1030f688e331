// src/discovery.rs

use log::warn;
use std::env;
use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_SENSOR_FILES;

/// Directory holding the running executable, or the current directory if that is unknown.
///
/// This is the binary's location, not the source tree: under `cargo run` it is
/// `target/debug/`, so the CSV logs must be placed there (or beside an installed binary).
pub fn program_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The fixed (title, path) list for a direct run, in plot order.
pub fn default_sensor_files(dir: &Path) -> Vec<(String, PathBuf)> {
    DEFAULT_SENSOR_FILES
        .iter()
        .map(|name| (name.to_string(), dir.join(name)))
        .collect()
}

/// Keeps candidates whose path exists, warning once per missing file. Order is preserved.
pub fn existing_sensor_files(candidates: Vec<(String, PathBuf)>) -> Vec<(String, PathBuf)> {
    candidates
        .into_iter()
        .filter(|(_, path)| {
            let found = path.exists();
            if !found {
                warn!(
                    "File not found at '{}'. It will be skipped.",
                    path.display()
                );
            }
            found
        })
        .collect()
}
