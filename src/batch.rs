// src/batch.rs

use std::io;
use std::path::{Path, PathBuf};

use crate::constants::LOG_EXTENSION;

/// Ordering key for log files: purely numeric stems sort by value and come
/// first (so `2.log` precedes `10.log`); everything else follows in
/// lexicographic stem order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSortKey {
    Numeric(u64),
    Name(String),
}

pub fn log_sort_key(path: &Path) -> LogSortKey {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !stem.is_empty() && stem.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(n) = stem.parse::<u64>() {
            return LogSortKey::Numeric(n);
        }
    }
    LogSortKey::Name(stem)
}

/// All `.log` files directly inside `dir`, in processing order.
pub fn collect_log_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map_or(false, |ext| ext == LOG_EXTENSION) {
            files.push(path);
        }
    }
    files.sort_by_key(|path| log_sort_key(path));
    Ok(files)
}


// src/batch.rs
