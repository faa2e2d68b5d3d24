// src/bin/batch.rs
//
// Batch driver: renders every .log file in the current directory with the
// per-file tool, one subprocess per file. Per-file failures are logged and
// skipped; the batch run itself always exits 0.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use stick_trail_render::batch::collect_log_files;

const RENDER_TOOL: &str = "stick-trail-render";

/// The per-file tool next to this executable, falling back to PATH lookup.
fn render_tool_path() -> PathBuf {
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join(format!("{RENDER_TOOL}{}", env::consts::EXE_SUFFIX));
            if candidate.exists() {
                return candidate;
            }
        }
    }
    PathBuf::from(RENDER_TOOL)
}

fn main() {
    let files = match collect_log_files(Path::new(".")) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: cannot read the current directory: {e}");
            return;
        }
    };
    if files.is_empty() {
        println!("No .log files found in the current directory.");
        return;
    }

    println!("Found {} log files to process:", files.len());
    for file in &files {
        println!("  - {}", file.display());
    }

    let tool = render_tool_path();
    let mut rendered = 0usize;
    for file in &files {
        println!("\nProcessing '{}'...", file.display());
        match Command::new(&tool).arg(file).status() {
            Ok(status) if status.success() => rendered += 1,
            Ok(status) => {
                eprintln!("Warning: rendering '{}' failed ({status}).", file.display());
            }
            Err(e) => {
                eprintln!(
                    "Warning: could not launch '{}' for '{}': {e}",
                    tool.display(),
                    file.display()
                );
            }
        }
    }

    println!("\nBatch complete: {rendered}/{} files rendered.", files.len());
}
