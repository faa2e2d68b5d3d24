// src/pipeline.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::PROGRESS_INTERVAL_FRAMES;
use crate::data_input::log_parser::parse_log_file;
use crate::render_framework::{FrameRenderer, RenderConfig};
use crate::resample::resample_indices;
use crate::video_output::VideoSink;

/// What a completed single-file run produced.
#[derive(Debug, Clone)]
pub struct RenderSummary {
    pub output_file: PathBuf,
    pub input_samples: usize,
    pub dropped_rows: usize,
    pub output_frames: usize,
}

/// Output video path: the input's base name with an `.mp4` extension, in the
/// current working directory.
pub fn output_video_path(input_file: &Path) -> PathBuf {
    let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
    PathBuf::from(format!("{stem}.mp4"))
}

/// Runs the full single-file pipeline: parse, resample, render each frame,
/// encode. Strictly sequential; one sample is mapped and drawn to completion
/// before the next is considered.
pub fn render_log_to_video(
    input_file: &Path,
    speed: f64,
    config: &RenderConfig,
) -> Result<RenderSummary, Box<dyn Error>> {
    if !(speed > 0.0) {
        return Err(format!(
            "Error: invalid speed multiplier {}: must be greater than zero.",
            speed
        )
        .into());
    }
    if !input_file.exists() {
        return Err(format!("Error: input file '{}' not found.", input_file.display()).into());
    }

    let (samples, dropped_rows) = parse_log_file(input_file)?;
    if dropped_rows > 0 {
        println!("Warning: dropped {dropped_rows} rows with missing channel values.");
    }
    println!(
        "Read {} valid samples from '{}'.",
        samples.len(),
        input_file.display()
    );
    if samples.is_empty() {
        return Err(format!(
            "Error: no valid data rows in '{}' after dropping incomplete rows.",
            input_file.display()
        )
        .into());
    }

    let indices = resample_indices(samples.len(), speed)?;
    if indices.is_empty() {
        println!(
            "Warning: resampling {} samples at speed {} produced zero output frames; writing an empty video.",
            samples.len(),
            speed
        );
    }

    let output_file = output_video_path(input_file);
    let mut renderer = FrameRenderer::new(config.clone());
    let mut sink = VideoSink::create(&output_file, config.width, config.height, config.fps)?;

    let mut encode_error: Option<Box<dyn Error>> = None;
    for (frame_no, &idx) in indices.iter().enumerate() {
        let frame = match renderer.render_frame(&samples[idx]) {
            Ok(frame) => frame,
            Err(e) => {
                encode_error = Some(e);
                break;
            }
        };
        if let Err(e) = sink.write_frame(&frame) {
            encode_error = Some(e);
            break;
        }
        if (frame_no + 1) % PROGRESS_INTERVAL_FRAMES == 0 {
            println!("  Rendered {}/{} frames...", frame_no + 1, indices.len());
        }
    }

    // Finalize the container even when the loop stopped early, so a partial
    // file is never left with a missing trailer.
    sink.finish()?;
    if let Some(e) = encode_error {
        return Err(e);
    }

    println!("Video saved as '{}'.", output_file.display());
    println!("Speed multiplier {}x at a constant {} fps.", speed, config.fps);
    let original_secs = samples.len() as f64 / config.fps as f64;
    let final_secs = indices.len() as f64 / config.fps as f64;
    println!("Original duration ~{original_secs:.1}s -> output duration ~{final_secs:.1}s.");

    Ok(RenderSummary {
        output_file,
        input_samples: samples.len(),
        dropped_rows,
        output_frames: indices.len(),
    })
}

// src/pipeline.rs
