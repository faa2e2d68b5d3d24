// tests/pipeline_test.rs

use std::fs;
use std::path::Path;

use stick_trail_render::data_input::log_parser::parse_log_file;
use stick_trail_render::pipeline::{output_video_path, render_log_to_video};
use stick_trail_render::render_framework::{FrameRenderer, RenderConfig};
use stick_trail_render::resample::resample_indices;
use stick_trail_render::video_output::VideoSink;

fn pixel(buffer: &[u8], width: u32, x: i32, y: i32) -> (u8, u8, u8) {
    let idx = ((y as u32 * width + x as u32) * 3) as usize;
    (buffer[idx], buffer[idx + 1], buffer[idx + 2])
}

#[test]
fn midpoint_log_renders_centered_markers_with_growing_trail() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("mid.log");
    fs::write(
        &path,
        "Ail,Ele,Thr,Rud\n\
         0,0,0,0\n\
         0,0,0,0\n\
         0,0,0,0\n",
    )
    .expect("write test log");

    let (samples, dropped) = parse_log_file(&path).expect("parse");
    assert_eq!(dropped, 0);
    let indices = resample_indices(samples.len(), 1.0).expect("resample");
    assert_eq!(indices, vec![0, 1, 2]);

    let config = RenderConfig::default();
    let mut renderer = FrameRenderer::new(config.clone());
    let center_left = (config.width as i32 / 4, config.height as i32 / 2);
    let center_right = (3 * config.width as i32 / 4, config.height as i32 / 2);

    for (frame_no, &idx) in indices.iter().enumerate() {
        let buffer = renderer.render_frame(&samples[idx]).expect("render");
        assert_eq!(
            pixel(&buffer, config.width, center_left.0, center_left.1),
            (255, 255, 255)
        );
        assert_eq!(
            pixel(&buffer, config.width, center_right.0, center_right.1),
            (255, 255, 255)
        );

        let (left, right) = renderer.trails();
        let expected_segments = frame_no; // len - 1, capped below trail_length here
        assert_eq!(left.segments(config.trail_color_start, config.trail_color_end).len(), expected_segments);
        assert_eq!(right.segments(config.trail_color_start, config.trail_color_end).len(), expected_segments);
    }
}

#[test]
fn empty_log_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("empty.log");
    fs::write(
        &path,
        "Ail,Ele,Thr,Rud\n\
         ,1,1,1\n\
         1,,1,1\n",
    )
    .expect("write test log");

    let err = render_log_to_video(&path, 1.0, &RenderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("no valid data rows"));
}

#[test]
fn invalid_speed_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("any.log");
    fs::write(&path, "Ail,Ele,Thr,Rud\n0,0,0,0\n").expect("write test log");

    let err = render_log_to_video(&path, 0.0, &RenderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("speed"));
    let err = render_log_to_video(&path, -2.0, &RenderConfig::default()).unwrap_err();
    assert!(err.to_string().contains("speed"));
}

#[test]
fn missing_input_file_is_an_error() {
    let err = render_log_to_video(
        Path::new("definitely_not_here.log"),
        1.0,
        &RenderConfig::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn output_path_is_the_input_stem_with_mp4_extension() {
    assert_eq!(
        output_video_path(Path::new("logs/7.log")),
        Path::new("7.mp4")
    );
    assert_eq!(
        output_video_path(Path::new("flight.log")),
        Path::new("flight.mp4")
    );
}

#[test]
fn video_sink_writes_a_finalized_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let out = dir.path().join("smoke.mp4");

    let config = RenderConfig::default();
    let mut renderer = FrameRenderer::new(config.clone());
    let mut sink =
        VideoSink::create(&out, config.width, config.height, config.fps).expect("create sink");

    let sample = stick_trail_render::data_input::log_data::StickSample::default();
    for _ in 0..3 {
        let frame = renderer.render_frame(&sample).expect("render");
        sink.write_frame(&frame).expect("encode frame");
    }
    assert_eq!(sink.frames_written(), 3);
    sink.finish().expect("finalize");

    let metadata = fs::metadata(&out).expect("output exists");
    assert!(metadata.len() > 0);
}
