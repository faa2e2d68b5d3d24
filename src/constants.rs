// src/constants.rs

use plotters::style::RGBColor;

// Video geometry and timing.
pub const VIDEO_WIDTH: u32 = 1200;
pub const VIDEO_HEIGHT: u32 = 600;
pub const VIDEO_FPS: u32 = 30;
pub const VIDEO_BITRATE: usize = 4_000_000;

// Stick channel value range as logged by the transmitter.
pub const CHANNEL_MIN: f64 = -1024.0;
pub const CHANNEL_MAX: f64 = 1024.0;

// Current-position marker and trail styling.
pub const DOT_RADIUS: u32 = 12;
pub const TRAIL_LENGTH: usize = 8;
pub const TRAIL_THICKNESS: u32 = 14;
pub const TRAIL_COLOR_START: RGBColor = RGBColor(0, 0, 0);
pub const TRAIL_COLOR_END: RGBColor = RGBColor(255, 0, 0);

// Fixed scene furniture: crosshairs, border, edge highlight.
pub const CROSS_COLOR: RGBColor = RGBColor(60, 60, 60);
pub const CROSS_THICKNESS: u32 = 1;
pub const BOX_COLOR: RGBColor = RGBColor(100, 100, 100);
pub const BOX_THICKNESS: i32 = 4; // even values keep the outline symmetric around its path
pub const BOX_THICKNESS_HIGHLIGHT: i32 = 2;
pub const GRADIENT_MARGIN: i32 = 50;

// CLI defaults.
pub const DEFAULT_INPUT: &str = "1.log";
pub const DEFAULT_SPEED: f64 = 1.0;

// Input format.
pub const COMMENT_MARKER: u8 = b'#';
pub const LOG_EXTENSION: &str = "log";

// Render-loop progress reporting cadence, in output frames.
pub const PROGRESS_INTERVAL_FRAMES: usize = 300;

// src/constants.rs
