// src/render_framework.rs

use plotters::backend::{BitMapBackend, DrawingBackend};
use plotters::style::colors::WHITE;
use plotters::style::{Color, RGBColor, ShapeStyle};

use std::error::Error;

use crate::constants::{
    BOX_COLOR, BOX_THICKNESS, BOX_THICKNESS_HIGHLIGHT, CHANNEL_MAX, CHANNEL_MIN, CROSS_COLOR,
    CROSS_THICKNESS, DOT_RADIUS, GRADIENT_MARGIN, TRAIL_COLOR_END, TRAIL_COLOR_START, TRAIL_LENGTH,
    TRAIL_THICKNESS, VIDEO_FPS, VIDEO_HEIGHT, VIDEO_WIDTH,
};
use crate::data_input::log_data::StickSample;
use crate::trail::TrailBuffer;

/// Immutable rendering configuration. The near-duplicate styling variants of
/// the visualization (border on/off, edge highlight on/off, trail styling)
/// are all expressed through this one structure.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub dot_radius: u32,
    pub trail_length: usize,
    pub cross_color: RGBColor,
    pub trail_color_start: RGBColor,
    pub trail_color_end: RGBColor,
    pub trail_thickness: u32,
    pub border_enabled: bool,
    pub gradient_enabled: bool,
    pub gradient_margin: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: VIDEO_WIDTH,
            height: VIDEO_HEIGHT,
            fps: VIDEO_FPS,
            dot_radius: DOT_RADIUS,
            trail_length: TRAIL_LENGTH,
            cross_color: CROSS_COLOR,
            trail_color_start: TRAIL_COLOR_START,
            trail_color_end: TRAIL_COLOR_END,
            trail_thickness: TRAIL_THICKNESS,
            border_enabled: true,
            gradient_enabled: true,
            gradient_margin: GRADIENT_MARGIN,
        }
    }
}

/// Travel region of one stick, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct StickBox {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl RenderConfig {
    pub fn left_box(&self) -> StickBox {
        StickBox {
            x: 0,
            y: 0,
            w: self.width as i32 / 2,
            h: self.height as i32,
        }
    }

    pub fn right_box(&self) -> StickBox {
        StickBox {
            x: self.width as i32 / 2,
            y: 0,
            w: self.width as i32 / 2,
            h: self.height as i32,
        }
    }
}

/// Affine-maps `v` from `[in_min, in_max]` to `[out_min, out_max]`, truncating
/// to an integer. No clamping: an out-of-range `v` yields an out-of-range
/// pixel coordinate, so inputs must be pre-validated by the caller.
pub fn map_value(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> i32 {
    ((v - in_min) * (out_max - out_min) / (in_max - in_min) + out_min) as i32
}

/// Screen positions for both sticks. Left stick: Rudder→x over
/// `[0, width/2]`, Throttle→y. Right stick: Aileron→x over
/// `[width/2, width]`, Elevator→y. The y axis is inverted so full positive
/// deflection is visually at the top of the frame.
pub fn stick_positions(sample: &StickSample, config: &RenderConfig) -> ((i32, i32), (i32, i32)) {
    let width = config.width as f64;
    let height = config.height as f64;
    let half_width = (config.width / 2) as f64;

    let rud = map_value(sample.rud, CHANNEL_MIN, CHANNEL_MAX, 0.0, half_width);
    let thr = map_value(sample.thr, CHANNEL_MIN, CHANNEL_MAX, height, 0.0);
    let ail = map_value(sample.ail, CHANNEL_MIN, CHANNEL_MAX, half_width, width);
    let ele = map_value(sample.ele, CHANNEL_MIN, CHANNEL_MAX, height, 0.0);

    ((rud, thr), (ail, ele))
}

/// Renders one frame per sample, carrying the two trail buffers across the
/// run. One renderer instance corresponds to one output video.
pub struct FrameRenderer {
    config: RenderConfig,
    trail_left: TrailBuffer,
    trail_right: TrailBuffer,
}

impl FrameRenderer {
    pub fn new(config: RenderConfig) -> Self {
        let trail_left = TrailBuffer::new(config.trail_length);
        let trail_right = TrailBuffer::new(config.trail_length);
        Self {
            config,
            trail_left,
            trail_right,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn trails(&self) -> (&TrailBuffer, &TrailBuffer) {
        (&self.trail_left, &self.trail_right)
    }

    /// Renders one sample into a freshly allocated RGB24 frame buffer.
    ///
    /// Draw order is fixed: background, border and divider, edge highlight,
    /// crosshairs, trail, current-position dot, so the current position is
    /// always visible above the trail.
    pub fn render_frame(&mut self, sample: &StickSample) -> Result<Vec<u8>, Box<dyn Error>> {
        let (width, height) = (self.config.width, self.config.height);
        let (pos_left, pos_right) = stick_positions(sample, &self.config);

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let mut backend = BitMapBackend::with_buffer(&mut buffer, (width, height));

            if self.config.border_enabled {
                draw_border(&mut backend, &self.config)?;
            }
            if self.config.gradient_enabled {
                draw_edge_highlight(&mut backend, &self.config, self.config.left_box(), pos_left, true)?;
                draw_edge_highlight(&mut backend, &self.config, self.config.right_box(), pos_right, false)?;
            }
            draw_crosshairs(&mut backend, &self.config)?;

            self.trail_left.push(pos_left);
            self.trail_right.push(pos_right);
            draw_trail(&mut backend, &self.config, &self.trail_left)?;
            draw_trail(&mut backend, &self.config, &self.trail_right)?;

            let dot = WHITE.filled();
            backend.draw_circle(pos_left, self.config.dot_radius, &dot, true)?;
            backend.draw_circle(pos_right, self.config.dot_radius, &dot, true)?;

            backend.present()?;
        }
        Ok(buffer)
    }
}

fn draw_rect_outline(
    backend: &mut BitMapBackend<'_>,
    upper_left: (i32, i32),
    bottom_right: (i32, i32),
    style: &ShapeStyle,
) -> Result<(), Box<dyn Error>> {
    let (x0, y0) = upper_left;
    let (x1, y1) = bottom_right;
    backend.draw_line((x0, y0), (x1, y0), style)?;
    backend.draw_line((x1, y0), (x1, y1), style)?;
    backend.draw_line((x1, y1), (x0, y1), style)?;
    backend.draw_line((x0, y1), (x0, y0), style)?;
    Ok(())
}

/// Outer border plus the vertical divider between the stick halves, both
/// inset by half the line thickness so nothing is clipped at the frame edge.
fn draw_border(backend: &mut BitMapBackend<'_>, config: &RenderConfig) -> Result<(), Box<dyn Error>> {
    let w = config.width as i32;
    let h = config.height as i32;
    let half_t = BOX_THICKNESS / 2;
    let style = BOX_COLOR.stroke_width(BOX_THICKNESS as u32);

    draw_rect_outline(
        backend,
        (half_t, half_t),
        (w - half_t - 1, h - half_t - 1),
        &style,
    )?;
    backend.draw_line((w / 2, half_t), (w / 2, h - half_t), &style)?;
    Ok(())
}

/// Highlight rectangle just inside a stick box. Brightness rises as the stick
/// nears the box edge: `255 * max(0, (margin - dist) / margin)` where `dist`
/// is the distance to the nearest edge. Kept strictly inside the border; the
/// inset on the divider side is smaller because only half the border
/// thickness intrudes there.
fn draw_edge_highlight(
    backend: &mut BitMapBackend<'_>,
    config: &RenderConfig,
    stick_box: StickBox,
    pos: (i32, i32),
    divider_on_right: bool,
) -> Result<(), Box<dyn Error>> {
    let dx = (pos.0 - stick_box.x).min(stick_box.x + stick_box.w - pos.0);
    let dy = (pos.1 - stick_box.y).min(stick_box.y + stick_box.h - pos.1);
    let dist = dx.min(dy);

    let margin = config.gradient_margin;
    let intensity = (255.0 * ((margin - dist) as f64 / margin as f64).max(0.0)) as u8;

    let half_t = BOX_THICKNESS / 2;
    let half_t_h = BOX_THICKNESS_HIGHLIGHT / 2;
    let style = RGBColor(intensity, intensity, intensity).stroke_width(BOX_THICKNESS_HIGHLIGHT as u32);

    let x0 = if divider_on_right {
        stick_box.x + BOX_THICKNESS + half_t_h + 1
    } else {
        stick_box.x + half_t + half_t_h + 1
    };
    let x1 = if divider_on_right {
        stick_box.x + stick_box.w - half_t - half_t_h - 1
    } else {
        stick_box.x + stick_box.w - BOX_THICKNESS - half_t_h - 2
    };
    let y0 = stick_box.y + BOX_THICKNESS + half_t_h + 1;
    let y1 = stick_box.y + stick_box.h - BOX_THICKNESS - half_t_h - 2;

    draw_rect_outline(backend, (x0, y0), (x1, y1), &style)
}

fn draw_crosshairs(
    backend: &mut BitMapBackend<'_>,
    config: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let w = config.width as i32;
    let h = config.height as i32;
    let mid_y = h / 2;
    let style = config.cross_color.stroke_width(CROSS_THICKNESS);

    for x_center in [w / 4, 3 * w / 4] {
        backend.draw_line((x_center, 0), (x_center, h), &style)?;
        backend.draw_line((x_center - w / 4, mid_y), (x_center + w / 4, mid_y), &style)?;
    }
    Ok(())
}

fn draw_trail(
    backend: &mut BitMapBackend<'_>,
    config: &RenderConfig,
    trail: &TrailBuffer,
) -> Result<(), Box<dyn Error>> {
    for segment in trail.segments(config.trail_color_start, config.trail_color_end) {
        backend.draw_line(
            segment.from,
            segment.to,
            &segment.color.stroke_width(config.trail_thickness),
        )?;
    }
    Ok(())
}
