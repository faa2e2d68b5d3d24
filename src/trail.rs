// src/trail.rs

use plotters::style::RGBColor;
use std::collections::VecDeque;

/// One colored line segment of a rendered trail. Thickness is applied at
/// draw time from the render configuration.
#[derive(Debug, Clone, Copy)]
pub struct TrailSegment {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub color: RGBColor,
}

/// Bounded FIFO of the most recent stick positions. Pushing beyond the
/// capacity evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<(i32, i32)>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    pub fn push(&mut self, position: (i32, i32)) {
        self.points.push_back(position);
        while self.points.len() > self.capacity {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = &(i32, i32)> {
        self.points.iter()
    }

    /// Segments between consecutive positions, colored by a linear blend from
    /// `start_color` to `end_color`: segment `i` (1-based) gets blend factor
    /// `i / len`, so newer segments sit closer to the end color. An empty or
    /// single-element buffer yields no segments.
    pub fn segments(&self, start_color: RGBColor, end_color: RGBColor) -> Vec<TrailSegment> {
        let len = self.points.len();
        if len < 2 {
            return Vec::new();
        }
        (1..len)
            .map(|i| {
                let alpha = i as f64 / len as f64;
                TrailSegment {
                    from: self.points[i - 1],
                    to: self.points[i],
                    color: blend_color(start_color, end_color, alpha),
                }
            })
            .collect()
    }
}

fn blend_color(start: RGBColor, end: RGBColor, alpha: f64) -> RGBColor {
    let channel = |s: u8, e: u8| (s as f64 + (e as f64 - s as f64) * alpha) as u8;
    RGBColor(
        channel(start.0, end.0),
        channel(start.1, end.1),
        channel(start.2, end.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: RGBColor = RGBColor(0, 0, 0);
    const END: RGBColor = RGBColor(255, 0, 0);

    #[test]
    fn holds_everything_below_capacity() {
        let mut trail = TrailBuffer::new(8);
        for i in 0..5 {
            trail.push((i, i));
            assert_eq!(trail.len(), (i + 1) as usize);
        }
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut trail = TrailBuffer::new(8);
        for i in 0..20 {
            trail.push((i, 0));
            assert!(trail.len() <= 8);
        }
        assert_eq!(trail.len(), 8);
        let xs: Vec<i32> = trail.positions().map(|p| p.0).collect();
        assert_eq!(xs, (12..20).collect::<Vec<_>>());
    }

    #[test]
    fn short_buffers_yield_no_segments() {
        let mut trail = TrailBuffer::new(8);
        assert!(trail.segments(START, END).is_empty());
        trail.push((1, 1));
        assert!(trail.segments(START, END).is_empty());
    }

    #[test]
    fn segment_count_is_len_minus_one() {
        let mut trail = TrailBuffer::new(8);
        for i in 0..6 {
            trail.push((i, 0));
        }
        let segments = trail.segments(START, END);
        assert_eq!(segments.len(), 5);
        assert_eq!(segments[0].from, (0, 0));
        assert_eq!(segments[4].to, (5, 0));
    }

    #[test]
    fn segment_colors_blend_toward_the_end_color() {
        let mut trail = TrailBuffer::new(4);
        for i in 0..4 {
            trail.push((i, 0));
        }
        let segments = trail.segments(START, END);
        // Blend factors 1/4, 2/4, 3/4 of the red channel, truncated.
        assert_eq!(segments[0].color.0, 63);
        assert_eq!(segments[1].color.0, 127);
        assert_eq!(segments[2].color.0, 191);
        assert!(segments.iter().all(|s| s.color.1 == 0 && s.color.2 == 0));
    }

    #[test]
    fn zero_capacity_stays_empty() {
        let mut trail = TrailBuffer::new(0);
        trail.push((1, 1));
        assert!(trail.is_empty());
    }
}
