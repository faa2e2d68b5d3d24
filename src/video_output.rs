// src/video_output.rs

use std::error::Error;
use std::path::Path;

use ffmpeg_next as ffmpeg;

use ffmpeg::software::scaling;
use ffmpeg::{codec, encoder, format, frame, Packet, Rational};

use crate::constants::VIDEO_BITRATE;

/// Synchronous video output stream. Frames arrive as packed RGB24 buffers in
/// append order and are converted, encoded, and muxed one at a time; the
/// container is finalized by `finish`.
pub struct VideoSink {
    octx: format::context::Output,
    encoder: encoder::video::Encoder,
    scaler: scaling::Context,
    stream_index: usize,
    stream_time_base: Rational,
    encoder_time_base: Rational,
    width: u32,
    height: u32,
    frame_index: i64,
}

impl VideoSink {
    /// Opens the output container (format inferred from the path), sets up an
    /// H.264 encoder — falling back to the always-available MPEG-4 encoder —
    /// and writes the container header.
    pub fn create(
        output_path: &Path,
        width: u32,
        height: u32,
        fps: u32,
    ) -> Result<Self, Box<dyn Error>> {
        ffmpeg::init()?;

        let mut octx = format::output(&output_path)?;
        let global_header = octx.format().flags().contains(format::Flags::GLOBAL_HEADER);

        let video_codec = encoder::find(codec::Id::H264)
            .or_else(|| encoder::find(codec::Id::MPEG4))
            .ok_or("Error: no H.264 or MPEG-4 video encoder available in this ffmpeg build")?;

        let encoder_time_base = Rational::new(1, fps as i32);
        let mut video = codec::context::Context::new_with_codec(video_codec)
            .encoder()
            .video()?;
        video.set_width(width);
        video.set_height(height);
        video.set_format(format::Pixel::YUV420P);
        video.set_time_base(encoder_time_base);
        video.set_frame_rate(Some(Rational::new(fps as i32, 1)));
        video.set_bit_rate(VIDEO_BITRATE);
        if global_header {
            video.set_flags(codec::Flags::GLOBAL_HEADER);
        }
        let opened = video.open_as(video_codec)?;

        let stream_index = {
            let mut stream = octx.add_stream(video_codec)?;
            stream.set_parameters(&opened);
            stream.index()
        };

        octx.write_header()?;
        let stream_time_base = octx
            .stream(stream_index)
            .ok_or("Error: output stream missing after header write")?
            .time_base();

        let scaler = scaling::Context::get(
            format::Pixel::RGB24,
            width,
            height,
            format::Pixel::YUV420P,
            width,
            height,
            scaling::Flags::BILINEAR,
        )?;

        Ok(Self {
            octx,
            encoder: opened,
            scaler,
            stream_index,
            stream_time_base,
            encoder_time_base,
            width,
            height,
            frame_index: 0,
        })
    }

    /// Encodes and muxes one packed RGB24 frame of the configured size.
    pub fn write_frame(&mut self, rgb: &[u8]) -> Result<(), Box<dyn Error>> {
        let row_len = (self.width * 3) as usize;
        if rgb.len() != row_len * self.height as usize {
            return Err(format!(
                "Error: frame buffer size {} does not match {}x{} RGB24",
                rgb.len(),
                self.width,
                self.height
            )
            .into());
        }

        let mut src = frame::Video::new(format::Pixel::RGB24, self.width, self.height);
        // The frame's rows may be padded; copy row by row at the frame stride.
        let stride = src.stride(0);
        let data = src.data_mut(0);
        for (y, row) in rgb.chunks_exact(row_len).enumerate() {
            let offset = y * stride;
            data[offset..offset + row_len].copy_from_slice(row);
        }

        let mut dst = frame::Video::new(format::Pixel::YUV420P, self.width, self.height);
        self.scaler.run(&src, &mut dst)?;
        dst.set_pts(Some(self.frame_index));
        self.frame_index += 1;

        self.encoder.send_frame(&dst)?;
        self.write_pending_packets()
    }

    /// Drains the encoder and writes the container trailer. Callers invoke
    /// this on the error path too, so a partially written file is still a
    /// finalized container.
    pub fn finish(mut self) -> Result<(), Box<dyn Error>> {
        self.encoder.send_eof()?;
        self.write_pending_packets()?;
        self.octx.write_trailer()?;
        Ok(())
    }

    pub fn frames_written(&self) -> i64 {
        self.frame_index
    }

    fn write_pending_packets(&mut self) -> Result<(), Box<dyn Error>> {
        let mut packet = Packet::empty();
        while self.encoder.receive_packet(&mut packet).is_ok() {
            packet.set_stream(self.stream_index);
            packet.rescale_ts(self.encoder_time_base, self.stream_time_base);
            packet.write_interleaved(&mut self.octx)?;
        }
        Ok(())
    }
}

// src/video_output.rs
