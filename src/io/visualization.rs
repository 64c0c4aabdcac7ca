//! Canvas snapshots and looping GIF export

use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, RgbImage};

use crate::io::error::{Result, SimulationError};

/// Collects canvas frames at a fixed tick interval
#[derive(Debug, Clone, Default)]
pub struct SnapshotCapture {
    frames: Vec<RgbImage>,
    interval: u64,
}

impl SnapshotCapture {
    /// Capture every `interval` ticks; zero disables periodic capture
    pub const fn new(interval: u64) -> Self {
        Self {
            frames: Vec::new(),
            interval,
        }
    }

    /// Whether tick `tick` falls on the capture interval
    pub const fn is_due(&self, tick: u64) -> bool {
        self.interval > 0 && tick > 0 && tick.is_multiple_of(self.interval)
    }

    /// Capture `canvas` if `tick` is due, returning whether a frame was taken
    pub fn record(&mut self, tick: u64, canvas: &RgbImage) -> bool {
        if self.is_due(tick) {
            self.capture(canvas);
            true
        } else {
            false
        }
    }

    /// Capture `canvas` unconditionally
    pub fn capture(&mut self, canvas: &RgbImage) {
        self.frames.push(canvas.clone());
    }

    /// Frames captured so far
    pub fn frames(&self) -> &[RgbImage] {
        &self.frames
    }

    /// Write the frames as an endlessly looping GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frame was captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(SimulationError::InvalidSourceData {
                reason: "No canvas snapshots captured".to_string(),
            });
        }

        if let Some(parent) = output_path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).map_err(|e| SimulationError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| SimulationError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let export_error = |e| SimulationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        };
        let mut encoder = GifEncoder::new(file);
        encoder.set_repeat(Repeat::Infinite).map_err(export_error)?;

        let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);
        let frames = self.frames.iter().map(|canvas| {
            let rgba = DynamicImage::ImageRgb8(canvas.clone()).to_rgba8();
            Frame::from_parts(rgba, 0, 0, delay)
        });
        encoder.encode_frames(frames).map_err(export_error)?;

        Ok(())
    }
}
