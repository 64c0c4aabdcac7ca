//! Scores for a finished canvas

use image::RgbImage;

use crate::math::color::{Color, from_pixel, is_similar};

/// Coverage and mosaic texture of a canvas
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Share of pixels that differ from the background
    pub coverage: f32,
    /// Share of painted pixels sitting in a varied neighborhood
    pub mosaic: f32,
}

/// Knobs for [`evaluate`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluationParams {
    /// Canvas background
    pub background: Color,
    /// Per-channel tolerance
    pub tolerance: u8,
    /// Neighborhood radius in pixels
    pub neighborhood: u32,
    /// Share of differing neighbors that makes a pixel part of a mosaic
    pub threshold: f32,
}

/// Verdict on a score, used for run summaries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advice {
    /// Within the expected range
    Fine,
    /// Too little of the canvas is painted
    LowCoverage,
    /// Almost everything is painted
    HighCoverage,
    /// Texture is too flat to keep
    Rerun,
    /// Texture is flatter than usual
    LowMosaic,
}

impl Evaluation {
    /// Advice on coverage
    pub fn coverage_advice(&self) -> Advice {
        if self.coverage <= 0.15 {
            Advice::LowCoverage
        } else if self.coverage >= 0.85 {
            Advice::HighCoverage
        } else {
            Advice::Fine
        }
    }

    /// Advice on mosaic texture
    pub fn mosaic_advice(&self) -> Advice {
        if self.mosaic < 0.85 {
            Advice::Rerun
        } else if self.mosaic < 0.90 {
            Advice::LowMosaic
        } else {
            Advice::Fine
        }
    }
}

/// Share of pixels not similar to the background
pub fn coverage(image: &RgbImage, background: Color, tolerance: u8) -> f32 {
    let total = u64::from(image.width()) * u64::from(image.height());
    if total == 0 {
        return 0.0;
    }
    let painted = image
        .pixels()
        .filter(|pixel| !is_similar(background, from_pixel(**pixel), tolerance))
        .count();
    painted as f32 / total as f32
}

/// Share of painted pixels whose neighborhood mostly differs from them
///
/// The neighborhood is the square of `neighborhood` pixels around the pixel,
/// clipped at the border. A canvas with nothing painted scores zero.
pub fn mosaic_score(image: &RgbImage, params: &EvaluationParams) -> f32 {
    let (width, height) = image.dimensions();
    let radius = params.neighborhood;
    let mut painted = 0_u64;
    let mut mosaics = 0_u64;

    for (x, y, pixel) in image.enumerate_pixels() {
        let color = from_pixel(*pixel);
        if is_similar(params.background, color, params.tolerance) {
            continue;
        }
        painted += 1;

        let mut neighbors = 0_u32;
        let mut different = 0_u32;
        for ny in y.saturating_sub(radius)..=(y + radius).min(height - 1) {
            for nx in x.saturating_sub(radius)..=(x + radius).min(width - 1) {
                if nx == x && ny == y {
                    continue;
                }
                neighbors += 1;
                let neighbor = from_pixel(*image.get_pixel(nx, ny));
                if !is_similar(color, neighbor, params.tolerance) {
                    different += 1;
                }
            }
        }
        if neighbors > 0 && different as f32 / neighbors as f32 > params.threshold {
            mosaics += 1;
        }
    }

    if painted == 0 {
        0.0
    } else {
        mosaics as f32 / painted as f32
    }
}

/// Score a canvas
pub fn evaluate(image: &RgbImage, params: &EvaluationParams) -> Evaluation {
    Evaluation {
        coverage: coverage(image, params.background, params.tolerance),
        mosaic: mosaic_score(image, params),
    }
}
