//! Dominant color extraction used to pick target colors from an input image

use image::RgbImage;

use crate::math::color::{Color, from_pixel, is_similar};

/// A representative color and the share of pixels it stands for
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorShare {
    /// First pixel color of the cluster
    pub color: Color,
    /// Share of all pixels in the cluster, in `[0, 1]`
    pub ratio: f32,
}

/// Cluster pixel colors greedily by similarity
///
/// Each pixel joins the first representative within `tolerance`, or becomes
/// a new representative. Shares are returned in discovery order (row-major).
pub fn color_profile(image: &RgbImage, tolerance: u8) -> Vec<ColorShare> {
    let mut clusters: Vec<(Color, u64)> = Vec::new();
    for pixel in image.pixels() {
        let color = from_pixel(*pixel);
        match clusters
            .iter_mut()
            .find(|(representative, _)| is_similar(*representative, color, tolerance))
        {
            Some((_, count)) => *count += 1,
            None => clusters.push((color, 1)),
        }
    }

    let total = u64::from(image.width()) * u64::from(image.height());
    if total == 0 {
        return Vec::new();
    }
    clusters
        .into_iter()
        .map(|(color, count)| ColorShare {
            color,
            ratio: count as f32 / total as f32,
        })
        .collect()
}

/// Rules for turning a profile into target colors
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetSelection {
    /// Shares at or above this are treated as backdrop
    pub upper: f32,
    /// Shares below this are noise
    pub lower: f32,
    /// Colors similar to this are never targets
    pub background: Color,
    /// Per-channel tolerance
    pub tolerance: u8,
    /// Most targets to keep
    pub limit: usize,
}

/// Pick up to `limit` target colors from `image`, most common first
///
/// Clusters outside `[lower, upper)` and clusters resembling the background
/// are dropped. Equal shares keep discovery order.
pub fn target_colors(image: &RgbImage, selection: &TargetSelection) -> Vec<Color> {
    let mut shares: Vec<ColorShare> = color_profile(image, selection.tolerance)
        .into_iter()
        .filter(|share| share.ratio < selection.upper && share.ratio >= selection.lower)
        .collect();
    shares.sort_by(|a, b| b.ratio.total_cmp(&a.ratio));

    let targets: Vec<Color> = shares
        .into_iter()
        .map(|share| share.color)
        .filter(|&color| !is_similar(selection.background, color, selection.tolerance))
        .take(selection.limit)
        .collect();

    tracing::debug!(?targets, "target colors selected");
    targets
}
