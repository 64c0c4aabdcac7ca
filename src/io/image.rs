//! Image loading, rescaling and export

use std::path::Path;

use image::RgbImage;
use image::imageops::FilterType;

use crate::io::error::{Result, SimulationError};

/// Load any supported image as 8-bit RGB
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be read or decoded
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(|image| image.to_rgb8())
        .map_err(|source| SimulationError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })
}

/// Shrink `image` so neither side exceeds `limit`, keeping its aspect ratio
///
/// The longer side is scaled to exactly `limit`. Images already within the
/// limit are returned unchanged.
pub fn rescale_to_limit(image: RgbImage, limit: u32) -> RgbImage {
    let (width, height) = image.dimensions();
    if limit == 0 || (width <= limit && height <= limit) {
        return image;
    }

    let (new_width, new_height) = if width >= height {
        (limit, scaled_side(height, limit, width))
    } else {
        (scaled_side(width, limit, height), limit)
    };
    tracing::info!(width, height, new_width, new_height, "rescaling input");
    image::imageops::resize(&image, new_width, new_height, FilterType::Triangle)
}

// side * limit / longest, at least one pixel
fn scaled_side(side: u32, limit: u32, longest: u32) -> u32 {
    ((u64::from(side) * u64::from(limit)) / u64::from(longest)).max(1) as u32
}

/// Save `image` to `path`, creating parent directories
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns `FileSystem` if the directory cannot be created and `ImageExport`
/// if encoding or writing fails
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| SimulationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }
    image
        .save(path)
        .map_err(|source| SimulationError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
