//! RGB color helpers shared by the grid, the Markov chains and the image filters

/// Opaque RGB color, stored as `[red, green, blue]`
///
/// Plain arrays keep colors `Ord`, so ordered maps over them iterate the same
/// way on every run and seeded simulations stay reproducible.
pub type Color = [u8; 3];

/// Pure black
pub const BLACK: Color = [0, 0, 0];

/// Check whether every channel of `target` lies within `tolerance` of `source`
pub fn is_similar(source: Color, target: Color, tolerance: u8) -> bool {
    source
        .iter()
        .zip(target.iter())
        .all(|(&s, &t)| s.abs_diff(t) <= tolerance)
}

/// Scale every channel by `intensity`, clamped to `[0, 1]`
///
/// Channels are truncated toward zero.
pub fn scale(color: Color, intensity: f32) -> Color {
    let intensity = intensity.clamp(0.0, 1.0);
    color.map(|channel| (f32::from(channel) * intensity) as u8)
}

/// Mean of the three channels, in `[0, 255]`
pub fn brightness(color: Color) -> f64 {
    color.iter().map(|&c| f64::from(c)).sum::<f64>() / 3.0
}

/// Convert to the pixel type used by the canvas
pub const fn to_pixel(color: Color) -> image::Rgb<u8> {
    image::Rgb(color)
}

/// Convert a canvas pixel back into a color
pub const fn from_pixel(pixel: image::Rgb<u8>) -> Color {
    pixel.0
}
