//! Tests for color similarity, scaling and brightness

#[cfg(test)]
mod tests {
    use antpaint::math::color::{BLACK, brightness, from_pixel, is_similar, scale, to_pixel};

    // Tests that similarity is inclusive at the tolerance on every channel
    // Verified by switching the comparison to strictly less than
    #[test]
    fn test_is_similar_tolerance_boundary() {
        let source = [100, 100, 100];
        assert!(is_similar(source, [150, 50, 100], 50));
        assert!(!is_similar(source, [151, 100, 100], 50));
        assert!(!is_similar(source, [100, 100, 49], 50));
    }

    // Tests that a zero tolerance only accepts identical colors
    // Verified by ignoring the blue channel
    #[test]
    fn test_is_similar_zero_tolerance() {
        assert!(is_similar([1, 2, 3], [1, 2, 3], 0));
        assert!(!is_similar([1, 2, 3], [1, 2, 4], 0));
    }

    // Tests channel scaling with truncation and clamped intensity
    // Verified by rounding instead of truncating
    #[test]
    fn test_scale() {
        assert_eq!(scale([200, 101, 50], 0.5), [100, 50, 25]);
        assert_eq!(scale([200, 101, 50], 2.0), [200, 101, 50]);
        assert_eq!(scale([200, 101, 50], -1.0), BLACK);
    }

    // Tests brightness as the channel mean
    // Verified by dividing by 2 instead of 3
    #[test]
    fn test_brightness() {
        assert!((brightness([30, 60, 90]) - 60.0).abs() < f64::EPSILON);
        assert!(brightness(BLACK).abs() < f64::EPSILON);
    }

    // Tests conversion to and from canvas pixels
    // Verified by swapping red and blue in the conversion
    #[test]
    fn test_pixel_conversion() {
        let pixel = to_pixel([1, 2, 3]);
        assert_eq!(pixel.0, [1, 2, 3]);
        assert_eq!(from_pixel(pixel), [1, 2, 3]);
    }
}
