//! Tests for the oil painting filter

#[cfg(test)]
mod tests {
    use antpaint::io::painting::oil_paint;
    use image::{Rgb, RgbImage};

    const RED: [u8; 3] = [200, 0, 0];
    const WHITE: [u8; 3] = [255, 255, 255];

    // Tests a flat image is left as it is
    // Verified by averaging all buckets
    #[test]
    fn test_flat_image_unchanged() {
        let image = RgbImage::from_pixel(7, 5, Rgb(RED));
        assert_eq!(oil_paint(&image, 3, 24), image);
    }

    // Tests a lone bright speck is painted over by its surroundings
    // Verified by preferring the pixel's own bucket
    #[test]
    fn test_speck_removed() {
        let mut image = RgbImage::from_pixel(9, 9, Rgb(RED));
        image.put_pixel(4, 4, Rgb(WHITE));
        let painted = oil_paint(&image, 2, 24);
        assert!(painted.pixels().all(|pixel| pixel.0 == RED));
    }

    // Tests bucket means blend colors of similar brightness
    // Verified by taking the center pixel of the winning bucket
    #[test]
    fn test_bucket_mean() {
        let image = RgbImage::from_fn(2, 1, |x, _| Rgb(if x == 0 { [100, 0, 0] } else { [0, 0, 110] }));
        let painted = oil_paint(&image, 2, 1);
        assert!(painted.pixels().all(|pixel| pixel.0 == [50, 0, 55]));
    }

    // Tests disabled filters copy the input
    // Verified by filtering with a radius of one instead
    #[test]
    fn test_disabled_filter() {
        let image = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8, y as u8, 0]));
        assert_eq!(oil_paint(&image, 0, 24), image);
        assert_eq!(oil_paint(&image, 3, 0), image);
    }
}
