//! Tests for coverage, mosaic scoring and run advice

#[cfg(test)]
mod tests {
    use antpaint::analysis::evaluation::{
        Advice, Evaluation, EvaluationParams, coverage, evaluate, mosaic_score,
    };
    use antpaint::math::color::{BLACK, Color};
    use image::{Rgb, RgbImage};

    const RED: Color = [200, 0, 0];
    const GREEN: Color = [0, 200, 0];

    fn params() -> EvaluationParams {
        EvaluationParams {
            background: BLACK,
            tolerance: 50,
            neighborhood: 1,
            threshold: 0.5,
        }
    }

    // Tests coverage counts pixels unlike the background
    // Verified by counting background pixels
    #[test]
    fn test_coverage() {
        let blank = RgbImage::new(4, 4);
        assert!(coverage(&blank, BLACK, 50).abs() < f32::EPSILON);

        let half = RgbImage::from_fn(4, 4, |x, _| Rgb(if x < 2 { RED } else { BLACK }));
        assert!((coverage(&half, BLACK, 50) - 0.5).abs() < f32::EPSILON);
    }

    // Tests a flat canvas has no mosaic texture
    // Verified by counting similar neighbors as different
    #[test]
    fn test_mosaic_flat() {
        let flat = RgbImage::from_pixel(5, 5, Rgb(RED));
        assert!(mosaic_score(&flat, &params()).abs() < f32::EPSILON);
    }

    // Tests single-pixel stripes are a full mosaic
    // Verified by requiring every neighbor to differ
    #[test]
    fn test_mosaic_stripes() {
        let stripes = RgbImage::from_fn(6, 6, |x, _| Rgb(if x % 2 == 0 { RED } else { GREEN }));
        assert!((mosaic_score(&stripes, &params()) - 1.0).abs() < f32::EPSILON);
    }

    // Tests an unpainted canvas scores zero instead of dividing by zero
    // Verified by returning one for empty canvases
    #[test]
    fn test_mosaic_unpainted() {
        let blank = RgbImage::new(3, 3);
        assert!(mosaic_score(&blank, &params()).abs() < f32::EPSILON);
    }

    // Tests evaluate combines both scores
    // Verified by swapping the fields
    #[test]
    fn test_evaluate() {
        let stripes = RgbImage::from_fn(4, 4, |x, _| Rgb(if x % 2 == 0 { RED } else { GREEN }));
        let evaluation = evaluate(&stripes, &params());
        assert!((evaluation.coverage - 1.0).abs() < f32::EPSILON);
        assert!((evaluation.mosaic - 1.0).abs() < f32::EPSILON);
    }

    // Tests advice thresholds
    // Verified by making the coverage bounds exclusive
    #[test]
    fn test_advice() {
        let verdict = |coverage, mosaic| {
            let evaluation = Evaluation { coverage, mosaic };
            (evaluation.coverage_advice(), evaluation.mosaic_advice())
        };
        assert_eq!(verdict(0.15, 0.95), (Advice::LowCoverage, Advice::Fine));
        assert_eq!(verdict(0.5, 0.87), (Advice::Fine, Advice::LowMosaic));
        assert_eq!(verdict(0.85, 0.5), (Advice::HighCoverage, Advice::Rerun));
    }
}
