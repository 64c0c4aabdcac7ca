//! Oil painting post-filter
//!
//! Every output pixel takes the mean color of the most common brightness
//! bucket inside a disc around it, which flattens fine noise into strokes.

use image::{Rgb, RgbImage};

use crate::math::color::brightness;

/// Apply the oil painting filter
///
/// `radius` is the disc radius in pixels (strictly inside) and `levels` the
/// number of brightness buckets. A zero radius or level count returns a copy.
pub fn oil_paint(source: &RgbImage, radius: u32, levels: usize) -> RgbImage {
    if radius == 0 || levels == 0 {
        return source.clone();
    }
    let (width, height) = source.dimensions();
    let radius_squared = u64::from(radius) * u64::from(radius);

    let mut buckets = vec![Bucket::default(); levels];
    RgbImage::from_fn(width, height, |x, y| {
        buckets.fill(Bucket::default());
        let mut best: Option<usize> = None;

        for ny in y.saturating_sub(radius)..=(y + radius).min(height - 1) {
            for nx in x.saturating_sub(radius)..=(x + radius).min(width - 1) {
                let dx = u64::from(nx.abs_diff(x));
                let dy = u64::from(ny.abs_diff(y));
                if dx * dx + dy * dy >= radius_squared {
                    continue;
                }
                let Rgb(channels) = *source.get_pixel(nx, ny);
                let index = bucket_index(channels, levels);
                let Some(bucket) = buckets.get_mut(index) else {
                    continue;
                };
                bucket.add(channels);
                let count = bucket.count;
                let beaten = best
                    .and_then(|b| buckets.get(b))
                    .is_none_or(|current| current.count < count);
                if beaten {
                    best = Some(index);
                }
            }
        }

        best.and_then(|b| buckets.get(b))
            .map_or_else(|| *source.get_pixel(x, y), Bucket::mean)
    })
}

fn bucket_index(channels: [u8; 3], levels: usize) -> usize {
    let index = (brightness(channels) / 256.0 * levels as f64) as usize;
    index.min(levels.saturating_sub(1))
}

#[derive(Clone, Copy, Default)]
struct Bucket {
    count: u32,
    sums: [u32; 3],
}

impl Bucket {
    fn add(&mut self, channels: [u8; 3]) {
        self.count += 1;
        for (sum, channel) in self.sums.iter_mut().zip(channels) {
            *sum += u32::from(channel);
        }
    }

    fn mean(&self) -> Rgb<u8> {
        let count = self.count.max(1);
        Rgb(self.sums.map(|sum| (sum / count) as u8))
    }
}
