use image::RgbImage;

pub struct SmoothnessEstimator {
    stride: u32,
    flat_threshold: u32,
}

impl SmoothnessEstimator {
    pub fn new() -> Self {
        Self {
            stride: 2,
            flat_threshold: 5,
        }
    }

    pub fn with_stride(mut self, stride: u32) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn with_flat_threshold(mut self, threshold: u32) -> Self {
        self.flat_threshold = threshold;
        self
    }

    pub fn estimate_flatness(&self, image: &RgbImage) -> f64 {
        let (width, height) = image.dimensions();
        let mut flat_pairs = 0usize;
        let mut total_pairs = 0usize;

        for y in (0..height).step_by(self.stride as usize) {
            for x in (0..width).step_by(self.stride as usize) {
                if x + 1 >= width {
                    continue;
                }

                let a = image.get_pixel(x, y);
                let b = image.get_pixel(x + 1, y);
                let diff = a
                    .0
                    .iter()
                    .zip(b.0.iter())
                    .map(|(&p, &q)| p.abs_diff(q) as u32)
                    .sum::<u32>();

                if diff < self.flat_threshold {
                    flat_pairs += 1;
                }
                total_pairs += 1;
            }
        }

        if total_pairs == 0 {
            return 0.0;
        }

        100.0 * flat_pairs as f64 / total_pairs as f64
    }
}

impl Default for SmoothnessEstimator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;

    #[test]
    fn test_uniform_image_is_fully_flat() {
        let image = RgbImage::from_pixel(33, 17, Rgb([120, 64, 200]));
        assert_eq!(SmoothnessEstimator::new().estimate_flatness(&image), 100.0);
    }

    #[test]
    fn test_checkerboard_has_no_flat_pairs() {
        let image = RgbImage::from_fn(64, 64, |x, y| {
            if (x + y) % 2 == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        });
        assert_eq!(SmoothnessEstimator::new().estimate_flatness(&image), 0.0);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        // summed difference of exactly 5 is not flat, 4 is
        let image = RgbImage::from_fn(4, 1, |x, _| match x {
            0 => Rgb([10, 10, 10]),
            1 => Rgb([12, 12, 11]),
            2 => Rgb([10, 10, 10]),
            _ => Rgb([12, 11, 11]),
        });
        assert_eq!(SmoothnessEstimator::new().estimate_flatness(&image), 50.0);
    }

    #[test]
    fn test_single_column_has_no_pairs() {
        let image = RgbImage::from_pixel(1, 10, Rgb([1, 1, 1]));
        assert_eq!(SmoothnessEstimator::new().estimate_flatness(&image), 0.0);
    }
}
