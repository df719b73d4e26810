use crate::image_utils::LuminanceGrid;

// Scoring thresholds were tuned against stride 2.
pub struct NoiseEstimator {
    stride: usize,
}

impl NoiseEstimator {
    pub fn new() -> Self {
        Self { stride: 2 }
    }

    pub fn with_stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn estimate_noise(&self, grid: &LuminanceGrid) -> f64 {
        let (width, height) = (grid.width(), grid.height());
        if width < 3 || height < 3 {
            return 0.0;
        }

        let mut sum = 0.0;
        let mut count = 0usize;

        for y in (1..height - 1).step_by(self.stride) {
            for x in (1..width - 1).step_by(self.stride) {
                sum += Self::laplacian(grid, x, y).abs();
                count += 1;
            }
        }

        let noise = sum / count as f64 * 255.0;
        if noise.is_finite() { noise } else { 0.0 }
    }

    //  0 -1  0
    // -1  4 -1
    //  0 -1  0
    fn laplacian(grid: &LuminanceGrid, x: usize, y: usize) -> f64 {
        let c = grid.get(x, y);
        (c - grid.get(x, y - 1))
            + (c - grid.get(x, y + 1))
            + (c - grid.get(x - 1, y))
            + (c - grid.get(x + 1, y))
    }
}

impl Default for NoiseEstimator {
    fn default() -> Self {
        Self::new()
    }
}
