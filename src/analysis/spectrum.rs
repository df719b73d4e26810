use log::debug;
use ndarray::Array2;

use crate::{
    FrequencyResult,
    analysis::fft::{ComplexGrid, FftEngine, TwiddleMode},
    image_utils::LuminanceGrid,
};

// DC sits at (N/2, N/2).
#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumGrid {
    data: Array2<f64>,
}

impl SpectrumGrid {
    pub fn size(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[[y, x]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }
}

pub struct SpectrumAnalyzer {
    radius_fraction: f64,
    twiddle: TwiddleMode,
}

impl SpectrumAnalyzer {
    pub fn new() -> Self {
        Self {
            radius_fraction: 0.4,
            twiddle: TwiddleMode::default(),
        }
    }

    pub fn with_radius_fraction(mut self, fraction: f64) -> Self {
        self.radius_fraction = fraction;
        self
    }

    pub fn with_twiddle_mode(mut self, twiddle: TwiddleMode) -> Self {
        self.twiddle = twiddle;
        self
    }

    pub fn analyze(&self, grid: &LuminanceGrid) -> FrequencyResult {
        let mut complex = ComplexGrid::from_luminance(grid);
        FftEngine::with_twiddle_mode(self.twiddle).transform(&mut complex);

        let spectrum = Self::magnitude_spectrum(&complex);
        let anomaly_score = Self::anomaly_score(&spectrum, self.radius_fraction);
        debug!("spectral anomaly score {:.4}", anomaly_score);

        FrequencyResult {
            anomaly_score,
            spectrum,
        }
    }

    pub fn magnitude_spectrum(freq: &ComplexGrid) -> SpectrumGrid {
        let (width, height) = (freq.width(), freq.height());
        let (cx, cy) = (width / 2, height / 2);
        let mut data = Array2::zeros((height, width));

        for y in 0..height {
            for x in 0..width {
                let magnitude = freq.get(x, y).norm();
                let ny = (y + cy) % height;
                let nx = (x + cx) % width;
                data[[ny, nx]] = (1.0 + magnitude).ln();
            }
        }

        SpectrumGrid { data }
    }

    pub fn anomaly_score(spectrum: &SpectrumGrid, radius_fraction: f64) -> f64 {
        let size = spectrum.size();
        let center = (size / 2) as f64;
        let radius = size as f64 * radius_fraction;

        let mut high_freq_energy = 0.0;
        let mut count = 0usize;

        for ((y, x), &value) in spectrum.data.indexed_iter() {
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            if (dx * dx + dy * dy).sqrt() > radius {
                high_freq_energy += value;
                count += 1;
            }
        }

        if count == 0 {
            return 0.0;
        }

        let score = high_freq_energy / count as f64;
        if score.is_finite() { score } else { 0.0 }
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
