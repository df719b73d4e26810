use std::f64::consts::PI;

use num_complex::Complex64;

use crate::image_utils::LuminanceGrid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwiddleMode {
    #[default]
    Incremental,
    Direct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplexGrid {
    width: usize,
    height: usize,
    data: Vec<Complex64>,
}

impl ComplexGrid {
    pub fn zeros(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![Complex64::new(0.0, 0.0); width * height],
        }
    }

    pub fn from_luminance(grid: &LuminanceGrid) -> Self {
        let data = grid
            .as_array()
            .iter()
            .map(|&v| Complex64::new(v, 0.0))
            .collect();

        Self {
            width: grid.width(),
            height: grid.height(),
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Complex64 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: Complex64) {
        self.data[y * self.width + x] = value;
    }

    pub fn values(&self) -> &[Complex64] {
        &self.data
    }

    pub fn energy(&self) -> f64 {
        self.data.iter().map(|c| c.norm_sqr()).sum()
    }
}

pub struct FftEngine {
    twiddle: TwiddleMode,
    column: Vec<Complex64>,
}

impl FftEngine {
    pub fn new() -> Self {
        Self::with_twiddle_mode(TwiddleMode::default())
    }

    pub fn with_twiddle_mode(twiddle: TwiddleMode) -> Self {
        Self {
            twiddle,
            column: Vec::new(),
        }
    }

    /// # Panics
    ///
    /// Panics if the grid is not square with a power-of-two side. Sampled
    /// frequency grids always satisfy this.
    pub fn transform(&mut self, grid: &mut ComplexGrid) {
        assert!(
            grid.width == grid.height && grid.width.is_power_of_two(),
            "FFT requires a square power-of-two grid, got {}x{}",
            grid.width,
            grid.height
        );

        let n = grid.width;

        for row in grid.data.chunks_exact_mut(n) {
            fft_1d(row, self.twiddle);
        }

        self.column.resize(n, Complex64::new(0.0, 0.0));
        for x in 0..n {
            for y in 0..n {
                self.column[y] = grid.data[y * n + x];
            }
            fft_1d(&mut self.column, self.twiddle);
            for y in 0..n {
                grid.data[y * n + x] = self.column[y];
            }
        }
    }
}

impl Default for FftEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn bit_reverse_permute(buf: &mut [Complex64]) {
    let n = buf.len();
    let mut j = 0;

    for i in 0..n {
        if i < j {
            buf.swap(i, j);
        }
        let mut m = n >> 1;
        while m >= 1 && j >= m {
            j -= m;
            m >>= 1;
        }
        j += m;
    }
}

fn fft_1d(buf: &mut [Complex64], twiddle: TwiddleMode) {
    let n = buf.len();
    if n <= 1 {
        return;
    }

    bit_reverse_permute(buf);

    let mut m = 2;
    while m <= n {
        let half = m / 2;
        let angle = -2.0 * PI / m as f64;
        let w_m = Complex64::from_polar(1.0, angle);

        for k in (0..n).step_by(m) {
            let mut w = Complex64::new(1.0, 0.0);
            for j in 0..half {
                if twiddle == TwiddleMode::Direct {
                    w = Complex64::from_polar(1.0, angle * j as f64);
                }

                let t = w * buf[k + j + half];
                let u = buf[k + j];
                buf[k + j] = u + t;
                buf[k + j + half] = u - t;

                if twiddle == TwiddleMode::Incremental {
                    w *= w_m;
                }
            }
        }

        m <<= 1;
    }
}
