use ai_image_forensics::{
    analysis::{
        fft::{ComplexGrid, FftEngine, TwiddleMode},
        spectrum::SpectrumAnalyzer,
    },
    image_utils::LuminanceGrid,
};
use ndarray::Array2;
use rustfft::{FftPlanner, num_complex::Complex64};

fn textured_grid(n: usize) -> LuminanceGrid {
    let data = Array2::from_shape_fn((n, n), |(y, x)| {
        let (x, y) = (x as f64, y as f64);
        let v = 0.5 + 0.25 * (x * 0.37).sin() + 0.2 * (y * 1.3 + x * 0.11).cos();
        v.clamp(0.0, 1.0)
    });
    LuminanceGrid::from_array(data)
}

fn reference_fft_2d(grid: &LuminanceGrid) -> Vec<Complex64> {
    let n = grid.width();
    let mut data = grid
        .as_array()
        .iter()
        .map(|&v| Complex64::new(v, 0.0))
        .collect::<Vec<_>>();

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(n);

    for row in data.chunks_exact_mut(n) {
        fft.process(row);
    }

    let mut column = vec![Complex64::new(0.0, 0.0); n];
    for x in 0..n {
        for y in 0..n {
            column[y] = data[y * n + x];
        }
        fft.process(&mut column);
        for y in 0..n {
            data[y * n + x] = column[y];
        }
    }

    data
}

#[test]
fn matches_reference_transform() {
    let grid = textured_grid(32);
    let expected = reference_fft_2d(&grid);

    for mode in [TwiddleMode::Incremental, TwiddleMode::Direct] {
        let mut complex = ComplexGrid::from_luminance(&grid);
        FftEngine::with_twiddle_mode(mode).transform(&mut complex);

        for (a, b) in complex.values().iter().zip(&expected) {
            assert!((a - b).norm() < 1e-9, "{:?}: {} vs {}", mode, a, b);
        }
    }
}

#[test]
fn preserves_energy_up_to_n_squared() {
    let n = 256;
    let grid = textured_grid(n);
    let input_energy = grid.as_array().iter().map(|v| v * v).sum::<f64>();

    let mut complex = ComplexGrid::from_luminance(&grid);
    FftEngine::new().transform(&mut complex);

    let expected = (n * n) as f64 * input_energy;
    let relative = (complex.energy() - expected).abs() / expected;
    assert!(relative < 1e-9, "relative error {}", relative);
}

#[test]
fn zero_grid_has_zero_magnitudes() {
    let grid = LuminanceGrid::from_array(Array2::zeros((256, 256)));
    let mut complex = ComplexGrid::from_luminance(&grid);
    FftEngine::new().transform(&mut complex);

    let spectrum = SpectrumAnalyzer::magnitude_spectrum(&complex);
    assert!(spectrum.as_array().iter().all(|&v| v == 0.0));
}

#[test]
fn spectrum_is_finite_and_non_negative() {
    let result = SpectrumAnalyzer::new().analyze(&textured_grid(64));

    assert!(result.spectrum.as_array().iter().all(|&v| v.is_finite() && v >= 0.0));
    assert!(result.anomaly_score.is_finite());
    assert!(result.anomaly_score >= 0.0);
}
