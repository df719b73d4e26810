use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::filter::laplacian_filter;

use crate::{analysis::spectrum::SpectrumGrid, image_utils::normalize_by_max};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    HeatMap,
    Grayscale,
}

#[derive(Debug, Clone)]
pub struct VisualizationConfig {
    pub color_scheme: ColorScheme,
    pub high_pass_offset: i32,
}

impl Default for VisualizationConfig {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Grayscale,
            high_pass_offset: 128,
        }
    }
}

pub struct Visualizer {
    config: VisualizationConfig,
}

impl Visualizer {
    pub fn new() -> Self {
        Self {
            config: VisualizationConfig::default(),
        }
    }

    pub fn with_config(config: VisualizationConfig) -> Self {
        Self { config }
    }

    pub fn spectrum_image(&self, spectrum: &SpectrumGrid) -> RgbImage {
        let normalized = normalize_by_max(spectrum.as_array());
        let (height, width) = normalized.dim();
        let mut image = RgbImage::new(width as u32, height as u32);

        for ((y, x), &v) in normalized.indexed_iter() {
            image.put_pixel(x as u32, y as u32, self.intensity_to_color(v as f32));
        }

        image
    }

    // 4C - U - D - L - R, shifted to mid-gray
    pub fn high_pass_image(&self, gray: &GrayImage) -> GrayImage {
        let response = laplacian_filter(gray);
        let (width, height) = gray.dimensions();
        let mut image = GrayImage::new(width, height);

        for (x, y, pixel) in response.enumerate_pixels() {
            let value = (-(pixel[0] as i32) + self.config.high_pass_offset).clamp(0, 255);
            image.put_pixel(x, y, Luma([value as u8]));
        }

        image
    }

    fn intensity_to_color(&self, intensity: f32) -> Rgb<u8> {
        let intensity = intensity.clamp(0.0, 1.0);

        match self.config.color_scheme {
            ColorScheme::HeatMap => {
                let (r, g, b) = if intensity < 0.25 {
                    let t = intensity / 0.25;
                    (0.0, t, 1.0)
                } else if intensity < 0.5 {
                    let t = (intensity - 0.25) / 0.25;
                    (0.0, 1.0, 1.0 - t)
                } else if intensity < 0.75 {
                    let t = (intensity - 0.5) / 0.25;
                    (t, 1.0, 0.0)
                } else {
                    let t = (intensity - 0.75) / 0.25;
                    (1.0, 1.0 - t, 0.0)
                };
                Rgb([(r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8])
            }
            ColorScheme::Grayscale => {
                let v = (intensity * 255.0) as u8;
                Rgb([v, v, v])
            }
        }
    }
}

impl Default for Visualizer {
    fn default() -> Self {
        Self::new()
    }
}
