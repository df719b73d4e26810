use image::{
    DynamicImage, GenericImageView, RgbImage,
    imageops::{self, FilterType},
};
use log::debug;

use crate::{
    error::{ForensicsError, Result},
    image_utils::{LuminanceGrid, SpatialGrid},
};

pub struct GrayscaleSampler {
    frequency_size: u32,
    max_spatial_width: u32,
}

impl GrayscaleSampler {
    pub fn new() -> Self {
        Self {
            frequency_size: 256,
            max_spatial_width: 1024,
        }
    }

    pub fn with_frequency_size(mut self, size: u32) -> Self {
        self.frequency_size = size;
        self
    }

    pub fn with_max_spatial_width(mut self, width: u32) -> Self {
        self.max_spatial_width = width;
        self
    }

    pub fn validate(image: &DynamicImage) -> Result<()> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(ForensicsError::Decode { width, height });
        }
        Ok(())
    }

    // Aspect ratio is not preserved.
    pub fn frequency_grid(&self, image: &DynamicImage) -> Result<LuminanceGrid> {
        Self::validate(image)?;

        let size = self.frequency_size;
        let rgb = Self::resample(image.to_rgb8(), size, size);
        debug!("frequency grid sampled at {}x{}", size, size);

        Ok(LuminanceGrid::from_rgb(&rgb))
    }

    pub fn spatial_grid(&self, image: &DynamicImage) -> Result<SpatialGrid> {
        Self::validate(image)?;

        let (width, height) = image.dimensions();
        let (target_width, target_height) = self.spatial_dimensions(width, height);
        let rgb = Self::resample(image.to_rgb8(), target_width, target_height);
        debug!(
            "spatial grid sampled at {}x{} from {}x{}",
            target_width, target_height, width, height
        );

        Ok(SpatialGrid::new(rgb))
    }

    pub fn spatial_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let target_width = width.min(self.max_spatial_width).max(1);
        if target_width == width {
            return (width, height);
        }

        let scale = target_width as f64 / width as f64;
        let target_height = ((height as f64 * scale).round() as u32).max(1);
        (target_width, target_height)
    }

    fn resample(rgb: RgbImage, width: u32, height: u32) -> RgbImage {
        if rgb.dimensions() == (width, height) {
            rgb
        } else {
            imageops::resize(&rgb, width, height, FilterType::Triangle)
        }
    }
}

impl Default for GrayscaleSampler {
    fn default() -> Self {
        Self::new()
    }
}
