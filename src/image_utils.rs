use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::Array2;

pub const LUMA_R: f64 = 0.299;
pub const LUMA_G: f64 = 0.587;
pub const LUMA_B: f64 = 0.114;

pub fn luminance(pixel: &Rgb<u8>) -> f64 {
    LUMA_R * pixel[0] as f64 + LUMA_G * pixel[1] as f64 + LUMA_B * pixel[2] as f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct LuminanceGrid {
    data: Array2<f64>,
}

impl LuminanceGrid {
    pub fn from_rgb(image: &RgbImage) -> Self {
        let (width, height) = image.dimensions();
        let mut data = Array2::zeros((height as usize, width as usize));

        for (x, y, pixel) in image.enumerate_pixels() {
            data[[y as usize, x as usize]] = (luminance(pixel) / 255.0).clamp(0.0, 1.0);
        }

        Self { data }
    }

    pub fn from_array(data: Array2<f64>) -> Self {
        Self {
            data: data.mapv(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }),
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.data[[y, x]]
    }

    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    pub fn to_gray(&self) -> GrayImage {
        let mut image = GrayImage::new(self.width() as u32, self.height() as u32);

        for ((y, x), &v) in self.data.indexed_iter() {
            image.put_pixel(x as u32, y as u32, Luma([(v * 255.0).round() as u8]));
        }

        image
    }
}

#[derive(Debug, Clone)]
pub struct SpatialGrid {
    rgb: RgbImage,
    luminance: LuminanceGrid,
}

impl SpatialGrid {
    pub fn new(rgb: RgbImage) -> Self {
        let luminance = LuminanceGrid::from_rgb(&rgb);
        Self { rgb, luminance }
    }

    pub fn width(&self) -> u32 {
        self.rgb.width()
    }

    pub fn height(&self) -> u32 {
        self.rgb.height()
    }

    pub fn rgb(&self) -> &RgbImage {
        &self.rgb
    }

    pub fn luminance(&self) -> &LuminanceGrid {
        &self.luminance
    }
}

pub fn normalize_by_max(arr: &Array2<f64>) -> Array2<f64> {
    let max = arr
        .iter()
        .cloned()
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);

    if max <= 0.0 {
        Array2::zeros(arr.dim())
    } else {
        arr.mapv(|v| (v / max).clamp(0.0, 1.0))
    }
}
