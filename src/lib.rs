use std::{collections::HashMap, path::Path};

use image::{DynamicImage, GrayImage};
use log::debug;

use crate::{
    analysis::{
        fft::TwiddleMode,
        noise::NoiseEstimator,
        sampler::GrayscaleSampler,
        smoothness::SmoothnessEstimator,
        spectrum::{SpectrumAnalyzer, SpectrumGrid},
    },
    detection::{
        ForensicResult, MetadataSignals,
        scoring::{ScoreAggregator, ScoringThresholds},
    },
    error::{ForensicsError, Result},
    image_utils::{LuminanceGrid, SpatialGrid},
    metadata::exif::ExifExtractor,
    report::visualization::Visualizer,
};

pub mod analysis;
pub mod detection;
pub mod error;
pub mod image_utils;
pub mod metadata;
pub mod report;

#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub frequency_size: u32,
    pub spatial_max_width: u32,
    pub radius_fraction: f64,
    pub noise_stride: usize,
    pub flatness_stride: u32,
    pub flat_threshold: u32,
    pub twiddle: TwiddleMode,
    pub parallel: bool,
    pub thresholds: ScoringThresholds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            frequency_size: 256,
            spatial_max_width: 1024,
            radius_fraction: 0.4,
            noise_stride: 2,
            flatness_stride: 2,
            flat_threshold: 5,
            twiddle: TwiddleMode::Incremental,
            parallel: true,
            thresholds: ScoringThresholds::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.frequency_size.is_power_of_two() {
            return Err(ForensicsError::InvalidParameter(format!(
                "frequency size must be a power of two, got {}",
                self.frequency_size
            )));
        }
        if self.spatial_max_width == 0 {
            return Err(ForensicsError::InvalidParameter(
                "spatial max width must be positive".into(),
            ));
        }
        if self.noise_stride == 0 || self.flatness_stride == 0 {
            return Err(ForensicsError::InvalidParameter(
                "sampling strides must be positive".into(),
            ));
        }
        if self.radius_fraction.is_nan() || self.radius_fraction <= 0.0 {
            return Err(ForensicsError::InvalidParameter(format!(
                "radius fraction must be positive, got {}",
                self.radius_fraction
            )));
        }
        Ok(())
    }
}

pub struct ForensicsAnalyzer {
    original: DynamicImage,
    config: AnalysisConfig,
    metadata: Option<MetadataResult>,
}

impl ForensicsAnalyzer {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = std::fs::read(&path)?;
        let original = image::load_from_memory(&bytes)?;
        let metadata = ExifExtractor::extract_from_bytes(&bytes);
        debug!(
            "loaded {}: exif={} provenance={}",
            path.as_ref().display(),
            metadata.exif_found,
            metadata.provenance_present
        );

        Ok(Self {
            original,
            config: AnalysisConfig::default(),
            metadata: Some(metadata),
        })
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            original: image,
            config: AnalysisConfig::default(),
            metadata: None,
        }
    }

    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_metadata(mut self, metadata: MetadataResult) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&MetadataResult> {
        self.metadata.as_ref()
    }

    fn sampler(&self) -> GrayscaleSampler {
        GrayscaleSampler::new()
            .with_frequency_size(self.config.frequency_size)
            .with_max_spatial_width(self.config.spatial_max_width)
    }

    pub fn analyze_frequency(&self) -> Result<FrequencyResult> {
        self.config.validate()?;
        let grid = self.sampler().frequency_grid(&self.original)?;
        Ok(self.frequency_branch(&grid))
    }

    pub fn analyze_pixels(&self) -> Result<PixelResult> {
        self.config.validate()?;
        let grid = self.sampler().spatial_grid(&self.original)?;
        Ok(self.pixel_branch(&grid))
    }

    pub fn full_analysis(&self) -> Result<FullAnalysisReport> {
        self.config.validate()?;
        GrayscaleSampler::validate(&self.original)?;

        let sampler = self.sampler();
        let (frequency, pixel) = if self.config.parallel {
            let (frequency, pixel) = rayon::join(
                || {
                    sampler
                        .frequency_grid(&self.original)
                        .map(|grid| self.frequency_branch(&grid))
                },
                || {
                    sampler
                        .spatial_grid(&self.original)
                        .map(|grid| self.pixel_branch(&grid))
                },
            );
            (frequency?, pixel?)
        } else {
            let frequency = self.frequency_branch(&sampler.frequency_grid(&self.original)?);
            let pixel = self.pixel_branch(&sampler.spatial_grid(&self.original)?);
            (frequency, pixel)
        };

        let signals = self
            .metadata
            .as_ref()
            .map(MetadataResult::signals)
            .unwrap_or_default();

        let aggregator = ScoreAggregator::with_thresholds(self.config.thresholds.clone());
        let result = aggregator.aggregate(
            &signals,
            pixel.noise_score,
            pixel.smoothness_score,
            frequency.anomaly_score,
        );

        Ok(FullAnalysisReport {
            result,
            frequency,
            pixel,
            metadata: self.metadata.clone(),
        })
    }

    fn frequency_branch(&self, grid: &LuminanceGrid) -> FrequencyResult {
        SpectrumAnalyzer::new()
            .with_radius_fraction(self.config.radius_fraction)
            .with_twiddle_mode(self.config.twiddle)
            .analyze(grid)
    }

    fn pixel_branch(&self, grid: &SpatialGrid) -> PixelResult {
        let noise = NoiseEstimator::new().with_stride(self.config.noise_stride);
        let smoothness = SmoothnessEstimator::new()
            .with_stride(self.config.flatness_stride)
            .with_flat_threshold(self.config.flat_threshold);

        let (noise_score, smoothness_score) = if self.config.parallel {
            rayon::join(
                || noise.estimate_noise(grid.luminance()),
                || smoothness.estimate_flatness(grid.rgb()),
            )
        } else {
            (
                noise.estimate_noise(grid.luminance()),
                smoothness.estimate_flatness(grid.rgb()),
            )
        };
        debug!("noise {:.4}, smoothness {:.2}%", noise_score, smoothness_score);

        let high_pass = Visualizer::new().high_pass_image(&grid.luminance().to_gray());

        PixelResult {
            noise_score,
            smoothness_score,
            high_pass,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FrequencyResult {
    pub anomaly_score: f64,
    pub spectrum: SpectrumGrid,
}

#[derive(Debug, Clone)]
pub struct PixelResult {
    pub noise_score: f64,
    pub smoothness_score: f64,
    pub high_pass: GrayImage,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataResult {
    pub camera_make: Option<String>,
    pub camera_model: Option<String>,
    pub software: Option<String>,
    pub date_time: Option<String>,
    pub all_tags: HashMap<String, String>,
    pub exif_found: bool,
    pub ai_flags: Vec<String>,
    pub provenance_present: bool,
}

impl MetadataResult {
    pub fn signals(&self) -> MetadataSignals {
        MetadataSignals {
            ai_flags: self.ai_flags.clone(),
            exif_found: self.exif_found,
            provenance_present: self.provenance_present,
        }
    }
}

#[derive(Debug)]
pub struct FullAnalysisReport {
    pub result: ForensicResult,
    pub frequency: FrequencyResult,
    pub pixel: PixelResult,
    pub metadata: Option<MetadataResult>,
}
