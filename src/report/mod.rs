pub mod visualization;

use serde::Serialize;

use crate::{FullAnalysisReport, detection::SignalEntry};

#[derive(Serialize)]
pub struct JsonReport {
    pub score: u8,
    pub verdict: String,
    pub signals: Vec<SignalEntry>,
    pub frequency_analysis: FrequencyReportSection,
    pub pixel_analysis: PixelReportSection,
    pub metadata: Option<MetadataReportSection>,
}

#[derive(Serialize)]
pub struct FrequencyReportSection {
    pub anomaly_score: f64,
    pub spectrum_size: usize,
}

#[derive(Serialize)]
pub struct PixelReportSection {
    pub noise_score: f64,
    pub smoothness_score: f64,
}

#[derive(Serialize)]
pub struct MetadataReportSection {
    pub exif_found: bool,
    pub camera_info: Option<String>,
    pub software: Option<String>,
    pub ai_flags: Vec<String>,
    pub content_credentials: bool,
}

impl From<&FullAnalysisReport> for JsonReport {
    fn from(report: &FullAnalysisReport) -> Self {
        Self {
            score: report.result.score,
            verdict: report.result.verdict.label().to_string(),
            signals: report.result.signals.clone(),
            frequency_analysis: FrequencyReportSection {
                anomaly_score: report.frequency.anomaly_score,
                spectrum_size: report.frequency.spectrum.size(),
            },
            pixel_analysis: PixelReportSection {
                noise_score: report.pixel.noise_score,
                smoothness_score: report.pixel.smoothness_score,
            },
            metadata: report.metadata.as_ref().map(|m| MetadataReportSection {
                exif_found: m.exif_found,
                camera_info: m.camera_model.clone().or_else(|| m.camera_make.clone()),
                software: m.software.clone(),
                ai_flags: m.ai_flags.clone(),
                content_credentials: m.provenance_present,
            }),
        }
    }
}

impl JsonReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
