use log::info;

use crate::detection::{ForensicResult, Impact, MetadataSignals, SignalEntry, Verdict};

#[derive(Debug, Clone)]
pub struct ScoringThresholds {
    pub ai_metadata_points: u32,
    pub missing_exif_points: u32,
    pub smoothness_high: f64,
    pub smoothness_high_points: u32,
    pub smoothness_moderate: f64,
    pub smoothness_moderate_points: u32,
    pub noise_low: f64,
    pub noise_low_points: u32,
    pub noise_moderate: f64,
    pub noise_moderate_points: u32,
    pub anomaly_high: f64,
    pub anomaly_points: u32,
    pub max_score: u32,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            ai_metadata_points: 80,
            missing_exif_points: 20,
            smoothness_high: 60.0,
            smoothness_high_points: 30,
            smoothness_moderate: 40.0,
            smoothness_moderate_points: 15,
            noise_low: 2.0,
            noise_low_points: 25,
            noise_moderate: 5.0,
            noise_moderate_points: 10,
            anomaly_high: 100.0,
            anomaly_points: 10,
            max_score: 99,
        }
    }
}

pub struct ScoreAggregator {
    thresholds: ScoringThresholds,
}

impl ScoreAggregator {
    pub fn new() -> Self {
        Self {
            thresholds: ScoringThresholds::default(),
        }
    }

    pub fn with_thresholds(thresholds: ScoringThresholds) -> Self {
        Self { thresholds }
    }

    pub fn aggregate(
        &self,
        metadata: &MetadataSignals,
        noise_score: f64,
        smoothness_score: f64,
        anomaly_score: f64,
    ) -> ForensicResult {
        let t = &self.thresholds;
        let noise_score = finite_or_zero(noise_score);
        let smoothness_score = finite_or_zero(smoothness_score);
        let anomaly_score = finite_or_zero(anomaly_score);

        let mut score = 0u32;
        let mut signals = Vec::new();

        if metadata.ai_flag_present() {
            score = score.saturating_add(t.ai_metadata_points);
            signals.push(SignalEntry::new(
                "Metadata AI Flags",
                Impact::High,
                metadata.ai_flags.join(", "),
            ));
        } else if !metadata.exif_found {
            score = score.saturating_add(t.missing_exif_points);
            signals.push(SignalEntry::new(
                "Missing EXIF",
                Impact::Low,
                "No camera metadata found",
            ));
        }

        if metadata.provenance_present {
            signals.push(SignalEntry::new(
                "Content Credentials",
                Impact::Info,
                "Provenance data detected",
            ));
        }

        if smoothness_score > t.smoothness_high {
            score = score.saturating_add(t.smoothness_high_points);
            signals.push(SignalEntry::new(
                "Unnatural Smoothness",
                Impact::Medium,
                "Lack of texture variance detected",
            ));
        } else if smoothness_score > t.smoothness_moderate {
            score = score.saturating_add(t.smoothness_moderate_points);
        }

        if noise_score < t.noise_low {
            score = score.saturating_add(t.noise_low_points);
            signals.push(SignalEntry::new(
                "Low Noise Levels",
                Impact::Medium,
                "Image is suspiciously clean",
            ));
        } else if noise_score < t.noise_moderate {
            score = score.saturating_add(t.noise_moderate_points);
        }

        if anomaly_score > t.anomaly_high {
            score = score.saturating_add(t.anomaly_points);
            signals.push(SignalEntry::new(
                "Frequency Anomaly",
                Impact::Low,
                "Unusual spectral distribution",
            ));
        }

        let score = score.min(t.max_score.min(99)) as u8;
        let verdict = Verdict::from_score(score);
        info!("forensic score {} -> {}", score, verdict);

        ForensicResult {
            score,
            verdict,
            signals,
        }
    }
}

impl Default for ScoreAggregator {
    fn default() -> Self {
        Self::new()
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
