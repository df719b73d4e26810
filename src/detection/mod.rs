pub mod scoring;

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    LikelyAi,
    Inconclusive,
    LikelyReal,
}

impl Verdict {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 70 => Verdict::LikelyAi,
            s if s >= 40 => Verdict::Inconclusive,
            _ => Verdict::LikelyReal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::LikelyAi => "Likely AI-Generated",
            Verdict::Inconclusive => "Inconclusive / Suspicious",
            Verdict::LikelyReal => "Likely Real / Unmodified",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalEntry {
    pub name: String,
    pub impact: Impact,
    pub detail: String,
}

impl SignalEntry {
    pub fn new(name: &str, impact: Impact, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            impact,
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForensicResult {
    pub score: u8,
    pub verdict: Verdict,
    pub signals: Vec<SignalEntry>,
}

impl ForensicResult {
    pub fn summary(&self) -> String {
        format!(
            "{} ({}% confidence, {} signal(s))",
            self.verdict,
            self.score,
            self.signals.len()
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSignals {
    pub ai_flags: Vec<String>,
    pub exif_found: bool,
    pub provenance_present: bool,
}

impl MetadataSignals {
    pub fn new(ai_flag_present: bool, exif_found: bool, provenance_present: bool) -> Self {
        let ai_flags = if ai_flag_present {
            vec!["AI tool signature in metadata".to_string()]
        } else {
            Vec::new()
        };

        Self {
            ai_flags,
            exif_found,
            provenance_present,
        }
    }

    pub fn ai_flag_present(&self) -> bool {
        !self.ai_flags.is_empty()
    }
}
