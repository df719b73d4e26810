use std::{collections::HashMap, io::Cursor, path::Path};

use log::debug;

use crate::{MetadataResult, error::Result, metadata::provenance::detect_content_credentials};

pub const KNOWN_AI_TOOLS: [&str; 7] = [
    "Midjourney",
    "Stable Diffusion",
    "DALL-E",
    "Firefly",
    "Imagine",
    "Wonder",
    "Adobe Photoshop Generative",
];

pub struct ExifExtractor;

impl ExifExtractor {
    pub fn extract<P: AsRef<Path>>(path: P) -> Result<MetadataResult> {
        let bytes = std::fs::read(path)?;
        Ok(Self::extract_from_bytes(&bytes))
    }

    pub fn extract_from_bytes(bytes: &[u8]) -> MetadataResult {
        let provenance_present = detect_content_credentials(bytes);
        let mut cursor = Cursor::new(bytes);

        match exif::Reader::new().read_from_container(&mut cursor) {
            Ok(exif_data) => {
                let mut result = Self::parse_exif(exif_data);
                result.provenance_present = provenance_present;
                result
            }
            Err(e) => {
                debug!("no EXIF data: {}", e);
                MetadataResult {
                    provenance_present,
                    ..MetadataResult::default()
                }
            }
        }
    }

    fn parse_exif(exif: exif::Exif) -> MetadataResult {
        let mut all_tags = HashMap::new();

        for field in exif.fields() {
            let tag_name = format!("{}", field.tag);
            let value = field.display_value().to_string();
            all_tags.insert(tag_name, value);
        }

        let camera_make = Self::text_field(&exif, exif::Tag::Make);
        let camera_model = Self::text_field(&exif, exif::Tag::Model);
        let software = Self::text_field(&exif, exif::Tag::Software);
        let date_time = Self::text_field(&exif, exif::Tag::DateTime);

        let ai_flags = software
            .iter()
            .filter(|sw| matches_ai_tool(sw))
            .map(|sw| format!("AI Software Detected: {}", sw))
            .collect();

        MetadataResult {
            camera_make,
            camera_model,
            software,
            date_time,
            all_tags,
            exif_found: true,
            ai_flags,
            provenance_present: false,
        }
    }

    fn text_field(exif: &exif::Exif, tag: exif::Tag) -> Option<String> {
        let field = exif.get_field(tag, exif::In::PRIMARY)?;

        let text = match field.value {
            exif::Value::Ascii(ref parts) => parts
                .first()
                .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())?,
            _ => field.display_value().to_string(),
        };

        if text.is_empty() { None } else { Some(text) }
    }
}

pub fn matches_ai_tool(text: &str) -> bool {
    let lower = text.to_lowercase();
    KNOWN_AI_TOOLS
        .iter()
        .any(|tool| lower.contains(&tool.to_lowercase()))
}
