pub mod exif;
pub mod provenance;
