// Image export - re-encodes the generated image for local download

use chrono::Utc;
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Output format for a downloaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ExportFormat {
    #[default]
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// JPEG quality tiers offered by the export panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum QualityTier {
    #[default]
    High,
    Medium,
    Low,
}

impl QualityTier {
    /// JPEG quality factor for this tier
    pub fn jpeg_quality(&self) -> u8 {
        match self {
            QualityTier::High => 95,
            QualityTier::Medium => 80,
            QualityTier::Low => 60,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the image into `dir` in the requested format and return the path.
///
/// PNG downloads the bytes unchanged. JPEG decodes and re-encodes at the
/// tier's quality factor; when the bytes cannot be re-encoded the original
/// bytes are written as PNG instead and the failure is only logged. The
/// filename is a fixed prefix plus the current timestamp.
pub fn export_image(
    bytes: &[u8],
    format: ExportFormat,
    tier: QualityTier,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let stem = format!("ai-generated-photo-{}", Utc::now().timestamp_millis());

    match format {
        ExportFormat::Png => write_file(dir, &stem, "png", bytes),
        ExportFormat::Jpeg => match reencode_jpeg(bytes, tier.jpeg_quality()) {
            Ok(jpeg) => write_file(dir, &stem, "jpg", &jpeg),
            Err(err) => {
                tracing::warn!(error = %err, "JPEG re-encode failed, downloading original bytes");
                write_file(dir, &stem, "png", bytes)
            }
        },
    }
}

fn write_file(dir: &Path, stem: &str, ext: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let path = dir.join(format!("{stem}.{ext}"));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

fn reencode_jpeg(bytes: &[u8], quality: u8) -> Result<Vec<u8>, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?;
    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);
    decoded.to_rgb8().write_with_encoder(encoder)?;
    Ok(out.into_inner())
}
