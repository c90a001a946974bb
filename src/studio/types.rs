// Session data types - uploaded assets and generation outcomes

use std::path::Path;

/// Upload formats accepted for product and style images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
    WebP,
}

impl ImageKind {
    /// Detect the format from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageKind::Png),
            "jpg" | "jpeg" => Some(ImageKind::Jpeg),
            "webp" => Some(ImageKind::WebP),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageKind::Png => "image/png",
            ImageKind::Jpeg => "image/jpeg",
            ImageKind::WebP => "image/webp",
        }
    }
}

/// An uploaded image: owned raw bytes plus the MIME type declared to the
/// generation service. Replacing or removing the asset drops the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAsset {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn new(name: impl Into<String>, kind: ImageKind, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: kind.mime_type().to_string(),
            bytes,
        }
    }

    /// Read an asset from disk, detecting the format from the extension
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        let kind = ImageKind::from_extension(ext)
            .ok_or_else(|| AssetError::UnsupportedFormat(ext.to_string()))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AssetError::Io(path.display().to_string(), e))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        Ok(Self::new(name, kind, bytes))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("unsupported image format {0:?} (expected png, jpeg, or webp)")]
    UnsupportedFormat(String),

    #[error("failed to read {0}: {1}")]
    Io(String, #[source] std::io::Error),
}

/// A successfully generated image
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedImage {
    /// Decoded image bytes, PNG-compatible for preview purposes
    pub bytes: Vec<u8>,
    pub mime_type: String,
    /// Text the model returned alongside the image, if any
    pub caption: Option<String>,
}

/// Where the current generation attempt stands. The session holds exactly
/// one of these; starting a new attempt replaces it before any request is sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    InProgress,
    Complete(GeneratedImage),
    Failed(String),
}

impl GenerationStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GenerationStatus::InProgress)
    }

    pub fn image(&self) -> Option<&GeneratedImage> {
        match self {
            GenerationStatus::Complete(image) => Some(image),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            GenerationStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_kind_detection() {
        assert_eq!(ImageKind::from_extension("png"), Some(ImageKind::Png));
        assert_eq!(ImageKind::from_extension("JPG"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension("jpeg"), Some(ImageKind::Jpeg));
        assert_eq!(ImageKind::from_extension("webp"), Some(ImageKind::WebP));
        assert_eq!(ImageKind::from_extension("gif"), None);
        assert_eq!(ImageKind::from_extension(""), None);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(ImageKind::Png.mime_type(), "image/png");
        assert_eq!(ImageKind::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ImageKind::WebP.mime_type(), "image/webp");
    }

    #[tokio::test]
    async fn test_from_path_rejects_unknown_extension() {
        let err = ImageAsset::from_path("product.bmp").await.unwrap_err();
        assert!(matches!(err, AssetError::UnsupportedFormat(ext) if ext == "bmp"));
    }

    #[test]
    fn test_status_accessors() {
        let image = GeneratedImage {
            bytes: vec![1, 2, 3],
            mime_type: "image/png".into(),
            caption: None,
        };
        assert!(GenerationStatus::InProgress.is_in_progress());
        assert_eq!(
            GenerationStatus::Complete(image.clone()).image(),
            Some(&image)
        );
        assert_eq!(GenerationStatus::Idle.image(), None);
        assert_eq!(
            GenerationStatus::Failed("nope".into()).failure(),
            Some("nope")
        );
    }
}
