// Remote generative collaborators, behind a single trait

mod gemini;

pub use gemini::{GeminiClient, GeminiConfig};

use async_trait::async_trait;

/// One segment of a generation request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestPart {
    /// Raw binary data with its declared media type
    InlineData { mime_type: String, bytes: Vec<u8> },
    Text(String),
}

/// One segment of a generation response, in the order the service returned it
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePart {
    Image { mime_type: String, bytes: Vec<u8> },
    Text(String),
}

/// Boundary to the remote generative services
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Rewrite a prompt through the art-director persona
    async fn enhance_prompt(&self, prompt: &str) -> Result<String, BackendError>;

    /// Generate a styled image from image and text parts. The response may
    /// contain image and text parts in any order.
    async fn generate_image(
        &self,
        parts: Vec<RequestPart>,
    ) -> Result<Vec<ResponsePart>, BackendError>;
}

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("network error: {0}")]
    Network(String),

    #[error("service error: {0}")]
    Service(String),

    #[error("parse error: {0}")]
    Parse(String),
}
