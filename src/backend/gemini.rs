// Gemini generateContent client - prompt enhancement and styled image generation

use super::{BackendError, GenerativeBackend, RequestPart, ResponsePart};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// System instruction for the prompt-enhancement call
const ART_DIRECTOR_INSTRUCTION: &str = "You are an expert Art Director and a world-class \
prompt engineering specialist for an advanced AI image generation model. Your task is to \
completely reimagine and rewrite the following user's prompt. Infuse it with a strong \
creative vision, focusing on mood, storytelling, and high-end aesthetics. Elevate the \
prompt to be significantly more descriptive, detailed, and evocative. Expand on the \
user's intent with professional specifics about art direction, lighting design (e.g., \
chiaroscuro, Rembrandt lighting), composition (e.g., rule of thirds, leading lines), \
texture, mood, sophisticated color grading, and precise camera settings (lens type, \
aperture, shutter speed). Do not add any conversational text, preamble, or explanation. \
Return only the masterfully crafted, enhanced prompt.";

/// Configuration for the Gemini backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_text_model")]
    pub text_model: String,

    #[serde(default = "default_image_model")]
    pub image_model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_text_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_image_model() -> String {
    "gemini-2.5-flash-image-preview".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_timeout_ms() -> u64 {
    120_000
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            text_model: default_text_model(),
            image_model: default_image_model(),
            temperature: default_temperature(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

/// Client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Create a client with the default configuration
    pub fn new(api_key: impl Into<String>) -> Result<Self, BackendError> {
        Self::with_config(api_key, GeminiConfig::default())
    }

    pub fn with_config(
        api_key: impl Into<String>,
        config: GeminiConfig,
    ) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| BackendError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            config,
        })
    }

    async fn post_generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BackendError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, model
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Service(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(500).collect::<String>()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    fn build_enhance_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::Text {
                    text: prompt.to_string(),
                }],
            }],
            system_instruction: Some(Content {
                parts: vec![Part::Text {
                    text: ART_DIRECTOR_INSTRUCTION.to_string(),
                }],
            }),
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                response_modalities: None,
            }),
        }
    }

    fn build_image_request(parts: Vec<RequestPart>) -> GenerateContentRequest {
        let wire_parts = parts
            .into_iter()
            .map(|part| match part {
                RequestPart::Text(text) => Part::Text { text },
                RequestPart::InlineData { mime_type, bytes } => Part::InlineData {
                    inline_data: InlineData {
                        mime_type,
                        data: base64::engine::general_purpose::STANDARD.encode(&bytes),
                    },
                },
            })
            .collect();

        GenerateContentRequest {
            contents: vec![Content { parts: wire_parts }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                temperature: None,
                response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
            }),
        }
    }

    /// Flatten the first candidate's parts, decoding inline payloads
    fn flatten_response(
        response: GenerateContentResponse,
    ) -> Result<Vec<ResponsePart>, BackendError> {
        let parts = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        let mut out = Vec::new();
        for part in parts {
            if let Some(inline) = part.inline_data {
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(inline.data.as_bytes())
                    .map_err(|e| BackendError::Parse(format!("invalid image payload: {e}")))?;
                out.push(ResponsePart::Image {
                    mime_type: inline.mime_type,
                    bytes,
                });
            } else if let Some(text) = part.text {
                out.push(ResponsePart::Text(text));
            }
        }
        Ok(out)
    }
}

#[async_trait]
impl GenerativeBackend for GeminiClient {
    async fn enhance_prompt(&self, prompt: &str) -> Result<String, BackendError> {
        let request = self.build_enhance_request(prompt);
        let response = self.post_generate(&self.config.text_model, &request).await?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|content| content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| BackendError::Parse("no text in enhancement response".into()))?;

        Ok(text.trim().to_string())
    }

    async fn generate_image(
        &self,
        parts: Vec<RequestPart>,
    ) -> Result<Vec<ResponsePart>, BackendError> {
        let request = Self::build_image_request(parts);
        let response = self
            .post_generate(&self.config.image_model, &request)
            .await?;
        Self::flatten_response(response)
    }
}

// Wire types for generateContent

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePartWire>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePartWire {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    inline_data: Option<InlineData>,
}
