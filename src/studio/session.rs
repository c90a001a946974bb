// Studio session - owns all mutable state and sequences the remote calls

use crate::backend::{GenerativeBackend, RequestPart, ResponsePart};
use crate::studio::catalog::{Dimension, StyleChoice, StylingOptions};
use crate::studio::compositor::compose;
use crate::studio::prompt::{PromptMode, PromptState};
use crate::studio::types::{GeneratedImage, GenerationStatus, ImageAsset};
use std::sync::Arc;

const MISSING_PRODUCT_IMAGE: &str = "Please upload a product image first.";
const ENHANCE_FAILED: &str = "Failed to enhance prompt. Please try again.";
const GENERATE_FAILED: &str = "Failed to generate image. Please try again.";
const NO_IMAGE_RETURNED: &str = "Failed to generate image. The model did not return an image.";

/// Coordinates styling options, uploaded assets, the prompt lock, and the two
/// asynchronous remote operations. All mutation goes through this type; each
/// operation applies its state changes in one continuation, so observers never
/// see a partial update.
pub struct StudioSession {
    backend: Arc<dyn GenerativeBackend>,
    options: StylingOptions,
    environment_enabled: bool,
    product_image: Option<ImageAsset>,
    style_image: Option<ImageAsset>,
    prompt: PromptState,
    status: GenerationStatus,
    error: Option<String>,
    enhancing: bool,
}

impl StudioSession {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        let options = StylingOptions::default();
        let prompt = PromptState::new(compose(&options, false, true));

        Self {
            backend,
            options,
            environment_enabled: true,
            product_image: None,
            style_image: None,
            prompt,
            status: GenerationStatus::Idle,
            error: None,
            enhancing: false,
        }
    }

    // Accessors - the rendering surface

    pub fn options(&self) -> &StylingOptions {
        &self.options
    }

    pub fn environment_enabled(&self) -> bool {
        self.environment_enabled
    }

    pub fn prompt_text(&self) -> &str {
        self.prompt.text()
    }

    pub fn prompt_mode(&self) -> PromptMode {
        self.prompt.mode()
    }

    pub fn status(&self) -> &GenerationStatus {
        &self.status
    }

    /// Error banner shared by both remote operations
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_enhancing(&self) -> bool {
        self.enhancing
    }

    pub fn is_generating(&self) -> bool {
        self.status.is_in_progress()
    }

    pub fn product_image(&self) -> Option<&ImageAsset> {
        self.product_image.as_ref()
    }

    pub fn style_image(&self) -> Option<&ImageAsset> {
        self.style_image.as_ref()
    }

    // Styling inputs - each change flows through the prompt lock

    pub fn select(&mut self, dimension: Dimension, choice: &'static StyleChoice) {
        self.options.set(dimension, choice);
        self.refresh_prompt();
    }

    pub fn set_environment_enabled(&mut self, enabled: bool) {
        self.environment_enabled = enabled;
        self.refresh_prompt();
    }

    /// The product image does not influence the prompt, only generation
    pub fn set_product_image(&mut self, asset: ImageAsset) {
        self.product_image = Some(asset);
    }

    pub fn clear_product_image(&mut self) {
        self.product_image = None;
    }

    /// Style-image presence adds the reference clause to the composed prompt
    pub fn set_style_image(&mut self, asset: ImageAsset) {
        self.style_image = Some(asset);
        self.refresh_prompt();
    }

    pub fn clear_style_image(&mut self) {
        self.style_image = None;
        self.refresh_prompt();
    }

    // Prompt operations

    /// Replace the visible prompt verbatim and lock it against recomputes
    pub fn edit_prompt(&mut self, text: impl Into<String>) {
        self.prompt.edit(text);
    }

    /// Unlock the prompt and recompute it from the current inputs
    pub fn reset_prompt(&mut self) {
        self.prompt.reset(self.compose_current());
    }

    fn compose_current(&self) -> String {
        compose(
            &self.options,
            self.style_image.is_some(),
            self.environment_enabled,
        )
    }

    fn refresh_prompt(&mut self) {
        self.prompt.sync(self.compose_current());
    }

    fn in_flight(&self) -> bool {
        self.enhancing || self.status.is_in_progress()
    }

    // Remote operations

    /// Rewrite the current prompt through the art-director persona.
    ///
    /// A blank prompt, or an operation already in flight, is a no-op. On
    /// failure the prompt text and lock mode are left untouched and the error
    /// banner carries a single message.
    pub async fn enhance_prompt(&mut self) {
        if self.prompt.text().trim().is_empty() || self.in_flight() {
            return;
        }

        self.enhancing = true;
        self.error = None;

        match self.backend.enhance_prompt(self.prompt.text()).await {
            Ok(enhanced) => {
                self.prompt.apply_enhanced(enhanced.trim());
            }
            Err(err) => {
                tracing::error!(error = %err, "prompt enhancement failed");
                self.error = Some(ENHANCE_FAILED.to_string());
            }
        }

        self.enhancing = false;
    }

    /// Generate the styled image from the current assets and prompt.
    ///
    /// Requires a product image; without one only the error banner is set and
    /// no request goes out. Any previous result is cleared the moment the
    /// attempt starts, before the request is sent.
    pub async fn generate(&mut self) {
        if self.in_flight() {
            return;
        }

        let Some(product) = &self.product_image else {
            self.error = Some(MISSING_PRODUCT_IMAGE.to_string());
            return;
        };

        let mut parts = vec![RequestPart::InlineData {
            mime_type: product.mime_type.clone(),
            bytes: product.bytes.clone(),
        }];
        if let Some(style) = &self.style_image {
            parts.push(RequestPart::InlineData {
                mime_type: style.mime_type.clone(),
                bytes: style.bytes.clone(),
            });
        }
        parts.push(RequestPart::Text(self.prompt.text().to_string()));

        self.error = None;
        self.status = GenerationStatus::InProgress;

        self.status = match self.backend.generate_image(parts).await {
            Ok(parts) => Self::settle(parts),
            Err(err) => {
                tracing::error!(error = %err, "image generation failed");
                GenerationStatus::Failed(GENERATE_FAILED.to_string())
            }
        };

        if let GenerationStatus::Failed(message) = &self.status {
            self.error = Some(message.clone());
        }
    }

    /// Reduce response parts to a terminal status: the first image part wins,
    /// the first text part becomes the caption or the failure message
    fn settle(parts: Vec<ResponsePart>) -> GenerationStatus {
        let mut image: Option<(String, Vec<u8>)> = None;
        let mut text: Option<String> = None;

        for part in parts {
            match part {
                ResponsePart::Image { mime_type, bytes } if image.is_none() => {
                    image = Some((mime_type, bytes));
                }
                ResponsePart::Text(t) if text.is_none() => {
                    text = Some(t);
                }
                _ => {}
            }
        }

        match image {
            Some((mime_type, bytes)) => GenerationStatus::Complete(GeneratedImage {
                bytes,
                mime_type,
                caption: text,
            }),
            None => GenerationStatus::Failed(text.unwrap_or_else(|| NO_IMAGE_RETURNED.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::studio::types::ImageKind;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend stub driven by a script of canned replies
    #[derive(Default)]
    struct ScriptedBackend {
        enhance_replies: Mutex<VecDeque<Result<String, BackendError>>>,
        image_replies: Mutex<VecDeque<Result<Vec<ResponsePart>, BackendError>>>,
        enhance_calls: AtomicUsize,
        generate_calls: AtomicUsize,
        seen_parts: Mutex<Vec<Vec<RequestPart>>>,
    }

    impl ScriptedBackend {
        fn push_enhance(&self, reply: Result<String, BackendError>) {
            self.enhance_replies.lock().unwrap().push_back(reply);
        }

        fn push_image(&self, reply: Result<Vec<ResponsePart>, BackendError>) {
            self.image_replies.lock().unwrap().push_back(reply);
        }
    }

    #[async_trait]
    impl GenerativeBackend for ScriptedBackend {
        async fn enhance_prompt(&self, _prompt: &str) -> Result<String, BackendError> {
            self.enhance_calls.fetch_add(1, Ordering::SeqCst);
            self.enhance_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(BackendError::Service("unscripted".into())))
        }

        async fn generate_image(
            &self,
            parts: Vec<RequestPart>,
        ) -> Result<Vec<ResponsePart>, BackendError> {
            self.generate_calls.fetch_add(1, Ordering::SeqCst);
            self.seen_parts.lock().unwrap().push(parts);
            self.image_replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(BackendError::Service("unscripted".into())))
        }
    }

    fn session() -> (StudioSession, Arc<ScriptedBackend>) {
        let backend = Arc::new(ScriptedBackend::default());
        (StudioSession::new(backend.clone()), backend)
    }

    fn product() -> ImageAsset {
        ImageAsset::new("product.png", ImageKind::Png, vec![0x89, 0x50, 0x4E, 0x47])
    }

    fn style() -> ImageAsset {
        ImageAsset::new("style.jpg", ImageKind::Jpeg, vec![0xFF, 0xD8])
    }

    fn image_part() -> ResponsePart {
        ResponsePart::Image {
            mime_type: "image/png".into(),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_initial_prompt_matches_compositor() {
        let (session, _) = session();
        assert_eq!(
            session.prompt_text(),
            compose(&StylingOptions::default(), false, true)
        );
        assert_eq!(session.prompt_mode(), PromptMode::Auto);
        assert_eq!(*session.status(), GenerationStatus::Idle);
    }

    #[test]
    fn test_option_change_recomputes_while_auto() {
        let (mut session, _) = session();
        let lighting = Dimension::LightingStyle.by_label("Moody Cinematic").unwrap();
        session.select(Dimension::LightingStyle, lighting);
        assert!(session.prompt_text().contains("moody, cinematic lighting"));
    }

    #[test]
    fn test_style_image_presence_adds_reference_clause() {
        let (mut session, _) = session();
        session.set_style_image(style());
        assert!(session.prompt_text().contains("reference photo provided"));
        session.clear_style_image();
        assert!(!session.prompt_text().contains("reference photo provided"));
    }

    #[test]
    fn test_product_image_does_not_touch_prompt() {
        let (mut session, _) = session();
        let before = session.prompt_text().to_string();
        session.set_product_image(product());
        assert_eq!(session.prompt_text(), before);
    }

    #[test]
    fn test_manual_edit_locks_against_option_changes() {
        let (mut session, _) = session();
        session.edit_prompt("my own prompt");
        let lens = Dimension::CameraLens.by_label("Macro Lens").unwrap();
        session.select(Dimension::CameraLens, lens);
        session.set_environment_enabled(false);
        assert_eq!(session.prompt_text(), "my own prompt");
        assert_eq!(session.prompt_mode(), PromptMode::Manual);
    }

    #[test]
    fn test_reset_restores_auto_derivation() {
        let (mut session, _) = session();
        session.set_environment_enabled(false);
        session.edit_prompt("my own prompt");
        session.reset_prompt();
        assert_eq!(session.prompt_mode(), PromptMode::Auto);
        assert_eq!(
            session.prompt_text(),
            compose(&StylingOptions::default(), false, false)
        );
    }

    #[tokio::test]
    async fn test_enhance_replaces_prompt_and_locks() {
        let (mut session, backend) = session();
        backend.push_enhance(Ok("  a cinematic marvel  ".into()));

        session.enhance_prompt().await;

        assert_eq!(session.prompt_text(), "a cinematic marvel");
        assert_eq!(session.prompt_mode(), PromptMode::Manual);
        assert!(session.error().is_none());
        assert!(!session.is_enhancing());
    }

    #[tokio::test]
    async fn test_enhance_failure_keeps_prompt() {
        let (mut session, backend) = session();
        backend.push_enhance(Err(BackendError::Network("down".into())));
        let before = session.prompt_text().to_string();

        session.enhance_prompt().await;

        assert_eq!(session.prompt_text(), before);
        assert_eq!(session.prompt_mode(), PromptMode::Auto);
        assert_eq!(session.error(), Some(ENHANCE_FAILED));
    }

    #[tokio::test]
    async fn test_enhance_is_noop_on_blank_prompt() {
        let (mut session, backend) = session();
        session.edit_prompt("   ");

        session.enhance_prompt().await;

        assert_eq!(backend.enhance_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_without_product_is_a_validation_error() {
        let (mut session, backend) = session();

        session.generate().await;

        assert_eq!(session.error(), Some(MISSING_PRODUCT_IMAGE));
        assert_eq!(*session.status(), GenerationStatus::Idle);
        assert_eq!(backend.generate_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_generate_success_keeps_first_image_and_caption() {
        let (mut session, backend) = session();
        session.set_product_image(product());
        backend.push_image(Ok(vec![
            ResponsePart::Text("first text".into()),
            image_part(),
            ResponsePart::Image {
                mime_type: "image/png".into(),
                bytes: vec![9, 9, 9],
            },
            ResponsePart::Text("second text".into()),
        ]));

        session.generate().await;

        let image = session.status().image().expect("expected a result image");
        assert_eq!(image.bytes, vec![1, 2, 3]);
        assert_eq!(image.caption.as_deref(), Some("first text"));
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn test_generate_sends_product_style_then_prompt() {
        let (mut session, backend) = session();
        session.set_product_image(product());
        session.set_style_image(style());
        backend.push_image(Ok(vec![image_part()]));

        session.generate().await;

        let seen = backend.seen_parts.lock().unwrap();
        let parts = &seen[0];
        assert_eq!(parts.len(), 3);
        assert!(
            matches!(&parts[0], RequestPart::InlineData { mime_type, .. } if mime_type == "image/png")
        );
        assert!(
            matches!(&parts[1], RequestPart::InlineData { mime_type, .. } if mime_type == "image/jpeg")
        );
        assert!(
            matches!(&parts[2], RequestPart::Text(text) if text.contains("reference photo provided"))
        );
    }

    #[tokio::test]
    async fn test_generate_text_only_response_fails_with_that_text() {
        let (mut session, backend) = session();
        session.set_product_image(product());
        backend.push_image(Ok(vec![ResponsePart::Text(
            "I cannot photograph that.".into(),
        )]));

        session.generate().await;

        assert_eq!(
            session.status().failure(),
            Some("I cannot photograph that.")
        );
        assert_eq!(session.error(), Some("I cannot photograph that."));
    }

    #[tokio::test]
    async fn test_generate_empty_response_uses_fallback_message() {
        let (mut session, backend) = session();
        session.set_product_image(product());
        backend.push_image(Ok(vec![]));

        session.generate().await;

        assert_eq!(session.status().failure(), Some(NO_IMAGE_RETURNED));
    }

    #[tokio::test]
    async fn test_generate_transport_error_uses_generic_message() {
        let (mut session, backend) = session();
        session.set_product_image(product());
        backend.push_image(Err(BackendError::Network("down".into())));

        session.generate().await;

        assert_eq!(session.status().failure(), Some(GENERATE_FAILED));
        assert_eq!(session.error(), Some(GENERATE_FAILED));
    }

    #[tokio::test]
    async fn test_failed_attempt_clears_previous_success() {
        let (mut session, backend) = session();
        session.set_product_image(product());
        backend.push_image(Ok(vec![image_part()]));
        backend.push_image(Err(BackendError::Network("down".into())));

        session.generate().await;
        assert!(session.status().image().is_some());

        session.generate().await;
        assert!(session.status().image().is_none());
        assert_eq!(session.status().failure(), Some(GENERATE_FAILED));
    }

    #[tokio::test]
    async fn test_new_attempt_clears_stale_error_banner() {
        let (mut session, backend) = session();
        session.generate().await;
        assert_eq!(session.error(), Some(MISSING_PRODUCT_IMAGE));

        session.set_product_image(product());
        backend.push_image(Ok(vec![image_part()]));
        session.generate().await;

        assert!(session.error().is_none());
    }
}
