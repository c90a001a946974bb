// Studio state - styling catalogs, prompt derivation, and the session coordinator

pub mod catalog;
pub mod compositor;
pub mod prompt;
pub mod session;
pub mod types;

pub use catalog::{Dimension, StyleChoice, StylingOptions};
pub use compositor::compose;
pub use prompt::{PromptMode, PromptState};
pub use session::StudioSession;
pub use types::{AssetError, GeneratedImage, GenerationStatus, ImageAsset, ImageKind};
