// prodshot - styled commercial product photography via a generative image service

pub mod backend;
pub mod export;
pub mod studio;

pub use backend::{GeminiClient, GenerativeBackend};
pub use studio::StudioSession;
