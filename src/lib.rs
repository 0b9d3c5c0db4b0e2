pub mod config;
pub mod error;
pub mod handlers;
pub mod language;
pub mod observability;
pub mod pipeline;
pub mod routes;
pub mod state;
pub mod translate;
pub mod tts;
pub mod utils;

pub use config::Config;
pub use error::PipelineError;
pub use language::TargetLanguage;
pub use pipeline::types::{AudioArtifact, TranslationRequest, TranslationResult};
pub use pipeline::TranslationPipeline;
pub use routes::build_app;
pub use state::AppState;
