pub mod interface;
pub mod google;
pub mod libre;
pub mod resolver;
pub mod gateway;
pub mod factory;

#[cfg(test)]
pub(crate) mod testing;

pub use interface::{DetectionError, TranslationError, TranslatorInterface, SOURCE_AUTO};
pub use google::GoogleTranslator;
pub use libre::LibreTranslator;
pub use resolver::LanguageResolver;
pub use gateway::TranslationGateway;
pub use factory::TranslatorFactory;
