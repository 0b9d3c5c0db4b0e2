pub mod interface;
pub mod google_tts;
pub mod synthesizer;
pub mod factory;

#[cfg(test)]
pub(crate) mod testing;

pub use interface::{SynthesisError, TTSInterface};
pub use google_tts::GoogleTTS;
pub use synthesizer::{speech_filename, RandomSuffix, SpeechSynthesizer, SuffixSource};
pub use factory::TTSFactory;
