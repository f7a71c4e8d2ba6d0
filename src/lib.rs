pub mod normalizer;

pub use normalizer::{LanguageSupport, NormalizerConfig, ProcessingResult, TextNormalizer};
