//! Cross-modality unit conversions
//!
//! Fixed ratios translating between words, tokens, minutes, and
//! characters. Exact rational multipliers: estimates are expected to be
//! reproducible bit-for-bit across runs and catalogs.

use serde::{Deserialize, Serialize};

/// 3 words ≈ 4 tokens
pub const WORDS_TO_TOKENS: f64 = 4.0 / 3.0;

/// 60 seconds/min × 9/5 words/sec of speech
pub const MINUTES_TO_WORDS: f64 = 108.0;

/// Audio tokens per minute of speech
pub const MINUTES_TO_AUDIO_TOKENS: f64 = 1200.0;

/// Characters per word
pub const WORDS_TO_CHARACTERS: f64 = 4.0;

/// Conversion ratios, carried on the catalog as configuration data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionRatios {
    /// Tokens per word
    #[serde(default = "default_words_to_tokens")]
    pub words_to_tokens: f64,
    /// Spoken words per minute
    #[serde(default = "default_minutes_to_words")]
    pub minutes_to_words: f64,
    /// Audio tokens per minute
    #[serde(default = "default_minutes_to_audio_tokens")]
    pub minutes_to_audio_tokens: f64,
    /// Characters per word
    #[serde(default = "default_words_to_characters")]
    pub words_to_characters: f64,
}

impl Default for ConversionRatios {
    fn default() -> Self {
        Self {
            words_to_tokens: WORDS_TO_TOKENS,
            minutes_to_words: MINUTES_TO_WORDS,
            minutes_to_audio_tokens: MINUTES_TO_AUDIO_TOKENS,
            words_to_characters: WORDS_TO_CHARACTERS,
        }
    }
}

fn default_words_to_tokens() -> f64 {
    WORDS_TO_TOKENS
}

fn default_minutes_to_words() -> f64 {
    MINUTES_TO_WORDS
}

fn default_minutes_to_audio_tokens() -> f64 {
    MINUTES_TO_AUDIO_TOKENS
}

fn default_words_to_characters() -> f64 {
    WORDS_TO_CHARACTERS
}

/// Cost of a token volume at a per-million-tokens rate
pub fn token_cost(tokens: f64, rate_per_million: f64) -> f64 {
    tokens * (rate_per_million / 1_000_000.0)
}

/// Cost of a character volume at a per-million-characters rate
pub fn character_cost(characters: f64, rate_per_million: f64) -> f64 {
    characters * (rate_per_million / 1_000_000.0)
}
