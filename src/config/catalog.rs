//! Pricing catalog
//!
//! Read-only configuration data: five rate tables keyed by model
//! identifier, the display-currency multiplier, and the unit-conversion
//! ratios. The calculators only ever read from this; nothing mutates it
//! during a calculation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::calculator::conversions::ConversionRatios;
use crate::utils::error::{EstimatorError, Result};

/// Text-generation rates, per million tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextModelRates {
    /// Input rate
    pub input: f64,
    /// Cached-input rate
    pub cached_input: f64,
    /// Output rate
    pub output: f64,
    /// Optional notes about pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Transcription rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionRates {
    /// Rate per audio minute
    pub cost_per_minute: f64,
    /// Optional notes about pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Speech-synthesis rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRates {
    /// Rate per million characters
    pub cost_per_million_chars: f64,
    /// Optional notes about pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Prompt-caching capability of an omni model
///
/// Absence of a cached-text rate on the catalog entry is the sole signal
/// that a model does not support caching; this enum makes that branch
/// explicit so calculators never inspect field presence ad hoc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CacheSupport {
    /// Caching supported, at this per-million-tokens rate
    Supported { cached_rate: f64 },
    /// No caching; all text input bills at the full rate
    Unsupported,
}

/// Audio omni model rates (mixed audio/text input, text output), per
/// million tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmniModelRates {
    /// Text-input rate
    pub text_input: f64,
    /// Cached text-input rate; absent means the model has no caching
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_cached: Option<f64>,
    /// Text-output rate
    pub text_output: f64,
    /// Audio-input rate
    pub audio_input: f64,
    /// Audio-output rate
    pub audio_output: f64,
    /// Optional notes about pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl OmniModelRates {
    /// Caching capability of this entry
    pub fn cache_support(&self) -> CacheSupport {
        match self.text_cached {
            Some(cached_rate) => CacheSupport::Supported { cached_rate },
            None => CacheSupport::Unsupported,
        }
    }
}

/// Speech-to-speech model rates, per million tokens
///
/// STS entries always expose a cached text rate, so the field is
/// mandatory and the no-caching branch is unrepresentable here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechToSpeechRates {
    /// Text-input rate
    pub text_input: f64,
    /// Cached text-input rate
    pub text_cached: f64,
    /// Text-output rate
    pub text_output: f64,
    /// Audio-input rate
    pub audio_input: f64,
    /// Cached audio-input rate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_cached: Option<f64>,
    /// Audio-output rate
    pub audio_output: f64,
    /// Optional notes about pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The full pricing catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingCatalog {
    /// Display currency code, e.g. "INR"
    #[serde(default = "default_display_currency")]
    pub display_currency: String,
    /// Base-currency (USD) to display-currency multiplier
    pub currency_multiplier: f64,
    /// Unit-conversion ratios
    #[serde(default)]
    pub conversions: ConversionRatios,
    /// Text-generation models
    #[serde(default)]
    pub text_models: HashMap<String, TextModelRates>,
    /// Transcription models
    #[serde(default)]
    pub transcription_models: HashMap<String, TranscriptionRates>,
    /// Speech-synthesis models
    #[serde(default)]
    pub synthesis_models: HashMap<String, SynthesisRates>,
    /// Speech-to-speech models
    #[serde(default)]
    pub speech_to_speech_models: HashMap<String, SpeechToSpeechRates>,
    /// Audio omni models
    #[serde(default)]
    pub omni_models: HashMap<String, OmniModelRates>,
    /// Last updated timestamp
    #[serde(default = "chrono::Utc::now")]
    pub updated_at: DateTime<Utc>,
}

fn default_display_currency() -> String {
    "INR".to_string()
}

impl PricingCatalog {
    /// Look up text-generation rates
    pub fn text_model(&self, model: &str) -> Result<&TextModelRates> {
        self.text_models
            .get(model)
            .ok_or_else(|| EstimatorError::UnknownModel {
                model: model.to_string(),
                table: "text-generation",
            })
    }

    /// Look up transcription rates
    pub fn transcription_model(&self, model: &str) -> Result<&TranscriptionRates> {
        self.transcription_models
            .get(model)
            .ok_or_else(|| EstimatorError::UnknownModel {
                model: model.to_string(),
                table: "transcription",
            })
    }

    /// Look up synthesis rates
    pub fn synthesis_model(&self, model: &str) -> Result<&SynthesisRates> {
        self.synthesis_models
            .get(model)
            .ok_or_else(|| EstimatorError::UnknownModel {
                model: model.to_string(),
                table: "speech-synthesis",
            })
    }

    /// Look up speech-to-speech rates
    pub fn speech_to_speech_model(&self, model: &str) -> Result<&SpeechToSpeechRates> {
        self.speech_to_speech_models
            .get(model)
            .ok_or_else(|| EstimatorError::UnknownModel {
                model: model.to_string(),
                table: "speech-to-speech",
            })
    }

    /// Look up audio omni rates
    pub fn omni_model(&self, model: &str) -> Result<&OmniModelRates> {
        self.omni_models
            .get(model)
            .ok_or_else(|| EstimatorError::UnknownModel {
                model: model.to_string(),
                table: "audio-omni",
            })
    }

    /// Convert a base-currency amount to display currency
    pub fn to_display(&self, base_amount: f64) -> f64 {
        base_amount * self.currency_multiplier
    }
}
