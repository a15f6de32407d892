//! Built-in pricing catalog and default model selections
//!
//! Published list prices, per million tokens (or per minute / per
//! million characters where noted), in USD. A catalog loaded from disk
//! replaces this wholesale; the two are never merged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::config::catalog::{
    OmniModelRates, PricingCatalog, SpeechToSpeechRates, SynthesisRates, TextModelRates,
    TranscriptionRates,
};
use crate::core::calculator::conversions::ConversionRatios;
use crate::core::types::selection::{ModelType, SelectedModels};

/// USD → INR, the default display conversion
pub const DEFAULT_CURRENCY_MULTIPLIER: f64 = 91.59;

static BUILTIN: Lazy<PricingCatalog> = Lazy::new(build_catalog);

/// The built-in catalog
pub fn builtin_catalog() -> PricingCatalog {
    BUILTIN.clone()
}

/// Default model selection for a model type
pub fn default_selection(model_type: ModelType) -> SelectedModels {
    match model_type {
        ModelType::Ttt => SelectedModels::default().with_text("gpt-4.1-mini"),
        ModelType::SttTttTts => SelectedModels::default()
            .with_transcription("whisper")
            .with_text("gpt-4.1-mini")
            .with_synthesis("tts"),
        ModelType::OmniTextTts => SelectedModels::default()
            .with_audio_omni("gpt-audio-mini")
            .with_synthesis("tts"),
        ModelType::Sts => SelectedModels::default().with_speech_to_speech("gpt-realtime-mini"),
        ModelType::SttTtt => SelectedModels::default()
            .with_transcription("whisper")
            .with_text("gpt-4.1-mini"),
        ModelType::SttOmni => SelectedModels::default().with_audio_omni("gpt-audio-mini"),
    }
}

fn text(input: f64, cached_input: f64, output: f64, notes: &str) -> TextModelRates {
    TextModelRates {
        input,
        cached_input,
        output,
        notes: (!notes.is_empty()).then(|| notes.to_string()),
    }
}

fn build_catalog() -> PricingCatalog {
    let mut text_models = HashMap::new();
    text_models.insert("gpt-5".to_string(), text(1.25, 0.125, 10.0, "Flagship"));
    text_models.insert("gpt-5-mini".to_string(), text(0.25, 0.025, 2.0, ""));
    text_models.insert("gpt-5-nano".to_string(), text(0.05, 0.005, 0.4, ""));
    text_models.insert("gpt-4.1".to_string(), text(2.0, 0.5, 8.0, ""));
    text_models.insert("gpt-4.1-mini".to_string(), text(0.4, 0.1, 1.6, ""));
    text_models.insert("gpt-4.1-nano".to_string(), text(0.1, 0.025, 0.4, ""));
    text_models.insert("gpt-4o".to_string(), text(2.5, 1.25, 10.0, ""));
    text_models.insert("gpt-4o-mini".to_string(), text(0.15, 0.075, 0.6, ""));

    let mut transcription_models = HashMap::new();
    transcription_models.insert(
        "whisper".to_string(),
        TranscriptionRates {
            cost_per_minute: 0.006,
            notes: Some("Standard transcription".to_string()),
        },
    );
    transcription_models.insert(
        "gpt-4o-transcribe".to_string(),
        TranscriptionRates {
            cost_per_minute: 0.006,
            notes: None,
        },
    );
    transcription_models.insert(
        "gpt-4o-mini-transcribe".to_string(),
        TranscriptionRates {
            cost_per_minute: 0.003,
            notes: None,
        },
    );

    let mut synthesis_models = HashMap::new();
    synthesis_models.insert(
        "tts".to_string(),
        SynthesisRates {
            cost_per_million_chars: 15.0,
            notes: None,
        },
    );
    synthesis_models.insert(
        "tts-hd".to_string(),
        SynthesisRates {
            cost_per_million_chars: 30.0,
            notes: Some("Higher quality".to_string()),
        },
    );

    let mut speech_to_speech_models = HashMap::new();
    speech_to_speech_models.insert(
        "gpt-realtime".to_string(),
        SpeechToSpeechRates {
            text_input: 4.0,
            text_cached: 0.4,
            text_output: 16.0,
            audio_input: 32.0,
            audio_cached: Some(0.4),
            audio_output: 64.0,
            notes: None,
        },
    );
    speech_to_speech_models.insert(
        "gpt-realtime-mini".to_string(),
        SpeechToSpeechRates {
            text_input: 0.6,
            text_cached: 0.06,
            text_output: 2.4,
            audio_input: 10.0,
            audio_cached: Some(0.3),
            audio_output: 20.0,
            notes: None,
        },
    );

    let mut omni_models = HashMap::new();
    omni_models.insert(
        "gpt-audio".to_string(),
        OmniModelRates {
            text_input: 2.5,
            text_cached: None,
            text_output: 10.0,
            audio_input: 32.0,
            audio_output: 64.0,
            notes: Some("No prompt caching".to_string()),
        },
    );
    omni_models.insert(
        "gpt-audio-mini".to_string(),
        OmniModelRates {
            text_input: 0.6,
            text_cached: None,
            text_output: 2.4,
            audio_input: 10.0,
            audio_output: 20.0,
            notes: Some("No prompt caching".to_string()),
        },
    );
    omni_models.insert(
        "gpt-realtime".to_string(),
        OmniModelRates {
            text_input: 4.0,
            text_cached: Some(0.4),
            text_output: 16.0,
            audio_input: 32.0,
            audio_output: 64.0,
            notes: None,
        },
    );
    omni_models.insert(
        "gpt-realtime-mini".to_string(),
        OmniModelRates {
            text_input: 0.6,
            text_cached: Some(0.06),
            text_output: 2.4,
            audio_input: 10.0,
            audio_output: 20.0,
            notes: None,
        },
    );

    PricingCatalog {
        display_currency: "INR".to_string(),
        currency_multiplier: DEFAULT_CURRENCY_MULTIPLIER,
        conversions: ConversionRatios::default(),
        text_models,
        transcription_models,
        synthesis_models,
        speech_to_speech_models,
        omni_models,
        updated_at: chrono::Utc::now(),
    }
}
