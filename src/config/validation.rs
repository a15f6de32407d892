//! Catalog validation
//!
//! Sanity checks run on every loaded catalog before any calculator sees
//! it. A negative rate or a non-positive currency multiplier is a
//! configuration mistake, never a legitimate price.

use tracing::debug;

use crate::config::catalog::PricingCatalog;
use crate::utils::error::{EstimatorError, Result};

fn check_rate(value: f64, model: &str, field: &str) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EstimatorError::Config(format!(
            "model '{}' has invalid {} rate: {}",
            model, field, value
        )));
    }
    Ok(())
}

fn check_optional_rate(value: Option<f64>, model: &str, field: &str) -> Result<()> {
    match value {
        Some(rate) => check_rate(rate, model, field),
        None => Ok(()),
    }
}

/// Validate a pricing catalog
pub fn validate_catalog(catalog: &PricingCatalog) -> Result<()> {
    if !catalog.currency_multiplier.is_finite() || catalog.currency_multiplier <= 0.0 {
        return Err(EstimatorError::Config(format!(
            "currency_multiplier must be positive, got {}",
            catalog.currency_multiplier
        )));
    }

    let ratios = &catalog.conversions;
    for (value, name) in [
        (ratios.words_to_tokens, "words_to_tokens"),
        (ratios.minutes_to_words, "minutes_to_words"),
        (ratios.minutes_to_audio_tokens, "minutes_to_audio_tokens"),
        (ratios.words_to_characters, "words_to_characters"),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(EstimatorError::Config(format!(
                "conversion ratio {} must be positive, got {}",
                name, value
            )));
        }
    }

    for (model, rates) in &catalog.text_models {
        check_rate(rates.input, model, "input")?;
        check_rate(rates.cached_input, model, "cached_input")?;
        check_rate(rates.output, model, "output")?;
    }
    for (model, rates) in &catalog.transcription_models {
        check_rate(rates.cost_per_minute, model, "cost_per_minute")?;
    }
    for (model, rates) in &catalog.synthesis_models {
        check_rate(rates.cost_per_million_chars, model, "cost_per_million_chars")?;
    }
    for (model, rates) in &catalog.speech_to_speech_models {
        check_rate(rates.text_input, model, "text_input")?;
        check_rate(rates.text_cached, model, "text_cached")?;
        check_rate(rates.text_output, model, "text_output")?;
        check_rate(rates.audio_input, model, "audio_input")?;
        check_optional_rate(rates.audio_cached, model, "audio_cached")?;
        check_rate(rates.audio_output, model, "audio_output")?;
    }
    for (model, rates) in &catalog.omni_models {
        check_rate(rates.text_input, model, "text_input")?;
        check_optional_rate(rates.text_cached, model, "text_cached")?;
        check_rate(rates.text_output, model, "text_output")?;
        check_rate(rates.audio_input, model, "audio_input")?;
        check_rate(rates.audio_output, model, "audio_output")?;
    }

    debug!("catalog validation passed");
    Ok(())
}
