//! Voice-analytics calculators
//!
//! Batch post-call analysis: a corpus of recorded audio is transcribed
//! (or fed to an omni model directly), the base analysis prompt is
//! resent per file, and one report is generated per file. There is no
//! conversational history here, so the history model is not involved;
//! the base prompt per file is the only caching surface.

use tracing::debug;

use crate::config::catalog::{CacheSupport, PricingCatalog};
use crate::core::calculator::conversions::token_cost;
use crate::core::types::inputs::VoiceAnalyticsInputs;
use crate::core::types::result::{CalculationResult, CostBreakdown, UsageBreakdown};
use crate::core::types::selection::{ModelRole, ModelType, SelectedModels};
use crate::utils::error::Result;

/// Transcribe-then-analyze estimate (STT + TTT)
pub fn calculate_traditional(
    inputs: &VoiceAnalyticsInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    let model_type = ModelType::SttTtt;
    let stt_model = models.require(ModelRole::Transcription, model_type)?;
    let ttt_model = models.require(ModelRole::TextGeneration, model_type)?;

    let stt_rates = catalog.transcription_model(stt_model)?;
    let ttt_rates = catalog.text_model(ttt_model)?;
    let ratios = &catalog.conversions;

    if inputs.files == 0 {
        return Ok(CalculationResult {
            costs: CostBreakdown {
                total_cost: 0.0,
                stt_cost: Some(0.0),
                cached_input_cost: Some(0.0),
                non_cached_input_cost: Some(0.0),
                output_cost: Some(0.0),
                ..Default::default()
            },
            usage: UsageBreakdown {
                input_tokens: Some(0.0),
                cached_input_tokens: Some(0.0),
                output_tokens: Some(0.0),
                ..Default::default()
            },
        });
    }
    let files = inputs.files as f64;

    let stt_cost = inputs.total_audio_minutes * stt_rates.cost_per_minute;

    // Transcript volume per file, fed to the analysis model as fresh input
    let minutes_per_file = inputs.total_audio_minutes / files;
    let transcript_tokens_per_file =
        minutes_per_file * ratios.minutes_to_words * ratios.words_to_tokens;
    let non_cached_tokens = transcript_tokens_per_file * files;

    // The analysis prompt is identical across files, so it caches
    let cached_tokens = inputs.base_prompt_words * ratios.words_to_tokens * files;

    let output_tokens = inputs.report_words * ratios.words_to_tokens * files;

    let cached_cost = token_cost(cached_tokens, ttt_rates.cached_input);
    let non_cached_cost = token_cost(non_cached_tokens, ttt_rates.input);
    let output_cost = token_cost(output_tokens, ttt_rates.output);

    let total_cost = stt_cost + cached_cost + non_cached_cost + output_cost;
    debug!(
        stt_model,
        ttt_model,
        files = inputs.files,
        total_usd = total_cost,
        "voice analytics (stt-ttt) estimate"
    );

    let costs = CostBreakdown {
        total_cost,
        stt_cost: Some(stt_cost),
        cached_input_cost: Some(cached_cost),
        non_cached_input_cost: Some(non_cached_cost),
        output_cost: Some(output_cost),
        ..Default::default()
    }
    .into_display(catalog.currency_multiplier);

    Ok(CalculationResult {
        costs,
        usage: UsageBreakdown {
            input_tokens: Some(non_cached_tokens),
            cached_input_tokens: Some(cached_tokens),
            output_tokens: Some(output_tokens),
            ..Default::default()
        },
    })
}

/// Direct omni analysis estimate (audio in, text report out)
///
/// Which input line the base prompt lands on is a capability question,
/// not a volume question: a caching model reports a cached line even
/// when the volume is zero, a non-caching model never reports one.
pub fn calculate_omni(
    inputs: &VoiceAnalyticsInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    let omni_model = models.require(ModelRole::AudioOmni, ModelType::SttOmni)?;
    let rates = catalog.omni_model(omni_model)?;
    let ratios = &catalog.conversions;

    let support = rates.cache_support();
    let supports_caching = matches!(support, CacheSupport::Supported { .. });

    if inputs.files == 0 {
        return Ok(CalculationResult {
            costs: CostBreakdown {
                total_cost: 0.0,
                audio_input_cost: Some(0.0),
                cached_input_cost: supports_caching.then_some(0.0),
                non_cached_input_cost: (!supports_caching).then_some(0.0),
                output_cost: Some(0.0),
                ..Default::default()
            },
            usage: UsageBreakdown {
                audio_input_tokens: Some(0.0),
                cached_input_tokens: supports_caching.then_some(0.0),
                input_tokens: (!supports_caching).then_some(0.0),
                output_tokens: Some(0.0),
                ..Default::default()
            },
        });
    }
    let files = inputs.files as f64;

    let minutes_per_file = inputs.total_audio_minutes / files;
    let audio_input_tokens = minutes_per_file * ratios.minutes_to_audio_tokens * files;

    let prompt_tokens = inputs.base_prompt_words * ratios.words_to_tokens * files;
    let output_tokens = inputs.report_words * ratios.words_to_tokens * files;

    let audio_input_cost = token_cost(audio_input_tokens, rates.audio_input);
    let prompt_cost = match support {
        CacheSupport::Supported { cached_rate } => token_cost(prompt_tokens, cached_rate),
        CacheSupport::Unsupported => token_cost(prompt_tokens, rates.text_input),
    };
    let output_cost = token_cost(output_tokens, rates.text_output);

    let total_cost = audio_input_cost + prompt_cost + output_cost;
    debug!(
        omni_model,
        files = inputs.files,
        caching = supports_caching,
        total_usd = total_cost,
        "voice analytics (stt-omni) estimate"
    );

    let costs = CostBreakdown {
        total_cost,
        audio_input_cost: Some(audio_input_cost),
        cached_input_cost: supports_caching.then_some(prompt_cost),
        non_cached_input_cost: (!supports_caching).then_some(prompt_cost),
        output_cost: Some(output_cost),
        ..Default::default()
    }
    .into_display(catalog.currency_multiplier);

    Ok(CalculationResult {
        costs,
        usage: UsageBreakdown {
            audio_input_tokens: Some(audio_input_tokens),
            cached_input_tokens: supports_caching.then_some(prompt_tokens),
            input_tokens: (!supports_caching).then_some(prompt_tokens),
            output_tokens: Some(output_tokens),
            ..Default::default()
        },
    })
}
