//! Voice-session calculators
//!
//! Three stacks for the same session shape:
//! - transcribe → generate → synthesize (STT + TTT + TTS)
//! - omni model with text output, plus synthesis
//! - speech-to-speech
//!
//! All three derive the user/assistant word split from session duration
//! and the output:input ratio, then diverge in which modality each leg
//! bills in.

use tracing::debug;

use crate::config::catalog::{CacheSupport, PricingCatalog};
use crate::core::calculator::chatbot;
use crate::core::calculator::conversions::{character_cost, token_cost};
use crate::core::calculator::history;
use crate::core::types::inputs::{ChatbotInputs, VoicebotInputs};
use crate::core::types::result::{CalculationResult, CostBreakdown, UsageBreakdown};
use crate::core::types::selection::{ModelRole, ModelType, SelectedModels};
use crate::utils::error::Result;

/// User/assistant word split for a voice session
struct WordSplit {
    user_words: f64,
    assistant_words: f64,
}

fn split_words(inputs: &VoicebotInputs, minutes_to_words: f64) -> WordSplit {
    let total_words = inputs.session_minutes * minutes_to_words;
    let user_words = total_words / (1.0 + inputs.output_input_ratio);
    WordSplit {
        user_words,
        assistant_words: user_words * inputs.output_input_ratio,
    }
}

/// Transcribe → generate → synthesize estimate
pub fn calculate_traditional(
    inputs: &VoicebotInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    let model_type = ModelType::SttTttTts;
    let stt_model = models.require(ModelRole::Transcription, model_type)?;
    let ttt_model = models.require(ModelRole::TextGeneration, model_type)?;
    let tts_model = models.require(ModelRole::Synthesis, model_type)?;

    let stt_rates = catalog.transcription_model(stt_model)?;
    let ttt_rates = catalog.text_model(ttt_model)?;
    let tts_rates = catalog.synthesis_model(tts_model)?;
    let ratios = &catalog.conversions;

    if inputs.exchanges == 0 {
        return Ok(zero_traditional_result());
    }

    let words = split_words(inputs, ratios.minutes_to_words);

    // Transcription bills on the user's share of the speech
    let user_speech_minutes = words.user_words / ratios.minutes_to_words;
    let stt_cost = user_speech_minutes * stt_rates.cost_per_minute;

    // The text leg is the chatbot calculation over the combined word count
    let text_inputs = ChatbotInputs {
        session_unit: inputs.session_unit,
        words_per_session: words.user_words + words.assistant_words,
        output_input_ratio: inputs.output_input_ratio,
        exchanges: inputs.exchanges,
        base_prompt_words: inputs.base_prompt_words,
        history: inputs.history.clone(),
    };
    let leg = chatbot::text_leg(&text_inputs, ttt_rates, ratios);

    // Synthesis bills per character of assistant text
    let assistant_characters = words.assistant_words * ratios.words_to_characters;
    let tts_cost = character_cost(assistant_characters, tts_rates.cost_per_million_chars);

    let total_cost = stt_cost + leg.total_cost() + tts_cost;
    debug!(
        stt_model,
        ttt_model, tts_model, total_usd = total_cost, "voicebot (stt-ttt-tts) estimate"
    );

    let costs = CostBreakdown {
        total_cost,
        stt_cost: Some(stt_cost),
        cached_input_cost: Some(leg.cached_cost),
        non_cached_input_cost: Some(leg.non_cached_cost),
        text_output_cost: Some(leg.output_cost),
        tts_cost: Some(tts_cost),
        ..Default::default()
    }
    .into_display(catalog.currency_multiplier);

    Ok(CalculationResult {
        costs,
        usage: UsageBreakdown {
            input_tokens: Some(leg.non_cached_tokens),
            cached_input_tokens: Some(leg.cached_tokens),
            output_tokens: Some(leg.output_tokens),
            ..Default::default()
        },
    })
}

fn zero_traditional_result() -> CalculationResult {
    CalculationResult {
        costs: CostBreakdown {
            total_cost: 0.0,
            stt_cost: Some(0.0),
            cached_input_cost: Some(0.0),
            non_cached_input_cost: Some(0.0),
            text_output_cost: Some(0.0),
            tts_cost: Some(0.0),
            ..Default::default()
        },
        usage: UsageBreakdown {
            input_tokens: Some(0.0),
            cached_input_tokens: Some(0.0),
            output_tokens: Some(0.0),
            ..Default::default()
        },
    }
}

/// Omni (text out) + synthesis estimate
///
/// User speech enters the omni model as audio tokens; the assistant
/// response leaves as text tokens and is then synthesized. Base prompt
/// and history bill as text, cached only if the model supports it.
pub fn calculate_omni(
    inputs: &VoicebotInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    let model_type = ModelType::OmniTextTts;
    let omni_model = models.require(ModelRole::AudioOmni, model_type)?;
    let tts_model = models.require(ModelRole::Synthesis, model_type)?;

    let omni_rates = catalog.omni_model(omni_model)?;
    let tts_rates = catalog.synthesis_model(tts_model)?;
    let ratios = &catalog.conversions;

    if inputs.exchanges == 0 {
        return Ok(CalculationResult {
            costs: CostBreakdown {
                total_cost: 0.0,
                audio_input_cost: Some(0.0),
                text_output_cost: Some(0.0),
                tts_cost: Some(0.0),
                ..Default::default()
            },
            usage: UsageBreakdown {
                audio_input_tokens: Some(0.0),
                output_tokens: Some(0.0),
                ..Default::default()
            },
        });
    }
    let n = inputs.exchanges as f64;

    let words = split_words(inputs, ratios.minutes_to_words);
    let user_speech_minutes = words.user_words / ratios.minutes_to_words;
    let audio_input_tokens = user_speech_minutes * ratios.minutes_to_audio_tokens;

    // Assistant response leaves the model as text
    let response_tokens = words.assistant_words * ratios.words_to_tokens;

    // History is carried as text transcripts of both sides
    let user_text_per_exchange = words.user_words / n * ratios.words_to_tokens;
    let assistant_text_per_exchange = words.assistant_words / n * ratios.words_to_tokens;
    let base_prompt_tokens = inputs.base_prompt_words * ratios.words_to_tokens;

    let support = omni_rates.cache_support();
    let hist = history::amortize(
        inputs.history.policy(ratios.words_to_tokens),
        user_text_per_exchange,
        assistant_text_per_exchange,
        base_prompt_tokens,
        inputs.exchanges,
        matches!(support, CacheSupport::Supported { .. }),
    );

    let output_tokens = response_tokens + hist.extra_output_tokens;

    let audio_input_cost = token_cost(audio_input_tokens, omni_rates.audio_input);
    let text_output_cost = token_cost(output_tokens, omni_rates.text_output);
    let cached_cost = match support {
        CacheSupport::Supported { cached_rate } if hist.cached_tokens > 0.0 => {
            token_cost(hist.cached_tokens, cached_rate)
        }
        _ => 0.0,
    };
    let non_cached_cost = if hist.non_cached_tokens > 0.0 {
        token_cost(hist.non_cached_tokens, omni_rates.text_input)
    } else {
        0.0
    };

    let assistant_characters = words.assistant_words * ratios.words_to_characters;
    let tts_cost = character_cost(assistant_characters, tts_rates.cost_per_million_chars);

    let total_cost = audio_input_cost + cached_cost + non_cached_cost + text_output_cost + tts_cost;
    debug!(
        omni_model,
        tts_model,
        caching = matches!(support, CacheSupport::Supported { .. }),
        total_usd = total_cost,
        "voicebot (omni-text-tts) estimate"
    );

    let costs = CostBreakdown {
        total_cost,
        audio_input_cost: Some(audio_input_cost),
        cached_input_cost: (hist.cached_tokens > 0.0).then_some(cached_cost),
        non_cached_input_cost: (hist.non_cached_tokens > 0.0).then_some(non_cached_cost),
        text_output_cost: Some(text_output_cost),
        tts_cost: Some(tts_cost),
        ..Default::default()
    }
    .into_display(catalog.currency_multiplier);

    Ok(CalculationResult {
        costs,
        usage: UsageBreakdown {
            audio_input_tokens: Some(audio_input_tokens),
            cached_input_tokens: (hist.cached_tokens > 0.0).then_some(hist.cached_tokens),
            input_tokens: (hist.non_cached_tokens > 0.0).then_some(hist.non_cached_tokens),
            output_tokens: Some(output_tokens),
            ..Default::default()
        },
    })
}

/// Speech-to-speech estimate
///
/// Both directions bill as audio tokens. The text-equivalent transcript
/// volume drives history and base-prompt accounting only; there is no
/// separate transcription or synthesis charge, and caching is always
/// available for STS entries.
pub fn calculate_sts(
    inputs: &VoicebotInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    let sts_model = models.require(ModelRole::SpeechToSpeech, ModelType::Sts)?;
    let rates = catalog.speech_to_speech_model(sts_model)?;
    let ratios = &catalog.conversions;

    if inputs.exchanges == 0 {
        return Ok(CalculationResult {
            costs: CostBreakdown {
                total_cost: 0.0,
                audio_input_cost: Some(0.0),
                audio_output_cost: Some(0.0),
                ..Default::default()
            },
            usage: UsageBreakdown {
                audio_input_tokens: Some(0.0),
                audio_output_tokens: Some(0.0),
                ..Default::default()
            },
        });
    }
    let n = inputs.exchanges as f64;

    let words = split_words(inputs, ratios.minutes_to_words);
    let user_speech_minutes = words.user_words / ratios.minutes_to_words;
    let assistant_speech_minutes = words.assistant_words / ratios.minutes_to_words;

    let audio_input_tokens = user_speech_minutes * ratios.minutes_to_audio_tokens;
    let audio_output_tokens = assistant_speech_minutes * ratios.minutes_to_audio_tokens;

    let user_text_per_exchange = words.user_words / n * ratios.words_to_tokens;
    let assistant_text_per_exchange = words.assistant_words / n * ratios.words_to_tokens;
    let base_prompt_tokens = inputs.base_prompt_words * ratios.words_to_tokens;

    let hist = history::amortize(
        inputs.history.policy(ratios.words_to_tokens),
        user_text_per_exchange,
        assistant_text_per_exchange,
        base_prompt_tokens,
        inputs.exchanges,
        true,
    );

    let audio_input_cost = token_cost(audio_input_tokens, rates.audio_input);
    let audio_output_cost = token_cost(audio_output_tokens, rates.audio_output);
    let cached_cost = if hist.cached_tokens > 0.0 {
        token_cost(hist.cached_tokens, rates.text_cached)
    } else {
        0.0
    };
    let non_cached_cost = if hist.non_cached_tokens > 0.0 {
        token_cost(hist.non_cached_tokens, rates.text_input)
    } else {
        0.0
    };
    let text_output_cost = if hist.extra_output_tokens > 0.0 {
        token_cost(hist.extra_output_tokens, rates.text_output)
    } else {
        0.0
    };

    let total_cost =
        audio_input_cost + audio_output_cost + cached_cost + non_cached_cost + text_output_cost;
    debug!(sts_model, total_usd = total_cost, "voicebot (sts) estimate");

    let costs = CostBreakdown {
        total_cost,
        audio_input_cost: Some(audio_input_cost),
        audio_output_cost: Some(audio_output_cost),
        cached_input_cost: (hist.cached_tokens > 0.0).then_some(cached_cost),
        non_cached_input_cost: (hist.non_cached_tokens > 0.0).then_some(non_cached_cost),
        text_output_cost: (hist.extra_output_tokens > 0.0).then_some(text_output_cost),
        ..Default::default()
    }
    .into_display(catalog.currency_multiplier);

    Ok(CalculationResult {
        costs,
        usage: UsageBreakdown {
            audio_input_tokens: Some(audio_input_tokens),
            audio_output_tokens: Some(audio_output_tokens),
            cached_input_tokens: (hist.cached_tokens > 0.0).then_some(hist.cached_tokens),
            input_tokens: (hist.non_cached_tokens > 0.0).then_some(hist.non_cached_tokens),
            output_tokens: (hist.extra_output_tokens > 0.0).then_some(hist.extra_output_tokens),
            ..Default::default()
        },
    })
}
