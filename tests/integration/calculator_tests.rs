//! End-to-end calculator tests through the public API

use convocost::config::{builtin_catalog, default_selection};
use convocost::core::calculate;
use convocost::core::types::selection::{ModelType, SelectedModels};

use crate::assert_approx_eq;
use crate::common::assertions::{assert_components_sum_to_total, assert_result_is_sane};
use crate::common::fixtures;

const ALL_MODEL_TYPES: [ModelType; 6] = [
    ModelType::Ttt,
    ModelType::SttTttTts,
    ModelType::OmniTextTts,
    ModelType::Sts,
    ModelType::SttTtt,
    ModelType::SttOmni,
];

fn session_for(model_type: ModelType) -> convocost::SessionInputs {
    match model_type {
        ModelType::Ttt => fixtures::chatbot_session(),
        ModelType::SttTttTts | ModelType::OmniTextTts | ModelType::Sts => {
            fixtures::voicebot_session()
        }
        ModelType::SttTtt | ModelType::SttOmni => fixtures::analytics_session(),
    }
}

#[test]
fn test_every_model_type_produces_a_sane_result() {
    let catalog = builtin_catalog();
    for model_type in ALL_MODEL_TYPES {
        let inputs = session_for(model_type);
        let models = default_selection(model_type);
        let result = calculate(model_type, &inputs, &models, &catalog).unwrap();

        assert!(
            result.costs.total_cost > 0.0,
            "{model_type} produced zero cost"
        );
        assert_result_is_sane(&result);
        assert_components_sum_to_total(&result);
    }
}

#[test]
fn test_chatbot_summary_scenario_exact_figures() {
    // 300 words, ratio 0.5, 10 exchanges, 200-word base prompt,
    // 100-word summary refreshed every 5 exchanges, on gpt-5-mini
    // (input $0.25, cached $0.025, output $2.00 per 1M tokens).
    let catalog = builtin_catalog();
    let models = SelectedModels::default().with_text("gpt-5-mini");
    let result = calculate(
        ModelType::Ttt,
        &fixtures::chatbot_session(),
        &models,
        &catalog,
    )
    .unwrap();

    // Anchor: (200 + 100) words * 4/3 * 10 exchanges
    assert_approx_eq!(result.usage.cached_input_tokens.unwrap(), 4000.0, 1e-9);
    // Live input 200 * 4/3, plus 2 summarization calls reading 40 * 2.5 each
    assert_approx_eq!(result.usage.input_tokens.unwrap(), 1400.0 / 3.0 + 200.0, 1e-9);
    // Responses 100 * 4/3, plus 2 summaries of 100 * 4/3
    assert_approx_eq!(result.usage.output_tokens.unwrap(), 400.0, 1e-9);

    // Cost lines in INR at the 91.59 multiplier
    assert_approx_eq!(
        result.costs.cached_input_cost.unwrap(),
        4000.0 * 0.025 / 1e6 * 91.59,
        1e-12
    );
    assert_approx_eq!(
        result.costs.output_cost.unwrap(),
        400.0 * 2.0 / 1e6 * 91.59,
        1e-12
    );
    assert_components_sum_to_total(&result);
}

#[test]
fn test_display_costs_scale_with_currency_multiplier() {
    let mut usd_catalog = builtin_catalog();
    usd_catalog.currency_multiplier = 1.0;
    let inr_catalog = builtin_catalog();

    for model_type in ALL_MODEL_TYPES {
        let inputs = session_for(model_type);
        let models = default_selection(model_type);
        let usd = calculate(model_type, &inputs, &models, &usd_catalog).unwrap();
        let inr = calculate(model_type, &inputs, &models, &inr_catalog).unwrap();

        // Conversion happens on the final lines only; token volumes are
        // currency-independent.
        assert_approx_eq!(inr.costs.total_cost, usd.costs.total_cost * 91.59, 1e-9);
        assert_eq!(usd.usage, inr.usage);
    }
}

#[test]
fn test_voicebot_text_leg_equals_standalone_chatbot() {
    let catalog = builtin_catalog();
    let voice_models = default_selection(ModelType::SttTttTts);
    let voice = calculate(
        ModelType::SttTttTts,
        &fixtures::voicebot_session(),
        &voice_models,
        &catalog,
    )
    .unwrap();

    // The same conversation typed instead of spoken: 10 minutes at
    // 108 words/minute.
    let mut chat_inputs = fixtures::chatbot_inputs();
    chat_inputs.words_per_session = 10.0 * 108.0;
    let chat_models = SelectedModels::default().with_text("gpt-4.1-mini");
    let chat = calculate(
        ModelType::Ttt,
        &convocost::SessionInputs::Chatbot(chat_inputs),
        &chat_models,
        &catalog,
    )
    .unwrap();

    assert_eq!(voice.costs.cached_input_cost, chat.costs.cached_input_cost);
    assert_eq!(
        voice.costs.non_cached_input_cost,
        chat.costs.non_cached_input_cost
    );
    assert_eq!(voice.costs.text_output_cost, chat.costs.output_cost);
    assert_eq!(voice.usage, chat.usage);
}

#[test]
fn test_analytics_cost_scales_linearly_with_audio_volume() {
    let catalog = builtin_catalog();
    let models = default_selection(ModelType::SttTtt);

    let mut small = fixtures::analytics_inputs();
    small.total_audio_minutes = 300.0;
    small.files = 50;
    let mut large = fixtures::analytics_inputs();
    large.total_audio_minutes = 600.0;
    large.files = 100;

    let small = calculate(
        ModelType::SttTtt,
        &convocost::SessionInputs::VoiceAnalytics(small),
        &models,
        &catalog,
    )
    .unwrap();
    let large = calculate(
        ModelType::SttTtt,
        &convocost::SessionInputs::VoiceAnalytics(large),
        &models,
        &catalog,
    )
    .unwrap();

    // Same per-file volume, twice the files
    assert_approx_eq!(large.costs.total_cost, small.costs.total_cost * 2.0, 1e-9);
}

#[test]
fn test_analytics_omni_cache_line_follows_model_capability() {
    let catalog = builtin_catalog();
    let inputs = fixtures::analytics_session();

    let caching = SelectedModels::default().with_audio_omni("gpt-realtime");
    let result = calculate(ModelType::SttOmni, &inputs, &caching, &catalog).unwrap();
    assert!(result.costs.cached_input_cost.is_some());
    assert_eq!(result.costs.non_cached_input_cost, None);

    let non_caching = SelectedModels::default().with_audio_omni("gpt-audio");
    let result = calculate(ModelType::SttOmni, &inputs, &non_caching, &catalog).unwrap();
    assert_eq!(result.costs.cached_input_cost, None);
    // Same prompt volume, billed at the full text-input rate
    let prompt_tokens = 200.0 * 4.0 / 3.0 * 100.0;
    assert_approx_eq!(
        result.costs.non_cached_input_cost.unwrap(),
        prompt_tokens * 2.5 / 1e6 * 91.59,
        1e-9
    );
}

#[test]
fn test_sts_has_no_synthesis_or_transcription_lines() {
    let catalog = builtin_catalog();
    let models = default_selection(ModelType::Sts);
    let result = calculate(
        ModelType::Sts,
        &fixtures::voicebot_session(),
        &models,
        &catalog,
    )
    .unwrap();

    assert_eq!(result.costs.stt_cost, None);
    assert_eq!(result.costs.tts_cost, None);
    assert!(result.costs.audio_input_cost.unwrap() > 0.0);
    assert!(result.costs.audio_output_cost.unwrap() > 0.0);
}

#[test]
fn test_absent_lines_are_omitted_from_json() {
    let catalog = builtin_catalog();
    let models = default_selection(ModelType::Ttt);
    let result = calculate(
        ModelType::Ttt,
        &fixtures::chatbot_session(),
        &models,
        &catalog,
    )
    .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    let costs = json.get("costs").unwrap().as_object().unwrap();
    // A chatbot estimate has no speech lines at all, not zero-valued ones
    assert!(!costs.contains_key("stt_cost"));
    assert!(!costs.contains_key("tts_cost"));
    assert!(!costs.contains_key("audio_input_cost"));
    assert!(costs.contains_key("cached_input_cost"));
}
