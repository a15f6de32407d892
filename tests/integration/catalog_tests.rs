//! Catalog loading and validation through the public API

use std::io::Write;
use tempfile::NamedTempFile;

use convocost::config::{PricingCatalog, builtin_catalog, default_selection};
use convocost::core::calculate;
use convocost::core::types::selection::{ModelType, SelectedModels};
use convocost::utils::error::EstimatorError;

use crate::assert_approx_eq;
use crate::common::fixtures;

#[test]
fn test_builtin_catalog_round_trips_through_a_file() {
    let catalog = builtin_catalog();
    let yaml = catalog.to_yaml().unwrap();

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(yaml.as_bytes()).unwrap();
    let loaded = PricingCatalog::from_yaml_file(temp_file.path()).unwrap();

    // Same rates means same estimates
    let models = default_selection(ModelType::SttTttTts);
    let from_builtin = calculate(
        ModelType::SttTttTts,
        &fixtures::voicebot_session(),
        &models,
        &catalog,
    )
    .unwrap();
    let from_file = calculate(
        ModelType::SttTttTts,
        &fixtures::voicebot_session(),
        &models,
        &loaded,
    )
    .unwrap();
    assert_eq!(from_builtin, from_file);
}

#[test]
fn test_loaded_catalog_replaces_the_builtin_wholesale() {
    // A catalog with a single text model: every other lookup must fail,
    // not fall back to the built-in tables.
    let catalog = PricingCatalog::from_yaml_str(
        r#"
currency_multiplier: 1.0
text_models:
  my-model:
    input: 1.0
    cached_input: 0.1
    output: 4.0
"#,
    )
    .unwrap();

    let models = SelectedModels::default().with_text("gpt-4.1-mini");
    let err = calculate(
        ModelType::Ttt,
        &fixtures::chatbot_session(),
        &models,
        &catalog,
    )
    .unwrap_err();
    match err {
        EstimatorError::UnknownModel { model, table } => {
            assert_eq!(model, "gpt-4.1-mini");
            assert_eq!(table, "text-generation");
        }
        other => panic!("Expected UnknownModel, got {:?}", other),
    }

    let models = SelectedModels::default().with_text("my-model");
    let result = calculate(
        ModelType::Ttt,
        &fixtures::chatbot_session(),
        &models,
        &catalog,
    )
    .unwrap();
    assert!(result.costs.total_cost > 0.0);
}

#[test]
fn test_catalog_conversion_ratios_flow_into_the_calculation() {
    let catalog = builtin_catalog();
    let mut dense_speech = builtin_catalog();
    dense_speech.conversions.minutes_to_words = 216.0;

    let models = default_selection(ModelType::SttTtt);
    let base = calculate(
        ModelType::SttTtt,
        &fixtures::analytics_session(),
        &models,
        &catalog,
    )
    .unwrap();
    let dense = calculate(
        ModelType::SttTtt,
        &fixtures::analytics_session(),
        &models,
        &dense_speech,
    )
    .unwrap();

    // Twice the words per minute means twice the transcript tokens
    assert_approx_eq!(
        dense.usage.input_tokens.unwrap(),
        base.usage.input_tokens.unwrap() * 2.0,
        1e-9
    );
    // The per-minute transcription charge is unaffected
    assert_eq!(dense.costs.stt_cost, base.costs.stt_cost);
}

#[test]
fn test_invalid_catalogs_are_rejected_on_load() {
    // Negative rate
    let err = PricingCatalog::from_yaml_str(
        r#"
currency_multiplier: 91.59
text_models:
  broken:
    input: -0.25
    cached_input: 0.025
    output: 2.0
"#,
    )
    .unwrap_err();
    assert!(matches!(err, EstimatorError::Config(_)));

    // Non-positive multiplier
    let err = PricingCatalog::from_yaml_str("currency_multiplier: 0.0").unwrap_err();
    assert!(matches!(err, EstimatorError::Config(_)));

    // Malformed YAML
    let err = PricingCatalog::from_yaml_str("currency_multiplier: [").unwrap_err();
    assert!(matches!(err, EstimatorError::Yaml(_)));
}

#[test]
fn test_omni_cache_capability_survives_serialization() {
    let catalog = builtin_catalog();
    let yaml = catalog.to_yaml().unwrap();
    let loaded = PricingCatalog::from_yaml_str(&yaml).unwrap();

    // gpt-audio has no cached rate; the round trip must not invent one
    let rates = loaded.omni_model("gpt-audio").unwrap();
    assert_eq!(rates.text_cached, None);
    let rates = loaded.omni_model("gpt-realtime").unwrap();
    assert_eq!(rates.text_cached, Some(0.4));
}
