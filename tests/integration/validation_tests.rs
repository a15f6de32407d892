//! Input validation and error-path tests

use convocost::config::{builtin_catalog, default_selection};
use convocost::core::calculate;
use convocost::core::types::inputs::SessionInputs;
use convocost::core::types::selection::{ModelRole, ModelType, SelectedModels};
use convocost::utils::error::EstimatorError;

use crate::common::fixtures;

#[test]
fn test_missing_input_reports_the_field_name() {
    let mut inputs = fixtures::chatbot_inputs();
    inputs.words_per_session = 0.0;
    match SessionInputs::Chatbot(inputs).validate().unwrap_err() {
        EstimatorError::MissingInput { field } => assert_eq!(field, "words_per_session"),
        other => panic!("Expected MissingInput, got {:?}", other),
    }

    let mut inputs = fixtures::voicebot_inputs();
    inputs.session_minutes = 0.0;
    match SessionInputs::Voicebot(inputs).validate().unwrap_err() {
        EstimatorError::MissingInput { field } => assert_eq!(field, "session_minutes"),
        other => panic!("Expected MissingInput, got {:?}", other),
    }

    let mut inputs = fixtures::analytics_inputs();
    inputs.report_words = 0.0;
    match SessionInputs::VoiceAnalytics(inputs).validate().unwrap_err() {
        EstimatorError::MissingInput { field } => assert_eq!(field, "report_words"),
        other => panic!("Expected MissingInput, got {:?}", other),
    }
}

#[test]
fn test_zero_output_input_ratio_is_a_valid_session() {
    let catalog = builtin_catalog();
    let models = default_selection(ModelType::Ttt);

    let mut inputs = fixtures::chatbot_inputs();
    inputs.output_input_ratio = 0.0;
    let session = SessionInputs::Chatbot(inputs);
    session.validate().unwrap();

    // An assistant that never responds still has input-side costs
    let result = calculate(ModelType::Ttt, &session, &models, &catalog).unwrap();
    assert!(result.costs.total_cost > 0.0);
    // All responses are zero words; only summarization output remains
    let summary_output = 100.0 * 4.0 / 3.0 * 2.0;
    assert!((result.usage.output_tokens.unwrap() - summary_output).abs() < 1e-9);
}

#[test]
fn test_calculators_tolerate_zero_counts_that_validation_rejects() {
    // Validation flags a zero count as a missing field, but a caller that
    // skips validation still gets a zero estimate, never a panic.
    let catalog = builtin_catalog();

    let mut inputs = fixtures::chatbot_inputs();
    inputs.exchanges = 0;
    let session = SessionInputs::Chatbot(inputs);
    assert!(session.validate().is_err());
    let models = default_selection(ModelType::Ttt);
    let result = calculate(ModelType::Ttt, &session, &models, &catalog).unwrap();
    assert_eq!(result.costs.total_cost, 0.0);

    let mut inputs = fixtures::analytics_inputs();
    inputs.files = 0;
    let session = SessionInputs::VoiceAnalytics(inputs);
    assert!(session.validate().is_err());
    let models = default_selection(ModelType::SttOmni);
    let result = calculate(ModelType::SttOmni, &session, &models, &catalog).unwrap();
    assert_eq!(result.costs.total_cost, 0.0);
    assert!(result.costs.total_cost.is_finite());
}

#[test]
fn test_incomplete_selection_names_the_missing_role() {
    let catalog = builtin_catalog();
    let models = SelectedModels::default().with_audio_omni("gpt-audio-mini");

    // omni-text-tts also needs a synthesis model
    let err = calculate(
        ModelType::OmniTextTts,
        &fixtures::voicebot_session(),
        &models,
        &catalog,
    )
    .unwrap_err();
    match err {
        EstimatorError::IncompleteModelSelection { role, model_type } => {
            assert_eq!(role, ModelRole::Synthesis);
            assert_eq!(model_type, ModelType::OmniTextTts);
        }
        other => panic!("Expected IncompleteModelSelection, got {:?}", other),
    }
}

#[test]
fn test_input_shape_must_match_the_model_type() {
    let catalog = builtin_catalog();

    // Analytics inputs fed to a voicebot calculator
    let models = default_selection(ModelType::Sts);
    let err = calculate(
        ModelType::Sts,
        &fixtures::analytics_session(),
        &models,
        &catalog,
    )
    .unwrap_err();
    assert!(matches!(err, EstimatorError::InvalidInput { .. }));
}

#[test]
fn test_unknown_model_type_string_is_rejected() {
    let err = "stt-tts".parse::<ModelType>().unwrap_err();
    match err {
        EstimatorError::UnknownModelType { value } => assert_eq!(value, "stt-tts"),
        other => panic!("Expected UnknownModelType, got {:?}", other),
    }
}

#[test]
fn test_product_constrains_model_types() {
    use convocost::Product;

    assert_eq!(Product::Chatbot.allowed_model_types(), &[ModelType::Ttt]);
    for product in [Product::Chatbot, Product::Voicebot, Product::VoiceAnalytics] {
        for model_type in product.allowed_model_types() {
            assert_eq!(model_type.product(), product);
        }
    }
}
