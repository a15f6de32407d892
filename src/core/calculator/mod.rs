//! Cost calculators
//!
//! One calculator per model-type pipeline, all pure functions over the
//! session inputs, the model selection, and the pricing catalog. The
//! [`calculate`] dispatcher is the single entry point; it routes on the
//! model type and rejects inputs of the wrong product shape.

pub mod analytics;
pub mod chatbot;
pub mod conversions;
pub mod history;
pub mod voicebot;

pub use conversions::ConversionRatios;
pub use history::{HistoryPolicy, HistoryUsage, amortize};

use crate::config::catalog::PricingCatalog;
use crate::core::types::inputs::SessionInputs;
use crate::core::types::result::CalculationResult;
use crate::core::types::selection::{ModelType, SelectedModels};
use crate::utils::error::Result;

/// Run the calculator for `model_type` over `inputs`
///
/// The match is exhaustive over the closed model-type set; adding a
/// variant will not compile until it is routed here.
pub fn calculate(
    model_type: ModelType,
    inputs: &SessionInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    models.validate_for(model_type)?;
    match model_type {
        ModelType::Ttt => chatbot::calculate(inputs.as_chatbot()?, models, catalog),
        ModelType::SttTttTts => {
            voicebot::calculate_traditional(inputs.as_voicebot()?, models, catalog)
        }
        ModelType::OmniTextTts => voicebot::calculate_omni(inputs.as_voicebot()?, models, catalog),
        ModelType::Sts => voicebot::calculate_sts(inputs.as_voicebot()?, models, catalog),
        ModelType::SttTtt => {
            analytics::calculate_traditional(inputs.as_voice_analytics()?, models, catalog)
        }
        ModelType::SttOmni => {
            analytics::calculate_omni(inputs.as_voice_analytics()?, models, catalog)
        }
    }
}
