//! Text-only chatbot calculator
//!
//! Splits the session's word volume into user input and assistant output
//! by the output:input ratio, spreads it evenly across exchanges, and
//! amortizes the base prompt and history per the retention policy.

use tracing::debug;

use crate::config::catalog::{PricingCatalog, TextModelRates};
use crate::core::calculator::conversions::{ConversionRatios, token_cost};
use crate::core::calculator::history;
use crate::core::types::inputs::ChatbotInputs;
use crate::core::types::result::{CalculationResult, CostBreakdown, UsageBreakdown};
use crate::core::types::selection::{ModelRole, ModelType, SelectedModels};
use crate::utils::error::Result;

/// Text-generation cost lines in base currency, with the token volumes
/// behind them
///
/// Shared with the voicebot calculator, which embeds the text leg of its
/// pipeline unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TextLeg {
    pub cached_cost: f64,
    pub non_cached_cost: f64,
    pub output_cost: f64,
    pub cached_tokens: f64,
    pub non_cached_tokens: f64,
    pub output_tokens: f64,
}

impl TextLeg {
    pub fn total_cost(&self) -> f64 {
        self.cached_cost + self.non_cached_cost + self.output_cost
    }
}

/// Compute the text leg for a chatbot-shaped session
pub(crate) fn text_leg(
    inputs: &ChatbotInputs,
    rates: &TextModelRates,
    ratios: &ConversionRatios,
) -> TextLeg {
    // Zero-length session: nothing to divide, nothing to charge
    if inputs.exchanges == 0 {
        return TextLeg::default();
    }
    let n = inputs.exchanges as f64;

    let input_words = inputs.words_per_session / (1.0 + inputs.output_input_ratio);
    let output_words = input_words * inputs.output_input_ratio;

    let input_tokens_per_exchange = input_words / n * ratios.words_to_tokens;
    let output_tokens_per_exchange = output_words / n * ratios.words_to_tokens;
    let base_prompt_tokens = inputs.base_prompt_words * ratios.words_to_tokens;

    let hist = history::amortize(
        inputs.history.policy(ratios.words_to_tokens),
        input_tokens_per_exchange,
        output_tokens_per_exchange,
        base_prompt_tokens,
        inputs.exchanges,
        true,
    );

    // The live turn's input is charged once per exchange at the full rate
    let non_cached_tokens = input_tokens_per_exchange * n + hist.non_cached_tokens;
    let output_tokens = output_tokens_per_exchange * n + hist.extra_output_tokens;

    TextLeg {
        cached_cost: token_cost(hist.cached_tokens, rates.cached_input),
        non_cached_cost: token_cost(non_cached_tokens, rates.input),
        output_cost: token_cost(output_tokens, rates.output),
        cached_tokens: hist.cached_tokens,
        non_cached_tokens,
        output_tokens,
    }
}

/// Text-only chatbot estimate
pub fn calculate(
    inputs: &ChatbotInputs,
    models: &SelectedModels,
    catalog: &PricingCatalog,
) -> Result<CalculationResult> {
    let model = models.require(ModelRole::TextGeneration, ModelType::Ttt)?;
    let rates = catalog.text_model(model)?;

    let leg = text_leg(inputs, rates, &catalog.conversions);
    debug!(
        model,
        exchanges = inputs.exchanges,
        total_usd = leg.total_cost(),
        "chatbot estimate"
    );

    let costs = CostBreakdown {
        total_cost: leg.total_cost(),
        cached_input_cost: Some(leg.cached_cost),
        non_cached_input_cost: Some(leg.non_cached_cost),
        output_cost: Some(leg.output_cost),
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
