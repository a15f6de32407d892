//! Calculation result types
//!
//! Every sub-cost and usage counter is an `Option<f64>`: `None` means the
//! line does not apply to the chosen model type, which is distinct from a
//! line that applies and happens to be zero. Callers that render results
//! may collapse both to a blank, but the data model keeps them apart.

use serde::{Deserialize, Serialize};

/// Cost breakdown in display currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Total cost, always present
    pub total_cost: f64,
    /// Cached (discounted) text-input cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_input_cost: Option<f64>,
    /// Non-cached text-input cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_cached_input_cost: Option<f64>,
    /// Text-output cost (chatbot naming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_cost: Option<f64>,
    /// Transcription cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stt_cost: Option<f64>,
    /// Speech-synthesis cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts_cost: Option<f64>,
    /// Audio-input token cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_input_cost: Option<f64>,
    /// Audio-output token cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_output_cost: Option<f64>,
    /// Text-output cost (voice pipeline naming)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_output_cost: Option<f64>,
}

impl CostBreakdown {
    /// Sum of every applicable cost component
    ///
    /// Equals `total_cost` within floating-point tolerance for every result
    /// the calculators produce.
    pub fn component_sum(&self) -> f64 {
        [
            self.cached_input_cost,
            self.non_cached_input_cost,
            self.output_cost,
            self.stt_cost,
            self.tts_cost,
            self.audio_input_cost,
            self.audio_output_cost,
            self.text_output_cost,
        ]
        .iter()
        .flatten()
        .sum()
    }

    /// Convert every cost line from base to display currency
    pub(crate) fn into_display(self, multiplier: f64) -> Self {
        let scale = |v: Option<f64>| v.map(|x| x * multiplier);
        Self {
            total_cost: self.total_cost * multiplier,
            cached_input_cost: scale(self.cached_input_cost),
            non_cached_input_cost: scale(self.non_cached_input_cost),
            output_cost: scale(self.output_cost),
            stt_cost: scale(self.stt_cost),
            tts_cost: scale(self.tts_cost),
            audio_input_cost: scale(self.audio_input_cost),
            audio_output_cost: scale(self.audio_output_cost),
            text_output_cost: scale(self.text_output_cost),
        }
    }
}

/// Token and unit usage breakdown
///
/// Counts are unit-less (tokens unless the field name says otherwise) and
/// may be fractional, since they derive from word ratios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageBreakdown {
    /// Non-cached input tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_tokens: Option<f64>,
    /// Cached input tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_input_tokens: Option<f64>,
    /// Output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_tokens: Option<f64>,
    /// Audio input tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_input_tokens: Option<f64>,
    /// Audio output tokens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_output_tokens: Option<f64>,
}

/// Full calculation result: costs plus the usage that produced them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Cost breakdown in display currency
    pub costs: CostBreakdown,
    /// Usage breakdown
    pub usage: UsageBreakdown,
}
