//! Core type definition module
//!
//! Contains the value objects a calculation is built from: session inputs,
//! model selection, and the result breakdowns.

pub mod inputs;
pub mod result;
pub mod selection;

// Re-export all public types
pub use inputs::{
    ChatbotInputs, HistoryMode, HistorySettings, SessionInputs, SessionUnit,
    VoiceAnalyticsInputs, VoicebotInputs,
};
pub use result::{CalculationResult, CostBreakdown, UsageBreakdown};
pub use selection::{ModelRole, ModelType, Product, SelectedModels};
