//! Pricing configuration
//!
//! The catalog schema, the built-in rate tables, YAML loading, and the
//! validation pass that every loaded catalog goes through.

pub mod catalog;
pub mod defaults;
pub mod loader;
pub mod validation;

pub use catalog::{
    CacheSupport, OmniModelRates, PricingCatalog, SpeechToSpeechRates, SynthesisRates,
    TextModelRates, TranscriptionRates,
};
pub use defaults::{DEFAULT_CURRENCY_MULTIPLIER, builtin_catalog, default_selection};
pub use validation::validate_catalog;
