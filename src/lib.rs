//! # ConvoCost
//!
//! Cost estimation for conversational-AI products: text chatbots, voice
//! bots, and batch voice analytics, priced against a catalog of model
//! rates.
//!
//! The estimator is a set of pure calculators over three things: the
//! session inputs, the selected models, and a pricing catalog. All
//! arithmetic runs in the catalog's base currency (USD); the display
//! conversion is applied exactly once on the final cost lines.
//!
//! ## Quick start
//!
//! ```rust
//! use convocost::config::{builtin_catalog, default_selection};
//! use convocost::core::calculate;
//! use convocost::core::types::inputs::{ChatbotInputs, HistorySettings, SessionInputs};
//! use convocost::core::types::selection::ModelType;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let inputs = SessionInputs::Chatbot(ChatbotInputs {
//!         session_unit: Default::default(),
//!         words_per_session: 300.0,
//!         output_input_ratio: 0.5,
//!         exchanges: 10,
//!         base_prompt_words: 200.0,
//!         history: HistorySettings::summary(100.0, 5),
//!     });
//!
//!     let catalog = builtin_catalog();
//!     let models = default_selection(ModelType::Ttt);
//!     let result = calculate(ModelType::Ttt, &inputs, &models, &catalog)?;
//!
//!     println!("Total: {:.2} {}", result.costs.total_cost, catalog.display_currency);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export the main entry points
pub use config::{PricingCatalog, builtin_catalog, default_selection};
pub use core::calculate;
pub use core::types::inputs::SessionInputs;
pub use core::types::result::CalculationResult;
pub use core::types::selection::{ModelType, Product, SelectedModels};
pub use utils::error::{EstimatorError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
