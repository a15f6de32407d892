//! Catalog loading
//!
//! A catalog file is a YAML document deserializing straight into
//! [`PricingCatalog`]. Loaded catalogs replace the built-in one
//! wholesale; there is no merging of rate tables.

use std::path::Path;

use tracing::{debug, info};

use crate::config::catalog::PricingCatalog;
use crate::config::validation::validate_catalog;
use crate::utils::error::Result;

impl PricingCatalog {
    /// Parse a catalog from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let catalog: PricingCatalog = serde_yaml::from_str(content)?;
        validate_catalog(&catalog)?;
        debug!(
            text_models = catalog.text_models.len(),
            transcription_models = catalog.transcription_models.len(),
            synthesis_models = catalog.synthesis_models.len(),
            speech_to_speech_models = catalog.speech_to_speech_models.len(),
            omni_models = catalog.omni_models.len(),
            "catalog parsed"
        );
        Ok(catalog)
    }

    /// Load a catalog from a YAML file
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading pricing catalog from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Serialize the catalog to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
