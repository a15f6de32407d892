//! Session-input types and validation
//!
//! One input struct per product. All of these are plain value objects:
//! constructed per calculation, immutable while it runs, discarded after.

use serde::{Deserialize, Serialize};

use crate::core::calculator::history::HistoryPolicy;
use crate::utils::error::{EstimatorError, Result};

/// Session length unit, display-only (never enters the arithmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionUnit {
    #[serde(rename = "minute")]
    Minute,
    #[serde(rename = "1hr")]
    OneHour,
    #[serde(rename = "24hr")]
    TwentyFourHours,
}

impl Default for SessionUnit {
    fn default() -> Self {
        SessionUnit::Minute
    }
}

/// Conversation history retention policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryMode {
    /// A fixed-size rolling summary is resent (and cached) every exchange
    Summary,
    /// Verbatim history grows turn by turn and is never cached
    Full,
}

/// History mode plus the summary-mode sub-fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistorySettings {
    /// Retention policy
    pub mode: HistoryMode,
    /// Summary length in words (summary mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_words: Option<f64>,
    /// Exchanges between summarization calls (summary mode)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_refresh_every: Option<u32>,
}

impl HistorySettings {
    /// Summary mode with both sub-fields set
    pub fn summary(summary_words: f64, refresh_every: u32) -> Self {
        Self {
            mode: HistoryMode::Summary,
            summary_words: Some(summary_words),
            summary_refresh_every: Some(refresh_every),
        }
    }

    /// Full-history mode
    pub fn full() -> Self {
        Self {
            mode: HistoryMode::Full,
            summary_words: None,
            summary_refresh_every: None,
        }
    }

    /// Resolve the settings into an amortization policy
    ///
    /// Summary mode with a missing or zero sub-field degrades to the
    /// single-turn fallback rather than failing.
    pub fn policy(&self, words_to_tokens: f64) -> HistoryPolicy {
        match self.mode {
            HistoryMode::Full => HistoryPolicy::Full,
            HistoryMode::Summary => match (self.summary_words, self.summary_refresh_every) {
                (Some(words), Some(refresh)) if words > 0.0 && refresh > 0 => {
                    HistoryPolicy::Summary {
                        summary_tokens: words * words_to_tokens,
                        refresh_every: refresh,
                    }
                }
                _ => HistoryPolicy::None,
            },
        }
    }
}

/// Inputs for a text chatbot session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotInputs {
    /// Display-only session unit
    #[serde(default)]
    pub session_unit: SessionUnit,
    /// Total words exchanged in the session (user + assistant)
    pub words_per_session: f64,
    /// Assistant-output words as a fraction of user-input words
    pub output_input_ratio: f64,
    /// Number of user/assistant exchanges
    pub exchanges: u32,
    /// System-prompt length in words
    pub base_prompt_words: f64,
    /// History retention settings
    pub history: HistorySettings,
}

/// Inputs for a voice session (voicebot)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoicebotInputs {
    /// Session duration in minutes
    pub session_minutes: f64,
    /// Display-only session unit
    #[serde(default)]
    pub session_unit: SessionUnit,
    /// Assistant-output words as a fraction of user-input words
    pub output_input_ratio: f64,
    /// Number of user/assistant exchanges
    pub exchanges: u32,
    /// System-prompt length in words
    pub base_prompt_words: f64,
    /// History retention settings
    pub history: HistorySettings,
}

/// Inputs for a batch voice-analytics run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceAnalyticsInputs {
    /// Total audio to analyze, in minutes
    pub total_audio_minutes: f64,
    /// Number of audio files (one LLM call each)
    pub files: u32,
    /// System-prompt length in words
    pub base_prompt_words: f64,
    /// Per-file report length in words
    pub report_words: f64,
}

/// Session inputs for any product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionInputs {
    Chatbot(ChatbotInputs),
    Voicebot(VoicebotInputs),
    VoiceAnalytics(VoiceAnalyticsInputs),
}

// Required-field checks. Zero counts as missing for every required numeric
// field except `output_input_ratio`, which legitimately can be zero
// (an assistant that never speaks).
fn require_nonzero(value: f64, field: &'static str) -> Result<()> {
    if value == 0.0 {
        return Err(EstimatorError::MissingInput { field });
    }
    Ok(())
}

fn require_nonzero_count(value: u32, field: &'static str) -> Result<()> {
    if value == 0 {
        return Err(EstimatorError::MissingInput { field });
    }
    Ok(())
}

impl ChatbotInputs {
    /// Check required fields (ratio exempt from the zero check)
    pub fn validate(&self) -> Result<()> {
        require_nonzero(self.words_per_session, "words_per_session")?;
        require_nonzero_count(self.exchanges, "exchanges")?;
        require_nonzero(self.base_prompt_words, "base_prompt_words")?;
        Ok(())
    }
}

impl VoicebotInputs {
    /// Check required fields (ratio exempt from the zero check)
    pub fn validate(&self) -> Result<()> {
        require_nonzero(self.session_minutes, "session_minutes")?;
        require_nonzero_count(self.exchanges, "exchanges")?;
        require_nonzero(self.base_prompt_words, "base_prompt_words")?;
        Ok(())
    }
}

impl VoiceAnalyticsInputs {
    /// Check required fields
    pub fn validate(&self) -> Result<()> {
        require_nonzero(self.total_audio_minutes, "total_audio_minutes")?;
        require_nonzero_count(self.files, "files")?;
        require_nonzero(self.base_prompt_words, "base_prompt_words")?;
        require_nonzero(self.report_words, "report_words")?;
        Ok(())
    }
}

impl SessionInputs {
    /// Check required fields for whichever product these inputs describe
    pub fn validate(&self) -> Result<()> {
        match self {
            SessionInputs::Chatbot(inputs) => inputs.validate(),
            SessionInputs::Voicebot(inputs) => inputs.validate(),
            SessionInputs::VoiceAnalytics(inputs) => inputs.validate(),
        }
    }

    /// View as chatbot inputs, failing on a product mismatch
    pub fn as_chatbot(&self) -> Result<&ChatbotInputs> {
        match self {
            SessionInputs::Chatbot(inputs) => Ok(inputs),
            _ => Err(EstimatorError::invalid_input(
                "model type requires chatbot session inputs",
            )),
        }
    }

    /// View as voicebot inputs, failing on a product mismatch
    pub fn as_voicebot(&self) -> Result<&VoicebotInputs> {
        match self {
            SessionInputs::Voicebot(inputs) => Ok(inputs),
            _ => Err(EstimatorError::invalid_input(
                "model type requires voicebot session inputs",
            )),
        }
    }

    /// View as voice-analytics inputs, failing on a product mismatch
    pub fn as_voice_analytics(&self) -> Result<&VoiceAnalyticsInputs> {
        match self {
            SessionInputs::VoiceAnalytics(inputs) => Ok(inputs),
            _ => Err(EstimatorError::invalid_input(
                "model type requires voice-analytics session inputs",
            )),
        }
    }
}
