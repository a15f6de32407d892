//! Model-type and model-selection types
//!
//! A model type is one of six closed product × component-stack variants.
//! Dispatch over the enum is exhaustive, so adding a variant is a
//! compile-time event, not a runtime string comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::EstimatorError;

/// Product families the estimator covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Product {
    Chatbot,
    Voicebot,
    VoiceAnalytics,
}

impl Product {
    /// Model types that are legal for this product
    pub fn allowed_model_types(&self) -> &'static [ModelType] {
        match self {
            Product::Chatbot => &[ModelType::Ttt],
            Product::Voicebot => &[
                ModelType::SttTttTts,
                ModelType::OmniTextTts,
                ModelType::Sts,
            ],
            Product::VoiceAnalytics => &[ModelType::SttTtt, ModelType::SttOmni],
        }
    }
}

/// The closed set of model-type identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    /// Text-to-text chatbot
    #[serde(rename = "ttt")]
    Ttt,
    /// Voicebot: transcribe, generate, synthesize
    #[serde(rename = "stt-ttt-tts")]
    SttTttTts,
    /// Voicebot: omni model with text output, plus synthesis
    #[serde(rename = "omni-text-tts")]
    OmniTextTts,
    /// Voicebot: speech-to-speech
    #[serde(rename = "sts")]
    Sts,
    /// Voice analytics: transcribe then generate
    #[serde(rename = "stt-ttt")]
    SttTtt,
    /// Voice analytics: omni model over audio
    #[serde(rename = "stt-omni")]
    SttOmni,
}

impl ModelType {
    /// String identifier for this model type
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Ttt => "ttt",
            ModelType::SttTttTts => "stt-ttt-tts",
            ModelType::OmniTextTts => "omni-text-tts",
            ModelType::Sts => "sts",
            ModelType::SttTtt => "stt-ttt",
            ModelType::SttOmni => "stt-omni",
        }
    }

    /// Component roles a selection must fill for this model type
    pub fn required_roles(&self) -> &'static [ModelRole] {
        match self {
            ModelType::Ttt => &[ModelRole::TextGeneration],
            ModelType::SttTttTts => &[
                ModelRole::Transcription,
                ModelRole::TextGeneration,
                ModelRole::Synthesis,
            ],
            ModelType::OmniTextTts => &[ModelRole::AudioOmni, ModelRole::Synthesis],
            ModelType::Sts => &[ModelRole::SpeechToSpeech],
            ModelType::SttTtt => &[ModelRole::Transcription, ModelRole::TextGeneration],
            ModelType::SttOmni => &[ModelRole::AudioOmni],
        }
    }

    /// The product this model type belongs to
    pub fn product(&self) -> Product {
        match self {
            ModelType::Ttt => Product::Chatbot,
            ModelType::SttTttTts | ModelType::OmniTextTts | ModelType::Sts => Product::Voicebot,
            ModelType::SttTtt | ModelType::SttOmni => Product::VoiceAnalytics,
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelType {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ttt" => Ok(ModelType::Ttt),
            "stt-ttt-tts" => Ok(ModelType::SttTttTts),
            "omni-text-tts" => Ok(ModelType::OmniTextTts),
            "sts" => Ok(ModelType::Sts),
            "stt-ttt" => Ok(ModelType::SttTtt),
            "stt-omni" => Ok(ModelType::SttOmni),
            other => Err(EstimatorError::UnknownModelType {
                value: other.to_string(),
            }),
        }
    }
}

/// Component roles a selected model can fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelRole {
    TextGeneration,
    Transcription,
    Synthesis,
    SpeechToSpeech,
    AudioOmni,
}

impl fmt::Display for ModelRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ModelRole::TextGeneration => "text-generation",
            ModelRole::Transcription => "transcription",
            ModelRole::Synthesis => "synthesis",
            ModelRole::SpeechToSpeech => "speech-to-speech",
            ModelRole::AudioOmni => "audio-omni",
        };
        f.write_str(name)
    }
}

/// Model identifiers selected per component role
///
/// Which roles must be set is determined by the model type; unset roles
/// required by the chosen calculator fail with
/// [`EstimatorError::IncompleteModelSelection`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectedModels {
    /// Text-generation model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Transcription model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcription: Option<String>,
    /// Speech-synthesis model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<String>,
    /// Speech-to-speech model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speech_to_speech: Option<String>,
    /// Audio omni model identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_omni: Option<String>,
}

impl SelectedModels {
    /// Get the identifier selected for a role, if any
    pub fn get(&self, role: ModelRole) -> Option<&str> {
        let slot = match role {
            ModelRole::TextGeneration => &self.text,
            ModelRole::Transcription => &self.transcription,
            ModelRole::Synthesis => &self.synthesis,
            ModelRole::SpeechToSpeech => &self.speech_to_speech,
            ModelRole::AudioOmni => &self.audio_omni,
        };
        slot.as_deref()
    }

    /// Get the identifier for a role, failing if it is unset
    pub fn require(
        &self,
        role: ModelRole,
        model_type: ModelType,
    ) -> crate::utils::error::Result<&str> {
        self.get(role)
            .ok_or(EstimatorError::IncompleteModelSelection { role, model_type })
    }

    /// Check that every role the model type needs is filled
    pub fn validate_for(&self, model_type: ModelType) -> crate::utils::error::Result<()> {
        for &role in model_type.required_roles() {
            self.require(role, model_type)?;
        }
        Ok(())
    }

    /// Builder: set the text-generation model
    pub fn with_text(mut self, model: impl Into<String>) -> Self {
        self.text = Some(model.into());
        self
    }

    /// Builder: set the transcription model
    pub fn with_transcription(mut self, model: impl Into<String>) -> Self {
        self.transcription = Some(model.into());
        self
    }

    /// Builder: set the synthesis model
    pub fn with_synthesis(mut self, model: impl Into<String>) -> Self {
        self.synthesis = Some(model.into());
        self
    }

    /// Builder: set the speech-to-speech model
    pub fn with_speech_to_speech(mut self, model: impl Into<String>) -> Self {
        self.speech_to_speech = Some(model.into());
        self
    }

    /// Builder: set the audio omni model
    pub fn with_audio_omni(mut self, model: impl Into<String>) -> Self {
        self.audio_omni = Some(model.into());
        self
    }
}
