//! Scenario fixtures
//!
//! The baseline session: 300 words over 10 exchanges at a 0.5
//! output:input ratio, a 200-word base prompt, and a 100-word summary
//! refreshed every 5 exchanges. Most tests start from here and vary one
//! knob.

use convocost::core::types::inputs::{
    ChatbotInputs, HistorySettings, SessionInputs, SessionUnit, VoiceAnalyticsInputs,
    VoicebotInputs,
};

pub fn chatbot_inputs() -> ChatbotInputs {
    ChatbotInputs {
        session_unit: SessionUnit::Minute,
        words_per_session: 300.0,
        output_input_ratio: 0.5,
        exchanges: 10,
        base_prompt_words: 200.0,
        history: HistorySettings::summary(100.0, 5),
    }
}

pub fn voicebot_inputs() -> VoicebotInputs {
    VoicebotInputs {
        session_minutes: 10.0,
        session_unit: SessionUnit::Minute,
        output_input_ratio: 0.5,
        exchanges: 10,
        base_prompt_words: 200.0,
        history: HistorySettings::summary(100.0, 5),
    }
}

pub fn analytics_inputs() -> VoiceAnalyticsInputs {
    VoiceAnalyticsInputs {
        total_audio_minutes: 600.0,
        files: 100,
        base_prompt_words: 200.0,
        report_words: 150.0,
    }
}

pub fn chatbot_session() -> SessionInputs {
    SessionInputs::Chatbot(chatbot_inputs())
}

pub fn voicebot_session() -> SessionInputs {
    SessionInputs::Voicebot(voicebot_inputs())
}

pub fn analytics_session() -> SessionInputs {
    SessionInputs::VoiceAnalytics(analytics_inputs())
}
