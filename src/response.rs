use serde_json::Map;

use crate::model::alexa::{Card, OutputSpeech, Reprompt, ResponseEnvelope, VoiceResponse};

pub const RESPONSE_VERSION: &str = "1.0";
const CARD_PREFIX: &str = "SessionSpeechlet - ";

fn plain_text(text: &str) -> OutputSpeech {
    OutputSpeech { speech_type: "PlainText".to_string(), text: text.to_string() }
}

/// Build the speech, card and reprompt body of a response.
/// A missing reprompt still produces a reprompt slot, with empty text.
pub fn build_voice_response(
    title: &str,
    speech_text: &str,
    reprompt_text: Option<&str>,
    end_session: bool,
) -> VoiceResponse {
    VoiceResponse {
        output_speech: plain_text(speech_text),
        card: Card {
            card_type: "Simple".to_string(),
            title: format!("{CARD_PREFIX}{title}"),
            content: format!("{CARD_PREFIX}{speech_text}"),
        },
        reprompt: Reprompt { output_speech: plain_text(reprompt_text.unwrap_or_default()) },
        should_end_session: end_session,
    }
}

/// Wrap a voice response in the versioned envelope. Session attributes are always empty.
pub fn build_envelope(response: VoiceResponse) -> ResponseEnvelope {
    ResponseEnvelope {
        version: RESPONSE_VERSION.to_string(),
        session_attributes: Map::new(),
        response,
    }
}
