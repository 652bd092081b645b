//! Wire types for the Alexa Skills Kit request and response envelopes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct AlexaRequest {
    #[serde(default)]
    pub version: Option<String>,
    pub session: Session,
    pub request: SkillRequest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    pub application: Application,
    #[serde(default)]
    pub attributes: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// The request body, tagged by its `type` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest {
        #[serde(rename = "requestId")]
        request_id: String,
    },
    IntentRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        #[serde(default)]
        reason: Option<String>,
    },
    #[serde(other)]
    Unsupported,
}

impl SkillRequest {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SkillRequest::LaunchRequest { request_id }
            | SkillRequest::IntentRequest { request_id, .. }
            | SkillRequest::SessionEndedRequest { request_id, .. } => Some(request_id),
            SkillRequest::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, Slot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// Top-level response returned to the voice platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub session_attributes: Map<String, Value>,
    pub response: VoiceResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceResponse {
    pub output_speech: OutputSpeech,
    pub card: Card,
    pub reprompt: Reprompt,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}
