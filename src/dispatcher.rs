use std::time::Duration;

use chrono::NaiveDateTime;
use tracing::{error, info, instrument};

use crate::config::SkillMessages;
use crate::error::{Result, SkillError};
use crate::model::alexa::ResponseEnvelope;
use crate::resolver::{self, NextGame};
use crate::response::{build_envelope, build_voice_response};
use crate::schedule::SeasonStore;

pub const NEXT_GAME_INTENT: &str = "NextGame";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Maps launches and intents to responses. Holds no per-request state.
#[derive(Debug)]
pub struct IntentDispatcher<S> {
    store: S,
    messages: SkillMessages,
    fetch_timeout: Duration,
}

impl<S: SeasonStore> IntentDispatcher<S> {
    pub fn new(store: S, messages: SkillMessages, fetch_timeout: Duration) -> Self {
        Self { store, messages, fetch_timeout }
    }

    pub fn messages(&self) -> &SkillMessages {
        &self.messages
    }

    pub fn on_launch(&self) -> ResponseEnvelope {
        self.welcome_response()
    }

    /// Answer an intent. `now` is the current local time in the schedule's zone.
    #[instrument(level = "info", skip(self, now))]
    pub async fn on_intent(&self, intent_name: &str, now: NaiveDateTime) -> ResponseEnvelope {
        match intent_name {
            NEXT_GAME_INTENT => self.next_game_response(now).await,
            HELP_INTENT => self.welcome_response(),
            CANCEL_INTENT | STOP_INTENT => self.goodbye_response(),
            other => match self.messages.catchphrases.iter().find(|c| c.intent == other) {
                Some(phrase) => build_envelope(build_voice_response(&phrase.title, &phrase.text, None, true)),
                None => {
                    info!(intent = %other, "Unrecognized intent");
                    self.unknown_response()
                }
            },
        }
    }

    /// Session-ended requests carry nothing to say; this is only a notification.
    pub fn on_session_ended(&self, reason: Option<&str>) {
        info!(reason = reason.unwrap_or("unspecified"), "Session ended");
    }

    fn welcome_response(&self) -> ResponseEnvelope {
        let m = &self.messages;
        build_envelope(build_voice_response("Welcome", &m.welcome, Some(&m.re_welcome), false))
    }

    fn goodbye_response(&self) -> ResponseEnvelope {
        build_envelope(build_voice_response("Session Ended", &self.messages.goodbye, None, true))
    }

    fn unknown_response(&self) -> ResponseEnvelope {
        let m = &self.messages;
        let speech = format!("{}{}", m.not_understood, m.welcome);
        build_envelope(build_voice_response("Hmm", &speech, Some(&m.re_welcome), false))
    }

    async fn next_game_response(&self, now: NaiveDateTime) -> ResponseEnvelope {
        let m = &self.messages;
        let speech = match self.lookup_next_game(now).await {
            Ok(NextGame::At(dt)) => format!("The next game is on {}", resolver::format_game_datetime(&dt)),
            Ok(NextGame::NoUpcomingGame) => m.no_next_game.clone(),
            Err(e) => {
                error!(error = %e, recoverable = e.is_recoverable(), "Schedule lookup failed");
                m.schedule_unavailable.clone()
            }
        };
        build_envelope(build_voice_response(&m.next_game_title, &speech, None, true))
    }

    async fn lookup_next_game(&self, now: NaiveDateTime) -> Result<NextGame> {
        let season = tokio::time::timeout(self.fetch_timeout, self.store.fetch_current_season())
            .await
            .map_err(|_| SkillError::Timeout(self.fetch_timeout))??;
        info!(season_id = %season.season_id, %now, "Resolving next game");
        resolver::resolve_next_game(&season.games, now)
    }
}
