use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;
use lambda_runtime::{Error, LambdaEvent};
use tracing::{info, instrument, warn};

use crate::config::SkillConfig;
use crate::dispatcher::IntentDispatcher;
use crate::error::{Result, SkillError};
use crate::model::alexa::{AlexaRequest, ResponseEnvelope, SkillRequest};
use crate::schedule::SeasonStore;

/// Entry point for one skill invocation: checks the caller, then routes by request type.
#[derive(Debug)]
pub struct SkillHandler<S> {
    application_id: String,
    time_zone: Tz,
    dispatcher: IntentDispatcher<S>,
}

impl<S: SeasonStore> SkillHandler<S> {
    pub fn new(config: SkillConfig, store: S) -> Self {
        Self {
            application_id: config.application_id,
            time_zone: config.time_zone,
            dispatcher: IntentDispatcher::new(store, config.messages, config.fetch_timeout),
        }
    }

    pub fn dispatcher(&self) -> &IntentDispatcher<S> {
        &self.dispatcher
    }

    /// Wall-clock time in the schedule's zone, without the zone attached.
    pub fn local_now(&self, now: DateTime<Utc>) -> NaiveDateTime {
        now.with_timezone(&self.time_zone).naive_local()
    }

    /// Handle one event. Returns `Ok(None)` for requests that take no reply and
    /// `Err(SkillError::Unauthorized)` when the event is for another skill.
    #[instrument(
        level = "info",
        skip(self, event, now),
        fields(
            session_id = %event.session.session_id,
            request_id = event.request.request_id().unwrap_or("-"),
        )
    )]
    pub async fn handle(&self, event: AlexaRequest, now: NaiveDateTime) -> Result<Option<ResponseEnvelope>> {
        let application_id = &event.session.application.application_id;
        info!(application_id = %application_id, "Received skill event");
        if *application_id != self.application_id {
            warn!(application_id = %application_id, "Rejecting event for unknown application");
            return Err(SkillError::Unauthorized(application_id.clone()));
        }

        if event.session.new {
            info!(
                session_id = %event.session.session_id,
                request_id = event.request.request_id().unwrap_or("-"),
                "Session started"
            );
        }

        match event.request {
            SkillRequest::LaunchRequest { .. } => {
                info!("LaunchRequest");
                Ok(Some(self.dispatcher.on_launch()))
            }
            SkillRequest::IntentRequest { intent, .. } => {
                info!(intent = %intent.name, "IntentRequest");
                Ok(Some(self.dispatcher.on_intent(&intent.name, now).await))
            }
            SkillRequest::SessionEndedRequest { reason, .. } => {
                info!("SessionEndedRequest");
                self.dispatcher.on_session_ended(reason.as_deref());
                Ok(None)
            }
            SkillRequest::Unsupported => {
                warn!("Unsupported request type; nothing to answer");
                Ok(None)
            }
        }
    }
}

/// Lambda adapter: stamps the current time and surfaces rejections as invocation errors.
pub async fn handler<S: SeasonStore>(
    skill: &SkillHandler<S>,
    event: LambdaEvent<AlexaRequest>,
) -> std::result::Result<Option<ResponseEnvelope>, Error> {
    let now = skill.local_now(Utc::now());
    Ok(skill.handle(event.payload, now).await?)
}
