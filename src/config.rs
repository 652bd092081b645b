//! Per-deployment configuration, read once at cold start.

use std::env;
use std::time::Duration;

use chrono_tz::Tz;

use crate::error::{Result, SkillError};

pub const DEFAULT_TABLE_NAME: &str = "cudas_schedule";
pub const DEFAULT_TEAM_NAME: &str = "Cudas";
const DEFAULT_FETCH_TIMEOUT_MS: u64 = 3000;

/// A fixed intent that always answers with the same line and ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catchphrase {
    pub intent: String,
    pub title: String,
    pub text: String,
}

/// Text the skill speaks. Each deployment differs only in these strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillMessages {
    pub not_understood: String,
    pub welcome: String,
    pub re_welcome: String,
    pub goodbye: String,
    pub next_game_title: String,
    pub no_next_game: String,
    pub schedule_unavailable: String,
    pub catchphrases: Vec<Catchphrase>,
}

impl SkillMessages {
    pub fn for_team(team: &str) -> Self {
        Self {
            not_understood: "Charlie says what now? ".to_string(),
            welcome: format!(
                "Welcome to the {team} Alexa Skill. Find out when the {team} next play by asking me. "
            ),
            re_welcome: format!("Try asking, when do the {team} play next? Or, should I stack on Sacko?"),
            goodbye: format!("Thank you for supporting the {team}! Have a nice day!"),
            next_game_title: format!("{team}: Next Game"),
            no_next_game: "I don't see a next game on the calendar.".to_string(),
            schedule_unavailable: "I can't check the schedule right now. Please try again later.".to_string(),
            catchphrases: vec![Catchphrase {
                intent: "StackSacko".to_string(),
                title: format!("{team}: Don't you stack on Sacko"),
                text: "Don't you stack on Sacko!".to_string(),
            }],
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Only events carrying this skill id are answered.
    pub application_id: String,
    pub table_name: String,
    pub dynamodb_endpoint: Option<String>,
    /// Zone the stored game times are written in.
    pub time_zone: Tz,
    pub fetch_timeout: Duration,
    pub messages: SkillMessages,
}

impl SkillConfig {
    pub fn new(application_id: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            dynamodb_endpoint: None,
            time_zone: Tz::UTC,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
            messages: SkillMessages::for_team(DEFAULT_TEAM_NAME),
        }
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let application_id = get("SKILL_APPLICATION_ID")
            .ok_or_else(|| SkillError::Config("SKILL_APPLICATION_ID must be set".to_string()))?;

        let time_zone = match get("SKILL_TIME_ZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| SkillError::Config(format!("SKILL_TIME_ZONE {name:?}: {e}")))?,
            None => Tz::UTC,
        };

        let fetch_timeout = match get("SCHEDULE_FETCH_TIMEOUT_MS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => {
                    return Err(SkillError::Config(format!(
                        "SCHEDULE_FETCH_TIMEOUT_MS must be a positive integer, got {raw:?}"
                    )));
                }
            },
            None => Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        };

        let team = get("SKILL_TEAM_NAME").unwrap_or_else(|| DEFAULT_TEAM_NAME.to_string());

        Ok(Self {
            application_id,
            table_name: get("SCHEDULE_TABLE").unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string()),
            dynamodb_endpoint: get("DYNAMODB_ENDPOINT"),
            time_zone,
            fetch_timeout,
            messages: SkillMessages::for_team(&team),
        })
    }
}
