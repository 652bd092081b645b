use serde::{Deserialize, Serialize};

/// A scheduled game as stored in the season record.
///
/// `date` is `MM-DD-YYYY` and `time` is a local clock time such as `07:00p`;
/// neither carries a time zone. Either may be missing on old or unscheduled rows; that
/// only matters once the game is `upcoming` and gets parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub status: GameStatus,
}

impl Game {
    pub fn new(date: impl Into<String>, time: impl Into<String>, status: GameStatus) -> Self {
        Self { date: date.into(), time: time.into(), status }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GameStatus {
    Upcoming,
    Completed,
    /// Any status the schedule manager writes that we do not act on (postponed, cancelled, ...).
    Other(String),
}

impl Default for GameStatus {
    fn default() -> Self {
        GameStatus::Other(String::new())
    }
}

impl From<String> for GameStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "upcoming" => GameStatus::Upcoming,
            "completed" => GameStatus::Completed,
            _ => GameStatus::Other(value),
        }
    }
}

impl From<GameStatus> for String {
    fn from(value: GameStatus) -> Self {
        match value {
            GameStatus::Upcoming => "upcoming".to_string(),
            GameStatus::Completed => "completed".to_string(),
            GameStatus::Other(s) => s,
        }
    }
}
