use serde::{Deserialize, Serialize};

use crate::model::game::Game;

/// One row of the schedule table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "season")]
    pub season_id: String,
    #[serde(rename = "currentSeason", default)]
    pub is_current: bool,
    #[serde(default)]
    pub games: Vec<Game>,
}
