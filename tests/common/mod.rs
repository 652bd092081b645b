#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use next_game_skill_lambda_rust::error::{Result, SkillError};
use next_game_skill_lambda_rust::model::game::{Game, GameStatus};
use next_game_skill_lambda_rust::model::season::Season;
use next_game_skill_lambda_rust::schedule::SeasonStore;

pub enum Behaviour {
    Season(Season),
    Unavailable,
    Missing,
    Slow(Duration),
}

/// In-memory store that counts fetches.
pub struct FakeStore {
    behaviour: Behaviour,
    pub calls: AtomicUsize,
}

impl FakeStore {
    pub fn new(behaviour: Behaviour) -> Self {
        Self { behaviour, calls: AtomicUsize::new(0) }
    }

    pub fn with_games(games: Vec<Game>) -> Self {
        Self::new(Behaviour::Season(Season { season_id: "2099".to_string(), is_current: true, games }))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SeasonStore for FakeStore {
    async fn fetch_current_season(&self) -> Result<Season> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behaviour {
            Behaviour::Season(season) => Ok(season.clone()),
            Behaviour::Unavailable => Err(SkillError::StoreUnavailable("connection reset".to_string())),
            Behaviour::Missing => Err(SkillError::NotFound("no current season".to_string())),
            Behaviour::Slow(delay) => {
                tokio::time::sleep(*delay).await;
                Ok(Season { season_id: "slow".to_string(), is_current: true, games: Vec::new() })
            }
        }
    }
}

pub fn upcoming(date: &str, time: &str) -> Game {
    Game::new(date, time, GameStatus::Upcoming)
}

pub fn completed(date: &str, time: &str) -> Game {
    Game::new(date, time, GameStatus::Completed)
}
