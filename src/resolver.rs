use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, instrument};

use crate::error::{Result, SkillError};
use crate::model::game::{Game, GameStatus};

/// Outcome of looking for the next game in a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextGame {
    NoUpcomingGame,
    At(NaiveDateTime),
}

/// Combine a game's `MM-DD-YYYY` date and its clock time into one naive datetime.
///
/// Times are usually stored as `07:00p`; `07:00pm` and 24-hour `19:00` are accepted too.
pub fn parse_game_datetime(game: &Game) -> Result<NaiveDateTime> {
    let parse_err = |reason: String| SkillError::Parse {
        game: format!("date={} time={}", game.date, game.time),
        reason,
    };

    if game.date.trim().is_empty() || game.time.trim().is_empty() {
        return Err(parse_err("missing date or time".to_string()));
    }

    let date = NaiveDate::parse_from_str(game.date.trim(), "%m-%d-%Y")
        .map_err(|e| parse_err(format!("bad date: {e}")))?;

    let lowered: String = game
        .time
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    let time = if lowered.ends_with('a') || lowered.ends_with('p') {
        NaiveTime::parse_from_str(&format!("{lowered}m"), "%I:%M%p")
    } else if lowered.ends_with("am") || lowered.ends_with("pm") {
        NaiveTime::parse_from_str(&lowered, "%I:%M%p")
    } else {
        NaiveTime::parse_from_str(&lowered, "%H:%M")
    }
    .map_err(|e| parse_err(format!("bad time: {e}")))?;

    Ok(date.and_time(time))
}

/// Pick the earliest upcoming game strictly after `now`.
///
/// Single pass keeping the running minimum; an equal datetime never replaces the
/// current pick. Games that are not `upcoming` are skipped without being parsed, but a
/// malformed upcoming game fails the whole resolution.
#[instrument(level = "debug", skip(games, now), fields(games = games.len(), %now))]
pub fn resolve_next_game(games: &[Game], now: NaiveDateTime) -> Result<NextGame> {
    let mut next: Option<NaiveDateTime> = None;

    for game in games {
        if game.status != GameStatus::Upcoming {
            continue;
        }
        let dt = parse_game_datetime(game)?;
        if dt <= now {
            continue;
        }
        if next.is_none_or(|cur| dt < cur) {
            debug!(game_datetime = %dt, "updating next game");
            next = Some(dt);
        }
    }

    Ok(match next {
        Some(dt) => NextGame::At(dt),
        None => NextGame::NoUpcomingGame,
    })
}

/// Spoken sentence for a resolved game, e.g. "Saturday, July 04 at 07:00PM".
pub fn format_game_datetime(dt: &NaiveDateTime) -> String {
    dt.format("%A, %B %d at %I:%M%p").to_string()
}
