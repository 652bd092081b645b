mod common;

use chrono::{NaiveDate, NaiveDateTime};

use common::{completed, upcoming};
use next_game_skill_lambda_rust::error::SkillError;
use next_game_skill_lambda_rust::model::game::{Game, GameStatus};
use next_game_skill_lambda_rust::resolver::{format_game_datetime, parse_game_datetime, resolve_next_game, NextGame};

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

#[test]
fn completed_games_are_never_next() {
    let games = vec![completed("07-04-2024", "07:00")];
    let now = at(2024, 1, 1, 0, 0);
    assert_eq!(resolve_next_game(&games, now).unwrap(), NextGame::NoUpcomingGame);
}

#[test]
fn picks_earliest_future_upcoming_game() {
    let games = vec![upcoming("07-04-2099", "07:00pm"), upcoming("08-01-2099", "07:00pm")];
    let now = at(2024, 1, 1, 0, 0);
    assert_eq!(resolve_next_game(&games, now).unwrap(), NextGame::At(at(2099, 7, 4, 19, 0)));
}

#[test]
fn order_of_input_does_not_matter_for_the_minimum() {
    let games = vec![
        upcoming("08-01-2099", "07:00p"),
        upcoming("03-15-2099", "09:30a"),
        upcoming("07-04-2099", "07:00p"),
    ];
    let now = at(2024, 1, 1, 0, 0);
    assert_eq!(resolve_next_game(&games, now).unwrap(), NextGame::At(at(2099, 3, 15, 9, 30)));
}

#[test]
fn empty_list_has_no_next_game() {
    assert_eq!(resolve_next_game(&[], at(2024, 1, 1, 0, 0)).unwrap(), NextGame::NoUpcomingGame);
}

#[test]
fn games_at_or_before_now_are_skipped() {
    let now = at(2030, 5, 1, 19, 0);
    let games = vec![
        upcoming("04-30-2030", "07:00p"),
        upcoming("05-01-2030", "07:00p"),
        upcoming("05-02-2030", "06:00p"),
    ];
    assert_eq!(resolve_next_game(&games, now).unwrap(), NextGame::At(at(2030, 5, 2, 18, 0)));
}

#[test]
fn other_statuses_are_ignored() {
    let games = vec![
        Game::new("05-01-2030", "07:00p", GameStatus::Other("postponed".to_string())),
        completed("05-02-2030", "07:00p"),
        upcoming("05-03-2030", "07:00p"),
    ];
    assert_eq!(
        resolve_next_game(&games, at(2030, 1, 1, 0, 0)).unwrap(),
        NextGame::At(at(2030, 5, 3, 19, 0))
    );
}

#[test]
fn malformed_upcoming_game_is_an_error_naming_the_game() {
    let games = vec![upcoming("07-04-2099", "07:00p"), upcoming("2099/08/01", "07:00p")];
    let err = resolve_next_game(&games, at(2024, 1, 1, 0, 0)).unwrap_err();
    match err {
        SkillError::Parse { game, .. } => assert!(game.contains("2099/08/01"), "game was: {}", game),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn malformed_completed_game_is_not_parsed() {
    let games = vec![completed("not a date", "??"), upcoming("07-04-2099", "07:00p")];
    assert_eq!(
        resolve_next_game(&games, at(2024, 1, 1, 0, 0)).unwrap(),
        NextGame::At(at(2099, 7, 4, 19, 0))
    );
}

#[test]
fn resolving_twice_gives_the_same_answer() {
    let games = vec![upcoming("07-04-2099", "07:00p"), upcoming("06-04-2099", "08:15a")];
    let now = at(2024, 1, 1, 0, 0);
    assert_eq!(resolve_next_game(&games, now).unwrap(), resolve_next_game(&games, now).unwrap());
}

#[test]
fn result_is_after_now_and_no_qualifying_game_is_earlier() {
    let now = at(2050, 6, 1, 12, 0);
    let games = vec![
        upcoming("05-31-2050", "11:00p"),
        upcoming("06-01-2050", "12:01p"),
        upcoming("06-01-2050", "12:00p"),
        completed("06-01-2050", "12:00p"),
        upcoming("12-25-2050", "10:00a"),
    ];
    let NextGame::At(next) = resolve_next_game(&games, now).unwrap() else {
        panic!("expected a next game");
    };
    assert!(next > now);
    for game in games.iter().filter(|g| g.status == GameStatus::Upcoming) {
        let dt = parse_game_datetime(game).unwrap();
        assert!(dt <= now || dt >= next, "{} is earlier than {}", dt, next);
    }
    assert_eq!(next, at(2050, 6, 1, 12, 1));
}

#[test]
fn parses_all_supported_time_forms() {
    let expected = at(2099, 7, 4, 19, 0);
    for time in ["07:00p", "07:00P", "07:00pm", "07:00 PM", "7:00p", "19:00"] {
        let game = upcoming("07-04-2099", time);
        assert_eq!(parse_game_datetime(&game).unwrap(), expected, "time form {:?}", time);
    }
    assert_eq!(parse_game_datetime(&upcoming("07-04-2099", "12:30a")).unwrap(), at(2099, 7, 4, 0, 30));
}

#[test]
fn rejects_bad_times() {
    for time in ["", "25:00", "7pm", "13:00p"] {
        let game = upcoming("07-04-2099", time);
        assert!(parse_game_datetime(&game).is_err(), "time {:?} should fail", time);
    }
}

#[test]
fn formats_spoken_datetime() {
    assert_eq!(format_game_datetime(&at(2099, 7, 4, 19, 0)), "Saturday, July 04 at 07:00PM");
    assert_eq!(format_game_datetime(&at(2030, 3, 9, 7, 5)), "Saturday, March 09 at 07:05AM");
}

#[test]
fn upcoming_game_missing_time_is_a_parse_error() {
    let games = vec![Game::new("07-04-2099", "", GameStatus::Upcoming)];
    let err = resolve_next_game(&games, at(2024, 1, 1, 0, 0)).unwrap_err();
    assert!(matches!(err, SkillError::Parse { .. }), "error was: {:?}", err);
}
