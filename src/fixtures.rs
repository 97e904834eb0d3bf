/// Mock fixture data for testing and development
///
/// This module provides consistent, deterministic fixture data that can be used for:
/// 1. Unit tests - ensuring tests have predictable data
/// 2. Development mock mode - running the app without season files on disk
/// 3. Benchmarks - providing consistent data for performance testing
///
/// The mock season is the 2023-24 playoffs for a handful of teams, plus a few
/// records the series engine is expected to ignore.
use crate::types::{GameRecord, GameStatus, Team, PLAYOFF_STAGE, REGULAR_SEASON_STAGE};
use chrono::{DateTime, NaiveDate, Utc};

/// Season start year the mock data covers
pub const MOCK_SEASON: i32 = 2023;

/// Known teams, keyed by feed id
const TEAMS: [(i64, &str, &str); 7] = [
    (2, "Boston Celtics", "BOS"),
    (8, "Dallas Mavericks", "DAL"),
    (9, "Denver Nuggets", "DEN"),
    (15, "Indiana Pacers", "IND"),
    (20, "Miami Heat", "MIA"),
    (22, "Minnesota Timberwolves", "MIN"),
    (24, "New York Knicks", "NYK"),
];

/// Team by id; ids outside the table get a generated name and code
pub fn team(id: i64) -> Team {
    match TEAMS.iter().find(|(team_id, _, _)| *team_id == id) {
        Some((id, name, code)) => Team {
            id: *id,
            name: name.to_string(),
            code: code.to_string(),
        },
        None => named_team(id, &format!("T{}", id)),
    }
}

pub fn named_team(id: i64, code: &str) -> Team {
    Team {
        id,
        name: format!("Team {}", code),
        code: code.to_string(),
    }
}

/// Everything needed to build one fixture game
#[derive(Debug, Clone)]
pub struct GameSpec {
    pub id: i64,
    pub stage: i32,
    pub date: String,
    pub status: GameStatus,
    pub home: Team,
    pub away: Team,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl GameSpec {
    pub fn finished(
        id: i64,
        date: &str,
        home: Team,
        away: Team,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            id,
            stage: PLAYOFF_STAGE,
            date: date.to_string(),
            status: GameStatus::Finished,
            home,
            away,
            home_score: Some(home_score),
            away_score: Some(away_score),
        }
    }

    pub fn scheduled(id: i64, date: &str, home: Team, away: Team) -> Self {
        Self {
            id,
            stage: PLAYOFF_STAGE,
            date: date.to_string(),
            status: GameStatus::Scheduled,
            home,
            away,
            home_score: None,
            away_score: None,
        }
    }
}

/// Tip-off at midnight UTC on the given YYYY-MM-DD day
fn tip_off(date: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_else(|| panic!("Invalid fixture date {}", date))
}

pub fn game(spec: GameSpec) -> GameRecord {
    GameRecord {
        id: spec.id,
        stage: spec.stage,
        date: tip_off(&spec.date),
        status: spec.status,
        home_team: spec.home,
        away_team: spec.away,
        home_score: spec.home_score,
        away_score: spec.away_score,
    }
}

/// Build a series from (id, date, home, away, home score, away score) rows
fn series_games(rows: &[(i64, &str, i64, i64, u32, u32)]) -> Vec<GameRecord> {
    rows.iter()
        .map(|&(id, date, home, away, home_score, away_score)| {
            game(GameSpec::finished(id, date, team(home), team(away), home_score, away_score))
        })
        .collect()
}

/// Mock season batch, deliberately not in date order
pub fn mock_season_games() -> Vec<GameRecord> {
    let mut games = Vec::new();

    // Finals: BOS 4-1 DAL
    games.extend(series_games(&[
        (40005, "2024-06-17", 2, 8, 106, 88),
        (40001, "2024-06-06", 2, 8, 107, 89),
        (40003, "2024-06-12", 8, 2, 99, 106),
        (40002, "2024-06-09", 2, 8, 105, 98),
        (40004, "2024-06-14", 8, 2, 122, 84),
    ]));

    // First round: BOS 4-1 MIA
    games.extend(series_games(&[
        (10001, "2024-04-21", 2, 20, 114, 94),
        (10002, "2024-04-24", 2, 20, 101, 111),
        (10003, "2024-04-27", 20, 2, 84, 104),
        (10004, "2024-04-29", 20, 2, 88, 102),
        (10005, "2024-05-01", 2, 20, 118, 84),
    ]));

    // Second round: MIN 4-3 DEN
    games.extend(series_games(&[
        (20007, "2024-05-19", 9, 22, 90, 98),
        (20003, "2024-05-10", 22, 9, 90, 117),
        (20001, "2024-05-04", 9, 22, 99, 106),
        (20006, "2024-05-16", 22, 9, 115, 70),
        (20002, "2024-05-06", 9, 22, 80, 106),
        (20005, "2024-05-14", 9, 22, 112, 97),
        (20004, "2024-05-12", 22, 9, 107, 115),
    ]));

    // Scheduled-only series
    games.push(game(GameSpec::scheduled(30001, "2024-05-06", team(24), team(15))));
    games.push(game(GameSpec::scheduled(30002, "2024-05-08", team(24), team(15))));

    // Records the engine must ignore
    let mut regular = GameSpec::finished(900, "2024-01-15", team(20), team(2), 110, 106);
    regular.stage = REGULAR_SEASON_STAGE;
    games.push(game(regular));

    let mut live = GameSpec::finished(901, "2024-05-03", team(2), team(20), 50, 48);
    live.status = GameStatus::InPlay;
    games.push(game(live));

    games
}

/// A full-size synthetic season for benchmarks: `series` best-of-seven
/// matchups, each played out to seven games
pub fn synthetic_season(series: i64) -> Vec<GameRecord> {
    let mut games = Vec::new();
    for s in 0..series {
        let (home, away) = (named_team(100 + s * 2, "AAA"), named_team(101 + s * 2, "BBB"));
        for g in 0..7 {
            let date = format!("2024-05-{:02}", 1 + g * 2);
            let (hs, aw) = if (g + s) % 2 == 0 {
                (101, 99)
            } else {
                (95, 102)
            };
            games.push(game(GameSpec::finished(
                s * 10 + g,
                &date,
                home.clone(),
                away.clone(),
                hs,
                aw,
            )));
        }
    }
    games
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_lookup() {
        assert_eq!(team(2).code, "BOS");
        assert_eq!(team(77).code, "T77");
    }

    #[test]
    fn test_mock_season_has_unique_ids() {
        let games = mock_season_games();
        let mut ids: Vec<i64> = games.iter().map(|g| g.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), games.len());
    }

    #[test]
    fn test_synthetic_season_size() {
        assert_eq!(synthetic_season(8).len(), 56);
    }
}
