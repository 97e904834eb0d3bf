/// Game and team types shared across the application
///
/// `RawGame`/`RawTeam` mirror the loosely shaped records a season batch arrives in.
/// They are validated once into `GameRecord`/`Team` and nothing past this module
/// ever sees the raw shapes.
use crate::error::RecordError;
use crate::team_abbrev::derive_code;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use tracing::warn;

/// Stage code used by the upstream feed for playoff games
pub const PLAYOFF_STAGE: i32 = 4;

/// Stage code used by the upstream feed for regular season games
pub const REGULAR_SEASON_STAGE: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Scheduled,
    InPlay,
    Finished,
    Postponed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl GameStatus {
    pub fn is_final(&self) -> bool {
        matches!(self, GameStatus::Finished)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameStatus::Scheduled => "SCHEDULED",
            GameStatus::InPlay => "LIVE",
            GameStatus::Finished => "FINAL",
            GameStatus::Postponed => "POSTPONED",
            GameStatus::Cancelled => "CANCELLED",
            GameStatus::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}

/// A single validated game between two distinct teams
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRecord {
    pub id: i64,
    pub stage: i32,
    pub date: DateTime<Utc>,
    pub status: GameStatus,
    pub home_team: Team,
    pub away_team: Team,
    pub home_score: Option<u32>,
    pub away_score: Option<u32>,
}

impl GameRecord {
    /// True if the game involves exactly the two given teams, in either orientation
    pub fn is_between(&self, team1: i64, team2: i64) -> bool {
        (self.home_team.id == team1 && self.away_team.id == team2)
            || (self.home_team.id == team2 && self.away_team.id == team1)
    }

    /// Id of the winning team, if the game is finished with a decisive score
    pub fn winner_id(&self) -> Option<i64> {
        if !self.status.is_final() {
            return None;
        }
        match (self.home_score, self.away_score) {
            (Some(home), Some(away)) if home > away => Some(self.home_team.id),
            (Some(home), Some(away)) if away > home => Some(self.away_team.id),
            _ => None,
        }
    }

    pub fn has_score(&self) -> bool {
        self.home_score.is_some() || self.away_score.is_some()
    }

    /// Finished with both scores present, or scheduled with no score yet.
    /// Anything else is a partial record and takes no part in a series.
    pub fn is_well_formed(&self) -> bool {
        match self.status {
            GameStatus::Finished => self.home_score.is_some() && self.away_score.is_some(),
            GameStatus::Scheduled => !self.has_score(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTeam {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawGame {
    pub id: i64,
    pub stage: i32,
    pub date: DateTime<Utc>,
    pub status: GameStatus,
    pub home_team: RawTeam,
    pub away_team: RawTeam,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
}

impl From<RawTeam> for Team {
    fn from(raw: RawTeam) -> Self {
        let code = match raw.code {
            Some(code) if !code.trim().is_empty() => code.trim().to_uppercase(),
            _ => derive_code(raw.nickname.as_deref(), &raw.name),
        };
        Team {
            id: raw.id,
            name: raw.name,
            code,
        }
    }
}

impl TryFrom<RawGame> for GameRecord {
    type Error = RecordError;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        if raw.home_team.id == raw.away_team.id {
            return Err(RecordError::SameTeam {
                game_id: raw.id,
                team_id: raw.home_team.id,
            });
        }
        Ok(GameRecord {
            id: raw.id,
            stage: raw.stage,
            date: raw.date,
            status: raw.status,
            home_team: raw.home_team.into(),
            away_team: raw.away_team.into(),
            home_score: raw.home_score,
            away_score: raw.away_score,
        })
    }
}

/// Validate a raw batch, dropping records that break the two-team invariant
/// and repeated game ids (first occurrence wins).
pub fn validate_batch(raw: Vec<RawGame>) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    let mut games = Vec::with_capacity(raw.len());

    for raw_game in raw {
        let game_id = raw_game.id;
        match GameRecord::try_from(raw_game) {
            Ok(game) => {
                if seen.insert(game.id) {
                    games.push(game);
                } else {
                    warn!("Dropping duplicate record for game {}", game_id);
                }
            }
            Err(e) => warn!("Dropping malformed record: {}", e),
        }
    }

    games
}
