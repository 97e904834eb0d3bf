use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by season data providers
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("No game data for season {0}")]
    SeasonNotFound(i32),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A raw game record that cannot be turned into a `GameRecord`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("game {game_id} lists team {team_id} as both home and away")]
    SameTeam { game_id: i64, team_id: i64 },
}
