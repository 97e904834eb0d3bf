/// Trait for providing season game batches, abstracting over files on disk and mock implementations
use crate::error::ProviderError;
use crate::types::{validate_batch, GameRecord, RawGame};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Trait for season data providers, implemented by both FileProvider and MockClient
#[async_trait]
pub trait SeasonDataProvider: Send + Sync {
    /// Get every game record of the season starting in `season`
    async fn season_games(&self, season: i32) -> Result<Vec<GameRecord>, ProviderError>;
}

/// Reads `<root>/<season>.json`, a JSON array of game records
pub struct FileProvider {
    root: PathBuf,
}

impl FileProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn season_path(&self, season: i32) -> PathBuf {
        self.root.join(format!("{}.json", season))
    }
}

/// Parse a season file body into validated records
pub fn parse_season(body: &str, path: &Path) -> Result<Vec<GameRecord>, ProviderError> {
    let raw: Vec<RawGame> = serde_json::from_str(body).map_err(|source| ProviderError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let total = raw.len();
    let games = validate_batch(raw);
    debug!("Parsed {} of {} records from {}", games.len(), total, path.display());
    Ok(games)
}

#[async_trait]
impl SeasonDataProvider for FileProvider {
    async fn season_games(&self, season: i32) -> Result<Vec<GameRecord>, ProviderError> {
        let path = self.season_path(season);
        info!("Loading season {} from {}", season, path.display());

        let body = match tokio::fs::read_to_string(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ProviderError::SeasonNotFound(season));
            }
            Err(source) => return Err(ProviderError::Io { path, source }),
        };

        parse_season(&body, &path)
    }
}
