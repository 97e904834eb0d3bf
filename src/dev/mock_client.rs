/// Mock season provider for development and testing
use crate::data_provider::SeasonDataProvider;
use crate::error::ProviderError;
use crate::fixtures;
use crate::types::GameRecord;
use async_trait::async_trait;
use tracing::info;

/// Mock client that returns fixture data instead of reading season files
pub struct MockClient;

impl MockClient {
    /// Create a new mock client
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SeasonDataProvider for MockClient {
    async fn season_games(&self, season: i32) -> Result<Vec<GameRecord>, ProviderError> {
        if season != fixtures::MOCK_SEASON {
            info!("MockClient: No mock data for season {}", season);
            return Err(ProviderError::SeasonNotFound(season));
        }
        info!("MockClient: Returning mock games for season {}", season);
        Ok(fixtures::mock_season_games())
    }
}
