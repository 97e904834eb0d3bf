use crate::data_provider::SeasonDataProvider;
use crate::error::ProviderError;
use crate::types::GameRecord;
use cached::proc_macro::cached;

pub use cached::Cached;

#[cfg(test)]
pub async fn clear_all_caches() {
    SEASON_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
#[derive(Debug)]
pub struct CacheStats {
    pub season_entries: usize,
}

#[cfg(test)]
pub async fn cache_stats() -> CacheStats {
    CacheStats {
        season_entries: SEASON_CACHE.lock().await.cache_size(),
    }
}

#[cached(
    name = "SEASON_CACHE",
    type = "cached::TimedSizedCache<i32, Vec<GameRecord>>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(8, 60) }",
    convert = r#"{ season }"#,
    result = true
)]
pub async fn fetch_season_cached(
    client: &dyn SeasonDataProvider,
    season: i32,
) -> Result<Vec<GameRecord>, ProviderError> {
    client.season_games(season).await
}

pub async fn refresh_season(
    client: &dyn SeasonDataProvider,
    season: i32,
) -> Result<Vec<GameRecord>, ProviderError> {
    SEASON_CACHE.lock().await.cache_remove(&season);
    fetch_season_cached(client, season).await
}
