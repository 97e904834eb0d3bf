use crate::cache;
use crate::data_provider::SeasonDataProvider;
use crate::series::{resolve_matchup, SeriesQuery, SeriesSettings, SeriesView};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::sync::{mpsc, RwLock};
use tracing::{debug, info, warn};

/// Matchup being watched and its latest resolved view
#[derive(Debug, Clone, Default)]
pub struct SharedSeries {
    pub query: Option<SeriesQuery>,
    pub view: SeriesView,
    /// Query the games in `view` were resolved for
    pub resolved_for: Option<SeriesQuery>,
    pub last_refresh: Option<SystemTime>,
}

impl SharedSeries {
    pub fn new(query: SeriesQuery) -> Self {
        Self {
            query: Some(query),
            ..Default::default()
        }
    }

    /// Switch to another matchup, dropping everything derived for the old one
    pub fn set_query(&mut self, query: SeriesQuery) {
        if self.query != Some(query) {
            self.query = Some(query);
            self.view = SeriesView::default();
            self.resolved_for = None;
        }
    }
}

pub type SharedSeriesHandle = Arc<RwLock<SharedSeries>>;

/// Fetch the season batch for the current query and update shared state.
///
/// `force` bypasses the season cache.
pub async fn fetch_series(
    client: &dyn SeasonDataProvider,
    shared_data: &SharedSeriesHandle,
    settings: &SeriesSettings,
    force: bool,
) {
    let query = {
        let mut shared = shared_data.write().await;
        let Some(query) = shared.query else {
            return;
        };
        if shared.resolved_for != Some(query) {
            shared.view.games.clear();
        }
        shared.view.loading = true;
        query
    };

    let result = if force {
        cache::refresh_season(client, query.season).await
    } else {
        cache::fetch_season_cached(client, query.season).await
    };

    let mut shared = shared_data.write().await;
    if shared.query != Some(query) {
        // query changed while fetching; the next pass resolves the new one
        debug!("Discarding result for stale query {:?}", query);
        return;
    }
    match result {
        Ok(batch) => {
            shared.view.games = resolve_matchup(&batch, &query, settings);
            shared.view.error = None;
            shared.resolved_for = Some(query);
            shared.last_refresh = Some(SystemTime::now());
            info!(
                "Resolved {} games for {} vs {} ({})",
                shared.view.games.len(),
                query.team1,
                query.team2,
                query.season
            );
        }
        Err(e) => {
            warn!("Failed to fetch season {}: {}", query.season, e);
            shared.view.games.clear();
            shared.view.error = Some(format!("Failed to fetch season {}: {}", query.season, e));
            shared.resolved_for = None;
        }
    }
    shared.view.loading = false;
}

/// Background task loop that keeps the watched series current.
///
/// Sends on `updated_tx` after every pass and stops once the receiver is gone.
pub async fn fetch_series_loop(
    client: Arc<dyn SeasonDataProvider>,
    shared_data: SharedSeriesHandle,
    settings: SeriesSettings,
    interval: u64,
    mut refresh_rx: mpsc::Receiver<()>,
    updated_tx: mpsc::Sender<()>,
) {
    let mut interval_timer = tokio::time::interval(Duration::from_secs(interval.max(1)));
    interval_timer.tick().await; // First tick completes immediately

    let mut force = false;
    let mut refresh_open = true;
    loop {
        fetch_series(client.as_ref(), &shared_data, &settings, force).await;

        if updated_tx.send(()).await.is_err() {
            debug!("Series watcher gone, stopping refresh loop");
            break;
        }

        // Wait for either the interval timer or a manual refresh signal
        let mut refresh_closed = false;
        tokio::select! {
            _ = interval_timer.tick() => {
                force = false;
            }
            signal = refresh_rx.recv(), if refresh_open => {
                match signal {
                    Some(()) => force = true,
                    None => refresh_closed = true,
                }
            }
        }

        if refresh_closed {
            // no more manual refreshes; fall back to the timer alone
            refresh_open = false;
            force = false;
            interval_timer.tick().await;
        }
    }
}
