use crate::background::{fetch_series_loop, SharedSeries, SharedSeriesHandle};
use crate::cache::fetch_season_cached;
use crate::commands::series::format_games;
use crate::commands::{resolve_season, resolve_team, season_label};
use crate::config::Config;
use crate::data_provider::SeasonDataProvider;
use crate::formatting::format_header;
use crate::series::{SeriesQuery, SeriesView};
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{mpsc, RwLock};
use tracing::debug;

/// Buffer size for manual refresh trigger channel
const REFRESH_CHANNEL_BUFFER_SIZE: usize = 10;

pub fn format_view(view: &SeriesView, config: &Config) -> String {
    if view.loading {
        return "Loading...\n".to_string();
    }
    if let Some(error) = &view.error {
        return format!("Error: {}\n", error);
    }
    if view.games.is_empty() {
        return "No playoff games for this matchup.\n".to_string();
    }
    format_games(&view.games, &config.display)
}

fn format_update(state: &SharedSeries, config: &Config) -> String {
    let refreshed = state
        .last_refresh
        .map(|t| DateTime::<Local>::from(t).format(&config.time_format).to_string())
        .unwrap_or_else(|| "never".to_string());
    let title = match state.query {
        Some(q) => format!(
            "{} vs {} - {} (refreshed {})",
            q.team1,
            q.team2,
            season_label(q.season),
            refreshed
        ),
        None => format!("No matchup (refreshed {})", refreshed),
    };
    let mut output = format_header(&title, false, &config.display);
    output.push_str(&format_view(&state.view, config));
    output
}

/// Re-print a matchup after every refresh; Enter forces a refresh, Ctrl-C quits
pub async fn run(
    client: Arc<dyn SeasonDataProvider>,
    config: &Config,
    team1: &str,
    team2: &str,
    season: Option<i32>,
) -> Result<()> {
    let season = resolve_season(season);
    let batch = fetch_season_cached(client.as_ref(), season)
        .await
        .with_context(|| format!("Failed to fetch season {}", season))?;
    let query = SeriesQuery::new(
        resolve_team(&batch, team1)?,
        resolve_team(&batch, team2)?,
        season,
    );

    let shared: SharedSeriesHandle = Arc::new(RwLock::new(SharedSeries::new(query)));
    let (refresh_tx, refresh_rx) = mpsc::channel::<()>(REFRESH_CHANNEL_BUFFER_SIZE);
    let (updated_tx, mut updated_rx) = mpsc::channel::<()>(1);

    let loop_handle = tokio::spawn(fetch_series_loop(
        client,
        Arc::clone(&shared),
        config.series_settings(),
        config.refresh_interval as u64,
        refresh_rx,
        updated_tx,
    ));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            update = updated_rx.recv() => {
                if update.is_none() {
                    break;
                }
                let state = shared.read().await;
                println!();
                print!("{}", format_update(&state, config));
            }
            line = lines.next_line(), if stdin_open => {
                match line {
                    Ok(Some(_)) => {
                        debug!("Manual refresh requested");
                        refresh_tx.send(()).await.context("Failed to send refresh signal")?;
                    }
                    _ => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                break;
            }
        }
    }

    loop_handle.abort();
    Ok(())
}
