use crate::cache::fetch_season_cached;
use crate::commands::{resolve_season, season_label};
use crate::config::DisplayConfig;
use crate::data_provider::SeasonDataProvider;
use crate::formatting::{format_header, pad_min};
use crate::series::{resolve_season as resolve_season_series, Series, SeriesSettings};
use anyhow::{Context, Result};

/// Width of the "BOS vs MIA" column
const MATCHUP_COL_WIDTH: usize = 10;

pub fn format_series_line(series: &Series) -> String {
    let matchup = format!("{} vs {}", series.team_a.code, series.team_b.code);
    let started = series
        .first_game()
        .map(|g| g.date.format("%b %d").to_string())
        .unwrap_or_default();
    format!(
        "{}  {}  {:>2} gp  {}",
        pad_min(&matchup, MATCHUP_COL_WIDTH),
        started,
        series.games_played(),
        series.summary()
    )
}

pub fn format_playoffs(series: &[Series], season: i32, display: &DisplayConfig) -> String {
    let mut output = format_header(&format!("{} Playoffs", season_label(season)), true, display);
    if series.is_empty() {
        output.push_str("No playoff games found for this season.\n");
        return output;
    }
    for s in series {
        output.push_str(&format_series_line(s));
        output.push('\n');
    }
    let complete = series.iter().filter(|s| s.is_complete()).count();
    output.push_str(&format!("\n{} of {} series complete\n", complete, series.len()));
    output
}

pub async fn run(
    client: &dyn SeasonDataProvider,
    settings: &SeriesSettings,
    display: &DisplayConfig,
    season: Option<i32>,
) -> Result<()> {
    let season = resolve_season(season);
    let batch = fetch_season_cached(client, season)
        .await
        .with_context(|| format!("Failed to fetch season {}", season))?;

    let series = resolve_season_series(&batch, season, settings);
    println!();
    print!("{}", format_playoffs(&series, season, display));
    println!();
    Ok(())
}
