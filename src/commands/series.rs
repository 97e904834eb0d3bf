use crate::cache::fetch_season_cached;
use crate::commands::{resolve_season, resolve_team, season_label};
use crate::config::DisplayConfig;
use crate::data_provider::SeasonDataProvider;
use crate::formatting::{box_inner_width, build_border, build_row, format_header, pad_min};
use crate::series::{
    load_series, resolve_matchup_series, Series, SeriesGame, SeriesQuery, SeriesSettings,
};
use anyhow::{Context, Result};

// Layout Constants
/// Minimum inner width of the game box
const BOX_INNER_WIDTH: usize = 76;

/// Width of the matchup column ("MIA @ BOS")
const MATCHUP_COL_WIDTH: usize = 9;

/// Width of the score/status column
const SCORE_COL_WIDTH: usize = 9;

/// One table row for an annotated game
pub fn format_game_row(game: &SeriesGame) -> String {
    let record = &game.game;
    let matchup = format!("{} @ {}", record.away_team.code, record.home_team.code);
    let score = match (record.status.is_final(), record.away_score, record.home_score) {
        (true, Some(away), Some(home)) => format!("{}-{}", away, home),
        _ => record.status.to_string(),
    };
    format!(
        "{:>2}  {}  {}  {}  {}",
        game.game_number,
        record.date.format("%Y-%m-%d"),
        pad_min(&matchup, MATCHUP_COL_WIDTH),
        pad_min(&score, SCORE_COL_WIDTH),
        game.series_summary
    )
}

/// Boxed table of annotated games, widened so no row is cut
pub fn format_games(games: &[SeriesGame], display: &DisplayConfig) -> String {
    let chars = &display.box_chars;
    let rows: Vec<String> = games.iter().map(format_game_row).collect();
    let inner = box_inner_width(rows.iter().map(String::as_str), BOX_INNER_WIDTH);

    let mut output = String::new();
    output.push_str(&build_border(&chars.top_left, &chars.top_right, inner, display));
    output.push('\n');
    for row in &rows {
        output.push_str(&build_row(row, inner, display));
        output.push('\n');
    }
    output.push_str(&build_border(&chars.bottom_left, &chars.bottom_right, inner, display));
    output.push('\n');
    output
}

/// Header, game table and closing status for one series
pub fn format_series(series: &Series, season: i32, display: &DisplayConfig) -> String {
    let title = format!(
        "{} vs {} - {} Playoffs",
        series.team_a.code,
        series.team_b.code,
        season_label(season)
    );
    let mut output = format_header(&title, true, display);
    output.push_str(&format_games(&series.games, display));
    output.push_str(&format!("{} {}\n", display.box_chars.selector, series.summary()));
    output
}

pub async fn run(
    client: &dyn SeasonDataProvider,
    settings: &SeriesSettings,
    display: &DisplayConfig,
    team1: &str,
    team2: &str,
    season: Option<i32>,
    json: bool,
) -> Result<()> {
    let season = resolve_season(season);
    let batch = fetch_season_cached(client, season)
        .await
        .with_context(|| format!("Failed to fetch season {}", season))?;

    let query = SeriesQuery::new(
        resolve_team(&batch, team1)?,
        resolve_team(&batch, team2)?,
        season,
    );

    if json {
        let view = load_series(client, &query, settings).await;
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    let series = resolve_matchup_series(&batch, &query, settings);
    if series.is_empty() {
        println!(
            "\nNo playoff games between {} and {} in {}.\n",
            team1,
            team2,
            season_label(season)
        );
        return Ok(());
    }

    for s in &series {
        println!();
        print!("{}", format_series(s, season, display));
    }
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::dev::mock_client::MockClient;
    use crate::fixtures::{game, mock_season_games, named_team, GameSpec, MOCK_SEASON};
    use crate::series::tally_series;
    use crate::types::GameRecord;
    use crate::formatting::BoxChars;

    fn ascii() -> DisplayConfig {
        DisplayConfig {
            use_unicode: false,
            box_chars: BoxChars::ascii(),
        }
    }

    fn bos_mia() -> Series {
        let batch = mock_season_games();
        let query = SeriesQuery::new(2, 20, MOCK_SEASON);
        resolve_matchup_series(&batch, &query, &SeriesSettings::default())
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn test_game_row() {
        let series = bos_mia();
        assert_eq!(
            format_game_row(&series.games[0]),
            " 1  2024-04-21  MIA @ BOS  94-114     BOS leads series 1-0"
        );
        assert_eq!(
            format_game_row(&series.games[2]),
            " 3  2024-04-27  BOS @ MIA  104-84     BOS leads series 2-1"
        );
    }

    #[test]
    fn test_scheduled_row_shows_status() {
        let batch = mock_season_games();
        let query = SeriesQuery::new(15, 24, MOCK_SEASON);
        let series = resolve_matchup_series(&batch, &query, &SeriesSettings::default());
        assert_eq!(
            format_game_row(&series[0].games[0]),
            " 1  2024-05-06  IND @ NYK  SCHEDULED  Series between IND and NYK not started"
        );
    }

    #[test]
    fn test_not_started_series_fits_its_box() {
        let batch = mock_season_games();
        let query = SeriesQuery::new(15, 24, MOCK_SEASON);
        let series = resolve_matchup_series(&batch, &query, &SeriesSettings::default());
        let output = format_games(&series[0].games, &ascii());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Series between IND and NYK not started |"));
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
        assert!(lines[0].len() > BOX_INNER_WIDTH + 2);
    }

    #[test]
    fn test_long_codes_are_not_cut() {
        let a = named_team(5, "ABCD");
        let b = named_team(9, "EFGH");
        let games = vec![game(GameSpec::scheduled(1, "2024-04-20", b, a))];
        let refs: Vec<&GameRecord> = games.iter().collect();
        let series = tally_series(&refs).unwrap();

        let row = format_game_row(&series.games[0]);
        assert!(row.contains("ABCD @ EFGH  SCHEDULED  Series between ABCD and EFGH not started"));
        let output = format_games(&series.games, &ascii());
        assert!(output.contains("Series between ABCD and EFGH not started |"));
    }

    #[test]
    fn test_series_output() {
        let output = format_series(&bos_mia(), MOCK_SEASON, &ascii());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "BOS vs MIA - 2023-24 Playoffs");
        assert_eq!(lines[1], "=============================");
        assert_eq!(lines[2], format!("+{}+", "-".repeat(BOX_INNER_WIDTH)));
        assert!(lines[3].starts_with("|  1  2024-04-21  MIA @ BOS"));
        assert!(lines[3].ends_with(" |"));
        assert_eq!(lines[3].len(), BOX_INNER_WIDTH + 2);
        assert_eq!(lines[8], format!("+{}+", "-".repeat(BOX_INNER_WIDTH)));
        assert_eq!(lines[9], "> BOS won the series 4-1");
        assert_eq!(lines.len(), 10);
    }

    #[tokio::test]
    async fn test_run_with_codes() {
        let client = MockClient::new();
        let result = run(
            &client,
            &SeriesSettings::default(),
            &ascii(),
            "den",
            "MIN",
            Some(MOCK_SEASON),
            false,
        )
        .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_unknown_season() {
        let client = MockClient::new();
        let err = run(
            &client,
            &SeriesSettings::default(),
            &ascii(),
            "2",
            "20",
            Some(1997),
            true,
        )
        .await
        .unwrap_err();
        assert_eq!(
            format!("{:#}", err),
            "Failed to fetch season 1997: No game data for season 1997"
        );
    }
}
