use super::key::{group_by_series, SeriesKey};
use super::tally::{tally_series, Series, SeriesGame};
use crate::cache::fetch_season_cached;
use crate::data_provider::SeasonDataProvider;
use crate::types::{GameRecord, PLAYOFF_STAGE};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A calendar day without a year, written `MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    pub fn new(month: u32, day: u32) -> Option<Self> {
        // 2000 is a leap year, so Feb 29 is accepted here
        NaiveDate::from_ymd_opt(2000, month, day).map(|_| Self { month, day })
    }

    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (month, day) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month-day '{}'. Use MM-DD", s))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| format!("Invalid month in '{}'", s))?;
        let day = day
            .parse::<u32>()
            .map_err(|_| format!("Invalid day in '{}'", s))?;
        MonthDay::new(month, day).ok_or_else(|| format!("No such day '{}'", s))
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Calendar span in which a season's playoffs are played.
///
/// Both ends fall in the year after the season starts and are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoffWindow {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl Default for PlayoffWindow {
    fn default() -> Self {
        PlayoffWindow {
            start: MonthDay { month: 4, day: 15 },
            end: MonthDay { month: 7, day: 1 },
        }
    }
}

impl PlayoffWindow {
    pub fn bounds(&self, season_start_year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let year = season_start_year.checked_add(1)?;
        Some((self.start.in_year(year)?, self.end.in_year(year)?))
    }

    pub fn contains(&self, season_start_year: i32, date: DateTime<Utc>) -> bool {
        match self.bounds(season_start_year) {
            Some((start, end)) => {
                let day = date.date_naive();
                start <= day && day <= end
            }
            None => false,
        }
    }
}

/// Which games count as playoff games
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesSettings {
    pub stage: i32,
    pub window: PlayoffWindow,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        SeriesSettings {
            stage: PLAYOFF_STAGE,
            window: PlayoffWindow::default(),
        }
    }
}

/// A matchup lookup: two teams in one season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeriesQuery {
    pub team1: i64,
    pub team2: i64,
    pub season: i32,
}

impl SeriesQuery {
    pub fn new(team1: i64, team2: i64, season: i32) -> Self {
        Self {
            team1,
            team2,
            season,
        }
    }
}

/// Current season start year for a date: August onward belongs to the new season
pub fn season_for_date(date: NaiveDate) -> i32 {
    if date.month() >= 8 {
        date.year()
    } else {
        date.year() - 1
    }
}

/// Playoff games of one season: right stage, inside the window, well formed
pub fn playoff_games<'a>(
    batch: &'a [GameRecord],
    season: i32,
    settings: &'a SeriesSettings,
) -> impl Iterator<Item = &'a GameRecord> + 'a {
    if settings.window.bounds(season).is_none() {
        warn!(
            "Playoff window {}..{} does not exist for season {}",
            settings.window.start,
            settings.window.end,
            season
        );
    }
    batch.iter().filter(move |game| {
        game.stage == settings.stage
            && settings.window.contains(season, game.date)
            && game.is_well_formed()
    })
}

fn resolve_groups(groups: BTreeMap<SeriesKey, Vec<&GameRecord>>) -> Vec<Series> {
    let mut series: Vec<Series> = groups
        .values()
        .filter_map(|games| tally_series(games))
        .collect();
    series.sort_by(|a, b| {
        let first = |s: &Series| s.first_game().map(|g| g.date);
        first(a).cmp(&first(b)).then(a.key.cmp(&b.key))
    });
    series
}

/// Every series the two teams played in the season, one per stage
pub fn resolve_matchup_series(
    batch: &[GameRecord],
    query: &SeriesQuery,
    settings: &SeriesSettings,
) -> Vec<Series> {
    if query.team1 == query.team2 {
        debug!("Matchup query names team {} twice", query.team1);
        return Vec::new();
    }
    let games = playoff_games(batch, query.season, settings)
        .filter(|game| game.is_between(query.team1, query.team2));
    resolve_groups(group_by_series(games))
}

/// Annotated games for one matchup, in chronological order within each series
pub fn resolve_matchup(
    batch: &[GameRecord],
    query: &SeriesQuery,
    settings: &SeriesSettings,
) -> Vec<SeriesGame> {
    resolve_matchup_series(batch, query, settings)
        .into_iter()
        .flat_map(|series| series.games)
        .collect()
}

/// Every playoff series of the season
pub fn resolve_season(
    batch: &[GameRecord],
    season: i32,
    settings: &SeriesSettings,
) -> Vec<Series> {
    resolve_groups(group_by_series(playoff_games(batch, season, settings)))
}

/// What a consumer sees for a matchup: games plus the fetch state
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeriesView {
    pub games: Vec<SeriesGame>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Fetch the season batch and resolve the matchup.
///
/// A failed fetch yields no games and the error message, never stale data.
pub async fn load_series(
    client: &dyn SeasonDataProvider,
    query: &SeriesQuery,
    settings: &SeriesSettings,
) -> SeriesView {
    match fetch_season_cached(client, query.season).await {
        Ok(batch) => SeriesView {
            games: resolve_matchup(&batch, query, settings),
            loading: false,
            error: None,
        },
        Err(e) => {
            warn!("Failed to fetch season {}: {}", query.season, e);
            SeriesView {
                games: Vec::new(),
                loading: false,
                error: Some(format!("Failed to fetch season {}: {}", query.season, e)),
            }
        }
    }
}
