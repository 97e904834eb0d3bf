//! Playoff series resolution.
//!
//! A season batch is filtered down to playoff games, grouped by `SeriesKey`,
//! then each group is walked in date order to number the games and keep a
//! running record. Everything here is a pure function of its inputs; the only
//! async entry point is `load_series`, which fetches the batch first.

pub mod key;
pub mod query;
pub mod summary;
pub mod tally;

pub use key::{group_by_series, SeriesKey};
pub use query::{
    load_series, playoff_games, resolve_matchup, resolve_matchup_series, resolve_season,
    season_for_date, MonthDay, PlayoffWindow, SeriesQuery, SeriesSettings, SeriesView,
};
pub use summary::{SeriesRecord, SeriesState, Side, WINS_TO_CLINCH};
pub use tally::{tally_series, Series, SeriesGame};
