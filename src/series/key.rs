use crate::types::GameRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Order-independent identity of a series: one stage, one pair of teams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SeriesKey {
    pub stage: i32,
    pub low: i64,
    pub high: i64,
}

impl SeriesKey {
    pub fn new(stage: i32, team1: i64, team2: i64) -> Self {
        Self {
            stage,
            low: team1.min(team2),
            high: team1.max(team2),
        }
    }

    pub fn of(game: &GameRecord) -> Self {
        Self::new(game.stage, game.home_team.id, game.away_team.id)
    }
}

/// Partition games into per-series buckets.
///
/// Each bucket keeps the relative order the games arrived in; ordering by
/// date happens later, in the tally.
pub fn group_by_series<'a, I>(games: I) -> BTreeMap<SeriesKey, Vec<&'a GameRecord>>
where
    I: IntoIterator<Item = &'a GameRecord>,
{
    let mut groups: BTreeMap<SeriesKey, Vec<&GameRecord>> = BTreeMap::new();
    for game in games {
        groups.entry(SeriesKey::of(game)).or_default().push(game);
    }
    groups
}
