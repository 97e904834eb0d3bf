pub mod playoffs;
pub mod series;
pub mod watch;

use crate::series::season_for_date;
use crate::types::GameRecord;
use anyhow::{bail, Result};
use chrono::Local;
use std::collections::BTreeMap;

/// Season start year to use, defaulting to the current season
pub fn resolve_season(season: Option<i32>) -> i32 {
    season.unwrap_or_else(|| season_for_date(Local::now().date_naive()))
}

/// Display label for a season, e.g. `2023-24`
pub fn season_label(season: i32) -> String {
    format!("{}-{:02}", season, (season.rem_euclid(100) + 1) % 100)
}

/// Resolve a team argument: a numeric id, or a team code seen in the batch
pub fn resolve_team(batch: &[GameRecord], arg: &str) -> Result<i64> {
    if let Ok(id) = arg.trim().parse::<i64>() {
        return Ok(id);
    }

    let wanted = arg.trim().to_uppercase();
    let mut matches: BTreeMap<i64, &str> = BTreeMap::new();
    for game in batch {
        for team in [&game.home_team, &game.away_team] {
            if team.code == wanted {
                matches.insert(team.id, &team.name);
            }
        }
    }

    match (matches.keys().next(), matches.len()) {
        (None, _) => bail!("Unknown team '{}'. Use a team id or a code from the season data", arg),
        (Some(id), 1) => Ok(*id),
        _ => {
            let candidates: Vec<String> = matches
                .iter()
                .map(|(id, name)| format!("{} ({})", id, name))
                .collect();
            bail!("Team code '{}' is ambiguous: {}", arg, candidates.join(", "))
        }
    }
}
