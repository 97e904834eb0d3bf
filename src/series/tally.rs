use super::key::SeriesKey;
use super::summary::{SeriesRecord, Side};
use crate::types::{GameRecord, Team};
use serde::Serialize;
use tracing::debug;

/// A game annotated with its place in the series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesGame {
    #[serde(flatten)]
    pub game: GameRecord,
    pub game_number: u32,
    pub series_record: SeriesRecord,
    pub series_summary: String,
}

/// One resolved series between two teams in one stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub key: SeriesKey,
    /// Lower id team
    pub team_a: Team,
    /// Higher id team
    pub team_b: Team,
    pub games: Vec<SeriesGame>,
}

impl Series {
    /// Record after the last known game
    pub fn record(&self) -> SeriesRecord {
        self.games
            .last()
            .map(|g| g.series_record)
            .unwrap_or_default()
    }

    pub fn summary(&self) -> String {
        self.record().summary(&self.team_a.code, &self.team_b.code)
    }

    pub fn is_complete(&self) -> bool {
        self.record().is_complete()
    }

    /// Number of games that counted toward the tally
    pub fn games_played(&self) -> usize {
        let record = self.record();
        (record.wins_a + record.wins_b) as usize
    }

    pub fn first_game(&self) -> Option<&GameRecord> {
        self.games.first().map(|g| &g.game)
    }
}

/// Walk one series' games in date order, annotating each with the running tally.
///
/// All games must share a `SeriesKey`. Equal dates fall back to game id so the
/// output does not depend on the order the batch arrived in. Returns `None` for
/// an empty bucket.
pub fn tally_series(games: &[&GameRecord]) -> Option<Series> {
    let mut sorted: Vec<&GameRecord> = games.to_vec();
    sorted.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    let first = sorted.first()?;
    let key = SeriesKey::of(first);
    let (team_a, team_b) = if first.home_team.id == key.low {
        (first.home_team.clone(), first.away_team.clone())
    } else {
        (first.away_team.clone(), first.home_team.clone())
    };

    let mut record = SeriesRecord::default();
    let mut annotated = Vec::with_capacity(sorted.len());

    for (index, game) in sorted.into_iter().enumerate() {
        if let Some(winner) = game.winner_id() {
            let side = if winner == team_a.id {
                Side::A
            } else {
                Side::B
            };
            record.add_win(side);
        } else if game.status.is_final() {
            debug!("Game {} is final without a decisive score", game.id);
        }

        annotated.push(SeriesGame {
            game: game.clone(),
            game_number: index as u32 + 1,
            series_record: record,
            series_summary: record.summary(&team_a.code, &team_b.code),
        });
    }

    Some(Series {
        key,
        team_a,
        team_b,
        games: annotated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{game, named_team, team, GameSpec};

    fn refs(games: &[GameRecord]) -> Vec<&GameRecord> {
        games.iter().collect()
    }

    fn swap_home_away(game: &GameRecord) -> GameRecord {
        GameRecord {
            home_team: game.away_team.clone(),
            away_team: game.home_team.clone(),
            home_score: game.away_score,
            away_score: game.home_score,
            ..game.clone()
        }
    }

    #[test]
    fn test_empty_bucket() {
        assert!(tally_series(&[]).is_none());
    }

    #[test]
    fn test_not_started() {
        let a = named_team(5, "A");
        let b = named_team(9, "B");
        let games = vec![
            game(GameSpec::scheduled(1, "2024-04-20", b.clone(), a.clone())),
            game(GameSpec::scheduled(2, "2024-04-22", a, b)),
        ];

        let series = tally_series(&refs(&games)).unwrap();
        assert_eq!(series.team_a.id, 5);
        for g in &series.games {
            assert_eq!(g.series_record.to_string(), "0-0");
            assert_eq!(g.series_summary, "Series between A and B not started");
        }
    }

    #[test]
    fn test_tied_after_split() {
        let a = named_team(5, "A");
        let b = named_team(9, "B");
        let games = vec![
            game(GameSpec::finished(1, "2024-04-20", a.clone(), b.clone(), 101, 99)),
            game(GameSpec::finished(2, "2024-04-22", a, b, 95, 104)),
        ];

        let series = tally_series(&refs(&games)).unwrap();
        assert_eq!(series.games[0].series_summary, "A leads series 1-0");
        assert_eq!(series.games[0].series_record.to_string(), "1-0");
        assert_eq!(series.games[1].series_summary, "Series tied 1-1");
        assert!(!series.is_complete());
    }

    #[test]
    fn test_won_four_three_with_extra_game() {
        let a = named_team(5, "A");
        let b = named_team(9, "B");
        let results = [
            (1, true),
            (2, false),
            (3, true),
            (4, false),
            (5, true),
            (6, false),
            (7, true),
            (8, false),
        ];
        let games: Vec<GameRecord> = results
            .iter()
            .map(|&(id, a_wins)| {
                let date = format!("2024-04-{:02}", 10 + id);
                let (hs, aw) = if a_wins { (110, 100) } else { (100, 110) };
                game(GameSpec::finished(id, &date, a.clone(), b.clone(), hs, aw))
            })
            .collect();

        let series = tally_series(&refs(&games)).unwrap();
        assert_eq!(series.games[6].series_summary, "A won the series 4-3");
        assert_eq!(series.games[6].series_record.to_string(), "4-3");
        assert_eq!(series.games[7].game_number, 8);
        assert_eq!(series.games[7].series_record.to_string(), "4-4");
        assert_eq!(series.games[7].series_summary, "Series tied 4-4");
    }

    #[test]
    fn test_sorted_by_date_and_numbered() {
        let games = vec![
            game(GameSpec::finished(3, "2024-04-27", team(20), team(2), 84, 104)),
            game(GameSpec::finished(1, "2024-04-21", team(2), team(20), 114, 94)),
            game(GameSpec::scheduled(4, "2024-04-29", team(20), team(2))),
            game(GameSpec::finished(2, "2024-04-24", team(2), team(20), 101, 111)),
        ];

        let series = tally_series(&refs(&games)).unwrap();
        let ids: Vec<i64> = series.games.iter().map(|g| g.game.id).collect();
        let numbers: Vec<u32> = series.games.iter().map(|g| g.game_number).collect();
        let records: Vec<String> = series
            .games
            .iter()
            .map(|g| g.series_record.to_string())
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(records, vec!["1-0", "1-1", "2-1", "2-1"]);
        assert_eq!(series.games[3].series_summary, "BOS leads series 2-1");
        assert_eq!(series.summary(), "BOS leads series 2-1");
        assert_eq!(series.games_played(), 3);
    }

    #[test]
    fn test_orientation_is_by_id_not_home() {
        // MIA (20) is home in the first game; BOS (2) still reads first
        let games = vec![
            game(GameSpec::finished(1, "2024-04-21", team(20), team(2), 111, 101)),
        ];
        let series = tally_series(&refs(&games)).unwrap();
        assert_eq!(series.team_a.code, "BOS");
        assert_eq!(series.games[0].series_record.to_string(), "0-1");
        assert_eq!(series.games[0].series_summary, "MIA leads series 1-0");
    }

    #[test]
    fn test_home_away_swap_is_invisible() {
        let games = vec![
            game(GameSpec::finished(1, "2024-04-21", team(2), team(20), 114, 94)),
            game(GameSpec::finished(2, "2024-04-24", team(2), team(20), 101, 111)),
            game(GameSpec::finished(3, "2024-04-27", team(20), team(2), 84, 104)),
        ];
        let mut swapped = games.clone();
        swapped[1] = swap_home_away(&games[1]);

        let original = tally_series(&refs(&games)).unwrap();
        let flipped = tally_series(&refs(&swapped)).unwrap();
        for (x, y) in original.games.iter().zip(&flipped.games) {
            assert_eq!(x.series_record, y.series_record);
            assert_eq!(x.series_summary, y.series_summary);
        }
    }

    #[test]
    fn test_same_date_ties_break_on_id() {
        let games = vec![
            game(GameSpec::finished(12, "2024-04-21", team(2), team(20), 90, 100)),
            game(GameSpec::finished(11, "2024-04-21", team(2), team(20), 100, 90)),
        ];
        let mut reversed = games.clone();
        reversed.reverse();

        let forward = tally_series(&refs(&games)).unwrap();
        let backward = tally_series(&refs(&reversed)).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.games[0].game.id, 11);
        assert_eq!(forward.games[0].series_summary, "BOS leads series 1-0");
    }

    #[test]
    fn test_tally_is_monotonic() {
        let season = crate::fixtures::mock_season_games();
        let bucket: Vec<&GameRecord> = season.iter().filter(|g| g.is_between(9, 22)).collect();
        let series = tally_series(&bucket).unwrap();

        let mut prev = SeriesRecord::default();
        for (i, g) in series.games.iter().enumerate() {
            assert_eq!(g.game_number as usize, i + 1);
            let rec = g.series_record;
            assert!(rec.wins_a >= prev.wins_a && rec.wins_b >= prev.wins_b);
            assert!((rec.wins_a + rec.wins_b) - (prev.wins_a + prev.wins_b) <= 1);
            prev = rec;
        }
        assert_eq!(series.summary(), "MIN won the series 4-3");
        assert!(series.is_complete());
    }

    #[test]
    fn test_final_tie_does_not_count() {
        let games = vec![
            game(GameSpec::finished(1, "2024-04-21", team(2), team(20), 100, 100)),
        ];
        let series = tally_series(&refs(&games)).unwrap();
        assert_eq!(series.record(), SeriesRecord::default());
        assert_eq!(series.games[0].game_number, 1);
    }

    #[test]
    fn test_serialized_fields() {
        let games = vec![
            game(GameSpec::finished(1, "2024-04-21", team(2), team(20), 114, 94)),
        ];
        let series = tally_series(&refs(&games)).unwrap();
        let value = serde_json::to_value(&series.games[0]).unwrap();

        assert_eq!(value["id"], 1);
        assert_eq!(value["status"], "Finished");
        assert_eq!(value["home_team"]["code"], "BOS");
        assert_eq!(value["game_number"], 1);
        assert_eq!(value["series_record"], "1-0");
        assert_eq!(value["series_summary"], "BOS leads series 1-0");
    }
}
