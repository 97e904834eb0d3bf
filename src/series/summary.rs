use serde::{Serialize, Serializer};
use std::fmt;

/// Wins needed to take a best-of-seven series
pub const WINS_TO_CLINCH: u32 = 4;

/// Which side of the canonical orientation a team sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Lower team id
    A,
    /// Higher team id
    B,
}

/// Running series record, always oriented lower id first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SeriesRecord {
    pub wins_a: u32,
    pub wins_b: u32,
}

/// Where a series stands for a given record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesState {
    NotStarted,
    Tied { wins: u32 },
    Won { winner: Side, loser_wins: u32 },
    Leading {
        leader: Side,
        leader_wins: u32,
        trailer_wins: u32,
    },
}

impl SeriesRecord {
    pub fn new(wins_a: u32, wins_b: u32) -> Self {
        Self { wins_a, wins_b }
    }

    pub fn add_win(&mut self, side: Side) {
        match side {
            Side::A => self.wins_a += 1,
            Side::B => self.wins_b += 1,
        }
    }

    pub fn state(&self) -> SeriesState {
        let (a, b) = (self.wins_a, self.wins_b);
        if a == 0 && b == 0 {
            return SeriesState::NotStarted;
        }
        if a == b {
            return SeriesState::Tied { wins: a };
        }

        let (side, max, min) = if a > b {
            (Side::A, a, b)
        } else {
            (Side::B, b, a)
        };
        if max >= WINS_TO_CLINCH {
            SeriesState::Won {
                winner: side,
                loser_wins: min,
            }
        } else {
            SeriesState::Leading {
                leader: side,
                leader_wins: max,
                trailer_wins: min,
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state(), SeriesState::Won { .. })
    }

    /// Render the human-readable status line for this record
    pub fn summary(&self, code_a: &str, code_b: &str) -> String {
        let code = |side: Side| match side {
            Side::A => code_a,
            Side::B => code_b,
        };

        match self.state() {
            SeriesState::NotStarted => {
                format!("Series between {} and {} not started", code_a, code_b)
            }
            SeriesState::Tied { wins } => format!("Series tied {}-{}", wins, wins),
            SeriesState::Won { winner, loser_wins } => format!(
                "{} won the series {}-{}",
                code(winner),
                WINS_TO_CLINCH,
                loser_wins
            ),
            SeriesState::Leading {
                leader,
                leader_wins,
                trailer_wins,
            } => format!(
                "{} leads series {}-{}",
                code(leader),
                leader_wins,
                trailer_wins
            ),
        }
    }
}

impl fmt::Display for SeriesRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins_a, self.wins_b)
    }
}

impl Serialize for SeriesRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(a: u32, b: u32) -> String {
        SeriesRecord::new(a, b).summary("BOS", "MIA")
    }

    #[test]
    fn test_record_display() {
        assert_eq!(SeriesRecord::new(3, 2).to_string(), "3-2");
        assert_eq!(SeriesRecord::default().to_string(), "0-0");
    }

    #[test]
    fn test_not_started() {
        assert_eq!(summary(0, 0), "Series between BOS and MIA not started");
    }

    #[test]
    fn test_tied() {
        assert_eq!(summary(1, 1), "Series tied 1-1");
        assert_eq!(summary(3, 3), "Series tied 3-3");
    }

    #[test]
    fn test_leading() {
        assert_eq!(summary(3, 2), "BOS leads series 3-2");
        assert_eq!(summary(0, 1), "MIA leads series 1-0");
        assert_eq!(summary(1, 3), "MIA leads series 3-1");
    }

    #[test]
    fn test_won() {
        assert_eq!(summary(4, 3), "BOS won the series 4-3");
        assert_eq!(summary(0, 4), "MIA won the series 4-0");
        assert!(SeriesRecord::new(2, 4).is_complete());
        assert!(!SeriesRecord::new(3, 3).is_complete());
    }

    #[test]
    fn test_won_past_clinch_reports_four() {
        assert_eq!(summary(5, 2), "BOS won the series 4-2");
    }

    #[test]
    fn test_every_reachable_record_has_one_state() {
        for a in 0..=WINS_TO_CLINCH {
            for b in 0..=WINS_TO_CLINCH {
                let state = SeriesRecord::new(a, b).state();
                let expected = if a == 0 && b == 0 {
                    SeriesState::NotStarted
                } else if a == b {
                    SeriesState::Tied { wins: a }
                } else if a.max(b) >= WINS_TO_CLINCH {
                    SeriesState::Won {
                        winner: if a > b { Side::A } else { Side::B },
                        loser_wins: a.min(b),
                    }
                } else {
                    SeriesState::Leading {
                        leader: if a > b { Side::A } else { Side::B },
                        leader_wins: a.max(b),
                        trailer_wins: a.min(b),
                    }
                };
                assert_eq!(state, expected, "record {}-{}", a, b);
            }
        }
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&SeriesRecord::new(2, 1)).unwrap();
        assert_eq!(json, "\"2-1\"");
    }
}
