use serde::{Deserialize, Serialize};

use crate::rival::OpponentStats;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl Action {
    pub fn label(self) -> &'static str {
        match self {
            Action::Fold => "FOLD",
            Action::Call => "CALL",
            Action::Raise => "RAISE",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScoreState {
    pub your_points: i64,
    pub opponent_points: i64,
}

impl ScoreState {
    pub fn new(your_points: i64, opponent_points: i64) -> Self {
        Self {
            your_points,
            opponent_points,
        }
    }

    /// Widened so that extreme scores cannot overflow the subtraction.
    pub fn differential(&self) -> i128 {
        i128::from(self.your_points) - i128::from(self.opponent_points)
    }
}

/// One decision request as it arrives on the wire.
///
/// Cards stay as raw tokens here; `agent` validates and parses them once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DecisionRequest {
    #[serde(default)]
    pub your_hole: Option<Vec<String>>,
    #[serde(default)]
    pub table_card: Option<String>,
    #[serde(default)]
    pub opponent_stats: OpponentStats,
    #[serde(default)]
    pub your_points: i64,
    #[serde(default)]
    pub opponent_points: i64,
}

impl DecisionRequest {
    pub fn new(hole: [&str; 2], table: &str) -> Self {
        Self {
            your_hole: Some(hole.iter().map(|c| c.to_string()).collect()),
            table_card: Some(table.to_string()),
            ..Self::default()
        }
    }

    pub fn with_stats(mut self, stats: OpponentStats) -> Self {
        self.opponent_stats = stats;
        self
    }

    pub fn with_score(mut self, score: ScoreState) -> Self {
        self.your_points = score.your_points;
        self.opponent_points = score.opponent_points;
        self
    }

    pub fn score(&self) -> ScoreState {
        ScoreState::new(self.your_points, self.opponent_points)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionResponse {
    pub action: Action,
}

impl DecisionResponse {
    pub fn fold() -> Self {
        Self {
            action: Action::Fold,
        }
    }
}
