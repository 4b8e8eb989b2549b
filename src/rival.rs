use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

/// Running counts of the opponent's actions over the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentStats {
    pub fold: u32,
    pub call: u32,
    pub raise: u32,
}

impl OpponentStats {
    pub fn new(fold: u32, call: u32, raise: u32) -> Self {
        Self { fold, call, raise }
    }

    /// Widened so that counters near `u32::MAX` cannot overflow the sum.
    pub fn total_actions(&self) -> u64 {
        u64::from(self.fold) + u64::from(self.call) + u64::from(self.raise)
    }
}

/// Action frequencies derived from [`OpponentStats`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RivalProfile {
    pub total_actions: u64,
    pub fold_rate: f64,
    pub call_rate: f64,
    pub raise_rate: f64,
}

impl RivalProfile {
    /// `None` until the opponent has acted at least once.
    pub fn from_stats(stats: &OpponentStats) -> Option<Self> {
        let total = stats.total_actions();
        if total == 0 {
            return None;
        }
        let total_f = total as f64;
        Some(Self {
            total_actions: total,
            fold_rate: stats.fold as f64 / total_f,
            call_rate: stats.call as f64 / total_f,
            raise_rate: stats.raise as f64 / total_f,
        })
    }

    pub fn is_calling_station(&self, call_rate_above: f64) -> bool {
        self.call_rate > call_rate_above
    }

    pub fn is_timid(&self, fold_rate_above: f64) -> bool {
        self.fold_rate > fold_rate_above
    }

    pub fn is_maniac(&self, raise_rate_above: f64) -> bool {
        self.raise_rate > raise_rate_above
    }
}

/// True with the given probability, using one uniform draw from [0, 1).
pub fn random_decision<R: Rng + ?Sized>(rng: &mut R, probability: f64) -> bool {
    let uniform = Uniform::new(0.0f64, 1.0f64);
    uniform.sample(rng) < probability
}
