//! Threshold policy that turns a win probability into an action.
//!
//! Base thresholds come from the payoff shape of the game: a called showdown swings
//! two points either way while folding costs one, so calling breaks even near 25%.
//! The opponent's action history and the late-match score shift those thresholds.
//! Adjusted thresholds are never clamped; one pushed past 0 or 1 simply makes its
//! action always or never reachable.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::game::{Action, ScoreState};
use crate::rival::{OpponentStats, RivalProfile, random_decision};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub raise_threshold: f64,
    pub call_threshold: f64,
    /// Profiling starts only once the opponent has taken more actions than this.
    pub min_profile_actions: u32,
    pub calling_station_call_rate: f64,
    pub timid_fold_rate: f64,
    pub timid_raise_discount: f64,
    pub semi_bluff_min_equity: f64,
    pub semi_bluff_max_equity: f64,
    pub semi_bluff_frequency: f64,
    pub maniac_raise_rate: f64,
    pub maniac_raise_tightening: f64,
    pub maniac_call_tightening: f64,
    pub slow_play_min_equity: f64,
    pub slow_play_frequency: f64,
    /// End-game adjustments start once more actions than this have been seen.
    pub endgame_actions: u32,
    pub protect_lead_above: i64,
    pub protect_lead_raise_tightening: f64,
    pub chase_deficit_below: i64,
    pub chase_raise_discount: f64,
    pub chase_call_discount: f64,
    /// Half-width of the uniform noise added to both thresholds. Zero disables it.
    pub noise: f64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            raise_threshold: 0.60,
            call_threshold: 0.26,
            min_profile_actions: 20,
            calling_station_call_rate: 0.20,
            timid_fold_rate: 0.50,
            timid_raise_discount: 0.15,
            semi_bluff_min_equity: 0.40,
            semi_bluff_max_equity: 0.50,
            semi_bluff_frequency: 0.20,
            maniac_raise_rate: 0.40,
            maniac_raise_tightening: 0.10,
            maniac_call_tightening: 0.05,
            slow_play_min_equity: 0.92,
            slow_play_frequency: 0.20,
            endgame_actions: 950,
            protect_lead_above: 40,
            protect_lead_raise_tightening: 0.10,
            chase_deficit_below: -20,
            chase_raise_discount: 0.20,
            chase_call_discount: 0.15,
            noise: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub raise: f64,
    pub call: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Rationale {
    /// Raised a medium hand into an opponent who folds too much.
    SemiBluff,
    /// Called with a near-lock against an aggressive opponent.
    SlowPlay,
    Thresholds {
        raise: f64,
        call: f64,
        noise: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolicyDecision {
    pub action: Action,
    pub rationale: Rationale,
}

#[derive(Debug, Clone, Default)]
pub struct DecisionPolicy {
    config: PolicyConfig,
}

impl DecisionPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    fn profile(&self, stats: &OpponentStats) -> Option<RivalProfile> {
        if stats.total_actions() > u64::from(self.config.min_profile_actions) {
            RivalProfile::from_stats(stats)
        } else {
            None
        }
    }

    /// Thresholds after opponent and end-game adjustments, before noise.
    pub fn thresholds(&self, stats: &OpponentStats, score: &ScoreState) -> Thresholds {
        let cfg = &self.config;
        let mut thresholds = Thresholds {
            raise: cfg.raise_threshold,
            call: cfg.call_threshold,
        };

        if let Some(profile) = self.profile(stats) {
            if !profile.is_calling_station(cfg.calling_station_call_rate)
                && profile.is_timid(cfg.timid_fold_rate)
            {
                thresholds.raise -= cfg.timid_raise_discount;
            }
            if profile.is_maniac(cfg.maniac_raise_rate) {
                thresholds.raise += cfg.maniac_raise_tightening;
                thresholds.call += cfg.maniac_call_tightening;
            }
        }

        if stats.total_actions() > u64::from(cfg.endgame_actions) {
            let diff = score.differential();
            if diff > i128::from(cfg.protect_lead_above) {
                thresholds.raise += cfg.protect_lead_raise_tightening;
                thresholds.call = cfg.call_threshold;
            } else if diff < i128::from(cfg.chase_deficit_below) {
                thresholds.raise -= cfg.chase_raise_discount;
                thresholds.call -= cfg.chase_call_discount;
            }
        }

        thresholds
    }

    /// Picks an action. Random draws happen only where an exploit is in play, then
    /// once more for the threshold noise.
    pub fn decide<R: Rng + ?Sized>(
        &self,
        win_probability: f64,
        stats: &OpponentStats,
        score: &ScoreState,
        rng: &mut R,
    ) -> PolicyDecision {
        let cfg = &self.config;

        if let Some(profile) = self.profile(stats) {
            if !profile.is_calling_station(cfg.calling_station_call_rate)
                && profile.is_timid(cfg.timid_fold_rate)
                && (cfg.semi_bluff_min_equity..=cfg.semi_bluff_max_equity)
                    .contains(&win_probability)
                && random_decision(rng, cfg.semi_bluff_frequency)
            {
                return PolicyDecision {
                    action: Action::Raise,
                    rationale: Rationale::SemiBluff,
                };
            }
            if profile.is_maniac(cfg.maniac_raise_rate)
                && win_probability > cfg.slow_play_min_equity
                && random_decision(rng, cfg.slow_play_frequency)
            {
                return PolicyDecision {
                    action: Action::Call,
                    rationale: Rationale::SlowPlay,
                };
            }
        }

        let thresholds = self.thresholds(stats, score);
        let noise = if cfg.noise > 0.0 {
            rng.gen_range(-cfg.noise..=cfg.noise)
        } else {
            0.0
        };

        let action = if win_probability >= thresholds.raise + noise {
            Action::Raise
        } else if win_probability >= thresholds.call + noise {
            Action::Call
        } else {
            Action::Fold
        };

        PolicyDecision {
            action,
            rationale: Rationale::Thresholds {
                raise: thresholds.raise,
                call: thresholds.call,
                noise,
            },
        }
    }
}
