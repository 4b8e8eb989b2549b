use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cards::{Card, CardError, ensure_distinct, parse_card};
use crate::equity::{EquityTally, exhaustive_equity};
use crate::game::{Action, DecisionRequest, DecisionResponse, ScoreState};
use crate::hand::{Hand, HandCategory};
use crate::policy::{DecisionPolicy, PolicyConfig, Rationale};
use crate::rival::OpponentStats;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub seed: Option<u64>,
    pub policy: PolicyConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("hole cards or table card missing")]
    MissingInput,
    #[error("malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
    #[error("expected 2 hole cards, got {0}")]
    HoleCardCount(usize),
    #[error(transparent)]
    Card(#[from] CardError),
    #[error("internal error: {0}")]
    Internal(String),
}

/// Validated cards for one decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    pub hole: [Card; 2],
    pub table: Card,
}

impl Deal {
    pub fn from_request(request: &DecisionRequest) -> Result<Self, DecisionError> {
        let hole = match request.your_hole.as_deref() {
            None | Some([]) => return Err(DecisionError::MissingInput),
            Some(tokens) => tokens,
        };
        let table = match request.table_card.as_deref() {
            None | Some("") => return Err(DecisionError::MissingInput),
            Some(token) => token,
        };
        let hole: [Card; 2] = match hole {
            [first, second] => [parse_card(first)?, parse_card(second)?],
            other => return Err(DecisionError::HoleCardCount(other.len())),
        };
        let table = parse_card(table)?;
        ensure_distinct(&[hole[0], hole[1], table])?;
        Ok(Self { hole, table })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    #[serde(skip)]
    pub hand: Hand,
    pub category: HandCategory,
    pub tally: EquityTally,
    pub win_probability: f64,
    pub rationale: Rationale,
}

pub struct Agent<R = StdRng> {
    policy: DecisionPolicy,
    rng: R,
}

impl Agent<StdRng> {
    pub fn new(config: AgentConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        Self::with_rng(DecisionPolicy::new(config.policy), StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Agent<R> {
    pub fn with_rng(policy: DecisionPolicy, rng: R) -> Self {
        Self { policy, rng }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    pub fn decide_deal(
        &mut self,
        deal: &Deal,
        stats: &OpponentStats,
        score: &ScoreState,
    ) -> Result<Decision, DecisionError> {
        let hand = Hand::new(deal.hole, deal.table);
        let category = hand.category();
        let tally = exhaustive_equity(deal.hole, deal.table)?;
        let win_probability = tally
            .win_probability()
            .ok_or_else(|| DecisionError::Internal("no opponent holdings to evaluate".into()))?;

        let verdict = self.policy.decide(win_probability, stats, score, &mut self.rng);
        debug!(
            hole = %format!("{} {}", deal.hole[0], deal.hole[1]),
            table = %deal.table,
            category = category.label(),
            wins = tally.wins,
            ties = tally.ties,
            losses = tally.losses,
            win_probability,
            action = verdict.action.label(),
            rationale = ?verdict.rationale,
            "decision made"
        );

        Ok(Decision {
            action: verdict.action,
            hand,
            category,
            tally,
            win_probability,
            rationale: verdict.rationale,
        })
    }

    pub fn decide(&mut self, request: &DecisionRequest) -> Result<Decision, DecisionError> {
        let deal = Deal::from_request(request)?;
        self.decide_deal(&deal, &request.opponent_stats, &request.score())
    }

    pub fn decide_json(&mut self, raw: &str) -> Result<Decision, DecisionError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(DecisionError::MissingInput);
        }
        let request: DecisionRequest = serde_json::from_str(raw)?;
        self.decide(&request)
    }

    /// Boundary entry point: every failure becomes a FOLD.
    pub fn respond(&mut self, raw: &str) -> DecisionResponse {
        respond_to(&self.decide_json(raw))
    }
}

pub fn respond_to(result: &Result<Decision, DecisionError>) -> DecisionResponse {
    match result {
        Ok(decision) => DecisionResponse {
            action: decision.action,
        },
        Err(DecisionError::MissingInput) => {
            debug!("cards missing from request, folding");
            DecisionResponse::fold()
        }
        Err(err) => {
            warn!(error = %err, "request rejected, folding");
            DecisionResponse::fold()
        }
    }
}
