pub mod agent;
pub mod cards;
pub mod equity;
pub mod game;
pub mod hand;
pub mod policy;
pub mod rival;
pub mod web;

pub use agent::{Agent, AgentConfig, Decision, DecisionError};
pub use game::{Action, DecisionRequest, DecisionResponse};
pub use policy::{DecisionPolicy, PolicyConfig};
