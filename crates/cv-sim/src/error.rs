use cv_behavior::BehaviorError;
use cv_core::{AgentId, CoreError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("configuration of {agent} is invalid: {source}")]
    AgentConfig {
        agent:  AgentId,
        #[source]
        source: CoreError,
    },

    #[error("behavior error for {agent}: {source}")]
    Behavior {
        agent:  AgentId,
        #[source]
        source: BehaviorError,
    },

    #[error("no such agent: {0}")]
    AgentNotFound(AgentId),
}

pub type SimResult<T> = Result<T, SimError>;
