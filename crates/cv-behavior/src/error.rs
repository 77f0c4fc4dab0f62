use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BehaviorError {
    #[error("state machine updated before it was initialized")]
    NotInitialized,

    #[error("state machine is already initialized")]
    AlreadyInitialized,
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
