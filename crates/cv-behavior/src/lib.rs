//! `cv-behavior`: agent state machine and tactical cover search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | [`context`]  | `AgentContext<'a>`: what a behavior may read and drive each tick   |
//! | [`state`]    | `Behavior` trait, `StateKind`, `Transition`, `BehaviorState` enum  |
//! | [`idle`]     | `IdleState`                                                       |
//! | [`gather`]   | `GatherState`                                                     |
//! | [`flee`]     | `FleeState`: panic speed, cover search, throttled re-evaluation   |
//! | [`cover`]    | `CoverFinder`, `CoverCandidate`, `CoverResult`, `CoverSearch`     |
//! | [`machine`]  | `StateMachine`, `StateChange`                                     |
//! | [`observer`] | `StateObserver` trait, `NoopObserver`, `StateLog`                 |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Tick flow
//!
//! ```text
//! host tick
//!   └─ StateMachine::update(ctx)
//!        └─ current.execute(ctx) ──► Transition::To(kind)?
//!             └─ StateMachine::change_state
//!                  ├─ current.exit(ctx)
//!                  ├─ current = kind.into()
//!                  ├─ current.enter(ctx)
//!                  └─ observer.on_state_changed(..)
//! ```
//!
//! Everything runs synchronously inside the tick that triggered it.

pub mod context;
pub mod cover;
pub mod error;
pub mod flee;
pub mod gather;
pub mod idle;
pub mod machine;
pub mod observer;
pub mod state;


pub use context::AgentContext;
pub use cover::{CoverCandidate, CoverFinder, CoverResult, CoverSearch};
pub use error::{BehaviorError, BehaviorResult};
pub use flee::FleeState;
pub use gather::GatherState;
pub use idle::IdleState;
pub use machine::{StateChange, StateMachine};
pub use observer::{NoopObserver, StateLog, StateObserver};
pub use state::{Behavior, BehaviorState, StateKind, Transition};
