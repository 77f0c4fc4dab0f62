//! `cv-sim`: tick loop orchestrator for the rust_cover framework.
//!
//! # Tick loop
//!
//! ```text
//! first tick only:
//!   ⓪ Init    : every controller enters its start state (Idle unless the
//!               builder said otherwise).
//! for tick in 0..config.total_ticks:
//!   ① Threat  : ThreatTrack advances along its waypoints.
//!   ② Behavior: each controller builds an AgentContext and runs
//!               StateMachine::update, in ascending AgentId order.
//!   ③ Movement: each Mover steps toward its destination.
//!   ④ Hooks   : on_tick_end with per-agent Diagnostics, plus on_snapshot
//!               every `snapshot_interval_ticks`.
//! ```
//!
//! Agents never see each other: each one reads only the shared world and
//! the threat position.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use cv_core::{AgentConfig, SimConfig, Vec3};
//! use cv_sim::{NoopObserver, SimBuilder, ThreatTrack, World};
//!
//! let mut b = SimBuilder::new(SimConfig::default())
//!     .world(World::new(navmesh, obstacles))
//!     .threat(ThreatTrack::stationary(Vec3::new(0.0, 0.0, -6.0)));
//! b.add_agent(AgentConfig::default(), Vec3::ZERO);
//! let mut sim = b.build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod sim;
pub mod threat;
pub mod world;


pub use builder::SimBuilder;
pub use controller::{Controller, Diagnostics};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use threat::ThreatTrack;
pub use world::World;
