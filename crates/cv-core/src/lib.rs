//! `cv-core`: foundational types for the `rust_cover` tactical AI framework.
//!
//! This crate is a dependency of every other `cv-*` crate.  It intentionally
//! has no `cv-*` dependencies and minimal external ones (only `glam` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `RegionId`, `ObstacleId`                   |
//! | [`geometry`]    | `Vec3` re-export, horizontal sampling directions      |
//! | [`layer`]       | `LayerMask`: obstruction layer bitmask                |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`config`]      | `AgentConfig`, `CoverConfig`, `SampleFrame`           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod layer;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AgentConfig, CoverConfig, SampleFrame};
pub use error::{CoreError, CoreResult};
pub use geometry::{Vec3, horizontal, sample_angle_deg, sample_direction, sample_directions};
pub use ids::{AgentId, ObstacleId, RegionId};
pub use layer::LayerMask;
pub use time::{SimClock, SimConfig, Tick};
