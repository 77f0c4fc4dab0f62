//! `cv-spatial`: the navigation and visibility collaborators.
//!
//! The behavior layer only ever talks to the two traits in [`service`]; the
//! concrete types here are reference implementations good enough to drive
//! the simulation and the integration tests.  Embedding applications plug
//! their own navmesh / physics backends in behind the same traits.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`service`]   | `NavigationService`, `VisibilityService` traits           |
//! | [`navmesh`]   | `NavMesh` (walkable rectangles + R-tree), `NavMeshBuilder` |
//! | [`obstacles`] | `ObstacleField` (layered boxes + R-tree), builder         |
//! | [`error`]     | `SpatialError`, `SpatialResult<T>`                        |

pub mod error;
pub mod navmesh;
pub mod obstacles;
pub mod service;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use navmesh::{NavMesh, NavMeshBuilder, WalkableRegion};
pub use obstacles::{Obstacle, ObstacleField, ObstacleFieldBuilder};
pub use service::{NavigationService, VisibilityService};
