//! `cv-mobility`: agent movement state and navigation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`mover`]     | `Mover`: per-agent position, heading, destination, speed        |
//! | [`navigator`] | `MeshNavigator`: `NavigationService` over `NavMesh` + `Mover`   |
//!
//! # Movement model (straight-line steering)
//!
//! 1. The behavior layer issues a destination through
//!    [`NavigationService::set_destination`][cv_spatial::NavigationService].
//! 2. Each tick the host calls [`Mover::advance`] with the tick duration; the
//!    agent moves `speed * dt` along the straight line to its destination
//!    and stops exactly on it.
//! 3. `remaining_distance` reports the straight-line distance left.
//!
//! Path planning around obstacles is the embedding application's business;
//! swap in a real navigation backend behind the same trait when needed.

pub mod mover;
pub mod navigator;


pub use mover::Mover;
pub use navigator::MeshNavigator;
