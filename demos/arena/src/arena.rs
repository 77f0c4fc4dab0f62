//! The arena: a walled courtyard with a few pillars to hide behind.
//!
//! ```text
//!   z
//!   ▲   ┌──────────────────────────────┐  (±25 floor)
//!   │   │        ███            ███    │
//!   │   │                              │
//!   │   │   ███       ▓▓▓▓▓▓▓    ███   │   ▓ long wall (layer 0)
//!   │   │                              │   █ pillars   (layer 1)
//!   │   │        ███            ███    │
//!   │   └──────────────────────────────┘
//!   └────────────────────────────────────► x
//! ```

use cv_core::LayerMask;
use cv_sim::World;
use cv_spatial::{NavMeshBuilder, ObstacleFieldBuilder, SpatialResult};

pub const WALLS: LayerMask = LayerMask::layer(0);
pub const PILLARS: LayerMask = LayerMask::layer(1);

/// Build the arena world.
pub fn build_world() -> SpatialResult<World> {
    let mut nav = NavMeshBuilder::new();
    nav.add_region(-25.0, -25.0, 25.0, 25.0, 0.0)?;
    // A low stage in the north-east corner.
    nav.add_region(15.0, 15.0, 24.0, 24.0, 0.5)?;

    let mut obstacles = ObstacleFieldBuilder::new();
    obstacles.add_wall(-6.0, -0.5, 6.0, 0.5, 3.0, WALLS)?;
    for (x, z) in [(-10.0, 10.0), (10.0, 10.0), (-10.0, -10.0), (10.0, -10.0), (-18.0, 0.0), (18.0, 0.0)] {
        obstacles.add_wall(x - 1.0, z - 1.0, x + 1.0, z + 1.0, 2.5, PILLARS)?;
    }

    Ok(World::new(nav.build(), obstacles.build()))
}
