//! Obstruction layer bitmask.
//!
//! Every obstacle lives on one or more of 32 layers.  Visibility queries
//! carry a mask and only obstacles whose layers intersect it can block a
//! sightline.

use std::fmt;

/// A 32-bit set of obstruction layers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// No layers: a query with this mask is never obstructed.
    pub const NONE: LayerMask = LayerMask(0);
    /// Every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing only layer `n` (`0..32`).
    ///
    /// # Panics
    /// Panics if `n >= 32`.
    #[inline]
    pub const fn layer(n: u32) -> LayerMask {
        assert!(n < 32, "layer index out of range");
        LayerMask(1 << n)
    }

    /// `true` if the two masks share at least one layer.
    #[inline]
    pub const fn intersects(self, other: LayerMask) -> bool {
        self.0 & other.0 != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn union(self, other: LayerMask) -> LayerMask {
        LayerMask(self.0 | other.0)
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        LayerMask::ALL
    }
}

impl std::ops::BitOr for LayerMask {
    type Output = LayerMask;
    #[inline]
    fn bitor(self, rhs: LayerMask) -> LayerMask {
        self.union(rhs)
    }
}

impl fmt::Display for LayerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}
