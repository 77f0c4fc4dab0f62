//! Agent and cover-search configuration.
//!
//! Every tunable the behavior layer reads is a named field here.  Call
//! [`AgentConfig::validate`] once at construction; the behavior code assumes
//! a validated config and does no further range checks.

use crate::{CoreError, CoreResult, LayerMask};

// ── SampleFrame ───────────────────────────────────────────────────────────────

/// Which forward axis the cover search rotates to produce sample directions.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SampleFrame {
    /// Rotate world +Z.  Sample 0 always points north regardless of heading.
    #[default]
    World,
    /// Rotate the agent's horizontal heading.  Falls back to world +Z when
    /// the heading has no horizontal component.
    Heading,
}

// ── CoverConfig ───────────────────────────────────────────────────────────────

/// Parameters of the ring-sampling cover search.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CoverConfig {
    /// Number of directions sampled around the agent.  Default: 12.
    pub sample_count: usize,

    /// Distance from the agent to each raw sample point.  Default: 10.
    pub search_radius: f32,

    /// Maximum snap distance when validating a sample against the
    /// navigation surface.  Default: 2.
    pub nav_tolerance: f32,

    /// How far the directional escape runs when no cover exists.  Default: 5.
    pub fallback_distance: f32,

    pub frame: SampleFrame,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            sample_count:      12,
            search_radius:     10.0,
            nav_tolerance:     2.0,
            fallback_distance: 5.0,
            frame:             SampleFrame::World,
        }
    }
}

impl CoverConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.sample_count == 0 {
            return Err(CoreError::InvalidConfig {
                field:  "cover.sample_count",
                reason: "must be at least 1",
            });
        }
        positive("cover.search_radius", self.search_radius)?;
        positive("cover.nav_tolerance", self.nav_tolerance)?;
        positive("cover.fallback_distance", self.fallback_distance)?;
        Ok(())
    }
}

// ── AgentConfig ───────────────────────────────────────────────────────────────

/// Per-agent behavior configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// A threat strictly closer than this is detected.  Default: 10.
    pub detection_radius: f32,

    /// Fleeing ends once the threat is farther than this.  Default: 15.
    pub flee_exit_distance: f32,

    /// Layers that block the threat's sightline.  Default: all layers.
    pub obstruction_mask: LayerMask,

    /// Movement speed outside of Flee.  Default: 3.5.
    pub base_speed: f32,

    /// Movement speed while fleeing.  Default: 6.
    pub panic_speed: f32,

    /// Height of the threat's eye above its position.  Default: 1.5.
    pub eye_height: f32,

    /// Height of the exposed point above a candidate position.  Default: 0.5.
    pub knee_height: f32,

    /// Remaining distance below which a held cover point counts as reached.
    /// Default: 0.5.
    pub arrival_threshold: f32,

    /// Flee retries the cover search on ticks that are a multiple of this
    /// while cover is not held.  Default: 30.
    pub reevaluate_interval_ticks: u64,

    pub cover: CoverConfig,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            detection_radius:          10.0,
            flee_exit_distance:        15.0,
            obstruction_mask:          LayerMask::ALL,
            base_speed:                3.5,
            panic_speed:               6.0,
            eye_height:                1.5,
            knee_height:               0.5,
            arrival_threshold:         0.5,
            reevaluate_interval_ticks: 30,
            cover:                     CoverConfig::default(),
        }
    }
}

impl AgentConfig {
    /// Check every field; returns the first violation found.
    pub fn validate(&self) -> CoreResult<()> {
        positive("detection_radius", self.detection_radius)?;
        positive("flee_exit_distance", self.flee_exit_distance)?;
        positive("base_speed", self.base_speed)?;
        positive("panic_speed", self.panic_speed)?;
        non_negative("eye_height", self.eye_height)?;
        non_negative("knee_height", self.knee_height)?;
        positive("arrival_threshold", self.arrival_threshold)?;
        if self.reevaluate_interval_ticks == 0 {
            return Err(CoreError::InvalidConfig {
                field:  "reevaluate_interval_ticks",
                reason: "must be at least 1",
            });
        }
        self.cover.validate()
    }
}

fn positive(field: &'static str, value: f32) -> CoreResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig { field, reason: "must be finite and positive" })
    }
}

fn non_negative(field: &'static str, value: f32) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidConfig { field, reason: "must be finite and non-negative" })
    }
}
