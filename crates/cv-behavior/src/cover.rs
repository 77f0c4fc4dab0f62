//! Tactical cover search.
//!
//! # Algorithm
//!
//! ```text
//! for i in 0..N:
//!   dir       = rotate(reference, i * 360/N) about +Y
//!   raw       = agent + dir * search_radius
//!   snapped   = nav.sample_position(raw, nav_tolerance)      ─ miss → drop
//!   hidden    = !LOS(threat + eye_height, snapped + knee_height)
//!   score     = |snapped - threat|                            (hidden only)
//! pick the hidden candidate with the strictly greatest score
//!   (scan in index order, so ties keep the lowest index)
//! none hidden → run `fallback_distance` straight away from the threat
//! ```
//!
//! The fallback point is not checked against the navigation surface; near
//! walls the agent may be sent at an unreachable point and rely on the
//! navigation service to get as close as it can.

use cv_core::{SampleFrame, Vec3, geometry::WORLD_FORWARD, horizontal, sample_directions};
use tracing::{debug, warn};

use crate::AgentContext;

// ── Search records ────────────────────────────────────────────────────────────

/// One sampled direction of a cover search.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoverCandidate {
    /// Position in the sampling ring, `0..sample_count`.
    pub index: usize,

    pub angle_deg: f32,

    /// `agent + direction * search_radius`, before validation.
    pub raw_point: Vec3,

    /// The navigable point the raw point snapped to; `None` drops the
    /// candidate.
    pub nav_point: Option<Vec3>,

    /// `true` if navigable and the threat cannot see it.
    pub hidden: bool,

    /// Distance from the navigable point to the threat, hidden candidates
    /// only.
    pub score: Option<f32>,
}

/// Where a cover search sent the agent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CoverResult {
    /// The best hidden candidate.
    Hidden { index: usize, point: Vec3, score: f32 },
    /// No hidden candidate: a point straight away from the threat.
    Fallback { point: Vec3 },
}

impl CoverResult {
    /// The destination that was issued.
    pub fn point(&self) -> Vec3 {
        match *self {
            CoverResult::Hidden { point, .. } | CoverResult::Fallback { point } => point,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, CoverResult::Hidden { .. })
    }
}

/// Full record of one search: every candidate in index order plus the
/// outcome.  Produced, inspected, and dropped within the tick.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverSearch {
    pub candidates: Vec<CoverCandidate>,
    pub result:     CoverResult,
}

impl CoverSearch {
    pub fn hidden_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.hidden).count()
    }
}

// ── CoverFinder ───────────────────────────────────────────────────────────────

/// Working state of the cover search, owned by the Flee state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CoverFinder {
    cover_point: Option<Vec3>,
    has_cover:   bool,
}

impl CoverFinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last hidden point chosen, even if cover has since been lost.
    pub fn cover_point(&self) -> Option<Vec3> {
        self.cover_point
    }

    /// `true` while the agent is heading to (or sitting in) chosen cover.
    pub fn has_cover(&self) -> bool {
        self.has_cover
    }

    /// Drop the cover-held flag.  The last cover point is kept for
    /// diagnostics.
    pub fn release(&mut self) {
        self.has_cover = false;
    }

    /// `true` if the threat has line of sight from its eye to the exposed
    /// part of someone standing at `point`.  Always `false` with no threat.
    pub fn can_threat_see(ctx: &AgentContext<'_>, point: Vec3) -> bool {
        let Some(threat) = ctx.threat else {
            return false;
        };
        let origin = threat + Vec3::Y * ctx.config.eye_height;
        let target = point + Vec3::Y * ctx.config.knee_height;
        ctx.visibility.has_line_of_sight(
            origin,
            target,
            origin.distance(target),
            ctx.config.obstruction_mask,
        )
    }

    /// Run the search and issue the resulting destination.
    ///
    /// Returns `None` without touching navigation when the context has no
    /// threat to hide from.
    pub fn find_cover(&mut self, ctx: &mut AgentContext<'_>) -> Option<CoverSearch> {
        let threat = ctx.threat?;
        let config = ctx.config;
        let cfg = &config.cover;
        let reference = reference_axis(cfg.frame, ctx.forward);

        let mut candidates = Vec::with_capacity(cfg.sample_count);
        let mut best: Option<(usize, Vec3, f32)> = None;

        for (index, angle_deg, dir) in sample_directions(reference, cfg.sample_count) {
            let raw_point = ctx.position + dir * cfg.search_radius;
            let nav_point = ctx.nav.sample_position(raw_point, cfg.nav_tolerance);

            let score = nav_point
                .filter(|&p| !Self::can_threat_see(ctx, p))
                .map(|p| p.distance(threat));

            if let (Some(point), Some(s)) = (nav_point, score) {
                if best.is_none_or(|(_, _, top)| s > top) {
                    best = Some((index, point, s));
                }
            }

            candidates.push(CoverCandidate {
                index,
                angle_deg,
                raw_point,
                nav_point,
                hidden: score.is_some(),
                score,
            });
        }

        let result = match best {
            Some((index, point, score)) => {
                self.has_cover = true;
                self.cover_point = Some(point);
                CoverResult::Hidden { index, point, score }
            }
            None => {
                self.has_cover = false;
                let away = (ctx.position - threat).normalize_or_zero();
                let point = ctx.position + away * cfg.fallback_distance;
                CoverResult::Fallback { point }
            }
        };
        ctx.nav.set_destination(result.point());

        let search = CoverSearch { candidates, result };
        match search.result {
            CoverResult::Hidden { index, point, score } => debug!(
                tick = ctx.tick.0,
                hidden = search.hidden_count(),
                index,
                score,
                x = point.x,
                z = point.z,
                "cover found"
            ),
            CoverResult::Fallback { point } => warn!(
                tick = ctx.tick.0,
                x = point.x,
                z = point.z,
                "no cover, running straight away from threat"
            ),
        }
        Some(search)
    }
}

/// The axis sample 0 points along.
fn reference_axis(frame: SampleFrame, forward: Vec3) -> Vec3 {
    match frame {
        SampleFrame::World => WORLD_FORWARD,
        SampleFrame::Heading => horizontal(forward).try_normalize().unwrap_or(WORLD_FORWARD),
    }
}
