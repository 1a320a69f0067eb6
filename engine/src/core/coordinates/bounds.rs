//! Recenter bound and corrective translation computation
//!
//! The bound is a static axis-aligned rectangle in the local X/Z plane,
//! centered on the origin. Objects drifting past it produce a single
//! corrective translation that pulls the worst offender on each edge back
//! toward the bound.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Translations whose components are all below this count as "no shift"
pub const SHIFT_EPSILON: f32 = 1e-5;

/// Axis-aligned recenter bound in the local X/Z plane, centered at the origin
///
/// The Y axis is never tested or shifted; the tracked domain is planar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecenterBounds {
    /// Extent along X
    pub width: f32,
    /// Extent along Z
    pub depth: f32,
}

impl RecenterBounds {
    /// Create a bound with the given width (X) and depth (Z)
    pub fn new(width: f32, depth: f32) -> Self {
        Self { width, depth }
    }

    /// Strict containment test in X/Z
    ///
    /// A position exactly on an edge counts as out of bounds.
    pub fn contains(&self, position: Vec3) -> bool {
        let half_width = self.width * 0.5;
        let half_depth = self.depth * 0.5;
        -half_width < position.x
            && position.x < half_width
            && -half_depth < position.z
            && position.z < half_depth
    }

    /// Compute the corrective translation for the given sampled positions
    ///
    /// Returns the zero vector when every position is in bounds. When objects
    /// exceed the bound on both sides of one axis at once, no single
    /// translation can resolve both; the summed-excess correction splits the
    /// difference and the condition is logged.
    pub fn correction(&self, positions: impl IntoIterator<Item = Vec3>) -> Vec3 {
        let mut x = AxisExcess::default();
        let mut z = AxisExcess::default();

        for position in positions {
            if self.contains(position) {
                continue;
            }
            x.accumulate(position.x, self.width * 0.5);
            z.accumulate(position.z, self.depth * 0.5);
        }

        Vec3::new(x.correction("x"), 0.0, z.correction("z"))
    }
}

/// Running protrusion extrema past the two edges of one axis
///
/// Seeded at zero so in-bounds coordinates (negative positive-edge excess,
/// positive negative-edge excess) never contribute.
#[derive(Debug, Default, Clone, Copy)]
struct AxisExcess {
    max_positive: f32,
    min_negative: f32,
}

impl AxisExcess {
    fn accumulate(&mut self, coordinate: f32, half_extent: f32) {
        self.max_positive = self.max_positive.max(coordinate - half_extent);
        self.min_negative = self.min_negative.min(coordinate + half_extent);
    }

    fn correction(&self, axis: &str) -> f32 {
        if self.max_positive > 0.0 && self.min_negative < 0.0 {
            warn!(
                axis,
                positive_excess = self.max_positive,
                negative_excess = self.min_negative,
                "Bound exceeded on both sides of one axis, applying compromise correction"
            );
        }
        -(self.max_positive + self.min_negative)
    }
}

/// Whether a translation is close enough to zero to skip the shift entirely
pub fn is_negligible(translation: Vec3) -> bool {
    translation.x.abs() < SHIFT_EPSILON
        && translation.y.abs() < SHIFT_EPSILON
        && translation.z.abs() < SHIFT_EPSILON
}
