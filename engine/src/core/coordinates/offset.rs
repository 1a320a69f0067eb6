//! World offset store for the floating-origin coordinate system
//!
//! Holds the cumulative translation applied by the recenter controller and
//! provides the conversions between local (frame) and world coordinates.

use glam::{DVec3, Vec3};
use tracing::debug;

/// Debug history is drained down once it reaches this many entries
const HISTORY_LIMIT: usize = 100;

/// Record of one applied origin shift
#[derive(Debug, Clone)]
pub struct ShiftRecord {
    /// When the shift was applied
    pub timestamp: std::time::Instant,
    /// The translation that was applied
    pub translation: DVec3,
    /// Total offset immediately after the shift
    pub total_after: DVec3,
}

/// Cumulative world-to-local offset, in 64-bit precision
///
/// Invariant: `total()` equals the sum of every translation applied since the
/// last reset, and for every tracked object `world == local - total()`.
///
/// Single writer, multiple readers: only the recenter controller mutates this
/// value, once per executed cycle; all other code reads it through the
/// conversion methods. Readers must not observe the offset in the middle of a
/// cycle; on a multi-threaded host that requires a cycle-scoped lock.
#[derive(Debug, Clone, Default)]
pub struct WorldOffset {
    total: DVec3,
    shifts_applied: u64,
    history: Vec<ShiftRecord>,
}

impl WorldOffset {
    /// Create a zeroed offset store
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cumulative offset
    pub fn total(&self) -> DVec3 {
        self.total
    }

    /// Set the offset back to zero
    ///
    /// Any world/local conversion in flight becomes invalid instantly; this
    /// is called on controller activation and deactivation, not mid-cycle.
    pub fn reset(&mut self) {
        if self.total != DVec3::ZERO {
            debug!(total = ?self.total, "Resetting world offset");
        }
        self.total = DVec3::ZERO;
    }

    /// Accumulate a translation into the offset
    pub fn apply_translation(&mut self, delta: DVec3) {
        self.total += delta;
        self.shifts_applied += 1;

        self.history.push(ShiftRecord {
            timestamp: std::time::Instant::now(),
            translation: delta,
            total_after: self.total,
        });
        // Limit history size to prevent memory growth
        if self.history.len() > HISTORY_LIMIT {
            self.history.drain(..HISTORY_LIMIT / 2);
        }
    }

    /// Convert a local-frame position to its authoritative world position
    pub fn unshift(&self, local: Vec3) -> DVec3 {
        local.as_dvec3() - self.total
    }

    /// Convert a world position into the current local frame
    ///
    /// The result is cast down to single precision; callers rely on the
    /// recenter bound keeping local coordinates in a safe range.
    pub fn shift(&self, world: DVec3) -> Vec3 {
        (world + self.total).as_vec3()
    }

    /// Number of shifts applied since construction (resets do not clear this)
    pub fn shift_count(&self) -> u64 {
        self.shifts_applied
    }

    /// Recent shifts, oldest first, for debugging
    pub fn history(&self) -> &[ShiftRecord] {
        &self.history
    }

    /// Clear the debug history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
