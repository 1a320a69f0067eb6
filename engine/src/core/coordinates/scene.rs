//! Scene capability the recenter controller operates against
//!
//! The controller never touches a concrete scene type; any host that can
//! enumerate transform-like objects with a position, a parent link, a layer
//! tag, and an optional particle emitter can be recentered.

use crate::core::entity::{Layer, ParticleEmitter};
use glam::Vec3;

/// Per-cycle snapshot of one tracked transform
#[derive(Debug, Clone, Copy)]
pub struct TransformSample<Id> {
    /// Host identifier for the transform
    pub id: Id,
    /// Position in the current floating-origin frame
    pub position: Vec3,
    /// Whether the transform has no parent and is translated directly
    pub top_level: bool,
    /// Layer tag gating participation in the boundary test
    pub layer: Layer,
}

/// Errors raised by a host scene during a recenter cycle
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// The host failed to enumerate its transforms; the cycle is aborted
    #[error("scene enumeration failed: {0}")]
    Enumeration(String),
}

/// A scene the recenter controller can sample and translate
///
/// `sample_transforms` is called once per cycle, after all other per-tick
/// state updates have settled; `translate` and `particle_emitter_mut` are
/// only called with ids from that same snapshot, within the same cycle.
pub trait RecenterScene {
    /// Host-side transform identifier
    type Id: Copy;

    /// Snapshot every live transform
    ///
    /// An error aborts the cycle before any mutation occurs.
    fn sample_transforms(&self) -> Result<Vec<TransformSample<Self::Id>>, SceneError>;

    /// Add `delta` to a top-level transform's local position
    fn translate(&mut self, id: Self::Id, delta: Vec3);

    /// Mutable access to the particle emitter attached to a transform, if any
    fn particle_emitter_mut(&mut self, id: Self::Id) -> Option<&mut ParticleEmitter>;
}
