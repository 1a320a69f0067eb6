//! Core components for the entity system

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Transform component representing position, rotation, and scale in local space
///
/// The position is single precision and relative to the current floating
/// origin; the authoritative world position is recovered through
/// [`crate::core::coordinates::WorldOffset`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Transform {
    /// Position in local space
    pub position: Vec3,
    /// Rotation in local space as a quaternion
    pub rotation: Quat,
    /// Scale in local space
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Create a new transform with the given position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Create a new transform with the given position and rotation
    pub fn from_position_rotation(position: Vec3, rotation: Quat) -> Self {
        Self {
            position,
            rotation,
            ..Default::default()
        }
    }

    /// Convert this transform to a transformation matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Set the scale of the transform
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Global transform component representing the frame-space transformation matrix
///
/// "Frame space" is the current floating-origin frame: local coordinates
/// composed through the parent chain, before the world offset is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GlobalTransform {
    /// Frame-space transformation matrix
    pub matrix: Mat4,
}

impl Default for GlobalTransform {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }
}

impl GlobalTransform {
    /// Create a new global transform from a matrix
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Get the frame-space position from the transformation matrix
    pub fn position(&self) -> Vec3 {
        self.matrix.w_axis.truncate()
    }
}

/// Parent component establishing a parent-child relationship
///
/// Children follow their parent implicitly; the recentering cycle never
/// translates them directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parent(pub hecs::Entity);

/// Name component for user-friendly entity identification
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Name(pub String);

impl Name {
    /// Create a new name component
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// Layer tag component used for recenter tracking
///
/// Entities without a Layer component are treated as layer 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layer(pub u8);

/// Bitmask selecting which layers participate in boundary testing
///
/// The mask gates only which transforms contribute to the computed
/// translation; bulk application always moves every top-level transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask including every layer
    pub const ALL: Self = Self(u32::MAX);
    /// Mask including no layer
    pub const NONE: Self = Self(0);

    /// Create a mask containing a single layer
    pub fn single(layer: Layer) -> Self {
        Self::NONE.with(layer)
    }

    /// Return this mask with the given layer added
    pub fn with(self, layer: Layer) -> Self {
        match 1u32.checked_shl(u32::from(layer.0)) {
            Some(bit) => Self(self.0 | bit),
            None => self,
        }
    }

    /// Whether the given layer is selected by this mask
    ///
    /// Layers beyond bit 31 never match.
    pub fn contains(self, layer: Layer) -> bool {
        match 1u32.checked_shl(u32::from(layer.0)) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Simulation space of a particle emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationSpace {
    /// Particles follow the owning entity; a shift of the entity moves them implicitly
    Local,
    /// Particles live in the floating-origin frame and must be shifted explicitly
    World,
}

/// Particle emitter component with a bounded set of live particle positions
///
/// Only the data the recentering cycle needs: capacity, simulation space,
/// playback state, and bulk access to the live particle positions.
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    max_particles: usize,
    simulation_space: SimulationSpace,
    playing: bool,
    positions: Vec<Vec3>,
}

impl ParticleEmitter {
    /// Create an emitter with the given capacity, initially playing
    pub fn new(max_particles: usize, simulation_space: SimulationSpace) -> Self {
        Self {
            max_particles,
            simulation_space,
            playing: true,
            positions: Vec::with_capacity(max_particles),
        }
    }

    /// Configured maximum number of live particles
    pub fn max_particles(&self) -> usize {
        self.max_particles
    }

    /// Space the particles simulate in
    pub fn simulation_space(&self) -> SimulationSpace {
        self.simulation_space
    }

    /// Whether playback is currently active
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Resume playback
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Pause playback; live particles are retained
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Spawn a particle at the given position
    ///
    /// Returns false when paused or at capacity.
    pub fn emit(&mut self, position: Vec3) -> bool {
        if !self.playing || self.positions.len() >= self.max_particles {
            return false;
        }
        self.positions.push(position);
        true
    }

    /// Number of live particles
    pub fn live_count(&self) -> usize {
        self.positions.len()
    }

    /// Copy the live particle positions into `out`, returning how many were written
    ///
    /// `out` must be at least `live_count()` long; extra capacity is left untouched.
    pub fn copy_positions_into(&self, out: &mut [Vec3]) -> usize {
        let count = self.positions.len().min(out.len());
        out[..count].copy_from_slice(&self.positions[..count]);
        count
    }

    /// Replace the live particle set, truncated to capacity
    pub fn set_positions(&mut self, positions: &[Vec3]) {
        self.positions.clear();
        let count = positions.len().min(self.max_particles);
        self.positions.extend_from_slice(&positions[..count]);
    }

    /// Drop all live particles
    pub fn clear(&mut self) {
        self.positions.clear();
    }
}
