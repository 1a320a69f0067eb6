//! Entity-Component System (ECS) functionality
//!
//! This module provides the entity layer the recenter controller operates on:
//! transform components, parent links, layer tags, particle emitters, and
//! hierarchy management.

pub mod components;
pub mod hierarchy;
pub mod world;

// Re-export commonly used types
pub use components::{
    GlobalTransform, Layer, LayerMask, Name, Parent, ParticleEmitter, SimulationSpace, Transform,
};
pub use hierarchy::update_hierarchy_system;
pub use world::World;

// Re-export hecs types that users will need
pub use hecs::Entity;
