//! Floating-origin engine core for large simulated worlds
//!
//! This crate keeps single-precision scene coordinates usable at planetary
//! distances by periodically re-centering the local frame around the tracked
//! objects. A high-precision world offset records every applied shift, so the
//! authoritative world position of any object is always recoverable.

pub mod config;
pub mod core;

// Re-export commonly used types
pub mod prelude {
    // Entity system types
    pub use crate::core::entity::{
        update_hierarchy_system, Entity, GlobalTransform, Layer, LayerMask, Name, Parent,
        ParticleEmitter, SimulationSpace, Transform, World,
    };

    // Coordinate system types
    pub use crate::core::coordinates::{
        RecenterBounds, RecenterController, RecenterScene, SceneError, TransformSample,
        WorldOffset,
    };

    // Math types
    pub use glam::{DVec3, Mat4, Quat, Vec3};

    // Config types
    pub use crate::config::{ConfigError, RecenterConfig};
}

/// Initialize logging for the engine
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
