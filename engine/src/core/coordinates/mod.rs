//! Floating-origin coordinate system
//!
//! Keeps single-precision local coordinates small and precise by periodically
//! re-centering the local frame around the tracked objects:
//! - f64 world coordinates remain the authoritative, never-shifting reference
//! - f32 local coordinates are what the scene and renderer work with
//!
//! The [`RecenterController`] watches the scene through the [`RecenterScene`]
//! capability and accumulates every applied shift into the [`WorldOffset`],
//! so `world == local - offset` holds for every tracked object at all times.

pub mod bounds;
pub mod controller;
pub mod offset;
pub mod scene;


pub use bounds::{is_negligible, RecenterBounds, SHIFT_EPSILON};
pub use controller::RecenterController;
pub use offset::{ShiftRecord, WorldOffset};
pub use scene::{RecenterScene, SceneError, TransformSample};
