//! World wrapper providing helper methods for entity management
//!
//! Also implements the scene capability the recenter controller operates
//! against, so the controller never touches hecs directly.

use super::components::{GlobalTransform, Layer, Parent, ParticleEmitter, Transform};
use crate::core::coordinates::{RecenterScene, SceneError, TransformSample};
use glam::Vec3;
use hecs::Entity;
use tracing::{debug, error};

/// Parent chains longer than this are treated as cyclic
const MAX_PARENT_DEPTH: usize = 64;

/// Wrapper around hecs::World providing additional helper methods
pub struct World {
    inner: hecs::World,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            inner: hecs::World::new(),
        }
    }

    /// Spawn a new entity with the given components
    pub fn spawn(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        self.inner.spawn(components)
    }

    /// Get a reference to a component on an entity
    pub fn get<T: hecs::Component>(
        &self,
        entity: Entity,
    ) -> Result<hecs::Ref<T>, hecs::ComponentError> {
        self.inner.get::<&T>(entity)
    }

    /// Query a single entity for a mutable component reference
    pub fn query_one_mut<Q: hecs::Query>(
        &mut self,
        entity: Entity,
    ) -> Result<Q::Item<'_>, hecs::QueryOneError> {
        self.inner.query_one_mut::<Q>(entity)
    }

    /// Insert a component into an entity
    pub fn insert_one(
        &mut self,
        entity: Entity,
        component: impl hecs::Component,
    ) -> Result<(), hecs::NoSuchEntity> {
        self.inner.insert_one(entity, component)
    }

    /// Remove a component from an entity
    pub fn remove_one<T: hecs::Component>(
        &mut self,
        entity: Entity,
    ) -> Result<T, hecs::ComponentError> {
        self.inner.remove_one::<T>(entity)
    }

    /// Query entities with specific components
    pub fn query<Q: hecs::Query>(&self) -> hecs::QueryBorrow<Q> {
        self.inner.query()
    }

    /// Query entities with specific components (mutable)
    pub fn query_mut<Q: hecs::Query>(&mut self) -> hecs::QueryMut<Q> {
        self.inner.query_mut()
    }

    /// Despawn an entity and all its components
    pub fn despawn(&mut self, entity: Entity) -> Result<(), hecs::NoSuchEntity> {
        self.inner.despawn(entity)
    }

    /// Check if an entity exists
    pub fn contains(&self, entity: Entity) -> bool {
        self.inner.contains(entity)
    }

    /// Helper method to spawn an entity that participates in recentering
    ///
    /// Ensures the entity carries both Transform and GlobalTransform.
    pub fn spawn_tracked(&mut self, components: impl hecs::DynamicBundle) -> Entity {
        let entity = self.spawn(components);

        if self.get::<Transform>(entity).is_err() {
            let _ = self.insert_one(entity, Transform::default());
            debug!(entity = ?entity, "Auto-added Transform component");
        }

        if self.get::<GlobalTransform>(entity).is_err() {
            let _ = self.insert_one(entity, GlobalTransform::default());
            debug!(entity = ?entity, "Auto-added GlobalTransform component");
        }

        entity
    }

    /// Position of an entity in the current floating-origin frame
    ///
    /// Composes the local transform through the parent chain. Top-level
    /// entities report their local position directly.
    pub fn frame_position(&self, entity: Entity) -> Vec3 {
        let mut matrix = match self.get::<Transform>(entity) {
            Ok(transform) => transform.to_matrix(),
            Err(_) => return Vec3::ZERO,
        };

        let mut current = entity;
        let mut depth = 0;
        while let Ok(parent) = self.get::<Parent>(current) {
            depth += 1;
            if depth > MAX_PARENT_DEPTH {
                error!(entity = ?entity, "Parent chain exceeds depth limit, assuming cycle");
                break;
            }
            current = parent.0;
            if let Ok(transform) = self.get::<Transform>(current) {
                matrix = transform.to_matrix() * matrix;
            }
        }

        matrix.w_axis.truncate()
    }

    /// Get access to the inner hecs::World for advanced operations
    pub fn inner(&self) -> &hecs::World {
        &self.inner
    }

    /// Get mutable access to the inner hecs::World for advanced operations
    pub fn inner_mut(&mut self) -> &mut hecs::World {
        &mut self.inner
    }
}

impl RecenterScene for World {
    type Id = Entity;

    /// Snapshot every live transform in frame space
    ///
    /// hecs iteration cannot fail, so this implementation always succeeds;
    /// the error arm of the contract exists for fallible host scenes.
    fn sample_transforms(&self) -> Result<Vec<TransformSample<Entity>>, SceneError> {
        let mut samples = Vec::new();

        for (entity, (transform, parent, layer)) in self
            .inner
            .query::<(&Transform, Option<&Parent>, Option<&Layer>)>()
            .iter()
        {
            let top_level = parent.is_none();
            let position = if top_level {
                transform.position
            } else {
                self.frame_position(entity)
            };

            samples.push(TransformSample {
                id: entity,
                position,
                top_level,
                layer: layer.copied().unwrap_or_default(),
            });
        }

        Ok(samples)
    }

    fn translate(&mut self, id: Entity, delta: Vec3) {
        match self.inner.query_one_mut::<&mut Transform>(id) {
            Ok(transform) => transform.position += delta,
            Err(_) => debug!(entity = ?id, "Transform vanished between sampling and translation"),
        }
    }

    fn particle_emitter_mut(&mut self, id: Entity) -> Option<&mut ParticleEmitter> {
        self.inner.query_one_mut::<&mut ParticleEmitter>(id).ok()
    }
}
