//! Hierarchy system for updating global transforms based on parent relationships

use super::components::{GlobalTransform, Parent, Transform};
use super::world::World;
use glam::Mat4;
use hecs::Entity;
use std::collections::HashSet;
use tracing::{error, trace};

/// Update the hierarchy, calculating global transforms from local transforms
/// and parent relationships using breadth-first traversal.
///
/// Cyclic parent links are logged and skipped rather than followed.
pub fn update_hierarchy_system(world: &mut World) {
    let inner = world.inner_mut();

    let mut queue = Vec::with_capacity(1024);
    let mut visited = HashSet::with_capacity(1024);

    // Root entities: Transform but no Parent
    let mut root_updates = Vec::new();
    for (entity, (transform,)) in inner.query::<(&Transform,)>().without::<&Parent>().iter() {
        root_updates.push((entity, transform.to_matrix()));
        visited.insert(entity);
    }

    for (entity, matrix) in &root_updates {
        write_global(inner, *entity, *matrix);
    }
    queue.extend(root_updates);
    trace!(root_count = queue.len(), "Starting hierarchy update");

    while !queue.is_empty() {
        let mut child_updates = Vec::new();

        for (parent_entity, parent_matrix) in queue.drain(..) {
            for (child, parent) in inner.query::<&Parent>().iter() {
                if parent.0 != parent_entity {
                    continue;
                }
                if !visited.insert(child) {
                    error!(
                        parent = ?parent_entity,
                        child = ?child,
                        "Cyclic parent-child relationship detected in hierarchy"
                    );
                    continue;
                }

                let child_matrix = match inner.get::<&Transform>(child) {
                    Ok(transform) => parent_matrix * transform.to_matrix(),
                    Err(_) => parent_matrix,
                };
                child_updates.push((child, child_matrix));
            }
        }

        for (child, matrix) in &child_updates {
            write_global(inner, *child, *matrix);
        }
        queue.extend(child_updates);
    }

    trace!(processed_count = visited.len(), "Hierarchy update completed");
}

fn write_global(inner: &mut hecs::World, entity: Entity, matrix: Mat4) {
    match inner.query_one_mut::<&mut GlobalTransform>(entity) {
        Ok(global) => global.matrix = matrix,
        Err(_) => {
            let _ = inner.insert_one(entity, GlobalTransform::from_matrix(matrix));
        }
    }
}
