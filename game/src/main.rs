//! Headless demo: a probe wandering far from the origin while the recenter
//! controller keeps its local coordinates small.
//!
//! Run with `RUST_LOG=debug` to see individual shift cycles.

use tracing::{info, warn};
use worldshift_engine::prelude::*;

const TICKS: u32 = 600;
const PROBE_VELOCITY: Vec3 = Vec3::new(2.5, 0.0, 1.25);

fn main() {
    worldshift_engine::init_logging();
    info!("Starting worldshift demo");

    let config = RecenterConfig {
        bounds: RecenterBounds::new(200.0, 200.0),
        layer_mask: LayerMask::ALL,
        interval: 10,
    };
    config.validate().expect("demo config is well-formed");

    let mut world = World::new();
    let mut controller = RecenterController::new(config);

    // A probe streaking away from the origin, trailing world-space exhaust
    let mut exhaust = ParticleEmitter::new(32, SimulationSpace::World);
    let probe = world.spawn_tracked((Transform::default(), Name::new("probe"), Layer(0)));
    for i in 0..8 {
        exhaust.emit(Vec3::new(-(i as f32) * 0.5, 0.2, 0.0));
    }
    world
        .insert_one(probe, exhaust)
        .expect("probe was just spawned");

    // A stationary beacon and an antenna riding on the probe
    let beacon = world.spawn_tracked((
        Transform::from_position(Vec3::new(5.0, 0.0, 5.0)),
        Name::new("beacon"),
    ));
    let antenna = world.spawn((
        Transform::from_position(Vec3::new(0.0, 3.0, 0.0)),
        Name::new("antenna"),
        Parent(probe),
    ));

    for tick in 0..TICKS {
        if let Ok(transform) = world.query_one_mut::<&mut Transform>(probe) {
            transform.position += PROBE_VELOCITY;
        }

        match controller.tick(&mut world) {
            Ok(Some(shift)) => info!(tick, shift = ?shift, "World recentered"),
            Ok(None) => {}
            Err(error) => warn!(tick, %error, "Shift cycle aborted"),
        }

        update_hierarchy_system(&mut world);
    }

    let offset = controller.offset();
    let probe_local = world.get::<Transform>(probe).expect("probe exists").position;
    let beacon_local = world
        .get::<Transform>(beacon)
        .expect("beacon exists")
        .position;
    let antenna_local = world
        .get::<Transform>(antenna)
        .expect("antenna exists")
        .position;

    info!(
        shifts = offset.shift_count(),
        total_offset = ?offset.total(),
        "Demo finished"
    );
    info!(
        local = ?probe_local,
        world = ?offset.unshift(probe_local),
        "Probe kept near the origin while its world position kept growing"
    );
    info!(
        local = ?beacon_local,
        world = ?offset.unshift(beacon_local),
        "Beacon drifted locally but never moved in world space"
    );
    info!(
        local = ?antenna_local,
        "Antenna local position is parent-relative and was never touched"
    );
}
