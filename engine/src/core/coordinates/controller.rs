//! Recenter controller: periodic origin shifting for tracked scenes
//!
//! Once every configured number of ticks the controller samples the scene,
//! computes a corrective translation from the transforms outside the bound,
//! applies it to every top-level transform and to world-space particle
//! buffers, and accumulates it into the world offset. The whole cycle runs
//! synchronously inside a single tick.

use super::bounds::is_negligible;
use super::offset::WorldOffset;
use super::scene::{RecenterScene, SceneError};
use crate::config::RecenterConfig;
use crate::core::entity::{ParticleEmitter, SimulationSpace};
use glam::Vec3;
use tracing::{debug, info, trace, warn};

/// Reusable scratch buffer for particle position copies
///
/// Grows to the largest emitter capacity ever encountered and never shrinks,
/// so steady-state cycles allocate nothing.
#[derive(Debug, Default)]
struct ParticleScratch {
    buffer: Vec<Vec3>,
}

impl ParticleScratch {
    /// Borrow a slice of at least `capacity` entries, growing if needed
    fn take(&mut self, capacity: usize) -> &mut [Vec3] {
        if self.buffer.len() < capacity {
            self.buffer.resize(capacity, Vec3::ZERO);
        }
        &mut self.buffer[..capacity]
    }

    fn capacity(&self) -> usize {
        self.buffer.len()
    }
}

/// Periodic controller keeping tracked objects near the local origin
///
/// Owns the [`WorldOffset`] it is the single writer of; readers access it
/// through [`RecenterController::offset`] between ticks.
#[derive(Debug)]
pub struct RecenterController {
    config: RecenterConfig,
    offset: WorldOffset,
    enabled: bool,
    ticks_until_cycle: u32,
    scratch: ParticleScratch,
}

impl RecenterController {
    /// Create an enabled controller with a zeroed offset
    pub fn new(config: RecenterConfig) -> Self {
        let ticks_until_cycle = config.interval.max(1);
        Self {
            config,
            offset: WorldOffset::new(),
            enabled: true,
            ticks_until_cycle,
            scratch: ParticleScratch::default(),
        }
    }

    /// The offset store this controller writes
    pub fn offset(&self) -> &WorldOffset {
        &self.offset
    }

    /// The static configuration this controller runs with
    pub fn config(&self) -> &RecenterConfig {
        &self.config
    }

    /// Whether the controller currently runs cycles
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the controller
    ///
    /// Both transitions reset the offset and restart the interval counter.
    /// Conversions computed against the old offset become invalid instantly;
    /// there is no graceful drain.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.offset.reset();
        self.ticks_until_cycle = self.config.interval.max(1);
        debug!(enabled, "Recenter controller toggled, offset reset");
    }

    /// Advance one tick; runs a full shift cycle when the interval elapses
    ///
    /// Returns `Ok(Some(translation))` when a shift was applied, `Ok(None)`
    /// when idle or when no transform was out of bounds, and `Err` when the
    /// host scene failed to enumerate; in that case nothing was mutated and
    /// the next scheduled interval retries.
    pub fn tick<S: RecenterScene>(&mut self, scene: &mut S) -> Result<Option<Vec3>, SceneError> {
        if !self.enabled {
            return Ok(None);
        }

        self.ticks_until_cycle = self.ticks_until_cycle.saturating_sub(1);
        if self.ticks_until_cycle > 0 {
            return Ok(None);
        }
        self.ticks_until_cycle = self.config.interval.max(1);

        self.run_cycle(scene)
    }

    /// Execute one shift cycle: sample, compute, apply, commit
    fn run_cycle<S: RecenterScene>(&mut self, scene: &mut S) -> Result<Option<Vec3>, SceneError> {
        trace!("Recenter cycle starting");

        let samples = match scene.sample_transforms() {
            Ok(samples) => samples,
            Err(error) => {
                warn!(%error, "Scene enumeration failed, cycle aborted without mutation");
                return Err(error);
            }
        };

        let mask = self.config.layer_mask;
        let translation = self.config.bounds.correction(
            samples
                .iter()
                .filter(|sample| mask.contains(sample.layer))
                .map(|sample| sample.position),
        );

        if is_negligible(translation) {
            trace!("No transform out of bounds, nothing to shift");
            return Ok(None);
        }

        // The layer mask gates only the computation above: the whole visible
        // world moves together, so every top-level transform is translated.
        let mut translated = 0usize;
        for sample in samples.iter().filter(|sample| sample.top_level) {
            scene.translate(sample.id, translation);
            if let Some(emitter) = scene.particle_emitter_mut(sample.id) {
                Self::shift_particles(&mut self.scratch, emitter, translation);
            }
            translated += 1;
        }

        // Commit last: an aborted cycle must leave the store untouched
        self.offset.apply_translation(translation.as_dvec3());

        info!(
            translation = ?translation,
            total_offset = ?self.offset.total(),
            translated,
            "Origin shift applied"
        );
        Ok(Some(translation))
    }

    /// Propagate the translation into a world-space particle buffer
    ///
    /// Playback is paused around the copy so the emitter cannot step its
    /// simulation against half-updated positions.
    fn shift_particles(
        scratch: &mut ParticleScratch,
        emitter: &mut ParticleEmitter,
        translation: Vec3,
    ) {
        if emitter.max_particles() == 0
            || emitter.simulation_space() != SimulationSpace::World
        {
            return;
        }

        let was_playing = emitter.is_playing();
        if was_playing {
            emitter.pause();
        }

        let buffer = scratch.take(emitter.max_particles());
        let live = emitter.copy_positions_into(buffer);
        for position in &mut buffer[..live] {
            *position += translation;
        }
        emitter.set_positions(&buffer[..live]);

        if was_playing {
            emitter.play();
        }
    }

    #[cfg(test)]
    pub(crate) fn scratch_capacity(&self) -> usize {
        self.scratch.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_grows_and_never_shrinks() {
        let mut scratch = ParticleScratch::default();

        assert_eq!(scratch.take(4).len(), 4);
        assert_eq!(scratch.capacity(), 4);

        assert_eq!(scratch.take(16).len(), 16);
        assert_eq!(scratch.capacity(), 16);

        // A smaller request reuses the larger buffer
        assert_eq!(scratch.take(8).len(), 8);
        assert_eq!(scratch.capacity(), 16);
    }

    #[test]
    fn test_shift_particles_translates_world_space() {
        let mut scratch = ParticleScratch::default();
        let mut emitter = ParticleEmitter::new(4, SimulationSpace::World);
        emitter.emit(Vec3::new(1.0, 2.0, 3.0));
        emitter.emit(Vec3::new(-1.0, 0.0, 0.0));

        RecenterController::shift_particles(&mut scratch, &mut emitter, Vec3::new(-10.0, 0.0, 0.0));

        let mut out = [Vec3::ZERO; 4];
        let live = emitter.copy_positions_into(&mut out);
        assert_eq!(live, 2);
        assert_eq!(out[0], Vec3::new(-9.0, 2.0, 3.0));
        assert_eq!(out[1], Vec3::new(-11.0, 0.0, 0.0));
        assert!(emitter.is_playing());
    }

    #[test]
    fn test_shift_particles_skips_local_space() {
        let mut scratch = ParticleScratch::default();
        let mut emitter = ParticleEmitter::new(4, SimulationSpace::Local);
        emitter.emit(Vec3::ONE);

        RecenterController::shift_particles(&mut scratch, &mut emitter, Vec3::new(-10.0, 0.0, 0.0));

        let mut out = [Vec3::ZERO; 4];
        emitter.copy_positions_into(&mut out);
        assert_eq!(out[0], Vec3::ONE);
        assert_eq!(scratch.capacity(), 0);
    }

    #[test]
    fn test_shift_particles_skips_zero_capacity() {
        let mut scratch = ParticleScratch::default();
        let mut emitter = ParticleEmitter::new(0, SimulationSpace::World);

        RecenterController::shift_particles(&mut scratch, &mut emitter, Vec3::X);
        assert_eq!(scratch.capacity(), 0);
    }

    #[test]
    fn test_shift_particles_keeps_paused_emitter_paused() {
        let mut scratch = ParticleScratch::default();
        let mut emitter = ParticleEmitter::new(2, SimulationSpace::World);
        emitter.emit(Vec3::ZERO);
        emitter.pause();

        RecenterController::shift_particles(&mut scratch, &mut emitter, Vec3::X);
        assert!(!emitter.is_playing());

        let mut out = [Vec3::ZERO; 2];
        emitter.copy_positions_into(&mut out);
        assert_eq!(out[0], Vec3::X);
    }
}
