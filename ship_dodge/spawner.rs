//! Decides when a new obstacle drops in and where.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::Settings;
use crate::piece::Piece;
use crate::registry::{ObstacleId, ObstacleRegistry};

pub struct Spawner {
    last_spawn_us: u64,
    rng: Pcg32,
}

impl Spawner {
    /// Start the spawn timer at `now_us`, seeding the placement RNG from it.
    pub fn new(now_us: u64) -> Self {
        Self {
            last_spawn_us: now_us,
            rng: Pcg32::seed_from_u64(now_us),
        }
    }

    pub fn last_spawn_us(&self) -> u64 {
        self.last_spawn_us
    }

    /// Whether the level's spawn interval has fully passed.
    pub fn is_due(&self, now_us: u64, level: u16, settings: &Settings) -> bool {
        now_us.saturating_sub(self.last_spawn_us) > settings.spawn_interval_us(level)
    }

    /// Run once per frame. Appends at most one obstacle.
    ///
    /// The timer only restarts when an obstacle actually enters play, so a
    /// crowded field spawns again as soon as room frees up.
    pub fn tick<const N: usize>(
        &mut self,
        now_us: u64,
        level: u16,
        obstacles: &mut ObstacleRegistry<N>,
        settings: &Settings,
    ) -> Option<ObstacleId> {
        if !self.is_due(now_us, level, settings) {
            return None;
        }
        if obstacles.len() >= settings.obstacle_capacity(level) {
            return None;
        }

        let piece = Piece::new(settings.obstacle_dimensions, self.entry_position(settings))
            .with_velocity(settings.first_level_velocity);
        match obstacles.append(piece) {
            Ok(id) => {
                self.last_spawn_us = now_us;
                log::debug!("spawned obstacle at x={} ({} live)", piece.position.x, obstacles.len());
                Some(id)
            }
            Err(_) => {
                log::warn!("obstacle pool exhausted at {} slots, spawn skipped", obstacles.capacity());
                None
            }
        }
    }

    /// Whole-pixel column fully on screen, one obstacle height above the top.
    fn entry_position(&mut self, settings: &Settings) -> Vec2 {
        let dims = settings.obstacle_dimensions;
        let span = libm::floorf(settings.screen_width - dims.x).max(0.0) as u32;
        let x = self.rng.random_range(0..=span) as f32;
        Vec2::new(x, -dims.y)
    }
}
