//! Tuning constants for the whole game, gathered in one `Copy` struct.

use glam::Vec2;

use crate::hal::{Colour, Font};

/// Every tunable value the simulation reads.
///
/// Durations are in microseconds to match [`Clock`](crate::hal::Clock);
/// speeds are pixels per second and accelerations pixels per second squared.
#[derive(Copy, Clone, Debug)]
pub struct Settings {
    // Display bounds
    pub screen_width: f32,
    pub screen_height: f32,

    // Ship
    pub ship_dimensions: Vec2,
    pub ship_max_velocity: Vec2,
    pub thrust_accel: f32,
    pub drag_decel: f32,

    // Obstacles
    pub obstacle_dimensions: Vec2,
    pub first_level_velocity: Vec2,
    pub first_level_obstacles: usize,
    pub max_obstacles: usize,
    pub obstacle_accel_per_level: f32,
    pub obstacle_ceiling_per_level: f32,

    // Spawn timing
    pub spawn_interval_base_us: u64,
    pub spawn_interval_step_us: u64,
    pub spawn_interval_floor_us: u64,

    // Progression
    pub level_up_interval_us: u64,
    pub level_up_banner_us: u64,
    pub score_per_obstacle: u32,

    // Screens
    pub game_over_hold_us: u64,
    pub start_debounce_us: u64,
    pub hud_height: f32,

    // Presentation
    pub font: Font,
    pub menu_colour: Colour,
    pub background_colour: Colour,
    pub ship_colour: Colour,
    pub obstacle_colour: Colour,
    pub hud_colour: Colour,
    pub banner_colour: Colour,
    pub game_over_colour: Colour,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 135.0,
            screen_height: 240.0,
            ship_dimensions: Vec2::new(20.0, 40.0),
            ship_max_velocity: Vec2::new(100.0, 0.0),
            thrust_accel: 200.0,
            drag_decel: 100.0,
            obstacle_dimensions: Vec2::new(6.0, 20.0),
            first_level_velocity: Vec2::new(0.0, 5.0),
            first_level_obstacles: 5,
            max_obstacles: 20,
            obstacle_accel_per_level: 10.0,
            obstacle_ceiling_per_level: 5.0,
            spawn_interval_base_us: 4_000_000,
            spawn_interval_step_us: 10_000,
            spawn_interval_floor_us: 500_000,
            level_up_interval_us: 30_000_000,
            level_up_banner_us: 1_000_000,
            score_per_obstacle: 100,
            game_over_hold_us: 2_000_000,
            start_debounce_us: 500_000,
            hud_height: 16.0,
            font: Font::Regular,
            menu_colour: Colour::rgb(75, 125, 200),
            background_colour: Colour::BLACK,
            ship_colour: Colour::rgb(255, 0, 0),
            obstacle_colour: Colour::rgb(0, 255, 0),
            hud_colour: Colour::rgb(30, 30, 100),
            banner_colour: Colour::rgb(255, 0, 0),
            game_over_colour: Colour::rgb(255, 0, 0),
        }
    }
}

impl Settings {
    /// Top-left corner limit for the ship.
    pub fn ship_min(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Bottom-right limit for the ship's top-left corner, keeping the whole
    /// hull on screen.
    pub fn ship_max(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height) - self.ship_dimensions
    }

    /// Horizontally centred, resting on the bottom edge.
    pub fn ship_start(&self) -> Vec2 {
        Vec2::new(
            (self.screen_width - self.ship_dimensions.x) / 2.0,
            self.ship_max().y,
        )
    }

    /// Time that must pass between spawns at `level`, never below the floor.
    pub fn spawn_interval_us(&self, level: u16) -> u64 {
        self.spawn_interval_base_us
            .saturating_sub(self.spawn_interval_step_us.saturating_mul(level as u64))
            .max(self.spawn_interval_floor_us)
    }

    /// Live obstacle count at which the spawner holds off.
    pub fn obstacle_capacity(&self, level: u16) -> usize {
        (self.first_level_obstacles + level as usize).min(self.max_obstacles)
    }

    /// Obstacles fall faster every level.
    pub fn obstacle_accel(&self, level: u16) -> Vec2 {
        Vec2::new(0.0, level as f32 * self.obstacle_accel_per_level)
    }

    pub fn obstacle_max_velocity(&self, level: u16) -> Vec2 {
        self.ship_max_velocity + Vec2::new(0.0, level as f32 * self.obstacle_ceiling_per_level)
    }
}
