//! ship-dodge - simulation core of a two-button falling-block dodger
//! No heap allocation, no_std compatible
//!
//! The ship slides along the bottom of a small portrait display while
//! obstacles drop from above, faster and more often every level. Everything
//! hardware-facing goes through the traits in [`hal`]; [`Game::update`] takes
//! already-sampled input and time, so the whole loop runs in unit tests.

#![cfg_attr(not(test), no_std)]

pub mod collision;
pub mod config;
pub mod game;
pub mod hal;
pub mod physics;
pub mod piece;
pub mod registry;
pub mod session;
pub mod spawner;
pub mod vector;

pub use collision::collides;
pub use config::Settings;
pub use game::{Game, Phase};
pub use hal::{Align, Buttons, Clock, Colour, Font, Frame, Input};
pub use piece::Piece;
pub use registry::{ObstacleId, ObstacleRegistry};
pub use session::GameSession;
pub use spawner::Spawner;
pub use vector::{Clamp2, Vec2};

/// Obstacle pool size. Matches the default `Settings::max_obstacles`.
pub const MAX_OBSTACLES: usize = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pool_fits_default_ceiling() {
        assert!(Settings::default().max_obstacles <= MAX_OBSTACLES);
    }
}
