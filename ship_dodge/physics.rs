//! Integration step and the movement policy of each entity class.

use glam::Vec2;

use crate::config::Settings;
use crate::hal::Input;
use crate::piece::Piece;
use crate::vector::Clamp2;

/// Advance `piece` by `dt` seconds: accel into velocity, cap velocity per
/// axis at `max_velocity`, velocity into position.
///
/// Only the upper bound is applied; entities rely on drag or their own
/// policy for the other direction.
pub fn integrate(piece: &mut Piece, dt: f32, max_velocity: Vec2) {
    piece.velocity = (piece.velocity + piece.accel * dt).clamp_max(max_velocity);
    piece.position += piece.velocity * dt;
}

/// Pick the ship's acceleration from this frame's buttons.
pub fn steer_ship(ship: &mut Piece, input: Input, settings: &Settings) {
    ship.accel = match (input.left, input.right) {
        // Both buttons are reserved for a future action.
        (true, true) => Vec2::ZERO,
        (true, false) => Vec2::new(-settings.thrust_accel, 0.0),
        (false, true) => Vec2::new(settings.thrust_accel, 0.0),
        (false, false) => {
            // Drag opposes motion; at exactly zero it switches off so the
            // ship doesn't twitch in place.
            let drag = if ship.velocity.x < 0.0 {
                settings.drag_decel
            } else if ship.velocity.x > 0.0 {
                -settings.drag_decel
            } else {
                0.0
            };
            Vec2::new(drag, ship.accel.y)
        }
    };
}

/// Integrate the ship and keep its whole hull on screen.
pub fn move_ship(ship: &mut Piece, dt: f32, settings: &Settings) {
    integrate(ship, dt, settings.ship_max_velocity);
    ship.position = ship
        .position
        .clamp_min(settings.ship_min())
        .clamp_max(settings.ship_max());
}

/// Obstacles pick up speed with level and are never kept on screen.
pub fn move_obstacle(obstacle: &mut Piece, dt: f32, level: u16, settings: &Settings) {
    obstacle.accel = settings.obstacle_accel(level);
    integrate(obstacle, dt, settings.obstacle_max_velocity(level));
}
