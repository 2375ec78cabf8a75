//! Rectangular physical entity shared by the ship and the obstacles.

use glam::Vec2;

use crate::hal::{snap_rect, Colour, Frame};

/// Box plus kinematic state. `position` is the top-left corner of the box.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Piece {
    pub dimensions: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    pub accel: Vec2,
}

impl Piece {
    /// Empty placeholder used to fill unoccupied pool slots.
    pub(crate) const EMPTY: Self = Self {
        dimensions: Vec2::ZERO,
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
        accel: Vec2::ZERO,
    };

    /// A piece at rest. Both dimensions must be positive.
    pub fn new(dimensions: Vec2, position: Vec2) -> Self {
        debug_assert!(dimensions.x > 0.0 && dimensions.y > 0.0);
        Self {
            dimensions,
            position,
            velocity: Vec2::ZERO,
            accel: Vec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Bottom-right corner of the box.
    pub fn far_corner(&self) -> Vec2 {
        self.position + self.dimensions
    }

    pub fn draw<F: Frame + ?Sized>(&self, frame: &mut F, colour: Colour) {
        let (x, y, w, h) = snap_rect(
            self.position.x,
            self.position.y,
            self.dimensions.x,
            self.dimensions.y,
        );
        frame.fill_rect(x, y, w, h, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::testing::{Op, RecordingFrame};

    #[test]
    fn new_piece_is_at_rest() {
        let piece = Piece::new(Vec2::new(6.0, 20.0), Vec2::new(10.0, -20.0));
        assert_eq!(piece.velocity, Vec2::ZERO);
        assert_eq!(piece.accel, Vec2::ZERO);
        assert_eq!(piece.far_corner(), Vec2::new(16.0, 0.0));
    }

    #[test]
    fn draws_its_snapped_box() {
        let mut frame = RecordingFrame::default();
        Piece::new(Vec2::new(6.0, 20.0), Vec2::new(10.7, -0.5)).draw(&mut frame, Colour::WHITE);
        assert_eq!(frame.ops, [Op::Rect(10, -1, 6, 20, Colour::WHITE)]);
    }
}
