//! Axis-aligned box overlap.

use crate::piece::Piece;

/// Strict AABB overlap: boxes that only share an edge do not collide.
pub fn collides(a: &Piece, b: &Piece) -> bool {
    let (a_min, a_max) = (a.position, a.far_corner());
    let (b_min, b_max) = (b.position, b.far_corner());
    a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
}
