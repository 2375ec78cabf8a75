//! Per-axis vector helpers on top of `glam::Vec2`.

pub use glam::Vec2;

/// Component-wise clamping against another vector.
///
/// Each axis is bounded by the matching axis of the bound; this is not a
/// magnitude clamp.
pub trait Clamp2 {
    /// Raise any axis below `floor` up to it.
    fn clamp_min(self, floor: Self) -> Self;
    /// Lower any axis above `ceiling` down to it.
    fn clamp_max(self, ceiling: Self) -> Self;
}

impl Clamp2 for Vec2 {
    #[inline]
    fn clamp_min(self, floor: Vec2) -> Vec2 {
        self.max(floor)
    }

    #[inline]
    fn clamp_max(self, ceiling: Vec2) -> Vec2 {
        self.min(ceiling)
    }
}
