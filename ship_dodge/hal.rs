//! Boundary between the simulation and the device: clock, buttons, display.
//!
//! The core never talks to hardware directly. Hosts implement these traits
//! (the desktop simulator does it with `embedded-graphics`) and hand the
//! sampled values to [`Game::update`](crate::Game::update).

/// Monotonic microsecond counter with an arbitrary epoch.
pub trait Clock {
    fn now_us(&self) -> u64;

    /// Block until `deadline_us`. Busy-waits unless the host can do better.
    fn wait_until(&self, deadline_us: u64) {
        while self.now_us() < deadline_us {
            core::hint::spin_loop();
        }
    }
}

/// Two raw digital inputs. Levels are active-low: `false` means pressed.
pub trait Buttons {
    fn left_level(&mut self) -> bool;
    fn right_level(&mut self) -> bool;
}

/// Button state for one frame, already converted to "pressed".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
}

impl Input {
    pub const NONE: Self = Self { left: false, right: false };
    pub const LEFT: Self = Self { left: true, right: false };
    pub const RIGHT: Self = Self { left: false, right: true };
    pub const BOTH: Self = Self { left: true, right: true };

    /// Read both pins once and translate the active-low levels.
    pub fn sample<B: Buttons + ?Sized>(buttons: &mut B) -> Self {
        Self {
            left: !buttons.left_level(),
            right: !buttons.right_level(),
        }
    }

    pub fn any(&self) -> bool {
        self.left || self.right
    }
}

/// Packed RGB565 colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Colour(pub u16);

impl Colour {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(0xFFFF);

    /// Pack 8-bit channels, dropping the low bits each 565 field can't hold.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }
}

/// Placement of a text block along one screen axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Center,
    End,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Font {
    Regular,
    Large,
}

/// Double-buffered drawing surface. Nothing is visible until [`commit`].
///
/// [`commit`]: Frame::commit
pub trait Frame {
    fn clear(&mut self, colour: Colour);
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Colour);
    fn draw_text(&mut self, text: &str, x_align: Align, y_align: Align);
    fn commit(&mut self);
    fn set_font(&mut self, font: Font);
}

/// Snap a float rectangle to whole pixels.
///
/// `floor` rather than `as` so boxes hanging off the top edge keep their
/// true extent instead of being pulled towards zero.
pub fn snap_rect(x: f32, y: f32, width: f32, height: f32) -> (i32, i32, u32, u32) {
    (
        libm::floorf(x) as i32,
        libm::floorf(y) as i32,
        libm::floorf(width) as u32,
        libm::floorf(height) as u32,
    )
}

#[cfg(test)]
pub(crate) mod testing {
    extern crate std;

    use std::string::{String, ToString};
    use std::vec::Vec;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Op {
        Clear(Colour),
        Rect(i32, i32, u32, u32, Colour),
        Text(String),
        Commit,
        Font(Font),
    }

    /// Records every draw call for later inspection.
    #[derive(Default)]
    pub struct RecordingFrame {
        pub ops: Vec<Op>,
    }

    impl RecordingFrame {
        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn rects_with(&self, colour: Colour) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, Op::Rect(.., c) if *c == colour))
                .count()
        }

        pub fn reset(&mut self) {
            self.ops.clear();
        }
    }

    impl Frame for RecordingFrame {
        fn clear(&mut self, colour: Colour) {
            self.ops.push(Op::Clear(colour));
        }

        fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Colour) {
            self.ops.push(Op::Rect(x, y, width, height, colour));
        }

        fn draw_text(&mut self, text: &str, _x_align: Align, _y_align: Align) {
            self.ops.push(Op::Text(text.to_string()));
        }

        fn commit(&mut self) {
            self.ops.push(Op::Commit);
        }

        fn set_font(&mut self, font: Font) {
            self.ops.push(Op::Font(font));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pins(bool, bool);

    impl Buttons for Pins {
        fn left_level(&mut self) -> bool {
            self.0
        }
        fn right_level(&mut self) -> bool {
            self.1
        }
    }

    #[test]
    fn low_level_means_pressed() {
        assert_eq!(Input::sample(&mut Pins(true, true)), Input::NONE);
        assert_eq!(Input::sample(&mut Pins(false, true)), Input::LEFT);
        assert_eq!(Input::sample(&mut Pins(true, false)), Input::RIGHT);
        assert_eq!(Input::sample(&mut Pins(false, false)), Input::BOTH);
    }

    #[test]
    fn rgb_packs_to_565() {
        assert_eq!(Colour::rgb(255, 255, 255), Colour::WHITE);
        assert_eq!(Colour::rgb(255, 0, 0), Colour(0xF800));
        assert_eq!(Colour::rgb(0, 255, 0), Colour(0x07E0));
        assert_eq!(Colour::rgb(0, 0, 255), Colour(0x001F));
    }

    #[test]
    fn snapping_floors_negative_coordinates() {
        assert_eq!(snap_rect(-20.5, 3.9, 6.0, 20.0), (-21, 3, 6, 20));
    }
}
