//! main.rs - Desktop simulator for the ship-dodge core
//! Stands in for the device: window as display, keyboard as the two buttons

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::{raw::RawU16, Rgb565},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use std::thread;
use std::time::{Duration, Instant};

use ship_dodge::{Align, Buttons, Clock, Colour, Font, Frame, Game, Settings};

// ~60 fps
const FRAME_US: u64 = 16_667;
const TEXT_MARGIN: i32 = 3;

struct SimClock {
    epoch: Instant,
}

impl Clock for SimClock {
    fn now_us(&self) -> u64 {
        self.epoch.elapsed().as_micros() as u64
    }

    fn wait_until(&self, deadline_us: u64) {
        let now = self.now_us();
        if deadline_us > now {
            thread::sleep(Duration::from_micros(deadline_us - now));
        }
    }
}

/// Held-key state, reported back as active-low pin levels.
#[derive(Default)]
struct Keys {
    left: bool,
    right: bool,
}

impl Buttons for Keys {
    fn left_level(&mut self) -> bool {
        !self.left
    }

    fn right_level(&mut self) -> bool {
        !self.right
    }
}

struct SimFrame {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    font: &'static MonoFont<'static>,
}

fn to_rgb565(colour: Colour) -> Rgb565 {
    RawU16::new(colour.0).into()
}

// The simulator display's draw error is `Infallible`, hence the `let _`.
impl Frame for SimFrame {
    fn clear(&mut self, colour: Colour) {
        let _ = self.display.clear(to_rgb565(colour));
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, colour: Colour) {
        let _ = Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(PrimitiveStyle::with_fill(to_rgb565(colour)))
            .draw(&mut self.display);
    }

    fn draw_text(&mut self, text: &str, x_align: Align, y_align: Align) {
        let size = self.display.size();
        let (width, height) = (size.width as i32, size.height as i32);

        let (x, alignment) = match x_align {
            Align::Start => (TEXT_MARGIN, Alignment::Left),
            Align::Center => (width / 2, Alignment::Center),
            Align::End => (width - TEXT_MARGIN, Alignment::Right),
        };
        let (y, baseline) = match y_align {
            Align::Start => (TEXT_MARGIN, Baseline::Top),
            Align::Center => (height / 2, Baseline::Middle),
            Align::End => (height - TEXT_MARGIN, Baseline::Bottom),
        };

        let style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(baseline)
            .build();
        let _ = Text::with_text_style(
            text,
            Point::new(x, y),
            MonoTextStyle::new(self.font, Rgb565::WHITE),
            style,
        )
        .draw(&mut self.display);
    }

    fn commit(&mut self) {
        self.window.update(&self.display);
    }

    fn set_font(&mut self, font: Font) {
        self.font = match font {
            Font::Regular => &FONT_6X10,
            Font::Large => &FONT_10X20,
        };
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::default();

    let display = SimulatorDisplay::new(Size::new(
        settings.screen_width as u32,
        settings.screen_height as u32,
    ));
    let output_settings = OutputSettingsBuilder::new().scale(3).build();
    let window = Window::new("ship-dodge", &output_settings);
    let mut frame = SimFrame {
        display,
        window,
        font: &FONT_6X10,
    };
    frame.set_font(settings.font);

    let clock = SimClock {
        epoch: Instant::now(),
    };
    let mut keys = Keys::default();
    let mut game: Game = Game::new(settings, clock.now_us());

    println!("ship-dodge simulator");
    println!("  Left / A: left button");
    println!("  Right / D: right button");
    println!("  Q: Quit");

    'main_loop: loop {
        let frame_start = clock.now_us();

        game.poll(&clock, &mut keys, &mut frame);

        // Events are only available once the window has been drawn.
        for event in frame.window.events() {
            match event {
                SimulatorEvent::Quit => break 'main_loop,
                SimulatorEvent::KeyDown { keycode, .. } | SimulatorEvent::KeyUp { keycode, .. } => {
                    let held = matches!(event, SimulatorEvent::KeyDown { .. });
                    let key = format!("{:?}", keycode).to_lowercase();
                    match key.as_str() {
                        "left" | "a" => keys.left = held,
                        "right" | "d" => keys.right = held,
                        "q" if held => break 'main_loop,
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        clock.wait_until(frame_start + FRAME_US);
    }

    log::info!("simulator closed");
}
