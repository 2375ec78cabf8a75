//! Outer loop: menu, a play session, the game-over flash, and back again.

use crate::config::Settings;
use crate::hal::{Align, Buttons, Clock, Frame, Input};
use crate::session::GameSession;
use crate::MAX_OBSTACLES;

/// Which screen the game is on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Playing,
    GameOver,
}

enum State<const N: usize> {
    Menu { since_us: u64 },
    Playing(GameSession<N>),
    GameOver { since_us: u64 },
}

/// The whole game. `N` is the size of the obstacle pool.
///
/// Drive it by calling [`update`](Self::update) once per frame with the
/// button state and time sampled for that frame. It never finishes.
pub struct Game<const N: usize = MAX_OBSTACLES> {
    settings: Settings,
    state: State<N>,
}

impl<const N: usize> Game<N> {
    pub fn new(settings: Settings, now_us: u64) -> Self {
        Self {
            settings,
            state: State::Menu { since_us: now_us },
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> Phase {
        match self.state {
            State::Menu { .. } => Phase::Menu,
            State::Playing(_) => Phase::Playing,
            State::GameOver { .. } => Phase::GameOver,
        }
    }

    /// The running session, if any.
    pub fn session(&self) -> Option<&GameSession<N>> {
        match &self.state {
            State::Playing(session) => Some(session),
            _ => None,
        }
    }

    /// Sample the buttons and clock, then run [`update`](Self::update).
    pub fn poll<C, B, F>(&mut self, clock: &C, buttons: &mut B, frame: &mut F)
    where
        C: Clock + ?Sized,
        B: Buttons + ?Sized,
        F: Frame + ?Sized,
    {
        let input = Input::sample(buttons);
        self.update(input, clock.now_us(), frame);
    }

    /// Render the current screen for `now_us` and apply any transition.
    pub fn update<F: Frame + ?Sized>(&mut self, input: Input, now_us: u64, frame: &mut F) {
        let settings = &self.settings;
        let next = match &mut self.state {
            State::Menu { since_us } => {
                frame.clear(settings.menu_colour);
                frame.draw_text("PRESS TO START", Align::Center, Align::Center);
                frame.commit();

                // Ignore the press that dismissed the previous game over.
                let armed = now_us.saturating_sub(*since_us) >= settings.start_debounce_us;
                if armed && input.any() {
                    log::info!("session started");
                    Some(State::Playing(GameSession::new(now_us, settings)))
                } else {
                    None
                }
            }
            State::Playing(session) => {
                session.tick(input, now_us, settings, frame);
                if session.crashed() {
                    log::info!(
                        "game over: level {} score {}",
                        session.level(),
                        session.score()
                    );
                    Some(State::GameOver { since_us: now_us })
                } else {
                    None
                }
            }
            State::GameOver { since_us } => {
                frame.clear(settings.game_over_colour);
                frame.commit();

                if now_us.saturating_sub(*since_us) >= settings.game_over_hold_us {
                    Some(State::Menu { since_us: now_us })
                } else {
                    None
                }
            }
        };

        if let Some(next) = next {
            self.state = next;
        }
    }
}
