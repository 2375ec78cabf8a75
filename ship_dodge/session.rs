//! One playthrough: from leaving the menu until the ship is hit.

use core::fmt::Write;

use heapless::{String, Vec};

use crate::collision::collides;
use crate::config::Settings;
use crate::hal::{Align, Frame, Input};
use crate::physics::{move_obstacle, move_ship, steer_ship};
use crate::piece::Piece;
use crate::registry::{ObstacleId, ObstacleRegistry};
use crate::spawner::Spawner;

const BANNER_HEIGHT: f32 = 30.0;

pub struct GameSession<const N: usize> {
    level: u16,
    score: u32,
    crashed: bool,
    ship: Piece,
    obstacles: ObstacleRegistry<N>,
    spawner: Spawner,
    last_frame_us: u64,
    last_level_us: u64,
}

impl<const N: usize> GameSession<N> {
    /// Fresh session at level 1, all timers starting at `now_us`.
    pub fn new(now_us: u64, settings: &Settings) -> Self {
        Self {
            level: 1,
            score: 0,
            crashed: false,
            ship: Piece::new(settings.ship_dimensions, settings.ship_start()),
            obstacles: ObstacleRegistry::new(),
            spawner: Spawner::new(now_us),
            last_frame_us: now_us,
            last_level_us: now_us,
        }
    }

    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn crashed(&self) -> bool {
        self.crashed
    }

    pub fn ship(&self) -> &Piece {
        &self.ship
    }

    pub fn obstacles(&self) -> &ObstacleRegistry<N> {
        &self.obstacles
    }

    /// Simulate and draw one frame ending at `now_us`.
    ///
    /// The frame is always committed, including the one in which the ship
    /// gets hit; callers check [`crashed`](Self::crashed) afterwards.
    pub fn tick<F: Frame + ?Sized>(
        &mut self,
        input: Input,
        now_us: u64,
        settings: &Settings,
        frame: &mut F,
    ) {
        // One dt for the whole frame, shared by the ship and every obstacle.
        let dt = now_us.saturating_sub(self.last_frame_us) as f32 / 1.0e6;

        frame.clear(settings.background_colour);

        steer_ship(&mut self.ship, input, settings);
        move_ship(&mut self.ship, dt, settings);
        self.ship.draw(frame, settings.ship_colour);

        self.spawner
            .tick(now_us, self.level, &mut self.obstacles, settings);

        let ship = self.ship;
        let level = self.level;
        let mut hit = false;
        self.obstacles.for_each_mut(|_, obstacle| {
            move_obstacle(obstacle, dt, level, settings);
            hit |= collides(&ship, obstacle);
            obstacle.draw(&mut *frame, settings.obstacle_colour);
        });
        if hit && !self.crashed {
            self.crashed = true;
            log::info!("ship hit at level {} with score {}", self.level, self.score);
        }

        self.retire_exited(settings);

        if now_us.saturating_sub(self.last_level_us) > settings.level_up_interval_us {
            self.level = self.level.saturating_add(1);
            self.last_level_us = now_us;
            log::info!("level up: {}", self.level);
        }

        self.draw_hud(now_us, settings, frame);

        self.last_frame_us = now_us;
        frame.commit();
    }

    /// Remove every obstacle that has dropped below the screen, scoring each.
    /// Returns how many were removed.
    pub fn retire_exited(&mut self, settings: &Settings) -> usize {
        // Collect first, remove after, so traversal never sees a slot being
        // unlinked underneath it.
        let mut exited: Vec<ObstacleId, N> = Vec::new();
        for (id, obstacle) in self.obstacles.iter() {
            if obstacle.position.y >= settings.screen_height {
                // Can't overflow: at most N obstacles are live.
                let _ = exited.push(id);
            }
        }

        for &id in &exited {
            if self.obstacles.remove(id).is_some() {
                self.score = self.score.saturating_add(settings.score_per_obstacle);
            }
        }
        if !exited.is_empty() {
            log::debug!("retired {} obstacles, score {}", exited.len(), self.score);
        }
        exited.len()
    }

    fn draw_hud<F: Frame + ?Sized>(&self, now_us: u64, settings: &Settings, frame: &mut F) {
        let width = settings.screen_width as u32;
        frame.fill_rect(0, 0, width, settings.hud_height as u32, settings.hud_colour);

        let mut text: String<32> = String::new();
        let _ = write!(&mut text, "Level: {} Score: {}", self.level, self.score);
        frame.draw_text(&text, Align::Start, Align::Start);

        let since_level_up = now_us.saturating_sub(self.last_level_us);
        if self.level > 1 && since_level_up < settings.level_up_banner_us {
            let top = (settings.screen_height - BANNER_HEIGHT) / 2.0;
            frame.fill_rect(0, top as i32, width, BANNER_HEIGHT as u32, settings.banner_colour);
            frame.draw_text("LEVEL UP", Align::Center, Align::Center);
        }
    }

    #[cfg(test)]
    pub(crate) fn obstacles_mut(&mut self) -> &mut ObstacleRegistry<N> {
        &mut self.obstacles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::testing::{Op, RecordingFrame};
    use glam::Vec2;

    const SEC: u64 = 1_000_000;

    fn session() -> (GameSession<20>, Settings, RecordingFrame) {
        let settings = Settings::default();
        (GameSession::new(0, &settings), settings, RecordingFrame::default())
    }

    fn obstacle_at(settings: &Settings, x: f32, y: f32) -> Piece {
        Piece::new(settings.obstacle_dimensions, Vec2::new(x, y))
            .with_velocity(settings.first_level_velocity)
    }

    #[test]
    fn starts_at_level_one_with_no_score() {
        let (session, settings, _) = session();
        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert!(!session.crashed());
        assert!(session.obstacles().is_empty());
        assert_eq!(session.ship().position, settings.ship_start());
    }

    #[test]
    fn idle_frame_leaves_ship_at_rest() {
        let (mut session, settings, mut frame) = session();
        session.tick(Input::NONE, SEC / 10, &settings, &mut frame);

        let ship = session.ship();
        assert_eq!(ship.velocity.x, 0.0);
        assert_eq!(ship.accel.x, 0.0);
        assert_eq!(ship.position, settings.ship_start());
        assert!(!session.crashed());
    }

    #[test]
    fn thrust_moves_the_ship() {
        let (mut session, settings, mut frame) = session();
        session.tick(Input::RIGHT, SEC / 10, &settings, &mut frame);
        // v = 200 * 0.1, x += v * 0.1
        assert!((session.ship().velocity.x - 20.0).abs() < 1e-4);
        assert!((session.ship().position.x - (settings.ship_start().x + 2.0)).abs() < 1e-4);
    }

    #[test]
    fn frame_is_drawn_in_order_and_committed() {
        let (mut session, settings, mut frame) = session();
        session
            .obstacles_mut()
            .append(obstacle_at(&settings, 10.0, 50.0))
            .unwrap();
        session.tick(Input::NONE, SEC / 60, &settings, &mut frame);

        assert_eq!(frame.ops.first(), Some(&Op::Clear(settings.background_colour)));
        assert_eq!(frame.ops.last(), Some(&Op::Commit));
        assert_eq!(frame.rects_with(settings.ship_colour), 1);
        assert_eq!(frame.rects_with(settings.obstacle_colour), 1);
        assert_eq!(frame.texts(), ["Level: 1 Score: 0"]);
    }

    #[test]
    fn obstacle_at_screen_height_is_retired_and_scored() {
        let (mut session, settings, _) = session();
        session
            .obstacles_mut()
            .append(obstacle_at(&settings, 10.0, 240.0))
            .unwrap();
        session
            .obstacles_mut()
            .append(obstacle_at(&settings, 30.0, 239.0))
            .unwrap();

        assert_eq!(session.retire_exited(&settings), 1);
        assert_eq!(session.score(), settings.score_per_obstacle);
        assert_eq!(session.obstacles().len(), 1);
        let (_, left) = session.obstacles().iter().next().unwrap();
        assert_eq!(left.position.y, 239.0);
    }

    #[test]
    fn retiring_several_keeps_the_rest_in_order() {
        let (mut session, settings, _) = session();
        for (i, y) in [250.0, 10.0, 300.0, 20.0, 241.0].into_iter().enumerate() {
            session
                .obstacles_mut()
                .append(obstacle_at(&settings, i as f32, y))
                .unwrap();
        }
        assert_eq!(session.retire_exited(&settings), 3);
        assert_eq!(session.score(), 300);
        let ys: heapless::Vec<f32, 5> =
            session.obstacles().iter().map(|(_, p)| p.position.y).collect();
        assert_eq!(ys.as_slice(), [10.0, 20.0]);
    }

    #[test]
    fn overlap_crashes_but_frame_still_renders() {
        let (mut session, settings, mut frame) = session();
        let ship = settings.ship_start();
        session
            .obstacles_mut()
            .append(obstacle_at(&settings, ship.x + 5.0, ship.y + 10.0))
            .unwrap();

        session.tick(Input::NONE, SEC / 60, &settings, &mut frame);
        assert!(session.crashed());
        assert_eq!(frame.ops.last(), Some(&Op::Commit));
        assert_eq!(frame.texts(), ["Level: 1 Score: 0"]);
    }

    #[test]
    fn spawns_once_the_interval_passes() {
        let (mut session, settings, mut frame) = session();
        let mut now = 0;
        while now <= settings.spawn_interval_us(1) {
            now += SEC / 10;
            session.tick(Input::NONE, now, &settings, &mut frame);
        }
        assert_eq!(session.obstacles().len(), 1);
    }

    #[test]
    fn levels_up_after_the_interval_and_shows_banner() {
        let (mut session, settings, mut frame) = session();
        let interval = settings.level_up_interval_us;

        session.tick(Input::NONE, interval, &settings, &mut frame);
        assert_eq!(session.level(), 1);

        frame.reset();
        session.tick(Input::NONE, interval + 1, &settings, &mut frame);
        assert_eq!(session.level(), 2);
        assert!(frame.texts().contains(&"LEVEL UP"));
        assert!(frame.texts().contains(&"Level: 2 Score: 0"));

        frame.reset();
        session.tick(Input::NONE, interval + 1 + settings.level_up_banner_us, &settings, &mut frame);
        assert!(!frame.texts().contains(&"LEVEL UP"));
    }
}
