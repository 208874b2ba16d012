use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::controller::Intent;
use crate::model::{LaneCamera, ObstacleTrack};

/// What happened during one simulated frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameOutcome {
    /// Obstacles the cursor moved past this frame.
    pub passed: usize,
    pub collided: bool,
    /// Lives ran out and the session was reset.
    pub lives_lost_reset: bool,
    pub won: bool,
}

/// The whole game state: camera, track, life budget and pause/win flags.
pub struct GameSession {
    camera: LaneCamera,
    track: ObstacleTrack,
    lives: i32,
    paused: bool,
    won: bool,
    config: GameConfig,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let track = ObstacleTrack::generate(config.obstacle_count, config.bpm, config.offset_beats, &mut rng);
        info!(
            obstacles = track.len(),
            bpm = config.bpm,
            seed = ?config.seed,
            "generated obstacle track"
        );
        Self::with_track(config, track)
    }

    pub fn with_track(config: &GameConfig, track: ObstacleTrack) -> Self {
        let camera = LaneCamera::new(
            config.start(),
            config.forward_speed,
            config.window_width,
            config.window_height,
        );
        Self {
            camera,
            track,
            lives: config.starting_lives,
            paused: true,
            won: false,
            config: config.clone(),
        }
    }

    pub fn camera(&self) -> &LaneCamera { &self.camera }

    pub fn camera_mut(&mut self) -> &mut LaneCamera { &mut self.camera }

    pub fn track(&self) -> &ObstacleTrack { &self.track }

    pub fn lives(&self) -> i32 { self.lives }

    pub fn starting_lives(&self) -> i32 { self.config.starting_lives }

    pub fn is_paused(&self) -> bool { self.paused }

    pub fn is_won(&self) -> bool { self.won }

    /// Apply a player command. Returns `false` when the player asked to quit.
    pub fn handle(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft => self.camera.move_left(),
            Intent::MoveRight => self.camera.move_right(),
            Intent::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "pause toggled");
            }
            Intent::Restart => {
                self.restart();
                info!("session restarted");
            }
            Intent::SpeedBoost => {
                self.camera.boost(self.config.speed_boost);
                info!(speed = self.camera.forward_speed, "speed boost");
            }
            Intent::Quit => return false,
        }
        true
    }

    /// Advance the simulation by one frame of `dt` seconds.
    pub fn step(&mut self, dt: f32) -> FrameOutcome {
        let mut outcome = FrameOutcome { won: self.won, ..FrameOutcome::default() };
        if self.paused {
            return outcome;
        }

        self.camera.move_forward(dt);
        outcome.passed = self.track.advance(self.camera.eye.z);

        if self.track.is_complete() && !self.won {
            self.won = true;
            info!(lives = self.lives, "track complete");
        }
        outcome.won = self.won;

        if self.track.check_collision(self.camera.lane, self.camera.eye.z) {
            outcome.collided = true;
            self.lives -= 1;
        }

        if self.lives <= 0 {
            warn!(cursor = self.track.cursor(), "out of lives, resetting");
            self.restart();
            outcome.lives_lost_reset = true;
            outcome.won = false;
        }
        outcome
    }

    /// Full reset: cursor, lives, camera position, lane and speed. Leaves the
    /// session paused.
    pub fn restart(&mut self) {
        self.track.reset();
        self.camera.reset();
        self.camera.recenter();
        self.camera.forward_speed = self.config.forward_speed;
        self.lives = self.config.starting_lives;
        self.paused = true;
        self.won = false;
    }

    /// Text for the window title bar.
    pub fn status_title(&self) -> String {
        let mut title = if self.won { "Win".to_string() } else { self.lives.to_string() };
        if self.paused {
            title.push_str(" (paused)");
        }
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Obstacle, CENTER_LANE};

    fn obstacle(lane: i32, forward_distance: f32) -> Obstacle {
        Obstacle { lane, forward_distance, half_width: 0.5 }
    }

    fn config(starting_lives: i32) -> GameConfig {
        GameConfig {
            starting_lives,
            forward_speed: 2.0,
            ..GameConfig::default()
        }
    }

    /// Center-lane obstacle right in front of the start, a far one behind it.
    fn session(starting_lives: i32) -> GameSession {
        let track = ObstacleTrack::from_obstacles(vec![obstacle(0, 0.0), obstacle(2, -10.0)]);
        let mut session = GameSession::with_track(&config(starting_lives), track);
        session.handle(Intent::TogglePause);
        session
    }

    #[test]
    fn test_starts_paused_and_does_not_move() {
        let track = ObstacleTrack::from_obstacles(vec![obstacle(0, 0.0), obstacle(2, -10.0)]);
        let mut session = GameSession::with_track(&config(3), track);
        assert!(session.is_paused());
        let outcome = session.step(1.0);
        assert_eq!(outcome, FrameOutcome::default());
        assert_eq!(session.camera().eye.z, 3.0);
    }

    #[test]
    fn test_lane_changes_apply_while_paused() {
        let track = ObstacleTrack::from_obstacles(vec![obstacle(0, -16.0)]);
        let mut session = GameSession::with_track(&GameConfig::default(), track);
        assert!(session.is_paused());

        session.handle(Intent::MoveRight);
        assert_eq!(session.camera().lane, CENTER_LANE + 1);
        assert_eq!(session.camera().eye.x, 1.0);

        session.handle(Intent::MoveLeft);
        session.handle(Intent::MoveLeft);
        assert_eq!(session.camera().lane, CENTER_LANE - 1);
        // still paused, so no forward motion
        assert_eq!(session.step(1.0), FrameOutcome::default());
        assert_eq!(session.camera().eye.z, 3.0);
    }

    #[test]
    fn test_collision_costs_one_life_per_frame() {
        let mut session = session(5);
        // z goes 3 -> 1, probe at 0 sits on the obstacle
        let outcome = session.step(1.0);
        assert!(outcome.collided);
        assert_eq!(session.lives(), 4);

        // still overlapping on the next frame
        assert!(session.step(0.0).collided);
        assert_eq!(session.lives(), 3);
    }

    #[test]
    fn test_long_frame_still_costs_one_life() {
        let track = ObstacleTrack::from_obstacles(vec![obstacle(0, -20.0), obstacle(2, -40.0)]);
        let mut session = GameSession::with_track(&config(5), track);
        session.handle(Intent::TogglePause);
        // one 11 second step takes z from 3 to -19, probe -20 sits on the obstacle
        let outcome = session.step(11.0);
        assert!(outcome.collided);
        assert_eq!(session.lives(), 4);
    }

    #[test]
    fn test_dodging_avoids_collision() {
        let mut session = session(5);
        session.handle(Intent::MoveRight);
        let outcome = session.step(1.0);
        assert!(!outcome.collided);
        assert_eq!(session.lives(), 5);
    }

    #[test]
    fn test_out_of_lives_resets_everything() {
        let mut session = session(2);
        session.handle(Intent::SpeedBoost);
        session.handle(Intent::MoveLeft);
        session.handle(Intent::MoveRight);
        // speed 3: z 3 -> 1.5, probe 0.5 is at the open edge, no hit yet
        assert!(!session.step(0.5).collided);
        // z 1.5 -> 1.2
        assert!(session.step(0.1).collided);
        assert_eq!(session.lives(), 1);

        let outcome = session.step(0.0);
        assert!(outcome.collided);
        assert!(outcome.lives_lost_reset);
        assert_eq!(session.lives(), 2);
        assert_eq!(session.track().cursor(), 0);
        assert_eq!(session.camera().eye.z, 3.0);
        assert_eq!(session.camera().lane, CENTER_LANE);
        assert_eq!(session.camera().forward_speed, 2.0);
        assert!(session.is_paused());
    }

    #[test]
    fn test_win_latches_and_simulation_continues() {
        let track = ObstacleTrack::from_obstacles(vec![obstacle(-2, 0.0), obstacle(-2, -10.0)]);
        let mut session = GameSession::with_track(&config(5), track);
        session.handle(Intent::TogglePause);

        let outcome = session.step(10.0);
        assert_eq!(outcome.passed, 1);
        assert!(outcome.won);
        assert!(session.is_won());
        assert_eq!(session.status_title(), "Win");

        let z = session.camera().eye.z;
        assert!(session.step(1.0).won);
        assert!(session.camera().eye.z < z);
    }

    #[test]
    fn test_restart_intent() {
        let mut session = session(5);
        session.step(1.0);
        session.handle(Intent::MoveLeft);
        assert!(session.handle(Intent::Restart));
        assert_eq!(session.lives(), 5);
        assert_eq!(session.track().cursor(), 0);
        assert_eq!(session.camera().eye.z, 3.0);
        assert_eq!(session.camera().eye.x, 0.0);
        assert!(session.is_paused());
        assert_eq!(session.status_title(), "5 (paused)");
    }

    #[test]
    fn test_quit_is_reported() {
        let mut session = session(5);
        assert!(!session.handle(Intent::Quit));
        assert_eq!(session.status_title(), "5");
    }

    #[test]
    fn test_seeded_sessions_share_a_track() {
        let config = GameConfig { seed: Some(99), obstacle_count: 64, ..GameConfig::default() };
        let a = GameSession::new(&config);
        let b = GameSession::new(&config);
        assert_eq!(a.track().obstacles(), b.track().obstacles());
        assert_eq!(a.lives(), 100);
    }
}
