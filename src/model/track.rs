use rand::Rng;
use tracing::debug;

/// Distance in front of the camera at which obstacles are tested.
pub const COLLISION_Z_OFFSET: f32 = 1.0;

/// Half extent of an obstacle cube along the forward axis.
pub const OBSTACLE_HALF_WIDTH: f32 = 0.5;

/// World units of corridor per beat of music.
const UNITS_PER_BEAT: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Lane centered around 0, in -2..=2.
    pub lane: i32,
    /// World z of the obstacle; more negative is further down the corridor.
    pub forward_distance: f32,
    pub half_width: f32,
}

/// Beat-aligned obstacle sequence with a cursor marking the current one.
///
/// Obstacles before the cursor are passed and never tested again, the one at
/// the cursor is current, everything after it is pending.
#[derive(Debug, Clone)]
pub struct ObstacleTrack {
    obstacles: Vec<Obstacle>,
    cursor: usize,
}

impl ObstacleTrack {
    /// Lay out `count` obstacles on the beat grid for the given tempo.
    pub fn generate<R: Rng + ?Sized>(count: usize, bpm: f32, offset_beats: f32, rng: &mut R) -> Self {
        assert!(count > 0, "obstacle track needs at least one obstacle");

        let seconds_per_beat = 1.0 / (bpm / 60.0);
        let obstacles = (0..count)
            .map(|i| Obstacle {
                lane: rng.gen_range(-2..=2),
                forward_distance: -(i as f32) * UNITS_PER_BEAT * seconds_per_beat - offset_beats * UNITS_PER_BEAT,
                half_width: OBSTACLE_HALF_WIDTH,
            })
            .collect();

        Self::from_obstacles(obstacles)
    }

    pub fn from_obstacles(obstacles: Vec<Obstacle>) -> Self {
        assert!(!obstacles.is_empty(), "obstacle track needs at least one obstacle");
        Self { obstacles, cursor: 0 }
    }

    pub fn obstacles(&self) -> &[Obstacle] { &self.obstacles }

    /// Never zero; construction rejects empty tracks.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.obstacles.len() }

    pub fn cursor(&self) -> usize { self.cursor }

    pub fn current(&self) -> &Obstacle { &self.obstacles[self.cursor] }

    fn last_index(&self) -> usize { self.obstacles.len() - 1 }

    /// Fraction of the track passed, 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.last_index() == 0 {
            return 1.0;
        }
        self.cursor as f32 / self.last_index() as f32
    }

    /// Move the cursor past every obstacle the camera is already beyond.
    /// Returns how many obstacles were passed.
    pub fn advance(&mut self, camera_z: f32) -> usize {
        let before = self.cursor;
        while self.cursor < self.last_index() && camera_z < self.obstacles[self.cursor].forward_distance {
            self.cursor += 1;
        }
        debug_assert!(self.cursor <= self.last_index());

        let passed = self.cursor - before;
        if passed > 0 {
            debug!(cursor = self.cursor, passed, "advanced obstacle cursor");
        }
        passed
    }

    /// Test the current obstacle against the camera's lane (1..=5) and z.
    pub fn check_collision(&self, camera_lane: i32, camera_z: f32) -> bool {
        let obstacle = self.current();
        if camera_lane - crate::model::CENTER_LANE != obstacle.lane {
            return false;
        }
        let probe = camera_z - COLLISION_Z_OFFSET;
        probe > obstacle.forward_distance - obstacle.half_width
            && probe < obstacle.forward_distance + obstacle.half_width
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.last_index()
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
