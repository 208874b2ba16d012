// MODEL: Game state and data
pub mod camera;
pub mod track;

pub use camera::{LaneCamera, CENTER_LANE, LANE_COUNT};
pub use track::{Obstacle, ObstacleTrack, COLLISION_Z_OFFSET, OBSTACLE_HALF_WIDTH};
