use glam::{Mat4, Vec3};

/// Number of discrete lanes the player can occupy (1-indexed).
pub const LANE_COUNT: i32 = 5;

/// Lane index the player starts in; subtracting it centers lanes around 0.
pub const CENTER_LANE: i32 = 3;

/// First-person camera that flies down -Z and snaps between five lanes.
pub struct LaneCamera {
    pub eye: Vec3,
    pub lane: i32,
    pub forward_speed: f32,
    pub up: Vec3,
    pub fov_y: f32,
    pub aspect: f32,
    pub z_near: f32,
    pub z_far: f32,
    start: Vec3,
}

impl LaneCamera {
    pub fn new(start: Vec3, forward_speed: f32, width: u32, height: u32) -> Self {
        Self {
            eye: start,
            lane: CENTER_LANE,
            forward_speed,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            aspect: width as f32 / height.max(1) as f32,
            z_near: 0.1,
            z_far: 100.0,
            start,
        }
    }

    pub fn start(&self) -> Vec3 { self.start }

    pub fn forward(&self) -> Vec3 { Vec3::NEG_Z }

    pub fn target(&self) -> Vec3 { self.eye + self.forward() }

    /// Lane index shifted so the center lane is 0 (range -2..=2).
    pub fn lane_offset(&self) -> i32 { self.lane - CENTER_LANE }

    pub fn set_aspect(&mut self, width: u32, height: u32) { self.aspect = width as f32 / height.max(1) as f32; }

    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target(), self.up);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }

    pub fn move_forward(&mut self, dt: f32) {
        self.eye.z -= self.forward_speed * dt;
    }

    /// Shift one lane left. Silently ignored in lane 1.
    pub fn move_left(&mut self) {
        if self.lane > 1 {
            self.lane -= 1;
            self.eye.x -= 1.0;
        }
    }

    /// Shift one lane right. Silently ignored in the last lane.
    pub fn move_right(&mut self) {
        if self.lane < LANE_COUNT {
            self.lane += 1;
            self.eye.x += 1.0;
        }
    }

    /// Put the camera back at the start of the corridor. Lane and x are left
    /// where the player had them; see [`LaneCamera::recenter`].
    pub fn reset(&mut self) {
        self.eye.z = self.start.z;
    }

    /// Return to the center lane.
    pub fn recenter(&mut self) {
        self.lane = CENTER_LANE;
        self.eye.x = self.start.x;
    }

    pub fn boost(&mut self, amount: f32) {
        self.forward_speed += amount;
    }
}
