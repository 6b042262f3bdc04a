use nalgebra_glm as glm;

use super::view::{self, FOV_MAX};

/// Camera pose and optical parameters
#[derive(Debug, Clone)]
pub struct CameraState {
    pub position: glm::Vec3,
    /// Degrees, measured from +X towards +Z.
    pub yaw: f32,
    /// Degrees, kept within the pitch limit by the update functions.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    world_up: glm::Vec3,
    default_position: glm::Vec3,
    default_yaw: f32,
    default_pitch: f32,
    default_fov: f32,
}

impl CameraState {
    pub fn new(position: glm::Vec3, yaw: f32, pitch: f32, fov: f32) -> Self {
        Self::with_world_up(position, yaw, pitch, fov, glm::vec3(0.0, 1.0, 0.0))
    }

    pub fn with_world_up(
        position: glm::Vec3,
        yaw: f32,
        pitch: f32,
        fov: f32,
        world_up: glm::Vec3,
    ) -> Self {
        Self {
            position,
            yaw,
            pitch,
            fov,
            world_up: glm::normalize(&world_up),
            default_position: position,
            default_yaw: yaw,
            default_pitch: pitch,
            default_fov: fov,
        }
    }

    pub fn world_up(&self) -> glm::Vec3 {
        self.world_up
    }

    /// Current unit look direction.
    pub fn front(&self) -> glm::Vec3 {
        view::look_direction(self.yaw, self.pitch)
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        view::view_matrix(&self.position, &self.front(), &self.world_up)
    }

    pub fn reset(&mut self) {
        self.position = self.default_position;
        self.yaw = self.default_yaw;
        self.pitch = self.default_pitch;
        self.fov = self.default_fov;
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(glm::vec3(0.0, 0.0, 3.0), -90.0, 0.0, FOV_MAX)
    }
}

/// Last seen pointer coordinates, used to turn absolute positions into deltas.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTracking {
    pub last_x: f64,
    pub last_y: f64,
    /// Set until a pointer event has seeded `last_x`/`last_y`.
    pub first_sample: bool,
}

impl PointerTracking {
    pub fn new() -> Self {
        Self {
            last_x: 0.0,
            last_y: 0.0,
            first_sample: true,
        }
    }

    /// Discard the next pointer event as a delta source.
    pub fn reseed(&mut self) {
        self.first_sample = true;
    }
}

impl Default for PointerTracking {
    fn default() -> Self {
        Self::new()
    }
}
