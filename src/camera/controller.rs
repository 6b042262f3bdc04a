use nalgebra_glm as glm;

use super::update;
use super::view;
use super::{CameraConfig, CameraState, CameraUniform, MovementKey, MovementKeys, PointerTracking};

/// Owns the camera and everything needed to drive it from input events
pub struct CameraController {
    state: CameraState,
    tracking: PointerTracking,
    keys: MovementKeys,
    config: CameraConfig,
}

impl CameraController {
    pub fn new(state: CameraState, config: CameraConfig) -> Self {
        let mut controller = Self {
            state,
            tracking: PointerTracking::new(),
            keys: MovementKeys::default(),
            config: config.clamped(),
        };
        controller.apply_bounds();
        controller
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn tracking(&self) -> &PointerTracking {
        &self.tracking
    }

    pub fn keys(&self) -> &MovementKeys {
        &self.keys
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn set_lock_to_horizontal_plane(&mut self, locked: bool) {
        self.config.lock_to_horizontal_plane = locked;
    }

    /// Handle an absolute pointer position
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        let y = if self.config.invert_pitch { -y } else { y };
        update::update_on_pointer_move(
            &mut self.state,
            &mut self.tracking,
            x,
            y,
            self.config.sensitivity,
        );
        self.state.pitch = self.config.clamp_pitch(self.state.pitch);
    }

    /// Pointer left the window or focus was lost
    pub fn on_pointer_lost(&mut self) {
        self.tracking.reseed();
        self.keys.clear();
    }

    /// Handle vertical scroll in lines (positive zooms in)
    pub fn on_scroll(&mut self, lines: f32) {
        update::update_on_scroll(&mut self.state, lines, self.config.scroll_sensitivity);
        self.state.fov = self.config.clamp_fov(self.state.fov);
    }

    pub fn on_key(&mut self, key: MovementKey, pressed: bool) {
        self.keys.set(key, pressed);
    }

    /// Advance movement by one frame
    pub fn update(&mut self, dt: f32) {
        update::update_on_movement_keys(
            &mut self.state,
            &self.keys,
            dt,
            self.config.base_speed,
            self.config.lock_to_horizontal_plane,
        );
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        self.state.view_matrix()
    }

    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> glm::Mat4 {
        view::projection_matrix(self.state.fov, aspect, near, far)
    }

    pub fn uniform(&self, aspect: f32, near: f32, far: f32) -> CameraUniform {
        CameraUniform::new(
            &self.view_matrix(),
            &self.projection_matrix(aspect, near, far),
        )
    }

    /// Reset camera to defaults
    pub fn reset(&mut self) {
        self.state.reset();
        self.apply_bounds();
        self.tracking.reseed();
        self.keys.clear();
    }

    fn apply_bounds(&mut self) {
        self.state.pitch = self.config.clamp_pitch(self.state.pitch);
        self.state.fov = self.config.clamp_fov(self.state.fov);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraState::default(), CameraConfig::default())
    }
}
