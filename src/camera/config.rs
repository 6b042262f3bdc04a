use super::view::{FOV_MAX, FOV_MIN, PITCH_LIMIT};

/// Tunables for the fly camera.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Degrees of rotation per pixel of pointer motion.
    pub sensitivity: f32,
    /// Degrees of field of view per scroll line.
    pub scroll_sensitivity: f32,
    /// World units per second.
    pub base_speed: f32,
    /// Walk on the horizontal plane instead of flying along the look direction.
    pub lock_to_horizontal_plane: bool,
    /// Negate vertical pointer motion before applying it to pitch.
    pub invert_pitch: bool,
    /// Field of view bounds in degrees, never wider than `[FOV_MIN, FOV_MAX]`.
    pub fov_bounds: (f32, f32),
    /// Absolute pitch bound in degrees, never above `PITCH_LIMIT`.
    pub pitch_limit: f32,
}

impl CameraConfig {
    /// Narrows configured bounds to the fixed limits.
    ///
    /// A NaN bound is replaced by the fixed limit it stands for.
    pub fn clamped(mut self) -> Self {
        let (lo, hi) = self.fov_bounds;
        // f32::max/min return the other operand when one side is NaN
        let lo = lo.max(FOV_MIN).min(FOV_MAX);
        let hi = hi.min(FOV_MAX).max(lo);
        self.fov_bounds = (lo, hi);
        self.pitch_limit = self.pitch_limit.abs().min(PITCH_LIMIT);
        self
    }

    pub fn clamp_pitch(&self, pitch: f32) -> f32 {
        pitch.clamp(-self.pitch_limit, self.pitch_limit)
    }

    pub fn clamp_fov(&self, fov: f32) -> f32 {
        fov.clamp(self.fov_bounds.0, self.fov_bounds.1)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: 0.1,
            scroll_sensitivity: 1.0,
            base_speed: 2.5,
            lock_to_horizontal_plane: false,
            invert_pitch: false,
            fov_bounds: (FOV_MIN, FOV_MAX),
            pitch_limit: PITCH_LIMIT,
        }
    }
}
