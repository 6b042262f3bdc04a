//! Input-to-orientation updates.
//!
//! Each function mutates camera state in place for one input event or one frame.
//! None of them validate their inputs: non-finite values flow through unchanged.

use nalgebra_glm as glm;

use super::movement::MovementKeys;
use super::state::{CameraState, PointerTracking};
use super::view::{self, FOV_MAX, FOV_MIN, PITCH_LIMIT};

/// Applies an absolute pointer position to yaw and pitch.
///
/// The first sample after construction (or after [`PointerTracking::reseed`]) only
/// seeds the tracking state. Moving the pointer towards larger `y` raises pitch.
pub fn update_on_pointer_move(
    state: &mut CameraState,
    tracking: &mut PointerTracking,
    new_x: f64,
    new_y: f64,
    sensitivity: f32,
) {
    if tracking.first_sample {
        tracking.last_x = new_x;
        tracking.last_y = new_y;
        tracking.first_sample = false;
        return;
    }

    let dx = (new_x - tracking.last_x) as f32;
    let dy = (new_y - tracking.last_y) as f32;

    state.yaw += dx * sensitivity;
    state.pitch = (state.pitch + dy * sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);

    tracking.last_x = new_x;
    tracking.last_y = new_y;
}

/// Zooms by narrowing (positive delta) or widening the field of view.
pub fn update_on_scroll(state: &mut CameraState, scroll_dy: f32, sensitivity: f32) {
    state.fov = (state.fov - scroll_dy * sensitivity).clamp(FOV_MIN, FOV_MAX);
}

/// Moves the camera for one frame of held movement keys.
///
/// Displacements of simultaneously held keys add up; diagonal movement is not
/// normalized. With `lock_to_horizontal_plane` the up/down keys are ignored and
/// forward/strafe stay on the plane orthogonal to world up.
pub fn update_on_movement_keys(
    state: &mut CameraState,
    keys: &MovementKeys,
    dt: f32,
    base_speed: f32,
    lock_to_horizontal_plane: bool,
) {
    if !keys.any() {
        return;
    }

    let speed = base_speed * dt;
    let world_up = state.world_up();
    let front = if lock_to_horizontal_plane {
        horizontal_front(state)
    } else {
        state.front()
    };
    let right = glm::normalize(&glm::cross(&front, &world_up));

    let mut displacement = glm::Vec3::zeros();
    if keys.forward {
        displacement += front * speed;
    }
    if keys.backward {
        displacement -= front * speed;
    }
    if keys.left {
        displacement -= right * speed;
    }
    if keys.right {
        displacement += right * speed;
    }
    if !lock_to_horizontal_plane {
        if keys.up {
            displacement += world_up * speed;
        }
        if keys.down {
            displacement -= world_up * speed;
        }
    }

    state.position += displacement;
}

/// Look direction projected onto the plane orthogonal to world up.
///
/// A front parallel to world up has no horizontal component; the heading then
/// falls back to yaw alone, which matches the projection for any pitch short of
/// vertical.
pub fn horizontal_front(state: &CameraState) -> glm::Vec3 {
    let world_up = state.world_up();
    let front = state.front();
    let flat = front - world_up * glm::dot(&front, &world_up);
    if glm::length(&flat) > 1e-6 {
        return glm::normalize(&flat);
    }

    let heading = view::look_direction(state.yaw, 0.0);
    let flat = heading - world_up * glm::dot(&heading, &world_up);
    if glm::length(&flat) > 1e-6 {
        glm::normalize(&flat)
    } else {
        // world up lies in the yaw plane; any direction orthogonal to it will do
        glm::normalize(&glm::cross(&world_up, &glm::vec3(0.0, 0.0, 1.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_eq(a: glm::Vec3, b: glm::Vec3) {
        assert!(glm::length(&(a - b)) < EPS, "{a:?} != {b:?}");
    }

    /// Deterministic xorshift stream for sweeping input sequences.
    struct Sequence(u64);

    impl Sequence {
        fn next(&mut self) -> f64 {
            self.0 ^= self.0 << 13;
            self.0 ^= self.0 >> 7;
            self.0 ^= self.0 << 17;
            (self.0 % 20_000) as f64 / 10.0 - 1000.0
        }
    }

    #[test]
    fn first_pointer_sample_is_discarded() {
        let mut state = CameraState::default();
        let mut tracking = PointerTracking::new();
        update_on_pointer_move(&mut state, &mut tracking, 640.0, 360.0, 0.1);
        assert_eq!(state.yaw, -90.0);
        assert_eq!(state.pitch, 0.0);
        assert!(!tracking.first_sample);
        assert_eq!((tracking.last_x, tracking.last_y), (640.0, 360.0));
    }

    #[test]
    fn pointer_delta_scales_by_sensitivity() {
        let mut state = CameraState::default();
        let mut tracking = PointerTracking::new();
        update_on_pointer_move(&mut state, &mut tracking, 100.0, 100.0, 0.1);
        update_on_pointer_move(&mut state, &mut tracking, 150.0, 80.0, 0.1);
        assert!((state.yaw - (-85.0)).abs() < EPS);
        assert!((state.pitch - (-2.0)).abs() < EPS);
        assert_eq!((tracking.last_x, tracking.last_y), (150.0, 80.0));
    }

    #[test]
    fn reseed_discards_reentry_jump() {
        let mut state = CameraState::default();
        let mut tracking = PointerTracking::new();
        update_on_pointer_move(&mut state, &mut tracking, 0.0, 0.0, 0.1);
        tracking.reseed();
        update_on_pointer_move(&mut state, &mut tracking, 5000.0, 5000.0, 0.1);
        assert_eq!(state.yaw, -90.0);
        assert_eq!(state.pitch, 0.0);
    }

    #[test]
    fn pitch_stays_clamped() {
        let mut state = CameraState::default();
        let mut tracking = PointerTracking::new();
        let mut seq = Sequence(0x9e37_79b9_7f4a_7c15);
        for _ in 0..2_000 {
            let (x, y) = (seq.next(), seq.next());
            update_on_pointer_move(&mut state, &mut tracking, x, y, 0.35);
            assert!(
                (-PITCH_LIMIT..=PITCH_LIMIT).contains(&state.pitch),
                "pitch={}",
                state.pitch
            );
        }
    }

    #[test]
    fn pitch_saturates_at_limit() {
        let mut state = CameraState::default();
        let mut tracking = PointerTracking::new();
        update_on_pointer_move(&mut state, &mut tracking, 0.0, 0.0, 1.0);
        update_on_pointer_move(&mut state, &mut tracking, 0.0, 10_000.0, 1.0);
        assert_eq!(state.pitch, PITCH_LIMIT);
        update_on_pointer_move(&mut state, &mut tracking, 0.0, -10_000.0, 1.0);
        assert_eq!(state.pitch, -PITCH_LIMIT);
    }

    #[test]
    fn fov_stays_clamped() {
        let mut state = CameraState::default();
        let mut seq = Sequence(42);
        for _ in 0..2_000 {
            update_on_scroll(&mut state, (seq.next() / 100.0) as f32, 1.0);
            assert!((FOV_MIN..=FOV_MAX).contains(&state.fov), "fov={}", state.fov);
        }
    }

    #[test]
    fn scroll_up_zooms_in() {
        let mut state = CameraState::default();
        update_on_scroll(&mut state, 2.0, 1.0);
        assert_eq!(state.fov, 43.0);
        update_on_scroll(&mut state, -10.0, 1.0);
        assert_eq!(state.fov, FOV_MAX);
        update_on_scroll(&mut state, 100.0, 1.0);
        assert_eq!(state.fov, FOV_MIN);
    }

    #[test]
    fn forward_moves_along_front_scaled_by_frame_time() {
        let mut state = CameraState::default();
        let keys = MovementKeys {
            forward: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 0.5, 2.5, false);
        assert_vec_eq(state.position, glm::vec3(0.0, 0.0, 3.0 - 1.25));
    }

    #[test]
    fn strafe_uses_right_vector() {
        let mut state = CameraState::default();
        let keys = MovementKeys {
            right: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 1.0, false);
        assert_vec_eq(state.position, glm::vec3(1.0, 0.0, 3.0));

        let keys = MovementKeys {
            left: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 1.0, false);
        assert_vec_eq(state.position, glm::vec3(0.0, 0.0, 3.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut state = CameraState::default();
        let keys = MovementKeys {
            forward: true,
            backward: true,
            left: true,
            right: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 3.0, false);
        assert_vec_eq(state.position, glm::vec3(0.0, 0.0, 3.0));
    }

    #[test]
    fn diagonal_is_not_normalized() {
        let mut state = CameraState::default();
        let keys = MovementKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 1.0, false);
        let travelled = glm::length(&(state.position - glm::vec3(0.0, 0.0, 3.0)));
        assert!((travelled - 2.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn free_flight_follows_pitch() {
        let mut state = CameraState::default();
        state.pitch = 45.0;
        let keys = MovementKeys {
            forward: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 1.0, false);
        assert!(state.position.y > 0.7);
    }

    #[test]
    fn horizontal_lock_keeps_height() {
        let mut state = CameraState::default();
        state.pitch = 60.0;
        let keys = MovementKeys {
            forward: true,
            up: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 2.0, true);
        assert!(state.position.y.abs() < EPS);
        assert_vec_eq(state.position, glm::vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn vertical_front_falls_back_to_yaw_heading() {
        let mut state = CameraState::default();
        state.pitch = 90.0;
        let flat = horizontal_front(&state);
        assert_vec_eq(flat, glm::vec3(0.0, 0.0, -1.0));

        let keys = MovementKeys {
            forward: true,
            right: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 1.0, 1.0, true);
        assert!(state.position.iter().all(|c| c.is_finite()));
        assert_vec_eq(state.position, glm::vec3(1.0, 0.0, 2.0));
    }

    #[test]
    fn vertical_keys_move_along_world_up() {
        let mut state = CameraState::default();
        let keys = MovementKeys {
            up: true,
            ..Default::default()
        };
        update_on_movement_keys(&mut state, &keys, 0.25, 4.0, false);
        assert_vec_eq(state.position, glm::vec3(0.0, 1.0, 3.0));
    }

    #[test]
    fn no_keys_no_motion() {
        let mut state = CameraState::default();
        update_on_movement_keys(&mut state, &MovementKeys::default(), 1.0, 100.0, false);
        assert_eq!(state.position, glm::vec3(0.0, 0.0, 3.0));
    }
}
