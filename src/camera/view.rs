use nalgebra_glm as glm;

/// Maximum absolute pitch in degrees. Keeps the look direction away from world up.
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view in degrees.
pub const FOV_MIN: f32 = 1.0;
/// Widest field of view in degrees.
pub const FOV_MAX: f32 = 45.0;

/// Converts yaw/pitch (degrees) into a unit look direction.
///
/// Yaw is measured from +X towards +Z, so `yaw = -90` looks down -Z.
pub fn look_direction(yaw: f32, pitch: f32) -> glm::Vec3 {
    let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
    glm::vec3(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
}

/// Builds the world-to-camera transform from an eye position and look direction.
///
/// `direction` must not be parallel to `world_up`; the pitch clamp guarantees this
/// for directions produced by [`look_direction`].
pub fn view_matrix(eye: &glm::Vec3, direction: &glm::Vec3, world_up: &glm::Vec3) -> glm::Mat4 {
    // camera looks down its local -Z
    let z_axis = -glm::normalize(direction);
    let side = glm::cross(world_up, &z_axis);
    debug_assert!(
        glm::length(&side) > f32::EPSILON,
        "look direction is parallel to world up"
    );
    let x_axis = glm::normalize(&side);
    let y_axis = glm::cross(&z_axis, &x_axis);

    #[rustfmt::skip]
    let rotation = glm::Mat4::new(
        x_axis.x, x_axis.y, x_axis.z, 0.0,
        y_axis.x, y_axis.y, y_axis.z, 0.0,
        z_axis.x, z_axis.y, z_axis.z, 0.0,
        0.0,      0.0,      0.0,      1.0,
    );

    rotation * glm::translation(&-eye)
}

/// Target-point form of [`view_matrix`].
pub fn look_at(eye: &glm::Vec3, target: &glm::Vec3, world_up: &glm::Vec3) -> glm::Mat4 {
    view_matrix(eye, &(target - eye), world_up)
}

/// Right-handed perspective projection with a vertical field of view in degrees.
pub fn projection_matrix(fov: f32, aspect: f32, near: f32, far: f32) -> glm::Mat4 {
    glm::perspective(aspect, fov.to_radians(), near, far)
}
