use bytemuck::{Pod, Zeroable};
use nalgebra_glm as glm;

/// View and projection packed column-major, ready for a uniform buffer upload.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CameraUniform {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(view: &glm::Mat4, projection: &glm::Mat4) -> Self {
        Self {
            view: (*view).into(),
            projection: (*projection).into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_lands_in_last_column() {
        let view = glm::translation(&glm::vec3(1.0, 2.0, 3.0));
        let uniform = CameraUniform::new(&view, &glm::Mat4::identity());
        assert_eq!(uniform.view[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(uniform.projection[0], [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn byte_layout_is_two_mat4() {
        let uniform = CameraUniform::new(&glm::Mat4::identity(), &glm::Mat4::identity());
        let bytes = uniform.as_bytes();
        assert_eq!(bytes.len(), 2 * 16 * std::mem::size_of::<f32>());
        let first: f32 = bytemuck::pod_read_unaligned(&bytes[0..4]);
        assert_eq!(first, 1.0);
    }
}
