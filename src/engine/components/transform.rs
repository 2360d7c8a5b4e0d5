use crate::engine::utils::math::{
    mat4x4_identity, mat4x4_rotate, mat4x4_then_scale, mat4x4_then_translate, Mat4x4, Vec3,
    X_AXIS, Y_AXIS, Z_AXIS,
};
use serde::{ Deserialize, Serialize };

/// Per-model placement. Only the frame loop mutates these.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TransformParams {
    pub position: Vec3,
    /// Euler angles (radians) applied before the translation
    pub rotate_before: Vec3,
    /// Euler angles (radians) applied after the translation
    pub rotate_after: Vec3,
    pub scale: Vec3,
}

impl TransformParams {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    pub fn identity() -> Self {
        Self {
            position: [0.0; 3],
            rotate_before: [0.0; 3],
            rotate_after: [0.0; 3],
            scale: [1.0; 3],
        }
    }

    pub fn with_rotate_before(mut self, angles: Vec3) -> Self {
        self.rotate_before = angles;
        self
    }

    pub fn with_rotate_after(mut self, angles: Vec3) -> Self {
        self.rotate_after = angles;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Model matrix built on a running matrix, in this exact order:
    /// rotate_before (X, Y, Z), translate, rotate_after (X, Y, Z), scale.
    /// The steps do not commute; reordering them moves the model.
    pub fn model_matrix(&self) -> Mat4x4 {
        let mut m = mat4x4_identity();
        m = rotate_xyz(m, self.rotate_before);
        m = mat4x4_then_translate(m, self.position);
        m = rotate_xyz(m, self.rotate_after);
        mat4x4_then_scale(m, self.scale)
    }
}

impl Default for TransformParams {
    fn default() -> Self {
        Self::identity()
    }
}

fn rotate_xyz(m: Mat4x4, angles: Vec3) -> Mat4x4 {
    let m = mat4x4_rotate(m, angles[0], X_AXIS);
    let m = mat4x4_rotate(m, angles[1], Y_AXIS);
    mat4x4_rotate(m, angles[2], Z_AXIS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::utils::math::{
        mat4x4_mul, mat4x4_rot_x, mat4x4_rot_y, mat4x4_rot_z, mat4x4_scale, mat4x4_transform_point,
        mat4x4_translate,
    };
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn neutral_params_give_identity() {
        assert_eq!(TransformParams::identity().model_matrix(), mat4x4_identity());
    }

    #[test]
    fn matches_documented_composition() {
        let params = TransformParams::new([1.0, -2.0, 0.5])
            .with_rotate_before([0.1, 0.2, 0.3])
            .with_rotate_after([0.4, 0.5, 0.6])
            .with_scale([2.0, 3.0, 4.0]);

        let expected = [
            mat4x4_rot_x(0.1),
            mat4x4_rot_y(0.2),
            mat4x4_rot_z(0.3),
            mat4x4_translate(1.0, -2.0, 0.5),
            mat4x4_rot_x(0.4),
            mat4x4_rot_y(0.5),
            mat4x4_rot_z(0.6),
            mat4x4_scale(2.0, 3.0, 4.0),
        ]
        .into_iter()
        .fold(mat4x4_identity(), mat4x4_mul);

        assert_abs_diff_eq!(params.model_matrix().as_slice(), expected.as_slice(), epsilon = EPSILON);
    }

    #[test]
    fn rotate_before_orbits_the_translation() {
        // Quarter turn about Y before translating +X lands the origin on -Z.
        let params = TransformParams::new([1.0, 0.0, 0.0]).with_rotate_before([0.0, FRAC_PI_2, 0.0]);
        let origin = mat4x4_transform_point(&params.model_matrix(), [0.0; 3]);
        assert_abs_diff_eq!(origin.as_slice(), [0.0, 0.0, -1.0].as_slice(), epsilon = EPSILON);
    }

    #[test]
    fn rotate_after_spins_in_place() {
        let params = TransformParams::new([1.0, 0.0, 0.0]).with_rotate_after([0.0, FRAC_PI_2, 0.0]);
        let m = params.model_matrix();

        let origin = mat4x4_transform_point(&m, [0.0; 3]);
        assert_abs_diff_eq!(origin.as_slice(), [1.0, 0.0, 0.0].as_slice(), epsilon = EPSILON);

        let tip = mat4x4_transform_point(&m, [0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(tip.as_slice(), [2.0, 0.0, 0.0].as_slice(), epsilon = EPSILON);
    }

    #[test]
    fn swapping_steps_changes_result() {
        let before = TransformParams::new([0.0, 0.0, 3.0]).with_rotate_before([FRAC_PI_2, 0.0, 0.0]);
        let after = TransformParams::new([0.0, 0.0, 3.0]).with_rotate_after([FRAC_PI_2, 0.0, 0.0]);
        assert_ne!(before.model_matrix(), after.model_matrix());
    }

    #[test]
    fn scale_is_applied_closest_to_the_vertex() {
        let params = TransformParams::new([0.0, 1.0, 0.0]).with_scale([0.5, 0.5, 0.5]);
        let p = mat4x4_transform_point(&params.model_matrix(), [2.0, 2.0, 2.0]);
        assert_abs_diff_eq!(p.as_slice(), [1.0, 2.0, 1.0].as_slice(), epsilon = EPSILON);
    }
}
