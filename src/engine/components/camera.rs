use crate::engine::config::CameraConfig;
use crate::engine::utils::math::{ mat4x4_look_at, mat4x4_perspective, Mat4x4, Vec3, Y_AXIS };

/// Camera circling the origin at a fixed radius and height, always looking
/// at the origin with +Y up.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitCamera {
    angle: f32,
    radius: f32,
    height: f32,
    phase: f32,
    step: f32,
}

impl OrbitCamera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            angle: 0.0,
            radius: config.radius,
            height: config.height,
            phase: config.phase,
            step: config.step,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance the orbit by one frame's worth of rotation.
    pub fn advance(&mut self) {
        self.angle += self.step;
    }

    pub fn eye(&self) -> Vec3 {
        let a = self.angle + self.phase;
        [self.radius * a.cos(), self.height, self.radius * a.sin()]
    }

    pub fn view_matrix(&self) -> Mat4x4 {
        mat4x4_look_at(self.eye(), [0.0, 0.0, 0.0], Y_AXIS)
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fov_y_radians: f32,
    pub near: f32,
    pub far: f32,
}

impl Projection {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            fov_y_radians: config.fov_degrees.to_radians(),
            near: config.near,
            far: config.far,
        }
    }

    pub fn matrix(&self, aspect_ratio: f32) -> Mat4x4 {
        mat4x4_perspective(self.fov_y_radians, aspect_ratio, self.near, self.far)
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::utils::math::mat4x4_transform_point;
    use approx::{ assert_abs_diff_eq, assert_relative_eq };

    #[test]
    fn eye_starts_on_the_diagonal() {
        let camera = OrbitCamera::default();
        let eye = camera.eye();
        assert_relative_eq!(eye[0], 7.071_068, epsilon = 1e-4);
        assert_relative_eq!(eye[1], 5.0);
        assert_relative_eq!(eye[2], 7.071_068, epsilon = 1e-4);
    }

    #[test]
    fn advance_moves_angle_by_step() {
        let mut camera = OrbitCamera::default();
        camera.advance();
        camera.advance();
        assert_relative_eq!(camera.angle(), 0.08, epsilon = 1e-6);

        let eye = camera.eye();
        let a = 0.08 + std::f32::consts::FRAC_PI_4;
        assert_relative_eq!(eye[0], 10.0 * a.cos(), epsilon = 1e-4);
        assert_relative_eq!(eye[2], 10.0 * a.sin(), epsilon = 1e-4);
    }

    #[test]
    fn orbit_keeps_constant_radius_and_height() {
        let mut camera = OrbitCamera::default();
        for _ in 0..100 {
            camera.advance();
            let [x, y, z] = camera.eye();
            assert_relative_eq!((x * x + z * z).sqrt(), 10.0, epsilon = 1e-3);
            assert_eq!(y, 5.0);
        }
    }

    #[test]
    fn view_centres_the_origin() {
        let camera = OrbitCamera::default();
        let origin = mat4x4_transform_point(&camera.view_matrix(), [0.0; 3]);
        let distance = (100.0_f32 + 25.0).sqrt();
        assert_abs_diff_eq!(origin.as_slice(), [0.0, 0.0, -distance].as_slice(), epsilon = 1e-4);
    }

    #[test]
    fn projection_uses_fov_in_degrees_and_aspect() {
        let projection = Projection::default();
        assert_relative_eq!(projection.fov_y_radians, 57.0_f32.to_radians());

        let m = projection.matrix(800.0 / 600.0);
        let f = 1.0 / (57.0_f32.to_radians() / 2.0).tan();
        assert_relative_eq!(m[5], f, epsilon = 1e-5);
        assert_relative_eq!(m[0], f / (800.0 / 600.0), epsilon = 1e-5);
    }
}
