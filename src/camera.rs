use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_Y_DEGREES: f32 = 35.0;
pub const NEAR_PLANE: f32 = 1.0;
pub const FAR_PLANE: f32 = 100.0;
pub const INITIAL_POSITION: Vec3 = Vec3::new(10.0, 5.0, 10.0);

/// Perspective camera with a fixed vertical field of view and a look-at
/// target. The aspect ratio tracks the window and is the only parameter
/// touched on resize.
pub struct Camera {
    position: Vec3,
    target: Vec3,
    aspect: f32,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            position: INITIAL_POSITION,
            target: Vec3::ZERO,
            aspect,
            fov_y: DEFAULT_FOV_Y_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Updates the aspect ratio; the projection matrix is recomputed lazily
    /// so no further refresh step is needed.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_camera_matches_initial_placement() {
        let camera = Camera::new(16.0 / 9.0);

        assert_eq!(camera.position(), Vec3::new(10.0, 5.0, 10.0));
        assert_eq!(camera.target(), Vec3::ZERO);
        assert_relative_eq!(camera.aspect(), 16.0 / 9.0);
    }

    #[test]
    fn set_aspect_leaves_position_untouched() {
        let mut camera = Camera::new(1.0);
        let before = camera.position();

        camera.set_aspect(1920.0 / 1080.0);

        assert_eq!(camera.position(), before);
        assert_relative_eq!(camera.aspect(), 1920.0 / 1080.0);
    }

    #[test]
    fn forward_points_at_target() {
        let mut camera = Camera::new(1.0);
        camera.set_position(Vec3::new(0.0, 0.0, 10.0));
        camera.look_at(Vec3::ZERO);

        let forward = camera.forward();
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(forward.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn view_maps_target_onto_negative_z() {
        let camera = Camera::new(1.0);

        let target_view = camera.view().transform_point3(camera.target());

        // The look-at target sits straight ahead of the camera
        assert_relative_eq!(target_view.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(target_view.y, 0.0, epsilon = 1e-5);
        assert!(target_view.z < 0.0);
    }

    #[test]
    fn projection_uses_current_aspect() {
        let mut camera = Camera::new(2.0);
        let wide = camera.projection();

        camera.set_aspect(1.0);
        let square = camera.projection();

        // x scaling is fov/aspect dependent, y scaling is not
        assert_relative_eq!(wide.col(1).y, square.col(1).y, epsilon = 1e-6);
        assert_relative_eq!(wide.col(0).x * 2.0, square.col(0).x, epsilon = 1e-6);
    }
}
