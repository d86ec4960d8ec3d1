use crate::Camera;
use glam::Mat4;

/// Matrix bundle derived from one camera snapshot.
///
/// Always rebuilt whole via [`ViewProjection::build`]; nothing here is
/// cached or patched between ticks.
#[derive(Debug, Clone, Copy)]
pub struct ViewProjection {
    pub view: Mat4,
    pub projection: Mat4,
    /// Equal to `view` — the terrain has no object transform.
    pub model_view: Mat4,
    /// Inverse-transpose of `model_view`, for direction vectors.
    pub normal: Mat4,
}

impl ViewProjection {
    /// Derive all matrices from the current camera state.
    pub fn build(camera: &Camera) -> Self {
        let view = Mat4::look_at_rh(
            camera.position,
            camera.position + camera.gaze,
            camera.up,
        );
        let projection = Mat4::perspective_rh(
            camera.fov_degrees.to_radians(),
            camera.aspect,
            camera.near,
            camera.far,
        );
        let model_view = view;
        let normal = model_view.inverse().transpose();
        Self {
            view,
            projection,
            model_view,
            normal,
        }
    }

    /// Combined model-view-projection matrix.
    pub fn mvp(&self) -> Mat4 {
        self.projection * self.model_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    const EPS: f32 = 1e-4;

    #[test]
    fn view_maps_camera_position_to_origin() {
        let mut cam = Camera::above_grid(100);
        cam.yaw(17.0);
        cam.pitch(-8.0);
        cam.speed_up();
        cam.translate(3.0);
        let vp = ViewProjection::build(&cam);
        let eye_in_view = vp.view.transform_point3(cam.position);
        assert!(eye_in_view.length() < EPS);
    }

    #[test]
    fn model_view_equals_view_for_identity_model() {
        let cam = Camera::above_grid(64);
        let vp = ViewProjection::build(&cam);
        assert_eq!(vp.model_view, vp.view);
    }

    #[test]
    fn normal_matrix_is_inverse_transpose() {
        let mut cam = Camera::above_grid(64);
        cam.yaw(25.0);
        let vp = ViewProjection::build(&cam);
        let expected = vp.model_view.inverse().transpose();
        assert!((vp.normal.col(0) - expected.col(0)).length() < EPS);
        assert!((vp.normal.col(3) - expected.col(3)).length() < EPS);
    }

    #[test]
    fn gaze_direction_maps_down_negative_z() {
        // Right-handed view space looks down -Z; a point one unit along the
        // gaze must land at z = -1.
        let cam = Camera::above_grid(100);
        let vp = ViewProjection::build(&cam);
        let ahead = vp.view.transform_point3(cam.position + cam.gaze);
        assert!((ahead - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);
    }

    #[test]
    fn matrices_contain_no_nan_after_rotation_burst() {
        let mut cam = Camera::above_grid(32);
        for _ in 0..200 {
            cam.yaw(3.0);
            cam.pitch(1.5);
        }
        let vp = ViewProjection::build(&cam);
        assert!(vp.mvp().is_finite());
    }
}
