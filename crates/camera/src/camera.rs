use glam::Vec3;

/// Step applied by one discrete speed increment or decrement.
pub const SPEED_STEP: f32 = 0.1;

/// Squared length below which a derived basis vector counts as degenerate.
const DEGENERATE_EPSILON: f32 = 1e-10;

/// Free-look camera flying over the terrain grid.
///
/// `gaze`, `up`, and `right` form a right-handed orthonormal basis. All
/// orientation changes go through [`Camera::rotate`], which restores the
/// basis after moving the gaze; callers must not assign the basis vectors
/// piecemeal.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    /// Eye position in world units.
    pub position: Vec3,
    /// Unit forward direction.
    pub gaze: Vec3,
    /// Unit up direction, orthogonal to gaze.
    pub up: Vec3,
    /// Unit right direction, derived from gaze and up.
    pub right: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Surface width / height.
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Forward travel per tick, in world units. Negative reverses travel.
    pub speed: f32,
}

impl Camera {
    /// Camera hovering above a terrain grid of the given pixel width,
    /// looking down the +Z grid axis.
    pub fn above_grid(grid_width: u32) -> Self {
        let w = grid_width as f32;
        let gaze = Vec3::new(0.0, 0.0, 1.0);
        let up = Vec3::new(0.0, 1.0, 0.0);
        Self {
            position: Vec3::new(w / 2.0, w / 10.0, -w / 4.0),
            gaze,
            up,
            right: (-gaze).cross(up).normalize(),
            fov_degrees: 45.0,
            aspect: 1.0,
            near: 0.1,
            far: 1000.0,
            speed: 0.0,
        }
    }

    /// Rotate the gaze by `angle_degrees` around the unit `axis`, then
    /// re-derive right and up so the basis stays orthonormal.
    ///
    /// If the rotation leaves gaze parallel to the hint used for the cross
    /// product, the re-derivation would normalize a zero-length vector. In
    /// that case the previous right/up are kept for this tick.
    pub fn rotate(&mut self, axis: Vec3, angle_degrees: f32) {
        self.gaze = rotate_axis_angle(self.gaze, axis, angle_degrees.to_radians()).normalize();

        let right = (-self.gaze).cross(self.up);
        if right.length_squared() < DEGENERATE_EPSILON {
            tracing::debug!("degenerate basis after rotate, keeping previous right/up");
            return;
        }
        self.right = right.normalize();
        self.up = (-self.right).cross(self.gaze).normalize();
    }

    /// Turn left/right around the current up vector.
    pub fn yaw(&mut self, angle_degrees: f32) {
        let axis = self.up;
        self.rotate(axis, angle_degrees);
    }

    /// Look up/down around the current right vector.
    pub fn pitch(&mut self, angle_degrees: f32) {
        let axis = self.right;
        self.rotate(axis, angle_degrees);
    }

    /// Advance along the gaze by `speed` per tick.
    pub fn translate(&mut self, delta_ticks: f32) {
        self.position += self.gaze * self.speed * delta_ticks;
    }

    pub fn speed_up(&mut self) {
        self.speed += SPEED_STEP;
    }

    pub fn speed_down(&mut self) {
        self.speed -= SPEED_STEP;
    }

    /// Recompute the aspect ratio from surface dimensions. Dimensions below
    /// one pixel are clamped so the division is always defined.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }
}

/// Rodrigues axis-angle rotation of `v` about the unit vector `axis`.
///
/// v' = v cos θ + (u × v) sin θ + u (u · v)(1 − cos θ)
fn rotate_axis_angle(v: Vec3, axis: Vec3, angle_radians: f32) -> Vec3 {
    let (sin, cos) = angle_radians.sin_cos();
    v * cos + axis.cross(v) * sin + axis * (axis.dot(v) * (1.0 - cos))
}
