use glam::{Mat4, Vec3};

/// Smallest polar angle the orbit may reach; keeps `up` from flipping.
const POLAR_EPSILON: f32 = 1e-3;

/// Right-handed perspective camera.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(distance: f32, fovy_degrees: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: fovy_degrees.to_radians(),
            znear,
            zfar,
        }
    }

    /// Recompute the aspect ratio for a new viewport; zero sizes are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        let aspect = width as f32 / height as f32;
        let changed = aspect != self.aspect;
        self.aspect = aspect;
        changed
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Orbit camera rig with inertia.
///
/// Pointer drags and wheel steps queue spherical deltas; `update` applies a
/// `damping_factor` share of the pending rotation each frame and decays the
/// rest, so the view keeps gliding after the pointer is released.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub damping_factor: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    azimuth: f32,
    polar: f32,
    radius: f32,
    pending_azimuth: f32,
    pending_polar: f32,
    pending_scale: f32,
}

impl OrbitControls {
    /// Start from an eye position looking at `target`.
    pub fn from_eye(eye: Vec3, target: Vec3, damping_factor: f32) -> Self {
        let offset = eye - target;
        let radius = offset.length().max(f32::EPSILON);
        Self {
            target,
            damping_factor: damping_factor.clamp(0.0, 1.0),
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            azimuth: offset.x.atan2(offset.z),
            polar: (offset.y / radius).clamp(-1.0, 1.0).acos(),
            radius,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
            pending_scale: 1.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Queue a drag of `dx`, `dy` pixels; a drag across the full viewport
    /// height turns the camera once around.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.pending_azimuth -= std::f32::consts::TAU * dx / h;
        self.pending_polar -= std::f32::consts::TAU * dy / h;
    }

    /// Queue a dolly step; positive wheel deltas move away from the target.
    pub fn zoom_by_wheel(&mut self, delta_y: f32, step_scale: f32) {
        if delta_y > 0.0 {
            self.pending_scale /= step_scale;
        } else if delta_y < 0.0 {
            self.pending_scale *= step_scale;
        }
    }

    /// Apply pending motion and return the new eye position.
    pub fn update(&mut self) -> Vec3 {
        let share = if self.damping_factor > 0.0 {
            self.damping_factor
        } else {
            1.0
        };
        self.azimuth += self.pending_azimuth * share;
        self.polar += self.pending_polar * share;
        self.polar = self
            .polar
            .clamp(POLAR_EPSILON, std::f32::consts::PI - POLAR_EPSILON);
        self.radius = (self.radius * self.pending_scale).clamp(self.min_distance, self.max_distance);
        self.pending_scale = 1.0;

        if self.damping_factor > 0.0 {
            self.pending_azimuth *= 1.0 - self.damping_factor;
            self.pending_polar *= 1.0 - self.damping_factor;
        } else {
            self.pending_azimuth = 0.0;
            self.pending_polar = 0.0;
        }
        self.eye()
    }

    pub fn eye(&self) -> Vec3 {
        let sin_polar = self.polar.sin();
        self.target
            + Vec3::new(
                self.radius * sin_polar * self.azimuth.sin(),
                self.radius * self.polar.cos(),
                self.radius * sin_polar * self.azimuth.cos(),
            )
    }

    /// Point `camera` at the orbit's current eye and target.
    pub fn apply_to(&self, camera: &mut Camera) {
        camera.eye = self.eye();
        camera.target = self.target;
    }
}
