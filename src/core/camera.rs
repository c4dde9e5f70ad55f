// Perspective camera and its pointer-follow easing.

use super::constants::*;
use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
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
    /// Camera at the start offset, aimed at the origin.
    pub fn new(aspect: f32) -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn look_at_origin(&mut self) {
        self.target = Vec3::ZERO;
    }

    /// Move the eye toward `goal` (x/y only) by the per-axis easing factors
    /// for a frame lasting `dt_sec`.
    pub fn ease_toward(&mut self, goal: [f32; 2], dt_sec: f32) {
        let fx = ease_factor(CAMERA_EASE_X, dt_sec);
        let fy = ease_factor(CAMERA_EASE_Y, dt_sec);
        self.eye.x += (goal[0] - self.eye.x) * fx;
        self.eye.y += (goal[1] - self.eye.y) * fy;
    }
}

/// Frame-rate independent easing factor.
///
/// `coeff` is the fraction of the remaining distance covered in one frame at
/// [`EASE_REFERENCE_HZ`]. The decay rate is `k = -ln(1 - coeff) * hz` and the
/// factor for a step of `dt_sec` is `1 - exp(-k * dt_sec)`.
#[inline]
pub fn ease_factor(coeff: f32, dt_sec: f32) -> f32 {
    let coeff = coeff.clamp(0.0, 1.0);
    if coeff >= 1.0 {
        return 1.0;
    }
    let k = -(1.0 - coeff).ln() * EASE_REFERENCE_HZ;
    1.0 - (-k * dt_sec.max(0.0)).exp()
}

/// Remaining distance after `frames` reference-rate frames starting from
/// `distance`.
#[cfg(test)]
pub fn remaining_after_frames(distance: f32, coeff: f32, frames: u32) -> f32 {
    distance * (1.0 - coeff).powi(frames as i32)
}

/// World-space point the camera eases toward for a pointer at `ndc`.
#[inline]
pub fn pointer_goal(ndc: [f32; 2]) -> [f32; 2] {
    [ndc[0] * POINTER_CAMERA_RANGE, ndc[1] * POINTER_CAMERA_RANGE]
}
