//! Camera system for the 3D scene

use egui::{Pos2, Rect};
use glam::{Mat4, Quat, Vec3, Vec4Swizzles};

pub const MIN_DISTANCE: f32 = 40.0;
pub const MAX_DISTANCE: f32 = 80.0;

/// A world point mapped into a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub pos: Pos2,
    /// Distance along the view axis
    pub depth: f32,
}

/// Orbit camera with zoom only; rotation and target stay fixed
pub struct Camera {
    pub distance: f32,
    pub rotation: Quat,
    pub target: Vec3,
    pub aspect: f32,
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn new(width: f32, height: f32) -> Self {
        let eye = Vec3::new(0.0, 15.0, 50.0);

        Self {
            distance: eye.length(),
            // Tilts the local +Z axis up onto `eye`
            rotation: Quat::from_rotation_x(-eye.y.atan2(eye.z)),
            target: Vec3::ZERO,
            aspect: width / height.max(1.0),
            fovy: 60.0_f32.to_radians(),
            znear: 0.1,
            zfar: 1000.0,
        }
    }

    pub fn position(&self) -> Vec3 {
        let offset = self.rotation * Vec3::new(0.0, 0.0, self.distance);
        self.target + offset
    }

    pub fn zoom(&mut self, delta: f32) {
        let requested = self.distance + delta;
        self.distance = requested.clamp(MIN_DISTANCE, MAX_DISTANCE);
        if self.distance != requested {
            log::trace!("zoom clamped: {requested:.1} -> {:.1}", self.distance);
        }
    }

    pub fn build_view_projection_matrix(&self) -> Mat4 {
        let position = self.position();
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-position);
        let view = rotation_matrix * translation_matrix;
        let proj = Mat4::perspective_rh(self.fovy, self.aspect, self.znear, self.zfar);
        proj * view
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Map a world point into `viewport`; `None` behind the camera
    pub fn project(&self, world: Vec3, viewport: Rect) -> Option<Projected> {
        self.project_with(&self.build_view_projection_matrix(), world, viewport)
    }

    /// Like [`Camera::project`] with a precomputed view-projection matrix
    pub fn project_with(&self, view_proj: &Mat4, world: Vec3, viewport: Rect) -> Option<Projected> {
        let clip = *view_proj * world.extend(1.0);
        if clip.w <= self.znear {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        let x = viewport.left() + (ndc.x + 1.0) * 0.5 * viewport.width();
        let y = viewport.top() + (1.0 - ndc.y) * 0.5 * viewport.height();

        Some(Projected {
            pos: Pos2::new(x, y),
            depth: clip.w,
        })
    }

    /// Screen size in pixels of one world unit at `depth`
    pub fn pixels_per_unit(&self, depth: f32, viewport_height: f32) -> f32 {
        viewport_height / (2.0 * (self.fovy * 0.5).tan() * depth.max(self.znear))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Rect {
        Rect::from_min_size(Pos2::new(100.0, 50.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn test_initial_position() {
        let camera = Camera::new(800.0, 600.0);
        let position = camera.position();
        assert!((position - Vec3::new(0.0, 15.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = Camera::new(800.0, 600.0);
        camera.zoom(-100.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = Camera::new(800.0, 600.0);
        let projected = camera.project(Vec3::ZERO, viewport()).expect("in front");
        assert!((projected.pos.x - 500.0).abs() < 1e-3);
        assert!((projected.pos.y - 350.0).abs() < 1e-3);
        assert!((projected.depth - camera.distance).abs() < 1e-3);
    }

    #[test]
    fn test_up_is_up_on_screen() {
        let camera = Camera::new(800.0, 600.0);
        let low = camera.project(Vec3::ZERO, viewport()).expect("in front");
        let high = camera.project(Vec3::Y * 10.0, viewport()).expect("in front");
        assert!(high.pos.y < low.pos.y);
    }

    #[test]
    fn test_behind_camera_is_culled() {
        let camera = Camera::new(800.0, 600.0);
        assert!(camera.project(Vec3::new(0.0, 15.0, 80.0), viewport()).is_none());
    }
}
