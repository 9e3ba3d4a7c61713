//! Camera: normalized-space ↔ screen-space mapping.
//!
//! The camera stores two transforms. `shift` is a translation in screen pixels,
//! `zoom` is a uniform scale about the screen center. The full mapping applies,
//! in order: screen-size scale, `shift`, move the screen center to the origin,
//! `zoom`, move the origin back to the screen center.
//!
//! Code cross-refs: `geom2::compose` (last transform applied first),
//! `interaction::Session` (sole owner).

use crate::geom2::{
    apply_vector, compose, invert, scale, scale_xy, translate, Mat3, TransformError, Vec2,
};

/// Which screen point stays fixed under wheel zoom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ZoomAnchor {
    /// Zoom about the screen center.
    Center,
    /// Zoom about the pointer position.
    #[default]
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub zoom: Mat3,
    pub shift: Mat3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: scale(1.0),
            shift: Mat3::identity(),
        }
    }
}

/// `x ↦ zoom·(x − c) + c` with `c` the screen center.
fn view_about_center(zoom: &Mat3, screen_size: Vec2) -> Mat3 {
    let half = screen_size / 2.0;
    compose(&[translate(half), *zoom, translate(-half)])
}

impl Camera {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Normalized → screen.
    pub fn norm_to_screen(&self, screen_size: Vec2) -> Mat3 {
        compose(&[
            view_about_center(&self.zoom, screen_size),
            self.shift,
            scale_xy(screen_size),
        ])
    }

    /// Screen → normalized. Fails if the camera has collapsed (e.g. zero screen size).
    pub fn screen_to_norm(&self, screen_size: Vec2) -> Result<Mat3, TransformError> {
        invert(&self.norm_to_screen(screen_size))
    }

    /// Pan by a pointer movement given in screen pixels.
    ///
    /// The delta is mapped through the inverse zoom, so the content follows the
    /// pointer at any zoom level.
    pub fn pan(&mut self, delta: Vec2) -> Result<(), TransformError> {
        let d = apply_vector(&invert(&self.zoom)?, delta);
        self.shift = compose(&[translate(d), self.shift]);
        Ok(())
    }

    /// Apply a wheel step. `alpha = exp(-delta_y / zoom_speed)`.
    pub fn zoom_at(
        &mut self,
        delta_y: f64,
        pointer: Vec2,
        screen_size: Vec2,
        zoom_speed: f64,
        anchor: ZoomAnchor,
    ) -> Result<(), TransformError> {
        let alpha = (-delta_y / zoom_speed).exp();
        let zoom = compose(&[scale(alpha), self.zoom]);
        // Reject steps that collapse or blow up the zoom (exp under/overflow).
        invert(&zoom)?;
        match anchor {
            ZoomAnchor::Center => {
                self.zoom = zoom;
            }
            ZoomAnchor::Pointer => {
                // New combined map must equal `T(p)·S(alpha)·T(-p)·M`. Keep the
                // zoom/shift split by absorbing the residual into `shift`.
                let anchored = compose(&[translate(pointer), scale(alpha), translate(-pointer)]);
                let view = view_about_center(&self.zoom, screen_size);
                let view_next = view_about_center(&zoom, screen_size);
                let shift = compose(&[invert(&view_next)?, anchored, view, self.shift]);
                self.zoom = zoom;
                self.shift = shift;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom2::apply2;
    use nalgebra::vector;

    fn screen() -> Vec2 {
        vector![1200.0, 700.0]
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).norm() < 1e-9
    }

    #[test]
    fn default_maps_unit_square_to_screen() {
        let m = Camera::default().norm_to_screen(screen());
        assert!(close(apply2(&m, vector![0.0, 0.0]), vector![0.0, 0.0]));
        assert!(close(apply2(&m, vector![1.0, 1.0]), vector![1200.0, 700.0]));
        assert!(close(apply2(&m, vector![0.5, 0.5]), vector![600.0, 350.0]));
    }

    #[test]
    fn screen_to_norm_inverts() {
        let mut cam = Camera::default();
        cam.pan(vector![30.0, -12.0]).unwrap();
        cam.zoom_at(-250.0, vector![100.0, 80.0], screen(), 1000.0, ZoomAnchor::Pointer).unwrap();
        let fwd = cam.norm_to_screen(screen());
        let inv = cam.screen_to_norm(screen()).unwrap();
        let p = vector![0.3, 0.8];
        assert!(close(apply2(&inv, apply2(&fwd, p)), p));
    }

    #[test]
    fn zero_screen_is_singular() {
        let cam = Camera::default();
        assert!(cam.screen_to_norm(vector![0.0, 700.0]).is_err());
    }

    #[test]
    fn pan_moves_content_by_screen_delta() {
        for alpha_step in [0.0, -500.0, 700.0] {
            let mut cam = Camera::default();
            cam.zoom_at(alpha_step, vector![0.0, 0.0], screen(), 1000.0, ZoomAnchor::Center)
                .unwrap();
            let p = vector![0.2, 0.6];
            let before = apply2(&cam.norm_to_screen(screen()), p);
            cam.pan(vector![15.0, -40.0]).unwrap();
            let after = apply2(&cam.norm_to_screen(screen()), p);
            assert!(close(after - before, vector![15.0, -40.0]));
        }
    }

    #[test]
    fn center_zoom_fixes_screen_center() {
        let mut cam = Camera::default();
        cam.zoom_at(-400.0, vector![10.0, 10.0], screen(), 1000.0, ZoomAnchor::Center).unwrap();
        let m = cam.norm_to_screen(screen());
        assert!(close(apply2(&m, vector![0.5, 0.5]), vector![600.0, 350.0]));
        let corner = apply2(&m, vector![1.0, 1.0]);
        let alpha = 0.4f64.exp();
        assert!(close(corner, vector![600.0 + 600.0 * alpha, 350.0 + 350.0 * alpha]));
    }

    #[test]
    fn pointer_zoom_fixes_pointer() {
        let mut cam = Camera::default();
        cam.pan(vector![-50.0, 20.0]).unwrap();
        let pointer = vector![321.0, 123.0];
        let under = apply2(&cam.screen_to_norm(screen()).unwrap(), pointer);
        cam.zoom_at(-300.0, pointer, screen(), 1000.0, ZoomAnchor::Pointer).unwrap();
        cam.zoom_at(120.0, pointer, screen(), 1000.0, ZoomAnchor::Pointer).unwrap();
        let m = cam.norm_to_screen(screen());
        assert!(close(apply2(&m, under), pointer));
        let expected = scale(0.18f64.exp());
        assert!((cam.zoom - expected).abs().max() < 1e-12);
    }

    #[test]
    fn extreme_wheel_steps_are_rejected() {
        for anchor in [ZoomAnchor::Center, ZoomAnchor::Pointer] {
            let mut cam = Camera::default();
            cam.pan(vector![12.0, -3.0]).unwrap();
            let before = cam;
            for delta_y in [1e6, -1e6] {
                let res = cam.zoom_at(delta_y, vector![50.0, 60.0], screen(), 1000.0, anchor);
                assert!(matches!(res, Err(TransformError::SingularTransform { .. })));
                assert_eq!(cam, before);
            }
            // still usable afterwards
            cam.zoom_at(-100.0, vector![50.0, 60.0], screen(), 1000.0, anchor).unwrap();
            assert!(cam.screen_to_norm(screen()).is_ok());
            assert!(cam.norm_to_screen(screen()).iter().all(|x| x.is_finite()));
        }
    }

    #[test]
    fn zero_wheel_delta_changes_nothing() {
        let mut cam = Camera::default();
        cam.pan(vector![5.0, 5.0]).unwrap();
        let before = cam.norm_to_screen(screen());
        let zoom_before = cam.zoom;
        for anchor in [ZoomAnchor::Center, ZoomAnchor::Pointer] {
            cam.zoom_at(0.0, vector![77.0, 500.0], screen(), 1000.0, anchor).unwrap();
        }
        assert_eq!(cam.zoom, zoom_before);
        assert!((cam.norm_to_screen(screen()) - before).abs().max() < 1e-9);
    }
}
