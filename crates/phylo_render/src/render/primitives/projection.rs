//! Perspective projection built from a four-sided field of view
//!
//! The projection is a validated value: constructing one checks the near
//! and far planes and each half-angle once, so per-frame matrix rebuilds
//! never need to re-validate or fail.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{Mat4, Mat4Ext};
use crate::render::RenderError;

/// Field of view as four independent half-angles, in degrees
///
/// Independent angles allow asymmetric frustums, e.g. a wider view above
/// the center line than below it. Each angle must lie strictly between 0
/// and 90 degrees; [`Projection::new`] enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldOfView {
    /// Half-angle above the view center line
    pub up_degrees: f32,
    /// Half-angle below the view center line
    pub down_degrees: f32,
    /// Half-angle left of the view center line
    pub left_degrees: f32,
    /// Half-angle right of the view center line
    pub right_degrees: f32,
}

impl FieldOfView {
    /// A symmetric field of view with the same half-angle on all four sides
    pub fn symmetric(half_angle_degrees: f32) -> Self {
        Self {
            up_degrees: half_angle_degrees,
            down_degrees: half_angle_degrees,
            left_degrees: half_angle_degrees,
            right_degrees: half_angle_degrees,
        }
    }
}

impl Default for FieldOfView {
    /// Symmetric 45-degree half-angles (a 90-degree total field of view)
    fn default() -> Self {
        Self::symmetric(45.0)
    }
}

/// A validated perspective projection
///
/// Holds the field of view and clip planes after construction-time checks;
/// [`matrix`](Self::matrix) then builds the clip transform without any
/// failure path. Invalid configuration is rejected here, never mid-frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov: FieldOfView,
    near: f32,
    far: f32,
}

impl Projection {
    /// Validate and build a projection
    ///
    /// # Errors
    /// [`RenderError::InvalidProjection`] when `near` is not strictly
    /// positive, `far` does not exceed `near`, or any half-angle falls
    /// outside the open interval (0, 90) degrees.
    pub fn new(fov: FieldOfView, near: f32, far: f32) -> Result<Self, RenderError> {
        if !near.is_finite() || near <= 0.0 {
            return Err(RenderError::InvalidProjection(format!(
                "near plane must be strictly positive, got {near}"
            )));
        }
        if !far.is_finite() || far <= near {
            return Err(RenderError::InvalidProjection(format!(
                "far plane must exceed the near plane, got near {near}, far {far}"
            )));
        }
        for (side, angle) in [
            ("up", fov.up_degrees),
            ("down", fov.down_degrees),
            ("left", fov.left_degrees),
            ("right", fov.right_degrees),
        ] {
            if !angle.is_finite() || angle <= 0.0 || angle >= 90.0 {
                return Err(RenderError::InvalidProjection(format!(
                    "{side} half-angle must lie in (0, 90) degrees, got {angle}"
                )));
            }
        }
        Ok(Self { fov, near, far })
    }

    /// The validated field of view
    pub fn field_of_view(&self) -> FieldOfView {
        self.fov
    }

    /// Near clip plane distance
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clip plane distance
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Build the projection matrix
    ///
    /// Infallible: every parameter was validated at construction.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_from_field_of_view(
            self.fov.up_degrees,
            self.fov.down_degrees,
            self.fov.left_degrees,
            self.fov.right_degrees,
            self.near,
            self.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_default_configuration() {
        let projection = Projection::new(FieldOfView::default(), 0.1, 10.0).unwrap();
        assert_eq!(projection.near(), 0.1);
        assert_eq!(projection.far(), 10.0);
    }

    #[test]
    fn rejects_non_positive_near() {
        assert!(Projection::new(FieldOfView::default(), 0.0, 10.0).is_err());
        assert!(Projection::new(FieldOfView::default(), -0.1, 10.0).is_err());
    }

    #[test]
    fn rejects_far_not_beyond_near() {
        assert!(Projection::new(FieldOfView::default(), 0.1, 0.1).is_err());
        assert!(Projection::new(FieldOfView::default(), 0.1, -10.0).is_err());
    }

    #[test]
    fn rejects_degenerate_half_angles() {
        let mut fov = FieldOfView::default();
        fov.down_degrees = 0.0;
        assert!(Projection::new(fov, 0.1, 10.0).is_err());

        let mut fov = FieldOfView::default();
        fov.left_degrees = 90.0;
        assert!(Projection::new(fov, 0.1, 10.0).is_err());
    }

    #[test]
    fn matrix_uses_the_validated_planes() {
        let projection = Projection::new(FieldOfView::symmetric(45.0), 0.1, 10.0).unwrap();
        let m = projection.matrix();
        // w = -z_view so points in front of the camera divide positively
        assert_eq!(m[(3, 2)], -1.0);
        assert!(m[(2, 2)] < 0.0);
    }
}
