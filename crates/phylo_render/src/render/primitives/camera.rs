//! Virtual camera for the tree viewport
//!
//! The camera hovers over the 2D tree layout in 3D scene space: zooming is
//! movement along +Z, panning is movement in X/Y. An input-handling
//! collaborator mutates the camera between frames; during a frame the
//! render core reads it through the immutable frame context.

use crate::foundation::math::{Mat4, Mat4Ext, Vec3, Vec4};
use crate::render::frame::WorldTransform;

/// Virtual camera state
///
/// Position and look direction are expressed in tree layout space and are
/// carried into scene space through the world transform when the view
/// matrix is built, so input code can reason in layout units.
///
/// # Preconditions
/// The up vector must not be parallel to the look direction. A parallel
/// pair yields a degenerate (non-invertible) view transform; upstream input
/// validation prevents it, the camera does not recover from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position
    pub position: Vec3,

    /// Point the camera looks at
    pub look_dir: Vec3,

    /// Up vector for camera orientation (typically [0, 1, 0])
    pub up: Vec3,

    /// Slope of the visible frustum's lower edge
    ///
    /// 1.0 is a symmetric frustum; values below 1.0 pull the bottom of the
    /// visible window upward, which keeps labels clear of UI chrome along
    /// the lower screen edge.
    pub bottom_slope: f32,
}

impl Camera {
    /// Create a camera from explicit state
    pub fn new(position: Vec3, look_dir: Vec3, up: Vec3, bottom_slope: f32) -> Self {
        Self {
            position,
            look_dir,
            up,
            bottom_slope,
        }
    }

    /// Update camera position
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        log::trace!("Camera position updated to: {:?}", position);
    }

    /// Update the look target
    pub fn set_look_dir(&mut self, look_dir: Vec3) {
        self.look_dir = look_dir;
        log::trace!("Camera look target updated to: {:?}", look_dir);
    }

    /// Update the lower frustum slope
    pub fn set_bottom_slope(&mut self, bottom_slope: f32) {
        self.bottom_slope = bottom_slope;
        log::trace!("Camera bottom slope updated to: {}", bottom_slope);
    }

    /// Build the view transform for the current camera and world state
    ///
    /// The camera position is carried through the full world transform
    /// (xy component, then z component); the look target is carried through
    /// the xy component only, which keeps the camera aimed at the layout
    /// plane regardless of the scene's depth offset. The up vector is used
    /// untransformed.
    ///
    /// Recomputed every frame; never cached across frames.
    pub fn view_transform(&self, world: &WorldTransform) -> Mat4 {
        let position = Vec4::new(self.position.x, self.position.y, self.position.z, 1.0);
        let position = world.z * (world.xy * position);

        let target = Vec4::new(self.look_dir.x, self.look_dir.y, self.look_dir.z, 1.0);
        let target = world.xy * target;

        Mat4::look_at(
            Vec3::new(position.x, position.y, position.z),
            Vec3::new(target.x, target.y, target.z),
            self.up,
        )
    }
}

impl Default for Camera {
    /// Camera centered over the layout origin
    ///
    /// Positioned two units above the layout plane looking straight down
    /// the -Z axis at the origin, Y up, symmetric frustum.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 2.0),
            look_dir: Vec3::zeros(),
            up: Vec3::new(0.0, 1.0, 0.0),
            bottom_slope: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn view_rotation_is_orthonormal_for_valid_basis() {
        let camera = Camera::new(
            Vec3::new(0.3, -0.8, 2.5),
            Vec3::new(0.1, 0.2, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            1.0,
        );
        let view = camera.view_transform(&WorldTransform::identity());

        let rows = [
            Vec3::new(view[(0, 0)], view[(0, 1)], view[(0, 2)]),
            Vec3::new(view[(1, 0)], view[(1, 1)], view[(1, 2)]),
            Vec3::new(view[(2, 0)], view[(2, 1)], view[(2, 2)]),
        ];
        for row in &rows {
            assert_relative_eq!(row.norm(), 1.0, epsilon = 1e-5);
        }
        assert_relative_eq!(rows[0].dot(&rows[1]), 0.0, epsilon = 1e-5);
        assert_relative_eq!(rows[1].dot(&rows[2]), 0.0, epsilon = 1e-5);
        assert_relative_eq!(rows[0].dot(&rows[2]), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn world_depth_offset_moves_the_camera_not_the_target() {
        let camera = Camera::default();
        let mut world = WorldTransform::identity();
        world.z[(2, 3)] = -0.5;

        let view = camera.view_transform(&world);
        // Camera sits at z = 2 - 0.5 = 1.5 in scene space looking at the
        // origin, so the origin lands 1.5 units down the view -Z axis.
        let origin = view * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(origin.z, -1.5, epsilon = 1e-5);
    }
}
