//! Visible-window derivation in tree space
//!
//! The culler answers one question for label placement: which axis-aligned
//! rectangle of tree space is on screen right now. It depends on the live
//! camera depth, so it is recomputed every frame. It gates labels only;
//! geometry draws are never culled by it.

use crate::foundation::math::Vec4;
use crate::render::frame::WorldTransform;
use crate::render::primitives::Camera;

/// Axis-aligned visible rectangle in tree-space coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleBounds {
    /// Left edge
    pub min_x: f32,
    /// Right edge
    pub max_x: f32,
    /// Bottom edge
    pub min_y: f32,
    /// Top edge
    pub max_y: f32,
}

impl VisibleBounds {
    /// Derive the visible rectangle from camera depth and world transform
    ///
    /// The viewing depth is the camera's z position plus the world
    /// transform's depth translation. Two reference corners are placed on
    /// the layout plane, top-left at (-depth, depth) and bottom-right at
    /// (depth, -bottom_slope * depth), and mapped through the xy world
    /// component into tree space. Taking per-axis min/max of the mapped
    /// corners keeps the rectangle well-formed even when the xy component
    /// mirrors an axis.
    pub fn compute(camera: &Camera, world: &WorldTransform) -> Self {
        let depth = camera.position.z + world.z_translation();

        let top_left = world.xy * Vec4::new(-depth, depth, 0.0, 1.0);
        let bottom = -camera.bottom_slope * depth;
        let bottom_right = world.xy * Vec4::new(depth, bottom, 0.0, 1.0);

        Self {
            min_x: top_left.x.min(bottom_right.x),
            max_x: top_left.x.max(bottom_right.x),
            min_y: top_left.y.min(bottom_right.y),
            max_y: top_left.y.max(bottom_right.y),
        }
    }

    /// Whether a tree-space point lies inside the rectangle (edges included)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.min_x <= x && x <= self.max_x && self.min_y <= y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn camera_at_depth(depth: f32, bottom_slope: f32) -> Camera {
        Camera::new(
            Vec3::new(0.0, 0.0, depth),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
            bottom_slope,
        )
    }

    #[test]
    fn bounds_are_ordered_for_positive_depth() {
        for depth in [0.5, 1.0, 3.0, 20.0] {
            for slope in [0.25, 0.5, 1.0] {
                let bounds =
                    VisibleBounds::compute(&camera_at_depth(depth, slope), &WorldTransform::identity());
                assert!(bounds.min_x <= bounds.max_x);
                assert!(bounds.min_y <= bounds.max_y);
            }
        }
    }

    #[test]
    fn identity_world_gives_the_raw_window() {
        let bounds = VisibleBounds::compute(&camera_at_depth(2.0, 0.5), &WorldTransform::identity());
        assert_relative_eq!(bounds.min_x, -2.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.max_x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(bounds.min_y, -1.0, epsilon = 1e-6); // -slope * depth
        assert_relative_eq!(bounds.max_y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn world_depth_translation_widens_the_window() {
        let mut world = WorldTransform::identity();
        world.z[(2, 3)] = 1.0;

        let near = VisibleBounds::compute(&camera_at_depth(2.0, 1.0), &WorldTransform::identity());
        let far = VisibleBounds::compute(&camera_at_depth(2.0, 1.0), &world);
        assert!(far.max_x > near.max_x);
    }

    #[test]
    fn mirrored_xy_component_still_yields_ordered_bounds() {
        let mut world = WorldTransform::identity();
        world.xy[(0, 0)] = -1.0; // mirror x

        let bounds = VisibleBounds::compute(&camera_at_depth(2.0, 1.0), &world);
        assert!(bounds.min_x <= bounds.max_x);
        assert!(bounds.contains(0.0, 0.0));
    }

    #[test]
    fn containment_includes_the_edges() {
        let bounds = VisibleBounds::compute(&camera_at_depth(1.0, 1.0), &WorldTransform::identity());
        assert!(bounds.contains(bounds.min_x, bounds.min_y));
        assert!(bounds.contains(bounds.max_x, bounds.max_y));
        assert!(!bounds.contains(bounds.max_x + 0.01, 0.0));
    }
}
