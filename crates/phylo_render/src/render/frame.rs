//! Per-frame context and transform set
//!
//! Everything the pipeline reads during a frame is snapshotted here by the
//! frame driver and passed down by shared reference, so no stage reaches
//! for hidden shared state. The transform set is rebuilt from the snapshot
//! every frame and never cached across frames.

use crate::foundation::math::Mat4;
use crate::render::primitives::{Camera, Projection};

/// World transform mapping the tree layout into 3D scene space
///
/// Split into an xy component (layout-plane fit: scale and translation in
/// x/y) and a z component (depth placement of the layout plane). The split
/// matters: camera aiming and viewport culling use the components
/// individually, while geometry uses the composition.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldTransform {
    /// Layout-plane component
    pub xy: Mat4,
    /// Depth component
    pub z: Mat4,
}

impl WorldTransform {
    /// Identity world transform, leaving tree space equal to scene space
    pub fn identity() -> Self {
        Self {
            xy: Mat4::identity(),
            z: Mat4::identity(),
        }
    }

    /// Full world matrix: the xy component applied first, then the z one
    pub fn composed(&self) -> Mat4 {
        self.z * self.xy
    }

    /// Depth translation term of the z component
    ///
    /// Added to the camera's z position to obtain the viewing depth that
    /// sizes the visible window.
    pub fn z_translation(&self) -> f32 {
        self.z[(2, 3)]
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Read-only per-frame snapshot of the mutable collaborator state
///
/// Owned by the frame driver, built once per frame from the live camera and
/// world state, then passed by reference into culling, placement, and
/// dispatch. Within a frame nothing here changes.
#[derive(Debug, Clone)]
pub struct FrameContext {
    /// Camera state for this frame
    pub camera: Camera,
    /// World transform for this frame
    pub world: WorldTransform,
    /// Canvas width in pixels
    pub canvas_width: u32,
    /// Canvas height in pixels
    pub canvas_height: u32,
}

impl FrameContext {
    /// Snapshot the given state for one frame
    pub fn new(camera: Camera, world: WorldTransform, canvas_width: u32, canvas_height: u32) -> Self {
        Self {
            camera,
            world,
            canvas_width,
            canvas_height,
        }
    }
}

/// The transform set for one frame
///
/// View and projection matrices plus their composition with the world
/// transform. Rebuilt in full before any draw or label projection in the
/// same frame so every consumer shares one coherent set.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTransforms {
    /// View matrix from the camera model
    pub view: Mat4,
    /// Projection matrix from the validated projection
    pub projection: Mat4,
    /// Composed camera transform: projection * view * world
    pub camera_to_clip: Mat4,
}

impl FrameTransforms {
    /// Recompute the full transform set for this frame
    pub fn compute(ctx: &FrameContext, projection: &Projection) -> Self {
        let view = ctx.camera.view_transform(&ctx.world);
        let projection = projection.matrix();
        let camera_to_clip = projection * view * ctx.world.composed();
        Self {
            view,
            projection,
            camera_to_clip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Vec3, Vec4};
    use crate::render::primitives::FieldOfView;
    use approx::assert_relative_eq;

    fn centered_context(canvas: (u32, u32)) -> FrameContext {
        let camera = Camera::new(
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
            1.0,
        );
        FrameContext::new(camera, WorldTransform::identity(), canvas.0, canvas.1)
    }

    #[test]
    fn view_center_point_lands_on_the_ndc_origin() {
        let ctx = centered_context((800, 600));
        let projection = Projection::new(FieldOfView::default(), 0.1, 10.0).unwrap();
        let transforms = FrameTransforms::compute(&ctx, &projection);

        let clip = transforms.camera_to_clip * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(clip.x / clip.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y / clip.w, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn composed_transform_reflects_the_world_components() {
        let mut world = WorldTransform::identity();
        world.xy[(0, 3)] = 3.0; // shift layout +3 in x
        world.z[(2, 3)] = -0.25;

        let composed = world.composed();
        let p = composed * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(p.x, 3.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, -0.25, epsilon = 1e-6);
        assert_relative_eq!(world.z_translation(), -0.25, epsilon = 1e-6);
    }
}
