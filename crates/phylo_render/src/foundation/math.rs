//! Math utilities and types
//!
//! Provides the fundamental math types for the tree rendering pipeline and
//! the matrix constructors the camera and projection models are built from.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}

/// Extension trait for Mat4 with the view and projection constructors
///
/// Keeps the raw matrix math library-agnostic and in one place; the camera
/// and projection models call into these rather than assembling elements
/// themselves.
pub trait Mat4Ext {
    /// Create a right-handed look-at view matrix
    ///
    /// Looks from `eye` toward `target` with the given `up` vector, using
    /// the standard OpenGL view-space convention (camera looks down -Z,
    /// +Y up in view space).
    ///
    /// The `up` vector must not be parallel to the look direction. That is a
    /// caller precondition: a parallel pair produces a degenerate
    /// (non-invertible) matrix rather than an error.
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Create a perspective projection matrix from four half-angles
    ///
    /// The field of view is given as independent up/down/left/right
    /// half-angles in degrees, which allows asymmetric frustums. Maps view
    /// space to OpenGL clip space with `w = -z_view`; depth lands in
    /// [-1, 1] for `0 < near < far`.
    ///
    /// Inputs are not validated here. [`Projection::new`] is the validating
    /// entry point and callers go through it.
    ///
    /// [`Projection::new`]: crate::render::Projection::new
    fn perspective_from_field_of_view(
        up_degrees: f32,
        down_degrees: f32,
        left_degrees: f32,
        right_degrees: f32,
        near: f32,
        far: f32,
    ) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        let forward = (target - eye).normalize();
        let right = forward.cross(&up).normalize();
        let camera_up = right.cross(&forward);

        // Rotation rows are the camera basis; translation moves the eye to
        // the origin. Forward is negated so the camera looks down -Z.
        Mat4::new(
            right.x, right.y, right.z, -right.dot(&eye),
            camera_up.x, camera_up.y, camera_up.z, -camera_up.dot(&eye),
            -forward.x, -forward.y, -forward.z, forward.dot(&eye),
            0.0, 0.0, 0.0, 1.0,
        )
    }

    fn perspective_from_field_of_view(
        up_degrees: f32,
        down_degrees: f32,
        left_degrees: f32,
        right_degrees: f32,
        near: f32,
        far: f32,
    ) -> Mat4 {
        let up_tan = utils::deg_to_rad(up_degrees).tan();
        let down_tan = utils::deg_to_rad(down_degrees).tan();
        let left_tan = utils::deg_to_rad(left_degrees).tan();
        let right_tan = utils::deg_to_rad(right_degrees).tan();

        let x_scale = 2.0 / (left_tan + right_tan);
        let y_scale = 2.0 / (up_tan + down_tan);

        let mut result = Mat4::zeros();

        result[(0, 0)] = x_scale;
        result[(1, 1)] = y_scale;
        // Off-center terms shift the frustum when the half-angles differ
        result[(0, 2)] = -((left_tan - right_tan) * x_scale * 0.5);
        result[(1, 2)] = (up_tan - down_tan) * y_scale * 0.5;
        result[(2, 2)] = far / (near - far);
        result[(2, 3)] = (far * near) / (near - far);
        result[(3, 2)] = -1.0; // Perspective divide trigger

        result
    }
}
