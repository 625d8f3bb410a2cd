/// FaceCamera - view, projection, viewport and frustum for one cube face.
///
/// Built by the capture driver for every face of every capture and
/// handed to the render strategy inside a `RenderRequest`. Like the
/// engine's Camera, it is a passive container once built.

use glam::{Mat4, Vec3};
use crate::renderer::Viewport;
use super::face_table::FaceDescriptor;
use super::frustum::Frustum;

/// Vertical field of view of every cube face (90°)
pub const CUBE_FACE_FOV_Y: f32 = std::f32::consts::FRAC_PI_2;

/// Aspect ratio of every cube face (faces are square)
pub const CUBE_FACE_ASPECT: f32 = 1.0;

/// Clip-space depth range the projection matrix targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipDepth {
    /// GL convention: z in [-1, 1]
    #[default]
    NegativeOneToOne,
    /// Vulkan / D3D / wgpu convention: z in [0, 1]
    ZeroToOne,
}

impl ClipDepth {
    /// Right-handed perspective projection for this depth range
    pub fn perspective(self, fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        match self {
            ClipDepth::NegativeOneToOne => Mat4::perspective_rh_gl(fov_y, aspect, near, far),
            ClipDepth::ZeroToOne => Mat4::perspective_rh(fov_y, aspect, near, far),
        }
    }
}

/// Camera parameters for rendering one cube face
#[derive(Debug, Clone)]
pub struct FaceCamera {
    eye: Vec3,
    view_matrix: Mat4,
    projection_matrix: Mat4,
    frustum: Frustum,
    viewport: Viewport,
}

impl FaceCamera {
    /// Derive the camera for `descriptor` seen from `eye`.
    ///
    /// The caller validates near/far and the descriptor beforehand.
    pub fn for_face(
        descriptor: &FaceDescriptor,
        eye: Vec3,
        near: f32,
        far: f32,
        clip_depth: ClipDepth,
        viewport: Viewport,
    ) -> Self {
        // Never forms eye + direction: stays finite for far-away eyes
        let view = Mat4::look_to_rh(eye, descriptor.center_direction, descriptor.up);
        let projection = clip_depth.perspective(CUBE_FACE_FOV_Y, CUBE_FACE_ASPECT, near, far);
        let frustum = Frustum::from_view_projection(&(projection * view), clip_depth);

        Self {
            eye,
            view_matrix: view,
            projection_matrix: projection,
            frustum,
            viewport,
        }
    }

    // ===== GETTERS =====

    /// Capture origin
    pub fn eye(&self) -> Vec3 {
        self.eye
    }

    /// View matrix (world → camera space).
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view_matrix
    }

    /// Projection matrix (90° square perspective).
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection_matrix
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix * self.view_matrix
    }

    /// Frustum planes for culling.
    pub fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Viewport covering the whole face.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}

#[cfg(test)]
#[path = "face_camera_tests.rs"]
mod tests;
