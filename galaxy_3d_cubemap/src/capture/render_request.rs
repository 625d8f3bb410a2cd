/// RenderRequest - everything the render strategy needs for one face.
///
/// Transient: built fresh for every face of every capture and dropped
/// once the strategy returns.

use std::fmt;
use std::sync::Arc;

use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use crate::camera::{CubeFace, FaceCamera, Frustum};
use crate::renderer::{RenderTarget, Viewport};

/// GPU-ready per-face camera block (std140-compatible layout)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct FaceUniforms {
    /// View matrix, column-major
    pub view: [[f32; 4]; 4],
    /// Projection matrix, column-major
    pub projection: [[f32; 4]; 4],
    /// Capture origin (w = 1)
    pub eye: [f32; 4],
}

impl FaceUniforms {
    /// Raw bytes for a uniform buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

/// Per-face render payload
pub struct RenderRequest {
    face: CubeFace,
    camera: FaceCamera,
    target: Arc<dyn RenderTarget>,
}

impl RenderRequest {
    pub(crate) fn new(face: CubeFace, camera: FaceCamera, target: Arc<dyn RenderTarget>) -> Self {
        Self { face, camera, target }
    }

    /// Face being rendered
    pub fn face(&self) -> CubeFace {
        self.face
    }

    /// Slot index of the face (0..6)
    pub fn face_index(&self) -> usize {
        self.face.index()
    }

    /// Full camera for this face
    pub fn camera(&self) -> &FaceCamera {
        &self.camera
    }

    pub fn view(&self) -> &Mat4 {
        self.camera.view_matrix()
    }

    pub fn projection(&self) -> &Mat4 {
        self.camera.projection_matrix()
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.camera.view_projection_matrix()
    }

    pub fn viewport(&self) -> &Viewport {
        self.camera.viewport()
    }

    /// Culling frustum of this face
    pub fn frustum(&self) -> &Frustum {
        self.camera.frustum()
    }

    /// Surface of the cube target this face renders into
    pub fn target(&self) -> &Arc<dyn RenderTarget> {
        &self.target
    }

    /// View matrix as 16 column-major floats
    pub fn view_cols(&self) -> [f32; 16] {
        self.view().to_cols_array()
    }

    /// Projection matrix as 16 column-major floats
    pub fn projection_cols(&self) -> [f32; 16] {
        self.projection().to_cols_array()
    }

    /// Camera block ready for upload
    pub fn uniforms(&self) -> FaceUniforms {
        FaceUniforms {
            view: self.view().to_cols_array_2d(),
            projection: self.projection().to_cols_array_2d(),
            eye: self.camera.eye().extend(1.0).to_array(),
        }
    }
}

impl fmt::Debug for RenderRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderRequest")
            .field("face", &self.face)
            .field("camera", &self.camera)
            .field("target", &(self.target.width(), self.target.height()))
            .finish()
    }
}
