/// Cube target trait and cube target descriptor

use std::sync::Arc;

use crate::camera::CubeFace;
use crate::renderer::{RenderTarget, TextureFormat};

// ===== CUBE TARGET DESC =====

/// Descriptor for creating a cube target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeTargetDesc {
    /// Edge length of each square face in pixels
    pub resolution: u32,
    /// Color format of the six faces
    pub color_format: TextureFormat,
    /// Depth attachment shared by the face renders (None = no depth)
    pub depth_format: Option<TextureFormat>,
}

impl CubeTargetDesc {
    /// Color + depth cube target with the given edge length
    pub fn new(resolution: u32) -> Self {
        Self {
            resolution,
            color_format: TextureFormat::R8G8B8A8_UNORM,
            depth_format: Some(TextureFormat::D24_UNORM_S8_UINT),
        }
    }

    /// Override the color format
    pub fn with_color_format(mut self, format: TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    /// Override the depth format (None disables the depth attachment)
    pub fn with_depth_format(mut self, format: Option<TextureFormat>) -> Self {
        self.depth_format = format;
        self
    }
}

// ===== CUBE TARGET TRAIT =====

/// Cube render target trait
///
/// Six equally-sized square surfaces, addressed by `CubeFace`.
/// Implemented by backend-specific types and shared as `Arc<dyn CubeTarget>`
/// so the caller can keep it across captures and sample it afterwards.
pub trait CubeTarget: Send + Sync {
    /// Face width in pixels
    fn width(&self) -> u32;

    /// Face height in pixels
    fn height(&self) -> u32;

    /// Color format of the faces
    fn format(&self) -> TextureFormat;

    /// Surface for one face slot
    fn face(&self, face: CubeFace) -> Arc<dyn RenderTarget>;
}
