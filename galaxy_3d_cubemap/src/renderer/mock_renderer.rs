/// Mock Renderer for unit tests (no GPU required)
///
/// Creates in-memory cube targets and counts creations, so the capture
/// driver can be tested without a graphics backend.

use std::sync::Arc;

use crate::camera::CubeFace;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use crate::renderer::{CubeTarget, CubeTargetDesc, RenderTarget, Renderer, TextureFormat};

// ============================================================================
// Mock RenderTarget
// ============================================================================

#[derive(Debug)]
pub struct MockRenderTarget {
    pub face: CubeFace,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }
}

// ============================================================================
// Mock CubeTarget
// ============================================================================

pub struct MockCubeTarget {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub faces: Vec<Arc<dyn RenderTarget>>,
}

impl MockCubeTarget {
    pub fn new(desc: CubeTargetDesc) -> Self {
        Self::with_size(desc.resolution, desc.resolution, desc.color_format)
    }

    /// Build a target with arbitrary (possibly invalid) face dimensions
    pub fn with_size(width: u32, height: u32, format: TextureFormat) -> Self {
        let faces = CubeFace::ALL
            .iter()
            .map(|&face| {
                Arc::new(MockRenderTarget { face, width, height, format }) as Arc<dyn RenderTarget>
            })
            .collect();

        Self { width, height, format, faces }
    }
}

impl CubeTarget for MockCubeTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> TextureFormat {
        self.format
    }

    fn face(&self, face: CubeFace) -> Arc<dyn RenderTarget> {
        self.faces[face.index()].clone()
    }
}

// ============================================================================
// Mock Renderer
// ============================================================================

#[derive(Default)]
pub struct MockRenderer {
    pub created: u32,
    pub last_desc: Option<CubeTargetDesc>,
    pub fail_with: Option<Galaxy3dError>,
}

impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer whose target creation always fails with `error`
    pub fn failing(error: Galaxy3dError) -> Self {
        Self { fail_with: Some(error), ..Self::default() }
    }
}

impl Renderer for MockRenderer {
    fn create_cube_target(&mut self, desc: CubeTargetDesc) -> Galaxy3dResult<Arc<dyn CubeTarget>> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }
        self.created += 1;
        self.last_desc = Some(desc);
        Ok(Arc::new(MockCubeTarget::new(desc)))
    }
}

/// Identity comparison that ignores vtable pointers
pub fn same_target(a: &Arc<dyn RenderTarget>, b: &Arc<dyn RenderTarget>) -> bool {
    std::ptr::eq(Arc::as_ptr(a) as *const (), Arc::as_ptr(b) as *const ())
}

#[cfg(test)]
#[path = "mock_renderer_tests.rs"]
mod tests;
