/// RenderTarget trait - one face surface of a cube target

use crate::renderer::TextureFormat;

/// Render target trait
///
/// A single surface the render strategy draws into. For cube targets,
/// each face exposes one of these.
pub trait RenderTarget: Send + Sync {
    /// Get the width of the render target in pixels
    fn width(&self) -> u32;

    /// Get the height of the render target in pixels
    fn height(&self) -> u32;

    /// Get the pixel format of the render target
    fn format(&self) -> TextureFormat;
}
