/// Renderer module - backend collaborator contracts for cubemap capture

// Module declarations
pub mod renderer;
pub mod texture;
pub mod render_target;
pub mod cube_target;
pub mod viewport;

// Mock backend for unit tests (no GPU required)
#[cfg(test)]
pub(crate) mod mock_renderer;

// Re-export everything from renderer.rs
pub use renderer::*;

// Re-export from other modules
pub use texture::*;
pub use render_target::*;
pub use cube_target::*;
pub use viewport::*;
