/// Renderer trait - backend factory interface for cube targets

use std::sync::Arc;

use crate::error::Galaxy3dResult;
use crate::renderer::{CubeTarget, CubeTargetDesc};

// ============================================================================
// Renderer trait
// ============================================================================

/// Backend factory trait
///
/// Implemented by backend-specific renderers. The capture driver only asks
/// it for new cube targets; drawing into the faces is done by the caller's
/// render strategy, which usually talks to the same renderer.
pub trait Renderer: Send + Sync {
    /// Create a cube target
    ///
    /// # Arguments
    ///
    /// * `desc` - Cube target descriptor (edge length and formats)
    ///
    /// # Returns
    ///
    /// A shared pointer to the created cube target. The six faces must be
    /// square and `desc.resolution` pixels wide.
    fn create_cube_target(&mut self, desc: CubeTargetDesc) -> Galaxy3dResult<Arc<dyn CubeTarget>>;
}
