/*!
# Galaxy 3D Cubemap

Environment-map capture for the Galaxy 3D engine family.

This crate computes the six camera configurations needed to render a scene
into the faces of a cubemap, and drives a caller-supplied render strategy
once per face. It never touches pixels, shaders or GPU allocation: the
backend creates the cube target, the strategy draws into each face.

## Architecture

- **Renderer**: Backend factory trait that creates cube targets
- **CubeTarget**: Six square face surfaces plus their size
- **FaceTable**: Fixed direction + up-vector pair per cube face
- **FaceCamera**: View, projection, viewport and frustum for one face
- **RenderStrategy**: "Render these camera parameters into this face"
- **CubemapFaceDriver**: Sequences the six face renders

```no_run
use std::sync::Mutex;
use galaxy_3d_cubemap::galaxy3d::{CaptureConfig, CubemapFaceDriver, Renderer, Galaxy3dResult};
use galaxy_3d_cubemap::galaxy3d::capture::RenderRequest;

fn capture_sky(renderer: &Mutex<dyn Renderer>) -> Galaxy3dResult<()> {
    let driver = CubemapFaceDriver::new(renderer);
    let config = CaptureConfig::default().with_resolution(512);

    let mut draw_sky = |request: &RenderRequest| -> Galaxy3dResult<()> {
        // clear + draw the sky into request.target() here
        let _ = request.view_projection_matrix();
        Ok(())
    };
    let target = driver.capture(&config, &mut draw_sky)?;

    // Next frame: re-render into the same target
    driver.capture(&config.with_target(target), &mut draw_sky)?;
    Ok(())
}
```
*/

// Internal modules
mod error;
pub mod log;
pub mod renderer;
pub mod camera;
pub mod capture;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Galaxy3dError, Galaxy3dResult};

    // Renderer factory trait
    pub use crate::renderer::Renderer;

    // Capture entry points
    pub use crate::capture::{CaptureConfig, CubemapFaceDriver, RenderStrategy};

    // Logging sub-module (types and global logger, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        pub use crate::log::{set_logger, reset_logger};
    }

    // Backend contracts
    pub mod render {
        pub use crate::renderer::*;
    }

    // Face geometry
    pub mod camera {
        pub use crate::camera::*;
    }

    // Capture sub-module
    pub mod capture {
        pub use crate::capture::*;
    }
}

// Re-export math library at crate root
pub use glam;
