/// CubemapFaceDriver - renders a scene into the six faces of a cube target.
///
/// For each face of the configured face table, in slot order, the driver
/// builds a 90° square camera at the capture origin and calls the render
/// strategy once. It keeps no state between captures.

use std::sync::{Arc, Mutex};

use crate::camera::FaceCamera;
use crate::error::Galaxy3dResult;
use crate::renderer::{CubeTarget, CubeTargetDesc, Renderer, TextureFormat, Viewport};
use crate::{capture_bail, capture_debug, capture_err, capture_trace};
use super::capture_config::CaptureConfig;
use super::render_request::RenderRequest;
use super::render_strategy::RenderStrategy;

const SOURCE: &str = "galaxy3d::cubemap::Driver";

/// Drives the six face renders of a cubemap capture
///
/// Holds a reference to the backend; it never owns or destroys it.
/// The renderer is locked only while a new cube target is created, so the
/// render strategy is free to lock it while drawing.
pub struct CubemapFaceDriver<'a> {
    renderer: &'a Mutex<dyn Renderer>,
    color_format: TextureFormat,
    depth_format: Option<TextureFormat>,
}

impl<'a> CubemapFaceDriver<'a> {
    pub fn new(renderer: &'a Mutex<dyn Renderer>) -> Self {
        let defaults = CubeTargetDesc::new(0);
        Self {
            renderer,
            color_format: defaults.color_format,
            depth_format: defaults.depth_format,
        }
    }

    /// Formats used when the driver has to create the cube target
    pub fn with_target_formats(mut self, color: TextureFormat, depth: Option<TextureFormat>) -> Self {
        self.color_format = color;
        self.depth_format = depth;
        self
    }

    /// Render all six faces and return the cube target.
    ///
    /// # Errors
    ///
    /// - `InvalidConfiguration` if `config` is malformed (no face rendered)
    /// - `InvalidResource` if the target is zero-sized or not square (no face rendered)
    /// - any error from target creation or from the strategy, unchanged.
    ///   A strategy error aborts the remaining faces; faces already rendered
    ///   keep their content.
    pub fn capture(
        &self,
        config: &CaptureConfig,
        strategy: &mut dyn RenderStrategy,
    ) -> Galaxy3dResult<Arc<dyn CubeTarget>> {
        config.validate()?;

        let (target, created) = match &config.target {
            Some(target) => (Arc::clone(target), false),
            None => (self.create_target(config.resolution)?, true),
        };
        check_target(target.as_ref())?;

        capture_debug!(
            SOURCE,
            "Capturing cubemap at {} ({}x{} faces, {} target)",
            config.eye,
            target.width(),
            target.height(),
            if created { "new" } else { "reused" }
        );

        let viewport = Viewport::full(target.width(), target.height());
        let cameras = build_face_cameras(config, viewport);

        for (descriptor, camera) in config.face_table.iter().zip(cameras) {
            capture_trace!(SOURCE, "Rendering face {} (slot {})", descriptor.face, descriptor.face.index());

            let request = RenderRequest::new(descriptor.face, camera, target.face(descriptor.face));
            strategy.render_face(&request)?;
        }

        Ok(target)
    }

    fn create_target(&self, resolution: u32) -> Galaxy3dResult<Arc<dyn CubeTarget>> {
        let desc = CubeTargetDesc::new(resolution)
            .with_color_format(self.color_format)
            .with_depth_format(self.depth_format);

        let mut renderer = self
            .renderer
            .lock()
            .map_err(|_| capture_err!(SOURCE, "Renderer lock poisoned"))?;
        renderer.create_cube_target(desc)
    }
}

/// Compute the six face cameras of a capture without rendering anything.
///
/// Cameras are returned in face-table (slot) order. Useful for callers that
/// run their own face loop, e.g. recording all faces into one command list.
pub fn face_cameras(config: &CaptureConfig, viewport: Viewport) -> Galaxy3dResult<[FaceCamera; 6]> {
    config.validate()?;
    Ok(build_face_cameras(config, viewport))
}

fn build_face_cameras(config: &CaptureConfig, viewport: Viewport) -> [FaceCamera; 6] {
    let descriptors = config.face_table.descriptors();
    std::array::from_fn(|index| {
        FaceCamera::for_face(
            &descriptors[index],
            config.eye,
            config.near,
            config.far,
            config.clip_depth,
            viewport,
        )
    })
}

fn check_target(target: &dyn CubeTarget) -> Galaxy3dResult<()> {
    let (width, height) = (target.width(), target.height());
    if width == 0 || height == 0 {
        capture_bail!(InvalidResource => SOURCE, "Cube target has zero size ({}x{})", width, height);
    }
    if width != height {
        capture_bail!(InvalidResource => SOURCE, "Cube target faces must be square (got {}x{})", width, height);
    }
    Ok(())
}

#[cfg(test)]
#[path = "cubemap_face_driver_tests.rs"]
mod tests;
