/// Capture configuration - explicit defaults, validated once per capture.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;
use crate::camera::{ClipDepth, FaceTable};
use crate::error::Galaxy3dResult;
use crate::renderer::CubeTarget;

/// Default face edge length in pixels
pub const DEFAULT_RESOLUTION: u32 = 1024;

/// Default near plane distance
pub const DEFAULT_NEAR: f32 = 0.1;

/// Default far plane distance
pub const DEFAULT_FAR: f32 = 1000.0;

const SOURCE: &str = "galaxy3d::cubemap::CaptureConfig";

/// Parameters of one cubemap capture
///
/// Build with `CaptureConfig::default()` (or `new()`) and the `with_*`
/// setters. The driver validates it before issuing any render call.
#[derive(Clone)]
pub struct CaptureConfig {
    /// Face edge length used when the driver creates the target (default 1024).
    /// Ignored when `target` is set.
    pub resolution: u32,
    /// Near plane distance (default 0.1)
    pub near: f32,
    /// Far plane distance (default 1000.0)
    pub far: f32,
    /// Capture origin (default origin)
    pub eye: Vec3,
    /// Cube target to reuse; its own size is authoritative
    pub target: Option<Arc<dyn CubeTarget>>,
    /// Depth range of the produced projection matrices (default GL)
    pub clip_depth: ClipDepth,
    /// Face orientations (default GL cube-face convention)
    pub face_table: FaceTable,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            eye: Vec3::ZERO,
            target: None,
            clip_depth: ClipDepth::default(),
            face_table: FaceTable::default(),
        }
    }
}

impl fmt::Debug for CaptureConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaptureConfig")
            .field("resolution", &self.resolution)
            .field("near", &self.near)
            .field("far", &self.far)
            .field("eye", &self.eye)
            .field("target", &self.target.as_ref().map(|t| (t.width(), t.height())))
            .field("clip_depth", &self.clip_depth)
            .finish_non_exhaustive()
    }
}

impl CaptureConfig {
    /// Same as `CaptureConfig::default()`
    pub fn new() -> Self {
        Self::default()
    }

    // ===== BUILDER SETTERS =====

    pub fn with_resolution(mut self, resolution: u32) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_near_far(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn with_eye(mut self, eye: Vec3) -> Self {
        self.eye = eye;
        self
    }

    /// Reuse an existing cube target (e.g. the result of a previous capture)
    pub fn with_target(mut self, target: Arc<dyn CubeTarget>) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_clip_depth(mut self, clip_depth: ClipDepth) -> Self {
        self.clip_depth = clip_depth;
        self
    }

    /// Use a face table re-derived for another backend convention
    pub fn with_face_table(mut self, face_table: FaceTable) -> Self {
        self.face_table = face_table;
        self
    }

    // ===== VALIDATION =====

    /// Validate the configuration.
    ///
    /// Errors are logged and returned as `Galaxy3dError::InvalidConfiguration`.
    pub fn validate(&self) -> Galaxy3dResult<()> {
        // The resolution only matters when the driver creates the target
        if self.target.is_none() && self.resolution == 0 {
            crate::capture_bail!(InvalidConfiguration => SOURCE, "Resolution must be > 0");
        }
        if !self.near.is_finite() || self.near <= 0.0 {
            crate::capture_bail!(InvalidConfiguration => SOURCE,
                "Near plane must be finite and > 0 (got {})", self.near);
        }
        if !self.far.is_finite() || self.far <= self.near {
            crate::capture_bail!(InvalidConfiguration => SOURCE,
                "Near plane ({}) must be < far plane ({})", self.near, self.far);
        }
        if !self.eye.is_finite() {
            crate::capture_bail!(InvalidConfiguration => SOURCE,
                "Eye position must be finite (got {})", self.eye);
        }
        if let Err(error) = self.face_table.validate() {
            crate::capture_error!(SOURCE, "{}", error);
            return Err(error);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "capture_config_tests.rs"]
mod tests;
