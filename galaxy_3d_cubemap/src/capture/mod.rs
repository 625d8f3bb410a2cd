//! Capture module - drives six face renders into a cube target.

mod capture_config;
mod render_request;
mod render_strategy;
mod cubemap_face_driver;

pub use capture_config::{CaptureConfig, DEFAULT_RESOLUTION, DEFAULT_NEAR, DEFAULT_FAR};
pub use render_request::{RenderRequest, FaceUniforms};
pub use render_strategy::RenderStrategy;
pub use cubemap_face_driver::{CubemapFaceDriver, face_cameras};
