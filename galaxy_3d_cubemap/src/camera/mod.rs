//! Camera module - cube face geometry and per-face cameras.
//!
//! The face table is constant data. Face cameras are passive containers
//! built fresh for every capture and handed to the render strategy.

mod cube_face;
mod face_table;
mod face_camera;
mod frustum;

pub use cube_face::CubeFace;
pub use face_table::{FaceDescriptor, FaceTable};
pub use face_camera::{ClipDepth, FaceCamera, CUBE_FACE_FOV_Y, CUBE_FACE_ASPECT};
pub use frustum::{
    AABB, Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
