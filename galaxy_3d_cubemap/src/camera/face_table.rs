/// Face table - fixed look direction + up vector for each cube face.
///
/// The default table matches the GL cube-face convention (right-handed,
/// Y-up, slots +X, -X, +Y, -Y, +Z, -Z). The up vectors point "down" on the
/// side faces because cube-map sampling flips t on those faces.
/// A backend with a different face order or handedness must supply its
/// own table through `FaceTable::new()`.

use glam::Vec3;
use crate::error::{Galaxy3dError, Galaxy3dResult};
use super::cube_face::CubeFace;

/// Tolerance for unit-length and parallelism checks
const GEOMETRY_EPSILON: f32 = 1e-5;

/// Camera orientation for one cube face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceDescriptor {
    /// Face slot this orientation renders into
    pub face: CubeFace,
    /// Unit direction the face looks toward, relative to the eye
    pub center_direction: Vec3,
    /// Camera up vector (must be perpendicular to `center_direction`)
    pub up: Vec3,
}

impl FaceDescriptor {
    pub const fn new(face: CubeFace, center_direction: Vec3, up: Vec3) -> Self {
        Self { face, center_direction, up }
    }

    /// Check that this descriptor can produce a well-formed look-at matrix.
    pub fn validate(&self) -> Galaxy3dResult<()> {
        let center = self.center_direction;
        let up = self.up;

        if !center.is_finite() || !up.is_finite() {
            return Err(Galaxy3dError::InvalidConfiguration(format!(
                "Face {}: direction and up vector must be finite", self.face
            )));
        }
        if (center.length() - 1.0).abs() > GEOMETRY_EPSILON {
            return Err(Galaxy3dError::InvalidConfiguration(format!(
                "Face {}: center direction {} is not unit-length", self.face, center
            )));
        }
        if up.length() <= GEOMETRY_EPSILON {
            return Err(Galaxy3dError::InvalidConfiguration(format!(
                "Face {}: up vector is zero-length", self.face
            )));
        }
        if center.cross(up.normalize()).length() <= GEOMETRY_EPSILON {
            return Err(Galaxy3dError::InvalidConfiguration(format!(
                "Face {}: up vector {} is parallel to direction {}", self.face, up, center
            )));
        }
        if center.dot(up.normalize()).abs() > GEOMETRY_EPSILON {
            return Err(Galaxy3dError::InvalidConfiguration(format!(
                "Face {}: up vector {} is not perpendicular to direction {}", self.face, up, center
            )));
        }
        Ok(())
    }
}

/// Six face descriptors, one per slot, in slot order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceTable {
    faces: [FaceDescriptor; 6],
}

impl FaceTable {
    /// GL-style cube faces (right-handed, Y-up)
    pub const OPENGL: FaceTable = FaceTable {
        faces: [
            FaceDescriptor::new(CubeFace::PositiveX, Vec3::X, Vec3::NEG_Y),
            FaceDescriptor::new(CubeFace::NegativeX, Vec3::NEG_X, Vec3::NEG_Y),
            FaceDescriptor::new(CubeFace::PositiveY, Vec3::Y, Vec3::Z),
            FaceDescriptor::new(CubeFace::NegativeY, Vec3::NEG_Y, Vec3::NEG_Z),
            FaceDescriptor::new(CubeFace::PositiveZ, Vec3::Z, Vec3::NEG_Y),
            FaceDescriptor::new(CubeFace::NegativeZ, Vec3::NEG_Z, Vec3::NEG_Y),
        ],
    };

    /// Build a custom table for a backend with a different face convention.
    ///
    /// `faces[i]` must target slot `i`, every descriptor must be valid
    /// (up perpendicular to the direction), every direction must be a
    /// signed cube axis and no two faces may look in the same direction.
    pub fn new(faces: [FaceDescriptor; 6]) -> Galaxy3dResult<Self> {
        let table = Self { faces };
        table.validate()?;
        Ok(table)
    }

    /// Validate slot order and geometry of every descriptor
    pub fn validate(&self) -> Galaxy3dResult<()> {
        for (index, descriptor) in self.faces.iter().enumerate() {
            if descriptor.face.index() != index {
                return Err(Galaxy3dError::InvalidConfiguration(format!(
                    "Face table slot {} holds face {} (slot {})",
                    index, descriptor.face, descriptor.face.index()
                )));
            }
            descriptor.validate()?;

            if descriptor.center_direction.abs().max_element() < 1.0 - GEOMETRY_EPSILON {
                return Err(Galaxy3dError::InvalidConfiguration(format!(
                    "Face {}: direction {} is not a cube axis",
                    descriptor.face, descriptor.center_direction
                )));
            }
        }

        // Six distinct axis directions cover +-X, +-Y and +-Z exactly once
        for (i, a) in self.faces.iter().enumerate() {
            for b in &self.faces[i + 1..] {
                if a.center_direction.dot(b.center_direction) >= 1.0 - GEOMETRY_EPSILON {
                    return Err(Galaxy3dError::InvalidConfiguration(format!(
                        "Faces {} and {} look in the same direction", a.face, b.face
                    )));
                }
            }
        }
        Ok(())
    }

    /// Descriptors in slot order
    pub fn descriptors(&self) -> &[FaceDescriptor; 6] {
        &self.faces
    }

    /// Descriptor for one face
    pub fn get(&self, face: CubeFace) -> &FaceDescriptor {
        &self.faces[face.index()]
    }

    /// Iterate descriptors in slot order
    pub fn iter(&self) -> impl Iterator<Item = &FaceDescriptor> {
        self.faces.iter()
    }
}

impl Default for FaceTable {
    fn default() -> Self {
        Self::OPENGL
    }
}

#[cfg(test)]
#[path = "face_table_tests.rs"]
mod tests;
