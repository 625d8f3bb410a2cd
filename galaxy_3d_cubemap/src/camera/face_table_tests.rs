use glam::Vec3;
use crate::error::Galaxy3dError;
use super::*;

// ============================================================================
// Default table geometry
// ============================================================================

#[test]
fn test_opengl_table_slot_order() {
    for (index, descriptor) in FaceTable::OPENGL.iter().enumerate() {
        assert_eq!(descriptor.face.index(), index);
        assert_eq!(descriptor.face, CubeFace::ALL[index]);
    }
}

#[test]
fn test_opengl_table_layout() {
    let expected = [
        (Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::new(-1.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        (Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, 0.0, -1.0)),
        (Vec3::new(0.0, 0.0, 1.0), Vec3::new(0.0, -1.0, 0.0)),
        (Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, -1.0, 0.0)),
    ];

    for (descriptor, (center, up)) in FaceTable::OPENGL.iter().zip(expected) {
        assert_eq!(descriptor.center_direction, center, "face {}", descriptor.face);
        assert_eq!(descriptor.up, up, "face {}", descriptor.face);
    }
}

#[test]
fn test_opengl_table_spans_all_axes_once() {
    let axes = [Vec3::X, Vec3::NEG_X, Vec3::Y, Vec3::NEG_Y, Vec3::Z, Vec3::NEG_Z];

    for axis in axes {
        let count = FaceTable::OPENGL
            .iter()
            .filter(|d| d.center_direction == axis)
            .count();
        assert_eq!(count, 1, "axis {} should appear exactly once", axis);
    }
}

#[test]
fn test_opengl_table_directions_pairwise_distinct() {
    let faces = FaceTable::OPENGL.descriptors();
    for i in 0..6 {
        for j in (i + 1)..6 {
            assert_ne!(faces[i].center_direction, faces[j].center_direction);
        }
    }
}

#[test]
fn test_opengl_table_up_orthogonal_and_unit() {
    for descriptor in FaceTable::OPENGL.iter() {
        assert_eq!(descriptor.up.dot(descriptor.center_direction), 0.0);
        assert_eq!(descriptor.up.length(), 1.0);
        assert_eq!(descriptor.center_direction.length(), 1.0);
    }
}

#[test]
fn test_opengl_table_validates() {
    assert!(FaceTable::OPENGL.validate().is_ok());
    assert_eq!(FaceTable::default(), FaceTable::OPENGL);
}

#[test]
fn test_get_by_face() {
    let table = FaceTable::OPENGL;
    assert_eq!(table.get(CubeFace::PositiveY).up, Vec3::Z);
    assert_eq!(table.get(CubeFace::NegativeY).up, Vec3::NEG_Z);
    assert_eq!(table.get(CubeFace::NegativeZ).center_direction, Vec3::NEG_Z);
}

// ============================================================================
// CubeFace
// ============================================================================

#[test]
fn test_cube_face_index_round_trip() {
    for (index, face) in CubeFace::ALL.iter().enumerate() {
        assert_eq!(face.index(), index);
        assert_eq!(CubeFace::from_index(index), Some(*face));
    }
    assert_eq!(CubeFace::from_index(6), None);
}

#[test]
fn test_cube_face_labels() {
    assert_eq!(CubeFace::PositiveX.to_string(), "+X");
    assert_eq!(CubeFace::NegativeZ.label(), "-Z");
}

// ============================================================================
// Custom tables
// ============================================================================

#[test]
fn test_new_accepts_rederived_table() {
    // Y-up side faces, as a backend without the t-flip would need
    let table = FaceTable::new([
        FaceDescriptor::new(CubeFace::PositiveX, Vec3::X, Vec3::Y),
        FaceDescriptor::new(CubeFace::NegativeX, Vec3::NEG_X, Vec3::Y),
        FaceDescriptor::new(CubeFace::PositiveY, Vec3::Y, Vec3::NEG_Z),
        FaceDescriptor::new(CubeFace::NegativeY, Vec3::NEG_Y, Vec3::Z),
        FaceDescriptor::new(CubeFace::PositiveZ, Vec3::Z, Vec3::Y),
        FaceDescriptor::new(CubeFace::NegativeZ, Vec3::NEG_Z, Vec3::Y),
    ]);
    assert!(table.is_ok());
}

#[test]
fn test_new_rejects_parallel_up() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces[2].up = Vec3::NEG_Y;

    let result = FaceTable::new(faces);
    assert!(matches!(result, Err(Galaxy3dError::InvalidConfiguration(msg)) if msg.contains("parallel")));
}

#[test]
fn test_new_rejects_zero_up() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces[4].up = Vec3::ZERO;

    assert!(matches!(FaceTable::new(faces), Err(Galaxy3dError::InvalidConfiguration(_))));
}

#[test]
fn test_new_rejects_non_unit_direction() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces[0].center_direction = Vec3::new(2.0, 0.0, 0.0);

    let result = FaceTable::new(faces);
    assert!(matches!(result, Err(Galaxy3dError::InvalidConfiguration(msg)) if msg.contains("unit-length")));
}

#[test]
fn test_new_rejects_non_finite_vectors() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces[5].up = Vec3::new(f32::NAN, -1.0, 0.0);

    assert!(matches!(FaceTable::new(faces), Err(Galaxy3dError::InvalidConfiguration(_))));
}

#[test]
fn test_new_rejects_wrong_slot_order() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces.swap(0, 1);

    let result = FaceTable::new(faces);
    assert!(matches!(result, Err(Galaxy3dError::InvalidConfiguration(msg)) if msg.contains("slot 0")));
}

#[test]
fn test_new_rejects_duplicate_direction() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces[1].center_direction = Vec3::X;

    let result = FaceTable::new(faces);
    assert!(matches!(result, Err(Galaxy3dError::InvalidConfiguration(msg)) if msg.contains("same direction")));
}

#[test]
fn test_new_rejects_tilted_up() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    faces[0].up = Vec3::new(0.5, -1.0, 0.0);

    let result = FaceTable::new(faces);
    assert!(matches!(result, Err(Galaxy3dError::InvalidConfiguration(msg)) if msg.contains("perpendicular")));
}

#[test]
fn test_new_rejects_off_axis_direction() {
    let mut faces = *FaceTable::OPENGL.descriptors();
    let diagonal = Vec3::new(1.0, 0.0, 1.0).normalize();
    faces[4].center_direction = diagonal;
    faces[4].up = Vec3::NEG_Y;

    let result = FaceTable::new(faces);
    assert!(matches!(result, Err(Galaxy3dError::InvalidConfiguration(msg)) if msg.contains("cube axis")));
}
