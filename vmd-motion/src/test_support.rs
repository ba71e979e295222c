use crate::{CameraFrame, FRAME_NAME_LEN, MODEL_NAME_LEN, VMD_MAGIC};
use glam::Vec3;

pub(crate) fn push_u32(out: &mut Vec<u8>, v: u32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub(crate) fn push_f32(out: &mut Vec<u8>, v: f32) {
    out.extend_from_slice(&v.to_le_bytes());
}

pub(crate) fn push_vec3(out: &mut Vec<u8>, v: Vec3) {
    push_f32(out, v.x);
    push_f32(out, v.y);
    push_f32(out, v.z);
}

/// Writes `name` into a NUL padded field of `len` bytes.
pub(crate) fn push_field(out: &mut Vec<u8>, name: &[u8], len: usize) {
    assert!(name.len() <= len, "field too long");
    out.extend_from_slice(name);
    out.resize(out.len() + (len - name.len()), 0);
}

pub(crate) fn push_header(out: &mut Vec<u8>, model: &[u8]) {
    out.extend_from_slice(&VMD_MAGIC);
    push_field(out, model, MODEL_NAME_LEN);
}

pub(crate) fn push_bone(out: &mut Vec<u8>, name: &str, frame: u32, position: Vec3) {
    push_field(out, name.as_bytes(), FRAME_NAME_LEN);
    push_u32(out, frame);
    push_vec3(out, position);
    for q in [0.0, 0.0, 0.0, 1.0] {
        push_f32(out, q);
    }
    out.extend((0u8..16).map(|i| 20 + i));
    // padding
    out.extend(std::iter::repeat_n(0xAB, 48));
}

pub(crate) fn push_face(out: &mut Vec<u8>, name: &str, frame: u32, weight: f32) {
    push_field(out, name.as_bytes(), FRAME_NAME_LEN);
    push_u32(out, frame);
    push_f32(out, weight);
}

pub(crate) fn push_camera(out: &mut Vec<u8>, f: &CameraFrame) {
    push_u32(out, f.frame);
    push_f32(out, f.distance);
    push_vec3(out, f.location);
    push_vec3(out, f.rotation);
    out.extend_from_slice(&f.interpolation);
    push_u32(out, f.viewing_angle);
    out.push(f.perspective);
}

pub(crate) fn camera_frame(frame: u32) -> CameraFrame {
    CameraFrame {
        frame,
        distance: -45.0,
        location: Vec3::new(0.0, 10.0, 0.0),
        rotation: Vec3::ZERO,
        interpolation: [20; 24],
        viewing_angle: 30,
        perspective: 0,
    }
}

/// A complete file with the given face and camera records and no bones.
pub(crate) fn vmd_bytes(faces: &[(&str, u32, f32)], cameras: &[CameraFrame]) -> Vec<u8> {
    let mut out = Vec::new();
    push_header(&mut out, b"model");
    push_u32(&mut out, 0);
    push_u32(&mut out, faces.len() as u32);
    for &(name, frame, weight) in faces {
        push_face(&mut out, name, frame, weight);
    }
    push_u32(&mut out, cameras.len() as u32);
    for camera in cameras {
        push_camera(&mut out, camera);
    }
    out
}

pub(crate) fn assert_approx(actual: f32, expected: f32, ctx: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= 1e-4,
        "{ctx}: expected {expected}, got {actual} (diff {diff})"
    );
}

pub(crate) fn assert_vec3_approx(actual: Vec3, expected: Vec3, ctx: &str) {
    assert_approx(actual.x, expected.x, &format!("{ctx}.x"));
    assert_approx(actual.y, expected.y, &format!("{ctx}.y"));
    assert_approx(actual.z, expected.z, &format!("{ctx}.z"));
}
