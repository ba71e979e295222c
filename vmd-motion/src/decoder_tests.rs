use crate::test_support::*;
use crate::{
    BONE_RECORD_LEN, CAMERA_RECORD_LEN, Document, Error, FACE_RECORD_LEN, HEADER_LEN, ShiftJis,
    TrackKind, VMD_MAGIC, decode,
};
use glam::{Quat, Vec3};

fn empty_vmd() -> Vec<u8> {
    vmd_bytes(&[], &[])
}

#[test]
fn record_sizes_match_wire_layout() {
    assert_eq!(HEADER_LEN, 50);
    assert_eq!(BONE_RECORD_LEN, 111);
    assert_eq!(FACE_RECORD_LEN, 23);
    assert_eq!(CAMERA_RECORD_LEN, 61);

    let mut one_bone = Vec::new();
    push_bone(&mut one_bone, "a", 0, Vec3::ZERO);
    assert_eq!(one_bone.len(), BONE_RECORD_LEN);

    let mut one_camera = Vec::new();
    push_camera(&mut one_camera, &camera_frame(0));
    assert_eq!(one_camera.len(), CAMERA_RECORD_LEN);
}

#[test]
fn decodes_empty_document() {
    let doc = decode(&empty_vmd()).expect("decode");
    assert_eq!(doc.header.magic, VMD_MAGIC);
    assert_eq!(doc.header.target_model_name(&ShiftJis), "model");
    assert!(doc.bone_frames.is_empty());
    assert!(doc.face_frames.is_empty());
    assert!(doc.camera_frames.is_empty());
    assert_eq!(doc.max_frame(), 0);
}

#[test]
fn any_single_byte_change_in_magic_is_bad_magic() {
    let valid = empty_vmd();
    for i in 0..30 {
        let mut bytes = valid.clone();
        bytes[i] ^= 0x01;
        match decode(&bytes) {
            Err(Error::BadMagic { found }) => assert_eq!(found[..], bytes[..30]),
            other => panic!("byte {i}: expected BadMagic, got {other:?}"),
        }
    }
}

#[test]
fn prefix_match_is_not_enough() {
    // the first version of the format shares the 20-byte prefix
    let mut bytes = empty_vmd();
    bytes[..30].copy_from_slice(b"Vocaloid Motion Data file\0\0\0\0\0");
    assert!(matches!(decode(&bytes), Err(Error::BadMagic { .. })));
}

#[test]
fn bad_magic_is_reported_before_truncation() {
    let mut bytes = b"Vocaloid Motion Data 0003\0\0\0\0\0".to_vec();
    // no model name, no counts
    bytes.truncate(30);
    assert!(matches!(decode(&bytes), Err(Error::BadMagic { .. })));
}

#[test]
fn short_header_is_truncated_input() {
    let bytes = empty_vmd();
    assert!(matches!(
        decode(&bytes[..40]),
        Err(Error::TruncatedInput {
            offset: 30,
            needed: 20,
            remaining: 10
        })
    ));

    assert!(matches!(
        decode(&VMD_MAGIC[..12]),
        Err(Error::TruncatedInput { offset: 0, .. })
    ));
}

#[test]
fn missing_camera_section_is_truncated_input() {
    let mut bytes = empty_vmd();
    bytes.truncate(bytes.len() - 4);
    assert!(matches!(
        decode(&bytes),
        Err(Error::TruncatedInput { needed: 4, remaining: 0, .. })
    ));
}

#[test]
fn face_records_are_read_by_count() {
    let bytes = vmd_bytes(&[("smile", 10, 0.5), ("blink", 3, 1.0), ("smile", 0, 0.25)], &[]);
    let doc = decode(&bytes).expect("decode");
    assert_eq!(doc.face_frames.len(), 3);
    let names: Vec<String> = doc
        .face_frames
        .iter()
        .map(|f| doc_name(&f.name))
        .collect();
    assert_eq!(names, ["smile", "blink", "smile"]);
    assert_eq!(doc.face_frames[1].frame, 3);
    assert_eq!(doc.face_frames[2].weight, 0.25);
    assert_eq!(doc.max_frame(), 10);
}

fn doc_name(field: &[u8]) -> String {
    use crate::LegacyTextDecoder;
    ShiftJis.decode(field)
}

#[test]
fn bone_padding_is_skipped() {
    let mut bytes = Vec::new();
    push_header(&mut bytes, b"m");
    push_u32(&mut bytes, 2);
    push_bone(&mut bytes, "center", 0, Vec3::new(1.0, 2.0, 3.0));
    push_bone(&mut bytes, "arm", 42, Vec3::new(-4.0, 5.0, -6.0));
    push_u32(&mut bytes, 1);
    push_face(&mut bytes, "a", 7, 0.75);
    push_u32(&mut bytes, 0);

    let doc = decode(&bytes).expect("decode");
    assert_eq!(doc.bone_frames.len(), 2);
    let arm = &doc.bone_frames[1];
    assert_eq!(doc_name(&arm.name), "arm");
    assert_eq!(arm.frame, 42);
    assert_eq!(arm.position, Vec3::new(-4.0, 5.0, -6.0));
    assert_eq!(arm.rotation, Quat::from_xyzw(0.0, 0.0, 0.0, 1.0));
    assert_eq!(arm.interpolation[0], 20);
    assert_eq!(arm.interpolation[15], 35);

    assert_eq!(doc.face_frames.len(), 1);
    assert_eq!(doc.face_frames[0].frame, 7);
    assert_eq!(doc.face_frames[0].weight, 0.75);
}

#[test]
fn camera_fields_are_read_in_order() {
    let mut camera = camera_frame(12);
    camera.distance = -30.5;
    camera.location = Vec3::new(1.0, 2.0, 3.0);
    camera.rotation = Vec3::new(0.1, -0.2, 0.3);
    camera.interpolation = std::array::from_fn(|i| i as u8);
    camera.viewing_angle = 45;
    camera.perspective = 1;

    let doc = decode(&vmd_bytes(&[], &[camera.clone()])).expect("decode");
    assert_eq!(doc.camera_frames, vec![camera]);
}

#[test]
fn oversized_bone_count_is_rejected_before_allocation() {
    let mut bytes = Vec::new();
    push_header(&mut bytes, b"m");
    push_u32(&mut bytes, 4_000_000_000);
    bytes.resize(200, 0);

    match decode(&bytes) {
        Err(Error::OversizedCount {
            kind,
            count,
            record_size,
            remaining,
        }) => {
            assert_eq!(kind, TrackKind::Bone);
            assert_eq!(count, 4_000_000_000);
            assert_eq!(record_size, BONE_RECORD_LEN);
            assert_eq!(remaining, 200 - HEADER_LEN - 4);
        }
        other => panic!("expected OversizedCount, got {other:?}"),
    }
}

#[test]
fn count_one_past_the_data_is_oversized() {
    let mut bytes = vmd_bytes(&[], &[camera_frame(0), camera_frame(1)]);
    let count_offset = bytes.len() - 2 * CAMERA_RECORD_LEN - 4;
    bytes[count_offset..count_offset + 4].copy_from_slice(&3u32.to_le_bytes());
    assert!(matches!(
        decode(&bytes),
        Err(Error::OversizedCount {
            kind: TrackKind::Camera,
            count: 3,
            ..
        })
    ));
}

#[test]
fn trailing_sections_are_ignored() {
    let mut bytes = vmd_bytes(&[("a", 0, 0.0)], &[camera_frame(0)]);
    // light and shadow counts of a newer export
    push_u32(&mut bytes, 0);
    push_u32(&mut bytes, 0);
    let doc = decode(&bytes).expect("decode");
    assert_eq!(doc.face_frames.len(), 1);
    assert_eq!(doc.camera_frames.len(), 1);
}

#[test]
fn decoding_twice_gives_equal_documents() {
    let bytes = vmd_bytes(
        &[("smile", 10, 0.5), ("smile", 0, 0.0)],
        &[camera_frame(5), camera_frame(1)],
    );
    let a = Document::from_vmd_bytes(&bytes).expect("first");
    let b = Document::from_vmd_bytes(&bytes).expect("second");
    assert_eq!(a, b);
}
