//! VMD container layout.

use std::fmt;

/// Magic field of a version 2 file, NUL padded to the full field width.
pub const VMD_MAGIC: [u8; MAGIC_LEN] = *b"Vocaloid Motion Data 0002\0\0\0\0\0";

pub const MAGIC_LEN: usize = 30;
pub const MODEL_NAME_LEN: usize = 20;
pub const HEADER_LEN: usize = MAGIC_LEN + MODEL_NAME_LEN;

/// Width of the bone and face name fields.
pub const FRAME_NAME_LEN: usize = 15;

pub const BONE_INTERPOLATION_LEN: usize = 16;
/// Unused tail of every bone record.
pub const BONE_PADDING_LEN: usize = 48;
pub const CAMERA_INTERPOLATION_LEN: usize = 24;

pub const BONE_RECORD_LEN: usize =
    FRAME_NAME_LEN + 4 + 12 + 16 + BONE_INTERPOLATION_LEN + BONE_PADDING_LEN;
pub const FACE_RECORD_LEN: usize = FRAME_NAME_LEN + 4 + 4;
pub const CAMERA_RECORD_LEN: usize = 4 + 4 + 12 + 12 + CAMERA_INTERPOLATION_LEN + 4 + 1;

/// Record sections of a VMD file, in file order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TrackKind {
    Bone,
    Face,
    Camera,
}

impl TrackKind {
    /// Size of one record of this kind on the wire.
    pub const fn record_size(self) -> usize {
        match self {
            TrackKind::Bone => BONE_RECORD_LEN,
            TrackKind::Face => FACE_RECORD_LEN,
            TrackKind::Camera => CAMERA_RECORD_LEN,
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TrackKind::Bone => "bone",
            TrackKind::Face => "face",
            TrackKind::Camera => "camera",
        })
    }
}
