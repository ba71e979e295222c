//! Raw records as stored in a VMD file.
//!
//! Nothing here is converted: names stay as their fixed-width legacy fields and
//! vectors keep the file's coordinate convention.

use crate::LegacyTextDecoder;
use crate::format::{
    BONE_INTERPOLATION_LEN, CAMERA_INTERPOLATION_LEN, FRAME_NAME_LEN, MAGIC_LEN, MODEL_NAME_LEN,
};
use glam::{Quat, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    pub magic: [u8; MAGIC_LEN],
    pub model_name: [u8; MODEL_NAME_LEN],
}

impl Header {
    pub fn target_model_name(&self, text: &dyn LegacyTextDecoder) -> String {
        text.decode(&self.model_name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BoneFrame {
    pub name: [u8; FRAME_NAME_LEN],
    pub frame: u32,
    pub position: Vec3,
    /// Stored x, y, z, w; not renormalized.
    pub rotation: Quat,
    /// 2×2×4 bezier control block, kept opaque.
    pub interpolation: [u8; BONE_INTERPOLATION_LEN],
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaceFrame {
    pub name: [u8; FRAME_NAME_LEN],
    pub frame: u32,
    pub weight: f32,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraFrame {
    pub frame: u32,
    pub distance: f32,
    pub location: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
    /// 6×2×2 bezier control block, kept opaque.
    pub interpolation: [u8; CAMERA_INTERPOLATION_LEN],
    pub viewing_angle: u32,
    /// 0 = perspective, 1 = orthographic.
    pub perspective: u8,
}

/// A fully decoded VMD file.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub header: Header,
    pub bone_frames: Vec<BoneFrame>,
    pub face_frames: Vec<FaceFrame>,
    pub camera_frames: Vec<CameraFrame>,
}

impl Document {
    /// Last frame index referenced by any track, or 0 for an empty document.
    pub fn max_frame(&self) -> u32 {
        let bones = self.bone_frames.iter().map(|f| f.frame);
        let faces = self.face_frames.iter().map(|f| f.frame);
        let cameras = self.camera_frames.iter().map(|f| f.frame);
        bones.chain(faces).chain(cameras).max().unwrap_or(0)
    }

    /// Writes the header and per-track counts at info level, and one line per
    /// record at debug level.
    pub fn log_summary(&self, text: &dyn LegacyTextDecoder) {
        log::info!(
            "VMD magic={:?} model={:?}",
            String::from_utf8_lossy(trim_nul(&self.header.magic)),
            self.header.target_model_name(text)
        );
        log::info!(
            "VMD bone_frames={} face_frames={} camera_frames={}",
            self.bone_frames.len(),
            self.face_frames.len(),
            self.camera_frames.len()
        );

        if !log::log_enabled!(log::Level::Debug) {
            return;
        }
        for f in &self.bone_frames {
            log::debug!("bone name={:?} frame={}", text.decode(&f.name), f.frame);
        }
        for f in &self.face_frames {
            log::debug!(
                "face name={:?} frame={} weight={}",
                text.decode(&f.name),
                f.frame,
                f.weight
            );
        }
        for f in &self.camera_frames {
            log::debug!(
                "camera frame={} location={:?} rotation={:?}",
                f.frame,
                f.location,
                f.rotation
            );
        }
    }
}

/// Cuts a fixed-width field at its first NUL.
pub(crate) fn trim_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    &bytes[..end]
}
