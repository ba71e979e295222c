//! Application-ready motion data built from a decoded file.

use crate::{
    CameraFrame, CameraKey, CameraRig, Document, Error, LegacyTextDecoder, MorphTrack, ShiftJis,
    build_morph_tracks, normalize_camera_frames,
};
use std::collections::HashMap;
use std::path::Path;

/// Camera frames and morph tracks of one VMD file.
///
/// Bone frames are decoded but not carried over.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionData {
    pub target_model_name: String,
    /// Sorted by frame index.
    pub camera_frames: Vec<CameraFrame>,
    pub morph_tracks: HashMap<String, MorphTrack>,
}

impl MotionData {
    pub fn from_document(document: &Document, text: &dyn LegacyTextDecoder) -> Self {
        let motion = Self {
            target_model_name: document.header.target_model_name(text),
            camera_frames: normalize_camera_frames(&document.camera_frames),
            morph_tracks: build_morph_tracks(&document.face_frames, text),
        };
        log::info!(
            "motion for {:?}: camera_frames={} morph_tracks={} (from {} face frames)",
            motion.target_model_name,
            motion.camera_frames.len(),
            motion.morph_tracks.len(),
            document.face_frames.len()
        );
        motion
    }

    /// Decodes `bytes` with Shift-JIS names.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        Self::from_bytes_with(bytes, &ShiftJis)
    }

    pub fn from_bytes_with(bytes: &[u8], text: &dyn LegacyTextDecoder) -> Result<Self, Error> {
        let document = Document::from_vmd_bytes(bytes)?;
        document.log_summary(text);
        Ok(Self::from_document(&document, text))
    }

    /// Reads the whole file into memory, then decodes it.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loading {} ({} bytes)", path.display(), bytes.len());
        Self::from_bytes(&bytes)
    }

    pub fn camera_keys(&self, rig: &CameraRig) -> Result<Vec<CameraKey>, Error> {
        rig.convert_all(&self.camera_frames)
    }

    pub fn max_frame(&self) -> u32 {
        let camera = self.camera_frames.last().map(|f| f.frame);
        let morph = self.morph_tracks.values().filter_map(MorphTrack::last_frame);
        camera.into_iter().chain(morph).max().unwrap_or(0)
    }
}
