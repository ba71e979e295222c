//! Camera track conversion.
//!
//! MMD stores a camera as a pivot (`location`), an orientation around that
//! pivot and a boom length (`distance`) from the pivot to the lens. Engine
//! space here is +X forward, +Y right, +Z up; orientations are expressed as
//! pitch/yaw/roll in degrees.

use crate::{CameraFrame, Error};
use glam::{EulerRot, Quat, Vec3};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProjectionMode {
    #[default]
    Perspective,
    Orthographic,
}

impl ProjectionMode {
    /// Maps the raw perspective byte; only 0 and 1 are defined.
    pub fn from_vmd(value: u8) -> Option<Self> {
        match value {
            0 => Some(ProjectionMode::Perspective),
            1 => Some(ProjectionMode::Orthographic),
            _ => None,
        }
    }
}

impl CameraFrame {
    pub fn projection(&self) -> Result<ProjectionMode, Error> {
        ProjectionMode::from_vmd(self.perspective).ok_or(Error::InvalidPerspectiveValue {
            frame: self.frame,
            value: self.perspective,
        })
    }
}

/// Rigid transform with per-axis scale, applied as scale, then rotation, then
/// translation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for CameraTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl CameraTransform {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn from_translation_rotation(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            scale: Vec3::ONE,
        }
    }

    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation * (self.scale * point) + self.translation
    }

    pub fn transform_rotation(&self, rotation: Quat) -> Quat {
        self.rotation * rotation
    }

    /// Unit vector the transform faces along (its rotated +X axis).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Orientation as `(pitch, yaw, roll)` in degrees.
    pub fn pitch_yaw_roll_degrees(&self) -> Vec3 {
        let (yaw, neg_pitch, neg_roll) = self.rotation.to_euler(EulerRot::ZYX);
        Vec3::new(
            (-neg_pitch).to_degrees(),
            yaw.to_degrees(),
            (-neg_roll).to_degrees(),
        )
    }
}

/// Quaternion for a `(pitch, yaw, roll)` triple in degrees.
///
/// Yaw turns about +Z, positive pitch lifts the forward axis toward +Z and
/// roll turns about the forward axis.
pub fn orientation_from_degrees(pitch_yaw_roll: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        pitch_yaw_roll.y.to_radians(),
        -pitch_yaw_roll.x.to_radians(),
        -pitch_yaw_roll.z.to_radians(),
    )
}

/// One camera key converted into engine space.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraKey {
    pub frame: u32,
    /// Pivot relative to the rig center, already scaled.
    pub center_offset: Vec3,
    /// `(pitch, yaw, roll)` around the pivot, in degrees.
    pub rotation_degrees: Vec3,
    /// Boom length from pivot to lens, already scaled.
    pub distance: f32,
    pub fov: f32,
    pub projection: ProjectionMode,
    /// Final lens transform in world space.
    pub transform: CameraTransform,
}

/// Converts a raw camera frame relative to `base`.
///
/// The pivot offset is applied first and the lens is then pushed along the
/// resulting forward axis by the scaled distance; the order matters as soon
/// as the frame has any rotation.
pub fn convert_camera_frame(
    base: &CameraTransform,
    frame: &CameraFrame,
    distance_scale_bias: f32,
    fov_scale_bias: f32,
) -> Result<CameraKey, Error> {
    let projection = frame.projection()?;

    let raw = frame.location;
    let center_offset = Vec3::new(raw.z, raw.x, raw.y) * distance_scale_bias;
    let rotation_degrees = Vec3::new(
        (-frame.rotation.x).to_degrees(),
        (-frame.rotation.y).to_degrees(),
        frame.rotation.z.to_degrees(),
    );
    let distance = frame.distance * distance_scale_bias;

    let pivot = CameraTransform::from_translation_rotation(
        base.transform_point(center_offset),
        base.transform_rotation(orientation_from_degrees(rotation_degrees)),
    );
    let transform = CameraTransform {
        translation: pivot.translation + pivot.forward() * distance,
        ..pivot
    };

    Ok(CameraKey {
        frame: frame.frame,
        center_offset,
        rotation_degrees,
        distance,
        fov: frame.viewing_angle as f32 * fov_scale_bias,
        projection,
        transform,
    })
}

/// Returns the frames sorted by frame index.
///
/// The sort is stable and repeated frame indices are all kept.
pub fn normalize_camera_frames(frames: &[CameraFrame]) -> Vec<CameraFrame> {
    let mut sorted = frames.to_vec();
    sorted.sort_by_key(|f| f.frame);
    sorted
}

/// Where and how camera keys are placed in the scene.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CameraRig {
    /// Usually at the performer, facing them.
    pub center: CameraTransform,
    pub distance_scale_bias: f32,
    /// Multiplier from the file's viewing angle to the engine's field of view.
    pub fov_scale_bias: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            center: CameraTransform::IDENTITY,
            distance_scale_bias: 10.0,
            fov_scale_bias: 1.666,
        }
    }
}

impl CameraRig {
    pub fn convert(&self, frame: &CameraFrame) -> Result<CameraKey, Error> {
        convert_camera_frame(
            &self.center,
            frame,
            self.distance_scale_bias,
            self.fov_scale_bias,
        )
    }

    /// Converts every frame in order, stopping at the first invalid one.
    pub fn convert_all(&self, frames: &[CameraFrame]) -> Result<Vec<CameraKey>, Error> {
        frames.iter().map(|f| self.convert(f)).collect()
    }
}
