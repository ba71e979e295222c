//! VMD (`.vmd`) decoder.
//!
//! The decoder is IO-free: it operates on an in-memory byte slice and either
//! returns a complete [`Document`] or an error, never a partial one.

use crate::cursor::BinaryCursor;
use crate::format::{BONE_PADDING_LEN, MAGIC_LEN, VMD_MAGIC};
use crate::{BoneFrame, CameraFrame, Document, Error, FaceFrame, Header, TrackKind};
use glam::Quat;

impl Document {
    pub fn from_vmd_bytes(bytes: &[u8]) -> Result<Self, Error> {
        decode(bytes)
    }
}

pub fn decode(bytes: &[u8]) -> Result<Document, Error> {
    let mut input = BinaryCursor::new(bytes);

    let header = read_header(&mut input)?;
    let bone_frames = read_section(&mut input, TrackKind::Bone, read_bone_frame)?;
    let face_frames = read_section(&mut input, TrackKind::Face, read_face_frame)?;
    let camera_frames = read_section(&mut input, TrackKind::Camera, read_camera_frame)?;

    // Newer exports append light, shadow and IK sections.
    if input.remaining() > 0 {
        log::debug!(
            "ignoring {} trailing bytes after camera section at offset {}",
            input.remaining(),
            input.position()
        );
    }

    Ok(Document {
        header,
        bone_frames,
        face_frames,
        camera_frames,
    })
}

fn read_header(input: &mut BinaryCursor<'_>) -> Result<Header, Error> {
    let magic: [u8; MAGIC_LEN] = input.read_fixed_bytes()?;
    if magic != VMD_MAGIC {
        return Err(Error::BadMagic { found: magic });
    }
    let model_name = input.read_fixed_bytes()?;
    Ok(Header { magic, model_name })
}

fn read_section<'a, T, F>(
    input: &mut BinaryCursor<'a>,
    kind: TrackKind,
    read_record: F,
) -> Result<Vec<T>, Error>
where
    F: Fn(&mut BinaryCursor<'a>) -> Result<T, Error>,
{
    let count = input.read_u32_le()?;
    let record_size = kind.record_size();
    let remaining = input.remaining();
    // Checked before allocating so a corrupt count cannot reserve gigabytes.
    if (count as u64) * (record_size as u64) > remaining as u64 {
        return Err(Error::OversizedCount {
            kind,
            count,
            record_size,
            remaining,
        });
    }

    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(read_record(input)?);
    }
    log::trace!("read {count} {kind} records");
    Ok(records)
}

fn read_bone_frame(input: &mut BinaryCursor<'_>) -> Result<BoneFrame, Error> {
    let name = input.read_fixed_bytes()?;
    let frame = input.read_u32_le()?;
    let position = input.read_vec3_le()?;
    let rotation = Quat::from_xyzw(
        input.read_f32_le()?,
        input.read_f32_le()?,
        input.read_f32_le()?,
        input.read_f32_le()?,
    );
    let interpolation = input.read_fixed_bytes()?;
    input.skip(BONE_PADDING_LEN)?;
    Ok(BoneFrame {
        name,
        frame,
        position,
        rotation,
        interpolation,
    })
}

fn read_face_frame(input: &mut BinaryCursor<'_>) -> Result<FaceFrame, Error> {
    Ok(FaceFrame {
        name: input.read_fixed_bytes()?,
        frame: input.read_u32_le()?,
        weight: input.read_f32_le()?,
    })
}

fn read_camera_frame(input: &mut BinaryCursor<'_>) -> Result<CameraFrame, Error> {
    Ok(CameraFrame {
        frame: input.read_u32_le()?,
        distance: input.read_f32_le()?,
        location: input.read_vec3_le()?,
        rotation: input.read_vec3_le()?,
        interpolation: input.read_fixed_bytes()?,
        viewing_angle: input.read_u32_le()?,
        perspective: input.read_u8()?,
    })
}
