//! Decoder for VMD ("Vocaloid Motion Data") motion files.
//!
//! [`decode`] turns a byte buffer into a raw [`Document`]. From there camera
//! frames are sorted and converted into engine-space [`CameraKey`]s, and face
//! frames are grouped into per-name [`MorphTrack`]s. [`MotionData`] runs the
//! whole pipeline.
//!
//! The crate performs no I/O except in [`MotionData::from_path`].

#![forbid(unsafe_code)]

mod camera;
mod cursor;
mod decoder;
mod document;
mod error;
mod format;
mod mapping;
mod morph;
mod motion;
mod text;

pub use camera::*;
pub use decoder::decode;
pub use document::*;
pub use error::*;
pub use format::*;
pub use mapping::*;
pub use morph::*;
pub use motion::*;
pub use text::*;

#[cfg(test)]
mod test_support;


#[cfg(test)]
mod decoder_tests;
