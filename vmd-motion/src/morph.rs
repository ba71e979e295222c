//! Morph (facial blend shape) tracks.

use crate::{FaceFrame, LegacyTextDecoder};
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphKey {
    pub frame: u32,
    pub weight: f32,
}

/// Keys of one named morph, sorted by frame.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphTrack {
    pub keys: Vec<MorphKey>,
}

/// A key placed on a time axis in seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
}

impl MorphTrack {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn last_frame(&self) -> Option<u32> {
        self.keys.last().map(|k| k.frame)
    }

    /// Places the keys at `frame / frame_rate` seconds.
    ///
    /// Keys past `max_time` are dropped rather than extending the target.
    pub fn curve_keys(&self, frame_rate: f32, max_time: f32, negate: bool) -> Vec<CurveKey> {
        let mut out = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            let time = key.frame as f32 / frame_rate;
            if time > max_time {
                log::warn!(
                    "morph key at frame {} maps to {time}s, past the target length {max_time}s; skipped",
                    key.frame
                );
                continue;
            }
            let value = if negate { -key.weight } else { key.weight };
            out.push(CurveKey { time, value });
        }
        out
    }
}

/// Groups face frames into per-name tracks.
///
/// Tracks with fewer than two keys are discarded, even when the single key
/// carries a nonzero weight or frame. Remaining tracks are stably sorted by
/// frame. Iteration order of the returned map is unspecified.
pub fn build_morph_tracks(
    frames: &[FaceFrame],
    text: &dyn LegacyTextDecoder,
) -> HashMap<String, MorphTrack> {
    let mut order: Vec<(String, MorphTrack)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for f in frames {
        let name = text.decode(&f.name);
        let slot = *index.entry(name.clone()).or_insert_with(|| {
            order.push((name, MorphTrack::default()));
            order.len() - 1
        });
        order[slot].1.keys.push(MorphKey {
            frame: f.frame,
            weight: f.weight,
        });
    }

    let mut tracks = HashMap::with_capacity(order.len());
    for (name, mut track) in order {
        match track.keys.as_slice() {
            [] => {
                log::debug!("dropping empty morph track {name:?}");
                continue;
            }
            [only] => {
                if only.weight != 0.0 {
                    log::warn!(
                        "dropping single-key morph track {name:?} with nonzero weight {}",
                        only.weight
                    );
                }
                if only.frame != 0 {
                    log::warn!(
                        "dropping single-key morph track {name:?} at nonzero frame {}",
                        only.frame
                    );
                }
                log::debug!("dropping single-key morph track {name:?}");
                continue;
            }
            _ => {}
        }

        track.keys.sort_by_key(|k| k.frame);
        log::debug!("morph track {name:?} keys={}", track.keys.len());
        tracks.insert(name, track);
    }
    tracks
}
