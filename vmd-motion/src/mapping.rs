//! Renaming of MMD morph names onto a target mesh's morph targets.

use crate::{CurveKey, MotionData};
use std::collections::HashMap;

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MorphMappingEntry {
    pub target: String,
    /// Write the negated weight.
    #[cfg_attr(feature = "serde", serde(default))]
    pub negate: bool,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedMorph<'a> {
    pub name: &'a str,
    pub negate: bool,
}

/// MMD morph name → target morph.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MorphMapping {
    /// Skip morphs that have no entry instead of passing their name through.
    pub restrict: bool,
    pub entries: HashMap<String, MorphMappingEntry>,
}

impl Default for MorphMapping {
    fn default() -> Self {
        Self {
            restrict: true,
            entries: HashMap::new(),
        }
    }
}

impl MorphMapping {
    /// Builds a restricted mapping from a plain rename table.
    pub fn from_name_map(names: HashMap<String, String>) -> Self {
        let entries = names
            .into_iter()
            .map(|(source, target)| {
                (
                    source,
                    MorphMappingEntry {
                        target,
                        negate: false,
                    },
                )
            })
            .collect();
        Self {
            restrict: true,
            entries,
        }
    }

    pub fn insert(&mut self, source: impl Into<String>, entry: MorphMappingEntry) {
        self.entries.insert(source.into(), entry);
    }

    pub fn resolve<'a>(&'a self, name: &'a str) -> Option<ResolvedMorph<'a>> {
        match self.entries.get(name) {
            Some(entry) => {
                log::debug!("morph {name:?} mapped to {:?}", entry.target);
                Some(ResolvedMorph {
                    name: &entry.target,
                    negate: entry.negate,
                })
            }
            None if self.restrict => {
                log::debug!("morph {name:?} not mapped; skipped");
                None
            }
            None => {
                log::debug!("morph {name:?} not mapped; using raw name");
                Some(ResolvedMorph {
                    name,
                    negate: false,
                })
            }
        }
    }
}

/// How morph tracks are turned into time-based curves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MorphImportSettings {
    /// Frames per second of the source motion.
    pub frame_rate: f32,
    /// `None` keeps every track under its MMD name.
    pub mapping: Option<MorphMapping>,
}

impl Default for MorphImportSettings {
    fn default() -> Self {
        Self {
            frame_rate: 30.0,
            mapping: None,
        }
    }
}

impl MorphImportSettings {
    /// Curves for every morph track that survives the mapping, keyed by target
    /// name and sorted by that name. Keys later than `max_time` seconds are
    /// dropped.
    pub fn morph_curves(
        &self,
        motion: &MotionData,
        max_time: f32,
    ) -> Vec<(String, Vec<CurveKey>)> {
        let mut curves = Vec::with_capacity(motion.morph_tracks.len());
        for (name, track) in &motion.morph_tracks {
            let resolved = match &self.mapping {
                Some(mapping) => match mapping.resolve(name) {
                    Some(resolved) => resolved,
                    None => continue,
                },
                None => ResolvedMorph {
                    name,
                    negate: false,
                },
            };
            let keys = track.curve_keys(self.frame_rate, max_time, resolved.negate);
            curves.push((resolved.name.to_string(), keys));
        }
        curves.sort_by(|a, b| a.0.cmp(&b.0));
        curves
    }
}
