use crate::Error;
use std::collections::HashSet;

/// Anatomical grouping used to scope matching candidates.
///
/// Categories are assigned by the classifier that produced the bone list;
/// `Unknown` is the catch-all for bones the classifier could not place.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum BoneCategory {
    Torso,
    Arm,
    Hand,
    Leg,
    Wing,
    Tail,
    #[default]
    Unknown,
}

impl BoneCategory {
    pub const COUNT: usize = 7;

    pub const ALL: [BoneCategory; Self::COUNT] = [
        Self::Torso,
        Self::Arm,
        Self::Hand,
        Self::Leg,
        Self::Wing,
        Self::Tail,
        Self::Unknown,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            Self::Torso => 0,
            Self::Arm => 1,
            Self::Hand => 2,
            Self::Leg => 3,
            Self::Wing => 4,
            Self::Tail => 5,
            Self::Unknown => 6,
        }
    }

    #[cfg(feature = "json")]
    pub(crate) fn from_json_name(name: &str) -> Option<Self> {
        match name {
            "torso" => Some(Self::Torso),
            "arm" => Some(Self::Arm),
            "hand" => Some(Self::Hand),
            "leg" => Some(Self::Leg),
            "wing" => Some(Self::Wing),
            "tail" => Some(Self::Tail),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

/// Laterality of a bone on a mirrored rig.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum BoneSide {
    Left,
    Right,
    #[default]
    Center,
}

impl BoneSide {
    #[cfg(feature = "json")]
    pub(crate) fn from_json_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            // Classifiers emit "none" for bones on the mirror plane.
            "center" | "none" => Some(Self::Center),
            _ => None,
        }
    }
}

/// Descriptor for a single bone, as produced by the upstream classifier.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoneMetadata {
    /// Unique within one skeleton's bone list.
    pub name: String,
    pub category: BoneCategory,
    pub side: BoneSide,
}

/// Checks that every bone name in the list is unique.
pub fn validate_bone_names(bones: &[BoneMetadata]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(bones.len());
    for bone in bones {
        if !seen.insert(bone.name.as_str()) {
            return Err(Error::DuplicateBoneName {
                name: bone.name.clone(),
            });
        }
    }
    Ok(())
}
