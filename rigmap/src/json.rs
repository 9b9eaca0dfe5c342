use crate::{BoneCategory, BoneMetadata, BoneSide, Error, validate_bone_names};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Root {
    bones: Option<Vec<BoneDef>>,
}

#[derive(Debug, Deserialize)]
struct BoneDef {
    #[serde(default)]
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    side: Option<String>,
}

/// Parses a classifier-produced bone descriptor list.
///
/// Expected shape: `{ "bones": [ { "name": "Hips", "category": "torso",
/// "side": "center" }, ... ] }`. A missing `bones` key is an empty list, a
/// missing `category` is `"unknown"` and a missing `side` is `"center"`. An
/// unrecognized category or side string is an error rather than a silently
/// dropped bone, and names must be unique within the list.
pub fn bones_from_json_str(input: &str) -> Result<Vec<BoneMetadata>, Error> {
    let root: Root = serde_json::from_str(input).map_err(|e| Error::JsonParse {
        message: e.to_string(),
    })?;

    let defs = root.bones.unwrap_or_default();
    let mut bones = Vec::with_capacity(defs.len());
    for (index, def) in defs.into_iter().enumerate() {
        if def.name.is_empty() {
            return Err(Error::JsonMissingBoneName { index });
        }

        let category = match def.category.as_deref() {
            None => BoneCategory::default(),
            Some(raw) => {
                BoneCategory::from_json_name(raw).ok_or_else(|| Error::JsonUnknownCategory {
                    bone: def.name.clone(),
                    value: raw.to_string(),
                })?
            }
        };

        let side = match def.side.as_deref() {
            None => BoneSide::default(),
            Some(raw) => BoneSide::from_json_name(raw).ok_or_else(|| Error::JsonUnknownSide {
                bone: def.name.clone(),
                value: raw.to_string(),
            })?,
        };

        bones.push(BoneMetadata {
            name: def.name,
            category,
            side,
        });
    }

    validate_bone_names(&bones)?;
    Ok(bones)
}
