use crate::BoneMetadata;
use std::collections::HashMap;

/// Matching policy for one anatomical category.
///
/// The auto mapper partitions both skeletons by category and hands each
/// category's bones to its registered matcher, so an implementation only ever
/// sees bones of a single category. A target bone without an entry in the
/// returned map has no driving source bone; that is the only failure signal,
/// never an error.
pub trait CategoryMatcher: Send + Sync {
    fn match_bones(
        &self,
        source_bones: &[BoneMetadata],
        target_bones: &[BoneMetadata],
    ) -> HashMap<String, String>;
}

/// Default policy for every category: exact name equality.
///
/// Source bones are scanned in input order and the first equal name wins, so
/// duplicate source names resolve to the earliest occurrence. Side metadata is
/// ignored.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExactNameMatcher;

impl CategoryMatcher for ExactNameMatcher {
    fn match_bones(
        &self,
        source_bones: &[BoneMetadata],
        target_bones: &[BoneMetadata],
    ) -> HashMap<String, String> {
        let mut mappings = HashMap::with_capacity(target_bones.len());

        for target in target_bones {
            let matched = source_bones.iter().find(|source| source.name == target.name);
            if let Some(source) = matched {
                mappings.insert(target.name.clone(), source.name.clone());
            }
        }

        mappings
    }
}
