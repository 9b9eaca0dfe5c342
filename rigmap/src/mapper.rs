use crate::{BoneCategory, BoneMetadata, CategoryMatcher, ExactNameMatcher};
use std::collections::HashMap;

/// Maps the bones of a target skeleton onto the source bones that drive them.
///
/// One matcher is registered per [`BoneCategory`]; out of the box every
/// category uses [`ExactNameMatcher`]. A category's policy can be swapped
/// without touching the other categories.
pub struct BoneAutoMapper {
    matchers: [Box<dyn CategoryMatcher>; BoneCategory::COUNT],
}

impl Default for BoneAutoMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl BoneAutoMapper {
    pub fn new() -> Self {
        Self {
            matchers: std::array::from_fn(|_| {
                Box::new(ExactNameMatcher) as Box<dyn CategoryMatcher>
            }),
        }
    }

    pub fn set_matcher(&mut self, category: BoneCategory, matcher: Box<dyn CategoryMatcher>) {
        self.matchers[category.index()] = matcher;
    }

    pub fn matcher(&self, category: BoneCategory) -> &dyn CategoryMatcher {
        self.matchers[category.index()].as_ref()
    }

    /// Produces the merged `target name -> source name` mapping.
    ///
    /// Both lists are partitioned by category, each category's matcher runs on
    /// its own partition, and the disjoint partial mappings are unioned. Bones
    /// never match across categories; a target bone its matcher could not
    /// place is absent from the result.
    pub fn map_bones(
        &self,
        source_bones: &[BoneMetadata],
        target_bones: &[BoneMetadata],
    ) -> HashMap<String, String> {
        let sources = partition_by_category(source_bones);
        let targets = partition_by_category(target_bones);

        let mut mappings = HashMap::with_capacity(target_bones.len());
        for category in BoneCategory::ALL {
            let index = category.index();
            mappings.extend(self.matchers[index].match_bones(&sources[index], &targets[index]));
        }
        mappings
    }
}

/// Splits a bone list into per-category buckets, preserving input order.
fn partition_by_category(bones: &[BoneMetadata]) -> [Vec<BoneMetadata>; BoneCategory::COUNT] {
    let mut buckets: [Vec<BoneMetadata>; BoneCategory::COUNT] = std::array::from_fn(|_| Vec::new());
    for bone in bones {
        buckets[bone.category.index()].push(bone.clone());
    }
    buckets
}
