use crate::{BoneCategory, BoneMetadata, BoneSide, CategoryMatcher, ExactNameMatcher};

fn torso(name: &str) -> BoneMetadata {
    BoneMetadata {
        name: name.to_string(),
        category: BoneCategory::Torso,
        side: BoneSide::Center,
    }
}

fn torso_bones(names: &[&str]) -> Vec<BoneMetadata> {
    names.iter().map(|name| torso(name)).collect()
}

#[test]
fn exact_name_matches_are_complete() {
    let source = torso_bones(&["Hips", "Spine", "Spine1", "Neck", "Head"]);
    let target = torso_bones(&["Hips", "Spine", "Neck", "Head", "HeadTop"]);

    let mappings = ExactNameMatcher.match_bones(&source, &target);

    assert_eq!(mappings.len(), 4);
    assert_eq!(mappings.get("Hips").map(String::as_str), Some("Hips"));
    assert_eq!(mappings.get("Spine").map(String::as_str), Some("Spine"));
    assert_eq!(mappings.get("Neck").map(String::as_str), Some("Neck"));
    assert_eq!(mappings.get("Head").map(String::as_str), Some("Head"));

    // No source bone is named "HeadTop": the target stays unmapped rather than
    // falling back to a guess.
    assert!(!mappings.contains_key("HeadTop"));
}

#[test]
fn output_names_come_from_the_inputs() {
    let source = torso_bones(&["Pelvis", "Spine", "Chest", "Neck"]);
    let target = torso_bones(&["Hips", "Spine", "Chest", "Head"]);

    let mappings = ExactNameMatcher.match_bones(&source, &target);

    let source_names: Vec<&str> = source.iter().map(|b| b.name.as_str()).collect();
    let target_names: Vec<&str> = target.iter().map(|b| b.name.as_str()).collect();
    for (target_name, source_name) in &mappings {
        assert!(target_names.contains(&target_name.as_str()));
        assert!(source_names.contains(&source_name.as_str()));
    }
}

#[test]
fn empty_inputs_yield_empty_mappings() {
    let bones = torso_bones(&["Hips"]);

    assert!(ExactNameMatcher.match_bones(&[], &[]).is_empty());
    assert!(ExactNameMatcher.match_bones(&[], &bones).is_empty());
    assert!(ExactNameMatcher.match_bones(&bones, &[]).is_empty());
}

#[test]
fn duplicate_source_names_resolve_to_one_entry() {
    // Upstream data-quality issue: the uniqueness invariant is violated on the
    // source side. The first occurrence wins and nothing panics.
    let mut source = torso_bones(&["Spine1", "Spine1"]);
    source[0].side = BoneSide::Left;
    source[1].side = BoneSide::Right;
    let target = torso_bones(&["Spine1"]);

    let mappings = ExactNameMatcher.match_bones(&source, &target);

    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings.get("Spine1").map(String::as_str), Some("Spine1"));
}

#[test]
fn matching_is_idempotent() {
    let source = torso_bones(&["Hips", "Spine", "Neck"]);
    let target = torso_bones(&["Spine", "Neck", "Head"]);

    let first = ExactNameMatcher.match_bones(&source, &target);
    let second = ExactNameMatcher.match_bones(&source, &target);

    assert_eq!(first, second);
}

#[test]
fn side_metadata_does_not_affect_exact_matching() {
    let mut source = torso_bones(&["Shoulder"]);
    source[0].side = BoneSide::Left;
    let mut target = torso_bones(&["Shoulder"]);
    target[0].side = BoneSide::Right;

    let mappings = ExactNameMatcher.match_bones(&source, &target);

    assert_eq!(mappings.get("Shoulder").map(String::as_str), Some("Shoulder"));
}
