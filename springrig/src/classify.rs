use crate::keywords::keywords;
use crate::{HumanoidBinding, MatchStrategy, PartTag, Scene, roles_for};

/// Substring marking inverse-kinematics helper joints; such joints are never
/// physics or collision candidates.
pub(crate) const IK_MARKER: &str = "ik";

/// Suffix that distinguishes a deform bone from a non-deform bone sharing a
/// similar name. Hip and knee name matching only accepts deform bones.
pub(crate) const DEFORM_SUFFIX: char = 'D';

/// Resolves a part tag to skeleton nodes under the chosen strategy.
///
/// `candidates` is the node set name matching draws from (normally every
/// skeleton descendant that survived subtree exclusion); humanoid-role
/// matching resolves through `binding` instead. An empty result is a normal
/// outcome for models lacking the part, not an error.
pub fn classify(
    scene: &Scene,
    tag: PartTag,
    candidates: &[usize],
    binding: Option<&dyn HumanoidBinding>,
    strategy: MatchStrategy,
) -> Vec<usize> {
    match strategy {
        MatchStrategy::NameOnly => classify_by_name(scene, tag, candidates),
        MatchStrategy::HumanoidRoleOnly => classify_by_role(tag, binding),
        MatchStrategy::Hybrid => {
            // Hair and skirt strands are model-specific bones a canonical
            // humanoid never names, so they always go through name matching.
            if matches!(tag, PartTag::Hair | PartTag::Skirt) {
                return classify_by_name(scene, tag, candidates);
            }
            let matched = classify_by_role(tag, binding);
            if matched.is_empty() {
                classify_by_name(scene, tag, candidates)
            } else {
                matched
            }
        }
    }
}

fn classify_by_name(scene: &Scene, tag: PartTag, candidates: &[usize]) -> Vec<usize> {
    let needs_deform_suffix = matches!(tag, PartTag::Hip | PartTag::Knee);
    candidates
        .iter()
        .copied()
        .filter(|&node| {
            let name = scene.name(node);
            let lower = name.to_lowercase();
            if lower.contains(IK_MARKER) {
                return false;
            }
            if needs_deform_suffix && !name.ends_with(DEFORM_SUFFIX) {
                return false;
            }
            keywords(tag).iter().any(|keyword| lower.contains(keyword))
        })
        .collect()
}

fn classify_by_role(tag: PartTag, binding: Option<&dyn HumanoidBinding>) -> Vec<usize> {
    let Some(binding) = binding else {
        return Vec::new();
    };
    roles_for(tag)
        .iter()
        .filter_map(|&role| binding.node_for(role))
        .collect()
}

/// True when any ancestor strictly between `node` and `rig_root` has a name
/// containing `rule` (case-insensitive). Used to hide an alternate-limb
/// subtree from every part tag.
pub fn is_excluded(scene: &Scene, node: usize, rig_root: usize, rule: &str) -> bool {
    let rule = rule.to_lowercase();
    let mut current = scene.parent(node);
    while let Some(ancestor) = current {
        if ancestor == rig_root {
            break;
        }
        if scene.name(ancestor).to_lowercase().contains(&rule) {
            return true;
        }
        current = scene.parent(ancestor);
    }
    false
}
