use crate::{
    Error, HumanoidBinding, MatchStrategy, PartProfile, PartTag, PhysicsChain, RigBackend,
    RigBuildResult, RigProfile, Scene, SphereCollider, classify, is_excluded, reduce_to_roots,
};
use glam::Vec3;
use std::collections::{BTreeMap, HashSet};

/// Name of the container node, directly under the skeleton root, that owns
/// every synthesized physics chain.
pub const RIG_MANAGER_NAME: &str = "SpringManager";

/// Subtree name hiding an alternate-limb substitute from classification.
pub const OVERRIDE_SUBTREE_NAME: &str = "AltLimb";

/// Fixed lateral displacement of the second arm collider sphere. Tied to the
/// rig convention this system targets; not configurable.
const ARM_LATERAL_OFFSET: f32 = 0.1;

/// Sphere index the lateral arm displacement applies to.
const ARM_LATERAL_INDEX: usize = 1;

/// Hit radius shared by every synthesized chain.
const CHAIN_HIT_RADIUS: f32 = 0.02;

/// Gravity direction shared by every synthesized chain.
const CHAIN_GRAVITY_DIRECTION: Vec3 = Vec3::new(0.0, -1.0, 0.0);

/// Chains only ever reference colliders synthesized for these parts; the
/// soft parts (hair, skirt, chest, tail) produce chains, never referenced
/// collision geometry.
const COLLIDER_RELEVANT_TAGS: [PartTag; 8] = [
    PartTag::Head,
    PartTag::Neck,
    PartTag::Shoulder,
    PartTag::Torso,
    PartTag::Hip,
    PartTag::Knee,
    PartTag::Arm,
    PartTag::Elbow,
];

struct ChainPreset {
    stiffness: f32,
    gravity_power: f32,
    drag_force: f32,
}

fn chain_preset(tag: PartTag) -> ChainPreset {
    match tag {
        PartTag::Hair => ChainPreset { stiffness: 0.8, gravity_power: 0.05, drag_force: 0.3 },
        PartTag::Skirt => ChainPreset { stiffness: 0.4, gravity_power: 0.2, drag_force: 0.3 },
        PartTag::Chest => ChainPreset { stiffness: 1.6, gravity_power: 0.0, drag_force: 0.7 },
        PartTag::Tail => ChainPreset { stiffness: 0.6, gravity_power: 0.1, drag_force: 0.4 },
        _ => ChainPreset { stiffness: 1.0, gravity_power: 0.0, drag_force: 0.4 },
    }
}

/// Synthesizes collider proxies and physics chains over a skeleton.
///
/// Re-running against an unchanged skeleton is idempotent: sphere lists are
/// replaced in place and chains are fully cleared then rebuilt.
pub struct RigBuilder<B> {
    backend: B,
}

impl<B: RigBackend> RigBuilder<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn build(
        &self,
        scene: &mut Scene,
        skeleton_root: usize,
        binding: Option<&dyn HumanoidBinding>,
        profile: &RigProfile,
        strategy: MatchStrategy,
    ) -> Result<RigBuildResult, Error> {
        // Configuration errors abort before the scene is touched.
        if !scene.contains(skeleton_root) {
            return Err(Error::UnknownNode { index: skeleton_root });
        }
        if strategy == MatchStrategy::HumanoidRoleOnly && binding.is_none() {
            return Err(Error::MissingHumanoidBinding);
        }
        validate_profiles(&profile.colliders)?;
        validate_profiles(&profile.chains)?;

        let candidates: Vec<usize> = scene
            .descendants(skeleton_root)
            .into_iter()
            .filter(|&node| !is_excluded(scene, node, skeleton_root, OVERRIDE_SUBTREE_NAME))
            .collect();
        let candidate_set: HashSet<usize> = candidates.iter().copied().collect();

        let manager = match scene.find_child(skeleton_root, RIG_MANAGER_NAME) {
            Some(node) => node,
            None => scene.add_node(skeleton_root, RIG_MANAGER_NAME),
        };
        self.backend.clear_chains(scene, manager);

        // Collider pass. Always hybrid: collider placement must work whether
        // or not the model is a canonical humanoid.
        let mut collider_nodes = Vec::new();
        let mut written: HashSet<usize> = HashSet::new();
        let mut relevant_colliders = Vec::new();
        let mut relevant_seen: HashSet<usize> = HashSet::new();
        for (&tag, part) in &profile.colliders {
            if !part.enabled {
                continue;
            }
            let matched = classify(scene, tag, &candidates, binding, MatchStrategy::Hybrid);
            let mut tag_seen: HashSet<usize> = HashSet::new();
            for node in matched {
                if !candidate_set.contains(&node) || !tag_seen.insert(node) {
                    continue;
                }
                let spheres = collider_spheres(scene, tag, node, part);
                self.backend.write_colliders(scene, node, spheres);
                if written.insert(node) {
                    collider_nodes.push(node);
                }
                if COLLIDER_RELEVANT_TAGS.contains(&tag) && relevant_seen.insert(node) {
                    relevant_colliders.push(node);
                }
            }
        }

        // Chain pass. One chain per enabled part with a non-empty root set.
        let mut chains = Vec::new();
        for (&tag, part) in &profile.chains {
            if !part.enabled {
                continue;
            }
            let mut matched = classify(scene, tag, &candidates, binding, strategy);
            let mut matched_seen: HashSet<usize> = HashSet::new();
            matched.retain(|&node| candidate_set.contains(&node) && matched_seen.insert(node));
            let roots = reduce_to_roots(scene, &matched);
            if roots.is_empty() {
                continue;
            }
            let preset = chain_preset(tag);
            let chain = PhysicsChain {
                stiffness: preset.stiffness,
                gravity_power: preset.gravity_power,
                gravity_direction: CHAIN_GRAVITY_DIRECTION,
                drag_force: preset.drag_force,
                hit_radius: CHAIN_HIT_RADIUS,
                center: None,
                root_nodes: roots,
                collider_nodes: relevant_colliders.clone(),
            };
            self.backend.write_chain(scene, manager, &chain);
            chains.push(chain);
        }

        Ok(RigBuildResult { manager, collider_nodes, chains })
    }
}

fn validate_profiles(profiles: &BTreeMap<PartTag, PartProfile>) -> Result<(), Error> {
    for (tag, part) in profiles {
        if !part.enabled {
            continue;
        }
        if !(part.base_radius > 0.0) {
            return Err(Error::InvalidProfile {
                part: tag.name(),
                message: format!("base radius must be positive, got {}", part.base_radius),
            });
        }
        if part.count == 0 {
            return Err(Error::InvalidProfile {
                part: tag.name(),
                message: "sphere count must be at least 1".to_string(),
            });
        }
        if part.offsets.len() != part.count || part.radius_scales.len() != part.count {
            return Err(Error::InvalidProfile {
                part: tag.name(),
                message: format!(
                    "offset and radius-scale lists must both have {} entries",
                    part.count
                ),
            });
        }
    }
    Ok(())
}

fn collider_spheres(
    scene: &Scene,
    tag: PartTag,
    node: usize,
    part: &PartProfile,
) -> Vec<SphereCollider> {
    let scale_factor = scene.world_scale_factor(node);
    let mut spheres = Vec::with_capacity(part.count);
    for index in 0..part.count {
        let offset = if tag == PartTag::Arm {
            let sign = lateral_sign(scene.name(node));
            if index == ARM_LATERAL_INDEX {
                Vec3::new(ARM_LATERAL_OFFSET * sign * scale_factor, 0.0, 0.0)
            } else {
                Vec3::ZERO
            }
        } else {
            Vec3::new(0.0, part.offsets[index], 0.0)
        };
        spheres.push(SphereCollider {
            offset,
            radius: part.base_radius * scale_factor * part.radius_scales[index],
        });
    }
    spheres
}

/// Sign of the lateral arm displacement: left arms push outward along -X,
/// right arms along +X, unsided nodes stay centered.
fn lateral_sign(name: &str) -> f32 {
    if name.contains("Left") {
        -1.0
    } else if name.contains("Right") {
        1.0
    } else {
        0.0
    }
}
