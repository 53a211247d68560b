use glam::Vec3;
#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Semantic body-region label driving both classification and physics-profile
/// lookup.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum PartTag {
    Head,
    Neck,
    Shoulder,
    Torso,
    Hip,
    Knee,
    Arm,
    Elbow,
    Hair,
    Skirt,
    Chest,
    Tail,
}

impl PartTag {
    pub const ALL: [PartTag; 12] = [
        Self::Head,
        Self::Neck,
        Self::Shoulder,
        Self::Torso,
        Self::Hip,
        Self::Knee,
        Self::Arm,
        Self::Elbow,
        Self::Hair,
        Self::Skirt,
        Self::Chest,
        Self::Tail,
    ];

    /// Tags with no canonical humanoid role; these always resolve by name.
    pub fn is_name_only(self) -> bool {
        matches!(self, Self::Hair | Self::Skirt | Self::Chest | Self::Tail)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Shoulder => "shoulder",
            Self::Torso => "torso",
            Self::Hip => "hip",
            Self::Knee => "knee",
            Self::Arm => "arm",
            Self::Elbow => "elbow",
            Self::Hair => "hair",
            Self::Skirt => "skirt",
            Self::Chest => "chest",
            Self::Tail => "tail",
        }
    }
}

/// How a part tag is resolved to skeleton nodes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "snake_case"))]
pub enum MatchStrategy {
    NameOnly,
    HumanoidRoleOnly,
    /// Prefers humanoid-role lookup, falling back to name matching per tag;
    /// hair and skirt are always name-matched.
    #[default]
    Hybrid,
}

/// User-editable per-part numeric profile.
///
/// `offsets` and `radius_scales` always hold exactly `count` entries; use
/// [`set_count`](Self::set_count) to change the sphere count so the lists
/// stay in step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub struct PartProfile {
    pub enabled: bool,
    pub base_radius: f32,
    pub count: usize,
    pub offsets: Vec<f32>,
    pub radius_scales: Vec<f32>,
}

impl PartProfile {
    pub fn new(base_radius: f32, count: usize) -> Self {
        let mut profile = Self {
            enabled: true,
            base_radius,
            count: 0,
            offsets: Vec::new(),
            radius_scales: Vec::new(),
        };
        profile.set_count(count);
        profile
    }

    /// Resizes `offsets`/`radius_scales` with `count`, preserving existing
    /// entries by index and padding new entries with defaults (offset 0,
    /// radius scale 1). Counts below 1 are clamped to 1.
    pub fn set_count(&mut self, count: usize) {
        let count = count.max(1);
        self.count = count;
        self.offsets.resize(count, 0.0);
        self.radius_scales.resize(count, 1.0);
    }
}

/// One local collision sphere on a collider proxy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereCollider {
    pub offset: Vec3,
    pub radius: f32,
}

/// Backend-agnostic representation of one configured physics chain.
#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsChain {
    pub stiffness: f32,
    pub gravity_power: f32,
    pub gravity_direction: Vec3,
    pub drag_force: f32,
    pub hit_radius: f32,
    pub center: Option<usize>,
    pub root_nodes: Vec<usize>,
    pub collider_nodes: Vec<usize>,
}

/// Collider proxies and chains produced by a build or codec run.
#[derive(Clone, Debug)]
pub struct RigBuildResult {
    /// The rig-manager container the chains live under.
    pub manager: usize,
    /// Nodes whose sphere lists were written this run, in first-write order.
    pub collider_nodes: Vec<usize>,
    pub chains: Vec<PhysicsChain>,
}

/// Builder input: separate per-tag profile maps for the collider pass and the
/// chain pass.
#[derive(Clone, Debug, PartialEq)]
pub struct RigProfile {
    pub colliders: BTreeMap<PartTag, PartProfile>,
    pub chains: BTreeMap<PartTag, PartProfile>,
}

impl Default for RigProfile {
    /// The conventional setup: colliders on the eight body parts, chains for
    /// hair, skirt, chest and tail.
    fn default() -> Self {
        let mut colliders = BTreeMap::new();
        colliders.insert(PartTag::Head, PartProfile::new(0.1, 1));
        colliders.insert(PartTag::Neck, PartProfile::new(0.045, 1));
        colliders.insert(PartTag::Shoulder, PartProfile::new(0.05, 1));
        let mut torso = PartProfile::new(0.09, 2);
        torso.offsets[1] = 0.12;
        torso.radius_scales[1] = 1.1;
        colliders.insert(PartTag::Torso, torso);
        colliders.insert(PartTag::Hip, PartProfile::new(0.07, 1));
        colliders.insert(PartTag::Knee, PartProfile::new(0.045, 1));
        colliders.insert(PartTag::Arm, PartProfile::new(0.05, 2));
        colliders.insert(PartTag::Elbow, PartProfile::new(0.04, 1));

        let mut chains = BTreeMap::new();
        chains.insert(PartTag::Hair, PartProfile::new(0.02, 1));
        chains.insert(PartTag::Skirt, PartProfile::new(0.02, 1));
        chains.insert(PartTag::Chest, PartProfile::new(0.02, 1));
        chains.insert(PartTag::Tail, PartProfile::new(0.02, 1));

        Self { colliders, chains }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_count_pads_and_truncates_in_step() {
        let mut profile = PartProfile::new(0.1, 2);
        profile.offsets[1] = 0.5;
        profile.radius_scales[1] = 0.8;

        profile.set_count(4);
        assert_eq!(profile.count, 4);
        assert_eq!(profile.offsets, vec![0.0, 0.5, 0.0, 0.0]);
        assert_eq!(profile.radius_scales, vec![1.0, 0.8, 1.0, 1.0]);

        profile.set_count(1);
        assert_eq!(profile.offsets, vec![0.0]);
        assert_eq!(profile.radius_scales, vec![1.0]);

        profile.set_count(0);
        assert_eq!(profile.count, 1);
        assert_eq!(profile.offsets.len(), 1);
        assert_eq!(profile.radius_scales.len(), 1);
    }

    #[test]
    fn name_only_tags_are_the_soft_parts() {
        let name_only: Vec<PartTag> =
            PartTag::ALL.into_iter().filter(|tag| tag.is_name_only()).collect();
        assert_eq!(
            name_only,
            vec![PartTag::Hair, PartTag::Skirt, PartTag::Chest, PartTag::Tail]
        );
    }
}
