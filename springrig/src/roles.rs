use crate::PartTag;
use std::collections::HashMap;

/// Canonical engine-defined skeletal role, independent of any specific
/// model's bone names.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HumanoidRole {
    Head,
    Neck,
    LeftShoulder,
    RightShoulder,
    Spine,
    Chest,
    Hips,
    LeftUpperLeg,
    RightUpperLeg,
    LeftLowerLeg,
    RightLowerLeg,
    LeftUpperArm,
    RightUpperArm,
    LeftLowerArm,
    RightLowerArm,
}

impl HumanoidRole {
    /// The opposite-side role for paired limbs; center roles map to
    /// themselves.
    pub fn mirror(self) -> HumanoidRole {
        match self {
            Self::LeftShoulder => Self::RightShoulder,
            Self::RightShoulder => Self::LeftShoulder,
            Self::LeftUpperLeg => Self::RightUpperLeg,
            Self::RightUpperLeg => Self::LeftUpperLeg,
            Self::LeftLowerLeg => Self::RightLowerLeg,
            Self::RightLowerLeg => Self::LeftLowerLeg,
            Self::LeftUpperArm => Self::RightUpperArm,
            Self::RightUpperArm => Self::LeftUpperArm,
            Self::LeftLowerArm => Self::RightLowerArm,
            Self::RightLowerArm => Self::LeftLowerArm,
            center => center,
        }
    }
}

/// Humanoid roles registered for a part, in resolution order. Empty for the
/// name-only parts (hair, skirt, chest, tail).
pub fn roles_for(tag: PartTag) -> &'static [HumanoidRole] {
    match tag {
        PartTag::Head => &[HumanoidRole::Head],
        PartTag::Neck => &[HumanoidRole::Neck],
        PartTag::Shoulder => &[HumanoidRole::LeftShoulder, HumanoidRole::RightShoulder],
        PartTag::Torso => &[HumanoidRole::Spine, HumanoidRole::Chest],
        PartTag::Hip => &[
            HumanoidRole::Hips,
            HumanoidRole::LeftUpperLeg,
            HumanoidRole::RightUpperLeg,
        ],
        PartTag::Knee => &[HumanoidRole::LeftLowerLeg, HumanoidRole::RightLowerLeg],
        PartTag::Arm => &[HumanoidRole::LeftUpperArm, HumanoidRole::RightUpperArm],
        PartTag::Elbow => &[HumanoidRole::LeftLowerArm, HumanoidRole::RightLowerArm],
        PartTag::Hair | PartTag::Skirt | PartTag::Chest | PartTag::Tail => &[],
    }
}

/// Maps canonical humanoid roles to concrete skeleton nodes. Provided by the
/// host's retargeting system; may be absent for non-humanoid models.
pub trait HumanoidBinding {
    fn node_for(&self, role: HumanoidRole) -> Option<usize>;
}

impl HumanoidBinding for HashMap<HumanoidRole, usize> {
    fn node_for(&self, role: HumanoidRole) -> Option<usize> {
        self.get(&role).copied()
    }
}
