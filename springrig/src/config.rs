//! Serializable snapshot of the builder input, used to save and restore a
//! rig setup independent of any built rig.

use crate::{Error, MatchStrategy, PartProfile, PartTag, RigProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RigConfig {
    pub strategy: MatchStrategy,
    pub colliders: BTreeMap<PartTag, PartProfile>,
    pub chains: BTreeMap<PartTag, PartProfile>,
}

impl Default for RigConfig {
    fn default() -> Self {
        let profile = RigProfile::default();
        Self {
            strategy: MatchStrategy::Hybrid,
            colliders: profile.colliders,
            chains: profile.chains,
        }
    }
}

impl RigConfig {
    pub fn profile(&self) -> RigProfile {
        RigProfile {
            colliders: self.colliders.clone(),
            chains: self.chains.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self)
            .map_err(|err| Error::ConfigJson { message: err.to_string() })
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        serde_json::from_str(text).map_err(|err| Error::ConfigJson { message: err.to_string() })
    }
}
