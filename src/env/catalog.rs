//! In-memory environment catalog

use crate::env::EnvRegistry;
use std::collections::BTreeSet;

/// Environments known out of the box, by Gym id
const BUILTIN_ENV_IDS: &[&str] = &[
    // Classic control
    "Acrobot-v1",
    "CartPole-v1",
    "MountainCar-v0",
    "MountainCarContinuous-v0",
    "Pendulum-v1",
    // Box2D
    "BipedalWalker-v3",
    "BipedalWalkerHardcore-v3",
    "LunarLander-v2",
    "LunarLanderContinuous-v2",
    // MuJoCo
    "Ant-v4",
    "HalfCheetah-v4",
    "Hopper-v4",
    "Humanoid-v4",
    "HumanoidStandup-v4",
    "InvertedDoublePendulum-v4",
    "InvertedPendulum-v4",
    "Pusher-v4",
    "Reacher-v4",
    "Swimmer-v4",
    "Walker2d-v4",
];

/// A set of known environment ids, extensible at runtime
#[derive(Debug, Clone)]
pub struct EnvCatalog {
    ids: BTreeSet<String>,
}

impl EnvCatalog {
    /// Catalog seeded with the builtin Gym ids
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            ids: BUILTIN_ENV_IDS.iter().map(|id| (*id).to_string()).collect(),
        }
    }

    /// Catalog with no ids at all
    #[must_use]
    pub fn empty() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Add one id; registering an existing id is a no-op
    pub fn register(&mut self, env_id: impl Into<String>) {
        self.ids.insert(env_id.into());
    }

    /// Number of registered ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the catalog has no ids
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for EnvCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EnvRegistry for EnvCatalog {
    fn resolve(&self, env_id: &str) -> bool {
        self.ids.contains(env_id)
    }
}
