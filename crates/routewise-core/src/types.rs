// SPDX-FileCopyrightText: 2026 Routewise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Model identifiers, the fixed model profile table, and routing policies.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{Result, RoutewiseError};

/// One of the three models a question can be routed to.
///
/// The set is closed: every routing path yields one of these variants, so a
/// decision can never name a model outside the profile table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
pub enum ModelId {
    /// Best answer quality, slowest to respond.
    #[strum(serialize = "gt-oss:20b")]
    #[serde(rename = "gt-oss:20b")]
    GtOss20b,
    /// Near-top quality at a moderate response time.
    #[strum(serialize = "deepseek-r1:14b")]
    #[serde(rename = "deepseek-r1:14b")]
    DeepseekR1_14b,
    /// Basic quality, fastest to respond.
    #[strum(serialize = "llama2-chinese")]
    #[serde(rename = "llama2-chinese")]
    Llama2Chinese,
}

impl ModelId {
    /// The model with the highest quality score.
    pub const HIGHEST_QUALITY: ModelId = ModelId::GtOss20b;
    /// The model balancing quality against response time.
    pub const BALANCED: ModelId = ModelId::DeepseekR1_14b;
    /// The model with the lowest response time.
    pub const FASTEST: ModelId = ModelId::Llama2Chinese;

    /// The wire identifier, e.g. `"gt-oss:20b"`.
    pub fn as_str(self) -> &'static str {
        self.profile().name
    }

    /// Static profile for this model.
    pub fn profile(self) -> &'static ModelProfile {
        match self {
            ModelId::GtOss20b => &MODEL_PROFILES[0],
            ModelId::DeepseekR1_14b => &MODEL_PROFILES[1],
            ModelId::Llama2Chinese => &MODEL_PROFILES[2],
        }
    }

    /// All known identifiers in table order.
    pub fn all() -> impl Iterator<Item = ModelId> {
        ModelId::iter()
    }
}

/// Measured quality and latency of a model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelProfile {
    /// Model identifier.
    pub id: ModelId,
    /// Wire name of the model.
    #[serde(skip)]
    pub name: &'static str,
    /// Answer quality on a 0-10 scale.
    pub quality: f64,
    /// Typical seconds to respond.
    pub speed_secs: f64,
}

/// Profiles of the three known models, from manual evaluation runs.
pub static MODEL_PROFILES: [ModelProfile; 3] = [
    ModelProfile {
        id: ModelId::GtOss20b,
        name: "gt-oss:20b",
        quality: 10.0,
        speed_secs: 7.0,
    },
    ModelProfile {
        id: ModelId::DeepseekR1_14b,
        name: "deepseek-r1:14b",
        quality: 9.0,
        speed_secs: 5.0,
    },
    ModelProfile {
        id: ModelId::Llama2Chinese,
        name: "llama2-chinese",
        quality: 6.3,
        speed_secs: 2.0,
    },
];

/// Look up a model profile by its wire identifier.
///
/// Fails with [`RoutewiseError::UnknownModel`] for anything outside the table.
pub fn lookup_profile(id: &str) -> Result<&'static ModelProfile> {
    id.parse::<ModelId>()
        .map(ModelId::profile)
        .map_err(|_| RoutewiseError::UnknownModel { id: id.to_string() })
}

/// How a router turns keyword counts into a model choice.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RoutingPolicy {
    /// Ordered rule list; the first matching rule wins. This is the canonical policy.
    #[default]
    #[strum(serialize = "priority")]
    Priority,
    /// The category with the strictly greatest count wins; ties fall back to
    /// the fastest model. Uses its own keyword lists.
    #[strum(to_string = "greatest_count", serialize = "greatest-count")]
    GreatestCount,
}
