//! Engine technology: unlockable features and player-built engines.

use serde::{Deserialize, Serialize};

/// An unlocked technology feature. Unique by name within a company.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineFeature {
    /// Slider domain or the level-design category.
    pub category: String,
    pub name: String,
    pub tech_bonus: i32,
}

impl EngineFeature {
    pub fn from_spec(spec: &crate::catalogue::FeatureSpec) -> Self {
        Self {
            category: spec.category.to_string(),
            name: spec.name.to_string(),
            tech_bonus: spec.tech_bonus,
        }
    }
}

/// A named bundle of features assembled by the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    pub name: String,
    pub features: Vec<EngineFeature>,
}

impl GameEngine {
    pub fn new(name: impl Into<String>, features: Vec<EngineFeature>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Straight sum of member tech bonuses.
    pub fn tech_level(&self) -> i32 {
        self.features.iter().map(|f| f.tech_bonus).sum()
    }

    /// Bonus on game quality, capped linear in tech level (0.0..=0.3).
    pub fn quality_bonus(&self) -> f64 {
        (self.tech_level() as f64 * 0.02).min(0.3)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.features.iter().any(|f| f.category == category)
    }

    /// One-line narration summary.
    pub fn summary(&self) -> String {
        let features = if self.features.is_empty() {
            "None".to_string()
        } else {
            self.features
                .iter()
                .map(|f| f.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!(
            "Engine '{}', tech level {}. Features: {}",
            self.name,
            self.tech_level(),
            features
        )
    }
}
