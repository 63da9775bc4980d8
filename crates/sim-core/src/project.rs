//! Projects: the in-progress draft, the finalized record, and its review.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Four reviewer scores plus generated narration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewOutcome {
    /// Individual reviewer scores, each in 1..=10.
    pub scores: Vec<u8>,
    /// Narration lines for the presentation layer.
    #[serde(default)]
    pub comments: Vec<String>,
}

impl ReviewOutcome {
    pub fn new(scores: Vec<u8>, comments: Vec<String>) -> Self {
        Self { scores, comments }
    }

    /// Mean reviewer score.
    pub fn average(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().map(|&s| s as f64).sum::<f64>() / self.scores.len() as f64
    }

    pub fn total(&self) -> u32 {
        self.scores.iter().map(|&s| s as u32).sum()
    }
}

/// A released game. Immutable once appended to history except for the
/// post-release servicing fields (`bugs`, `dlc_count`, `weeks_on_market`,
/// `is_active`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub topic: String,
    pub genre: String,
    /// Player slider allocation per domain (0..=10 each).
    pub sliders: BTreeMap<String, u32>,
    pub platform: String,
    pub audience: String,
    pub size: String,
    pub marketing: String,
    /// Name of the engine used, if any. Resolved against the company's
    /// engine list for display only.
    #[serde(default)]
    pub engine_name: Option<String>,
    #[serde(default)]
    pub review: Option<ReviewOutcome>,
    pub sales: u64,
    pub revenue: i64,
    pub dev_cost: i64,
    pub week_developed: u64,
    // Post-release servicing.
    #[serde(default)]
    pub bugs: u32,
    #[serde(default)]
    pub dlc_count: u32,
    #[serde(default)]
    pub weeks_on_market: u64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Project {
    pub fn profit(&self) -> i64 {
        self.revenue - self.dev_cost
    }

    /// One-line narration summary.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!(
            "'{}' - {} {} on {}",
            self.name, self.topic, self.genre, self.platform
        )];
        if let Some(review) = &self.review {
            parts.push(format!("Rating: {:.1} of 10", review.average()));
            parts.push(format!("Sales: {}", self.sales));
            parts.push(format!("Revenue: {}", self.revenue));
        }
        parts.join(". ")
    }
}

/// The in-progress project configuration. Transient: not persisted, reset
/// after finalization and on load.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Draft {
    pub name: String,
    pub topic: Option<String>,
    pub genre: Option<String>,
    pub platform: Option<String>,
    pub audience: Option<String>,
    pub engine_name: Option<String>,
    pub sliders: BTreeMap<String, u32>,
    pub size: Option<String>,
    pub marketing: Option<String>,
}

impl Draft {
    /// Size tier name, defaulting to Medium like every size lookup.
    pub fn size_name(&self) -> &str {
        self.size.as_deref().unwrap_or("Medium")
    }

    pub fn marketing_name(&self) -> &str {
        self.marketing.as_deref().unwrap_or("No Marketing")
    }

    /// Convert into a permanent record once every required field is set.
    /// Unset platform and audience fall back to the original defaults.
    pub fn into_project(self, week: u64) -> Project {
        Project {
            name: self.name,
            topic: self.topic.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            sliders: self.sliders,
            platform: self.platform.unwrap_or_else(|| "PC (MS-DOS)".to_string()),
            audience: self.audience.unwrap_or_else(|| "Teens".to_string()),
            size: self.size.unwrap_or_else(|| "Medium".to_string()),
            marketing: self.marketing.unwrap_or_else(|| "No Marketing".to_string()),
            engine_name: self.engine_name,
            review: None,
            sales: 0,
            revenue: 0,
            dev_cost: 0,
            week_developed: week,
            bugs: 0,
            dlc_count: 0,
            weeks_on_market: 0,
            is_active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_average() {
        let r = ReviewOutcome::new(vec![7, 8, 9, 8], vec![]);
        assert_eq!(r.average(), 8.0);
        assert_eq!(r.total(), 32);
    }

    #[test]
    fn profit_is_revenue_minus_cost() {
        let mut p = Draft::default().into_project(1);
        p.revenue = 50_000;
        p.dev_cost = 20_000;
        assert_eq!(p.profit(), 30_000);
    }

    #[test]
    fn serde_roundtrip_with_servicing_fields() {
        let mut p = Draft {
            name: "Dragon Quest".into(),
            topic: Some("Fantasy".into()),
            genre: Some("RPG".into()),
            ..Draft::default()
        }
        .into_project(12);
        p.review = Some(ReviewOutcome::new(vec![9, 8, 9, 10], vec!["Great.".into()]));
        p.bugs = 3;
        p.dlc_count = 1;
        p.weeks_on_market = 7;
        p.is_active = false;

        let json = serde_json::to_string_pretty(&p).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn legacy_record_defaults_servicing_fields() {
        // Saves written before servicing existed omit those fields.
        let json = r#"{
            "name": "Old Game", "topic": "Space", "genre": "Action",
            "sliders": {}, "platform": "PC (MS-DOS)", "audience": "Teens",
            "size": "Medium", "marketing": "No Marketing",
            "sales": 100, "revenue": 3000, "dev_cost": 1000, "week_developed": 4
        }"#;
        let p: Project = serde_json::from_str(json).unwrap();
        assert_eq!(p.bugs, 0);
        assert_eq!(p.dlc_count, 0);
        assert!(p.is_active);
    }
}
