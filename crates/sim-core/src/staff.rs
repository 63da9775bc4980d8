//! Staff members and candidate generation.

use crate::catalogue::{self, SLIDER_DOMAINS};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named bonus a candidate may come with. Stored verbatim; the target is
/// either a slider domain or one of "Morale", "Bugs", "Marketing".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Specialization {
    pub name: String,
    pub bonus_target: String,
    pub bonus_value: f64,
    pub description: String,
}

/// A studio employee with generated per-domain skills.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub name: String,
    pub role: String,
    pub primary_skill: String,
    pub secondary_skill: String,
    /// Hire-time tier, 1..=5.
    pub skill_level: u32,
    #[serde(default)]
    pub specialization: Option<Specialization>,
    /// Skill per slider domain, 0..=100.
    pub skills: BTreeMap<String, u32>,
    /// Weekly salary, derived from total skill.
    pub salary: i64,
    /// 0..=100, drifts with review outcomes.
    #[serde(default = "default_morale")]
    pub morale: u32,
    #[serde(default)]
    pub weeks_employed: u64,
}

fn default_morale() -> u32 {
    100
}

impl StaffMember {
    /// Generate a fresh hire with skills rolled from role and level.
    pub fn generate(
        rng: &mut impl Rng,
        role: &str,
        primary: &str,
        secondary: &str,
        skill_level: u32,
        specialization: Option<Specialization>,
    ) -> Self {
        let first = catalogue::FIRST_NAMES[rng.gen_range(0..catalogue::FIRST_NAMES.len())];
        let last = catalogue::LAST_NAMES[rng.gen_range(0..catalogue::LAST_NAMES.len())];

        let base = skill_level * 10 + rng.gen_range(5..=15);
        let mut skills = BTreeMap::new();
        for domain in SLIDER_DOMAINS {
            let value = if domain == primary {
                (base + rng.gen_range(10..=25)).min(100)
            } else if domain == secondary {
                (base + rng.gen_range(0..=10)).min(100)
            } else {
                base.saturating_sub(rng.gen_range(5..=20)).max(5)
            };
            skills.insert(domain.to_string(), value);
        }

        let mut member = Self {
            name: format!("{first} {last}"),
            role: role.to_string(),
            primary_skill: primary.to_string(),
            secondary_skill: secondary.to_string(),
            skill_level,
            specialization,
            skills,
            salary: 0,
            morale: 100,
            weeks_employed: 0,
        };
        member.salary = member.computed_salary();
        member
    }

    /// Weekly salary from total skill points.
    pub fn computed_salary(&self) -> i64 {
        let total: u32 = self.skills.values().sum();
        total as i64 * 5 + 500
    }

    fn average_skill(&self) -> f64 {
        if self.skills.is_empty() {
            return 0.0;
        }
        self.skills.values().map(|&v| v as f64).sum::<f64>() / self.skills.len() as f64
    }

    /// Contribution to overall game quality, 0.0..=0.1.
    pub fn quality_contribution(&self) -> f64 {
        self.average_skill() / 1000.0
    }

    /// Skill bonus toward one slider domain, 0.0..=1.0.
    pub fn domain_bonus(&self, domain: &str) -> f64 {
        self.skills.get(domain).copied().unwrap_or(0) as f64 / 100.0
    }

    /// One-line narration summary.
    pub fn summary(&self) -> String {
        let spec = self
            .specialization
            .as_ref()
            .map(|s| format!(" Specialization: {}.", s.name))
            .unwrap_or_default();
        format!(
            "{}, {}. Level {}. Salary: {} per week. Morale: {} percent.{}",
            self.name, self.role, self.skill_level, self.salary, self.morale, spec
        )
    }
}
