//! The `CompanyState` aggregate: one per play session, exclusively owning
//! every child collection. All mutation happens through engine commands.

use crate::catalogue::{self, OfficeSpec};
use crate::mail::Message;
use crate::project::{Draft, Project};
use crate::staff::StaffMember;
use crate::tech::{EngineFeature, GameEngine};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cash floor below which the company is terminally bankrupt.
pub const BANKRUPTCY_FLOOR: i64 = -50_000;

/// Starting cash for a new company.
pub const STARTING_CASH: i64 = 70_000;

/// The active market trend: a favored topic/genre pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trend {
    pub topic: String,
    pub genre: String,
    pub text: String,
    pub week_started: u64,
}

/// Session settings. Localization itself lives outside the core; only the
/// key is stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub language: String,
    pub music_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            music_enabled: true,
        }
    }
}

/// The persistent world state of one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyState {
    pub company_name: String,
    /// May go negative down to [`BANKRUPTCY_FLOOR`].
    pub cash: i64,
    pub fans: u64,
    /// Monotonic, starts at 1.
    pub week: u64,
    /// Best average review ever achieved. Monotone non-decreasing.
    pub high_score: f64,
    pub games_made: u32,
    pub total_revenue: i64,
    /// Release order; append-only.
    pub history: Vec<Project>,
    /// Hire order, used as display index.
    pub staff: Vec<StaffMember>,
    pub engines: Vec<GameEngine>,
    /// Unique by feature name.
    pub unlocked_features: Vec<EngineFeature>,
    /// Index into the office tier ladder.
    pub office_tier: usize,
    #[serde(default)]
    pub current_trend: Option<Trend>,
    #[serde(default)]
    pub last_trend_week: u64,
    #[serde(default)]
    pub last_event_week: u64,
    /// Newest first.
    #[serde(default)]
    pub inbox: Vec<Message>,
    #[serde(default)]
    pub settings: Settings,
    /// Transient: never persisted, reset on load.
    #[serde(skip)]
    pub draft: Draft,
}

impl CompanyState {
    /// Fresh company: starting cash, week 1, and a starter engine built
    /// from the zero-cost catalogue features.
    pub fn new(company_name: impl Into<String>) -> Self {
        let starter_features: Vec<EngineFeature> = catalogue::ENGINE_FEATURES
            .iter()
            .filter(|f| f.cost == 0)
            .map(EngineFeature::from_spec)
            .collect();
        let starter = GameEngine::new("Starter Engine", starter_features.clone());

        Self {
            company_name: company_name.into(),
            cash: STARTING_CASH,
            fans: 0,
            week: 1,
            high_score: 0.0,
            games_made: 0,
            total_revenue: 0,
            history: Vec::new(),
            staff: Vec::new(),
            engines: vec![starter],
            unlocked_features: starter_features,
            office_tier: 0,
            current_trend: None,
            last_trend_week: 0,
            last_event_week: 0,
            inbox: Vec::new(),
            settings: Settings::default(),
            draft: Draft::default(),
        }
    }

    pub fn office(&self) -> &'static OfficeSpec {
        &catalogue::OFFICE_TIERS[self.office_tier.min(catalogue::OFFICE_TIERS.len() - 1)]
    }

    pub fn max_staff(&self) -> usize {
        self.office().max_staff
    }

    pub fn can_hire(&self) -> bool {
        self.staff.len() < self.max_staff()
    }

    pub fn is_bankrupt(&self) -> bool {
        self.cash < BANKRUPTCY_FLOOR
    }

    /// Saturating aggregate of team competence toward quality.
    pub fn team_quality_bonus(&self) -> f64 {
        self.staff.iter().map(|s| s.quality_contribution()).sum()
    }

    /// Average team skill bonus toward one slider domain.
    pub fn team_domain_bonus(&self, domain: &str) -> f64 {
        if self.staff.is_empty() {
            return 0.0;
        }
        self.staff.iter().map(|s| s.domain_bonus(domain)).sum::<f64>() / self.staff.len() as f64
    }

    pub fn weekly_salaries(&self) -> i64 {
        self.staff.iter().map(|s| s.salary).sum()
    }

    pub fn engine_by_name(&self, name: &str) -> Option<&GameEngine> {
        self.engines.iter().find(|e| e.name == name)
    }

    pub fn feature_unlocked(&self, name: &str) -> bool {
        self.unlocked_features.iter().any(|f| f.name == name)
    }

    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Status narration for the presentation layer.
    pub fn status_text(&self) -> String {
        let office = self.office();
        format!(
            "Company: {}. Cash: {}. Fans: {}. Week: {}. Office: {}. Staff: {} of {}. Games made: {}.",
            self.company_name,
            self.cash,
            self.fans,
            self.week,
            office.name,
            self.staff.len(),
            office.max_staff,
            self.games_made,
        )
    }
}

/// Structural invariant violations detected on a loaded or constructed state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("week must be >= 1")]
    WeekOutOfRange,
    #[error("office tier {0} is out of range")]
    OfficeTierOutOfRange(usize),
    #[error("staff count {count} exceeds office capacity {capacity}")]
    StaffOverCapacity { count: usize, capacity: usize },
    #[error("duplicate unlocked feature: {0}")]
    DuplicateFeature(String),
    #[error("review score {0} outside 1..=10")]
    ScoreOutOfRange(u8),
}

/// Validate the cross-field invariants of a state, e.g. after load.
pub fn validate_state(state: &CompanyState) -> Result<(), ValidationError> {
    if state.week < 1 {
        return Err(ValidationError::WeekOutOfRange);
    }
    if state.office_tier >= catalogue::OFFICE_TIERS.len() {
        return Err(ValidationError::OfficeTierOutOfRange(state.office_tier));
    }
    let capacity = catalogue::OFFICE_TIERS[state.office_tier].max_staff;
    if state.staff.len() > capacity {
        return Err(ValidationError::StaffOverCapacity {
            count: state.staff.len(),
            capacity,
        });
    }
    let mut seen = std::collections::BTreeSet::new();
    for f in &state.unlocked_features {
        if !seen.insert(f.name.as_str()) {
            return Err(ValidationError::DuplicateFeature(f.name.clone()));
        }
    }
    for project in &state.history {
        if let Some(review) = &project.review {
            if let Some(&bad) = review.scores.iter().find(|s| !(1..=10).contains(*s)) {
                return Err(ValidationError::ScoreOutOfRange(bad));
            }
        }
    }
    Ok(())
}
