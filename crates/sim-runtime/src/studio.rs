//! The `Studio` command surface: one owned [`CompanyState`], one seeded
//! random stream, and every operation the presentation layer can issue.

use crate::error::CommandError;
use persistence::SaveManager;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sim_core::catalogue::{self, EventEffect};
use sim_core::{CompanyState, Message, ReviewOutcome, Specialization, StaffMember, Trend};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::{debug, info};

/// Hiring costs two weeks of salary up front; firing costs four.
const HIRE_COST_WEEKS: i64 = 2;
const SEVERANCE_WEEKS: i64 = 4;

/// Post-release servicing constants.
const DLC_COST: i64 = 20_000;
const PATCH_FAN_BONUS: u64 = 100;
const DLC_FAN_BONUS: u64 = 500;
const DLC_MARKET_REWIND_WEEKS: u64 = 5;

/// A release leaves the charts after this many weeks, or sooner when weekly
/// sales drop under the floor.
const MAX_WEEKS_ON_MARKET: u64 = 20;
const WEEKLY_SALES_FLOOR: u64 = 100;

/// Weekly cadences for the trend/event/mail systems.
const TREND_INTERVAL_WEEKS: std::ops::RangeInclusive<u64> = 12..=20;
const EVENT_COOLDOWN_WEEKS: u64 = 8;
const EVENT_PROBABILITY: f64 = 0.25;
const MAIL_PROBABILITY: f64 = 0.2;

/// Simulation configuration.
#[derive(Clone, Debug)]
pub struct SimConfig {
    /// Seed for the deterministic RNG stream.
    pub rng_seed: u64,
    /// Directory holding the save slots.
    pub save_dir: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rng_seed: 42,
            save_dir: PathBuf::from("./saves"),
        }
    }
}

/// A notable occurrence surfaced by a weekly check, for narration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub week: u64,
    pub title: String,
    pub text: String,
}

/// Everything the presentation layer needs to narrate a release.
#[derive(Clone, Debug, PartialEq)]
pub struct ReleaseReport {
    /// Index of the new record in the project history.
    pub project_index: usize,
    pub review: ReviewOutcome,
    pub dev_cost: i64,
    pub sales: u64,
    pub revenue: i64,
    /// Weeks the development consumed.
    pub duration_weeks: u64,
}

/// The simulation engine handle. All state mutation is synchronous and
/// single-writer; commands either fully complete or fail before mutating.
pub struct Studio {
    state: CompanyState,
    rng: ChaCha8Rng,
    saves: SaveManager,
}

impl Studio {
    /// Start a fresh company.
    pub fn new(company_name: impl Into<String>, config: SimConfig) -> Self {
        Self::from_state(CompanyState::new(company_name), config)
    }

    /// Resume from an existing state, e.g. after an out-of-band load.
    pub fn from_state(state: CompanyState, config: SimConfig) -> Self {
        Self {
            state,
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
            saves: SaveManager::new(config.save_dir),
        }
    }

    pub fn state(&self) -> &CompanyState {
        &self.state
    }

    pub fn is_bankrupt(&self) -> bool {
        self.state.is_bankrupt()
    }

    pub fn status(&self) -> String {
        self.state.status_text()
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.state.settings.language = language.into();
    }

    /// Flip the music flag, returning the new value.
    pub fn toggle_music(&mut self) -> bool {
        self.state.settings.music_enabled = !self.state.settings.music_enabled;
        self.state.settings.music_enabled
    }

    fn ensure_solvent(&self) -> Result<(), CommandError> {
        if self.state.is_bankrupt() {
            Err(CommandError::Bankrupt)
        } else {
            Ok(())
        }
    }

    fn charge(&mut self, required: i64) -> Result<(), CommandError> {
        if self.state.cash < required {
            return Err(CommandError::InsufficientFunds {
                required,
                available: self.state.cash,
            });
        }
        self.state.cash -= required;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Draft configuration
    // ------------------------------------------------------------------

    pub fn begin_draft(&mut self) {
        self.state.reset_draft();
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.state.draft.name = name.into();
    }

    pub fn set_draft_topic(&mut self, topic: impl Into<String>) {
        self.state.draft.topic = Some(topic.into());
    }

    pub fn set_draft_genre(&mut self, genre: impl Into<String>) {
        self.state.draft.genre = Some(genre.into());
    }

    pub fn set_draft_platform(&mut self, platform: impl Into<String>) {
        self.state.draft.platform = Some(platform.into());
    }

    pub fn set_draft_audience(&mut self, audience: impl Into<String>) {
        self.state.draft.audience = Some(audience.into());
    }

    pub fn set_draft_size(&mut self, size: impl Into<String>) {
        self.state.draft.size = Some(size.into());
    }

    pub fn set_draft_marketing(&mut self, marketing: impl Into<String>) {
        self.state.draft.marketing = Some(marketing.into());
    }

    pub fn set_draft_engine(&mut self, engine_name: Option<String>) {
        self.state.draft.engine_name = engine_name;
    }

    /// Validate and store the resource-slider allocation: each value in
    /// 0..=10, total within the size tier's budget.
    pub fn confirm_sliders(
        &mut self,
        allocation: BTreeMap<String, u32>,
    ) -> Result<(), CommandError> {
        for (domain, &value) in &allocation {
            if value > 10 {
                return Err(CommandError::InvalidSliderValue {
                    domain: domain.clone(),
                    value,
                });
            }
        }
        let budget = catalogue::size(self.state.draft.size_name()).slider_budget;
        let allocated: u32 = allocation.values().sum();
        if allocated > budget {
            return Err(CommandError::SliderBudgetExceeded { budget, allocated });
        }
        self.state.draft.sliders = allocation;
        Ok(())
    }

    /// Finalize the draft: compute cost, review, sales and revenue, append
    /// the record to history, advance the clock by the development time.
    pub fn finalize_draft(&mut self) -> Result<ReleaseReport, CommandError> {
        self.ensure_solvent()?;
        let draft = &self.state.draft;
        if draft.name.trim().is_empty() {
            return Err(CommandError::DraftIncomplete { missing: "a name" });
        }
        if draft.topic.is_none() {
            return Err(CommandError::DraftIncomplete { missing: "a topic" });
        }
        if draft.genre.is_none() {
            return Err(CommandError::DraftIncomplete { missing: "a genre" });
        }
        let size = catalogue::size(draft.size_name());
        if self.state.staff.len() < size.min_staff {
            return Err(CommandError::TeamTooSmall {
                required: size.min_staff,
                available: self.state.staff.len(),
            });
        }

        let draft = std::mem::take(&mut self.state.draft);
        let mut project = draft.into_project(self.state.week);

        project.dev_cost = sim_econ::calculate_dev_cost(&self.state, &project);
        self.state.cash -= project.dev_cost;

        let review = sim_econ::calculate_review(&self.state, &project, &mut self.rng);
        project.review = Some(review.clone());
        project.sales = sim_econ::calculate_sales(&self.state, &project, &mut self.rng);
        project.revenue = sim_econ::revenue_for(&project, project.sales);

        self.state.cash += project.revenue;
        self.state.fans += project.sales / 10;
        self.state.games_made += 1;
        self.state.total_revenue += project.revenue;

        let duration_weeks = sim_econ::dev_duration_weeks(size.name);
        self.state.week += duration_weeks;

        let average = review.average();
        for member in &mut self.state.staff {
            member.weeks_employed += duration_weeks;
            if average >= 7.0 {
                member.morale = (member.morale + 5).min(100);
            } else if average < 4.0 {
                member.morale = member.morale.saturating_sub(10);
            }
        }

        if average > self.state.high_score {
            self.state.high_score = average;
        }

        info!(
            game = %project.name,
            review = average,
            sales = project.sales,
            revenue = project.revenue,
            dev_cost = project.dev_cost,
            "released game"
        );

        let report = ReleaseReport {
            project_index: self.state.history.len(),
            review,
            dev_cost: project.dev_cost,
            sales: project.sales,
            revenue: project.revenue,
            duration_weeks,
        };
        self.state.history.push(project);
        Ok(report)
    }

    // ------------------------------------------------------------------
    // Time advance
    // ------------------------------------------------------------------

    /// Step the clock `weeks` times. Each step pays salaries, runs the
    /// trend/event check, ages active releases, and may deliver mail.
    /// Returns the notable occurrences for narration.
    pub fn advance_weeks(&mut self, weeks: u64) -> Result<Vec<Notice>, CommandError> {
        self.ensure_solvent()?;
        let mut notices = Vec::new();
        for _ in 0..weeks {
            self.state.week += 1;
            let salaries = self.state.weekly_salaries();
            self.state.cash -= salaries;
            debug!(week = self.state.week, salaries, "weekly upkeep");

            if let Some(notice) = self.check_occurrence() {
                notices.push(notice);
            }
            self.age_releases();
            self.deliver_mail();
        }
        Ok(notices)
    }

    /// At most one notable occurrence per check; a trend refresh pre-empts
    /// the random-event roll.
    fn check_occurrence(&mut self) -> Option<Notice> {
        let week = self.state.week;

        let threshold = self.rng.gen_range(TREND_INTERVAL_WEEKS);
        if week - self.state.last_trend_week >= threshold {
            let (topic, topic_text) =
                catalogue::TREND_TOPICS[self.rng.gen_range(0..catalogue::TREND_TOPICS.len())];
            let (genre, genre_text) =
                catalogue::TREND_GENRES[self.rng.gen_range(0..catalogue::TREND_GENRES.len())];
            let text = format!("{topic_text} And: {genre_text}");
            self.state.current_trend = Some(Trend {
                topic: topic.to_string(),
                genre: genre.to_string(),
                text: text.clone(),
                week_started: week,
            });
            self.state.last_trend_week = week;
            info!(topic, genre, week, "market trend shift");
            return Some(Notice {
                week,
                title: "Market Trend Shift".to_string(),
                text,
            });
        }

        if week - self.state.last_event_week < EVENT_COOLDOWN_WEEKS {
            return None;
        }
        if !self.rng.gen_bool(EVENT_PROBABILITY) {
            return None;
        }
        let event = catalogue::RANDOM_EVENTS[self.rng.gen_range(0..catalogue::RANDOM_EVENTS.len())];
        self.state.last_event_week = week;
        match event.effect {
            EventEffect::Cash => self.state.cash += event.value,
            EventEffect::Fans => {
                self.state.fans = (self.state.fans as i64 + event.value).max(0) as u64;
            }
        }
        info!(title = event.title, value = event.value, week, "random event");
        Some(Notice {
            week,
            title: event.title.to_string(),
            text: event.text.to_string(),
        })
    }

    /// Weekly decayed sales for every release still on the market.
    fn age_releases(&mut self) {
        for i in 0..self.state.history.len() {
            if !self.state.history[i].is_active {
                continue;
            }
            self.state.history[i].weeks_on_market += 1;

            let estimate =
                sim_econ::calculate_sales(&self.state, &self.state.history[i], &mut self.rng);
            let release = &self.state.history[i];
            let decay = 1.0 + release.weeks_on_market as f64 * 0.2;
            let mut weekly = (estimate as f64 / decay) as u64;
            if release.bugs > 0 {
                // Open bugs halve ongoing sales.
                weekly /= 2;
            }
            let income = weekly as i64 * catalogue::audience_price(&release.audience);

            let release = &mut self.state.history[i];
            release.sales += weekly;
            release.revenue += income;
            self.state.cash += income;

            if release.weeks_on_market > MAX_WEEKS_ON_MARKET || weekly < WEEKLY_SALES_FLOOR {
                release.is_active = false;
                debug!(game = %release.name, weeks = release.weeks_on_market, "left the market");
            }
        }
    }

    /// With fixed probability, one inbound message per week: a bug report
    /// against a random release, or fan praise.
    fn deliver_mail(&mut self) {
        if self.state.history.is_empty() {
            return;
        }
        if !self.rng.gen_bool(MAIL_PROBABILITY) {
            return;
        }
        let idx = self.rng.gen_range(0..self.state.history.len());
        let week = self.state.week;
        let (game, topic) = {
            let p = &self.state.history[idx];
            (p.name.clone(), p.topic.clone())
        };
        let vars: &[(&str, &str)] = &[("game", &game), ("topic", &topic)];
        let message = if self.rng.gen_bool(0.5) {
            self.state.history[idx].bugs += self.rng.gen_range(1..=5);
            Message::bug_report(
                catalogue::fill(catalogue::MAIL_BUG_SUBJECT, vars),
                catalogue::fill(catalogue::MAIL_BUG_BODY, vars),
                week,
                game.clone(),
            )
        } else {
            Message::fan_praise(
                catalogue::fill(catalogue::MAIL_FAN_SUBJECT, vars),
                catalogue::fill(catalogue::MAIL_FAN_BODY, vars),
                week,
                game.clone(),
            )
        };
        // Newest first.
        self.state.inbox.insert(0, message);
    }

    /// Inbox view, newest first.
    pub fn inbox(&self) -> &[Message] {
        &self.state.inbox
    }

    /// Return and mark one inbox message as read.
    pub fn read_mail(&mut self, index: usize) -> Result<Message, CommandError> {
        let message = self
            .state
            .inbox
            .get_mut(index)
            .ok_or(CommandError::InvalidIndex { index })?;
        message.is_read = true;
        Ok(message.clone())
    }

    // ------------------------------------------------------------------
    // Staffing
    // ------------------------------------------------------------------

    /// Roll a random applicant. Level scales with studio experience.
    pub fn generate_candidate(&mut self) -> StaffMember {
        let (role, primary, secondary) =
            catalogue::STAFF_ROLES[self.rng.gen_range(0..catalogue::STAFF_ROLES.len())];
        let max_level = (1 + self.state.games_made / 3).min(3);
        let level = self.rng.gen_range(1..=max_level);

        let specialization = if self.rng.gen_bool(0.3) {
            let (name, target, value, description) =
                catalogue::SPECIALIZATIONS[self.rng.gen_range(0..catalogue::SPECIALIZATIONS.len())];
            Some(Specialization {
                name: name.to_string(),
                bonus_target: target.to_string(),
                bonus_value: value,
                description: description.to_string(),
            })
        } else {
            None
        };

        StaffMember::generate(&mut self.rng, role, primary, secondary, level, specialization)
    }

    /// Hire a candidate: capacity check, then an up-front fee of two weeks
    /// of salary.
    pub fn hire(&mut self, candidate: StaffMember) -> Result<(), CommandError> {
        self.ensure_solvent()?;
        if !self.state.can_hire() {
            return Err(CommandError::CapacityExceeded {
                capacity: self.state.max_staff(),
            });
        }
        self.charge(candidate.salary * HIRE_COST_WEEKS)?;
        info!(name = %candidate.name, role = %candidate.role, "hired");
        self.state.staff.push(candidate);
        Ok(())
    }

    /// Fire by display index, paying four weeks of severance.
    pub fn fire(&mut self, index: usize) -> Result<StaffMember, CommandError> {
        if index >= self.state.staff.len() {
            return Err(CommandError::InvalidIndex { index });
        }
        let member = self.state.staff.remove(index);
        self.state.cash -= member.salary * SEVERANCE_WEEKS;
        info!(name = %member.name, "fired");
        Ok(member)
    }

    /// Send a staff member to a training option, boosting the primary
    /// domain (and half as much on the secondary). Salary follows skills.
    pub fn train(&mut self, staff_index: usize, option_index: usize) -> Result<(), CommandError> {
        self.ensure_solvent()?;
        if staff_index >= self.state.staff.len() {
            return Err(CommandError::InvalidIndex { index: staff_index });
        }
        let &(_, boost, cost, _) = catalogue::TRAINING_OPTIONS
            .get(option_index)
            .ok_or(CommandError::InvalidIndex {
                index: option_index,
            })?;
        self.charge(cost)?;

        let member = &mut self.state.staff[staff_index];
        let primary = member.primary_skill.clone();
        let secondary = member.secondary_skill.clone();
        if let Some(skill) = member.skills.get_mut(&primary) {
            *skill = (*skill + boost).min(100);
        }
        if let Some(skill) = member.skills.get_mut(&secondary) {
            *skill = (*skill + boost / 2).min(100);
        }
        member.salary = member.computed_salary();
        info!(name = %member.name, boost, "trained");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Research, engines, office
    // ------------------------------------------------------------------

    /// Catalogue features researchable right now: available by week and not
    /// yet unlocked.
    pub fn researchable_features(&self) -> Vec<&'static catalogue::FeatureSpec> {
        catalogue::available_features(self.state.week)
            .into_iter()
            .filter(|f| !self.state.feature_unlocked(f.name))
            .collect()
    }

    /// Unlock a technology feature from the catalogue, once.
    pub fn research(&mut self, feature_name: &str) -> Result<(), CommandError> {
        self.ensure_solvent()?;
        let spec = catalogue::feature(feature_name).ok_or_else(|| CommandError::UnknownFeature {
            name: feature_name.to_string(),
        })?;
        if self.state.feature_unlocked(spec.name) {
            return Err(CommandError::AlreadyUnlocked {
                name: spec.name.to_string(),
            });
        }
        self.charge(spec.cost)?;
        self.state
            .unlocked_features
            .push(sim_core::EngineFeature::from_spec(spec));
        info!(feature = spec.name, cost = spec.cost, "researched");
        Ok(())
    }

    /// Assemble a new engine from already-unlocked features. Free, but the
    /// selection must be non-empty and fully unlocked.
    pub fn create_engine(
        &mut self,
        name: impl Into<String>,
        feature_names: &[String],
    ) -> Result<(), CommandError> {
        if feature_names.is_empty() {
            return Err(CommandError::EmptySelection);
        }
        let mut features = Vec::with_capacity(feature_names.len());
        for feature_name in feature_names {
            let feature = self
                .state
                .unlocked_features
                .iter()
                .find(|f| &f.name == feature_name)
                .ok_or_else(|| CommandError::FeatureNotUnlocked {
                    name: feature_name.clone(),
                })?;
            features.push(feature.clone());
        }
        let engine = sim_core::GameEngine::new(name, features);
        info!(engine = %engine.name, tech_level = engine.tech_level(), "created engine");
        self.state.engines.push(engine);
        Ok(())
    }

    /// Move one step up the office ladder, gated purely by cash.
    pub fn upgrade_office(&mut self) -> Result<(), CommandError> {
        self.ensure_solvent()?;
        let next_tier = self.state.office_tier + 1;
        let Some(next) = catalogue::OFFICE_TIERS.get(next_tier) else {
            return Err(CommandError::OfficeMaxed);
        };
        self.charge(next.cost)?;
        self.state.office_tier = next_tier;
        info!(office = next.name, capacity = next.max_staff, "upgraded office");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Post-release servicing
    // ------------------------------------------------------------------

    /// Free patch: clears the bug count and grants a small fan bonus, but
    /// only when bugs are actually open.
    pub fn release_patch(&mut self, project_index: usize) -> Result<(), CommandError> {
        let project = self
            .state
            .history
            .get_mut(project_index)
            .ok_or(CommandError::InvalidIndex {
                index: project_index,
            })?;
        if project.bugs == 0 {
            return Err(CommandError::NothingToPatch);
        }
        project.bugs = 0;
        self.state.fans += PATCH_FAN_BONUS;
        info!(game = %self.state.history[project_index].name, "patched");
        Ok(())
    }

    /// Paid DLC: re-activates the release, rewinds its market age, and
    /// grants a larger fan bonus.
    pub fn release_dlc(&mut self, project_index: usize) -> Result<(), CommandError> {
        self.ensure_solvent()?;
        if project_index >= self.state.history.len() {
            return Err(CommandError::InvalidIndex {
                index: project_index,
            });
        }
        self.charge(DLC_COST)?;
        let project = &mut self.state.history[project_index];
        project.dlc_count += 1;
        project.is_active = true;
        project.weeks_on_market = project.weeks_on_market.saturating_sub(DLC_MARKET_REWIND_WEEKS);
        info!(game = %project.name, dlc_count = project.dlc_count, "released DLC");
        self.state.fans += DLC_FAN_BONUS;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    pub fn save(&self, slot: u8) -> Result<(), CommandError> {
        self.saves.save(slot, &self.state)?;
        Ok(())
    }

    /// Replace the current state with a stored one. Loading a missing slot
    /// is a reported failure and leaves the session untouched.
    pub fn load(&mut self, slot: u8) -> Result<(), CommandError> {
        self.state = self.saves.load(slot)?;
        Ok(())
    }

    pub fn slot_summaries(&self) -> Vec<(u8, persistence::SlotStatus)> {
        self.saves.slot_summaries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sim_core::BANKRUPTCY_FLOOR;
    use tempfile::tempdir;

    fn studio_with_seed(seed: u64) -> (tempfile::TempDir, Studio) {
        let dir = tempdir().unwrap();
        let studio = Studio::new(
            "Pixel Forge",
            SimConfig {
                rng_seed: seed,
                save_dir: dir.path().to_path_buf(),
            },
        );
        (dir, studio)
    }

    fn configure_medium_rpg(studio: &mut Studio, name: &str) {
        studio.begin_draft();
        studio.set_draft_name(name);
        studio.set_draft_topic("Fantasy");
        studio.set_draft_genre("RPG");
        studio.set_draft_platform("PC (MS-DOS)");
        studio.set_draft_audience("Teens");
        studio.set_draft_size("Medium");
        studio.set_draft_marketing("No Marketing");
        // Story-heavy allocation that spends the full Medium budget of 30.
        let allocation: BTreeMap<String, u32> = [
            ("AI", 3),
            ("Gameplay", 5),
            ("Graphics", 4),
            ("Sound", 3),
            ("Story", 8),
            ("World", 7),
        ]
        .into_iter()
        .map(|(d, v)| (d.to_string(), v))
        .collect();
        studio.confirm_sliders(allocation).unwrap();
    }

    #[test]
    fn finalize_moves_cash_by_cost_and_revenue() {
        let (_dir, mut studio) = studio_with_seed(7);
        configure_medium_rpg(&mut studio, "Dragon Saga");
        let cash_before = studio.state().cash;

        let report = studio.finalize_draft().unwrap();
        assert!(report.dev_cost > 0);
        assert_eq!(
            studio.state().cash,
            cash_before - report.dev_cost + report.revenue
        );
        assert_eq!(studio.state().games_made, 1);
        assert_eq!(studio.state().history.len(), 1);
        assert_eq!(studio.state().week, 1 + report.duration_weeks);
        assert_eq!(studio.state().fans, report.sales / 10);
        // Draft is reset for the next project.
        assert_eq!(studio.state().draft, sim_core::Draft::default());
    }

    #[test]
    fn finalize_updates_high_score_monotonically() {
        let (_dir, mut studio) = studio_with_seed(3);
        configure_medium_rpg(&mut studio, "Dragon Saga");
        let first = studio.finalize_draft().unwrap();
        assert_eq!(studio.state().high_score, first.review.average());

        // A deliberately bad follow-up must not lower the record.
        studio.begin_draft();
        studio.set_draft_name("Hospital Brawl");
        studio.set_draft_topic("Hospital");
        studio.set_draft_genre("Action");
        studio.set_draft_size("Small");
        studio.confirm_sliders(BTreeMap::new()).unwrap();
        let second = studio.finalize_draft().unwrap();
        assert_eq!(
            studio.state().high_score,
            first.review.average().max(second.review.average())
        );
    }

    #[test]
    fn finalize_requires_complete_draft() {
        let (_dir, mut studio) = studio_with_seed(1);
        studio.begin_draft();
        assert_eq!(
            studio.finalize_draft(),
            Err(CommandError::DraftIncomplete { missing: "a name" })
        );
        studio.set_draft_name("Untitled");
        assert_eq!(
            studio.finalize_draft(),
            Err(CommandError::DraftIncomplete { missing: "a topic" })
        );
    }

    #[test]
    fn finalize_enforces_size_minimum_team() {
        let (_dir, mut studio) = studio_with_seed(1);
        configure_medium_rpg(&mut studio, "Epic");
        studio.set_draft_size("Large");
        assert_eq!(
            studio.finalize_draft(),
            Err(CommandError::TeamTooSmall {
                required: 3,
                available: 0
            })
        );
    }

    #[test]
    fn slider_budget_is_enforced() {
        let (_dir, mut studio) = studio_with_seed(1);
        studio.begin_draft();
        studio.set_draft_size("Small");
        let maxed: BTreeMap<String, u32> = catalogue::SLIDER_DOMAINS
            .iter()
            .map(|d| (d.to_string(), 10))
            .collect();
        // 60 points against a Small budget of 20.
        assert_eq!(
            studio.confirm_sliders(maxed),
            Err(CommandError::SliderBudgetExceeded {
                budget: 20,
                allocated: 60
            })
        );

        let mut invalid = BTreeMap::new();
        invalid.insert("Story".to_string(), 11);
        assert!(matches!(
            studio.confirm_sliders(invalid),
            Err(CommandError::InvalidSliderValue { value: 11, .. })
        ));
    }

    #[test]
    fn hiring_checks_capacity_then_funds() {
        let (_dir, mut studio) = studio_with_seed(5);
        let first = studio.generate_candidate();
        let cash_before = studio.state().cash;
        studio.hire(first.clone()).unwrap();
        assert_eq!(studio.state().cash, cash_before - first.salary * 2);
        assert_eq!(studio.state().staff.len(), 1);

        // The garage holds exactly one employee.
        let second = studio.generate_candidate();
        assert_eq!(
            studio.hire(second),
            Err(CommandError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(studio.state().staff.len(), 1);

        // With room but no cash the hire is rejected before any deduction.
        let (_broke_dir, mut broke) = studio_with_seed(5);
        broke.state.cash = 10;
        let candidate = broke.generate_candidate();
        let err = broke.hire(candidate.clone()).unwrap_err();
        assert_eq!(
            err,
            CommandError::InsufficientFunds {
                required: candidate.salary * 2,
                available: 10
            }
        );
        assert_eq!(broke.state().cash, 10);
        assert!(broke.state().staff.is_empty());
    }

    #[test]
    fn firing_pays_severance() {
        let (_dir, mut studio) = studio_with_seed(5);
        let candidate = studio.generate_candidate();
        studio.hire(candidate).unwrap();
        let cash_before = studio.state().cash;
        let fired = studio.fire(0).unwrap();
        assert_eq!(studio.state().cash, cash_before - fired.salary * 4);
        assert!(studio.state().staff.is_empty());
        assert_eq!(
            studio.fire(0),
            Err(CommandError::InvalidIndex { index: 0 })
        );
    }

    #[test]
    fn training_boosts_primary_and_raises_salary() {
        let (_dir, mut studio) = studio_with_seed(9);
        let candidate = studio.generate_candidate();
        studio.hire(candidate).unwrap();
        let before = studio.state().staff[0].clone();

        studio.train(0, 2).unwrap();
        let after = &studio.state().staff[0];
        let primary = &before.primary_skill;
        assert_eq!(
            after.skills[primary],
            (before.skills[primary] + 20).min(100)
        );
        assert_eq!(after.salary, after.computed_salary());
        assert!(after.salary >= before.salary);
    }

    #[test]
    fn research_rejects_duplicates_and_checks_cost() {
        let (_dir, mut studio) = studio_with_seed(2);
        studio.research("Stereo Sound").unwrap();
        assert!(studio.state().feature_unlocked("Stereo Sound"));
        assert_eq!(
            studio.research("Stereo Sound"),
            Err(CommandError::AlreadyUnlocked {
                name: "Stereo Sound".into()
            })
        );
        // Starter features are pre-unlocked at game start.
        assert_eq!(
            studio.research("Mono Sound"),
            Err(CommandError::AlreadyUnlocked {
                name: "Mono Sound".into()
            })
        );
        assert!(matches!(
            studio.research("Quantum Renderer"),
            Err(CommandError::UnknownFeature { .. })
        ));

        let (_broke_dir, mut broke) = studio_with_seed(2);
        broke.state.cash = 0;
        assert_eq!(
            broke.research("Stereo Sound"),
            Err(CommandError::InsufficientFunds {
                required: 10_000,
                available: 0
            })
        );
    }

    #[test]
    fn engine_creation_requires_unlocked_features() {
        let (_dir, mut studio) = studio_with_seed(2);
        assert_eq!(
            studio.create_engine("Empty", &[]),
            Err(CommandError::EmptySelection)
        );
        assert_eq!(
            studio.create_engine("Locked", &["Open World".to_string()]),
            Err(CommandError::FeatureNotUnlocked {
                name: "Open World".into()
            })
        );
        studio
            .create_engine("Mk II", &["Mono Sound".to_string(), "Basic AI".to_string()])
            .unwrap();
        let engine = studio.state().engine_by_name("Mk II").unwrap();
        assert_eq!(engine.tech_level(), 2);
    }

    #[test]
    fn office_upgrades_are_sequential_and_cash_gated() {
        let (_dir, mut studio) = studio_with_seed(2);
        studio.state.cash = 10_000;
        assert_eq!(
            studio.upgrade_office(),
            Err(CommandError::InsufficientFunds {
                required: 50_000,
                available: 10_000
            })
        );
        studio.state.cash = 2_000_000;
        studio.upgrade_office().unwrap();
        assert_eq!(studio.state().office_tier, 1);
        assert_eq!(studio.state().max_staff(), 3);

        for _ in 0..3 {
            studio.state.cash = 2_000_000;
            studio.upgrade_office().unwrap();
        }
        assert_eq!(studio.upgrade_office(), Err(CommandError::OfficeMaxed));
    }

    #[test]
    fn patch_requires_open_bugs() {
        let (_dir, mut studio) = studio_with_seed(7);
        configure_medium_rpg(&mut studio, "Dragon Saga");
        studio.finalize_draft().unwrap();

        let fans_before = studio.state().fans;
        assert_eq!(studio.release_patch(0), Err(CommandError::NothingToPatch));
        assert_eq!(studio.state().fans, fans_before);

        studio.state.history[0].bugs = 4;
        studio.release_patch(0).unwrap();
        assert_eq!(studio.state().history[0].bugs, 0);
        assert_eq!(studio.state().fans, fans_before + 100);
    }

    #[test]
    fn dlc_reactivates_and_rewinds_market_age() {
        let (_dir, mut studio) = studio_with_seed(7);
        configure_medium_rpg(&mut studio, "Dragon Saga");
        studio.finalize_draft().unwrap();
        studio.state.history[0].is_active = false;
        studio.state.history[0].weeks_on_market = 3;

        let cash_before = studio.state().cash;
        let fans_before = studio.state().fans;
        studio.release_dlc(0).unwrap();
        let release = &studio.state().history[0];
        assert_eq!(studio.state().cash, cash_before - 20_000);
        assert_eq!(release.dlc_count, 1);
        assert!(release.is_active);
        assert_eq!(release.weeks_on_market, 0);
        assert_eq!(studio.state().fans, fans_before + 500);

        let (_broke_dir, mut broke) = studio_with_seed(7);
        configure_medium_rpg(&mut broke, "Dragon Saga");
        broke.finalize_draft().unwrap();
        broke.state.cash = 500;
        assert_eq!(
            broke.release_dlc(0),
            Err(CommandError::InsufficientFunds {
                required: 20_000,
                available: 500
            })
        );
    }

    #[test]
    fn advance_is_deterministic_under_seed() {
        let run = |seed| {
            let (_dir, mut studio) = studio_with_seed(seed);
            configure_medium_rpg(&mut studio, "Dragon Saga");
            studio.finalize_draft().unwrap();
            let notices = studio.advance_weeks(30).unwrap();
            (notices, studio.state().clone())
        };
        let (notices_a, state_a) = run(77);
        let (notices_b, state_b) = run(77);
        assert_eq!(notices_a, notices_b);
        assert_eq!(state_a, state_b);
    }

    #[test]
    fn trend_refresh_happens_within_interval() {
        let (_dir, mut studio) = studio_with_seed(123);
        let notices = studio.advance_weeks(21).unwrap();
        assert!(studio.state().current_trend.is_some());
        assert!(notices.iter().any(|n| n.title == "Market Trend Shift"));
        assert!(studio.state().last_trend_week >= 12);
    }

    #[test]
    fn settings_commands_flip_state() {
        let (_dir, mut studio) = studio_with_seed(1);
        studio.set_language("de");
        assert_eq!(studio.state().settings.language, "de");
        assert!(!studio.toggle_music());
        assert!(studio.toggle_music());
    }

    #[test]
    fn bankruptcy_is_terminal_for_commands() {
        let (_dir, mut studio) = studio_with_seed(4);
        studio.state.cash = BANKRUPTCY_FLOOR - 1;
        assert!(studio.is_bankrupt());
        assert_eq!(studio.advance_weeks(1), Err(CommandError::Bankrupt));
        assert_eq!(studio.finalize_draft(), Err(CommandError::Bankrupt));
        let candidate_err = studio.upgrade_office();
        assert_eq!(candidate_err, Err(CommandError::Bankrupt));
    }

    #[test]
    fn save_and_load_through_the_engine() {
        let (_dir, mut studio) = studio_with_seed(7);
        configure_medium_rpg(&mut studio, "Dragon Saga");
        studio.finalize_draft().unwrap();
        studio.advance_weeks(5).unwrap();
        let saved_state = studio.state().clone();

        studio.save(1).unwrap();
        studio.advance_weeks(10).unwrap();
        assert_ne!(studio.state(), &saved_state);

        studio.load(1).unwrap();
        assert_eq!(studio.state(), &saved_state);

        assert_eq!(
            studio.load(2),
            Err(CommandError::NoSaveData { slot: 2 })
        );
    }

    #[test]
    fn mail_can_be_read() {
        let (_dir, mut studio) = studio_with_seed(7);
        configure_medium_rpg(&mut studio, "Dragon Saga");
        studio.finalize_draft().unwrap();
        // 20% per week makes a silent inbox over 200 weeks vanishingly
        // unlikely for any seed.
        for _ in 0..10 {
            if !studio.state().inbox.is_empty() {
                break;
            }
            studio.advance_weeks(20).unwrap();
        }
        assert!(!studio.state().inbox.is_empty());
        let message = studio.read_mail(0).unwrap();
        assert!(message.is_read);
        assert!(studio.inbox()[0].is_read);
        assert!(matches!(
            studio.read_mail(999),
            Err(CommandError::InvalidIndex { index: 999 })
        ));
    }
}
