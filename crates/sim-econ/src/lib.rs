#![deny(warnings)]

//! Review scoring and commercial outcome math for Studio Tycoon.
//!
//! Every function here is pure over `(&CompanyState, &Project)` plus an
//! injected random source, so a seeded [`rand_chacha::ChaCha8Rng`] makes
//! the whole valuation reproducible bit-for-bit.

use rand::Rng;
use sim_core::catalogue::{self, fill, SLIDER_DOMAINS};
use sim_core::{CompanyState, Project, ReviewOutcome};

/// Relative weights of the quality ingredients. The last term is a fixed
/// neutral contribution.
const WEIGHT_SYNERGY: f64 = 0.30;
const WEIGHT_SLIDER_MATCH: f64 = 0.30;
const WEIGHT_TEAM: f64 = 0.15;
const WEIGHT_ENGINE: f64 = 0.10;
const WEIGHT_NEUTRAL: f64 = 0.15;

/// Base sales volume before any multiplier.
const BASE_SALES_UNITS: f64 = 5_000.0;

/// Base development cost before the size multiplier.
const BASE_DEV_COST: f64 = 10_000.0;

/// Scaled development duration for a size tier, in whole weeks.
pub fn dev_duration_weeks(size_name: &str) -> u64 {
    let size = catalogue::size(size_name);
    (catalogue::base_dev_weeks() as f64 * size.time_multi) as u64
}

fn pick<'a>(rng: &mut impl Rng, pool: &[&'a str]) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}

/// How well the allocated sliders (plus team skill) match the genre ideal,
/// in [0,1] with 1 = perfect.
fn slider_match(state: &CompanyState, project: &Project) -> f64 {
    let ideal = catalogue::ideal_sliders(&project.genre);
    let mut total_diff = 0.0;
    let mut max_diff = 0.0;
    for domain in SLIDER_DOMAINS {
        let player = project.sliders.get(domain).copied().unwrap_or(5) as f64;
        let target = ideal.get(domain).copied().unwrap_or(5) as f64;
        let effective = player + state.team_domain_bonus(domain);
        total_diff += (effective - target).abs();
        max_diff += 10.0;
    }
    1.0 - total_diff / max_diff
}

/// Score a finalized-but-unscored project against the current world state.
///
/// The caller is responsible for applying the high-score update afterwards;
/// this function only reads the state.
pub fn calculate_review(
    state: &CompanyState,
    project: &Project,
    rng: &mut impl Rng,
) -> ReviewOutcome {
    let synergy = catalogue::compatibility(&project.topic, &project.genre) as f64 / 3.0;
    let match_score = slider_match(state, project);
    let team_quality = state.team_quality_bonus().min(1.0);

    let engine_quality = match project
        .engine_name
        .as_deref()
        .and_then(|name| state.engine_by_name(name))
    {
        Some(engine) => (0.3 + engine.quality_bonus()).min(1.0),
        None => 0.3,
    };

    let mut trend_bonus = 1.0;
    if let Some(trend) = &state.current_trend {
        if project.topic == trend.topic {
            trend_bonus += 0.2;
        }
        if project.genre == trend.genre {
            trend_bonus += 0.2;
        }
    }

    let jitter: f64 = rng.gen_range(0.9..=1.1);

    let mut base = synergy * WEIGHT_SYNERGY
        + match_score * WEIGHT_SLIDER_MATCH
        + team_quality * WEIGHT_TEAM
        + engine_quality * WEIGHT_ENGINE
        + 0.5 * WEIGHT_NEUTRAL;
    base *= jitter * trend_bonus;

    if let Some(last) = state.history.last() {
        // Repetition penalty for rehashing the previous release.
        if last.topic == project.topic && last.genre == project.genre {
            base *= 0.8;
        }
        // Name-prefix heuristic for sequels: hype after a hit,
        // disappointment after a flop.
        let is_sequel = project.name.starts_with(&last.name) && project.name != last.name;
        if is_sequel {
            if let Some(prev_review) = &last.review {
                if prev_review.average() >= 7.5 {
                    base *= 1.15;
                } else if prev_review.average() < 5.0 {
                    base *= 0.85;
                }
            }
        }
    }

    // Flat saturation penalty for clearly under-performing the best release.
    if state.high_score > 0.0 && (base * 10.0) / state.high_score < 0.8 {
        base *= 0.9;
    }

    base *= 1.0 + state.office().prestige as f64 * 0.03;

    let base_review = (base * 10.0).clamp(1.0, 10.0);

    let mut scores = Vec::with_capacity(4);
    for _ in 0..4 {
        let variance: f64 = rng.gen_range(-1.2..=1.2);
        let score = (base_review + variance).clamp(1.0, 10.0).round() as u8;
        scores.push(score);
    }

    let vars: &[(&str, &str)] = &[
        ("company", &state.company_name),
        ("game", &project.name),
        ("topic", &project.topic),
        ("genre", &project.genre),
    ];
    let mut comments = vec![fill(pick(rng, &catalogue::REVIEW_INTROS), vars)];
    if synergy >= 0.8 {
        comments.push(fill(pick(rng, &catalogue::REVIEW_POSITIVE), vars));
    } else if synergy < 0.5 {
        comments.push(fill(pick(rng, &catalogue::REVIEW_NEGATIVE), vars));
    }
    if match_score < 0.6 {
        comments.push(catalogue::REMARK_LOW_MATCH.to_string());
    } else if match_score >= 0.9 {
        comments.push(catalogue::REMARK_HIGH_MATCH.to_string());
    }
    comments.push(pick(rng, &catalogue::REVIEW_CONCLUSIONS).to_string());

    ReviewOutcome::new(scores, comments)
}

/// Expected sales volume for a reviewed project. Zero when unreviewed.
pub fn calculate_sales(state: &CompanyState, project: &Project, rng: &mut impl Rng) -> u64 {
    let Some(review) = &project.review else {
        return 0;
    };
    let avg = review.average();

    let size = catalogue::size(&project.size);
    let base_sales = BASE_SALES_UNITS * size.revenue_multi;

    let score_multi = if avg >= 9.0 {
        10.0
    } else if avg >= 8.0 {
        5.0
    } else if avg >= 7.0 {
        3.0
    } else if avg >= 6.0 {
        2.0
    } else if avg >= 5.0 {
        1.0
    } else if avg >= 4.0 {
        0.5
    } else {
        0.2
    };

    let fan_bonus = 1.0 + state.fans as f64 / 100_000.0;
    let marketing_multi = catalogue::marketing(&project.marketing).sales_multi;
    let platform_multi = catalogue::platform(&project.platform).map_or(1.0, |p| p.market_multi);
    let audience_multi = catalogue::audience_multiplier(&project.audience);
    let random_multi: f64 = rng.gen_range(0.8..=1.2);

    let sales = base_sales
        * score_multi
        * fan_bonus
        * platform_multi
        * audience_multi
        * marketing_multi
        * random_multi;
    sales.max(0.0) as u64
}

/// Revenue for a sales volume at the project's audience unit price.
pub fn revenue_for(project: &Project, sales: u64) -> i64 {
    sales as i64 * catalogue::audience_price(&project.audience)
}

/// Total development cost: size base, staff salaries across the scaled
/// development phase, platform license, marketing budget.
pub fn calculate_dev_cost(state: &CompanyState, project: &Project) -> i64 {
    let size = catalogue::size(&project.size);
    let base_cost = BASE_DEV_COST * size.cost_multi;

    let dev_weeks = catalogue::base_dev_weeks() as f64 * size.time_multi;
    let salary_cost = state.weekly_salaries() as f64 * dev_weeks;

    let license_fee = catalogue::platform(&project.platform).map_or(0, |p| p.license_fee);
    let marketing_cost = catalogue::marketing(&project.marketing).cost;

    (base_cost + salary_cost) as i64 + license_fee + marketing_cost
}
