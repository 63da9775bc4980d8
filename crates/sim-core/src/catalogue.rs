//! Immutable reference tables: topics, genres, compatibility, platforms,
//! engine features, staff roles, events, office tiers, and narration
//! templates.
//!
//! Lookups are string-keyed with explicit default fallbacks: an unknown
//! topic scores compatibility 1, an unknown genre gets a flat ideal
//! profile. This leniency is intentional.

use std::collections::BTreeMap;

/// The six resource-slider domains, in canonical order.
pub const SLIDER_DOMAINS: [&str; 6] = ["AI", "Gameplay", "Graphics", "Sound", "Story", "World"];

/// All selectable game topics.
pub const TOPICS: [&str; 25] = [
    "Fantasy",
    "Sci-Fi",
    "Medieval",
    "Espionage",
    "Pirates",
    "Zombies",
    "Sports",
    "Racing",
    "Hospital",
    "School",
    "City",
    "Space",
    "War",
    "Music",
    "Cooking",
    "Animals",
    "Horror",
    "Superhero",
    "Cyberpunk",
    "Detective",
    "Dinosaurs",
    "Vampires",
    "Firefighters",
    "Police",
    "Wild West",
];

/// All selectable genres. The compatibility matrix columns follow this order.
pub const GENRES: [&str; 8] = [
    "Action",
    "RPG",
    "Simulation",
    "Strategy",
    "Adventure",
    "Puzzle",
    "Sports",
    "Casual",
];

/// Topic rows of the compatibility matrix (0 = poor .. 3 = excellent).
/// Topics without a row fall back to 1 ("okay").
const TOPIC_GENRE_COMPAT: [(&str, [u8; 8]); 20] = [
    //                Act RPG Sim Str Adv Puz Spo Cas
    ("Fantasy", [2, 3, 1, 2, 3, 1, 0, 1]),
    ("Sci-Fi", [3, 2, 2, 3, 2, 1, 0, 1]),
    ("Medieval", [2, 3, 2, 3, 2, 0, 0, 0]),
    ("Espionage", [3, 1, 1, 2, 3, 2, 0, 1]),
    ("Pirates", [3, 2, 1, 2, 3, 1, 0, 1]),
    ("Zombies", [3, 1, 0, 2, 2, 1, 0, 1]),
    ("Sports", [1, 0, 2, 1, 0, 0, 3, 2]),
    ("Racing", [2, 0, 2, 0, 0, 0, 3, 2]),
    ("Hospital", [0, 0, 3, 1, 1, 2, 0, 2]),
    ("School", [0, 1, 3, 1, 1, 2, 0, 2]),
    ("City", [0, 1, 3, 2, 1, 1, 0, 1]),
    ("Space", [3, 2, 2, 3, 2, 0, 0, 1]),
    ("War", [3, 1, 1, 3, 1, 0, 0, 0]),
    ("Music", [0, 0, 2, 0, 0, 3, 0, 3]),
    ("Cooking", [0, 0, 3, 0, 0, 2, 0, 3]),
    ("Animals", [1, 1, 3, 1, 2, 2, 0, 3]),
    ("Horror", [2, 1, 0, 1, 3, 1, 0, 0]),
    ("Superhero", [3, 2, 0, 1, 3, 0, 0, 1]),
    ("Cyberpunk", [3, 3, 1, 2, 2, 0, 0, 0]),
    ("Detective", [1, 1, 1, 1, 3, 3, 0, 1]),
];

/// Ideal slider values per genre, in [AI, Gameplay, Graphics, Sound, Story,
/// World] order matching [`SLIDER_DOMAINS`].
const GENRE_IDEAL_SLIDERS: [(&str, [u32; 6]); 8] = [
    ("Action", [3, 9, 7, 5, 2, 4]),
    ("RPG", [4, 6, 5, 4, 9, 8]),
    ("Simulation", [7, 8, 4, 3, 2, 6]),
    ("Strategy", [9, 7, 3, 3, 4, 6]),
    ("Adventure", [3, 5, 6, 6, 9, 7]),
    ("Puzzle", [5, 9, 4, 5, 1, 2]),
    ("Sports", [6, 8, 7, 5, 1, 3]),
    ("Casual", [3, 8, 5, 6, 1, 3]),
];

/// Compatibility rank in {0,1,2,3} for a topic/genre pairing.
///
/// Unknown topics and genres outside the matrix both default to 1.
pub fn compatibility(topic: &str, genre: &str) -> u8 {
    let Some((_, row)) = TOPIC_GENRE_COMPAT.iter().find(|(t, _)| *t == topic) else {
        return 1;
    };
    match GENRES.iter().position(|g| *g == genre) {
        Some(idx) => row[idx],
        None => 1,
    }
}

/// Ideal six-domain slider profile for a genre; flat 5s when unknown.
pub fn ideal_sliders(genre: &str) -> BTreeMap<String, u32> {
    match GENRE_IDEAL_SLIDERS.iter().find(|(g, _)| *g == genre) {
        Some((_, values)) => SLIDER_DOMAINS
            .iter()
            .zip(values.iter())
            .map(|(d, v)| (d.to_string(), *v))
            .collect(),
        None => SLIDER_DOMAINS.iter().map(|d| (d.to_string(), 5)).collect(),
    }
}

/// A release platform with its availability window and market terms.
#[derive(Debug, Clone, Copy)]
pub struct PlatformSpec {
    pub name: &'static str,
    pub license_fee: i64,
    pub market_multi: f64,
    pub available_week: u64,
    pub end_week: Option<u64>,
    pub class: &'static str,
}

pub const PLATFORMS: [PlatformSpec; 12] = [
    PlatformSpec { name: "PC (MS-DOS)", license_fee: 0, market_multi: 1.0, available_week: 1, end_week: Some(40), class: "PC" },
    PlatformSpec { name: "PC (Windows)", license_fee: 0, market_multi: 1.2, available_week: 30, end_week: None, class: "PC" },
    PlatformSpec { name: "PC (Linux)", license_fee: 0, market_multi: 0.5, available_week: 50, end_week: None, class: "PC" },
    PlatformSpec { name: "Playsystem 1", license_fee: 20_000, market_multi: 1.5, available_week: 1, end_week: Some(100), class: "Console" },
    PlatformSpec { name: "Playsystem 2", license_fee: 40_000, market_multi: 2.2, available_week: 80, end_week: Some(250), class: "Console" },
    PlatformSpec { name: "Ninvento GS", license_fee: 15_000, market_multi: 1.3, available_week: 1, end_week: Some(60), class: "Handheld" },
    PlatformSpec { name: "Ninvento Duo", license_fee: 30_000, market_multi: 1.8, available_week: 70, end_week: Some(200), class: "Console" },
    PlatformSpec { name: "mBox", license_fee: 25_000, market_multi: 1.4, available_week: 20, end_week: Some(150), class: "Console" },
    PlatformSpec { name: "mBox 360", license_fee: 45_000, market_multi: 2.0, available_week: 140, end_week: Some(350), class: "Console" },
    PlatformSpec { name: "Handheld X", license_fee: 10_000, market_multi: 0.8, available_week: 1, end_week: Some(80), class: "Handheld" },
    PlatformSpec { name: "Smartphone", license_fee: 5_000, market_multi: 2.5, available_week: 160, end_week: None, class: "Mobile" },
    PlatformSpec { name: "Tablet OS", license_fee: 7_000, market_multi: 1.8, available_week: 200, end_week: None, class: "Mobile" },
];

/// Platform lookup by exact name.
pub fn platform(name: &str) -> Option<&'static PlatformSpec> {
    PLATFORMS.iter().find(|p| p.name == name)
}

/// Platforms whose availability window covers `week`.
pub fn available_platforms(week: u64) -> Vec<&'static PlatformSpec> {
    PLATFORMS
        .iter()
        .filter(|p| p.available_week <= week && p.end_week.map_or(true, |end| week <= end))
        .collect()
}

/// Audience segments: (name, sales multiplier, unit price).
pub const AUDIENCES: [(&str, f64, i64); 3] = [
    ("Everyone", 1.5, 20),
    ("Teens", 1.0, 30),
    ("Hardcore", 0.7, 50),
];

/// Sales multiplier for an audience; 1.0 when unknown.
pub fn audience_multiplier(name: &str) -> f64 {
    AUDIENCES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map_or(1.0, |(_, m, _)| *m)
}

/// Unit price for an audience; 30 when unknown.
pub fn audience_price(name: &str) -> i64 {
    AUDIENCES
        .iter()
        .find(|(n, _, _)| *n == name)
        .map_or(30, |(_, _, p)| *p)
}

/// A researchable engine feature.
#[derive(Debug, Clone, Copy)]
pub struct FeatureSpec {
    pub category: &'static str,
    pub name: &'static str,
    pub tech_bonus: i32,
    pub cost: i64,
    pub week: u64,
}

pub const ENGINE_FEATURES: [FeatureSpec; 15] = [
    FeatureSpec { category: "Graphics", name: "2D Graphics V1", tech_bonus: 1, cost: 0, week: 1 },
    FeatureSpec { category: "Graphics", name: "2D Graphics V2", tech_bonus: 2, cost: 15_000, week: 10 },
    FeatureSpec { category: "Graphics", name: "3D Graphics V1", tech_bonus: 3, cost: 40_000, week: 30 },
    FeatureSpec { category: "Graphics", name: "3D Graphics V2", tech_bonus: 5, cost: 80_000, week: 60 },
    FeatureSpec { category: "Sound", name: "Mono Sound", tech_bonus: 1, cost: 0, week: 1 },
    FeatureSpec { category: "Sound", name: "Stereo Sound", tech_bonus: 2, cost: 10_000, week: 10 },
    FeatureSpec { category: "Sound", name: "Surround Sound", tech_bonus: 3, cost: 30_000, week: 40 },
    FeatureSpec { category: "AI", name: "Basic AI", tech_bonus: 1, cost: 0, week: 1 },
    FeatureSpec { category: "AI", name: "Advanced AI", tech_bonus: 2, cost: 20_000, week: 20 },
    FeatureSpec { category: "AI", name: "Learning AI", tech_bonus: 4, cost: 60_000, week: 50 },
    FeatureSpec { category: "Gameplay", name: "Basic Controls", tech_bonus: 1, cost: 0, week: 1 },
    FeatureSpec { category: "Gameplay", name: "Physics Engine", tech_bonus: 2, cost: 25_000, week: 15 },
    FeatureSpec { category: "Gameplay", name: "Online Multiplayer", tech_bonus: 4, cost: 70_000, week: 45 },
    FeatureSpec { category: "Level", name: "Linear Levels", tech_bonus: 1, cost: 0, week: 1 },
    FeatureSpec { category: "Level", name: "Open World", tech_bonus: 3, cost: 50_000, week: 35 },
];

/// Feature lookup by exact name.
pub fn feature(name: &str) -> Option<&'static FeatureSpec> {
    ENGINE_FEATURES.iter().find(|f| f.name == name)
}

/// Features already researchable by `week`.
pub fn available_features(week: u64) -> Vec<&'static FeatureSpec> {
    ENGINE_FEATURES.iter().filter(|f| f.week <= week).collect()
}

/// Candidate name pools.
pub const FIRST_NAMES: [&str; 30] = [
    "Max", "Anna", "Felix", "Sarah", "Tim", "Julia", "Leon", "Laura", "Lukas", "Marie", "Jonas",
    "Lena", "Niklas", "Emma", "David", "Sophie", "Jan", "Mia", "Tom", "Lisa", "Kai", "Nina",
    "Ben", "Hanna", "Erik", "Lea", "Paul", "Clara", "Finn", "Ella",
];

pub const LAST_NAMES: [&str; 23] = [
    "Miller", "Smith", "Weber", "Fischer", "Wagner", "Bauer", "Koch", "Richter", "Klein", "Wolf",
    "Black", "Brown", "Carpenter", "Hartmann", "Krueger", "Hoffman", "Long", "Young", "Peters",
    "King", "Lang", "Berg", "Stone",
];

/// Staff role archetypes: (role, primary domain, secondary domain).
pub const STAFF_ROLES: [(&str, &str, &str); 5] = [
    ("Programmer", "AI", "Gameplay"),
    ("Designer", "Graphics", "World"),
    ("Sound Engineer", "Sound", "Gameplay"),
    ("Writer", "Story", "World"),
    ("Generalist", "Gameplay", "Graphics"),
];

/// Specialization bonus: (name, bonus target, bonus value, description).
///
/// Targets are either a slider domain or one of "Morale", "Bugs",
/// "Marketing".
pub const SPECIALIZATIONS: [(&str, &str, f64, &str); 7] = [
    ("Sound Wizard", "Sound", 0.2, "Massively improves audio quality."),
    ("Code Machine", "AI", 0.2, "Optimizes programming and AI work."),
    ("Design Guru", "Graphics", 0.2, "An eye for first-class visuals."),
    ("Story Master", "Story", 0.2, "Writes gripping dialogue and plots."),
    ("Motivator", "Morale", 10.0, "Keeps team morale high."),
    ("Bug Hunter", "Bugs", 0.5, "Finds and fixes bugs twice as fast."),
    ("Marketing Expert", "Marketing", 0.3, "Boosts marketing effectiveness."),
];

/// Development phases: (name, duration in weeks). Total base duration is
/// six weeks before the size-tier time multiplier.
pub const DEV_PHASES: [(&str, u64); 5] = [
    ("Concept", 1),
    ("Engine", 1),
    ("Design", 1),
    ("Production", 2),
    ("Testing", 1),
];

/// Base development duration in weeks, before size scaling.
pub fn base_dev_weeks() -> u64 {
    DEV_PHASES.iter().map(|(_, w)| w).sum()
}

/// What a random event changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventEffect {
    Cash,
    Fans,
}

/// A world event applied during a weekly check.
#[derive(Debug, Clone, Copy)]
pub struct EventSpec {
    pub title: &'static str,
    pub text: &'static str,
    pub effect: EventEffect,
    pub value: i64,
}

pub const RANDOM_EVENTS: [EventSpec; 10] = [
    EventSpec { title: "Game Expo", text: "You present your studio at the big game expo! Fans are up.", effect: EventEffect::Fans, value: 500 },
    EventSpec { title: "Economic Boom", text: "The economy is booming! Players are buying more.", effect: EventEffect::Cash, value: 15_000 },
    EventSpec { title: "Recession", text: "A downturn hits the industry. Revenue drops.", effect: EventEffect::Cash, value: -10_000 },
    EventSpec { title: "Retro Craze", text: "Retro games are suddenly all the rage again!", effect: EventEffect::Fans, value: 300 },
    EventSpec { title: "Hacker Attack", text: "Hackers hit your servers! Repair costs are due.", effect: EventEffect::Cash, value: -8_000 },
    EventSpec { title: "Award Nomination", text: "Your last game was nominated for an award!", effect: EventEffect::Fans, value: 1_000 },
    EventSpec { title: "Back Taxes", text: "The tax office demands a back payment.", effect: EventEffect::Cash, value: -12_000 },
    EventSpec { title: "Investor Gift", text: "A mysterious investor believes in your studio!", effect: EventEffect::Cash, value: 25_000 },
    EventSpec { title: "Viral Hit", text: "A video about your studio goes viral!", effect: EventEffect::Fans, value: 2_000 },
    EventSpec { title: "Server Outage", text: "Your online service went down. Fans are annoyed.", effect: EventEffect::Fans, value: -500 },
];

/// An office tier on the fixed upgrade ladder.
#[derive(Debug, Clone, Copy)]
pub struct OfficeSpec {
    pub name: &'static str,
    pub max_staff: usize,
    pub cost: i64,
    pub prestige: u32,
}

pub const OFFICE_TIERS: [OfficeSpec; 5] = [
    OfficeSpec { name: "Garage", max_staff: 1, cost: 0, prestige: 0 },
    OfficeSpec { name: "Small Office", max_staff: 3, cost: 50_000, prestige: 1 },
    OfficeSpec { name: "Mid-size Office", max_staff: 6, cost: 200_000, prestige: 2 },
    OfficeSpec { name: "Large Studio", max_staff: 12, cost: 500_000, prestige: 3 },
    OfficeSpec { name: "Headquarters", max_staff: 20, cost: 1_500_000, prestige: 5 },
];

/// A project size tier and its cost/time/revenue scaling.
#[derive(Debug, Clone, Copy)]
pub struct SizeSpec {
    pub name: &'static str,
    pub cost_multi: f64,
    pub time_multi: f64,
    pub revenue_multi: f64,
    pub slider_budget: u32,
    pub min_staff: usize,
    pub description: &'static str,
}

pub const GAME_SIZES: [SizeSpec; 4] = [
    SizeSpec { name: "Small", cost_multi: 0.5, time_multi: 0.5, revenue_multi: 0.4, slider_budget: 20, min_staff: 0, description: "A small indie game. Cheap and quick, with limited revenue potential." },
    SizeSpec { name: "Medium", cost_multi: 1.0, time_multi: 1.0, revenue_multi: 1.0, slider_budget: 30, min_staff: 0, description: "A regular game. Standard cost and revenue." },
    SizeSpec { name: "Large", cost_multi: 2.0, time_multi: 1.5, revenue_multi: 2.5, slider_budget: 40, min_staff: 3, description: "A big game. Higher cost, much more revenue. Needs at least 3 staff." },
    SizeSpec { name: "AAA", cost_multi: 4.0, time_multi: 2.0, revenue_multi: 5.0, slider_budget: 50, min_staff: 6, description: "A blockbuster. Enormous cost, enormous potential. Needs at least 6 staff." },
];

/// Size tier by name; falls back to Medium.
pub fn size(name: &str) -> &'static SizeSpec {
    GAME_SIZES
        .iter()
        .find(|s| s.name == name)
        .unwrap_or(&GAME_SIZES[1])
}

/// A marketing campaign tier.
#[derive(Debug, Clone, Copy)]
pub struct MarketingSpec {
    pub name: &'static str,
    pub cost: i64,
    pub sales_multi: f64,
    pub fan_multi: f64,
    pub description: &'static str,
}

pub const MARKETING_CAMPAIGNS: [MarketingSpec; 4] = [
    MarketingSpec { name: "No Marketing", cost: 0, sales_multi: 1.0, fan_multi: 1.0, description: "No marketing campaign." },
    MarketingSpec { name: "Small Campaign", cost: 10_000, sales_multi: 1.3, fan_multi: 1.2, description: "Online ads and social media." },
    MarketingSpec { name: "Medium Campaign", cost: 40_000, sales_multi: 1.8, fan_multi: 1.5, description: "Ads plus a trade-show booth." },
    MarketingSpec { name: "Large Campaign", cost: 100_000, sales_multi: 2.5, fan_multi: 2.0, description: "TV spots, big expo presence, influencers." },
];

/// Marketing tier by name; falls back to no marketing.
pub fn marketing(name: &str) -> &'static MarketingSpec {
    MARKETING_CAMPAIGNS
        .iter()
        .find(|m| m.name == name)
        .unwrap_or(&MARKETING_CAMPAIGNS[0])
}

/// A staff training option: (name, primary-skill boost, cost, description).
pub const TRAINING_OPTIONS: [(&str, u32, i64, &str); 3] = [
    ("Workshop", 5, 5_000, "A workshop. +5 skill points on the primary domain."),
    ("Advanced Course", 10, 15_000, "A thorough course. +10 skill points on the primary domain."),
    ("Expert Seminar", 20, 40_000, "An expert seminar. +20 skill points on the primary domain."),
];

/// Trend candidate pools: (topic or genre, narration text).
pub const TREND_TOPICS: [(&str, &str); 8] = [
    ("Zombies", "Zombies are trending right now!"),
    ("Space", "Space games are hugely popular!"),
    ("Fantasy", "Fantasy is having a revival!"),
    ("Cyberpunk", "Cyberpunk is the hottest trend!"),
    ("Horror", "Horror games are booming!"),
    ("Sports", "Sports games are selling like crazy!"),
    ("Superhero", "Superhero games are massively popular!"),
    ("Pirates", "Pirate games are back on course!"),
];

pub const TREND_GENRES: [(&str, &str); 5] = [
    ("Action", "Action games dominate the charts!"),
    ("RPG", "RPGs are extremely popular!"),
    ("Simulation", "Simulation games are the new hit!"),
    ("Casual", "Casual games are reaching the mainstream!"),
    ("Strategy", "Strategy games are seeing a boom!"),
];

/// Review narration pools. Placeholders: `{company}`, `{game}`, `{topic}`,
/// `{genre}`.
pub const REVIEW_INTROS: [&str; 3] = [
    "We took a close look at '{game}' by {company}.",
    "'{game}' has finally arrived. Was it worth the wait?",
    "On the test bench today: the new release from {company}, '{game}'.",
];

pub const REVIEW_POSITIVE: [&str; 3] = [
    "Pairing {topic} with {genre} is a stroke of genius.",
    "A true masterpiece for fans of {genre} games.",
    "Rarely has a game about {topic} gripped us like this.",
];

pub const REVIEW_NEGATIVE: [&str; 3] = [
    "Sadly the combination of {topic} and {genre} feels far-fetched.",
    "The choice of theme clearly missed the mark here.",
    "Thematically and mechanically a disappointment.",
];

pub const REVIEW_CONCLUSIONS: [&str; 4] = [
    "A must-have for every collection.",
    "Decent entertainment in between.",
    "Unfortunately just average.",
    "A title you can safely skip.",
];

pub const REMARK_LOW_MATCH: &str = "The mechanics feel wooden and disjointed.";
pub const REMARK_HIGH_MATCH: &str = "The systems mesh together perfectly.";

/// Inbound mail templates. Placeholders: `{game}`, `{topic}`.
pub const MAIL_BUG_SUBJECT: &str = "Complaint about {game}";
pub const MAIL_BUG_BODY: &str =
    "Hello! I played '{game}' but it keeps crashing. Please fix the bugs!";
pub const MAIL_FAN_SUBJECT: &str = "I love {game}!";
pub const MAIL_FAN_BODY: &str =
    "Hey! '{game}' is fantastic. The {topic} theme is exactly my thing. Keep it up!";

/// Interpolate `{key}` placeholders in a narration template.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (key, value) in vars {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compatibility_known_pairs() {
        assert_eq!(compatibility("Fantasy", "RPG"), 3);
        assert_eq!(compatibility("Hospital", "Action"), 0);
        assert_eq!(compatibility("Cyberpunk", "Casual"), 0);
    }

    #[test]
    fn compatibility_defaults_to_one() {
        assert_eq!(compatibility("Submarines", "RPG"), 1);
        assert_eq!(compatibility("Dinosaurs", "Action"), 1);
        assert_eq!(compatibility("Fantasy", "Roguelike"), 1);
    }

    #[test]
    fn ideal_sliders_known_genre() {
        let rpg = ideal_sliders("RPG");
        assert_eq!(rpg["Story"], 9);
        assert_eq!(rpg["World"], 8);
        assert_eq!(rpg.len(), 6);
    }

    #[test]
    fn ideal_sliders_unknown_genre_is_flat() {
        let flat = ideal_sliders("Roguelike");
        assert!(flat.values().all(|&v| v == 5));
        assert_eq!(flat.len(), 6);
    }

    #[test]
    fn platform_windows_arrives_week_30() {
        assert!(!available_platforms(1).iter().any(|p| p.name == "PC (Windows)"));
        assert!(available_platforms(30).iter().any(|p| p.name == "PC (Windows)"));
        // MS-DOS leaves the market after week 40.
        assert!(!available_platforms(41).iter().any(|p| p.name == "PC (MS-DOS)"));
    }

    #[test]
    fn audience_defaults() {
        assert_eq!(audience_price("Hardcore"), 50);
        assert_eq!(audience_price("Aliens"), 30);
        assert_eq!(audience_multiplier("Everyone"), 1.5);
        assert_eq!(audience_multiplier("Aliens"), 1.0);
    }

    #[test]
    fn starter_features_are_free() {
        let free: Vec<_> = ENGINE_FEATURES.iter().filter(|f| f.cost == 0).collect();
        assert_eq!(free.len(), 5);
        assert!(free.iter().all(|f| f.week == 1));
    }

    #[test]
    fn dev_duration_sums_to_six_weeks() {
        assert_eq!(base_dev_weeks(), 6);
    }

    #[test]
    fn office_ladder_is_monotonic() {
        for pair in OFFICE_TIERS.windows(2) {
            assert!(pair[0].max_staff < pair[1].max_staff);
            assert!(pair[0].cost < pair[1].cost);
        }
    }
}
