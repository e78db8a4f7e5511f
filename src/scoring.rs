//! Lead scoring.
//!
//! Six independent criterion scorers, each mapping one optional attribute to
//! a bounded point contribution, summed into a 0-100 total. Phrase tables are
//! bilingual (English/Russian) and ordered: several entries overlap as
//! substrings, so list order is part of the behavior, not an implementation
//! detail. Keep every table an ordered slice, never a map.
//!
//! An absent attribute contributes 0 points; scoring is total and never
//! fails.

use bigdecimal::{BigDecimal, Zero};
use serde::{Deserialize, Serialize};

use crate::models::LeadAttributes;
use crate::routing::{route_department, Department};
use crate::temperature::Temperature;

// ---------------------------------------------------------------------------
// Criterion tables
// ---------------------------------------------------------------------------

/// High-value niches, worth the full 20 points.
const HIGH_VALUE_NICHES: &[&str] = &[
    "финтех",
    "fintech",
    "криптовалюты",
    "crypto",
    "blockchain",
    "медицина",
    "healthcare",
    "биотехнологии",
    "biotech",
    "энергетика",
    "energy",
    "нефть",
    "oil",
    "газ",
    "gas",
    "недвижимость",
    "real estate",
    "строительство",
    "construction",
    "логистика",
    "logistics",
    "транспорт",
    "transport",
    "образование",
    "education",
    "edtech",
];

/// Medium-value niches, worth 10 points.
const MEDIUM_VALUE_NICHES: &[&str] = &[
    "e-commerce",
    "интернет-магазин",
    "retail",
    "розница",
    "производство",
    "manufacturing",
    "промышленность",
    "industry",
    "реклама",
    "advertising",
    "маркетинг",
    "marketing",
    "консалтинг",
    "consulting",
    "услуги",
    "services",
];

/// Company size points, exact case-insensitive lookup.
const COMPANY_SIZE_POINTS: &[(&str, u8)] = &[
    ("enterprise", 20),
    ("large", 15),
    ("medium", 10),
    ("small", 5),
    ("startup", 3),
];

/// Task volume points, exact case-insensitive lookup.
const TASK_VOLUME_POINTS: &[(&str, u8)] = &[
    ("enterprise", 15),
    ("large", 12),
    ("medium", 8),
    ("small", 4),
];

/// Executive/founder/owner titles, worth the full 20 points.
///
/// Checked before the other role sets; note that "директор" here also
/// matches C-level titles like "технический директор" by substring, so an
/// explicit CTO still scores as an executive. Intake-system parity.
const EXECUTIVE_ROLES: &[&str] = &[
    "ceo",
    "генеральный директор",
    "директор",
    "founder",
    "основатель",
    "owner",
    "владелец",
];

/// C-level / operations titles, worth 15 points.
const C_LEVEL_ROLES: &[&str] = &[
    "cto",
    "технический директор",
    "cfo",
    "финансовый директор",
    "coo",
    "операционный директор",
];

/// Manager / lead / head titles, worth 10 points.
const MANAGER_ROLES: &[&str] = &["менеджер", "manager", "руководитель", "head", "lead"];

/// Deadline phrases in match-priority order. "urgent" and "1 month" can both
/// appear in one text; the first entry that matches wins and iteration stops.
const DEADLINE_POINTS: &[(&str, u8)] = &[
    ("urgent", 15),
    ("срочно", 15),
    ("asap", 15),
    ("1-2 weeks", 10),
    ("1-2 недели", 10),
    ("1 month", 5),
    ("1 месяц", 5),
    ("flexible", 2),
    ("гибкие", 2),
];

/// Budget tiers, highest first. Anything positive below the lowest tier is
/// worth 1 point.
const BUDGET_TIERS: &[(u32, u8)] = &[
    (1_000_000, 10),
    (500_000, 8),
    (200_000, 6),
    (100_000, 4),
    (50_000, 2),
];

// ---------------------------------------------------------------------------
// Criterion scorers
// ---------------------------------------------------------------------------

/// Niche contribution, 0-20 points.
pub fn score_niche(niche: Option<&str>) -> u8 {
    let Some(niche) = niche else { return 0 };
    let lower = niche.to_lowercase();
    if HIGH_VALUE_NICHES.iter().any(|n| lower.contains(n)) {
        20
    } else if MEDIUM_VALUE_NICHES.iter().any(|n| lower.contains(n)) {
        10
    } else {
        5
    }
}

/// Company size contribution, 0-20 points. Unrecognized sizes score 0.
pub fn score_company_size(size: Option<&str>) -> u8 {
    let Some(size) = size else { return 0 };
    let lower = size.to_lowercase();
    COMPANY_SIZE_POINTS
        .iter()
        .find(|(name, _)| lower == *name)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Task volume contribution, 0-15 points. Unrecognized volumes score 0.
pub fn score_task_volume(volume: Option<&str>) -> u8 {
    let Some(volume) = volume else { return 0 };
    let lower = volume.to_lowercase();
    TASK_VOLUME_POINTS
        .iter()
        .find(|(name, _)| lower == *name)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

/// Role contribution, 0-20 points. Title sets are checked in order, first
/// match wins; a present but unmatched role still scores 5.
pub fn score_role(role: Option<&str>) -> u8 {
    let Some(role) = role else { return 0 };
    let lower = role.to_lowercase();
    if EXECUTIVE_ROLES.iter().any(|r| lower.contains(r)) {
        20
    } else if C_LEVEL_ROLES.iter().any(|r| lower.contains(r)) {
        15
    } else if MANAGER_ROLES.iter().any(|r| lower.contains(r)) {
        10
    } else {
        5
    }
}

/// Deadline contribution, 0-15 points. First matching table entry wins.
pub fn score_deadline(deadline: Option<&str>) -> u8 {
    let Some(deadline) = deadline else { return 0 };
    let lower = deadline.to_lowercase();
    for (phrase, points) in DEADLINE_POINTS {
        if lower.contains(phrase) {
            return *points;
        }
    }
    0
}

/// Budget contribution, 0-10 points.
///
/// An exactly-zero budget scores like an absent one. The original intake
/// system short-circuits on falsy values, so zero never reaches the tier
/// table; possibly a bug there, kept as-is for parity.
pub fn score_budget(budget: Option<&BigDecimal>) -> u8 {
    let Some(budget) = budget else { return 0 };
    if budget.is_zero() {
        return 0;
    }
    for (threshold, points) in BUDGET_TIERS {
        if *budget >= BigDecimal::from(*threshold) {
            return *points;
        }
    }
    1
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Outcome of scoring one lead. Derived on every call, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Total priority score, 0-100.
    pub score: u8,
    /// Tier derived from the score.
    pub temperature: Temperature,
    /// Routing recommendation, computed independently of the score.
    pub department: Department,
}

/// Score a lead's attributes.
///
/// Total over every combination of present/absent fields: sums the six
/// criterion contributions, classifies the total into a tier, and routes the
/// lead to a department. The per-criterion caps (20+20+15+20+15+10) bound
/// the sum at 100 without an explicit clamp; re-verify if a criterion is
/// ever added.
pub fn score_lead(attributes: &LeadAttributes<'_>) -> ScoreResult {
    let score = score_niche(attributes.business_niche)
        + score_company_size(attributes.company_size)
        + score_task_volume(attributes.task_volume)
        + score_role(attributes.role)
        + score_deadline(attributes.deadline)
        + score_budget(attributes.budget.as_ref());

    let temperature = Temperature::from_score(score);
    let department = route_department(attributes);

    tracing::trace!(
        "Scored lead attributes: {} points -> {} / {}",
        score,
        temperature,
        department
    );

    ScoreResult {
        score,
        temperature,
        department,
    }
}
