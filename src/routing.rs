//! Department routing.
//!
//! An independent decision tree over the same attributes scoring reads.
//! Deliberately decoupled from the score: two leads with identical
//! temperature can route to different departments, and vice versa. Role and
//! deadline are never consulted.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::LeadAttributes;

/// Budget at or above which a lead routes straight to the VIP department.
const VIP_BUDGET: u32 = 500_000;

/// Niches handled by the technical department (bilingual).
const TECH_NICHES: &[&str] = &[
    "финтех",
    "fintech",
    "криптовалюты",
    "crypto",
    "blockchain",
    "edtech",
    "saas",
];

/// Niches handled by the specialized department (bilingual).
const SPECIALIZED_NICHES: &[&str] = &["медицина", "healthcare", "биотехнологии", "biotech"];

/// Recommended department for working a lead.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Department {
    /// Large budgets and enterprise accounts.
    #[serde(rename = "VIP department")]
    Vip,
    /// Fintech, crypto, edtech, SaaS.
    #[serde(rename = "Technical department")]
    Technical,
    /// Healthcare and biotech.
    #[serde(rename = "Specialized department")]
    Specialized,
    /// Large and enterprise task volumes.
    #[serde(rename = "Large-projects department")]
    LargeProjects,
    /// Everything else.
    #[serde(rename = "General department")]
    General,
}

impl Department {
    /// The department's routing label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Vip => "VIP department",
            Department::Technical => "Technical department",
            Department::Specialized => "Specialized department",
            Department::LargeProjects => "Large-projects department",
            Department::General => "General department",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Route a lead to a department.
///
/// Rules are evaluated in fixed priority order; the first match wins and the
/// rest are skipped. Total: always produces a department.
pub fn route_department(attributes: &LeadAttributes<'_>) -> Department {
    if let Some(budget) = &attributes.budget {
        if *budget >= BigDecimal::from(VIP_BUDGET) {
            return Department::Vip;
        }
    }

    if let Some(size) = attributes.company_size {
        if size.to_lowercase() == "enterprise" {
            return Department::Vip;
        }
    }

    if let Some(niche) = attributes.business_niche {
        let lower = niche.to_lowercase();
        if TECH_NICHES.iter().any(|n| lower.contains(n)) {
            return Department::Technical;
        }
        if SPECIALIZED_NICHES.iter().any(|n| lower.contains(n)) {
            return Department::Specialized;
        }
    }

    if let Some(volume) = attributes.task_volume {
        let lower = volume.to_lowercase();
        if lower == "large" || lower == "enterprise" {
            return Department::LargeProjects;
        }
    }

    Department::General
}
