//! Collection operations over scored leads.
//!
//! Both operations recompute scores from stored attributes on every call:
//! nothing derived is ever persisted, so there is no staleness to manage.
//! They consume a materialized in-memory sequence (whatever the repository's
//! `list` returned) and are pure apart from logging.

use bigdecimal::{BigDecimal, Zero};
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

use crate::models::Lead;
use crate::routing::Department;
use crate::scoring::score_lead;
use crate::temperature::Temperature;

/// Per-tier lead counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemperatureCounts {
    pub hot: usize,
    pub medium: usize,
    pub cold: usize,
}

/// Per-tier budget sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemperatureBudgets {
    pub hot: BigDecimal,
    pub medium: BigDecimal,
    pub cold: BigDecimal,
}

/// Aggregate view over a collection of leads.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    /// Number of leads that scored successfully.
    pub total: usize,
    /// Lead counts per temperature tier.
    pub by_temperature: TemperatureCounts,
    /// Lead counts per department; only departments that occurred appear.
    pub by_department: BTreeMap<Department, usize>,
    /// Sum of all non-zero budgets.
    pub total_budget: BigDecimal,
    /// Budget sums broken down by tier.
    pub budgets_by_temperature: TemperatureBudgets,
    /// `total_budget / total`, zero for an empty collection.
    pub average_budget: BigDecimal,
    /// Leads excluded because their stored attributes could not be scored.
    pub skipped: usize,
}

impl Statistics {
    /// Serialize into the summary shape the consuming layer reports.
    pub fn to_json(&self) -> Value {
        let by_department: BTreeMap<&'static str, usize> = self
            .by_department
            .iter()
            .map(|(department, count)| (department.as_str(), *count))
            .collect();

        json!({
            "total": self.total,
            "by_temperature": {
                "hot": self.by_temperature.hot,
                "medium": self.by_temperature.medium,
                "cold": self.by_temperature.cold,
            },
            "by_department": by_department,
            "total_budget": self.total_budget,
            "budgets_by_temperature": {
                "hot": self.budgets_by_temperature.hot,
                "medium": self.budgets_by_temperature.medium,
                "cold": self.budgets_by_temperature.cold,
            },
            "average_budget": self.average_budget,
            "skipped": self.skipped,
        })
    }
}

/// Rank leads hottest-first.
///
/// Scores are recomputed from stored attributes and the sort is stable, so
/// equal scores keep their original relative order. A lead whose stored
/// attributes cannot be materialized ranks with score 0 rather than being
/// dropped: the result is always a permutation of the input.
pub fn rank_by_temperature(leads: Vec<Lead>) -> Vec<Lead> {
    let mut keyed: Vec<(Lead, u8)> = leads
        .into_iter()
        .map(|lead| {
            let score = match lead.attributes() {
                Ok(attributes) => score_lead(&attributes).score,
                Err(e) => {
                    tracing::warn!("Ranking lead {} with score 0: {}", lead.id, e);
                    0
                }
            };
            (lead, score)
        })
        .collect();

    // Stable by contract: insertion order survives among equal scores
    keyed.sort_by_key(|(_, score)| std::cmp::Reverse(*score));

    keyed.into_iter().map(|(lead, _)| lead).collect()
}

/// Aggregate counts and budget sums across a collection of leads.
///
/// A lead whose attributes fail to materialize is excluded from every count
/// and sum and tallied in `skipped` instead of aborting the aggregation.
pub fn aggregate_statistics(leads: &[Lead]) -> Statistics {
    let mut stats = Statistics::default();

    for lead in leads {
        let attributes = match lead.attributes() {
            Ok(attributes) => attributes,
            Err(e) => {
                tracing::warn!("Skipping lead {} in statistics: {}", lead.id, e);
                stats.skipped += 1;
                continue;
            }
        };

        let result = score_lead(&attributes);

        stats.total += 1;
        match result.temperature {
            Temperature::Hot => stats.by_temperature.hot += 1,
            Temperature::Medium => stats.by_temperature.medium += 1,
            Temperature::Cold => stats.by_temperature.cold += 1,
        }
        *stats.by_department.entry(result.department).or_insert(0) += 1;

        if let Some(budget) = attributes.budget {
            if !budget.is_zero() {
                match result.temperature {
                    Temperature::Hot => stats.budgets_by_temperature.hot += budget.clone(),
                    Temperature::Medium => {
                        stats.budgets_by_temperature.medium += budget.clone()
                    }
                    Temperature::Cold => stats.budgets_by_temperature.cold += budget.clone(),
                }
                stats.total_budget += budget;
            }
        }
    }

    if stats.total > 0 {
        stats.average_budget = stats.total_budget.clone() / BigDecimal::from(stats.total as u64);
    }

    stats
}
