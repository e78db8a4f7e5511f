use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::LeadError;

// ============ Stored Records ============

/// A sales lead ("application") as captured by the intake layer.
///
/// The attribute fields are kept exactly as stored — free text, including the
/// budget — because the intake layer accepts whatever the submitter typed.
/// Scoring works on the typed view produced by [`Lead::attributes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier for the lead.
    pub id: Uuid,
    /// Submitter's name. Pass-through, never consulted by scoring.
    pub name: Option<String>,
    /// Contact detail (phone or email). Pass-through.
    pub contact: Option<String>,
    /// Industry niche, free text.
    pub business_niche: Option<String>,
    /// Company size bucket (startup/small/medium/large/enterprise) or free text.
    pub company_size: Option<String>,
    /// Task volume bucket (small/medium/large/enterprise) or free text.
    pub task_volume: Option<String>,
    /// Submitter's role, free text.
    pub role: Option<String>,
    /// Deadline expectation, free text.
    pub deadline: Option<String>,
    /// Budget as stored, raw text. Parsed on use.
    pub budget: Option<String>,
    /// Timestamp of creation.
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Materialize the scoring view over this record.
    ///
    /// The stored budget is the one attribute that can be malformed: empty or
    /// whitespace-only text counts as absent, anything else must parse as a
    /// decimal amount. All other attributes are borrowed as-is.
    pub fn attributes(&self) -> Result<LeadAttributes<'_>, LeadError> {
        let budget = match self.budget.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(BigDecimal::from_str(raw).map_err(|_| {
                LeadError::MalformedBudget {
                    lead_id: self.id,
                    value: raw.to_string(),
                }
            })?),
        };

        Ok(LeadAttributes {
            business_niche: self.business_niche.as_deref(),
            company_size: self.company_size.as_deref(),
            task_volume: self.task_volume.as_deref(),
            role: self.role.as_deref(),
            deadline: self.deadline.as_deref(),
            budget,
        })
    }
}

// ============ Scoring Input ============

/// The business attributes scoring reads, all optional.
///
/// A borrowed, immutable view: scoring has no notion of lead identity or
/// lifecycle. An absent field contributes zero points, it is never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadAttributes<'a> {
    /// Industry niche, matched by substring against known domains.
    pub business_niche: Option<&'a str>,
    /// Company size bucket, matched by exact case-insensitive lookup.
    pub company_size: Option<&'a str>,
    /// Task volume bucket, matched by exact case-insensitive lookup.
    pub task_volume: Option<&'a str>,
    /// Submitter's role, matched by substring against known titles.
    pub role: Option<&'a str>,
    /// Deadline text, matched by substring against known urgency phrases.
    pub deadline: Option<&'a str>,
    /// Budget amount, non-negative.
    pub budget: Option<BigDecimal>,
}
