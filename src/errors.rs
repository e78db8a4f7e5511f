use std::fmt;
use uuid::Uuid;

/// Errors surfaced by the lead triage core.
///
/// Scoring itself is total and never fails; these cover the fallible seams
/// around it: materializing stored attributes and talking to a lead
/// repository backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadError {
    /// A stored budget value could not be parsed as a decimal amount.
    MalformedBudget {
        /// The lead whose budget failed to parse.
        lead_id: Uuid,
        /// The raw stored value.
        value: String,
    },
    /// A repository backend failed.
    Storage(String),
}

impl fmt::Display for LeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeadError::MalformedBudget { lead_id, value } => {
                write!(f, "Malformed budget for lead {}: {:?}", lead_id, value)
            }
            LeadError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for LeadError {}
