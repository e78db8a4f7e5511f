//! Lead storage capability.
//!
//! The scoring core is pure and never touches storage; anything stateful
//! reaches the collection operations through this narrow, injected
//! capability instead of a global table. Real deployments implement it over
//! their own persistence layer; the in-memory implementation below backs
//! tests and embedded use.

use std::sync::RwLock;
use uuid::Uuid;

use crate::errors::LeadError;
use crate::models::Lead;

/// Narrow storage capability for lead records.
pub trait LeadRepository {
    /// Insert a lead, replacing any existing record with the same id.
    fn store(&self, lead: Lead) -> Result<(), LeadError>;

    /// Fetch a single lead by id.
    fn fetch(&self, id: Uuid) -> Result<Option<Lead>, LeadError>;

    /// List every stored lead in insertion order.
    fn list(&self) -> Result<Vec<Lead>, LeadError>;
}

/// In-memory lead repository.
///
/// Insertion-ordered, so ranking ties observed through `list` stay
/// deterministic across calls.
#[derive(Debug, Default)]
pub struct InMemoryLeadRepository {
    leads: RwLock<Vec<Lead>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadRepository for InMemoryLeadRepository {
    fn store(&self, lead: Lead) -> Result<(), LeadError> {
        let mut leads = self
            .leads
            .write()
            .map_err(|_| LeadError::Storage("lead store lock poisoned".to_string()))?;
        if let Some(existing) = leads.iter_mut().find(|l| l.id == lead.id) {
            *existing = lead;
        } else {
            leads.push(lead);
        }
        Ok(())
    }

    fn fetch(&self, id: Uuid) -> Result<Option<Lead>, LeadError> {
        let leads = self
            .leads
            .read()
            .map_err(|_| LeadError::Storage("lead store lock poisoned".to_string()))?;
        Ok(leads.iter().find(|l| l.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<Lead>, LeadError> {
        let leads = self
            .leads
            .read()
            .map_err(|_| LeadError::Storage("lead store lock poisoned".to_string()))?;
        Ok(leads.clone())
    }
}
