//! Lead Scoring & Routing Engine
//!
//! This library classifies sales leads ("applications") by priority using a
//! deterministic scoring function over business attributes, producing a
//! 0-100 score, a hot/medium/cold temperature tier, and a department routing
//! recommendation, plus ranking and aggregate statistics over collections of
//! leads. Persistence, transport, and authentication belong to the consuming
//! service; storage reaches this crate only through the narrow
//! [`repository::LeadRepository`] capability.
//!
//! # Modules
//!
//! - `errors`: Error handling types.
//! - `models`: Lead records and the scoring input view.
//! - `repository`: Injected lead storage capability.
//! - `routing`: Department routing decision tree.
//! - `scoring`: Criterion scorers and the scoring entry point.
//! - `stats`: Ranking and aggregate statistics over lead collections.
//! - `temperature`: Temperature tiers and display metadata.
//!
//! # Example
//!
//! ```
//! use lead_triage::{score_lead, Department, LeadAttributes, Temperature};
//!
//! let attributes = LeadAttributes {
//!     business_niche: Some("fintech"),
//!     role: Some("CEO"),
//!     ..Default::default()
//! };
//!
//! let result = score_lead(&attributes);
//! assert_eq!(result.score, 40);
//! assert_eq!(result.temperature, Temperature::Medium);
//! assert_eq!(result.department, Department::Technical);
//! ```

pub mod errors;
pub mod models;
pub mod repository;
pub mod routing;
pub mod scoring;
pub mod stats;
pub mod temperature;

pub use errors::LeadError;
pub use models::{Lead, LeadAttributes};
pub use repository::{InMemoryLeadRepository, LeadRepository};
pub use routing::{route_department, Department};
pub use scoring::{score_lead, ScoreResult};
pub use stats::{aggregate_statistics, rank_by_temperature, Statistics};
pub use temperature::{temperature_metadata, Temperature, TemperatureInfo};
