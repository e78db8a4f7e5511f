//! Temperature tiers and their display metadata.
//!
//! The tier is a pure step function of the total score with fixed
//! thresholds; there is no configuration surface. Each tier carries a
//! static metadata record the consuming UI layer can render directly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Score at or above which a lead is hot.
pub const HOT_THRESHOLD: u8 = 70;
/// Score at or above which a lead is warm.
pub const MEDIUM_THRESHOLD: u8 = 40;

/// Priority tier of a scored lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    /// High priority, immediate attention.
    Hot,
    /// Standard processing.
    Medium,
    /// General queue.
    Cold,
}

impl Temperature {
    /// Classify a total score into a tier.
    ///
    /// Total over every `u8`: `>= 70` is hot, `40..70` is medium, the rest
    /// is cold.
    pub fn from_score(score: u8) -> Self {
        if score >= HOT_THRESHOLD {
            Temperature::Hot
        } else if score >= MEDIUM_THRESHOLD {
            Temperature::Medium
        } else {
            Temperature::Cold
        }
    }

    /// Map a stored tier label back to a tier.
    ///
    /// Unrecognized labels fall back to `Cold`, for callers holding tier
    /// strings that never went through [`Temperature::from_score`].
    pub fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "hot" => Temperature::Hot,
            "medium" => Temperature::Medium,
            _ => Temperature::Cold,
        }
    }

    /// The tier's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Temperature::Hot => "hot",
            Temperature::Medium => "medium",
            Temperature::Cold => "cold",
        }
    }

    /// Display metadata for this tier.
    pub fn info(&self) -> &'static TemperatureInfo {
        match self {
            Temperature::Hot => &HOT_INFO,
            Temperature::Medium => &MEDIUM_INFO,
            Temperature::Cold => &COLD_INFO,
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display metadata attached to a tier. Defined once, read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemperatureInfo {
    /// Short human label.
    pub label: &'static str,
    /// One-line handling guidance.
    pub description: &'static str,
    /// UI accent color.
    pub color: &'static str,
    /// UI icon.
    pub icon: &'static str,
    /// Personal-manager requirement, spelled out for the UI.
    pub needs_manager: &'static str,
}

static HOT_INFO: TemperatureInfo = TemperatureInfo {
    label: "Hot",
    description: "High-priority lead. Requires immediate attention.",
    color: "red",
    icon: "🔥",
    needs_manager: "Yes, a personal manager is required",
};

static MEDIUM_INFO: TemperatureInfo = TemperatureInfo {
    label: "Warm",
    description: "Medium priority. Standard processing.",
    color: "orange",
    icon: "🌡️",
    needs_manager: "Personal manager recommended",
};

static COLD_INFO: TemperatureInfo = TemperatureInfo {
    label: "Cold",
    description: "Low priority. Can be handled in the general queue.",
    color: "blue",
    icon: "❄️",
    needs_manager: "No personal manager needed",
};

/// Look up the display metadata for a tier.
pub fn temperature_metadata(temperature: Temperature) -> &'static TemperatureInfo {
    temperature.info()
}
