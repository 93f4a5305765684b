//! Core entity records.
//!
//! Four independent record types. Relationships are by display id only;
//! nothing enforces referential integrity (a site may list a trial id that
//! no longer exists) and the UI renders whatever is stored.

use crate::agent::{AgentConfig, AgentKind, AgentStatus};
use crate::enums::{PatientStatus, SiteStatus, TrialStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// IDENTITY TYPES
// ============================================================================

macro_rules! display_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

display_id!(
    /// Display id of a trial, e.g. `TRIAL-042`.
    TrialId
);
display_id!(
    /// Display id of a site, e.g. `SITE-001`.
    SiteId
);
display_id!(
    /// Display id of an agent, e.g. `agent-001`.
    AgentId
);
display_id!(
    /// Display id of a patient record, e.g. `PAT-001`.
    PatientId
);

// ============================================================================
// ENTITY RECORDS
// ============================================================================

/// A clinical trial. `progress` is stored as reported, never derived from
/// `enrolled`/`target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trial {
    pub id: TrialId,
    pub name: String,
    pub phase: String,
    pub status: TrialStatus,
    pub progress: u8,
    pub sites: u32,
    pub enrolled: u32,
    pub target: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub sponsor: String,
    pub indication: String,
    pub protocol: String,
}

/// A trial site. `trials` is an unvalidated list of trial ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: SiteId,
    pub name: String,
    pub location: String,
    pub status: SiteStatus,
    /// Human-readable sync recency, e.g. "2 min ago". Display only.
    pub last_sync: String,
    pub enrolled: u32,
    pub capacity: u32,
    pub principal_investigator: String,
    pub trials: Vec<TrialId>,
}

/// An integration agent (A2A or MCP label; no protocol behind it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub kind: AgentKind,
    pub status: AgentStatus,
    pub last_message: String,
    pub messages_processed: u64,
    /// Display string, e.g. "99.9%".
    pub uptime: String,
    pub description: String,
    pub capabilities: Vec<String>,
    pub configuration: Option<AgentConfig>,
}

/// A patient record. `site` and `trial` are denormalized display strings,
/// not validated references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: PatientId,
    pub subject_id: String,
    pub site: String,
    pub trial: TrialId,
    pub status: PatientStatus,
    pub enrollment_date: NaiveDate,
    pub last_visit: NaiveDate,
    pub next_visit: Option<NaiveDate>,
    pub completion_rate: u8,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_ids_render_verbatim() {
        assert_eq!(TrialId::new("TRIAL-042").to_string(), "TRIAL-042");
        assert_eq!(AgentId::from("agent-001").as_str(), "agent-001");
    }

    #[test]
    fn test_display_id_serde_is_transparent() {
        let id = SiteId::new("SITE-003");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"SITE-003\"");
        let back: SiteId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
