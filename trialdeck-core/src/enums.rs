//! Status enums for TrialDeck entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// ENTITY TYPE
// ============================================================================

/// Entity type discriminator, used in error messages and id synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Trial,
    Site,
    Agent,
    Patient,
}

impl EntityType {
    /// Prefix used when synthesizing display ids for this entity type.
    pub fn id_prefix(&self) -> &'static str {
        match self {
            EntityType::Trial => "TRIAL",
            EntityType::Site => "SITE",
            EntityType::Agent => "agent",
            EntityType::Patient => "PAT",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityType::Trial => "Trial",
            EntityType::Site => "Site",
            EntityType::Agent => "Agent",
            EntityType::Patient => "Patient",
        };
        write!(f, "{}", name)
    }
}

// ============================================================================
// TRIAL STATUS
// ============================================================================

/// Status of a clinical trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrialStatus {
    Active,
    Enrolling,
    Completed,
    Paused,
}

impl TrialStatus {
    /// Convert to the canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrialStatus::Active => "active",
            TrialStatus::Enrolling => "enrolling",
            TrialStatus::Completed => "completed",
            TrialStatus::Paused => "paused",
        }
    }

    pub fn all() -> &'static [TrialStatus] {
        &[
            TrialStatus::Active,
            TrialStatus::Enrolling,
            TrialStatus::Completed,
            TrialStatus::Paused,
        ]
    }
}

impl fmt::Display for TrialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TrialStatus {
    type Err = TrialStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(TrialStatus::Active),
            "enrolling" => Ok(TrialStatus::Enrolling),
            "completed" => Ok(TrialStatus::Completed),
            "paused" => Ok(TrialStatus::Paused),
            _ => Err(TrialStatusParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid trial status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialStatusParseError(pub String);

impl fmt::Display for TrialStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid trial status: {}", self.0)
    }
}

impl std::error::Error for TrialStatusParseError {}

// ============================================================================
// SITE STATUS
// ============================================================================

/// Coordination status of a trial site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Active,
    Pending,
    Issue,
    Inactive,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Active => "active",
            SiteStatus::Pending => "pending",
            SiteStatus::Issue => "issue",
            SiteStatus::Inactive => "inactive",
        }
    }

    /// Label shown in the UI (sites report their sync state, not the raw
    /// status name).
    pub fn label(&self) -> &'static str {
        match self {
            SiteStatus::Active => "Connected",
            SiteStatus::Pending => "Syncing",
            SiteStatus::Issue => "Issue",
            SiteStatus::Inactive => "Offline",
        }
    }

    pub fn all() -> &'static [SiteStatus] {
        &[
            SiteStatus::Active,
            SiteStatus::Pending,
            SiteStatus::Issue,
            SiteStatus::Inactive,
        ]
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SiteStatus {
    type Err = SiteStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(SiteStatus::Active),
            "pending" => Ok(SiteStatus::Pending),
            "issue" => Ok(SiteStatus::Issue),
            "inactive" => Ok(SiteStatus::Inactive),
            _ => Err(SiteStatusParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid site status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteStatusParseError(pub String);

impl fmt::Display for SiteStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid site status: {}", self.0)
    }
}

impl std::error::Error for SiteStatusParseError {}

// ============================================================================
// PATIENT STATUS
// ============================================================================

/// Enrollment status of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    Screening,
    Enrolled,
    Active,
    Completed,
    Withdrawn,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Screening => "screening",
            PatientStatus::Enrolled => "enrolled",
            PatientStatus::Active => "active",
            PatientStatus::Completed => "completed",
            PatientStatus::Withdrawn => "withdrawn",
        }
    }

    pub fn all() -> &'static [PatientStatus] {
        &[
            PatientStatus::Screening,
            PatientStatus::Enrolled,
            PatientStatus::Active,
            PatientStatus::Completed,
            PatientStatus::Withdrawn,
        ]
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = PatientStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "screening" => Ok(PatientStatus::Screening),
            "enrolled" => Ok(PatientStatus::Enrolled),
            "active" => Ok(PatientStatus::Active),
            "completed" => Ok(PatientStatus::Completed),
            "withdrawn" => Ok(PatientStatus::Withdrawn),
            _ => Err(PatientStatusParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid patient status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientStatusParseError(pub String);

impl fmt::Display for PatientStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid patient status: {}", self.0)
    }
}

impl std::error::Error for PatientStatusParseError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_status_round_trip() {
        for status in TrialStatus::all() {
            let parsed: TrialStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn test_trial_status_parse_is_case_insensitive() {
        assert_eq!("Active".parse::<TrialStatus>().unwrap(), TrialStatus::Active);
        assert_eq!(
            "ENROLLING".parse::<TrialStatus>().unwrap(),
            TrialStatus::Enrolling
        );
    }

    #[test]
    fn test_trial_status_parse_rejects_unknown() {
        let err = "archived".parse::<TrialStatus>().unwrap_err();
        assert_eq!(err, TrialStatusParseError("archived".to_string()));
    }

    #[test]
    fn test_site_status_round_trip() {
        for status in SiteStatus::all() {
            let parsed: SiteStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn test_site_status_labels() {
        assert_eq!(SiteStatus::Active.label(), "Connected");
        assert_eq!(SiteStatus::Pending.label(), "Syncing");
        assert_eq!(SiteStatus::Inactive.label(), "Offline");
    }

    #[test]
    fn test_patient_status_round_trip() {
        for status in PatientStatus::all() {
            let parsed: PatientStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn test_entity_type_id_prefixes() {
        assert_eq!(EntityType::Trial.id_prefix(), "TRIAL");
        assert_eq!(EntityType::Site.id_prefix(), "SITE");
        assert_eq!(EntityType::Agent.id_prefix(), "agent");
        assert_eq!(EntityType::Patient.id_prefix(), "PAT");
    }
}
