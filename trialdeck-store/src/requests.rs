//! Create and update request types.
//!
//! Create requests carry the fields a form collects; `validate()` reports
//! the first missing required field so the UI can keep the form open and
//! point at it. Update requests are partial: `None` means "leave as is".

use serde::{Deserialize, Serialize};
use trialdeck_core::validation::{HasUpdates, ValidateNonEmpty};
use trialdeck_core::{
    AgentConfig, AgentKind, AgentStatus, PatientStatus, SiteStatus, TrialId, TrialStatus,
    ValidationError,
};
use chrono::NaiveDate;

// ============================================================================
// CREATE REQUESTS
// ============================================================================

/// Request to create a trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrial {
    pub name: String,
    pub phase: String,
    pub status: TrialStatus,
    pub sites: u32,
    pub enrolled: u32,
    pub target: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub sponsor: String,
    pub indication: String,
    pub protocol: String,
}

impl NewTrial {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.name.validate_non_empty("name")?;
        self.phase.validate_non_empty("phase")?;
        self.sponsor.validate_non_empty("sponsor")?;
        self.indication.validate_non_empty("indication")?;
        self.protocol.validate_non_empty("protocol")?;
        if self.start_date.is_none() {
            return Err(ValidationError::missing_field("start_date"));
        }
        Ok(())
    }
}

/// Request to register a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSite {
    pub name: String,
    pub location: String,
    pub status: SiteStatus,
    pub capacity: u32,
    pub principal_investigator: String,
    pub trials: Vec<TrialId>,
}

impl NewSite {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.name.validate_non_empty("name")?;
        self.location.validate_non_empty("location")?;
        self.principal_investigator
            .validate_non_empty("principal_investigator")?;
        Ok(())
    }
}

/// Request to register an agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAgent {
    pub name: String,
    pub kind: AgentKind,
    pub status: AgentStatus,
    pub description: String,
    pub capabilities: Vec<String>,
}

impl NewAgent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.name.validate_non_empty("name")?;
        self.description.validate_non_empty("description")?;
        if self.capabilities.is_empty() {
            return Err(ValidationError::missing_field("capabilities"));
        }
        Ok(())
    }
}

/// Request to enroll a patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub subject_id: String,
    pub site: String,
    pub trial: String,
    pub status: PatientStatus,
    pub enrollment_date: Option<NaiveDate>,
    pub last_visit: Option<NaiveDate>,
    pub next_visit: Option<NaiveDate>,
}

impl NewPatient {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.subject_id.validate_non_empty("subject_id")?;
        self.site.validate_non_empty("site")?;
        self.trial.validate_non_empty("trial")?;
        if self.enrollment_date.is_none() {
            return Err(ValidationError::missing_field("enrollment_date"));
        }
        Ok(())
    }

    /// Completion rate assigned at enrollment time, by initial status.
    pub fn initial_completion_rate(&self) -> u8 {
        match self.status {
            PatientStatus::Screening => 5,
            PatientStatus::Enrolled => 15,
            _ => 25,
        }
    }
}

// ============================================================================
// UPDATE REQUESTS
// ============================================================================

/// Partial update for a trial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateTrial {
    pub name: Option<String>,
    pub status: Option<TrialStatus>,
    pub progress: Option<u8>,
    pub enrolled: Option<u32>,
    pub target: Option<u32>,
    pub end_date: Option<NaiveDate>,
}

impl HasUpdates for UpdateTrial {
    fn has_any_updates(&self) -> bool {
        self.name.is_some()
            || self.status.is_some()
            || self.progress.is_some()
            || self.enrolled.is_some()
            || self.target.is_some()
            || self.end_date.is_some()
    }
}

/// Partial update for a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateSite {
    pub name: Option<String>,
    pub status: Option<SiteStatus>,
    pub last_sync: Option<String>,
    pub enrolled: Option<u32>,
    pub capacity: Option<u32>,
    pub principal_investigator: Option<String>,
    pub trials: Option<Vec<TrialId>>,
}

impl HasUpdates for UpdateSite {
    fn has_any_updates(&self) -> bool {
        self.name.is_some()
            || self.status.is_some()
            || self.last_sync.is_some()
            || self.enrolled.is_some()
            || self.capacity.is_some()
            || self.principal_investigator.is_some()
            || self.trials.is_some()
    }
}

/// Partial update for an agent. The kind is fixed at creation; the
/// configuration shape must match it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAgent {
    pub name: Option<String>,
    pub status: Option<AgentStatus>,
    pub description: Option<String>,
    pub capabilities: Option<Vec<String>>,
    pub configuration: Option<AgentConfig>,
}

impl HasUpdates for UpdateAgent {
    fn has_any_updates(&self) -> bool {
        self.name.is_some()
            || self.status.is_some()
            || self.description.is_some()
            || self.capabilities.is_some()
            || self.configuration.is_some()
    }
}

/// Partial update for a patient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePatient {
    pub status: Option<PatientStatus>,
    pub last_visit: Option<NaiveDate>,
    pub next_visit: Option<NaiveDate>,
    pub completion_rate: Option<u8>,
}

impl HasUpdates for UpdatePatient {
    fn has_any_updates(&self) -> bool {
        self.status.is_some()
            || self.last_visit.is_some()
            || self.next_visit.is_some()
            || self.completion_rate.is_some()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn valid_trial() -> NewTrial {
        NewTrial {
            name: "Pulmonology Phase I - Asthma".to_string(),
            phase: "Phase I".to_string(),
            status: TrialStatus::Enrolling,
            sites: 0,
            enrolled: 0,
            target: 120,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
            sponsor: "GSK".to_string(),
            indication: "Severe Asthma".to_string(),
            protocol: "PROTO-077-AST".to_string(),
        }
    }

    #[test]
    fn test_new_trial_valid() {
        assert!(valid_trial().validate().is_ok());
    }

    #[test]
    fn test_new_trial_requires_each_field() {
        let mut missing_name = valid_trial();
        missing_name.name.clear();
        assert_eq!(
            missing_name.validate(),
            Err(ValidationError::missing_field("name"))
        );

        let mut missing_sponsor = valid_trial();
        missing_sponsor.sponsor.clear();
        assert_eq!(
            missing_sponsor.validate(),
            Err(ValidationError::missing_field("sponsor"))
        );

        let mut missing_start = valid_trial();
        missing_start.start_date = None;
        assert_eq!(
            missing_start.validate(),
            Err(ValidationError::missing_field("start_date"))
        );
    }

    #[test]
    fn test_new_site_requires_investigator() {
        let site = NewSite {
            name: "Cedars-Sinai".to_string(),
            location: "Los Angeles, CA".to_string(),
            status: SiteStatus::Pending,
            capacity: 40,
            principal_investigator: String::new(),
            trials: vec![],
        };
        assert_eq!(
            site.validate(),
            Err(ValidationError::missing_field("principal_investigator"))
        );
    }

    #[test]
    fn test_new_agent_requires_a_capability() {
        let agent = NewAgent {
            name: "Query Agent".to_string(),
            kind: AgentKind::Mcp,
            status: AgentStatus::Offline,
            description: "Answers protocol questions".to_string(),
            capabilities: vec![],
        };
        assert_eq!(
            agent.validate(),
            Err(ValidationError::missing_field("capabilities"))
        );
    }

    #[test]
    fn test_new_patient_completion_rate_by_status() {
        let mut patient = NewPatient {
            subject_id: "062-005-0001".to_string(),
            site: "Stanford Health".to_string(),
            trial: "TRIAL-062".to_string(),
            status: PatientStatus::Screening,
            enrollment_date: NaiveDate::from_ymd_opt(2024, 12, 20),
            last_visit: None,
            next_visit: None,
        };
        assert_eq!(patient.initial_completion_rate(), 5);
        patient.status = PatientStatus::Enrolled;
        assert_eq!(patient.initial_completion_rate(), 15);
        patient.status = PatientStatus::Active;
        assert_eq!(patient.initial_completion_rate(), 25);
    }

    #[test]
    fn test_update_requests_report_emptiness() {
        assert!(!UpdateAgent::default().has_any_updates());
        assert!(UpdateAgent {
            status: Some(AgentStatus::Online),
            ..Default::default()
        }
        .has_any_updates());
        assert!(!UpdateTrial::default().has_any_updates());
        assert!(!UpdateSite::default().has_any_updates());
        assert!(!UpdatePatient::default().has_any_updates());
    }
}
