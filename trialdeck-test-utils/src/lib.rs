//! TrialDeck Test Utilities
//!
//! Centralized test infrastructure for the TrialDeck workspace:
//! - Proptest generators for entity types and statuses
//! - Sample fixtures for hand-written test scenarios

pub use trialdeck_core::{
    fixtures, Agent, AgentConfig, AgentId, AgentKind, AgentStatus, Patient, PatientId,
    PatientStatus, Site, SiteId, SiteStatus, Trial, TrialId, TrialStatus,
};

use chrono::NaiveDate;
use proptest::prelude::*;

// ============================================================================
// SAMPLE FIXTURES
// ============================================================================

/// A minimal agent for tests that only care about a few fields.
pub fn sample_agent(id: &str, kind: AgentKind, status: AgentStatus) -> Agent {
    Agent {
        id: AgentId::new(id),
        name: format!("Agent {}", id),
        kind,
        status,
        last_message: "Idle".to_string(),
        messages_processed: 0,
        uptime: "0%".to_string(),
        description: "Test agent".to_string(),
        capabilities: vec!["Status Updates".to_string()],
        configuration: None,
    }
}

/// A minimal trial for tests.
pub fn sample_trial(id: &str, name: &str, status: TrialStatus) -> Trial {
    Trial {
        id: TrialId::new(id),
        name: name.to_string(),
        phase: "Phase I".to_string(),
        status,
        progress: 0,
        sites: 1,
        enrolled: 0,
        target: 100,
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid test date"),
        end_date: None,
        sponsor: "Test Sponsor".to_string(),
        indication: "Test Indication".to_string(),
        protocol: format!("PROTO-{}", id),
    }
}

/// A minimal site for tests.
pub fn sample_site(id: &str, name: &str, status: SiteStatus) -> Site {
    Site {
        id: SiteId::new(id),
        name: name.to_string(),
        location: "Testville, TS".to_string(),
        status,
        last_sync: "1 min ago".to_string(),
        enrolled: 0,
        capacity: 10,
        principal_investigator: "Dr. Test".to_string(),
        trials: vec![],
    }
}

/// A minimal patient for tests.
pub fn sample_patient(id: &str, subject_id: &str, status: PatientStatus) -> Patient {
    Patient {
        id: PatientId::new(id),
        subject_id: subject_id.to_string(),
        site: "Test Site".to_string(),
        trial: TrialId::new("TRIAL-001"),
        status,
        enrollment_date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid test date"),
        last_visit: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid test date"),
        next_visit: None,
        completion_rate: 50,
    }
}

// ============================================================================
// PROPTEST GENERATORS
// ============================================================================

pub fn arb_trial_status() -> impl Strategy<Value = TrialStatus> {
    prop_oneof![
        Just(TrialStatus::Active),
        Just(TrialStatus::Enrolling),
        Just(TrialStatus::Completed),
        Just(TrialStatus::Paused),
    ]
}

pub fn arb_site_status() -> impl Strategy<Value = SiteStatus> {
    prop_oneof![
        Just(SiteStatus::Active),
        Just(SiteStatus::Pending),
        Just(SiteStatus::Issue),
        Just(SiteStatus::Inactive),
    ]
}

pub fn arb_agent_status() -> impl Strategy<Value = AgentStatus> {
    prop_oneof![
        Just(AgentStatus::Online),
        Just(AgentStatus::Processing),
        Just(AgentStatus::Offline),
        Just(AgentStatus::Error),
    ]
}

pub fn arb_patient_status() -> impl Strategy<Value = PatientStatus> {
    prop_oneof![
        Just(PatientStatus::Screening),
        Just(PatientStatus::Enrolled),
        Just(PatientStatus::Active),
        Just(PatientStatus::Completed),
        Just(PatientStatus::Withdrawn),
    ]
}

pub fn arb_agent_kind() -> impl Strategy<Value = AgentKind> {
    prop_oneof![Just(AgentKind::A2a), Just(AgentKind::Mcp)]
}

/// Generate an agent with an arbitrary id, kind, status, and counter.
pub fn arb_agent() -> impl Strategy<Value = Agent> {
    (
        100u32..=999,
        arb_agent_kind(),
        arb_agent_status(),
        0u64..100_000,
    )
        .prop_map(|(suffix, kind, status, messages)| {
            let mut agent = sample_agent(&format!("agent-{:03}", suffix), kind, status);
            agent.messages_processed = messages;
            agent
        })
}

/// Generate a trial with an arbitrary id, name, and status.
pub fn arb_trial() -> impl Strategy<Value = Trial> {
    (100u32..=999, "[a-zA-Z ]{1,24}", arb_trial_status()).prop_map(|(suffix, name, status)| {
        sample_trial(&format!("TRIAL-{:03}", suffix), &name, status)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_fixtures_construct() {
        let agent = sample_agent("agent-001", AgentKind::A2a, AgentStatus::Online);
        assert_eq!(agent.id.as_str(), "agent-001");
        let trial = sample_trial("TRIAL-001", "Test Trial", TrialStatus::Active);
        assert_eq!(trial.protocol, "PROTO-TRIAL-001");
        let site = sample_site("SITE-001", "Test Site", SiteStatus::Active);
        assert_eq!(site.capacity, 10);
        let patient = sample_patient("PAT-001", "001-001-0001", PatientStatus::Active);
        assert_eq!(patient.completion_rate, 50);
    }
}
