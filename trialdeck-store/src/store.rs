//! The session store and its mutation operations.
//!
//! One `SessionStore` per dashboard session, injected into the view layer.
//! All operations are synchronous; `&mut self` is the only concurrency
//! discipline required.

use crate::ids::generate_id;
use crate::requests::{
    NewAgent, NewPatient, NewSite, NewTrial, UpdateAgent, UpdatePatient, UpdateSite, UpdateTrial,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use trialdeck_core::validation::HasUpdates;
use trialdeck_core::{
    fixtures, Agent, AgentId, AgentStatus, EntityType, Patient, PatientId, Site, SiteId,
    StoreError, Trial, TrialDeckResult, TrialId, ValidationError,
};

/// Message on a freshly created agent.
pub const AGENT_READY_MESSAGE: &str = "Agent initialized and ready for deployment";
/// Message after a successful sync-all pass.
pub const SYNC_SUCCESS_MESSAGE: &str = "Sync completed successfully";
/// Message when an offline agent is started.
pub const AGENT_STARTED_MESSAGE: &str = "Agent started and is now online";
/// Message when a running agent is paused.
pub const AGENT_PAUSED_MESSAGE: &str = "Agent paused and is now offline";
/// Message when an errored agent is stopped.
pub const AGENT_ERROR_STOPPED_MESSAGE: &str = "Agent stopped from error state";
/// Message when the user stops an agent outright.
pub const AGENT_USER_STOPPED_MESSAGE: &str = "Agent stopped by user";
/// Sync recency shown on a freshly registered site.
pub const SITE_JUST_SYNCED: &str = "Just now";

/// In-memory store for one dashboard session.
pub struct SessionStore {
    trials: Vec<Trial>,
    sites: Vec<Site>,
    agents: Vec<Agent>,
    patients: Vec<Patient>,
    rng: StdRng,
}

impl SessionStore {
    /// A store seeded from the fixture data.
    pub fn seeded() -> Self {
        Self::seeded_with_rng(StdRng::from_entropy())
    }

    /// A seeded store with a caller-supplied RNG, for deterministic tests.
    pub fn seeded_with_rng(rng: StdRng) -> Self {
        Self {
            trials: fixtures::trials(),
            sites: fixtures::sites(),
            agents: fixtures::agents(),
            patients: fixtures::patients(),
            rng,
        }
    }

    /// A store with no records, for tests that build their own state.
    pub fn empty() -> Self {
        Self {
            trials: Vec::new(),
            sites: Vec::new(),
            agents: Vec::new(),
            patients: Vec::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Drop all session mutations and re-seed from fixtures.
    pub fn reset(&mut self) {
        self.trials = fixtures::trials();
        self.sites = fixtures::sites();
        self.agents = fixtures::agents();
        self.patients = fixtures::patients();
        info!("session store reset to fixtures");
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn trials(&self) -> &[Trial] {
        &self.trials
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn trial(&self, id: &TrialId) -> Option<&Trial> {
        self.trials.iter().find(|t| &t.id == id)
    }

    pub fn site(&self, id: &SiteId) -> Option<&Site> {
        self.sites.iter().find(|s| &s.id == id)
    }

    pub fn agent(&self, id: &AgentId) -> Option<&Agent> {
        self.agents.iter().find(|a| &a.id == id)
    }

    pub fn patient(&self, id: &PatientId) -> Option<&Patient> {
        self.patients.iter().find(|p| &p.id == id)
    }

    // ========================================================================
    // CREATE OPERATIONS
    // ========================================================================

    /// Create a trial and prepend it to the collection.
    pub fn create_trial(&mut self, request: NewTrial) -> TrialDeckResult<TrialId> {
        request.validate()?;
        let id = TrialId::new(generate_id(&mut self.rng, EntityType::Trial));
        let Some(start_date) = request.start_date else {
            return Err(ValidationError::missing_field("start_date").into());
        };
        let trial = Trial {
            id: id.clone(),
            name: request.name,
            phase: request.phase,
            status: request.status,
            progress: 0,
            sites: request.sites,
            enrolled: request.enrolled,
            target: request.target,
            start_date,
            end_date: request.end_date,
            sponsor: request.sponsor,
            indication: request.indication,
            protocol: request.protocol,
        };
        self.trials.insert(0, trial);
        info!(id = %id, "trial created");
        Ok(id)
    }

    /// Register a site and prepend it to the collection.
    pub fn create_site(&mut self, request: NewSite) -> TrialDeckResult<SiteId> {
        request.validate()?;
        let id = SiteId::new(generate_id(&mut self.rng, EntityType::Site));
        let site = Site {
            id: id.clone(),
            name: request.name,
            location: request.location,
            status: request.status,
            last_sync: SITE_JUST_SYNCED.to_string(),
            enrolled: 0,
            capacity: request.capacity,
            principal_investigator: request.principal_investigator,
            trials: request.trials,
        };
        self.sites.insert(0, site);
        info!(id = %id, "site registered");
        Ok(id)
    }

    /// Register an agent and prepend it to the collection.
    pub fn create_agent(&mut self, request: NewAgent) -> TrialDeckResult<AgentId> {
        request.validate()?;
        let id = AgentId::new(generate_id(&mut self.rng, EntityType::Agent));
        let agent = Agent {
            id: id.clone(),
            name: request.name,
            kind: request.kind,
            status: request.status,
            last_message: AGENT_READY_MESSAGE.to_string(),
            messages_processed: 0,
            uptime: "0%".to_string(),
            description: request.description,
            capabilities: request.capabilities,
            configuration: None,
        };
        self.agents.insert(0, agent);
        info!(id = %id, "agent registered");
        Ok(id)
    }

    /// Enroll a patient and prepend the record to the collection.
    pub fn enroll_patient(&mut self, request: NewPatient) -> TrialDeckResult<PatientId> {
        request.validate()?;
        let id = PatientId::new(generate_id(&mut self.rng, EntityType::Patient));
        let completion_rate = request.initial_completion_rate();
        let Some(enrollment_date) = request.enrollment_date else {
            return Err(ValidationError::missing_field("enrollment_date").into());
        };
        let patient = Patient {
            id: id.clone(),
            subject_id: request.subject_id,
            site: request.site,
            trial: TrialId::new(request.trial),
            status: request.status,
            enrollment_date,
            last_visit: request.last_visit.unwrap_or(enrollment_date),
            next_visit: request.next_visit,
            completion_rate,
        };
        self.patients.insert(0, patient);
        info!(id = %id, "patient enrolled");
        Ok(id)
    }

    // ========================================================================
    // UPDATE OPERATIONS
    // ========================================================================

    /// Shallow-merge an update into the trial with the given id.
    pub fn update_trial(&mut self, id: &TrialId, update: UpdateTrial) -> TrialDeckResult<()> {
        update.validate_has_updates()?;
        let trial = self
            .trials
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: EntityType::Trial,
                id: id.to_string(),
            })?;
        if let Some(name) = update.name {
            trial.name = name;
        }
        if let Some(status) = update.status {
            trial.status = status;
        }
        if let Some(progress) = update.progress {
            trial.progress = progress;
        }
        if let Some(enrolled) = update.enrolled {
            trial.enrolled = enrolled;
        }
        if let Some(target) = update.target {
            trial.target = target;
        }
        if let Some(end_date) = update.end_date {
            trial.end_date = Some(end_date);
        }
        info!(id = %id, "trial updated");
        Ok(())
    }

    /// Shallow-merge an update into the site with the given id.
    pub fn update_site(&mut self, id: &SiteId, update: UpdateSite) -> TrialDeckResult<()> {
        update.validate_has_updates()?;
        let site = self
            .sites
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: EntityType::Site,
                id: id.to_string(),
            })?;
        if let Some(name) = update.name {
            site.name = name;
        }
        if let Some(status) = update.status {
            site.status = status;
        }
        if let Some(last_sync) = update.last_sync {
            site.last_sync = last_sync;
        }
        if let Some(enrolled) = update.enrolled {
            site.enrolled = enrolled;
        }
        if let Some(capacity) = update.capacity {
            site.capacity = capacity;
        }
        if let Some(pi) = update.principal_investigator {
            site.principal_investigator = pi;
        }
        if let Some(trials) = update.trials {
            site.trials = trials;
        }
        info!(id = %id, "site updated");
        Ok(())
    }

    /// Shallow-merge an update into the agent with the given id.
    pub fn update_agent(&mut self, id: &AgentId, update: UpdateAgent) -> TrialDeckResult<()> {
        update.validate_has_updates()?;
        let agent = self.agent_mut(id)?;
        if let Some(name) = update.name {
            agent.name = name;
        }
        if let Some(status) = update.status {
            agent.status = status;
        }
        if let Some(description) = update.description {
            agent.description = description;
        }
        if let Some(capabilities) = update.capabilities {
            agent.capabilities = capabilities;
        }
        if let Some(configuration) = update.configuration {
            agent.configuration = Some(configuration);
        }
        info!(id = %id, "agent updated");
        Ok(())
    }

    /// Shallow-merge an update into the patient with the given id.
    pub fn update_patient(&mut self, id: &PatientId, update: UpdatePatient) -> TrialDeckResult<()> {
        update.validate_has_updates()?;
        let patient = self
            .patients
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: EntityType::Patient,
                id: id.to_string(),
            })?;
        if let Some(status) = update.status {
            patient.status = status;
        }
        if let Some(last_visit) = update.last_visit {
            patient.last_visit = last_visit;
        }
        if let Some(next_visit) = update.next_visit {
            patient.next_visit = Some(next_visit);
        }
        if let Some(completion_rate) = update.completion_rate {
            patient.completion_rate = completion_rate;
        }
        info!(id = %id, "patient updated");
        Ok(())
    }

    // ========================================================================
    // AGENT OPERATIONS
    // ========================================================================

    /// Start or pause an agent.
    ///
    /// Offline agents come online; online and processing agents pause to
    /// offline; errored agents are stopped to offline. Sets `last_message`
    /// alongside the status and returns the new status.
    pub fn toggle_agent_status(&mut self, id: &AgentId) -> TrialDeckResult<AgentStatus> {
        let agent = self.agent_mut(id)?;
        let (status, message) = match agent.status {
            AgentStatus::Offline => (AgentStatus::Online, AGENT_STARTED_MESSAGE),
            AgentStatus::Online | AgentStatus::Processing => {
                (AgentStatus::Offline, AGENT_PAUSED_MESSAGE)
            }
            AgentStatus::Error => (AgentStatus::Offline, AGENT_ERROR_STOPPED_MESSAGE),
        };
        agent.status = status;
        agent.last_message = message.to_string();
        info!(id = %id, status = %status, "agent toggled");
        Ok(status)
    }

    /// Stop an agent unconditionally.
    pub fn stop_agent(&mut self, id: &AgentId) -> TrialDeckResult<()> {
        let agent = self.agent_mut(id)?;
        agent.status = AgentStatus::Offline;
        agent.last_message = AGENT_USER_STOPPED_MESSAGE.to_string();
        info!(id = %id, "agent stopped");
        Ok(())
    }

    /// Sync every agent: canned success message plus a random increment of
    /// 1..=10 to the processed counter. Returns the number of agents synced.
    pub fn sync_all_agents(&mut self) -> usize {
        for agent in &mut self.agents {
            agent.last_message = SYNC_SUCCESS_MESSAGE.to_string();
            agent.messages_processed += self.rng.gen_range(1..=10);
        }
        info!(count = self.agents.len(), "all agents synced");
        self.agents.len()
    }

    fn agent_mut(&mut self, id: &AgentId) -> Result<&mut Agent, StoreError> {
        self.agents
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| StoreError::NotFound {
                entity_type: EntityType::Agent,
                id: id.to_string(),
            })
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::seeded()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use trialdeck_core::{
        filter_by_query, AgentConfig, AgentKind, PatientStatus, SiteStatus, TrialDeckError,
        TrialStatus, ValidationError,
    };

    fn deterministic_store() -> SessionStore {
        SessionStore::seeded_with_rng(StdRng::seed_from_u64(42))
    }

    fn valid_new_trial() -> NewTrial {
        NewTrial {
            name: "Hematology Phase II - Anemia".to_string(),
            phase: "Phase II".to_string(),
            status: TrialStatus::Enrolling,
            sites: 0,
            enrolled: 0,
            target: 150,
            start_date: NaiveDate::from_ymd_opt(2025, 2, 1),
            end_date: None,
            sponsor: "Amgen".to_string(),
            indication: "Chronic Anemia".to_string(),
            protocol: "PROTO-081-ANE".to_string(),
        }
    }

    #[test]
    fn test_seeded_store_matches_fixture_sizes() {
        let store = deterministic_store();
        assert_eq!(store.trials().len(), 6);
        assert_eq!(store.sites().len(), 8);
        assert_eq!(store.agents().len(), 6);
        assert_eq!(store.patients().len(), 5);
    }

    #[test]
    fn test_create_trial_prepends() {
        let mut store = deterministic_store();
        let id = store.create_trial(valid_new_trial()).unwrap();
        assert_eq!(store.trials().len(), 7);
        assert_eq!(store.trials()[0].id, id);
        assert_eq!(store.trials()[0].progress, 0);
        assert!(id.as_str().starts_with("TRIAL-"));
    }

    #[test]
    fn test_create_trial_missing_name_is_noop() {
        let mut store = deterministic_store();
        let mut request = valid_new_trial();
        request.name.clear();
        let err = store.create_trial(request).unwrap_err();
        assert!(matches!(
            err,
            TrialDeckError::Validation(ValidationError::RequiredFieldMissing { ref field })
                if field == "name"
        ));
        assert_eq!(store.trials().len(), 6);
    }

    #[test]
    fn test_created_trial_is_found_by_exact_name_search() {
        let mut store = deterministic_store();
        store.create_trial(valid_new_trial()).unwrap();
        let found = filter_by_query(store.trials(), "Hematology Phase II - Anemia");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Hematology Phase II - Anemia");
    }

    #[test]
    fn test_create_site_defaults() {
        let mut store = deterministic_store();
        let id = store
            .create_site(NewSite {
                name: "Cedars-Sinai".to_string(),
                location: "Los Angeles, CA".to_string(),
                status: SiteStatus::Pending,
                capacity: 40,
                principal_investigator: "Dr. Priya Nair".to_string(),
                trials: vec![TrialId::new("TRIAL-042")],
            })
            .unwrap();
        let site = store.site(&id).unwrap();
        assert_eq!(site.last_sync, SITE_JUST_SYNCED);
        assert_eq!(site.enrolled, 0);
        assert_eq!(store.sites()[0].id, id);
    }

    #[test]
    fn test_create_agent_defaults() {
        let mut store = deterministic_store();
        let id = store
            .create_agent(NewAgent {
                name: "Query Agent".to_string(),
                kind: AgentKind::Mcp,
                status: AgentStatus::Offline,
                description: "Answers protocol questions".to_string(),
                capabilities: vec!["Protocol Context".to_string()],
            })
            .unwrap();
        let agent = store.agent(&id).unwrap();
        assert_eq!(agent.messages_processed, 0);
        assert_eq!(agent.uptime, "0%");
        assert_eq!(agent.last_message, AGENT_READY_MESSAGE);
        assert!(agent.configuration.is_none());
    }

    #[test]
    fn test_enroll_patient_completion_rates() {
        let mut store = deterministic_store();
        let id = store
            .enroll_patient(NewPatient {
                subject_id: "062-005-0009".to_string(),
                site: "Stanford Health".to_string(),
                trial: "TRIAL-062".to_string(),
                status: PatientStatus::Enrolled,
                enrollment_date: NaiveDate::from_ymd_opt(2024, 12, 20),
                last_visit: None,
                next_visit: None,
            })
            .unwrap();
        let patient = store.patient(&id).unwrap();
        assert_eq!(patient.completion_rate, 15);
        // last_visit falls back to the enrollment date.
        assert_eq!(patient.last_visit, patient.enrollment_date);
    }

    #[test]
    fn test_update_agent_status_only_touches_status() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-003");
        let before = store.agent(&id).unwrap().clone();
        store
            .update_agent(
                &id,
                UpdateAgent {
                    status: Some(AgentStatus::Error),
                    ..Default::default()
                },
            )
            .unwrap();
        let after = store.agent(&id).unwrap();
        assert_eq!(after.status, AgentStatus::Error);
        assert_eq!(after.name, before.name);
        assert_eq!(after.last_message, before.last_message);
        assert_eq!(after.messages_processed, before.messages_processed);
        assert_eq!(after.capabilities, before.capabilities);
        // Every other record is untouched.
        for other in store.agents().iter().filter(|a| a.id != id) {
            assert_ne!(other.status, AgentStatus::Error);
        }
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = deterministic_store();
        let err = store
            .update_agent(
                &AgentId::new("agent-999"),
                UpdateAgent {
                    status: Some(AgentStatus::Online),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(matches!(
            err,
            TrialDeckError::Store(StoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_update_with_no_fields_is_rejected() {
        let mut store = deterministic_store();
        let err = store
            .update_agent(&AgentId::new("agent-001"), UpdateAgent::default())
            .unwrap_err();
        assert!(matches!(
            err,
            TrialDeckError::Validation(ValidationError::EmptyUpdate)
        ));
    }

    #[test]
    fn test_update_agent_configuration() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-003");
        store
            .update_agent(
                &id,
                UpdateAgent {
                    configuration: Some(AgentConfig::context_provider_template()),
                    ..Default::default()
                },
            )
            .unwrap();
        let agent = store.agent(&id).unwrap();
        assert_eq!(
            agent.configuration.as_ref().map(|c| c.kind()),
            Some(AgentKind::Mcp)
        );
    }

    #[test]
    fn test_toggle_from_offline_starts_agent() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-006");
        let status = store.toggle_agent_status(&id).unwrap();
        assert_eq!(status, AgentStatus::Online);
        assert_eq!(store.agent(&id).unwrap().last_message, AGENT_STARTED_MESSAGE);
    }

    #[test]
    fn test_toggle_round_trip_from_offline() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-006");
        assert_eq!(store.agent(&id).unwrap().status, AgentStatus::Offline);
        store.toggle_agent_status(&id).unwrap();
        store.toggle_agent_status(&id).unwrap();
        assert_eq!(store.agent(&id).unwrap().status, AgentStatus::Offline);
    }

    #[test]
    fn test_toggle_pauses_processing_agent() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-002");
        assert_eq!(store.agent(&id).unwrap().status, AgentStatus::Processing);
        let status = store.toggle_agent_status(&id).unwrap();
        assert_eq!(status, AgentStatus::Offline);
        assert_eq!(store.agent(&id).unwrap().last_message, AGENT_PAUSED_MESSAGE);
    }

    #[test]
    fn test_toggle_stops_errored_agent() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-001");
        store
            .update_agent(
                &id,
                UpdateAgent {
                    status: Some(AgentStatus::Error),
                    ..Default::default()
                },
            )
            .unwrap();
        let status = store.toggle_agent_status(&id).unwrap();
        assert_eq!(status, AgentStatus::Offline);
        assert_eq!(
            store.agent(&id).unwrap().last_message,
            AGENT_ERROR_STOPPED_MESSAGE
        );
    }

    #[test]
    fn test_stop_agent() {
        let mut store = deterministic_store();
        let id = AgentId::new("agent-001");
        store.stop_agent(&id).unwrap();
        let agent = store.agent(&id).unwrap();
        assert_eq!(agent.status, AgentStatus::Offline);
        assert_eq!(agent.last_message, AGENT_USER_STOPPED_MESSAGE);
    }

    #[test]
    fn test_sync_all_agents() {
        let mut store = deterministic_store();
        let before: Vec<u64> = store.agents().iter().map(|a| a.messages_processed).collect();
        let synced = store.sync_all_agents();
        assert_eq!(synced, 6);
        for (agent, previous) in store.agents().iter().zip(before) {
            assert_eq!(agent.last_message, SYNC_SUCCESS_MESSAGE);
            let delta = agent.messages_processed - previous;
            assert!((1..=10).contains(&delta), "delta {} out of range", delta);
        }
    }

    #[test]
    fn test_reset_discards_session_mutations() {
        let mut store = deterministic_store();
        store.create_trial(valid_new_trial()).unwrap();
        store.sync_all_agents();
        store.reset();
        assert_eq!(store.trials().len(), 6);
        assert_eq!(
            store.agent(&AgentId::new("agent-001")).unwrap().last_message,
            "All CRF data validated for TRIAL-042"
        );
    }
}
