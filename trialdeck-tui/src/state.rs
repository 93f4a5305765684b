//! Application state and view state definitions.

use crate::config::TuiConfig;
use crate::forms::{FormKind, FormState};
use crate::nav::Page;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::Theme;
use trialdeck_core::{filter_by_query, Agent, AgentId, Patient, Site, Trial};
use trialdeck_store::SessionStore;

/// Whether plain keystrokes navigate or feed the active search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
}

/// Selection and search state for one list page.
#[derive(Debug, Clone)]
pub struct ListViewState {
    pub selected: Option<String>,
    pub search_query: String,
}

impl ListViewState {
    pub fn new() -> Self {
        Self {
            selected: None,
            search_query: String::new(),
        }
    }
}

impl Default for ListViewState {
    fn default() -> Self {
        Self::new()
    }
}

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub store: SessionStore,
    pub active_page: Page,
    pub mode: InputMode,

    pub trial_view: ListViewState,
    pub site_view: ListViewState,
    pub agent_view: ListViewState,
    pub patient_view: ListViewState,

    pub notifications: Vec<Notification>,
    pub form: Option<FormState>,
}

impl App {
    pub fn new(config: TuiConfig, store: SessionStore) -> Self {
        Self {
            config,
            theme: Theme::clinical(),
            store,
            active_page: Page::Dashboard,
            mode: InputMode::Normal,
            trial_view: ListViewState::new(),
            site_view: ListViewState::new(),
            agent_view: ListViewState::new(),
            patient_view: ListViewState::new(),
            notifications: Vec::new(),
            form: None,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    // ========================================================================
    // DERIVED VIEWS
    // ========================================================================

    pub fn visible_trials(&self) -> Vec<&Trial> {
        filter_by_query(self.store.trials(), &self.trial_view.search_query)
    }

    pub fn visible_sites(&self) -> Vec<&Site> {
        filter_by_query(self.store.sites(), &self.site_view.search_query)
    }

    pub fn visible_agents(&self) -> Vec<&Agent> {
        filter_by_query(self.store.agents(), &self.agent_view.search_query)
    }

    pub fn visible_patients(&self) -> Vec<&Patient> {
        filter_by_query(self.store.patients(), &self.patient_view.search_query)
    }

    /// View state for the active page, if it has a list.
    pub fn active_view_mut(&mut self) -> Option<&mut ListViewState> {
        match self.active_page {
            Page::Trials => Some(&mut self.trial_view),
            Page::Sites => Some(&mut self.site_view),
            Page::Agents => Some(&mut self.agent_view),
            Page::Patients => Some(&mut self.patient_view),
            _ => None,
        }
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    pub fn select_next(&mut self) {
        let ids = self.visible_ids();
        if let Some(view) = self.active_view_mut() {
            select_next_id(&ids, &mut view.selected);
        }
    }

    pub fn select_previous(&mut self) {
        let ids = self.visible_ids();
        if let Some(view) = self.active_view_mut() {
            select_prev_id(&ids, &mut view.selected);
        }
    }

    fn visible_ids(&self) -> Vec<String> {
        match self.active_page {
            Page::Trials => collect_ids(&self.visible_trials()),
            Page::Sites => collect_ids(&self.visible_sites()),
            Page::Agents => collect_ids(&self.visible_agents()),
            Page::Patients => collect_ids(&self.visible_patients()),
            _ => Vec::new(),
        }
    }

    /// The agent the cursor is on, if the Agents page has a selection.
    pub fn selected_agent_id(&self) -> Option<AgentId> {
        self.agent_view
            .selected
            .as_ref()
            .map(|id| AgentId::new(id.clone()))
    }

    // ========================================================================
    // SEARCH
    // ========================================================================

    pub fn start_search(&mut self) {
        if self.active_page.is_searchable() {
            self.mode = InputMode::Search;
        }
    }

    pub fn push_search_char(&mut self, c: char) {
        if let Some(view) = self.active_view_mut() {
            view.search_query.push(c);
        }
    }

    pub fn pop_search_char(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.search_query.pop();
        }
    }

    pub fn clear_search(&mut self) {
        if let Some(view) = self.active_view_mut() {
            view.search_query.clear();
        }
    }

    // ========================================================================
    // FORMS
    // ========================================================================

    /// Open the create form matching the active page, if any.
    pub fn open_form(&mut self) {
        let form = match self.active_page {
            Page::Trials => Some(FormState::new_trial()),
            Page::Sites => Some(FormState::new_site(
                self.store
                    .trials()
                    .iter()
                    .map(|t| t.id.as_str().to_string())
                    .collect(),
            )),
            Page::Agents => Some(FormState::new_agent()),
            Page::Patients => Some(FormState::enroll_patient(
                self.store.sites().iter().map(|s| s.name.clone()).collect(),
                self.store
                    .trials()
                    .iter()
                    .map(|t| t.id.as_str().to_string())
                    .collect(),
            )),
            _ => None,
        };
        self.form = form;
    }

    /// Open the configure form for the selected agent.
    pub fn open_configure_form(&mut self) {
        if self.active_page != Page::Agents {
            return;
        }
        let Some(id) = self.selected_agent_id() else {
            self.notify(NotificationLevel::Info, "Select an agent to configure");
            return;
        };
        match self.store.agent(&id) {
            Some(agent) => self.form = Some(FormState::configure_agent(agent)),
            None => self.notify(NotificationLevel::Error, format!("Agent not found: {}", id)),
        }
    }

    /// Submit the open form against the store. Validation failures keep the
    /// form open and surface the error.
    pub fn submit_form(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        let result = match &form.kind {
            FormKind::NewTrial => self
                .store
                .create_trial(form.to_new_trial())
                .map(|id| format!("Trial {} created", id)),
            FormKind::NewSite => self
                .store
                .create_site(form.to_new_site())
                .map(|id| format!("Site {} registered", id)),
            FormKind::NewAgent => self
                .store
                .create_agent(form.to_new_agent())
                .map(|id| format!("Agent {} registered", id)),
            FormKind::EnrollPatient => self
                .store
                .enroll_patient(form.to_new_patient())
                .map(|id| format!("Patient {} enrolled", id)),
            FormKind::ConfigureAgent { id, .. } => self
                .store
                .update_agent(id, form.to_update_agent())
                .map(|_| format!("Agent {} updated", id)),
        };
        match result {
            Ok(message) => self.notify(NotificationLevel::Success, message),
            Err(err) => {
                self.notify(NotificationLevel::Error, err.to_string());
                self.form = Some(form);
            }
        }
    }

    // ========================================================================
    // AGENT ACTIONS
    // ========================================================================

    pub fn toggle_selected_agent(&mut self) {
        let Some(id) = self.selected_agent_id() else {
            self.notify(NotificationLevel::Info, "Select an agent to start or pause");
            return;
        };
        match self.store.toggle_agent_status(&id) {
            Ok(_) => {
                let message = self
                    .store
                    .agent(&id)
                    .map(|a| a.last_message.clone())
                    .unwrap_or_default();
                self.notify(NotificationLevel::Success, message);
            }
            Err(err) => self.notify(NotificationLevel::Error, err.to_string()),
        }
    }

    pub fn stop_selected_agent(&mut self) {
        let Some(id) = self.selected_agent_id() else {
            self.notify(NotificationLevel::Info, "Select an agent to stop");
            return;
        };
        match self.store.stop_agent(&id) {
            Ok(()) => self.notify(
                NotificationLevel::Success,
                format!("Agent {} stopped", id),
            ),
            Err(err) => self.notify(NotificationLevel::Error, err.to_string()),
        }
    }

    pub fn sync_all_agents(&mut self) {
        let count = self.store.sync_all_agents();
        self.notify(
            NotificationLevel::Success,
            format!("Synced {} agents", count),
        );
    }

    pub fn reset_session(&mut self) {
        self.store.reset();
        self.trial_view = ListViewState::new();
        self.site_view = ListViewState::new();
        self.agent_view = ListViewState::new();
        self.patient_view = ListViewState::new();
        self.notify(NotificationLevel::Info, "Session reset to seed data");
    }
}

// ============================================================================
// SELECTION HELPERS
// ============================================================================

fn collect_ids<T: HasEntityId>(items: &[&T]) -> Vec<String> {
    items.iter().map(|item| item.entity_id().to_string()).collect()
}

fn select_next_id(ids: &[String], selected: &mut Option<String>) {
    if ids.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .as_ref()
        .and_then(|id| ids.iter().position(|candidate| candidate == id));
    let next = match index {
        None => 0,
        Some(i) => (i + 1) % ids.len(),
    };
    *selected = Some(ids[next].clone());
}

fn select_prev_id(ids: &[String], selected: &mut Option<String>) {
    if ids.is_empty() {
        *selected = None;
        return;
    }
    let index = selected
        .as_ref()
        .and_then(|id| ids.iter().position(|candidate| candidate == id))
        .unwrap_or(0);
    let prev = if index == 0 { ids.len() - 1 } else { index - 1 };
    *selected = Some(ids[prev].clone());
}

/// Anything with a display id, for generic selection handling.
trait HasEntityId {
    fn entity_id(&self) -> &str;
}

impl HasEntityId for Trial {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasEntityId for Site {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasEntityId for Agent {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

impl HasEntityId for Patient {
    fn entity_id(&self) -> &str {
        self.id.as_str()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{NotificationPrefs, ProfileConfig, ThemeConfig};

    fn test_config() -> TuiConfig {
        TuiConfig {
            refresh_interval_ms: 250,
            persistence_path: "tmp/trialdeck-ui.json".into(),
            log_path: "tmp/trialdeck.log".into(),
            theme: ThemeConfig {
                name: "clinical".to_string(),
            },
            profile: ProfileConfig {
                full_name: "Dr. Jane Smith".to_string(),
                email: "jane@clinicalcoord.example".to_string(),
                role: "Clinical Trial Manager".to_string(),
            },
            notifications: NotificationPrefs {
                enrollment_alerts: true,
                site_issues: true,
                agent_status_changes: false,
                weekly_digest: true,
            },
        }
    }

    fn test_app() -> App {
        App::new(test_config(), SessionStore::seeded())
    }

    #[test]
    fn test_new_app_starts_on_dashboard() {
        let app = test_app();
        assert_eq!(app.active_page, Page::Dashboard);
        assert_eq!(app.mode, InputMode::Normal);
        assert!(app.form.is_none());
    }

    #[test]
    fn test_search_narrows_visible_trials() {
        let mut app = test_app();
        app.active_page = Page::Trials;
        app.start_search();
        assert_eq!(app.mode, InputMode::Search);
        for c in "oncology".chars() {
            app.push_search_char(c);
        }
        assert_eq!(app.visible_trials().len(), 1);
        app.clear_search();
        assert_eq!(app.visible_trials().len(), 6);
    }

    #[test]
    fn test_search_unavailable_on_dashboard() {
        let mut app = test_app();
        app.start_search();
        assert_eq!(app.mode, InputMode::Normal);
    }

    #[test]
    fn test_selection_wraps_over_visible_items() {
        let mut app = test_app();
        app.active_page = Page::Agents;
        app.select_next();
        assert_eq!(app.agent_view.selected.as_deref(), Some("agent-001"));
        for _ in 0..5 {
            app.select_next();
        }
        assert_eq!(app.agent_view.selected.as_deref(), Some("agent-006"));
        app.select_next();
        assert_eq!(app.agent_view.selected.as_deref(), Some("agent-001"));
        app.select_previous();
        assert_eq!(app.agent_view.selected.as_deref(), Some("agent-006"));
    }

    #[test]
    fn test_selection_empty_when_filter_matches_nothing() {
        let mut app = test_app();
        app.active_page = Page::Trials;
        app.trial_view.search_query = "zzz".to_string();
        app.select_next();
        assert!(app.trial_view.selected.is_none());
    }

    #[test]
    fn test_open_form_matches_page() {
        let mut app = test_app();
        app.active_page = Page::Patients;
        app.open_form();
        assert!(matches!(
            app.form.as_ref().map(|f| &f.kind),
            Some(FormKind::EnrollPatient)
        ));

        app.form = None;
        app.active_page = Page::Dashboard;
        app.open_form();
        assert!(app.form.is_none());
    }

    #[test]
    fn test_submit_invalid_form_keeps_it_open() {
        let mut app = test_app();
        app.active_page = Page::Trials;
        app.open_form();
        let before = app.store.trials().len();
        app.submit_form();
        // Name was empty, so the store is untouched and the form survives.
        assert_eq!(app.store.trials().len(), before);
        assert!(app.form.is_some());
        assert!(matches!(
            app.notifications.last().map(|n| n.level),
            Some(NotificationLevel::Error)
        ));
    }

    #[test]
    fn test_toggle_selected_agent_notifies_with_agent_message() {
        let mut app = test_app();
        app.active_page = Page::Agents;
        app.agent_view.selected = Some("agent-006".to_string());
        app.toggle_selected_agent();
        assert_eq!(
            app.notifications.last().map(|n| n.message.as_str()),
            Some("Agent started and is now online")
        );
    }

    #[test]
    fn test_sync_all_notifies_count() {
        let mut app = test_app();
        app.sync_all_agents();
        assert_eq!(
            app.notifications.last().map(|n| n.message.as_str()),
            Some("Synced 6 agents")
        );
    }

    #[test]
    fn test_reset_clears_views_and_store() {
        let mut app = test_app();
        app.active_page = Page::Trials;
        app.trial_view.search_query = "onco".to_string();
        app.trial_view.selected = Some("TRIAL-042".to_string());
        app.reset_session();
        assert!(app.trial_view.search_query.is_empty());
        assert!(app.trial_view.selected.is_none());
        assert_eq!(app.store.trials().len(), 6);
    }

    #[test]
    fn test_configure_without_selection_notifies() {
        let mut app = test_app();
        app.active_page = Page::Agents;
        app.open_configure_form();
        assert!(app.form.is_none());
        assert!(matches!(
            app.notifications.last().map(|n| n.level),
            Some(NotificationLevel::Info)
        ));
    }
}
