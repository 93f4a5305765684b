//! Modal form overlays for the create and configure flows.
//!
//! A form is a flat list of fields; Tab/arrows move focus, Enter submits,
//! Esc cancels. Extraction into a typed request happens on submit; the
//! store's validation decides whether the form may close. Number fields
//! coerce non-numeric input to 0.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use trialdeck_core::{
    fixtures, Agent, AgentConfig, AgentId, AgentKind, AgentStatus, PatientStatus, SiteStatus,
    TrialId, TrialStatus,
};
use trialdeck_store::{NewAgent, NewPatient, NewSite, NewTrial, UpdateAgent};

use crate::theme::Theme;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// What a form submits into.
#[derive(Debug, Clone, PartialEq)]
pub enum FormKind {
    NewTrial,
    NewSite,
    NewAgent,
    EnrollPatient,
    ConfigureAgent { id: AgentId, kind: AgentKind },
}

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Number(String),
    /// Typed as YYYY-MM-DD; unparseable input reads back as no date.
    Date(String),
    Select {
        options: Vec<String>,
        selected: usize,
    },
    MultiSelect {
        options: Vec<String>,
        chosen: Vec<bool>,
        cursor: usize,
    },
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub value: FieldValue,
}

impl FormField {
    fn text(label: &'static str, initial: &str) -> Self {
        Self {
            label,
            value: FieldValue::Text(initial.to_string()),
        }
    }

    fn number(label: &'static str) -> Self {
        Self {
            label,
            value: FieldValue::Number(String::new()),
        }
    }

    fn date(label: &'static str) -> Self {
        Self {
            label,
            value: FieldValue::Date(String::new()),
        }
    }

    fn select(label: &'static str, options: Vec<String>, selected: usize) -> Self {
        let options = if options.is_empty() {
            vec![String::new()]
        } else {
            options
        };
        let selected = selected.min(options.len() - 1);
        Self {
            label,
            value: FieldValue::Select { options, selected },
        }
    }

    fn multi_select(label: &'static str, options: Vec<String>, chosen: Vec<bool>) -> Self {
        let options = if options.is_empty() {
            vec![String::new()]
        } else {
            options
        };
        let mut chosen = chosen;
        chosen.resize(options.len(), false);
        Self {
            label,
            value: FieldValue::MultiSelect {
                options,
                chosen,
                cursor: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Cancelled,
    Submitted,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
}

// ============================================================================
// FIELD INDICES
// ============================================================================

mod trial_fields {
    pub const NAME: usize = 0;
    pub const PHASE: usize = 1;
    pub const STATUS: usize = 2;
    pub const SPONSOR: usize = 3;
    pub const INDICATION: usize = 4;
    pub const PROTOCOL: usize = 5;
    pub const TARGET: usize = 6;
    pub const SITES: usize = 7;
    pub const START_DATE: usize = 8;
    pub const END_DATE: usize = 9;
}

mod site_fields {
    pub const NAME: usize = 0;
    pub const LOCATION: usize = 1;
    pub const STATUS: usize = 2;
    pub const CAPACITY: usize = 3;
    pub const INVESTIGATOR: usize = 4;
    pub const TRIALS: usize = 5;
}

mod agent_fields {
    pub const NAME: usize = 0;
    pub const KIND: usize = 1;
    pub const STATUS: usize = 2;
    pub const DESCRIPTION: usize = 3;
    pub const CAPABILITIES: usize = 4;
}

mod patient_fields {
    pub const SUBJECT_ID: usize = 0;
    pub const SITE: usize = 1;
    pub const TRIAL: usize = 2;
    pub const STATUS: usize = 3;
    pub const ENROLLMENT_DATE: usize = 4;
    pub const LAST_VISIT: usize = 5;
    pub const NEXT_VISIT: usize = 6;
}

mod configure_fields {
    pub const NAME: usize = 0;
    pub const DESCRIPTION: usize = 1;
    pub const STATUS: usize = 2;
    pub const TEMPLATE: usize = 3;
}

/// Placeholder option meaning "leave the configuration untouched".
const KEEP_CURRENT: &str = "(keep current)";

impl FormState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub fn new_trial() -> Self {
        let statuses: Vec<String> = TrialStatus::all().iter().map(|s| s.to_string()).collect();
        let enrolling = position_of(&statuses, TrialStatus::Enrolling.as_str());
        Self {
            title: "New Trial".to_string(),
            kind: FormKind::NewTrial,
            fields: vec![
                FormField::text("Name", ""),
                FormField::select(
                    "Phase",
                    vec![
                        "Phase I".to_string(),
                        "Phase II".to_string(),
                        "Phase III".to_string(),
                        "Phase IV".to_string(),
                    ],
                    0,
                ),
                FormField::select("Status", statuses, enrolling),
                FormField::text("Sponsor", ""),
                FormField::text("Indication", ""),
                FormField::text("Protocol", ""),
                FormField::number("Target enrollment"),
                FormField::number("Sites"),
                FormField::date("Start date (YYYY-MM-DD)"),
                FormField::date("End date (YYYY-MM-DD)"),
            ],
            focused: 0,
        }
    }

    pub fn new_site(trial_ids: Vec<String>) -> Self {
        let statuses: Vec<String> = SiteStatus::all().iter().map(|s| s.to_string()).collect();
        let pending = position_of(&statuses, SiteStatus::Pending.as_str());
        Self {
            title: "Add Site".to_string(),
            kind: FormKind::NewSite,
            fields: vec![
                FormField::text("Name", ""),
                FormField::text("Location", ""),
                FormField::select("Status", statuses, pending),
                FormField::number("Capacity"),
                FormField::text("Principal investigator", ""),
                FormField::multi_select("Trials", trial_ids, vec![]),
            ],
            focused: 0,
        }
    }

    pub fn new_agent() -> Self {
        let statuses: Vec<String> = AgentStatus::all().iter().map(|s| s.to_string()).collect();
        let offline = position_of(&statuses, AgentStatus::Offline.as_str());
        let capabilities: Vec<String> = fixtures::CAPABILITY_VOCABULARY
            .iter()
            .map(|c| c.to_string())
            .collect();
        Self {
            title: "Add New Agent".to_string(),
            kind: FormKind::NewAgent,
            fields: vec![
                FormField::text("Name", ""),
                FormField::select(
                    "Type",
                    vec!["A2A".to_string(), "MCP".to_string()],
                    0,
                ),
                FormField::select("Initial status", statuses, offline),
                FormField::text("Description", ""),
                FormField::multi_select("Capabilities", capabilities, vec![]),
            ],
            focused: 0,
        }
    }

    pub fn enroll_patient(site_names: Vec<String>, trial_ids: Vec<String>) -> Self {
        let statuses: Vec<String> = PatientStatus::all().iter().map(|s| s.to_string()).collect();
        Self {
            title: "Enroll Patient".to_string(),
            kind: FormKind::EnrollPatient,
            fields: vec![
                FormField::text("Subject ID", ""),
                FormField::select("Site", site_names, 0),
                FormField::select("Trial", trial_ids, 0),
                FormField::select("Status", statuses, 0),
                FormField::date("Enrollment date (YYYY-MM-DD)"),
                FormField::date("Last visit (YYYY-MM-DD)"),
                FormField::date("Next visit (YYYY-MM-DD)"),
            ],
            focused: 0,
        }
    }

    pub fn configure_agent(agent: &Agent) -> Self {
        let statuses: Vec<String> = AgentStatus::all().iter().map(|s| s.to_string()).collect();
        let current = position_of(&statuses, agent.status.as_str());
        let mut templates = vec![KEEP_CURRENT.to_string()];
        templates.extend(
            AgentConfig::template_names(agent.kind)
                .iter()
                .map(|n| n.to_string()),
        );
        Self {
            title: format!("Configure Agent: {}", agent.name),
            kind: FormKind::ConfigureAgent {
                id: agent.id.clone(),
                kind: agent.kind,
            },
            fields: vec![
                FormField::text("Name", &agent.name),
                FormField::text("Description", &agent.description),
                FormField::select("Status", statuses, current),
                FormField::select("Configuration template", templates, 0),
            ],
            focused: 0,
        }
    }

    // ========================================================================
    // KEY HANDLING
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancelled,
            KeyCode::Enter => return FormOutcome::Submitted,
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_previous(),
            code => self.edit_focused(code),
        }
        FormOutcome::Continue
    }

    fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    fn focus_previous(&mut self) {
        if !self.fields.is_empty() {
            self.focused = if self.focused == 0 {
                self.fields.len() - 1
            } else {
                self.focused - 1
            };
        }
    }

    fn edit_focused(&mut self, code: KeyCode) {
        let Some(field) = self.fields.get_mut(self.focused) else {
            return;
        };
        match &mut field.value {
            FieldValue::Text(buf) | FieldValue::Number(buf) | FieldValue::Date(buf) => match code
            {
                KeyCode::Char(c) => buf.push(c),
                KeyCode::Backspace => {
                    buf.pop();
                }
                _ => {}
            },
            FieldValue::Select { options, selected } => match code {
                KeyCode::Left => {
                    *selected = if *selected == 0 {
                        options.len() - 1
                    } else {
                        *selected - 1
                    };
                }
                KeyCode::Right | KeyCode::Char(' ') => {
                    *selected = (*selected + 1) % options.len();
                }
                _ => {}
            },
            FieldValue::MultiSelect {
                options,
                chosen,
                cursor,
            } => match code {
                KeyCode::Left => {
                    *cursor = if *cursor == 0 {
                        options.len() - 1
                    } else {
                        *cursor - 1
                    };
                }
                KeyCode::Right => {
                    *cursor = (*cursor + 1) % options.len();
                }
                KeyCode::Char(' ') => {
                    chosen[*cursor] = !chosen[*cursor];
                }
                _ => {}
            },
        }
    }

    // ========================================================================
    // FIELD EXTRACTION
    // ========================================================================

    fn text_at(&self, index: usize) -> String {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Text(buf)) => buf.clone(),
            _ => String::new(),
        }
    }

    /// Non-numeric input silently coerces to 0.
    fn number_at(&self, index: usize) -> u32 {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Number(buf)) => buf.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    fn date_at(&self, index: usize) -> Option<NaiveDate> {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Date(buf)) => {
                NaiveDate::parse_from_str(buf.trim(), DATE_FORMAT).ok()
            }
            _ => None,
        }
    }

    fn selected_at(&self, index: usize) -> String {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::Select { options, selected }) => {
                options.get(*selected).cloned().unwrap_or_default()
            }
            _ => String::new(),
        }
    }

    fn chosen_at(&self, index: usize) -> Vec<String> {
        match self.fields.get(index).map(|f| &f.value) {
            Some(FieldValue::MultiSelect {
                options, chosen, ..
            }) => options
                .iter()
                .zip(chosen)
                .filter(|(_, on)| **on)
                .map(|(option, _)| option.clone())
                .collect(),
            _ => Vec::new(),
        }
    }

    // ========================================================================
    // REQUEST BUILDERS
    // ========================================================================

    pub fn to_new_trial(&self) -> NewTrial {
        NewTrial {
            name: self.text_at(trial_fields::NAME),
            phase: self.selected_at(trial_fields::PHASE),
            status: self
                .selected_at(trial_fields::STATUS)
                .parse()
                .unwrap_or(TrialStatus::Enrolling),
            sites: self.number_at(trial_fields::SITES),
            enrolled: 0,
            target: self.number_at(trial_fields::TARGET),
            start_date: self.date_at(trial_fields::START_DATE),
            end_date: self.date_at(trial_fields::END_DATE),
            sponsor: self.text_at(trial_fields::SPONSOR),
            indication: self.text_at(trial_fields::INDICATION),
            protocol: self.text_at(trial_fields::PROTOCOL),
        }
    }

    pub fn to_new_site(&self) -> NewSite {
        NewSite {
            name: self.text_at(site_fields::NAME),
            location: self.text_at(site_fields::LOCATION),
            status: self
                .selected_at(site_fields::STATUS)
                .parse()
                .unwrap_or(SiteStatus::Pending),
            capacity: self.number_at(site_fields::CAPACITY),
            principal_investigator: self.text_at(site_fields::INVESTIGATOR),
            trials: self
                .chosen_at(site_fields::TRIALS)
                .into_iter()
                .map(TrialId::new)
                .collect(),
        }
    }

    pub fn to_new_agent(&self) -> NewAgent {
        NewAgent {
            name: self.text_at(agent_fields::NAME),
            kind: self
                .selected_at(agent_fields::KIND)
                .parse()
                .unwrap_or(AgentKind::A2a),
            status: self
                .selected_at(agent_fields::STATUS)
                .parse()
                .unwrap_or(AgentStatus::Offline),
            description: self.text_at(agent_fields::DESCRIPTION),
            capabilities: self.chosen_at(agent_fields::CAPABILITIES),
        }
    }

    pub fn to_new_patient(&self) -> NewPatient {
        NewPatient {
            subject_id: self.text_at(patient_fields::SUBJECT_ID),
            site: self.selected_at(patient_fields::SITE),
            trial: self.selected_at(patient_fields::TRIAL),
            status: self
                .selected_at(patient_fields::STATUS)
                .parse()
                .unwrap_or(PatientStatus::Screening),
            enrollment_date: self.date_at(patient_fields::ENROLLMENT_DATE),
            last_visit: self.date_at(patient_fields::LAST_VISIT),
            next_visit: self.date_at(patient_fields::NEXT_VISIT),
        }
    }

    pub fn to_update_agent(&self) -> UpdateAgent {
        let configuration = match &self.kind {
            FormKind::ConfigureAgent { kind, .. } => {
                let template = self.selected_at(configure_fields::TEMPLATE);
                if template == KEEP_CURRENT {
                    None
                } else {
                    AgentConfig::template(*kind, &template)
                }
            }
            _ => None,
        };
        UpdateAgent {
            name: Some(self.text_at(configure_fields::NAME)),
            status: self.selected_at(configure_fields::STATUS).parse().ok(),
            description: Some(self.text_at(configure_fields::DESCRIPTION)),
            capabilities: None,
            configuration,
        }
    }

    // ========================================================================
    // RENDERING
    // ========================================================================

    pub fn render(&self, f: &mut Frame<'_>, area: Rect, theme: &Theme) {
        f.render_widget(Clear, area);

        let mut lines: Vec<Line> = Vec::with_capacity(self.fields.len() + 2);
        for (index, field) in self.fields.iter().enumerate() {
            let focused = index == self.focused;
            let label_style = if focused {
                Style::default()
                    .fg(theme.border_focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_dim)
            };
            let value_style = if focused {
                Style::default().fg(theme.text)
            } else {
                Style::default().fg(theme.text_dim)
            };
            let rendered = render_field_value(&field.value, focused);
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::styled(rendered, value_style),
            ]));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Enter save • Esc cancel • Tab next field • Space toggle/cycle",
            Style::default().fg(theme.text_muted),
        )));

        let widget = Paragraph::new(lines).block(
            Block::default()
                .title(self.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border_focus)),
        );
        f.render_widget(widget, area);
    }
}

fn render_field_value(value: &FieldValue, focused: bool) -> String {
    match value {
        FieldValue::Text(buf) | FieldValue::Number(buf) | FieldValue::Date(buf) => {
            if focused {
                format!("{}▏", buf)
            } else {
                buf.clone()
            }
        }
        FieldValue::Select { options, selected } => {
            let value = options.get(*selected).map(String::as_str).unwrap_or("");
            format!("◂ {} ▸", value)
        }
        FieldValue::MultiSelect {
            options,
            chosen,
            cursor,
        } => {
            let count = chosen.iter().filter(|on| **on).count();
            let current = options.get(*cursor).map(String::as_str).unwrap_or("");
            let mark = if chosen.get(*cursor).copied().unwrap_or(false) {
                "[x]"
            } else {
                "[ ]"
            };
            format!("◂ {} {} ▸ ({} selected)", mark, current, count)
        }
    }
}

fn position_of(options: &[String], value: &str) -> usize {
    options.iter().position(|o| o == value).unwrap_or(0)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn type_text(form: &mut FormState, text: &str) {
        for c in text.chars() {
            form.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_new_trial_form_defaults_to_enrolling() {
        let form = FormState::new_trial();
        let request = form.to_new_trial();
        assert_eq!(request.status, TrialStatus::Enrolling);
        assert_eq!(request.enrolled, 0);
        assert!(request.start_date.is_none());
    }

    #[test]
    fn test_typed_name_reaches_request() {
        let mut form = FormState::new_trial();
        type_text(&mut form, "Asthma Study");
        let request = form.to_new_trial();
        assert_eq!(request.name, "Asthma Study");
    }

    #[test]
    fn test_non_numeric_number_coerces_to_zero() {
        let mut form = FormState::new_trial();
        // Focus the target field and type garbage.
        form.focused = 6;
        type_text(&mut form, "lots");
        assert_eq!(form.to_new_trial().target, 0);
    }

    #[test]
    fn test_date_parsing() {
        let mut form = FormState::new_trial();
        form.focused = 8;
        type_text(&mut form, "2025-02-01");
        assert_eq!(
            form.to_new_trial().start_date,
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );

        let mut bad = FormState::new_trial();
        bad.focused = 8;
        type_text(&mut bad, "02/01/2025");
        assert!(bad.to_new_trial().start_date.is_none());
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::new_trial();
        let count = form.fields.len();
        for _ in 0..count {
            form.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(form.focused, 0);
        form.handle_key(key(KeyCode::BackTab));
        assert_eq!(form.focused, count - 1);
    }

    #[test]
    fn test_select_cycles() {
        let mut form = FormState::new_agent();
        form.focused = 1;
        assert_eq!(form.to_new_agent().kind, AgentKind::A2a);
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.to_new_agent().kind, AgentKind::Mcp);
        form.handle_key(key(KeyCode::Right));
        assert_eq!(form.to_new_agent().kind, AgentKind::A2a);
    }

    #[test]
    fn test_multi_select_toggles_capabilities() {
        let mut form = FormState::new_agent();
        form.focused = 4;
        form.handle_key(key(KeyCode::Char(' ')));
        form.handle_key(key(KeyCode::Right));
        form.handle_key(key(KeyCode::Char(' ')));
        let request = form.to_new_agent();
        assert_eq!(
            request.capabilities,
            vec!["CRF Validation".to_string(), "Data Quality Checks".to_string()]
        );
        // Untoggle the second one again.
        form.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(form.to_new_agent().capabilities.len(), 1);
    }

    #[test]
    fn test_esc_cancels_and_enter_submits() {
        let mut form = FormState::new_site(vec!["TRIAL-042".to_string()]);
        assert_eq!(form.handle_key(key(KeyCode::Esc)), FormOutcome::Cancelled);
        assert_eq!(form.handle_key(key(KeyCode::Enter)), FormOutcome::Submitted);
        assert_eq!(
            form.handle_key(key(KeyCode::Char('a'))),
            FormOutcome::Continue
        );
    }

    #[test]
    fn test_configure_agent_prefills_and_templates() {
        let agents = fixtures::agents();
        let agent = &agents[2]; // Clinical Context Agent, MCP
        let mut form = FormState::configure_agent(agent);
        assert_eq!(form.text_at(0), agent.name);

        let update = form.to_update_agent();
        assert_eq!(update.name.as_deref(), Some(agent.name.as_str()));
        assert_eq!(update.status, Some(agent.status));
        assert!(update.configuration.is_none());

        // Cycle the template select away from "(keep current)".
        form.focused = 3;
        form.handle_key(key(KeyCode::Right));
        let update = form.to_update_agent();
        assert_eq!(
            update.configuration.map(|c| c.kind()),
            Some(AgentKind::Mcp)
        );
    }

    #[test]
    fn test_enroll_patient_uses_select_options() {
        let form = FormState::enroll_patient(
            vec!["Mayo Clinic".to_string(), "Johns Hopkins".to_string()],
            vec!["TRIAL-042".to_string()],
        );
        let request = form.to_new_patient();
        assert_eq!(request.site, "Mayo Clinic");
        assert_eq!(request.trial, "TRIAL-042");
        assert_eq!(request.status, PatientStatus::Screening);
    }
}
