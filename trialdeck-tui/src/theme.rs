//! Clinical theme and color utilities.

use ratatui::style::Color;
use trialdeck_core::{AgentKind, AgentStatus, PatientStatus, SiteStatus, TrialStatus};

#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl Theme {
    pub fn clinical() -> Self {
        Self {
            bg: Color::Rgb(13, 17, 23),
            bg_secondary: Color::Rgb(22, 27, 34),
            primary: Color::Rgb(88, 166, 255),
            primary_dim: Color::Rgb(48, 92, 140),
            secondary: Color::Rgb(188, 140, 255),
            success: Color::Rgb(63, 185, 80),
            warning: Color::Rgb(210, 153, 34),
            error: Color::Rgb(248, 81, 73),
            info: Color::Rgb(88, 166, 255),
            text: Color::Rgb(230, 237, 243),
            text_dim: Color::Rgb(139, 148, 158),
            text_muted: Color::Rgb(87, 96, 106),
            border: Color::Rgb(48, 54, 61),
            border_focus: Color::Rgb(88, 166, 255),
        }
    }
}

pub fn trial_status_color(status: TrialStatus, theme: &Theme) -> Color {
    match status {
        TrialStatus::Active => theme.success,
        TrialStatus::Enrolling => theme.primary,
        TrialStatus::Completed => theme.text_dim,
        TrialStatus::Paused => theme.warning,
    }
}

pub fn site_status_color(status: SiteStatus, theme: &Theme) -> Color {
    match status {
        SiteStatus::Active => theme.success,
        SiteStatus::Pending => theme.warning,
        SiteStatus::Issue => theme.error,
        SiteStatus::Inactive => theme.text_dim,
    }
}

pub fn agent_status_color(status: AgentStatus, theme: &Theme) -> Color {
    match status {
        AgentStatus::Online => theme.success,
        AgentStatus::Processing => theme.info,
        AgentStatus::Offline => theme.text_dim,
        AgentStatus::Error => theme.error,
    }
}

pub fn agent_kind_color(kind: AgentKind, theme: &Theme) -> Color {
    match kind {
        AgentKind::A2a => theme.warning,
        AgentKind::Mcp => theme.primary,
    }
}

pub fn patient_status_color(status: PatientStatus, theme: &Theme) -> Color {
    match status {
        PatientStatus::Screening => theme.info,
        PatientStatus::Enrolled => theme.primary,
        PatientStatus::Active => theme.success,
        PatientStatus::Completed => theme.text_dim,
        PatientStatus::Withdrawn => theme.error,
    }
}

pub fn utilization_color(percent: f32, theme: &Theme) -> Color {
    if percent < 70.0 {
        theme.success
    } else if percent < 90.0 {
        theme.warning
    } else {
        theme.error
    }
}
