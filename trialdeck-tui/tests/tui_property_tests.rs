//! Property tests for the TUI building blocks.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use proptest::prelude::*;
use trialdeck_core::filter_by_query;
use trialdeck_test_utils::{arb_agent, arb_trial};
use trialdeck_tui::config::{
    NotificationPrefs, ProfileConfig, ThemeConfig, TuiConfig,
};
use trialdeck_tui::keys::{map_key, Action};
use trialdeck_tui::nav::Page;
use trialdeck_tui::theme::{agent_status_color, trial_status_color, Theme};

fn base_config() -> TuiConfig {
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

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

#[test]
fn config_requires_known_theme() {
    let mut config = base_config();
    config.theme = ThemeConfig {
        name: "unknown".to_string(),
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_requires_profile_name() {
    let mut config = base_config();
    config.profile.full_name = String::new();
    assert!(config.validate().is_err());
}

proptest! {
    #[test]
    fn keybinding_digit_switches_page(digit in 0u8..=9u8) {
        let ch = char::from(b'0' + digit);
        let action = map_key(key(KeyCode::Char(ch)));
        if (1..=8).contains(&digit) {
            let expected = digit as usize - 1;
            prop_assert!(matches!(action, Some(Action::SwitchPage(i)) if i == expected));
        } else {
            prop_assert!(action.is_none());
        }
    }

    /// Page::next() cycles through all pages.
    #[test]
    fn page_next_cycles(start in 0usize..8) {
        let page = Page::from_index(start).unwrap();
        let mut current = page;
        for _ in 0..Page::all().len() {
            current = current.next();
        }
        prop_assert_eq!(current, page);
    }

    /// Page::previous() cycles through all pages.
    #[test]
    fn page_prev_cycles(start in 0usize..8) {
        let page = Page::from_index(start).unwrap();
        let mut current = page;
        for _ in 0..Page::all().len() {
            current = current.previous();
        }
        prop_assert_eq!(current, page);
    }

    /// Every page has a non-empty title and description.
    #[test]
    fn page_titles_never_empty(start in 0usize..8) {
        let page = Page::from_index(start).unwrap();
        prop_assert!(!page.title().is_empty());
        prop_assert!(!page.description().is_empty());
    }

    /// Status colors are total over generated agents and trials.
    #[test]
    fn status_colors_are_total(agent in arb_agent(), trial in arb_trial()) {
        let theme = Theme::clinical();
        let _ = agent_status_color(agent.status, &theme);
        let _ = trial_status_color(trial.status, &theme);
    }

    /// Filtering generated agents by an id fragment only returns agents
    /// whose designated fields contain it.
    #[test]
    fn filter_over_generated_agents(
        agents in prop::collection::vec(arb_agent(), 0..12),
        query in "[a-z0-9-]{0,8}",
    ) {
        let filtered = filter_by_query(&agents, &query);
        prop_assert!(filtered.len() <= agents.len());
        let needle = query.to_lowercase();
        for agent in filtered {
            prop_assert!(
                agent.name.to_lowercase().contains(&needle)
                    || agent.id.as_str().to_lowercase().contains(&needle)
            );
        }
    }
}
