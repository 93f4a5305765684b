//! Page navigation and switching utilities.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    Dashboard,
    Trials,
    Sites,
    Agents,
    Patients,
    Reports,
    Settings,
    Help,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Trials => "Trials",
            Page::Sites => "Sites",
            Page::Agents => "Agents",
            Page::Patients => "Patients",
            Page::Reports => "Reports",
            Page::Settings => "Settings",
            Page::Help => "Help",
        }
    }

    /// Short description shown in the header, one per page.
    pub fn description(&self) -> &'static str {
        match self {
            Page::Dashboard => "Monitor trials, site coordination, and agent integrations",
            Page::Trials => "Manage and monitor all clinical trials",
            Page::Sites => "Manage trial sites and their coordination status",
            Page::Agents => "Manage A2A and MCP agent integrations",
            Page::Patients => "Track patient enrollment and visit completion",
            Page::Reports => "Generate and review trial reports",
            Page::Settings => "Account and application preferences",
            Page::Help => "Find answers and get support",
        }
    }

    pub fn all() -> &'static [Page] {
        &[
            Page::Dashboard,
            Page::Trials,
            Page::Sites,
            Page::Agents,
            Page::Patients,
            Page::Reports,
            Page::Settings,
            Page::Help,
        ]
    }

    /// Whether the page has a searchable list.
    pub fn is_searchable(&self) -> bool {
        matches!(
            self,
            Page::Trials | Page::Sites | Page::Agents | Page::Patients
        )
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Self::all().get(index).copied()
    }

    pub fn next(&self) -> Page {
        let idx = self.index();
        let all = Self::all();
        all[(idx + 1) % all.len()]
    }

    pub fn previous(&self) -> Page {
        let idx = self.index();
        let all = Self::all();
        let prev = if idx == 0 { all.len() - 1 } else { idx - 1 };
        all[prev]
    }
}
