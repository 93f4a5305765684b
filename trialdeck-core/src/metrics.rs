//! Derived metrics over the in-memory collections.
//!
//! All aggregates are recomputed from current state on every render; the
//! collections are small enough that caching would buy nothing.

use crate::agent::AgentKind;
use crate::entities::{Agent, Site, Trial};
use crate::enums::{SiteStatus, TrialStatus};

/// Number of agents of the given kind.
pub fn agent_count_by_kind(agents: &[Agent], kind: AgentKind) -> usize {
    agents.iter().filter(|a| a.kind == kind).count()
}

/// Number of agents that are online or processing ("active now").
pub fn active_agent_count(agents: &[Agent]) -> usize {
    agents.iter().filter(|a| a.status.is_active()).count()
}

/// Total messages processed across all agents.
pub fn total_messages_processed(agents: &[Agent]) -> u64 {
    agents.iter().map(|a| a.messages_processed).sum()
}

/// Number of sites currently connected.
pub fn active_site_count(sites: &[Site]) -> usize {
    sites
        .iter()
        .filter(|s| s.status == SiteStatus::Active)
        .count()
}

/// Number of trials in the active state.
pub fn active_trial_count(trials: &[Trial]) -> usize {
    trials
        .iter()
        .filter(|t| t.status == TrialStatus::Active)
        .count()
}

/// Total enrollment across all trials.
pub fn total_enrolled(trials: &[Trial]) -> u32 {
    trials.iter().map(|t| t.enrolled).sum()
}

/// Rounded utilization percentage; 0 when capacity is 0.
pub fn capacity_percent(enrolled: u32, capacity: u32) -> u8 {
    if capacity == 0 {
        return 0;
    }
    let percent = (enrolled as f64 / capacity as f64 * 100.0).round();
    percent.clamp(0.0, 255.0) as u8
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_fixture_agent_counts_by_kind() {
        let agents = fixtures::agents();
        assert_eq!(agent_count_by_kind(&agents, AgentKind::A2a), 3);
        assert_eq!(agent_count_by_kind(&agents, AgentKind::Mcp), 3);
    }

    #[test]
    fn test_fixture_active_agent_count() {
        let agents = fixtures::agents();
        // Four online plus one processing; the offline document agent is out.
        assert_eq!(active_agent_count(&agents), 5);
    }

    #[test]
    fn test_fixture_message_total() {
        let agents = fixtures::agents();
        assert_eq!(
            total_messages_processed(&agents),
            1247 + 892 + 456 + 328 + 654 + 1089
        );
        assert_eq!(total_messages_processed(&agents), 4666);
    }

    #[test]
    fn test_fixture_active_site_count() {
        let sites = fixtures::sites();
        assert_eq!(active_site_count(&sites), 5);
    }

    #[test]
    fn test_fixture_trial_aggregates() {
        let trials = fixtures::trials();
        assert_eq!(active_trial_count(&trials), 3);
        assert_eq!(total_enrolled(&trials), 456 + 180 + 44 + 248 + 210 + 110);
    }

    #[test]
    fn test_capacity_percent() {
        assert_eq!(capacity_percent(45, 60), 75);
        assert_eq!(capacity_percent(0, 60), 0);
        assert_eq!(capacity_percent(60, 60), 100);
        assert_eq!(capacity_percent(10, 0), 0);
    }

    #[test]
    fn test_metrics_on_empty_collections() {
        assert_eq!(active_agent_count(&[]), 0);
        assert_eq!(total_messages_processed(&[]), 0);
        assert_eq!(active_site_count(&[]), 0);
        assert_eq!(total_enrolled(&[]), 0);
    }
}
