//! Agent types for the A2A/MCP integration surface.
//!
//! Agents are labeled integrations: the kind tells the UI which icon and
//! configuration shape to use, nothing more. Configuration is a closed
//! tagged variant keyed by kind; unknown keys are rejected at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// AGENT KIND
// ============================================================================

/// Integration family an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentKind {
    /// Agent-to-Agent: direct communication between systems.
    A2a,
    /// Model Context Protocol: contextual AI assistance.
    Mcp,
}

impl AgentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::A2a => "A2A",
            AgentKind::Mcp => "MCP",
        }
    }

    pub fn all() -> &'static [AgentKind] {
        &[AgentKind::A2a, AgentKind::Mcp]
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgentKind {
    type Err = AgentKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A2A" => Ok(AgentKind::A2a),
            "MCP" => Ok(AgentKind::Mcp),
            _ => Err(AgentKindParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid agent kind string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentKindParseError(pub String);

impl fmt::Display for AgentKindParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid agent kind: {}", self.0)
    }
}

impl std::error::Error for AgentKindParseError {}

// ============================================================================
// AGENT STATUS
// ============================================================================

/// Runtime status of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AgentStatus {
    Online,
    Processing,
    #[default]
    Offline,
    Error,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Online => "online",
            AgentStatus::Processing => "processing",
            AgentStatus::Offline => "offline",
            AgentStatus::Error => "error",
        }
    }

    /// An agent counts as active while it is online or processing.
    pub fn is_active(&self) -> bool {
        matches!(self, AgentStatus::Online | AgentStatus::Processing)
    }

    pub fn all() -> &'static [AgentStatus] {
        &[
            AgentStatus::Online,
            AgentStatus::Processing,
            AgentStatus::Offline,
            AgentStatus::Error,
        ]
    }
}

impl fmt::Display for AgentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AgentStatus {
    type Err = AgentStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" => Ok(AgentStatus::Online),
            "processing" => Ok(AgentStatus::Processing),
            "offline" => Ok(AgentStatus::Offline),
            "error" => Ok(AgentStatus::Error),
            _ => Err(AgentStatusParseError(s.to_string())),
        }
    }
}

/// Error when parsing an invalid agent status string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatusParseError(pub String);

impl fmt::Display for AgentStatusParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid agent status: {}", self.0)
    }
}

impl std::error::Error for AgentStatusParseError {}

// ============================================================================
// AGENT CONFIGURATION
// ============================================================================

/// Log verbosity an agent reports at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// Model channel an MCP agent pins to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelVersion {
    #[default]
    Latest,
    Stable,
    Beta,
}

/// Configuration for an A2A agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct A2aConfig {
    pub timeout_ms: u64,
    pub retry_attempts: u32,
    pub batch_size: u32,
    pub sync_interval_ms: u64,
    pub max_concurrent_connections: u32,
    pub log_level: LogLevel,
}

/// Configuration for an MCP agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct McpConfig {
    pub timeout_ms: u64,
    pub retry_attempts: u32,
    pub context_window: u32,
    pub max_tokens: u32,
    pub temperature: f32,
    pub model_version: ModelVersion,
    pub log_level: LogLevel,
}

/// Agent configuration, keyed by agent kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AgentConfig {
    A2a(A2aConfig),
    Mcp(McpConfig),
}

impl AgentConfig {
    /// The kind this configuration shape belongs to.
    pub fn kind(&self) -> AgentKind {
        match self {
            AgentConfig::A2a(_) => AgentKind::A2a,
            AgentConfig::Mcp(_) => AgentKind::Mcp,
        }
    }

    /// Preset for A2A agents validating incoming clinical data.
    pub fn data_validation_template() -> Self {
        AgentConfig::A2a(A2aConfig {
            timeout_ms: 30_000,
            retry_attempts: 3,
            batch_size: 100,
            sync_interval_ms: 300_000,
            max_concurrent_connections: 10,
            log_level: LogLevel::Info,
        })
    }

    /// Preset for A2A agents coordinating site sync traffic.
    pub fn site_coordination_template() -> Self {
        AgentConfig::A2a(A2aConfig {
            timeout_ms: 30_000,
            retry_attempts: 3,
            batch_size: 100,
            sync_interval_ms: 300_000,
            max_concurrent_connections: 10,
            log_level: LogLevel::Info,
        })
    }

    /// Preset for MCP agents serving protocol context.
    pub fn context_provider_template() -> Self {
        AgentConfig::Mcp(McpConfig {
            timeout_ms: 30_000,
            retry_attempts: 3,
            context_window: 8_192,
            max_tokens: 4_096,
            temperature: 0.1,
            model_version: ModelVersion::Latest,
            log_level: LogLevel::Info,
        })
    }

    /// Preset for MCP agents backing a knowledge base index.
    pub fn knowledge_base_template() -> Self {
        AgentConfig::Mcp(McpConfig {
            timeout_ms: 30_000,
            retry_attempts: 3,
            context_window: 8_192,
            max_tokens: 4_096,
            temperature: 0.1,
            model_version: ModelVersion::Stable,
            log_level: LogLevel::Info,
        })
    }

    /// Template names offered for a given kind, in display order.
    pub fn template_names(kind: AgentKind) -> &'static [&'static str] {
        match kind {
            AgentKind::A2a => &["Data Validation", "Site Coordination"],
            AgentKind::Mcp => &["Context Provider", "Knowledge Base"],
        }
    }

    /// Look up a template by its display name for the given kind.
    pub fn template(kind: AgentKind, name: &str) -> Option<Self> {
        match (kind, name) {
            (AgentKind::A2a, "Data Validation") => Some(Self::data_validation_template()),
            (AgentKind::A2a, "Site Coordination") => Some(Self::site_coordination_template()),
            (AgentKind::Mcp, "Context Provider") => Some(Self::context_provider_template()),
            (AgentKind::Mcp, "Knowledge Base") => Some(Self::knowledge_base_template()),
            _ => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_kind_round_trip() {
        for kind in AgentKind::all() {
            let parsed: AgentKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, *kind);
        }
    }

    #[test]
    fn test_agent_kind_parse_is_case_insensitive() {
        assert_eq!("a2a".parse::<AgentKind>().unwrap(), AgentKind::A2a);
        assert_eq!("mcp".parse::<AgentKind>().unwrap(), AgentKind::Mcp);
    }

    #[test]
    fn test_agent_status_round_trip() {
        for status in AgentStatus::all() {
            let parsed: AgentStatus = status.as_str().parse().unwrap();
            assert_eq!(parsed, *status);
        }
    }

    #[test]
    fn test_agent_status_active_set() {
        assert!(AgentStatus::Online.is_active());
        assert!(AgentStatus::Processing.is_active());
        assert!(!AgentStatus::Offline.is_active());
        assert!(!AgentStatus::Error.is_active());
    }

    #[test]
    fn test_templates_match_their_kind() {
        for kind in AgentKind::all() {
            for name in AgentConfig::template_names(*kind) {
                let config = AgentConfig::template(*kind, name).unwrap();
                assert_eq!(config.kind(), *kind);
            }
        }
    }

    #[test]
    fn test_template_rejects_cross_kind_name() {
        assert!(AgentConfig::template(AgentKind::A2a, "Context Provider").is_none());
        assert!(AgentConfig::template(AgentKind::Mcp, "Data Validation").is_none());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        let raw = r#"{"kind":"a2a","timeout_ms":30000,"retry_attempts":3,"batch_size":100,
                      "sync_interval_ms":300000,"max_concurrent_connections":10,
                      "log_level":"info","surprise":"nope"}"#;
        let result: Result<AgentConfig, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = AgentConfig::knowledge_base_template();
        let json = serde_json::to_string(&config).unwrap();
        let back: AgentConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
