//! TrialDeck Core - Entity Types
//!
//! Typed records, status enums, errors, and the pure derivation logic
//! (search filter + metrics) shared by the store and the TUI. No I/O here.

pub mod agent;
pub mod entities;
pub mod enums;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod metrics;
pub mod validation;

pub use agent::{
    A2aConfig, AgentConfig, AgentKind, AgentKindParseError, AgentStatus, AgentStatusParseError,
    LogLevel, McpConfig, ModelVersion,
};
pub use entities::{Agent, AgentId, Patient, PatientId, Site, SiteId, Trial, TrialId};
pub use enums::{
    EntityType, PatientStatus, PatientStatusParseError, SiteStatus, SiteStatusParseError,
    TrialStatus, TrialStatusParseError,
};
pub use error::{StoreError, TrialDeckError, TrialDeckResult, ValidationError};
pub use filter::{filter_by_query, Searchable};
