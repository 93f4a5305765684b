//! Seed data for a TrialDeck session.
//!
//! Every session starts from these records; the store clones them at seed
//! time and all mutations stay in memory.

use crate::agent::{AgentKind, AgentStatus};
use crate::entities::{Agent, AgentId, Patient, PatientId, Site, SiteId, Trial, TrialId};
use crate::enums::{PatientStatus, SiteStatus, TrialStatus};
use chrono::NaiveDate;

/// Vocabulary of capabilities an agent can be created with.
pub const CAPABILITY_VOCABULARY: [&str; 20] = [
    "CRF Validation",
    "Data Quality Checks",
    "Anomaly Detection",
    "Site Sync",
    "Enrollment Tracking",
    "Status Updates",
    "Protocol Context",
    "Medical Knowledge",
    "Decision Support",
    "ICH-GCP Compliance",
    "FDA Guidelines",
    "Audit Support",
    "AE Detection",
    "Safety Signals",
    "Alert Generation",
    "Document Parsing",
    "OCR",
    "Content Extraction",
    "Real-time Monitoring",
    "Regulatory Reporting",
];

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date is valid")
}

/// Seed trials.
pub fn trials() -> Vec<Trial> {
    vec![
        Trial {
            id: TrialId::new("TRIAL-042"),
            name: "Oncology Phase III - Immunotherapy".to_string(),
            phase: "Phase III".to_string(),
            status: TrialStatus::Active,
            progress: 72,
            sites: 24,
            enrolled: 456,
            target: 630,
            start_date: date(2024, 3, 1),
            end_date: None,
            sponsor: "Novartis".to_string(),
            indication: "Non-Small Cell Lung Cancer".to_string(),
            protocol: "PROTO-042-NSCLC".to_string(),
        },
        Trial {
            id: TrialId::new("TRIAL-038"),
            name: "Cardiology Phase II - Heart Failure".to_string(),
            phase: "Phase II".to_string(),
            status: TrialStatus::Enrolling,
            progress: 45,
            sites: 18,
            enrolled: 180,
            target: 400,
            start_date: date(2024, 6, 1),
            end_date: None,
            sponsor: "Pfizer".to_string(),
            indication: "Chronic Heart Failure".to_string(),
            protocol: "PROTO-038-CHF".to_string(),
        },
        Trial {
            id: TrialId::new("TRIAL-051"),
            name: "Neurology Phase I - Alzheimer's".to_string(),
            phase: "Phase I".to_string(),
            status: TrialStatus::Active,
            progress: 88,
            sites: 8,
            enrolled: 44,
            target: 50,
            start_date: date(2024, 1, 1),
            end_date: None,
            sponsor: "Biogen".to_string(),
            indication: "Early-Stage Alzheimer's".to_string(),
            protocol: "PROTO-051-ALZ".to_string(),
        },
        Trial {
            id: TrialId::new("TRIAL-035"),
            name: "Endocrinology Phase II - Diabetes".to_string(),
            phase: "Phase II".to_string(),
            status: TrialStatus::Paused,
            progress: 62,
            sites: 15,
            enrolled: 248,
            target: 400,
            start_date: date(2024, 2, 1),
            end_date: None,
            sponsor: "Eli Lilly".to_string(),
            indication: "Type 2 Diabetes".to_string(),
            protocol: "PROTO-035-T2D".to_string(),
        },
        Trial {
            id: TrialId::new("TRIAL-059"),
            name: "Rheumatology Phase III - Arthritis".to_string(),
            phase: "Phase III".to_string(),
            status: TrialStatus::Enrolling,
            progress: 35,
            sites: 22,
            enrolled: 210,
            target: 600,
            start_date: date(2024, 8, 1),
            end_date: None,
            sponsor: "AbbVie".to_string(),
            indication: "Rheumatoid Arthritis".to_string(),
            protocol: "PROTO-059-RA".to_string(),
        },
        Trial {
            id: TrialId::new("TRIAL-062"),
            name: "Dermatology Phase II - Psoriasis".to_string(),
            phase: "Phase II".to_string(),
            status: TrialStatus::Active,
            progress: 55,
            sites: 12,
            enrolled: 110,
            target: 200,
            start_date: date(2024, 5, 1),
            end_date: None,
            sponsor: "Johnson & Johnson".to_string(),
            indication: "Moderate-Severe Psoriasis".to_string(),
            protocol: "PROTO-062-PSO".to_string(),
        },
    ]
}

/// Seed sites.
pub fn sites() -> Vec<Site> {
    vec![
        Site {
            id: SiteId::new("SITE-001"),
            name: "Mayo Clinic".to_string(),
            location: "Rochester, MN".to_string(),
            status: SiteStatus::Active,
            last_sync: "2 min ago".to_string(),
            enrolled: 45,
            capacity: 60,
            principal_investigator: "Dr. Sarah Chen".to_string(),
            trials: vec![TrialId::new("TRIAL-042"), TrialId::new("TRIAL-051")],
        },
        Site {
            id: SiteId::new("SITE-002"),
            name: "Johns Hopkins".to_string(),
            location: "Baltimore, MD".to_string(),
            status: SiteStatus::Active,
            last_sync: "5 min ago".to_string(),
            enrolled: 38,
            capacity: 50,
            principal_investigator: "Dr. Michael Torres".to_string(),
            trials: vec![TrialId::new("TRIAL-042"), TrialId::new("TRIAL-038")],
        },
        Site {
            id: SiteId::new("SITE-003"),
            name: "Mass General".to_string(),
            location: "Boston, MA".to_string(),
            status: SiteStatus::Pending,
            last_sync: "15 min ago".to_string(),
            enrolled: 22,
            capacity: 40,
            principal_investigator: "Dr. Emily Watson".to_string(),
            trials: vec![TrialId::new("TRIAL-038")],
        },
        Site {
            id: SiteId::new("SITE-004"),
            name: "Cleveland Clinic".to_string(),
            location: "Cleveland, OH".to_string(),
            status: SiteStatus::Issue,
            last_sync: "1 hour ago".to_string(),
            enrolled: 28,
            capacity: 35,
            principal_investigator: "Dr. James Park".to_string(),
            trials: vec![TrialId::new("TRIAL-035"), TrialId::new("TRIAL-059")],
        },
        Site {
            id: SiteId::new("SITE-005"),
            name: "Stanford Health".to_string(),
            location: "Palo Alto, CA".to_string(),
            status: SiteStatus::Active,
            last_sync: "3 min ago".to_string(),
            enrolled: 52,
            capacity: 70,
            principal_investigator: "Dr. Lisa Huang".to_string(),
            trials: vec![TrialId::new("TRIAL-042"), TrialId::new("TRIAL-062")],
        },
        Site {
            id: SiteId::new("SITE-006"),
            name: "UCLA Medical Center".to_string(),
            location: "Los Angeles, CA".to_string(),
            status: SiteStatus::Active,
            last_sync: "1 min ago".to_string(),
            enrolled: 41,
            capacity: 55,
            principal_investigator: "Dr. Robert Kim".to_string(),
            trials: vec![TrialId::new("TRIAL-051"), TrialId::new("TRIAL-059")],
        },
        Site {
            id: SiteId::new("SITE-007"),
            name: "Mount Sinai".to_string(),
            location: "New York, NY".to_string(),
            status: SiteStatus::Active,
            last_sync: "4 min ago".to_string(),
            enrolled: 35,
            capacity: 45,
            principal_investigator: "Dr. Angela Martinez".to_string(),
            trials: vec![TrialId::new("TRIAL-038"), TrialId::new("TRIAL-062")],
        },
        Site {
            id: SiteId::new("SITE-008"),
            name: "Duke University".to_string(),
            location: "Durham, NC".to_string(),
            status: SiteStatus::Pending,
            last_sync: "20 min ago".to_string(),
            enrolled: 18,
            capacity: 30,
            principal_investigator: "Dr. William Chang".to_string(),
            trials: vec![TrialId::new("TRIAL-035")],
        },
    ]
}

/// Seed agents. Three A2A, three MCP; message counts sum to 4666.
pub fn agents() -> Vec<Agent> {
    vec![
        Agent {
            id: AgentId::new("agent-001"),
            name: "Data Validation Agent".to_string(),
            kind: AgentKind::A2a,
            status: AgentStatus::Online,
            last_message: "All CRF data validated for TRIAL-042".to_string(),
            messages_processed: 1247,
            uptime: "99.9%".to_string(),
            description: "Validates incoming clinical data against protocol specifications"
                .to_string(),
            capabilities: vec![
                "CRF Validation".to_string(),
                "Data Quality Checks".to_string(),
                "Anomaly Detection".to_string(),
            ],
            configuration: None,
        },
        Agent {
            id: AgentId::new("agent-002"),
            name: "Site Coordinator Agent".to_string(),
            kind: AgentKind::A2a,
            status: AgentStatus::Processing,
            last_message: "Processing enrollment update from SITE-003".to_string(),
            messages_processed: 892,
            uptime: "99.7%".to_string(),
            description: "Coordinates data sync and communication between trial sites"
                .to_string(),
            capabilities: vec![
                "Site Sync".to_string(),
                "Enrollment Tracking".to_string(),
                "Status Updates".to_string(),
            ],
            configuration: None,
        },
        Agent {
            id: AgentId::new("agent-003"),
            name: "Clinical Context Agent".to_string(),
            kind: AgentKind::Mcp,
            status: AgentStatus::Online,
            last_message: "Protocol context loaded for Phase II trials".to_string(),
            messages_processed: 456,
            uptime: "99.8%".to_string(),
            description: "Provides clinical protocol context for AI-assisted decisions"
                .to_string(),
            capabilities: vec![
                "Protocol Context".to_string(),
                "Medical Knowledge".to_string(),
                "Decision Support".to_string(),
            ],
            configuration: None,
        },
        Agent {
            id: AgentId::new("agent-004"),
            name: "Regulatory Compliance Agent".to_string(),
            kind: AgentKind::Mcp,
            status: AgentStatus::Online,
            last_message: "ICH-GCP guidelines updated in context".to_string(),
            messages_processed: 328,
            uptime: "99.9%".to_string(),
            description: "Ensures regulatory compliance across all trial operations"
                .to_string(),
            capabilities: vec![
                "ICH-GCP Compliance".to_string(),
                "FDA Guidelines".to_string(),
                "Audit Support".to_string(),
            ],
            configuration: None,
        },
        Agent {
            id: AgentId::new("agent-005"),
            name: "Safety Monitor Agent".to_string(),
            kind: AgentKind::A2a,
            status: AgentStatus::Online,
            last_message: "No adverse events flagged in last 24 hours".to_string(),
            messages_processed: 654,
            uptime: "100%".to_string(),
            description: "Real-time monitoring of safety signals and adverse events"
                .to_string(),
            capabilities: vec![
                "AE Detection".to_string(),
                "Safety Signals".to_string(),
                "Alert Generation".to_string(),
            ],
            configuration: None,
        },
        Agent {
            id: AgentId::new("agent-006"),
            name: "Document Processing Agent".to_string(),
            kind: AgentKind::Mcp,
            status: AgentStatus::Offline,
            last_message: "Scheduled maintenance in progress".to_string(),
            messages_processed: 1089,
            uptime: "98.5%".to_string(),
            description: "Processes and indexes trial documentation".to_string(),
            capabilities: vec![
                "Document Parsing".to_string(),
                "OCR".to_string(),
                "Content Extraction".to_string(),
            ],
            configuration: None,
        },
    ]
}

/// Seed patients.
pub fn patients() -> Vec<Patient> {
    vec![
        Patient {
            id: PatientId::new("PAT-001"),
            subject_id: "042-001-0001".to_string(),
            site: "Mayo Clinic".to_string(),
            trial: TrialId::new("TRIAL-042"),
            status: PatientStatus::Active,
            enrollment_date: date(2024, 3, 15),
            last_visit: date(2024, 12, 1),
            next_visit: Some(date(2024, 12, 15)),
            completion_rate: 75,
        },
        Patient {
            id: PatientId::new("PAT-002"),
            subject_id: "042-001-0002".to_string(),
            site: "Mayo Clinic".to_string(),
            trial: TrialId::new("TRIAL-042"),
            status: PatientStatus::Active,
            enrollment_date: date(2024, 3, 22),
            last_visit: date(2024, 12, 5),
            next_visit: Some(date(2024, 12, 19)),
            completion_rate: 70,
        },
        Patient {
            id: PatientId::new("PAT-003"),
            subject_id: "038-002-0001".to_string(),
            site: "Johns Hopkins".to_string(),
            trial: TrialId::new("TRIAL-038"),
            status: PatientStatus::Screening,
            enrollment_date: date(2024, 12, 1),
            last_visit: date(2024, 12, 10),
            next_visit: Some(date(2024, 12, 17)),
            completion_rate: 10,
        },
        Patient {
            id: PatientId::new("PAT-004"),
            subject_id: "051-005-0001".to_string(),
            site: "Stanford Health".to_string(),
            trial: TrialId::new("TRIAL-051"),
            status: PatientStatus::Completed,
            enrollment_date: date(2024, 1, 10),
            last_visit: date(2024, 11, 28),
            next_visit: None,
            completion_rate: 100,
        },
        Patient {
            id: PatientId::new("PAT-005"),
            subject_id: "035-004-0001".to_string(),
            site: "Cleveland Clinic".to_string(),
            trial: TrialId::new("TRIAL-035"),
            status: PatientStatus::Withdrawn,
            enrollment_date: date(2024, 2, 20),
            last_visit: date(2024, 10, 15),
            next_visit: None,
            completion_rate: 45,
        },
    ]
}

/// One point of the dashboard enrollment chart.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentPoint {
    pub month: &'static str,
    pub enrolled: u32,
    pub target: u32,
}

/// Monthly cumulative enrollment vs. target for the dashboard chart.
pub fn enrollment_series() -> Vec<EnrollmentPoint> {
    vec![
        EnrollmentPoint { month: "Jan", enrolled: 45, target: 50 },
        EnrollmentPoint { month: "Feb", enrolled: 92, target: 100 },
        EnrollmentPoint { month: "Mar", enrolled: 156, target: 150 },
        EnrollmentPoint { month: "Apr", enrolled: 210, target: 200 },
        EnrollmentPoint { month: "May", enrolled: 278, target: 250 },
        EnrollmentPoint { month: "Jun", enrolled: 342, target: 300 },
        EnrollmentPoint { month: "Jul", enrolled: 398, target: 350 },
        EnrollmentPoint { month: "Aug", enrolled: 456, target: 400 },
    ]
}

/// A report available from the Reports page.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportTemplate {
    pub name: &'static str,
    pub category: &'static str,
    pub last_generated: NaiveDate,
}

/// Catalog of canned reports.
pub fn report_catalog() -> Vec<ReportTemplate> {
    vec![
        ReportTemplate {
            name: "Monthly Enrollment Summary",
            category: "Enrollment",
            last_generated: date(2024, 12, 10),
        },
        ReportTemplate {
            name: "Site Performance Report",
            category: "Operations",
            last_generated: date(2024, 12, 8),
        },
        ReportTemplate {
            name: "Data Quality Metrics",
            category: "Quality",
            last_generated: date(2024, 12, 12),
        },
        ReportTemplate {
            name: "Adverse Events Summary",
            category: "Safety",
            last_generated: date(2024, 12, 11),
        },
        ReportTemplate {
            name: "Protocol Deviation Log",
            category: "Compliance",
            last_generated: date(2024, 12, 9),
        },
        ReportTemplate {
            name: "Agent Activity Report",
            category: "Integration",
            last_generated: date(2024, 12, 13),
        },
    ]
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(trials().len(), 6);
        assert_eq!(sites().len(), 8);
        assert_eq!(agents().len(), 6);
        assert_eq!(patients().len(), 5);
        assert_eq!(enrollment_series().len(), 8);
        assert_eq!(report_catalog().len(), 6);
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let trials = trials();
        let mut ids: Vec<&str> = trials.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), trials.len());
    }

    #[test]
    fn test_fixture_capabilities_come_from_vocabulary() {
        for agent in agents() {
            for capability in &agent.capabilities {
                assert!(
                    CAPABILITY_VOCABULARY.contains(&capability.as_str()),
                    "capability {} not in vocabulary",
                    capability
                );
            }
        }
    }

    #[test]
    fn test_fixture_site_trials_reference_seeded_trials() {
        let trial_ids: Vec<String> =
            trials().iter().map(|t| t.id.as_str().to_string()).collect();
        for site in sites() {
            for trial in &site.trials {
                assert!(trial_ids.contains(&trial.as_str().to_string()));
            }
        }
    }

    #[test]
    fn test_fixture_progress_values_in_range() {
        for trial in trials() {
            assert!(trial.progress <= 100);
        }
        for patient in patients() {
            assert!(patient.completion_rate <= 100);
        }
    }
}
