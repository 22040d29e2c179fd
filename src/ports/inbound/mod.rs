/// Inbound ports (Driving ports) - Use case interfaces
pub mod assessment_summary_port;

pub use assessment_summary_port::AssessmentSummaryPort;
