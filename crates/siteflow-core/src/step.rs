//! Pipeline steps and outcome types

use crate::ledger::ResourceLedger;
use serde::Serialize;

/// Named pipeline step, reported when a stage fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    /// Storage bucket creation
    Bucket,
    /// TLS certificate request
    Certificate,
    /// Content-delivery distribution creation
    Distribution,
    /// Bucket access policy binding
    BucketPolicy,
    /// DNS alias record publication
    DnsRecords,
    /// Placeholder content upload
    SampleContent,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Bucket => write!(f, "bucket creation"),
            Step::Certificate => write!(f, "certificate request"),
            Step::Distribution => write!(f, "distribution creation"),
            Step::BucketPolicy => write!(f, "bucket policy binding"),
            Step::DnsRecords => write!(f, "DNS record publication"),
            Step::SampleContent => write!(f, "sample content upload"),
        }
    }
}

/// One DNS record the operator must create to validate the certificate.
///
/// Produced by the certificate status query and consumed only for display;
/// validation itself happens outside this process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRecord {
    pub domain: String,
    pub record_name: String,
    pub record_value: String,
    pub record_type: String,
}

/// Result of the `deploy` entry point: the pipeline halts here for manual
/// certificate validation.
#[derive(Debug, Clone, Serialize)]
pub struct DeployOutcome {
    pub bucket_name: String,
    pub certificate_arn: String,

    /// DNS records required to validate the certificate. May be empty if
    /// the certificate authority has not produced them yet.
    pub validation_records: Vec<ValidationRecord>,
}

/// Result of the `activate` entry point (distribution + policy + DNS).
#[derive(Debug, Clone, Serialize)]
pub struct ActivateOutcome {
    pub distribution_id: String,

    /// Edge domain assigned by the content-delivery network
    pub distribution_domain: String,

    pub hosted_zone_id: String,
}

/// Provider-reported presence of the storage bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketState {
    Exists,
    Missing,
}

/// Point-in-time view of every resource the ledger knows about.
///
/// Each field is refreshed independently; a failed sub-query degrades that
/// one field to an `"error"` marker instead of aborting the snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub domain: String,
    pub resources: ResourceLedger,
    pub bucket: BucketState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_status: Option<String>,

    /// Validation records still outstanding while the certificate is
    /// pending; empty once issued (or when nothing is known).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending_validation: Vec<ValidationRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_names_are_operator_readable() {
        assert_eq!(Step::Bucket.to_string(), "bucket creation");
        assert_eq!(Step::DnsRecords.to_string(), "DNS record publication");
    }

    #[test]
    fn empty_snapshot_reports_missing_bucket_and_nothing_else() {
        let snapshot = StatusSnapshot {
            domain: "example.com".to_string(),
            resources: ResourceLedger::new(),
            bucket: BucketState::Missing,
            certificate_status: None,
            distribution_status: None,
            pending_validation: Vec::new(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object["bucket"], "missing");
        assert!(!object.contains_key("certificate_status"));
        assert!(!object.contains_key("distribution_status"));
        assert!(!object.contains_key("pending_validation"));
    }

    #[test]
    fn degraded_fields_carry_error_marker() {
        let snapshot = StatusSnapshot {
            domain: "example.com".to_string(),
            resources: ResourceLedger::new(),
            bucket: BucketState::Exists,
            certificate_status: Some("error".to_string()),
            distribution_status: Some("Deployed".to_string()),
            pending_validation: Vec::new(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["certificate_status"], "error");
        assert_eq!(json["distribution_status"], "Deployed");
    }
}
