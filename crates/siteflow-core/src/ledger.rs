//! Resource ledger
//!
//! Mutable record of the identifiers discovered or created during a run.
//! Each slot only moves from unset to set; there is no deletion path. The
//! ledger is process-local and never persisted; resuming a partial
//! deployment means re-supplying previously captured identifiers.

use serde::Serialize;

/// Identifiers captured while the pipeline runs.
///
/// Later stages must read earlier identifiers from here rather than
/// recomputing them, so a re-run with different naming cannot drift.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResourceLedger {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_arn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_id: Option<String>,

    /// Edge domain name the provider assigned to the distribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distribution_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hosted_zone_id: Option<String>,
}

impl ResourceLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_bucket(&mut self, name: impl Into<String>) {
        self.bucket = Some(name.into());
    }

    pub fn record_certificate(&mut self, arn: impl Into<String>) {
        self.certificate_arn = Some(arn.into());
    }

    pub fn record_distribution(&mut self, id: impl Into<String>, domain: impl Into<String>) {
        self.distribution_id = Some(id.into());
        self.distribution_domain = Some(domain.into());
    }

    pub fn record_hosted_zone(&mut self, id: impl Into<String>) {
        self.hosted_zone_id = Some(id.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let ledger = ResourceLedger::new();
        assert!(ledger.bucket.is_none());
        assert!(ledger.certificate_arn.is_none());
        assert!(ledger.distribution_id.is_none());
        assert!(ledger.distribution_domain.is_none());
        assert!(ledger.hosted_zone_id.is_none());
    }

    #[test]
    fn slots_fill_independently() {
        let mut ledger = ResourceLedger::new();
        ledger.record_bucket("example.com");
        ledger.record_certificate("arn:aws:acm:us-east-1:123:certificate/abc");

        assert_eq!(ledger.bucket.as_deref(), Some("example.com"));
        assert!(ledger.certificate_arn.is_some());
        assert!(ledger.distribution_id.is_none());
    }

    #[test]
    fn distribution_slot_carries_edge_domain() {
        let mut ledger = ResourceLedger::new();
        ledger.record_distribution("E2EXAMPLE", "d123.cloudfront.net");
        assert_eq!(ledger.distribution_id.as_deref(), Some("E2EXAMPLE"));
        assert_eq!(
            ledger.distribution_domain.as_deref(),
            Some("d123.cloudfront.net")
        );
    }

    #[test]
    fn empty_slots_are_omitted_from_output() {
        let mut ledger = ResourceLedger::new();
        ledger.record_bucket("example.com");

        let json = serde_json::to_value(&ledger).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key("bucket"));
        assert!(!object.contains_key("certificate_arn"));
        assert!(!object.contains_key("distribution_id"));
    }
}
