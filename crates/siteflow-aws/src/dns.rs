//! DNS zone resolution and alias records
//!
//! Finds the hosted zone for the apex domain by linear scan and upserts
//! the pair of A-alias records pointing at the distribution's edge domain.
//! Upserts are idempotent: re-running with the same target is a no-op on
//! the provider side.

use crate::error::{AwsError, Result};
use aws_sdk_route53::error::{BuildError, DisplayErrorContext};
use aws_sdk_route53::types::{
    AliasTarget, Change, ChangeAction, ChangeBatch, HostedZone, ResourceRecordSet, RrType,
};

/// Fixed hosted-zone id Route53 assigns to every CloudFront edge
/// endpoint. A published constant, not discoverable through the API.
pub const CLOUDFRONT_ALIAS_ZONE_ID: &str = "Z2FDTNDATAQYW2";

pub struct DnsService {
    client: aws_sdk_route53::Client,
}

impl DnsService {
    pub fn new(client: aws_sdk_route53::Client) -> Self {
        Self { client }
    }

    /// Scan the account's zones for one whose name equals the apex domain
    /// after stripping the trailing dot. Absence is a normal negative
    /// result; callers decide how to react.
    pub async fn find_hosted_zone(&self, apex_domain: &str) -> Result<Option<String>> {
        let mut marker: Option<String> = None;

        loop {
            let mut request = self.client.list_hosted_zones();
            if let Some(marker) = &marker {
                request = request.marker(marker);
            }

            let response = request
                .send()
                .await
                .map_err(|err| AwsError::Dns(DisplayErrorContext(err).to_string()))?;

            if let Some(zone_id) = first_matching_zone(response.hosted_zones(), apex_domain) {
                return Ok(Some(zone_id));
            }

            match response.next_marker() {
                Some(next) => marker = Some(next.to_string()),
                None => {
                    tracing::debug!(domain = apex_domain, "no hosted zone matched");
                    return Ok(None);
                }
            }
        }
    }

    /// Upsert the apex and www alias records, both targeting the
    /// distribution's edge domain.
    pub async fn publish_alias_records(
        &self,
        zone_id: &str,
        apex_domain: &str,
        www_domain: &str,
        distribution_domain: &str,
    ) -> Result<()> {
        for record_name in [apex_domain, www_domain] {
            self.upsert_alias(zone_id, record_name, distribution_domain)
                .await?;
        }
        Ok(())
    }

    async fn upsert_alias(&self, zone_id: &str, record_name: &str, target: &str) -> Result<()> {
        let change = alias_upsert(record_name, target)?;

        self.client
            .change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(ChangeBatch::builder().changes(change).build()?)
            .send()
            .await
            .map_err(|err| AwsError::Dns(DisplayErrorContext(err).to_string()))?;

        tracing::info!(record = record_name, alias_target = target, "upserted alias record");
        Ok(())
    }
}

fn zone_matches(zone_name: &str, apex_domain: &str) -> bool {
    zone_name.trim_end_matches('.') == apex_domain
}

fn first_matching_zone(zones: &[HostedZone], apex_domain: &str) -> Option<String> {
    zones
        .iter()
        .find(|zone| zone_matches(zone.name(), apex_domain))
        .map(|zone| zone.id().to_string())
}

fn alias_upsert(record_name: &str, target: &str) -> std::result::Result<Change, BuildError> {
    Change::builder()
        .action(ChangeAction::Upsert)
        .resource_record_set(
            ResourceRecordSet::builder()
                .name(record_name)
                .r#type(RrType::A)
                .alias_target(
                    AliasTarget::builder()
                        .dns_name(target)
                        .evaluate_target_health(false)
                        .hosted_zone_id(CLOUDFRONT_ALIAS_ZONE_ID)
                        .build()?,
                )
                .build()?,
        )
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(id: &str, name: &str) -> HostedZone {
        HostedZone::builder()
            .id(id)
            .name(name)
            .caller_reference("test")
            .build()
            .unwrap()
    }

    #[test]
    fn matches_zone_name_after_trailing_dot_strip() {
        assert!(zone_matches("example.com.", "example.com"));
        assert!(zone_matches("example.com", "example.com"));
        assert!(!zone_matches("www.example.com.", "example.com"));
        assert!(!zone_matches("example.com.br.", "example.com"));
    }

    #[test]
    fn first_exact_match_wins() {
        let zones = vec![
            zone("/hostedzone/Z1", "other.org."),
            zone("/hostedzone/Z2", "example.com."),
            zone("/hostedzone/Z3", "example.com."),
        ];

        assert_eq!(
            first_matching_zone(&zones, "example.com").as_deref(),
            Some("/hostedzone/Z2")
        );
    }

    #[test]
    fn no_match_is_a_negative_result() {
        let zones = vec![zone("/hostedzone/Z1", "other.org.")];
        assert_eq!(first_matching_zone(&zones, "example.com"), None);
    }

    #[test]
    fn alias_change_upserts_an_a_record_at_the_cloudfront_zone() {
        let change = alias_upsert("example.com", "d123.cloudfront.net").unwrap();
        assert_eq!(change.action(), &ChangeAction::Upsert);

        let record_set = change.resource_record_set().unwrap();
        assert_eq!(record_set.name(), "example.com");
        assert_eq!(record_set.r#type(), &RrType::A);

        let alias = record_set.alias_target().unwrap();
        assert_eq!(alias.dns_name(), "d123.cloudfront.net");
        assert_eq!(alias.hosted_zone_id(), CLOUDFRONT_ALIAS_ZONE_ID);
        assert!(!alias.evaluate_target_health());
    }

    #[test]
    fn same_arguments_build_the_same_change() {
        let first = alias_upsert("www.example.com", "d123.cloudfront.net").unwrap();
        let second = alias_upsert("www.example.com", "d123.cloudfront.net").unwrap();
        assert_eq!(first, second);
    }
}
