//! Content-delivery distribution provisioning
//!
//! Creates an origin access control and a distribution serving the bucket
//! through it. The distribution stays non-functional until the bucket
//! policy is bound to it, so creation is always followed by the policy
//! stage. Deployment completion is not polled; the provider reports
//! `InProgress` for 15-20 minutes and the operator checks `status`.

use crate::error::{AwsError, Result};
use aws_sdk_cloudfront::error::{BuildError, DisplayErrorContext};
use aws_sdk_cloudfront::types::{
    Aliases, CookiePreference, DefaultCacheBehavior, DistributionConfig, ForwardedValues,
    ItemSelection, MinimumProtocolVersion, Origin, OriginAccessControlConfig,
    OriginAccessControlOriginTypes, OriginAccessControlSigningBehaviors,
    OriginAccessControlSigningProtocols, Origins, PriceClass, S3OriginConfig, SslSupportMethod,
    TrustedSigners, ViewerCertificate, ViewerProtocolPolicy,
};
use chrono::Utc;
use siteflow_core::SiteConfig;

pub struct DistributionService {
    client: aws_sdk_cloudfront::Client,
}

impl DistributionService {
    pub fn new(client: aws_sdk_cloudfront::Client) -> Self {
        Self { client }
    }

    /// Create the access control and the distribution. Returns the
    /// provider-assigned distribution id and its edge domain name.
    pub async fn create(
        &self,
        site: &SiteConfig,
        region: &str,
        certificate_arn: &str,
    ) -> Result<(String, String)> {
        let oac_id = self.create_access_control(site).await?;

        let caller_reference = format!("{}-{}", site.apex_domain, Utc::now().timestamp());
        let config = distribution_config(site, region, &oac_id, certificate_arn, &caller_reference)?;

        tracing::info!(domain = %site.apex_domain, "creating distribution");
        let response = self
            .client
            .create_distribution()
            .distribution_config(config)
            .send()
            .await
            .map_err(|err| AwsError::Distribution(DisplayErrorContext(err).to_string()))?;

        let distribution = response
            .distribution()
            .ok_or(AwsError::MissingField("distribution"))?;

        Ok((
            distribution.id().to_string(),
            distribution.domain_name().to_string(),
        ))
    }

    /// Provider-reported distribution status string, e.g. `InProgress` or
    /// `Deployed`.
    pub async fn status(&self, distribution_id: &str) -> Result<String> {
        let response = self
            .client
            .get_distribution()
            .id(distribution_id)
            .send()
            .await
            .map_err(|err| AwsError::Distribution(DisplayErrorContext(err).to_string()))?;

        let distribution = response
            .distribution()
            .ok_or(AwsError::MissingField("distribution"))?;
        Ok(distribution.status().to_string())
    }

    async fn create_access_control(&self, site: &SiteConfig) -> Result<String> {
        let config = OriginAccessControlConfig::builder()
            .name(format!("{}-oac", site.apex_domain))
            .description(format!("Origin access control for {}", site.apex_domain))
            .signing_protocol(OriginAccessControlSigningProtocols::Sigv4)
            .signing_behavior(OriginAccessControlSigningBehaviors::Always)
            .origin_access_control_origin_type(OriginAccessControlOriginTypes::S3)
            .build()?;

        let response = self
            .client
            .create_origin_access_control()
            .origin_access_control_config(config)
            .send()
            .await
            .map_err(|err| AwsError::Distribution(DisplayErrorContext(err).to_string()))?;

        let access_control = response
            .origin_access_control()
            .ok_or(AwsError::MissingField("origin access control"))?;
        Ok(access_control.id().to_string())
    }
}

/// Build the full distribution configuration for a site.
///
/// Static content only: HTTPS is forced on the viewer side and neither
/// query strings nor cookies reach the origin.
fn distribution_config(
    site: &SiteConfig,
    region: &str,
    oac_id: &str,
    certificate_arn: &str,
    caller_reference: &str,
) -> std::result::Result<DistributionConfig, BuildError> {
    let origin_id = format!("{}-origin", site.bucket_name);
    let origin_domain = format!("{}.s3.{}.amazonaws.com", site.bucket_name, region);

    // The legacy origin-access-identity field stays empty: the identity
    // and access-control mechanisms are mutually exclusive, and this
    // configuration always uses the newer one.
    let origin = Origin::builder()
        .id(&origin_id)
        .domain_name(origin_domain)
        .s3_origin_config(
            S3OriginConfig::builder()
                .origin_access_identity("")
                .build(),
        )
        .origin_access_control_id(oac_id)
        .build()?;

    let cache_behavior = DefaultCacheBehavior::builder()
        .target_origin_id(&origin_id)
        .viewer_protocol_policy(ViewerProtocolPolicy::RedirectToHttps)
        .min_ttl(0)
        .forwarded_values(
            ForwardedValues::builder()
                .query_string(false)
                .cookies(
                    CookiePreference::builder()
                        .forward(ItemSelection::None)
                        .build()?,
                )
                .build()?,
        )
        .trusted_signers(TrustedSigners::builder().enabled(false).quantity(0).build()?)
        .build()?;

    DistributionConfig::builder()
        .caller_reference(caller_reference)
        .comment(format!("Static site distribution for {}", site.apex_domain))
        .default_root_object("index.html")
        .origins(Origins::builder().quantity(1).items(origin).build()?)
        .default_cache_behavior(cache_behavior)
        .enabled(true)
        .aliases(
            Aliases::builder()
                .quantity(2)
                .items(&site.apex_domain)
                .items(&site.www_domain)
                .build()?,
        )
        .viewer_certificate(
            ViewerCertificate::builder()
                .acm_certificate_arn(certificate_arn)
                .ssl_support_method(SslSupportMethod::SniOnly)
                .minimum_protocol_version(MinimumProtocolVersion::TlSv122021)
                .build(),
        )
        // North America + Europe edge locations only
        .price_class(PriceClass::PriceClass100)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> DistributionConfig {
        let site = SiteConfig::new("example.com", None, None).unwrap();
        distribution_config(
            &site,
            "us-east-1",
            "EOAC123",
            "arn:aws:acm:us-east-1:123456789012:certificate/abc",
            "example.com-1700000000",
        )
        .unwrap()
    }

    #[test]
    fn aliases_cover_apex_and_www_exactly() {
        let config = sample_config();
        let aliases = config.aliases().unwrap();
        assert_eq!(aliases.items(), ["example.com", "www.example.com"]);
        assert_eq!(config.default_root_object(), Some("index.html"));
    }

    #[test]
    fn forces_https_and_strips_request_variation() {
        let config = sample_config();
        let behavior = config.default_cache_behavior().unwrap();
        assert_eq!(
            behavior.viewer_protocol_policy(),
            &ViewerProtocolPolicy::RedirectToHttps
        );

        let forwarded = behavior.forwarded_values().unwrap();
        assert!(!forwarded.query_string());
        assert_eq!(forwarded.cookies().unwrap().forward(), &ItemSelection::None);
    }

    #[test]
    fn viewer_certificate_pins_sni_and_tls_floor() {
        let config = sample_config();
        let certificate = config.viewer_certificate().unwrap();
        assert_eq!(
            certificate.acm_certificate_arn(),
            Some("arn:aws:acm:us-east-1:123456789012:certificate/abc")
        );
        assert_eq!(
            certificate.ssl_support_method(),
            Some(&SslSupportMethod::SniOnly)
        );
        assert_eq!(
            certificate.minimum_protocol_version(),
            Some(&MinimumProtocolVersion::TlSv122021)
        );
        assert_eq!(config.price_class(), Some(&PriceClass::PriceClass100));
    }

    #[test]
    fn origin_targets_regional_bucket_endpoint_through_access_control() {
        let site = SiteConfig::new("example.com", None, None).unwrap();
        let config = distribution_config(
            &site,
            "eu-west-1",
            "EOAC123",
            "arn:aws:acm:us-east-1:123456789012:certificate/abc",
            "example.com-1700000000",
        )
        .unwrap();

        let origin = &config.origins().unwrap().items()[0];
        assert_eq!(origin.domain_name(), "example.com.s3.eu-west-1.amazonaws.com");
        assert_eq!(origin.origin_access_control_id(), Some("EOAC123"));
        assert_eq!(
            origin.s3_origin_config().unwrap().origin_access_identity(),
            ""
        );
    }
}
