//! Provider API client bundle

use aws_config::{BehaviorVersion, Region};

/// Region certificates must be issued in to be usable by CloudFront.
const ACM_REGION: &str = "us-east-1";

const DEFAULT_REGION: &str = "us-east-1";

/// One client per provider service, built from a single shared
/// configuration load.
///
/// The ACM client is pinned to us-east-1 regardless of the selected
/// region; everything else follows the profile/region selectors.
pub struct AwsClients {
    pub s3: aws_sdk_s3::Client,
    pub cloudfront: aws_sdk_cloudfront::Client,
    pub route53: aws_sdk_route53::Client,
    pub acm: aws_sdk_acm::Client,
    pub sts: aws_sdk_sts::Client,
    region: String,
}

impl AwsClients {
    pub async fn connect(profile: Option<&str>, region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(profile) = profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let shared = loader.load().await;

        let region = shared
            .region()
            .map(|r| r.as_ref().to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        tracing::debug!(%region, profile = ?profile, "connected AWS clients");

        let acm_config = aws_sdk_acm::config::Builder::from(&shared)
            .region(Region::new(ACM_REGION))
            .build();

        Self {
            s3: aws_sdk_s3::Client::new(&shared),
            cloudfront: aws_sdk_cloudfront::Client::new(&shared),
            route53: aws_sdk_route53::Client::new(&shared),
            acm: aws_sdk_acm::Client::from_conf(acm_config),
            sts: aws_sdk_sts::Client::new(&shared),
            region,
        }
    }

    /// Resolved region the storage bucket lives in.
    pub fn region(&self) -> &str {
        &self.region
    }
}
