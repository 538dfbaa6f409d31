pub mod activate;
pub mod deploy;
pub mod status;
pub mod upload;

use siteflow_aws::Orchestrator;
use siteflow_core::SiteConfig;

/// Validate the domain and connect the provider clients.
pub(crate) async fn orchestrator(
    domain: &str,
    profile: Option<String>,
    region: Option<String>,
) -> anyhow::Result<Orchestrator> {
    let config = SiteConfig::new(domain, profile, region)?;
    Ok(Orchestrator::connect(config).await)
}
