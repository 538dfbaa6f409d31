//! Site configuration
//!
//! Immutable description of the site being provisioned. Created once at
//! startup from the CLI arguments and passed by reference through every
//! pipeline stage.

use crate::error::{DomainError, Result};
use serde::Serialize;

/// Derive the www subdomain for an apex domain.
pub fn www_domain(apex: &str) -> String {
    format!("www.{apex}")
}

/// Immutable configuration for one site deployment.
///
/// The bucket name is tied 1:1 to the apex domain; there is no collision
/// handling beyond the provider treating "already owned by caller" as
/// success.
#[derive(Debug, Clone, Serialize)]
pub struct SiteConfig {
    /// Root registrable domain, e.g. `example.com`
    pub apex_domain: String,

    /// Derived `www.` subdomain
    pub www_domain: String,

    /// Storage bucket name (equals the apex domain)
    pub bucket_name: String,

    /// Provider credential profile, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Provider region override, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl SiteConfig {
    pub fn new(
        domain: impl Into<String>,
        profile: Option<String>,
        region: Option<String>,
    ) -> Result<Self> {
        let apex = domain.into();
        validate_domain(&apex)?;

        Ok(Self {
            www_domain: www_domain(&apex),
            bucket_name: apex.clone(),
            apex_domain: apex,
            profile,
            region,
        })
    }
}

fn validate_domain(domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(DomainError::EmptyDomain);
    }

    let looks_wrong = !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || domain.contains("://")
        || domain.contains('/')
        || domain.chars().any(char::is_whitespace);

    if looks_wrong {
        return Err(DomainError::InvalidDomain(domain.to_string()));
    }

    Ok(())
}
