//! AWS provider for siteflow
//!
//! Implements the static-site hosting pipeline against AWS: an S3 bucket
//! for content, an ACM certificate, a CloudFront distribution with an
//! origin access control, a bucket policy scoped to that distribution, and
//! Route53 alias records.
//!
//! The pipeline is strictly sequential: every stage depends on the
//! previous stage's output, captured in a [`ResourceLedger`]. Nothing here
//! retries or polls: certificate validation and distribution deployment
//! are manual operator gates, reported rather than awaited.
//!
//! # Example
//!
//! ```ignore
//! use siteflow_aws::Orchestrator;
//! use siteflow_core::SiteConfig;
//!
//! let config = SiteConfig::new("example.com", None, None)?;
//! let mut orchestrator = Orchestrator::connect(config).await;
//!
//! // Stage 1-2: bucket + certificate request, then halt for validation
//! let outcome = orchestrator.deploy().await?;
//! println!("validate certificate {}", outcome.certificate_arn);
//!
//! // Later, once the certificate is issued:
//! let activated = orchestrator.activate(&outcome.certificate_arn).await?;
//! println!("serving at {}", activated.distribution_domain);
//! ```

pub mod bucket;
pub mod certificate;
pub mod clients;
pub mod content;
pub mod distribution;
pub mod dns;
pub mod error;
pub mod orchestrator;
pub mod policy;

pub use bucket::{BucketCreation, BucketService};
pub use certificate::CertificateService;
pub use clients::AwsClients;
pub use distribution::DistributionService;
pub use dns::{CLOUDFRONT_ALIAS_ZONE_ID, DnsService};
pub use error::{AwsError, Result, StageError};
pub use orchestrator::Orchestrator;
pub use policy::PolicyBinder;
