//! Provisioning pipeline
//!
//! Fixed entry points over the service modules, threading one mutable
//! [`ResourceLedger`] through the stages. Each stage depends on the
//! previous stage's output; the first hard failure halts the run and
//! names the step. Cross-stage identifiers are always read back from the
//! ledger so a re-run with different naming cannot drift.

use crate::bucket::BucketService;
use crate::certificate::CertificateService;
use crate::clients::AwsClients;
use crate::distribution::DistributionService;
use crate::dns::DnsService;
use crate::error::{AtStep, AwsError, StageError};
use crate::policy::PolicyBinder;
use siteflow_core::{
    ActivateOutcome, BucketState, DeployOutcome, ResourceLedger, SiteConfig, StatusSnapshot, Step,
};

const PENDING_VALIDATION: &str = "PENDING_VALIDATION";

pub struct Orchestrator {
    config: SiteConfig,
    region: String,
    bucket: BucketService,
    certificate: CertificateService,
    distribution: DistributionService,
    policy: PolicyBinder,
    dns: DnsService,
    ledger: ResourceLedger,
}

impl Orchestrator {
    /// Build the client bundle from the config's profile/region selectors
    /// and wire up the service modules.
    pub async fn connect(config: SiteConfig) -> Self {
        let clients =
            AwsClients::connect(config.profile.as_deref(), config.region.as_deref()).await;
        Self::with_clients(config, clients)
    }

    pub fn with_clients(config: SiteConfig, clients: AwsClients) -> Self {
        let region = clients.region().to_string();
        Self {
            bucket: BucketService::new(clients.s3.clone(), region.clone()),
            certificate: CertificateService::new(clients.acm.clone()),
            distribution: DistributionService::new(clients.cloudfront.clone()),
            policy: PolicyBinder::new(clients.s3.clone(), clients.sts.clone()),
            dns: DnsService::new(clients.route53.clone()),
            region,
            config,
            ledger: ResourceLedger::new(),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    /// Re-supply identifiers captured in a previous invocation. The
    /// ledger is process-local and never persisted, so resuming a partial
    /// deployment starts here.
    pub fn restore(&mut self, certificate_arn: Option<String>, distribution_id: Option<String>) {
        if let Some(arn) = certificate_arn {
            self.ledger.certificate_arn = Some(arn);
        }
        if let Some(id) = distribution_id {
            self.ledger.distribution_id = Some(id);
        }
    }

    /// Stages 1-2: ensure the bucket, request the certificate, then halt.
    /// Certificate validation is a manual operator step; the outcome
    /// carries the DNS records it requires.
    pub async fn deploy(&mut self) -> Result<DeployOutcome, StageError> {
        self.bucket
            .ensure(&self.config.bucket_name)
            .await
            .at(Step::Bucket)?;
        self.ledger.record_bucket(&self.config.bucket_name);

        let certificate_arn = self
            .certificate
            .request(&self.config.apex_domain, &self.config.www_domain)
            .await
            .at(Step::Certificate)?;
        self.ledger.record_certificate(&certificate_arn);

        // May be empty this early; the authority takes a moment to
        // produce them.
        let validation_records = self.certificate.validation_records(&certificate_arn).await;

        Ok(DeployOutcome {
            bucket_name: self.config.bucket_name.clone(),
            certificate_arn,
            validation_records,
        })
    }

    /// Stages 4-6: distribution, bucket policy, DNS records. Requires the
    /// certificate ARN from `deploy`, validated out of band.
    pub async fn activate(&mut self, certificate_arn: &str) -> Result<ActivateOutcome, StageError> {
        self.ledger.record_bucket(&self.config.bucket_name);
        self.ledger.record_certificate(certificate_arn);

        let certificate_arn =
            ledger_entry(&self.ledger.certificate_arn, "certificate ARN", Step::Distribution)?;
        let (distribution_id, distribution_domain) = self
            .distribution
            .create(&self.config, &self.region, &certificate_arn)
            .await
            .at(Step::Distribution)?;
        self.ledger
            .record_distribution(&distribution_id, &distribution_domain);

        // The distribution denies all reads until the bucket policy
        // names it.
        let bucket = ledger_entry(&self.ledger.bucket, "bucket name", Step::BucketPolicy)?;
        let distribution_id =
            ledger_entry(&self.ledger.distribution_id, "distribution id", Step::BucketPolicy)?;
        self.policy
            .bind(&bucket, &distribution_id)
            .await
            .at(Step::BucketPolicy)?;

        let zone_id = self
            .dns
            .find_hosted_zone(&self.config.apex_domain)
            .await
            .at(Step::DnsRecords)?
            .ok_or_else(|| {
                StageError::new(
                    Step::DnsRecords,
                    AwsError::ZoneNotFound(self.config.apex_domain.clone()),
                )
            })?;
        self.ledger.record_hosted_zone(&zone_id);

        let edge_domain = ledger_entry(
            &self.ledger.distribution_domain,
            "distribution domain",
            Step::DnsRecords,
        )?;
        self.dns
            .publish_alias_records(
                &zone_id,
                &self.config.apex_domain,
                &self.config.www_domain,
                &edge_domain,
            )
            .await
            .at(Step::DnsRecords)?;

        Ok(ActivateOutcome {
            distribution_id,
            distribution_domain: edge_domain,
            hosted_zone_id: zone_id,
        })
    }

    /// Stage 7, runnable on its own: write the placeholder page.
    pub async fn upload_sample(&self) -> Result<(), StageError> {
        self.bucket
            .upload_placeholder(&self.config.bucket_name, &self.config.apex_domain)
            .await
            .at(Step::SampleContent)
    }

    /// Re-query each known resource's live state. Sub-query failures
    /// degrade their one field to an `"error"` marker; the snapshot
    /// itself always comes back.
    pub async fn status(&self) -> StatusSnapshot {
        let bucket = if self.bucket.exists(&self.config.bucket_name).await {
            BucketState::Exists
        } else {
            BucketState::Missing
        };

        let mut certificate_status = None;
        let mut pending_validation = Vec::new();
        if let Some(arn) = &self.ledger.certificate_arn {
            match self.certificate.status(arn).await {
                Ok(status) => {
                    if status == PENDING_VALIDATION {
                        pending_validation = self.certificate.validation_records(arn).await;
                    }
                    certificate_status = Some(status);
                }
                Err(err) => {
                    tracing::warn!(error = %err, "certificate status query failed");
                    certificate_status = Some("error".to_string());
                }
            }
        }

        let mut distribution_status = None;
        if let Some(id) = &self.ledger.distribution_id {
            distribution_status = Some(match self.distribution.status(id).await {
                Ok(status) => status,
                Err(err) => {
                    tracing::warn!(error = %err, "distribution status query failed");
                    "error".to_string()
                }
            });
        }

        StatusSnapshot {
            domain: self.config.apex_domain.clone(),
            resources: self.ledger.clone(),
            bucket,
            certificate_status,
            distribution_status,
            pending_validation,
        }
    }
}

fn ledger_entry(
    slot: &Option<String>,
    field: &'static str,
    step: Step,
) -> Result<String, StageError> {
    slot.clone()
        .ok_or_else(|| StageError::new(step, AwsError::MissingField(field)))
}
