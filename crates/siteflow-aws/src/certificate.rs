//! TLS certificate requests
//!
//! One certificate covers the apex and www domains, validated over DNS.
//! Issuance is not awaited: the operator validates out of band and the
//! required records are only ever reported for display.

use crate::error::{AwsError, Result};
use aws_sdk_acm::error::DisplayErrorContext;
use aws_sdk_acm::types::{CertificateDetail, Tag, ValidationMethod};
use siteflow_core::ValidationRecord;

pub struct CertificateService {
    client: aws_sdk_acm::Client,
}

impl CertificateService {
    pub fn new(client: aws_sdk_acm::Client) -> Self {
        Self { client }
    }

    /// Request one certificate with the apex domain as subject and the www
    /// domain as alternative name. Returns the certificate ARN without
    /// waiting for issuance.
    pub async fn request(&self, apex_domain: &str, www_domain: &str) -> Result<String> {
        tracing::info!(domain = apex_domain, "requesting TLS certificate");

        let name_tag = Tag::builder()
            .key("Name")
            .value(format!("{apex_domain} site certificate"))
            .build()?;
        let purpose_tag = Tag::builder()
            .key("Purpose")
            .value("static-site")
            .build()?;

        let response = self
            .client
            .request_certificate()
            .domain_name(apex_domain)
            .subject_alternative_names(www_domain)
            .validation_method(ValidationMethod::Dns)
            .tags(name_tag)
            .tags(purpose_tag)
            .send()
            .await
            .map_err(|err| AwsError::Certificate(DisplayErrorContext(err).to_string()))?;

        response
            .certificate_arn()
            .map(str::to_string)
            .ok_or(AwsError::MissingField("certificate ARN"))
    }

    /// DNS records the operator must create for validation.
    ///
    /// Degrades to an empty list on any error; the records may simply not
    /// exist yet right after the request.
    pub async fn validation_records(&self, certificate_arn: &str) -> Vec<ValidationRecord> {
        match self.describe(certificate_arn).await {
            Ok(detail) => records_from(&detail),
            Err(err) => {
                tracing::warn!(error = %err, "could not fetch certificate validation records");
                Vec::new()
            }
        }
    }

    /// Provider-reported certificate status string, e.g.
    /// `PENDING_VALIDATION` or `ISSUED`.
    pub async fn status(&self, certificate_arn: &str) -> Result<String> {
        let detail = self.describe(certificate_arn).await?;
        detail
            .status()
            .map(|status| status.as_str().to_string())
            .ok_or(AwsError::MissingField("certificate status"))
    }

    async fn describe(&self, certificate_arn: &str) -> Result<CertificateDetail> {
        let response = self
            .client
            .describe_certificate()
            .certificate_arn(certificate_arn)
            .send()
            .await
            .map_err(|err| AwsError::Certificate(DisplayErrorContext(err).to_string()))?;

        response
            .certificate
            .ok_or(AwsError::MissingField("certificate detail"))
    }
}

fn records_from(detail: &CertificateDetail) -> Vec<ValidationRecord> {
    detail
        .domain_validation_options()
        .iter()
        .filter_map(|option| {
            let record = option.resource_record()?;
            Some(ValidationRecord {
                domain: option.domain_name().to_string(),
                record_name: record.name().to_string(),
                record_value: record.value().to_string(),
                record_type: record.r#type().as_str().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_acm::types::{DomainValidation, RecordType, ResourceRecord};

    fn validation(domain: &str, with_record: bool) -> DomainValidation {
        let mut builder = DomainValidation::builder().domain_name(domain);
        if with_record {
            builder = builder.resource_record(
                ResourceRecord::builder()
                    .name(format!("_abc123.{domain}."))
                    .r#type(RecordType::Cname)
                    .value("_xyz.acm-validations.aws.")
                    .build()
                    .unwrap(),
            );
        }
        builder.build().unwrap()
    }

    #[test]
    fn extracts_one_record_per_validation_option() {
        let detail = CertificateDetail::builder()
            .domain_validation_options(validation("example.com", true))
            .domain_validation_options(validation("www.example.com", true))
            .build();

        let records = records_from(&detail);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].domain, "example.com");
        assert_eq!(records[0].record_name, "_abc123.example.com.");
        assert_eq!(records[0].record_type, "CNAME");
        assert_eq!(records[1].domain, "www.example.com");
    }

    #[test]
    fn skips_options_without_resource_record() {
        let detail = CertificateDetail::builder()
            .domain_validation_options(validation("example.com", false))
            .build();

        assert!(records_from(&detail).is_empty());
    }
}
