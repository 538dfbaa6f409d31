//! Storage bucket provisioning
//!
//! The bucket is never directly public: versioning is enabled and all four
//! public-access block flags are set at creation, so every read has to flow
//! through the content-delivery layer.

use crate::content::placeholder_html;
use crate::error::{AwsError, Result};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{
    BucketLocationConstraint, BucketVersioningStatus, CreateBucketConfiguration,
    PublicAccessBlockConfiguration, VersioningConfiguration,
};

/// How `ensure` satisfied the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketCreation {
    Created,
    AlreadyOwned,
}

pub struct BucketService {
    client: aws_sdk_s3::Client,
    region: String,
}

impl BucketService {
    pub fn new(client: aws_sdk_s3::Client, region: impl Into<String>) -> Self {
        Self {
            client,
            region: region.into(),
        }
    }

    /// Create the bucket if this account does not already own it.
    ///
    /// "Already owned by caller" is success, and on that path the
    /// versioning / public-access settings are left as they are.
    pub async fn ensure(&self, name: &str) -> Result<BucketCreation> {
        tracing::info!(bucket = name, "creating storage bucket");

        let mut request = self.client.create_bucket().bucket(name);
        // us-east-1 is the one region the API rejects as an explicit
        // location constraint.
        if self.region != "us-east-1" {
            request = request.create_bucket_configuration(
                CreateBucketConfiguration::builder()
                    .location_constraint(BucketLocationConstraint::from(self.region.as_str()))
                    .build(),
            );
        }

        match request.send().await {
            Ok(_) => {}
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_bucket_already_owned_by_you()) =>
            {
                tracing::info!(bucket = name, "bucket already owned by this account");
                return Ok(BucketCreation::AlreadyOwned);
            }
            Err(err) => return Err(AwsError::Storage(DisplayErrorContext(err).to_string())),
        }

        self.client
            .put_bucket_versioning()
            .bucket(name)
            .versioning_configuration(
                VersioningConfiguration::builder()
                    .status(BucketVersioningStatus::Enabled)
                    .build(),
            )
            .send()
            .await
            .map_err(|err| AwsError::Storage(DisplayErrorContext(err).to_string()))?;

        self.client
            .put_public_access_block()
            .bucket(name)
            .public_access_block_configuration(
                PublicAccessBlockConfiguration::builder()
                    .block_public_acls(true)
                    .ignore_public_acls(true)
                    .block_public_policy(true)
                    .restrict_public_buckets(true)
                    .build(),
            )
            .send()
            .await
            .map_err(|err| AwsError::Storage(DisplayErrorContext(err).to_string()))?;

        Ok(BucketCreation::Created)
    }

    /// Presence probe used by the status query.
    pub async fn exists(&self, name: &str) -> bool {
        match self.client.head_bucket().bucket(name).send().await {
            Ok(_) => true,
            Err(err) => {
                tracing::debug!(bucket = name, error = %DisplayErrorContext(err), "bucket probe failed");
                false
            }
        }
    }

    /// Write the placeholder `index.html`. Overwrites freely.
    pub async fn upload_placeholder(&self, name: &str, apex_domain: &str) -> Result<()> {
        let body = placeholder_html(apex_domain);

        self.client
            .put_object()
            .bucket(name)
            .key("index.html")
            .content_type("text/html")
            .body(ByteStream::from(body.into_bytes()))
            .send()
            .await
            .map_err(|err| AwsError::Storage(DisplayErrorContext(err).to_string()))?;

        tracing::info!(bucket = name, "uploaded placeholder index.html");
        Ok(())
    }
}
