//! Bucket policy binding
//!
//! Grants the content-delivery service read access to the bucket, scoped
//! to one specific distribution in this account. Binding fully replaces
//! the bucket's policy document: this is a single-statement policy and
//! pre-existing custom statements are not merged (known limitation).

use crate::error::{AwsError, Result};
use aws_sdk_s3::error::DisplayErrorContext;

/// The single-statement policy allowing the CDN to read objects, keyed to
/// the exact source distribution.
pub fn policy_document(
    bucket: &str,
    account_id: &str,
    distribution_id: &str,
) -> serde_json::Value {
    serde_json::json!({
        "Version": "2012-10-17",
        "Statement": [
            {
                "Effect": "Allow",
                "Principal": {
                    "Service": "cloudfront.amazonaws.com"
                },
                "Action": "s3:GetObject",
                "Resource": format!("arn:aws:s3:::{bucket}/*"),
                "Condition": {
                    "StringEquals": {
                        "AWS:SourceArn": format!(
                            "arn:aws:cloudfront::{account_id}:distribution/{distribution_id}"
                        )
                    }
                }
            }
        ]
    })
}

pub struct PolicyBinder {
    s3: aws_sdk_s3::Client,
    sts: aws_sdk_sts::Client,
}

impl PolicyBinder {
    pub fn new(s3: aws_sdk_s3::Client, sts: aws_sdk_sts::Client) -> Self {
        Self { s3, sts }
    }

    /// Overwrite the bucket policy so reads flow only from the given
    /// distribution. Resolves the caller's account id first, since the policy
    /// condition needs the full distribution ARN.
    pub async fn bind(&self, bucket: &str, distribution_id: &str) -> Result<()> {
        let account_id = self.account_id().await?;
        let document = policy_document(bucket, &account_id, distribution_id);
        let policy = serde_json::to_string(&document)?;

        self.s3
            .put_bucket_policy()
            .bucket(bucket)
            .policy(policy)
            .send()
            .await
            .map_err(|err| AwsError::Storage(DisplayErrorContext(err).to_string()))?;

        tracing::info!(bucket, distribution = distribution_id, "bound bucket policy");
        Ok(())
    }

    async fn account_id(&self) -> Result<String> {
        let identity = self
            .sts
            .get_caller_identity()
            .send()
            .await
            .map_err(|err| AwsError::Identity(DisplayErrorContext(err).to_string()))?;

        identity
            .account()
            .map(str::to_string)
            .ok_or(AwsError::MissingField("account id"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_grants_cdn_read_scoped_to_distribution() {
        let document = policy_document("example.com", "123456789012", "E2EXAMPLE");

        assert_eq!(document["Version"], "2012-10-17");
        let statements = document["Statement"].as_array().unwrap();
        assert_eq!(statements.len(), 1);

        let statement = &statements[0];
        assert_eq!(statement["Effect"], "Allow");
        assert_eq!(statement["Principal"]["Service"], "cloudfront.amazonaws.com");
        assert_eq!(statement["Action"], "s3:GetObject");
        assert_eq!(statement["Resource"], "arn:aws:s3:::example.com/*");
        assert_eq!(
            statement["Condition"]["StringEquals"]["AWS:SourceArn"],
            "arn:aws:cloudfront::123456789012:distribution/E2EXAMPLE"
        );
    }

    #[test]
    fn policy_condition_tracks_the_given_distribution() {
        let first = policy_document("example.com", "123456789012", "E1AAA");
        let second = policy_document("example.com", "123456789012", "E2BBB");
        assert_ne!(
            first["Statement"][0]["Condition"],
            second["Statement"][0]["Condition"]
        );
    }
}
