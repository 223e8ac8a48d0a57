//! Blob storage client module
//!
//! Thin wrapper around the S3 SDK for the three object operations the worker
//! needs: read the source object, write the summary JSON, tag the source.

use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Tag, Tagging};
use tracing::debug;

use crate::core::models::BlobPath;
use crate::errors::SummarizeError;

pub struct BlobClient {
    client: Client,
}

impl BlobClient {
    /// Build a fresh client from the ambient AWS environment. Each invocation
    /// constructs its own; nothing is shared across invocations.
    pub async fn new() -> Self {
        let sdk_config = aws_config::load_from_env().await;
        Self {
            client: Client::new(&sdk_config),
        }
    }

    /// Read the full byte content of the source object.
    pub async fn fetch(&self, path: &BlobPath) -> Result<Vec<u8>, SummarizeError> {
        let response = self
            .client
            .get_object()
            .bucket(&path.container)
            .key(&path.key)
            .send()
            .await?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| SummarizeError::StorageError(format!("Failed to read object body: {}", e)))?
            .to_vec();

        debug!("Fetched {}/{} ({} bytes)", path.container, path.key, data.len());
        Ok(data)
    }

    /// Write `body` as a JSON object at `container/key`, overwriting
    /// unconditionally.
    pub async fn put_json(
        &self,
        container: &str,
        key: &str,
        body: String,
    ) -> Result<(), SummarizeError> {
        self.client
            .put_object()
            .bucket(container)
            .key(key)
            .content_type("application/json")
            .body(ByteStream::from(body.into_bytes()))
            .send()
            .await?;
        Ok(())
    }

    /// Replace the tag set on the object at `path`. The caller decides whether
    /// a failure here matters; this method only reports it.
    pub async fn set_tags(
        &self,
        path: &BlobPath,
        tags: &[(&str, String)],
    ) -> Result<(), SummarizeError> {
        let mut tagging = Tagging::builder();
        for (key, value) in tags {
            let tag = Tag::builder()
                .key(*key)
                .value(value)
                .build()
                .map_err(|e| SummarizeError::StorageError(format!("Invalid tag: {}", e)))?;
            tagging = tagging.tag_set(tag);
        }
        let tagging = tagging
            .build()
            .map_err(|e| SummarizeError::StorageError(format!("Invalid tag set: {}", e)))?;

        self.client
            .put_object_tagging()
            .bucket(&path.container)
            .key(&path.key)
            .tagging(tagging)
            .send()
            .await?;
        Ok(())
    }
}
