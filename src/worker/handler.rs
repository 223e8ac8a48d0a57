use lambda_runtime::{Error, LambdaEvent};
use percent_encoding::percent_decode_str;
use serde_json::Value;
use tracing::{info, warn};

use super::extract;
use crate::clients::{BlobClient, LlmClient};
use crate::core::config::AppConfig;
use crate::core::models::BlobPath;
use crate::errors::SummarizeError;

/// Pull the bucket name and object key out of a bucket-notification payload
/// and join them into the full `container/key` path.
///
/// Notification keys arrive URL-encoded, with `+` standing in for spaces.
fn blob_path_from_event(payload: &Value) -> Result<String, Error> {
    let record = payload
        .get("Records")
        .and_then(|records| records.as_array())
        .and_then(|records| records.first())
        .ok_or_else(|| Error::from("No records in event payload"))?;

    let bucket = record
        .get("s3")
        .and_then(|s3| s3.get("bucket"))
        .and_then(|bucket| bucket.get("name"))
        .and_then(|name| name.as_str())
        .ok_or_else(|| Error::from("Missing bucket name in event record"))?;

    let raw_key = record
        .get("s3")
        .and_then(|s3| s3.get("object"))
        .and_then(|object| object.get("key"))
        .and_then(|key| key.as_str())
        .ok_or_else(|| Error::from("Missing object key in event record"))?;

    let key = percent_decode_str(&raw_key.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned();

    Ok(format!("{}/{}", bucket, key))
}

/// Lambda handler for one blob-created event: extract, summarize, write the
/// summary JSON, then tag the source blob.
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<(), Error> {
    info!("Worker received blob-created event: {:?}", event.payload);

    let full_path = blob_path_from_event(&event.payload)?;
    let path = BlobPath::parse(&full_path)?;
    info!("Processing blob {}/{}", path.container, path.key);

    let blob_client = BlobClient::new().await;
    let content = blob_client.fetch(&path).await?;

    let text = extract::extract_text(path.filename(), &content)?;
    let summary = LlmClient::new(config).summarize_text(&text).await?;

    let out_key = path.output_key(&config.output_prefix);
    let body = serde_json::to_string_pretty(&summary).map_err(SummarizeError::from)?;
    blob_client.put_json(&path.container, &out_key, body).await?;

    let tags = [
        ("ai", "summarized".to_string()),
        ("length", text.chars().count().to_string()),
    ];
    settle_tagging(blob_client.set_tags(&path, &tags).await)?;

    info!("Wrote {}", out_key);
    Ok(())
}

/// Tagging is best-effort: the summary is already written by the time tags are
/// set, so a failure here is logged and discarded, never propagated.
fn settle_tagging(result: Result<(), SummarizeError>) -> Result<(), SummarizeError> {
    if let Err(e) = result {
        warn!("Tagging failed: {}", e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn notification(bucket: &str, key: &str) -> Value {
        json!({
            "Records": [{
                "eventName": "ObjectCreated:Put",
                "s3": {
                    "bucket": { "name": bucket },
                    "object": { "key": key }
                }
            }]
        })
    }

    #[test]
    fn joins_bucket_and_key_into_full_path() {
        let payload = notification("docs", "report.pdf");
        assert_eq!(blob_path_from_event(&payload).unwrap(), "docs/report.pdf");
    }

    #[test]
    fn decodes_url_encoded_keys() {
        let payload = notification("docs", "my+folder/q3%28final%29.docx");
        assert_eq!(
            blob_path_from_event(&payload).unwrap(),
            "docs/my folder/q3(final).docx"
        );
    }

    #[test]
    fn missing_records_is_an_error() {
        assert!(blob_path_from_event(&json!({})).is_err());
        assert!(blob_path_from_event(&json!({ "Records": [] })).is_err());
    }

    #[test]
    fn missing_object_key_is_an_error() {
        let payload = json!({
            "Records": [{ "s3": { "bucket": { "name": "docs" } } }]
        });
        assert!(blob_path_from_event(&payload).is_err());
    }

    #[test]
    fn tagging_failure_does_not_fail_the_invocation() {
        let denied = Err(SummarizeError::StorageError("access denied".to_string()));
        assert!(settle_tagging(denied).is_ok());
        assert!(settle_tagging(Ok(())).is_ok());
    }

    #[test]
    fn event_path_flows_into_output_and_tag_targets() {
        let payload = notification("docs", "report.pdf");
        let full_path = blob_path_from_event(&payload).unwrap();
        let path = BlobPath::parse(&full_path).unwrap();
        assert_eq!(path.output_key("summary"), "summary/report.pdf.json");
        assert_eq!(path.key, "report.pdf");
    }
}
