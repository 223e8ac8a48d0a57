use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Invalid blob path: {0}")]
    InvalidPath(String),

    #[error("Failed to access blob storage: {0}")]
    StorageError(String),

    #[error("Failed to extract document text: {0}")]
    ExtractError(String),

    #[error("Failed to access OpenAI API: {0}")]
    OpenAIError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to serialize summary: {0}")]
    SerializeError(String),
}

impl From<reqwest::Error> for SummarizeError {
    fn from(error: reqwest::Error) -> Self {
        SummarizeError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(error: serde_json::Error) -> Self {
        SummarizeError::SerializeError(error.to_string())
    }
}

// Generic implementation for AWS SDK errors
impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for SummarizeError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug,
{
    fn from(error: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        let context = aws_sdk_s3::error::DisplayErrorContext(&error);
        SummarizeError::StorageError(format!("{}", context))
    }
}
