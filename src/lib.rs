/// docsum - A blob-triggered worker that summarizes uploaded documents with ChatGPT.
///
/// When a new object lands in a storage bucket, the worker Lambda:
/// 1. Reads the object and extracts plain text (txt/md, PDF, DOCX)
/// 2. Asks a chat-completion model for a structured summary (bullets + tldr)
/// 3. Writes the summary JSON under a `summary/` prefix in the same bucket
/// 4. Tags the source object (`ai=summarized`, `length=<chars>`) best-effort
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution, triggered by bucket notifications
/// - The S3 SDK for object reads, writes, and tagging
/// - A raw chat-completions HTTP call for summary generation
/// - Tokio for async runtime
// Module declarations
pub mod clients;
pub mod core;
pub mod errors;
pub mod worker;

pub use errors::SummarizeError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call once at process start, before the runtime loop.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
