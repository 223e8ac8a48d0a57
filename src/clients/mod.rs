//! Client modules for external API interactions

pub mod blob_client;
pub mod llm_client;

pub use blob_client::BlobClient;
pub use llm_client::LlmClient;
