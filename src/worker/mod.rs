//! Worker handler and document text extraction

pub mod extract;
pub mod handler;

// Re-export the main handler for convenience
pub use handler::function_handler;
