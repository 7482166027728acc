pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::ExecuteError;
pub use types::ExecutionResult;
