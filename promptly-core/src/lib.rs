pub mod audio;
pub mod catalog;
pub mod gemini;
pub mod keys;
pub mod settings;

// Public library API - the CLI consumes these; anything else is reachable
// through its module but considered less stable.
pub use catalog::{Category, ToolSpec};
pub use gemini::{ExecuteError, ExecutionResult, GeminiClient};
pub use keys::{ApiKey, KeyStore};
pub use settings::{Settings, SettingsManager};
