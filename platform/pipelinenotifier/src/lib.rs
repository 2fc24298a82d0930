//! Configuration for the CodePipeline Discord notifier.

pub mod config;
pub mod errors;
pub mod logger;

pub use config::{load, WebhookConfig};
pub use errors::Error;
