//! Error types.
//!
//! Nothing on the pointer path is an error: lookup failures and non-pen
//! pointers fall through to default message handling. Errors only come from
//! hook installation, configuration loading and unknown commands.

use std::path::PathBuf;
use thiserror::Error;

/// Failure loading or validating an [`InkConfig`](crate::config::InkConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Failure attaching the message hook to a window.
#[derive(Debug, Error)]
pub enum HookError {
    #[error("the window rejected subclass {subclass_id}")]
    SubclassRejected { subclass_id: usize },

    #[error("subclass {subclass_id} is already installed by this plugin")]
    AlreadyAttached { subclass_id: usize },
}

/// Failure answering a method call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MethodError {
    #[error("method `{method}` is not implemented")]
    NotImplemented { method: String },
}
