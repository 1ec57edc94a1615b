//! Request/response commands.
//!
//! The only supported request is `isInkSupported`, which always answers `true`.
//! Any other method name is reported as not implemented.

use crate::error::MethodError;
use serde_json::Value;

/// Method name of the capability query.
pub const IS_INK_SUPPORTED: &str = "isInkSupported";

/// Stateless handler for the capability query.
#[derive(Clone, Copy, Debug, Default)]
pub struct CapabilityHandler;

impl CapabilityHandler {
    pub fn new() -> Self {
        CapabilityHandler
    }

    /// Answer `method`. Arguments are not used by any supported method.
    pub fn handle(&self, method: &str) -> Result<Value, MethodError> {
        match method {
            IS_INK_SUPPORTED => Ok(Value::Bool(true)),
            other => {
                log::debug!("unhandled ink method `{other}`");
                Err(MethodError::NotImplemented {
                    method: other.to_string(),
                })
            }
        }
    }
}
