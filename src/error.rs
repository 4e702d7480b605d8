//! Configuration errors reported at engine construction.
//!
//! Per-tick failures never surface here: a bad element degrades to a tagged
//! outcome and the batch keeps going. Only construction can fail, and it
//! fails softly (warning plus `Err`, nothing scheduled).

use std::fmt;

/// Error returned by `Engine::create` when the configuration cannot resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The element target matched nothing on the host surface.
    NoElements,
    /// The configured frame selector matched nothing.
    FrameNotFound(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoElements => {
                write!(f, "the elements you're trying to select don't exist")
            }
            ConfigError::FrameNotFound(selector) => {
                write!(
                    f,
                    "the frame you're trying to use doesn't exist (selector: {selector:?})"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
