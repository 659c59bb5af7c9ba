//! Controller Errors
//!
//! The controller itself is pure per-tick math, so the only failures are setup
//! problems: a required input action is not wired, the configuration is out of
//! range, or a config file cannot be read. A probe miss or an unpressed button is
//! a normal outcome and never shows up here.

use std::path::PathBuf;

use thiserror::Error;

use crate::input::InputAction;

/// Errors raised while configuring or activating a [`crate::player::FirstPersonController`].
#[derive(Debug, Error)]
pub enum ControllerError {
    /// The input provider does not expose an action the controller needs.
    #[error("input action {0:?} is not wired to the input provider")]
    MissingAction(InputAction),

    /// A per-tick update was requested before `activate()` succeeded.
    #[error("controller is not active; call activate() before ticking it")]
    NotActive,

    /// A configuration value is out of range.
    #[error("invalid controller config: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("failed to read controller config {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file is not valid JSON for [`crate::config::ControllerConfig`].
    #[error("failed to parse controller config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type Result<T, E = ControllerError> = std::result::Result<T, E>;
