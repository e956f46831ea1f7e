//! Error types for the sandbox
//!
//! Construction-time validation is the only place the physics core fails.
//! Once bodies are registered, `step()` always completes and never returns
//! an error.

use crate::physics::host::HostId;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the physics core while building bodies or binding hosts
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// A construction parameter is outside its physical range
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// A body refers to a host that the scene does not contain
    #[error("no host object with id {0:?}")]
    UnknownHost(HostId),
}

/// Errors raised while loading a [`crate::config::SandboxConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value")]
    Invalid(#[from] PhysicsError),
}

pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Rejects values that are NaN, infinite or not strictly positive
pub(crate) fn ensure_positive(name: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(PhysicsError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(PhysicsError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Rejects values that are NaN or infinite
pub(crate) fn ensure_finite(name: &'static str, value: f32) -> Result<f32> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhysicsError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("mass", 2.0), Ok(2.0));
        assert!(ensure_positive("mass", 0.0).is_err());
        assert!(ensure_positive("mass", -1.0).is_err());
        assert!(ensure_positive("mass", f32::NAN).is_err());
        assert!(ensure_positive("mass", f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_parameter() {
        let err = ensure_positive("radius", -3.0).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("radius"));
        assert!(message.contains("-3"));
    }
}
