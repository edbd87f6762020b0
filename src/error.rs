//! Error types for shipctl
//!
//! Uses `thiserror` for library errors. Validation failures name the field
//! and the violated rule; lookup misses carry the key that missed; cluster
//! failures preserve the underlying command's message.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for shipctl operations
pub type ShipctlResult<T> = Result<T, ShipctlError>;

/// Main error type for shipctl operations
#[derive(Error, Debug)]
pub enum ShipctlError {
    /// Malformed value-object input, raised at construction time
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },

    /// Shop lookup miss in the registry
    #[error("shop \"{name}\" not found")]
    ShopNotFound { name: String },

    /// Location lookup miss in the catalog
    #[error("location not found for area: {area}")]
    LocationNotFound { area: String },

    /// Environment lookup miss on a shop
    #[error("environment \"{environment}\" not found for shop {shop}")]
    EnvironmentNotFound { environment: String, shop: String },

    /// Registry or catalog file missing on disk
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Context switch, pod provisioning, credential resolution, or remote
    /// execution failure
    #[error("cluster operation failed: {message}")]
    Cluster { message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShipctlError {
    /// Validation failure for `field`, with the violated rule in `message`
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Cluster operation failure with a descriptive message
    pub fn cluster(message: impl Into<String>) -> Self {
        Self::Cluster {
            message: message.into(),
        }
    }
}
