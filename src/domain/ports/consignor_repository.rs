//! Consignor deploy/rollback port
//!
//! This port is the single error boundary of the pipeline: implementations
//! return structured results and never raise past this interface.

use crate::domain::entities::Consignor;

/// Outcome of a deploy invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployResult {
    pub success: bool,
    pub inserted_count: usize,
    pub error_message: Option<String>,
}

impl DeployResult {
    pub fn success(inserted_count: usize) -> Self {
        Self {
            success: true,
            inserted_count,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            inserted_count: 0,
            error_message: Some(message.into()),
        }
    }
}

/// Outcome of a rollback invocation. `deleted_count` reflects the rows the
/// database actually reported deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackResult {
    pub success: bool,
    pub deleted_count: u64,
    pub error_message: Option<String>,
}

impl RollbackResult {
    pub fn success(deleted_count: u64) -> Self {
        Self {
            success: true,
            deleted_count,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            deleted_count: 0,
            error_message: Some(message.into()),
        }
    }
}

/// Destination for consignor records.
pub trait ConsignorRepository: Send + Sync {
    /// Deploy a batch of consignors (sharing one shop) to the named
    /// environment. Never panics or returns `Err`; all failures surface in
    /// the result.
    fn deploy(&self, consignors: &[Consignor], environment: &str) -> DeployResult;

    /// Delete the distribution-center rows for the given shopify shop id
    /// from the named environment.
    fn rollback(&self, shopify_shop_id: &str, environment: &str) -> RollbackResult;
}
