//! Cluster broker port
//!
//! Mediates every interaction with the target cluster: context switching,
//! worker-pod lifecycle, credential resolution, and remote SQL execution.
//! The default implementation shells out to `kubectl`
//! (`infrastructure::cluster`); tests substitute a recording mock.

use crate::error::ShipctlResult;

/// Proof that a context switch happened, carrying the context to restore.
///
/// `switch_context` mints one token per switch and `restore_context`
/// consumes it, so the acquire/release pairing is visible in the types:
/// a second switch cannot clobber the first switch's restore target, and a
/// token that is never restored shows up as an unused-value warning.
#[must_use = "the previous context is lost unless passed to restore_context"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextToken {
    original: String,
}

impl ContextToken {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
        }
    }

    /// The context that was active before the switch.
    pub fn original(&self) -> &str {
        &self.original
    }
}

/// Database coordinates resolved from the cluster's config map and secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbCredentials {
    pub host: String,
    pub user: String,
    pub password: String,
    pub port: String,
    pub name: String,
}

/// One remote SQL execution: where to run and what to run.
#[derive(Debug, Clone)]
pub struct SqlExecution {
    pub namespace: String,
    pub pod_name: String,
    pub credentials: DbCredentials,
    pub sql: String,
}

/// Operations the deployment pipeline needs from the cluster.
pub trait ClusterBroker: Send + Sync {
    /// The currently active context identifier.
    fn current_context(&self) -> ShipctlResult<String>;

    /// Switch to `context`, returning a token that restores the previous
    /// context.
    fn switch_context(&self, context: &str) -> ShipctlResult<ContextToken>;

    /// Switch back to the token's original context. Failure is reported as
    /// a warning and swallowed: restoration must never mask the primary
    /// operation's result.
    fn restore_context(&self, token: ContextToken);

    /// Return the name of the SQL worker pod in `namespace`, provisioning
    /// it and waiting for readiness if it does not exist yet.
    fn ensure_worker_pod(&self, namespace: &str) -> ShipctlResult<String>;

    /// Resolve host/user/port/dbname from `config_map` and the password
    /// from `secret`. Fails as a unit if any lookup fails.
    fn credentials(
        &self,
        namespace: &str,
        config_map: &str,
        secret: &str,
    ) -> ShipctlResult<DbCredentials>;

    /// Stage and execute SQL inside the worker pod, returning captured
    /// stdout.
    fn exec_sql(&self, exec: &SqlExecution) -> ShipctlResult<String>;
}
