//! Cluster-backed consignor repository - the deploy/rollback pipeline
//!
//! Sequences: resolve environment → switch context → ensure worker pod →
//! resolve credentials → execute SQL → restore context → report. This is
//! the single error boundary of the pipeline: once past the argument
//! checks, every failure becomes a structured result, and the context is
//! restored exactly once on every path that switched it.

use std::sync::Arc;

use crate::domain::entities::{Consignor, KubernetesEnvironment, DISTRIBUTION_CENTER_MARKER};
use crate::domain::ports::{
    ClusterBroker, ConsignorRepository, DbCredentials, DeployResult, RollbackResult,
    ShopRepository, SqlExecution,
};
use crate::error::ShipctlResult;

const SHOPIFY_DOMAIN: &str = ".myshopify.com";

/// Consignor repository that executes against the remote database through
/// the cluster broker.
pub struct ClusterConsignorRepository {
    broker: Arc<dyn ClusterBroker>,
    shops: Arc<dyn ShopRepository>,
}

impl ClusterConsignorRepository {
    pub fn new(broker: Arc<dyn ClusterBroker>, shops: Arc<dyn ShopRepository>) -> Self {
        Self { broker, shops }
    }

    /// Worker-pod + credential acquisition shared by deploy and rollback.
    fn acquire(
        &self,
        env: &KubernetesEnvironment,
    ) -> ShipctlResult<(String, DbCredentials)> {
        let pod_name = self.broker.ensure_worker_pod(&env.namespace)?;
        let credentials =
            self.broker
                .credentials(&env.namespace, &env.db_config_map, &env.db_secret)?;
        Ok((pod_name, credentials))
    }

    fn run_deploy(
        &self,
        env: &KubernetesEnvironment,
        consignors: &[Consignor],
    ) -> ShipctlResult<()> {
        let (pod_name, credentials) = self.acquire(env)?;

        let statements: Vec<String> = consignors.iter().map(Consignor::to_sql).collect();
        self.broker.exec_sql(&SqlExecution {
            namespace: env.namespace.clone(),
            pod_name: pod_name.clone(),
            credentials: credentials.clone(),
            sql: statements.join("\n\n"),
        })?;

        // Read back what landed; a verification miss is a warning, not a
        // deploy failure.
        let shop_id = consignors[0].shop().shopify_shop_id();
        let verify = SqlExecution {
            namespace: env.namespace.clone(),
            pod_name,
            credentials,
            sql: format!(
                "SELECT location_name, prefecture, application_status_yamato\n\
                 FROM consignors\n\
                 WHERE shopify_shop_id = '{shop_id}'\n\
                 ORDER BY id;"
            ),
        };
        match self.broker.exec_sql(&verify) {
            Ok(rows) if !rows.trim().is_empty() => println!("{}", rows.trim_end()),
            Ok(_) => {}
            Err(e) => eprintln!("⚠ could not verify deployed rows: {e}"),
        }

        Ok(())
    }

    fn run_rollback(
        &self,
        env: &KubernetesEnvironment,
        shopify_shop_id: &str,
    ) -> ShipctlResult<u64> {
        let (pod_name, credentials) = self.acquire(env)?;

        // ROW_COUNT() right after the DELETE reports the rows it removed.
        let sql = format!(
            "DELETE FROM consignors\n\
             WHERE shopify_shop_id = '{shopify_shop_id}'\n\
            \x20 AND location_name LIKE '%{DISTRIBUTION_CENTER_MARKER}%';\n\
             SELECT ROW_COUNT();"
        );

        let output = self.broker.exec_sql(&SqlExecution {
            namespace: env.namespace.clone(),
            pod_name,
            credentials,
            sql,
        })?;

        Ok(parse_row_count(&output).unwrap_or(0))
    }
}

impl ConsignorRepository for ClusterConsignorRepository {
    fn deploy(&self, consignors: &[Consignor], environment: &str) -> DeployResult {
        if consignors.is_empty() {
            return DeployResult::failure("no consignors to deploy");
        }

        let shop = consignors[0].shop();
        if consignors
            .iter()
            .any(|c| c.shop().shopify_shop_id() != shop.shopify_shop_id())
        {
            return DeployResult::failure("consignors must share one shop");
        }

        let env = match shop.environment(environment) {
            Ok(env) => env.clone(),
            Err(e) => return DeployResult::failure(e.to_string()),
        };

        let token = match self.broker.switch_context(&env.context) {
            Ok(token) => token,
            Err(e) => return DeployResult::failure(e.to_string()),
        };

        let outcome = self.run_deploy(&env, consignors);
        self.broker.restore_context(token);

        match outcome {
            Ok(()) => DeployResult::success(consignors.len()),
            Err(e) => DeployResult::failure(e.to_string()),
        }
    }

    fn rollback(&self, shopify_shop_id: &str, environment: &str) -> RollbackResult {
        let shop_name = shopify_shop_id
            .strip_suffix(SHOPIFY_DOMAIN)
            .unwrap_or(shopify_shop_id);

        let shop = match self.shops.find_by_name(shop_name) {
            Ok(shop) => shop,
            Err(e) => return RollbackResult::failure(e.to_string()),
        };

        let env = match shop.environment(environment) {
            Ok(env) => env.clone(),
            Err(e) => return RollbackResult::failure(e.to_string()),
        };

        let token = match self.broker.switch_context(&env.context) {
            Ok(token) => token,
            Err(e) => return RollbackResult::failure(e.to_string()),
        };

        let outcome = self.run_rollback(&env, shopify_shop_id);
        self.broker.restore_context(token);

        match outcome {
            Ok(deleted_count) => RollbackResult::success(deleted_count),
            Err(e) => RollbackResult::failure(e.to_string()),
        }
    }
}

/// Last numeric line of the engine output, i.e. the `SELECT ROW_COUNT()`
/// value trailing the batch.
fn parse_row_count(output: &str) -> Option<u64> {
    output
        .lines()
        .rev()
        .find_map(|line| line.trim().parse::<u64>().ok())
}
