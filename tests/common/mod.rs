//! Common test utilities: domain fixtures and a recording mock broker.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;

use shipctl::domain::entities::{
    KubernetesEnvironment, Location, LocationProps, ShippingCredentials, Shop,
};
use shipctl::domain::ports::{
    ClusterBroker, ContextToken, DbCredentials, ShopRepository, SqlExecution,
};
use shipctl::domain::value_objects::{PhoneNumber, PostalCode, Prefecture, ShopifyShopId};
use shipctl::error::{ShipctlError, ShipctlResult};

pub fn fixture_environment(namespace: &str, context: &str) -> KubernetesEnvironment {
    KubernetesEnvironment {
        namespace: namespace.to_string(),
        context: context.to_string(),
        db_name: "plus_shipping".to_string(),
        db_config_map: "plus-shipping-db-config".to_string(),
        db_secret: "plus-shipping-db-secret".to_string(),
    }
}

/// Registry fixture: store id 404, sagawa 556, yamato 528, japan_post 0.
pub fn silver_shop() -> Shop {
    shop_with_credentials(ShippingCredentials {
        sagawa_detail_id: 556,
        yamato_detail_id: 528,
        japan_post_detail_id: 0,
    })
}

pub fn shop_with_credentials(credentials: ShippingCredentials) -> Shop {
    let mut environments = BTreeMap::new();
    environments.insert(
        "staging".to_string(),
        fixture_environment("plus-shipping-stg", "gke_stg-cluster"),
    );
    environments.insert(
        "production".to_string(),
        fixture_environment("plus-shipping-prd", "gke_prd-cluster"),
    );

    Shop::new(
        ShopifyShopId::from("81-test-store-plan-silver.myshopify.com").unwrap(),
        404,
        environments,
        credentials,
    )
    .unwrap()
}

pub fn hokkaido() -> Location {
    Location::new(LocationProps {
        area: "hokkaido".to_string(),
        name: "北海道配送センター".to_string(),
        postal_code: PostalCode::from("060-8588").unwrap(),
        prefecture: Prefecture::from("北海道").unwrap(),
        city: "札幌市中央区".to_string(),
        address1: "北3条西6丁目".to_string(),
        address2: String::new(),
        phone: PhoneNumber::from("011-231-4111").unwrap(),
    })
    .unwrap()
}

pub fn kanto() -> Location {
    Location::new(LocationProps {
        area: "kanto".to_string(),
        name: "関東配送センター".to_string(),
        postal_code: PostalCode::from("163-8001").unwrap(),
        prefecture: Prefecture::from("東京都").unwrap(),
        city: "新宿区".to_string(),
        address1: "西新宿2丁目8-1".to_string(),
        address2: String::new(),
        phone: PhoneNumber::from("03-5321-1111").unwrap(),
    })
    .unwrap()
}

/// Shop repository over a fixed map.
pub struct StaticShops {
    shops: BTreeMap<String, Shop>,
}

impl StaticShops {
    pub fn empty() -> Self {
        Self {
            shops: BTreeMap::new(),
        }
    }

    pub fn with(name: &str, shop: Shop) -> Self {
        let mut shops = BTreeMap::new();
        shops.insert(name.to_string(), shop);
        Self { shops }
    }
}

impl ShopRepository for StaticShops {
    fn find_by_name(&self, name: &str) -> ShipctlResult<Shop> {
        self.shops
            .get(name)
            .cloned()
            .ok_or_else(|| ShipctlError::ShopNotFound {
                name: name.to_string(),
            })
    }

    fn list_all(&self) -> ShipctlResult<Vec<String>> {
        Ok(self.shops.keys().cloned().collect())
    }
}

/// Cluster broker that records every call instead of touching a cluster.
///
/// `fail_step` names the operation that should error, to drive the
/// mid-pipeline failure scenarios.
pub struct MockBroker {
    calls: Mutex<Vec<String>>,
    executed_sql: Mutex<Vec<String>>,
    fail_step: Option<&'static str>,
    exec_output: String,
}

impl MockBroker {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            executed_sql: Mutex::new(Vec::new()),
            fail_step: None,
            exec_output: String::new(),
        }
    }

    pub fn failing_at(step: &'static str) -> Self {
        Self {
            fail_step: Some(step),
            ..Self::new()
        }
    }

    pub fn with_exec_output(output: &str) -> Self {
        Self {
            exec_output: output.to_string(),
            ..Self::new()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.starts_with(prefix))
            .count()
    }

    pub fn executed_sql(&self) -> Vec<String> {
        self.executed_sql.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn gate(&self, step: &'static str) -> ShipctlResult<()> {
        if self.fail_step == Some(step) {
            return Err(ShipctlError::cluster(format!("{step} exploded")));
        }
        Ok(())
    }
}

impl Default for MockBroker {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterBroker for MockBroker {
    fn current_context(&self) -> ShipctlResult<String> {
        self.record("current_context".to_string());
        Ok("original-context".to_string())
    }

    fn switch_context(&self, context: &str) -> ShipctlResult<ContextToken> {
        self.gate("switch_context")?;
        self.record(format!("switch_context:{context}"));
        Ok(ContextToken::new("original-context"))
    }

    fn restore_context(&self, token: ContextToken) {
        self.record(format!("restore_context:{}", token.original()));
    }

    fn ensure_worker_pod(&self, namespace: &str) -> ShipctlResult<String> {
        self.gate("ensure_worker_pod")?;
        self.record(format!("ensure_worker_pod:{namespace}"));
        Ok("temp-mysql-client".to_string())
    }

    fn credentials(
        &self,
        namespace: &str,
        config_map: &str,
        secret: &str,
    ) -> ShipctlResult<DbCredentials> {
        self.gate("credentials")?;
        self.record(format!("credentials:{namespace}/{config_map}/{secret}"));
        Ok(DbCredentials {
            host: "db.internal".to_string(),
            user: "app".to_string(),
            password: "secret".to_string(),
            port: "3306".to_string(),
            name: "plus_shipping".to_string(),
        })
    }

    fn exec_sql(&self, exec: &SqlExecution) -> ShipctlResult<String> {
        self.gate("exec_sql")?;
        self.record("exec_sql".to_string());
        self.executed_sql.lock().unwrap().push(exec.sql.clone());
        Ok(self.exec_output.clone())
    }
}
