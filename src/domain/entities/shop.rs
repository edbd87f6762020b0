//! Shop entity - a Shopify storefront with its cluster coordinates

use std::collections::BTreeMap;

use crate::domain::value_objects::ShopifyShopId;
use crate::error::{ShipctlError, ShipctlResult};

/// Cluster coordinates for one deployment environment of a shop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubernetesEnvironment {
    pub namespace: String,
    pub context: String,
    pub db_name: String,
    pub db_config_map: String,
    pub db_secret: String,
}

/// Carrier detail ids for a shop; 0 means "not provisioned".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShippingCredentials {
    pub sagawa_detail_id: u32,
    pub yamato_detail_id: u32,
    pub japan_post_detail_id: u32,
}

impl ShippingCredentials {
    /// True when any carrier detail id is provisioned.
    pub fn any_provisioned(&self) -> bool {
        self.sagawa_detail_id > 0 || self.yamato_detail_id > 0 || self.japan_post_detail_id > 0
    }
}

/// Aggregate root for a Shopify storefront: identity, per-environment
/// cluster coordinates, and carrier credentials. Loaded once from the
/// registry and read-only thereafter.
#[derive(Debug, Clone)]
pub struct Shop {
    shopify_shop_id: ShopifyShopId,
    store_id: u32,
    environments: BTreeMap<String, KubernetesEnvironment>,
    credentials: ShippingCredentials,
}

impl Shop {
    pub fn new(
        shopify_shop_id: ShopifyShopId,
        store_id: u32,
        environments: BTreeMap<String, KubernetesEnvironment>,
        credentials: ShippingCredentials,
    ) -> ShipctlResult<Self> {
        if store_id == 0 {
            return Err(ShipctlError::validation(
                "shop",
                "store id must be a positive number",
            ));
        }

        Ok(Self {
            shopify_shop_id,
            store_id,
            environments,
            credentials,
        })
    }

    pub fn shopify_shop_id(&self) -> &ShopifyShopId {
        &self.shopify_shop_id
    }

    pub fn store_id(&self) -> u32 {
        self.store_id
    }

    /// Resolve the cluster coordinates for a named environment.
    pub fn environment(&self, name: &str) -> ShipctlResult<&KubernetesEnvironment> {
        self.environments
            .get(name)
            .ok_or_else(|| ShipctlError::EnvironmentNotFound {
                environment: name.to_string(),
                shop: self.shopify_shop_id.to_string(),
            })
    }

    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.contains_key(name)
    }

    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn credentials(&self) -> ShippingCredentials {
        self.credentials
    }

    /// True when the shop carries any carrier detail id usable for test data.
    pub fn has_test_credentials(&self) -> bool {
        self.credentials.any_provisioned()
    }
}
