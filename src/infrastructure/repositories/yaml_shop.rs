//! YAML shop registry
//!
//! Reads shops from a `shops.yaml` registry file, maps them into `Shop`
//! entities, and caches the parsed file for the life of the process.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::entities::{KubernetesEnvironment, ShippingCredentials, Shop};
use crate::domain::ports::ShopRepository;
use crate::domain::value_objects::ShopifyShopId;
use crate::error::{ShipctlError, ShipctlResult};

/// Default registry location, relative to the working directory.
pub const DEFAULT_SHOPS_PATH: &str = "config/shops.yaml";

#[derive(Debug, Clone, Deserialize)]
struct EnvironmentEntry {
    namespace: String,
    context: String,
    db_name: String,
    db_config_map: String,
    db_secret: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct CredentialsEntry {
    #[serde(default)]
    sagawa_detail_id: u32,
    #[serde(default)]
    yamato_detail_id: u32,
    #[serde(default)]
    japan_post_detail_id: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct ShopEntry {
    shopify_shop_id: String,
    store_id: u32,
    environments: BTreeMap<String, EnvironmentEntry>,
    #[serde(default)]
    credentials: Option<CredentialsEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct ShopsFile {
    shops: BTreeMap<String, ShopEntry>,
}

/// Shop repository backed by a YAML registry file.
pub struct YamlShopRepository {
    path: PathBuf,
    cache: OnceLock<ShopsFile>,
}

impl YamlShopRepository {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_SHOPS_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    fn load(&self) -> ShipctlResult<&ShopsFile> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }

        if !self.path.exists() {
            return Err(ShipctlError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        let parsed: ShopsFile = serde_yaml_ng::from_str(&content)?;

        Ok(self.cache.get_or_init(|| parsed))
    }

    fn map_entry(entry: &ShopEntry) -> ShipctlResult<Shop> {
        let mut environments = BTreeMap::new();
        for (name, env) in &entry.environments {
            environments.insert(
                name.clone(),
                KubernetesEnvironment {
                    namespace: env.namespace.clone(),
                    context: env.context.clone(),
                    db_name: env.db_name.clone(),
                    db_config_map: env.db_config_map.clone(),
                    db_secret: env.db_secret.clone(),
                },
            );
        }

        let credentials = entry.credentials.clone().unwrap_or_default();

        Shop::new(
            ShopifyShopId::from(&entry.shopify_shop_id)?,
            entry.store_id,
            environments,
            ShippingCredentials {
                sagawa_detail_id: credentials.sagawa_detail_id,
                yamato_detail_id: credentials.yamato_detail_id,
                japan_post_detail_id: credentials.japan_post_detail_id,
            },
        )
    }
}

impl Default for YamlShopRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopRepository for YamlShopRepository {
    fn find_by_name(&self, name: &str) -> ShipctlResult<Shop> {
        let file = self.load()?;
        let entry = file
            .shops
            .get(name)
            .ok_or_else(|| ShipctlError::ShopNotFound {
                name: name.to_string(),
            })?;
        Self::map_entry(entry)
    }

    fn list_all(&self) -> ShipctlResult<Vec<String>> {
        Ok(self.load()?.shops.keys().cloned().collect())
    }
}
