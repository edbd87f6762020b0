//! Shared fixtures and in-memory port implementations for unit tests.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::entities::{
    KubernetesEnvironment, Location, LocationProps, ShippingCredentials, Shop,
};
use crate::domain::ports::{LocationRepository, ShopRepository, SqlFileRepository};
use crate::domain::value_objects::{PhoneNumber, PostalCode, Prefecture, ShopifyShopId};
use crate::error::{ShipctlError, ShipctlResult};

pub fn fixture_environment(namespace: &str, context: &str) -> KubernetesEnvironment {
    KubernetesEnvironment {
        namespace: namespace.to_string(),
        context: context.to_string(),
        db_name: "plus_shipping".to_string(),
        db_config_map: "plus-shipping-db-config".to_string(),
        db_secret: "plus-shipping-db-secret".to_string(),
    }
}

/// The registry fixture shop: store id 404, staging + production environments.
pub fn fixture_shop(credentials: ShippingCredentials) -> Shop {
    let mut environments = BTreeMap::new();
    environments.insert(
        "staging".to_string(),
        fixture_environment("plus-shipping-stg", "gke_plus-shipping_asia-northeast1_stg"),
    );
    environments.insert(
        "production".to_string(),
        fixture_environment("plus-shipping-prd", "gke_plus-shipping_asia-northeast1_prd"),
    );

    Shop::new(
        ShopifyShopId::from("81-test-store-plan-silver.myshopify.com").unwrap(),
        404,
        environments,
        credentials,
    )
    .unwrap()
}

pub fn hokkaido_location() -> Location {
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

pub fn kanto_location() -> Location {
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

/// Shop repository backed by a map.
#[derive(Default)]
pub struct InMemoryShops {
    shops: BTreeMap<String, Shop>,
}

impl InMemoryShops {
    pub fn with_shop(name: &str, shop: Shop) -> Self {
        let mut shops = BTreeMap::new();
        shops.insert(name.to_string(), shop);
        Self { shops }
    }
}

impl ShopRepository for InMemoryShops {
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

/// Location catalog backed by a vec.
pub struct InMemoryLocations {
    locations: Vec<Location>,
}

impl InMemoryLocations {
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// The Hokkaido + Kanto pair used by most pipeline tests.
    pub fn two_areas() -> Self {
        Self::new(vec![hokkaido_location(), kanto_location()])
    }
}

impl LocationRepository for InMemoryLocations {
    fn find_all(&self) -> ShipctlResult<Vec<Location>> {
        Ok(self.locations.clone())
    }

    fn find_by_area(&self, area: &str) -> ShipctlResult<Location> {
        self.locations
            .iter()
            .find(|l| l.area() == area)
            .cloned()
            .ok_or_else(|| ShipctlError::LocationNotFound {
                area: area.to_string(),
            })
    }
}

/// SQL file sink that records saves instead of touching the filesystem.
#[derive(Default)]
pub struct InMemorySqlFiles {
    saved: Mutex<Vec<(String, String)>>,
}

impl InMemorySqlFiles {
    pub fn last_saved(&self) -> Option<String> {
        self.saved
            .lock()
            .unwrap()
            .last()
            .map(|(sql, _)| sql.clone())
    }
}

impl SqlFileRepository for InMemorySqlFiles {
    fn save(&self, sql: &str, filename: &str, output_dir: Option<&Path>) -> ShipctlResult<PathBuf> {
        self.saved
            .lock()
            .unwrap()
            .push((sql.to_string(), filename.to_string()));

        let dir = output_dir.unwrap_or_else(|| Path::new("sql-output-store-management"));
        Ok(dir.join(filename))
    }
}
