//! JSON location catalog
//!
//! Reads the fixed 13-area catalog from `locations.json`, validates every
//! entry into a `Location`, and caches the result for the life of the
//! process.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::entities::{Location, LocationProps};
use crate::domain::ports::LocationRepository;
use crate::domain::value_objects::{PhoneNumber, PostalCode, Prefecture};
use crate::error::{ShipctlError, ShipctlResult};

/// Default catalog location, relative to the working directory.
pub const DEFAULT_LOCATIONS_PATH: &str = "data/locations.json";

#[derive(Debug, Clone, Deserialize)]
struct LocationEntry {
    area: String,
    name: String,
    address1: String,
    #[serde(default)]
    address2: String,
    city: String,
    province: String,
    #[allow(dead_code)]
    province_code: String,
    zip: String,
    #[allow(dead_code)]
    country_code: String,
    phone: String,
}

/// Location catalog backed by a JSON file.
pub struct JsonLocationRepository {
    path: PathBuf,
    cache: OnceLock<Vec<Location>>,
}

impl JsonLocationRepository {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_LOCATIONS_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: OnceLock::new(),
        }
    }

    fn load(&self) -> ShipctlResult<&[Location]> {
        if let Some(cached) = self.cache.get() {
            return Ok(cached);
        }

        if !self.path.exists() {
            return Err(ShipctlError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        let content = fs::read_to_string(&self.path)?;
        let entries: Vec<LocationEntry> = serde_json::from_str(&content)?;

        let mut locations = Vec::with_capacity(entries.len());
        for entry in entries {
            locations.push(Location::new(LocationProps {
                postal_code: PostalCode::from(&entry.zip)?,
                prefecture: Prefecture::from(&entry.province)?,
                phone: PhoneNumber::from(&entry.phone)?,
                area: entry.area,
                name: entry.name,
                city: entry.city,
                address1: entry.address1,
                address2: entry.address2,
            })?);
        }

        Ok(self.cache.get_or_init(|| locations))
    }
}

impl Default for JsonLocationRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationRepository for JsonLocationRepository {
    fn find_all(&self) -> ShipctlResult<Vec<Location>> {
        Ok(self.load()?.to_vec())
    }

    fn find_by_area(&self, area: &str) -> ShipctlResult<Location> {
        self.load()?
            .iter()
            .find(|l| l.area() == area)
            .cloned()
            .ok_or_else(|| ShipctlError::LocationNotFound {
                area: area.to_string(),
            })
    }
}
