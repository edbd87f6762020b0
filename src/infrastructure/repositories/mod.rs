//! Repository implementations over files and the cluster broker

mod cluster_consignor;
mod json_location;
mod sql_file;
mod yaml_shop;

pub use cluster_consignor::ClusterConsignorRepository;
pub use json_location::{JsonLocationRepository, DEFAULT_LOCATIONS_PATH};
pub use sql_file::{FileSystemSqlRepository, DEFAULT_OUTPUT_DIR};
pub use yaml_shop::{YamlShopRepository, DEFAULT_SHOPS_PATH};
