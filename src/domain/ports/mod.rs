//! Domain ports - interfaces the application layer depends on
//!
//! Implementations live in `infrastructure`; tests substitute mocks.

mod cluster_broker;
mod consignor_repository;
mod location_repository;
mod shop_repository;
mod sql_file_repository;

pub use cluster_broker::{ClusterBroker, ContextToken, DbCredentials, SqlExecution};
pub use consignor_repository::{ConsignorRepository, DeployResult, RollbackResult};
pub use location_repository::LocationRepository;
pub use shop_repository::ShopRepository;
pub use sql_file_repository::SqlFileRepository;
