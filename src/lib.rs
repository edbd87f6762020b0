//! shipctl - consignor deployment and rollback CLI for Plus Shipping
//!
//! shipctl renders a shop's 13 shipping-origin records into SQL and pushes
//! that SQL into the environment's database through a Kubernetes-fronted
//! execution broker, with rollback and offline SQL generation alongside.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;

// Re-exports for convenience
pub use application::{
    DeployConsignorUseCase, DeployInput, DeployOutput, GenerateConsignorSqlUseCase,
    GenerateSqlInput, GenerateSqlOutput, RollbackConsignorUseCase, RollbackInput, RollbackOutput,
};
pub use domain::entities::{Consignor, KubernetesEnvironment, Location, Shop};
pub use domain::ports::{
    ClusterBroker, ConsignorRepository, ContextToken, DbCredentials, DeployResult,
    LocationRepository, RollbackResult, ShopRepository, SqlExecution, SqlFileRepository,
};
pub use domain::value_objects::{
    ApplicationStatus, PhoneNumber, PostalCode, Prefecture, ShopifyShopId,
};
pub use error::{ShipctlError, ShipctlResult};
pub use infrastructure::cluster::KubectlBroker;
pub use infrastructure::repositories::{
    ClusterConsignorRepository, FileSystemSqlRepository, JsonLocationRepository,
    YamlShopRepository,
};
