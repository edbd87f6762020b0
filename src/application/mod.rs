//! Application layer - use cases orchestrating the business flow
//!
//! This layer depends on domain entities and ports, contains no business
//! rules of its own, and is wired with its collaborators explicitly at the
//! call site (no process-wide registry).

pub mod deploy;
pub mod generate_sql;
pub mod rollback;

pub use deploy::{DeployConsignorUseCase, DeployInput, DeployOutput};
pub use generate_sql::{GenerateConsignorSqlUseCase, GenerateSqlInput, GenerateSqlOutput};
pub use rollback::{RollbackConsignorUseCase, RollbackInput, RollbackOutput};

use crate::domain::entities::{Consignor, Location, Shop};

/// Build one consignor per catalog location, in test-data or production
/// mode.
pub fn build_consignors(shop: &Shop, locations: Vec<Location>, test_data: bool) -> Vec<Consignor> {
    locations
        .into_iter()
        .map(|location| {
            if test_data {
                Consignor::create_test_data(shop, location)
            } else {
                Consignor::create_for_production(shop, location)
            }
        })
        .collect()
}
