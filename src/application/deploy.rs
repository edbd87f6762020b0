//! Deploy use case
//!
//! Resolve the shop, load the catalog, build one consignor per area, and
//! hand the batch to the consignor repository. Everything at or below the
//! repository boundary surfaces as a structured failure; only pre-boundary
//! lookups (the shop itself, the catalog) propagate as errors.

use std::sync::Arc;

use crate::application::build_consignors;
use crate::domain::ports::{ConsignorRepository, LocationRepository, ShopRepository};
use crate::error::ShipctlResult;

/// Input for a deploy invocation.
#[derive(Debug, Clone)]
pub struct DeployInput {
    /// Registry name of the shop (without the `.myshopify.com` suffix)
    pub shop_name: String,
    /// Environment name, e.g. `staging` or `production`
    pub environment: String,
    /// Test-data mode: status accepted, carrier detail ids from the shop
    pub test_data: bool,
}

/// Structured outcome of a deploy invocation.
#[derive(Debug, Clone)]
pub struct DeployOutput {
    pub success: bool,
    pub deployed_count: usize,
    pub environment: String,
    pub error_message: Option<String>,
}

/// Use case: deploy the full consignor batch for one shop.
pub struct DeployConsignorUseCase {
    shops: Arc<dyn ShopRepository>,
    locations: Arc<dyn LocationRepository>,
    consignors: Arc<dyn ConsignorRepository>,
}

impl DeployConsignorUseCase {
    pub fn new(
        shops: Arc<dyn ShopRepository>,
        locations: Arc<dyn LocationRepository>,
        consignors: Arc<dyn ConsignorRepository>,
    ) -> Self {
        Self {
            shops,
            locations,
            consignors,
        }
    }

    pub fn execute(&self, input: &DeployInput) -> ShipctlResult<DeployOutput> {
        let shop = self.shops.find_by_name(&input.shop_name)?;
        let locations = self.locations.find_all()?;

        let consignors = build_consignors(&shop, locations, input.test_data);
        let result = self.consignors.deploy(&consignors, &input.environment);

        Ok(DeployOutput {
            success: result.success,
            deployed_count: result.inserted_count,
            environment: input.environment.clone(),
            error_message: result.error_message,
        })
    }

    /// Render the batch SQL without deploying (dry-run support).
    pub fn render_sql(&self, shop_name: &str, test_data: bool) -> ShipctlResult<String> {
        let shop = self.shops.find_by_name(shop_name)?;
        let locations = self.locations.find_all()?;

        let statements: Vec<String> = build_consignors(&shop, locations, test_data)
            .iter()
            .map(|c| c.to_sql())
            .collect();
        Ok(statements.join("\n\n"))
    }
}
