//! Rollback use case
//!
//! Resolves the shop from the registry (catching typos before anything
//! touches the cluster) and delegates deletion to the consignor repository.

use std::sync::Arc;

use crate::domain::ports::{ConsignorRepository, ShopRepository};
use crate::error::ShipctlResult;

/// Input for a rollback invocation.
#[derive(Debug, Clone)]
pub struct RollbackInput {
    /// Registry name of the shop (without the `.myshopify.com` suffix)
    pub shop_name: String,
    /// Environment name, e.g. `staging` or `production`
    pub environment: String,
}

/// Structured outcome of a rollback invocation.
#[derive(Debug, Clone)]
pub struct RollbackOutput {
    pub success: bool,
    pub deleted_count: u64,
    pub environment: String,
    pub error_message: Option<String>,
}

/// Use case: delete the deployed consignor rows for one shop.
pub struct RollbackConsignorUseCase {
    shops: Arc<dyn ShopRepository>,
    consignors: Arc<dyn ConsignorRepository>,
}

impl RollbackConsignorUseCase {
    pub fn new(shops: Arc<dyn ShopRepository>, consignors: Arc<dyn ConsignorRepository>) -> Self {
        Self { shops, consignors }
    }

    pub fn execute(&self, input: &RollbackInput) -> ShipctlResult<RollbackOutput> {
        let shop = self.shops.find_by_name(&input.shop_name)?;

        let result = self
            .consignors
            .rollback(shop.shopify_shop_id().as_str(), &input.environment);

        Ok(RollbackOutput {
            success: result.success,
            deleted_count: result.deleted_count,
            environment: input.environment.clone(),
            error_message: result.error_message,
        })
    }
}
