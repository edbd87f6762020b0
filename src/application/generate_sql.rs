//! Generate-SQL use case
//!
//! Renders the full consignor seed file for a shop and writes it to disk:
//! resolve the shop, load the 13-area catalog, build one consignor per
//! area, prepend a header comment, save.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;

use crate::application::build_consignors;
use crate::domain::entities::Shop;
use crate::domain::ports::{LocationRepository, ShopRepository, SqlFileRepository};
use crate::domain::value_objects::ApplicationStatus;
use crate::error::ShipctlResult;

/// Input for SQL generation.
#[derive(Debug, Clone)]
pub struct GenerateSqlInput {
    /// Registry name of the shop (without the `.myshopify.com` suffix)
    pub shop_name: String,
    /// Test-data mode: status accepted, carrier detail ids from the shop
    pub test_data: bool,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
}

/// Output of SQL generation.
#[derive(Debug, Clone)]
pub struct GenerateSqlOutput {
    pub filepath: PathBuf,
    pub consignor_count: usize,
    pub application_status: ApplicationStatus,
}

/// Use case: render consignor INSERT statements to a SQL file.
pub struct GenerateConsignorSqlUseCase {
    shops: Arc<dyn ShopRepository>,
    locations: Arc<dyn LocationRepository>,
    sql_files: Arc<dyn SqlFileRepository>,
}

impl GenerateConsignorSqlUseCase {
    pub fn new(
        shops: Arc<dyn ShopRepository>,
        locations: Arc<dyn LocationRepository>,
        sql_files: Arc<dyn SqlFileRepository>,
    ) -> Self {
        Self {
            shops,
            locations,
            sql_files,
        }
    }

    /// Failures here abort the invocation; generation has no
    /// structured-result contract.
    pub fn execute(&self, input: &GenerateSqlInput) -> ShipctlResult<GenerateSqlOutput> {
        let shop = self.shops.find_by_name(&input.shop_name)?;
        let locations = self.locations.find_all()?;

        let consignors = build_consignors(&shop, locations, input.test_data);
        let statements: Vec<String> = consignors.iter().map(|c| c.to_sql()).collect();
        let sql = format!("{}{}\n", header(&shop, input.test_data), statements.join("\n\n"));

        let filename = if input.test_data {
            "insert_test_consignors.sql"
        } else {
            "insert_consignors.sql"
        };

        let filepath = self.sql_files.save(&sql, filename, input.output_dir.as_deref())?;

        Ok(GenerateSqlOutput {
            filepath,
            consignor_count: consignors.len(),
            application_status: if input.test_data {
                ApplicationStatus::Accepted
            } else {
                ApplicationStatus::NotApplied
            },
        })
    }
}

fn header(shop: &Shop, test_data: bool) -> String {
    let mut header = String::from("-- Plus Shipping consignor seed SQL (consignors table)\n");
    header.push_str(&format!(
        "-- generated at: {}\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    header.push_str(&format!("-- shopify shop id: {}\n", shop.shopify_shop_id()));
    header.push_str(&format!("-- store id: {}\n", shop.store_id()));

    if test_data {
        header.push_str("-- mode: test data (reuses the shop's existing carrier detail ids)\n");
    }

    header.push('\n');
    header
}
