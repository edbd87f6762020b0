//! Shop repository port

use crate::domain::entities::Shop;
use crate::error::ShipctlResult;

/// Source of shop records, keyed by registry name.
pub trait ShopRepository: Send + Sync {
    /// Look up a shop by registry name; fails with `ShopNotFound`.
    fn find_by_name(&self, name: &str) -> ShipctlResult<Shop>;

    /// All known registry names.
    fn list_all(&self) -> ShipctlResult<Vec<String>>;
}
