//! Location catalog port

use crate::domain::entities::Location;
use crate::error::ShipctlResult;

/// Source of the fixed 13-entry location catalog.
pub trait LocationRepository: Send + Sync {
    /// All catalog entries, one per geographic area.
    fn find_all(&self) -> ShipctlResult<Vec<Location>>;

    /// Look up one entry by area code; fails with `LocationNotFound`.
    fn find_by_area(&self, area: &str) -> ShipctlResult<Location>;
}
