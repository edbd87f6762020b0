//! Domain entities - Shop, Location, and the Consignor aggregate

mod consignor;
mod location;
mod shop;

pub use consignor::Consignor;
pub use location::{Location, LocationProps, DISTRIBUTION_CENTER_MARKER};
pub use shop::{KubernetesEnvironment, ShippingCredentials, Shop};
