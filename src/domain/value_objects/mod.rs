//! Value objects - validated, normalized, immutable domain primitives
//!
//! Every constructor either returns a canonical instance or fails with a
//! validation error naming the violated rule; no partially-valid instance
//! is ever observable.

mod application_status;
mod phone_number;
mod postal_code;
mod prefecture;
mod shop_id;

pub use application_status::ApplicationStatus;
pub use phone_number::PhoneNumber;
pub use postal_code::PostalCode;
pub use prefecture::Prefecture;
pub use shop_id::ShopifyShopId;
