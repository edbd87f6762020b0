//! ShopifyShopId value object - `<name>.myshopify.com` store identifier

use std::fmt;

use crate::error::{ShipctlError, ShipctlResult};

const SHOPIFY_DOMAIN: &str = ".myshopify.com";

/// A validated Shopify shop identifier.
///
/// The full form is `<name>.myshopify.com` where `<name>` is non-empty
/// lowercase alphanumerics and hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShopifyShopId {
    value: String,
}

impl ShopifyShopId {
    pub fn from(input: &str) -> ShipctlResult<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ShipctlError::validation("shopify shop id", "empty string"));
        }

        let Some(shop_name) = trimmed.strip_suffix(SHOPIFY_DOMAIN) else {
            return Err(ShipctlError::validation(
                "shopify shop id",
                format!("must end with {SHOPIFY_DOMAIN}"),
            ));
        };

        if shop_name.is_empty() {
            return Err(ShipctlError::validation(
                "shopify shop id",
                "shop name cannot be empty",
            ));
        }

        if !shop_name
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(ShipctlError::validation(
                "shopify shop id",
                "shop name must contain only lowercase letters, numbers, and hyphens",
            ));
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// The shop name with the `.myshopify.com` suffix stripped.
    pub fn shop_name(&self) -> &str {
        &self.value[..self.value.len() - SHOPIFY_DOMAIN.len()]
    }

    /// The store's HTTPS URL.
    pub fn store_url(&self) -> String {
        format!("https://{}", self.value)
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ShopifyShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
