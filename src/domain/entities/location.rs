//! Location entity - a fixed distribution-center address

use crate::domain::value_objects::{PhoneNumber, PostalCode, Prefecture};
use crate::error::{ShipctlError, ShipctlResult};

/// The marker every distribution-center name must carry.
pub const DISTRIBUTION_CENTER_MARKER: &str = "配送センター";

/// Construction parameters for [`Location`].
#[derive(Debug, Clone)]
pub struct LocationProps {
    pub area: String,
    pub name: String,
    pub postal_code: PostalCode,
    pub prefecture: Prefecture,
    pub city: String,
    pub address1: String,
    pub address2: String,
    pub phone: PhoneNumber,
}

/// A validated shipping-origin site, one of the 13 fixed geographic areas.
///
/// Two locations are the same site iff their postal code and prefecture
/// match; names and buildings do not participate in equality.
#[derive(Debug, Clone)]
pub struct Location {
    area: String,
    name: String,
    postal_code: PostalCode,
    prefecture: Prefecture,
    city: String,
    address1: String,
    address2: String,
    phone: PhoneNumber,
}

impl Location {
    pub fn new(props: LocationProps) -> ShipctlResult<Self> {
        let name = props.name.trim().to_string();
        if name.is_empty() {
            return Err(ShipctlError::validation("location", "name must not be empty"));
        }
        if !name.contains(DISTRIBUTION_CENTER_MARKER) {
            return Err(ShipctlError::validation(
                "location",
                format!("name must include {DISTRIBUTION_CENTER_MARKER}"),
            ));
        }

        let city = props.city.trim().to_string();
        if city.is_empty() {
            return Err(ShipctlError::validation("location", "city must not be empty"));
        }

        let address1 = props.address1.trim().to_string();
        if address1.is_empty() {
            return Err(ShipctlError::validation(
                "location",
                "address1 must not be empty",
            ));
        }

        let area = props.area.trim().to_string();
        if area.is_empty() {
            return Err(ShipctlError::validation("location", "area must not be empty"));
        }

        Ok(Self {
            area,
            name,
            postal_code: props.postal_code,
            prefecture: props.prefecture,
            city,
            address1,
            address2: props.address2.trim().to_string(),
            phone: props.phone,
        })
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    pub fn prefecture(&self) -> &Prefecture {
        &self.prefecture
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn address1(&self) -> &str {
        &self.address1
    }

    /// Building name etc.; may be empty.
    pub fn address2(&self) -> &str {
        &self.address2
    }

    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// Full address: prefecture + city + address1, with address2 appended
    /// when present.
    pub fn full_address(&self) -> String {
        let mut address = format!("{}{}{}", self.prefecture, self.city, self.address1);
        if !self.address2.is_empty() {
            address.push(' ');
            address.push_str(&self.address2);
        }
        address
    }
}

/// Site identity: postal code + prefecture only.
impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.postal_code == other.postal_code && self.prefecture == other.prefecture
    }
}

impl Eq for Location {}
