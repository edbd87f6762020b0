//! Consignor aggregate - one deployable shipping-origin record
//!
//! Combines a Shop and a Location into a record that renders as a single
//! `INSERT INTO consignors` statement. Test data carries the shop's carrier
//! detail ids and status `accepted`; production data carries zeroed detail
//! ids and status `not_applied` until carrier onboarding completes.

use crate::domain::entities::{Location, Shop};
use crate::domain::value_objects::ApplicationStatus;

/// A shipping-origin record for one shop at one geographic area.
///
/// Created transiently per deployment or SQL-generation request; only its
/// rendered SQL projection is ever persisted.
#[derive(Debug, Clone)]
pub struct Consignor {
    shop: Shop,
    location: Location,
    status: ApplicationStatus,
    sagawa_detail_id: u32,
    yamato_detail_id: u32,
    japan_post_detail_id: u32,
}

impl Consignor {
    /// Test-data record: status accepted, detail ids copied from the shop.
    pub fn create_test_data(shop: &Shop, location: Location) -> Self {
        let credentials = shop.credentials();
        Self {
            shop: shop.clone(),
            location,
            status: ApplicationStatus::Accepted,
            sagawa_detail_id: credentials.sagawa_detail_id,
            yamato_detail_id: credentials.yamato_detail_id,
            japan_post_detail_id: credentials.japan_post_detail_id,
        }
    }

    /// Production record: status not_applied, all detail ids zero until the
    /// carrier contracts for the area exist.
    pub fn create_for_production(shop: &Shop, location: Location) -> Self {
        Self {
            shop: shop.clone(),
            location,
            status: ApplicationStatus::NotApplied,
            sagawa_detail_id: 0,
            yamato_detail_id: 0,
            japan_post_detail_id: 0,
        }
    }

    /// Deployable iff the status is accepted and any carrier detail id is
    /// provisioned.
    pub fn can_deploy(&self) -> bool {
        if !self.status.is_accepted() {
            return false;
        }
        self.sagawa_detail_id > 0 || self.yamato_detail_id > 0 || self.japan_post_detail_id > 0
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn status(&self) -> ApplicationStatus {
        self.status
    }

    /// Render the single-row INSERT statement for this record.
    ///
    /// The three status columns are populated uniformly: the schema tracks
    /// per-carrier approval separately, but this pipeline writes one value
    /// into all of them for backward compatibility.
    pub fn to_sql(&self) -> String {
        let shop_id = self.shop.shopify_shop_id();
        let location = &self.location;
        let status = self.status.as_str();

        format!(
            "INSERT INTO consignors (\n\
            \x20 shopify_shop_id,\n\
            \x20 store_id,\n\
            \x20 japan_post_consignor_detail_id,\n\
            \x20 sagawa_consignor_detail_id,\n\
            \x20 yamato_consignor_detail_id,\n\
            \x20 print_name,\n\
            \x20 location_name,\n\
            \x20 postal_code,\n\
            \x20 prefecture,\n\
            \x20 city,\n\
            \x20 address,\n\
            \x20 building,\n\
            \x20 tel,\n\
            \x20 delivery_usage,\n\
            \x20 application_status,\n\
            \x20 application_status_sagawa,\n\
            \x20 application_status_yamato,\n\
            \x20 deletion_requested\n\
            ) VALUES (\n\
            \x20 '{shop_id}',\n\
            \x20 {store_id},\n\
            \x20 {japan_post},\n\
            \x20 {sagawa},\n\
            \x20 {yamato},\n\
            \x20 '',\n\
            \x20 '{name}',\n\
            \x20 '{postal_code}',\n\
            \x20 '{prefecture}',\n\
            \x20 '{city}',\n\
            \x20 '{address}',\n\
            \x20 '{building}',\n\
            \x20 '{tel}',\n\
            \x20 1,\n\
            \x20 '{status}',\n\
            \x20 '{status}',\n\
            \x20 '{status}',\n\
            \x20 0\n\
            );",
            shop_id = shop_id,
            store_id = self.shop.store_id(),
            japan_post = self.japan_post_detail_id,
            sagawa = self.sagawa_detail_id,
            yamato = self.yamato_detail_id,
            name = location.name(),
            postal_code = location.postal_code(),
            prefecture = location.prefecture(),
            city = location.city(),
            address = location.address1(),
            building = location.address2(),
            tel = location.phone(),
            status = status,
        )
    }
}
