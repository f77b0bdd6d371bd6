//! Request and response messages of the `Cart` method set.
//!
//! Payloads travel as JSON. Every field defaults so that partially filled
//! messages still decode; the server validates required values.

use serde::{Deserialize, Serialize};

/// Method names, in `Service.Endpoint` form.
pub mod method {
    pub const ADD_CART: &str = "Cart.AddCart";
    pub const CLEAN_CART: &str = "Cart.CleanCart";
    pub const INCR: &str = "Cart.Incr";
    pub const DECR: &str = "Cart.Decr";
    pub const DELETE_ITEM_BY_ID: &str = "Cart.DeleteItemByID";
    pub const GET_ALL: &str = "Cart.GetAll";
    pub const FIND_CART_BY_ID: &str = "Cart.FindCartByID";
    pub const UPDATE_CART: &str = "Cart.UpdateCart";

    pub const ALL: &[&str] = &[
        ADD_CART,
        CLEAN_CART,
        INCR,
        DECR,
        DELETE_ITEM_BY_ID,
        GET_ALL,
        FIND_CART_BY_ID,
        UPDATE_CART,
    ];
}

/// A single cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartInfo {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub size_id: i64,
    pub num: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseAdd {
    pub cart_id: i64,
    pub msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Clean {
    pub user_id: i64,
}

/// Generic acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    pub msg: String,
}

/// Quantity change for one cart line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Item {
    pub id: i64,
    pub change_num: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartId {
    pub id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartFindAll {
    pub user_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartAll {
    pub cart_info: Vec<CartInfo>,
}

/// Error body returned for every failed call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    /// Service that produced the error.
    pub id: String,
    /// Stable machine-readable code, e.g. `admission_rejected`.
    pub code: String,
    pub detail: String,
    /// HTTP status mirrored into the body.
    pub status: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero() {
        let info: CartInfo = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
        assert_eq!(info.user_id, 7);
        assert_eq!(info.num, 0);
    }

    #[test]
    fn method_names_split_into_service_and_endpoint() {
        let (service, endpoint) = method::DELETE_ITEM_BY_ID.split_once('.').unwrap();
        assert_eq!(service, "Cart");
        assert_eq!(endpoint, "DeleteItemByID");
    }
}
