use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Timestamp layouts accepted in the source CSVs
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Parse a timestamp column value. Bare dates are read as midnight.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Empty fields become `None`; anything else must be a valid timestamp.
fn optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => parse_timestamp(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp '{}'", s))),
    }
}

/// Treat an empty text field as null.
fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

/// Order status value marking a completed delivery
pub const DELIVERED: &str = "delivered";

/// Row of orders_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub order_status: String,
    #[serde(deserialize_with = "optional_timestamp")]
    pub order_purchase_timestamp: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub order_approved_at: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub order_delivered_carrier_date: Option<NaiveDateTime>,
    #[serde(deserialize_with = "optional_timestamp")]
    pub order_delivered_customer_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "optional_timestamp")]
    pub order_estimated_delivery_date: Option<NaiveDateTime>,
}

impl Order {
    pub fn is_delivered(&self) -> bool {
        self.order_status == DELIVERED
    }
}

/// Row of order_items_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: String,
    #[serde(default)]
    pub order_item_id: Option<u32>,
    pub product_id: String,
    #[serde(default)]
    pub seller_id: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub freight_value: Option<f64>,
}

/// Row of products_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    #[serde(deserialize_with = "optional_text")]
    pub product_category_name: Option<String>,
}

/// Row of product_category_name_translation.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTranslation {
    pub product_category_name: String,
    pub product_category_name_english: String,
}

/// Row of sellers_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seller {
    pub seller_id: String,
    pub seller_zip_code_prefix: u32,
    pub seller_city: String,
    #[serde(default)]
    pub seller_state: Option<String>,
}

/// Row of geolocation_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    pub geolocation_zip_code_prefix: u32,
    pub geolocation_lat: f64,
    pub geolocation_lng: f64,
    #[serde(default)]
    pub geolocation_city: Option<String>,
    #[serde(default)]
    pub geolocation_state: Option<String>,
}

/// Row of order_payments_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayment {
    pub order_id: String,
    #[serde(default)]
    pub payment_sequential: Option<u32>,
    pub payment_type: String,
    #[serde(default)]
    pub payment_installments: Option<u32>,
    pub payment_value: f64,
}

/// Row of customers_dataset.csv
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    #[serde(default)]
    pub customer_unique_id: Option<String>,
    #[serde(default)]
    pub customer_zip_code_prefix: Option<u32>,
    #[serde(default)]
    pub customer_city: Option<String>,
    #[serde(default)]
    pub customer_state: Option<String>,
}
