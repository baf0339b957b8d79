//! Derived tables computed from the base tables
//!
//! Every function here is a pure, single pass over a borrowed `Datasets`.
//! Nothing is cached: calling a function twice on the same data yields the
//! same output.

pub mod category;
pub mod delivery;
pub mod seller;
pub mod transaction;

use indexmap::IndexMap;
use std::hash::Hash;

pub use category::{
    available_categories, count_selected_category_sales, create_category_sales,
    create_orders_category, create_product_english, create_top_categories_by_sales,
    create_top_performing_product_category, CategoryCount, CategorySales, OrdersCategory,
    ProductEnglish,
};
pub use delivery::{
    create_delivered_orders, create_order_status_count, delivery_summary,
    delivery_time_histogram, DeliveredOrder, DeliverySummary, HistogramBin, StatusCount,
};
pub use seller::{
    available_cities, create_sellers_geolocation, create_top_cities_with_seller, map_center,
    sellers_in_city, CityCount, GeoPoint, SellerLocation,
};
pub use transaction::{create_monthly_sales, create_payment_type_count, MonthlySales, PaymentTypeCount};

/// Label of the synthetic bucket that absorbs everything outside the top N
pub const OTHERS: &str = "Others";

/// Count occurrences of each key.
///
/// Sorted by count descending; equal counts keep first-seen order.
pub fn value_counts<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Hash + Eq,
    I: IntoIterator<Item = K>,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    let mut ranked: Vec<(K, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Keep the first `n` ranked counts and fold the rest into one `Others` row.
///
/// The `Others` row is always present, with a zero count when nothing was left over.
pub fn top_n_with_others(ranked: Vec<(String, usize)>, n: usize) -> Vec<(String, usize)> {
    let mut iter = ranked.into_iter();
    let mut top: Vec<(String, usize)> = iter.by_ref().take(n).collect();
    let others: usize = iter.map(|(_, count)| count).sum();
    top.push((OTHERS.to_string(), others));
    top
}
