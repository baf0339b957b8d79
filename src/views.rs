//! View selector
//!
//! Maps a menu entry to the aggregations it needs and shapes their output
//! for a chart renderer. Every render recomputes from the base tables;
//! nothing survives between views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::aggregations::{self, DeliverySummary, GeoPoint, HistogramBin};
use crate::config::DEFAULT_HISTOGRAM_BINS;
use crate::error::ViewError;
use crate::loader::Datasets;

pub const DASHBOARD_TITLE: &str = "E-commerce Data Analytics Dashboard";
pub const NO_SELLERS_FOUND: &str = "No sellers found for this city.";
pub const NO_SALES_FOUND: &str = "No sales found for this category.";

// ============================================================================
// Menu
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    Home,
    DeliveryTracking,
    Products,
    Sellers,
    Transactions,
}

impl View {
    pub const ALL: [View; 5] = [
        View::Home,
        View::DeliveryTracking,
        View::Products,
        View::Sellers,
        View::Transactions,
    ];

    /// URL-safe identifier
    pub fn key(self) -> &'static str {
        match self {
            View::Home => "home",
            View::DeliveryTracking => "delivery-tracking",
            View::Products => "products",
            View::Sellers => "sellers",
            View::Transactions => "transactions",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            View::Home => "Home",
            View::DeliveryTracking => "Delivery Tracking",
            View::Products => "Products",
            View::Sellers => "Sellers",
            View::Transactions => "Transactions",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for View {
    type Err = ViewError;

    /// Accepts either the key or the label, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        View::ALL
            .into_iter()
            .find(|v| v.key().eq_ignore_ascii_case(wanted) || v.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ViewError::UnknownView(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
}

pub fn menu() -> Vec<MenuEntry> {
    View::ALL
        .into_iter()
        .map(|v| MenuEntry {
            key: v.key(),
            label: v.label(),
        })
        .collect()
}

/// Secondary selections made inside a view
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewRequest {
    pub category: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub histogram_bins: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

// ============================================================================
// Payloads
// ============================================================================

/// Result of a selection that may match nothing
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Lookup<T> {
    Found { value: T },
    NotFound { message: String },
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarPoint {
    pub category: Option<String>,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub month: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub introduction: Vec<&'static str>,
    pub menu: Vec<MenuEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryView {
    pub summary: Option<DeliverySummary>,
    pub order_status: Vec<PieSlice>,
    pub delivery_time_histogram: Vec<HistogramBin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsView {
    pub items_sold_per_category: Vec<PieSlice>,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub selected_category_sales: Lookup<f64>,
    pub sales_per_category: Vec<BarPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellersView {
    pub heat_points: Vec<GeoPoint>,
    pub map_center: Option<GeoPoint>,
    pub cities: Vec<String>,
    pub selected_city: Option<String>,
    pub sellers_in_city: Lookup<Vec<String>>,
    pub sellers_by_city: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionsView {
    pub payment_types: Vec<PieSlice>,
    pub monthly_sales: Vec<LinePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "kebab-case")]
pub enum ViewPayload {
    Home(HomeView),
    DeliveryTracking(DeliveryView),
    Products(ProductsView),
    Sellers(SellersView),
    Transactions(TransactionsView),
}

// ============================================================================
// Rendering
// ============================================================================

/// Run the aggregations behind `view`
pub fn render_view(
    data: &Datasets,
    view: View,
    request: &ViewRequest,
    options: RenderOptions,
) -> ViewPayload {
    match view {
        View::Home => ViewPayload::Home(render_home()),
        View::DeliveryTracking => ViewPayload::DeliveryTracking(render_delivery(data, options)),
        View::Products => ViewPayload::Products(render_products(data, request)),
        View::Sellers => ViewPayload::Sellers(render_sellers(data, request)),
        View::Transactions => ViewPayload::Transactions(render_transactions(data)),
    }
}

fn render_home() -> HomeView {
    HomeView {
        title: DASHBOARD_TITLE,
        introduction: vec![
            "Insights gathered from the Brazilian e-commerce public dataset.",
            "Select a menu entry to explore delivery, product, seller and transaction data.",
        ],
        menu: menu(),
    }
}

fn render_delivery(data: &Datasets, options: RenderOptions) -> DeliveryView {
    let delivered = aggregations::create_delivered_orders(data);
    let times: Vec<i64> = delivered.iter().filter_map(|o| o.delivery_time).collect();

    DeliveryView {
        summary: aggregations::delivery_summary(&delivered),
        order_status: aggregations::create_order_status_count(data)
            .into_iter()
            .map(|s| PieSlice {
                name: s.order_status,
                value: s.count as f64,
            })
            .collect(),
        delivery_time_histogram: aggregations::delivery_time_histogram(
            &times,
            options.histogram_bins,
        ),
    }
}

fn render_products(data: &Datasets, request: &ViewRequest) -> ProductsView {
    let category_sales = aggregations::create_category_sales(data);
    let categories = aggregations::available_categories(data);
    let selected_category = request
        .category
        .clone()
        .or_else(|| categories.first().cloned());

    let selected_category_sales = match &selected_category {
        Some(category) => {
            match aggregations::count_selected_category_sales(&category_sales, category).first() {
                Some(row) => Lookup::Found { value: row.price },
                None => Lookup::NotFound {
                    message: NO_SALES_FOUND.to_string(),
                },
            }
        }
        None => Lookup::NotFound {
            message: NO_SALES_FOUND.to_string(),
        },
    };

    ProductsView {
        items_sold_per_category: aggregations::create_top_performing_product_category(data)
            .into_iter()
            .map(|c| PieSlice {
                name: c.category,
                value: c.count as f64,
            })
            .collect(),
        categories,
        selected_category,
        selected_category_sales,
        sales_per_category: aggregations::create_top_categories_by_sales(data)
            .into_iter()
            .map(|s| BarPoint {
                category: s.product_category_name_english,
                value: s.price,
            })
            .collect(),
    }
}

fn render_sellers(data: &Datasets, request: &ViewRequest) -> SellersView {
    let locations = aggregations::create_sellers_geolocation(data);
    let cities = aggregations::available_cities(data);
    let selected_city = request.city.clone().or_else(|| cities.first().cloned());

    let sellers = selected_city
        .as_deref()
        .map(|city| aggregations::sellers_in_city(data, city))
        .unwrap_or_default();
    let sellers_in_city = if sellers.is_empty() {
        Lookup::NotFound {
            message: NO_SELLERS_FOUND.to_string(),
        }
    } else {
        Lookup::Found { value: sellers }
    };

    SellersView {
        heat_points: locations.iter().map(GeoPoint::from).collect(),
        map_center: aggregations::map_center(&locations),
        cities,
        selected_city,
        sellers_in_city,
        sellers_by_city: aggregations::create_top_cities_with_seller(data)
            .into_iter()
            .map(|c| PieSlice {
                name: c.seller_city,
                value: c.count as f64,
            })
            .collect(),
    }
}

fn render_transactions(data: &Datasets) -> TransactionsView {
    TransactionsView {
        payment_types: aggregations::create_payment_type_count(data)
            .into_iter()
            .map(|p| PieSlice {
                name: p.payment_type,
                value: p.count as f64,
            })
            .collect(),
        monthly_sales: aggregations::create_monthly_sales(data)
            .into_iter()
            .map(|m| LinePoint {
                month: m.order_purchase_timestamp,
                value: m.payment_value,
            })
            .collect(),
    }
}
