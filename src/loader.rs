//! Dataset loader
//!
//! Reads the eight base tables into memory once. The resulting `Datasets`
//! value is immutable and is handed by reference to every aggregation.

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::DatasetPaths;
use crate::error::LoadError;
use crate::models::{
    CategoryTranslation, Customer, Geolocation, Order, OrderItem, OrderPayment, Product, Seller,
};

/// In-memory base tables
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub geolocation: Vec<Geolocation>,
    pub customers: Vec<Customer>,
    pub order_items: Vec<OrderItem>,
    pub order_payments: Vec<OrderPayment>,
    pub orders: Vec<Order>,
    pub category_translation: Vec<CategoryTranslation>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
}

/// Row count per base table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub geolocation: usize,
    pub customers: usize,
    pub order_items: usize,
    pub order_payments: usize,
    pub orders: usize,
    pub category_translation: usize,
    pub products: usize,
    pub sellers: usize,
}

impl Datasets {
    /// Load every table. The first missing or malformed file aborts the load.
    pub fn load(paths: &DatasetPaths) -> Result<Self, LoadError> {
        let datasets = Self {
            geolocation: read_table(&paths.geolocation)?,
            customers: read_table(&paths.customers)?,
            order_items: read_table(&paths.order_items)?,
            order_payments: read_table(&paths.order_payments)?,
            orders: read_table(&paths.orders)?,
            category_translation: read_table(&paths.category_translation)?,
            products: read_table(&paths.products)?,
            sellers: read_table(&paths.sellers)?,
        };
        Ok(datasets)
    }

    pub fn stats(&self) -> DatasetStats {
        DatasetStats {
            geolocation: self.geolocation.len(),
            customers: self.customers.len(),
            order_items: self.order_items.len(),
            order_payments: self.order_payments.len(),
            orders: self.orders.len(),
            category_translation: self.category_translation.len(),
            products: self.products.len(),
            sellers: self.sellers.len(),
        }
    }
}

/// Deserialize every row of a headered, comma-delimited file
pub fn read_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let rows = reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| {
            row.map_err(|source| LoadError::Row {
                path: path.to_path_buf(),
                // header is line 1
                line: source
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(i as u64 + 2),
                source,
            })
        })
        .collect::<Result<Vec<T>, _>>()?;

    info!("Loaded {} rows from {:?}", rows.len(), path);
    Ok(rows)
}
