//! Runtime configuration for the dashboard binaries

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const GEOLOCATION_FILE: &str = "geolocation_dataset.csv";
pub const CUSTOMERS_FILE: &str = "customers_dataset.csv";
pub const ORDER_ITEMS_FILE: &str = "order_items_dataset.csv";
pub const ORDER_PAYMENTS_FILE: &str = "order_payments_dataset.csv";
pub const ORDERS_FILE: &str = "orders_dataset.csv";
pub const CATEGORY_TRANSLATION_FILE: &str = "product_category_name_translation.csv";
pub const PRODUCTS_FILE: &str = "products_dataset.csv";
pub const SELLERS_FILE: &str = "sellers_dataset.csv";

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;
pub const DEFAULT_HISTOGRAM_BINS: usize = 150;

/// Locations of the eight base tables
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetPaths {
    pub geolocation: PathBuf,
    pub customers: PathBuf,
    pub order_items: PathBuf,
    pub order_payments: PathBuf,
    pub orders: PathBuf,
    pub category_translation: PathBuf,
    pub products: PathBuf,
    pub sellers: PathBuf,
}

impl DatasetPaths {
    /// Resolve the fixed file names inside a data directory
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            geolocation: dir.join(GEOLOCATION_FILE),
            customers: dir.join(CUSTOMERS_FILE),
            order_items: dir.join(ORDER_ITEMS_FILE),
            order_payments: dir.join(ORDER_PAYMENTS_FILE),
            orders: dir.join(ORDERS_FILE),
            category_translation: dir.join(CATEGORY_TRANSLATION_FILE),
            products: dir.join(PRODUCTS_FILE),
            sellers: dir.join(SELLERS_FILE),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [
            &self.geolocation,
            &self.customers,
            &self.order_items,
            &self.order_payments,
            &self.orders,
            &self.category_translation,
            &self.products,
            &self.sellers,
        ]
        .into_iter()
        .map(PathBuf::as_path)
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
    pub histogram_bins: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
        }
    }
}

impl DashboardConfig {
    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths::from_dir(&self.data_dir)
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_from_dir() {
        let paths = DatasetPaths::from_dir("/srv/olist");
        assert_eq!(paths.orders, PathBuf::from("/srv/olist/orders_dataset.csv"));
        assert_eq!(
            paths.category_translation,
            PathBuf::from("/srv/olist/product_category_name_translation.csv")
        );
        assert_eq!(paths.iter().count(), 8);
    }

    #[test]
    fn test_default_socket_addr() {
        let addr = DashboardConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 8501);
    }
}
