//! Analytics over the Brazilian e-commerce public dataset.
//!
//! Loads eight CSV tables once, derives aggregate views from them on demand
//! and serves those views over a local REST API.

pub mod aggregations;
pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod views;

pub use error::{LoadError, ViewError};
pub use loader::Datasets;
pub use views::{View, ViewPayload, ViewRequest};

/// Install the global tracing subscriber, honouring `RUST_LOG` (default `info`)
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();
}
