//! Shared business logic for the dashboard API
//!
//! Holds the immutable base tables and renders views on demand. Derived
//! tables are never cached: each call recomputes from the loaded data.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::loader::{DatasetStats, Datasets};
use crate::views::{self, RenderOptions, View, ViewPayload, ViewRequest};

pub struct DashboardService {
    datasets: Arc<Datasets>,
    options: RenderOptions,
}

impl DashboardService {
    pub fn new(datasets: Datasets, options: RenderOptions) -> Self {
        Self {
            datasets: Arc::new(datasets),
            options,
        }
    }

    /// Load every base table named by the config
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let paths = config.dataset_paths();
        info!("Loading datasets from {:?}", config.data_dir);
        let datasets = Datasets::load(&paths)
            .with_context(|| format!("loading datasets from {}", config.data_dir.display()))?;

        Ok(Self::new(
            datasets,
            RenderOptions {
                histogram_bins: config.histogram_bins,
            },
        ))
    }

    pub fn datasets(&self) -> &Datasets {
        &self.datasets
    }

    pub fn stats(&self) -> DatasetStats {
        self.datasets.stats()
    }

    pub fn render(&self, view: View, request: &ViewRequest) -> ViewPayload {
        debug!(
            view = view.key(),
            category = ?request.category,
            city = ?request.city,
            "rendering view"
        );
        views::render_view(&self.datasets, view, request, self.options)
    }
}
