//! Dashboard section components and the combined readiness state.

mod kpi;
pub use kpi::KpiCards;

mod segments;
pub use segments::PriceDistribution;

mod brands;
pub use brands::BrandAnalysis;

mod vehicles;
pub use vehicles::VehicleDataset;

mod heatmap;
pub use heatmap::CorrelationHeatmap;

mod table;
pub(crate) use table::sortable_table;

pub mod columns;

use api::{ApiError, DashboardData};

/// Combined readiness of the five dashboard resources. The page renders
/// placeholders while loading, an explicit error card on failure, and the
/// full section stack only once the complete snapshot has arrived — there
/// is no partial-data state to reach.
#[derive(Debug, Clone, Default)]
pub enum DashboardState {
    #[default]
    Loading,
    Ready(DashboardData),
    Failed(String),
}

impl DashboardState {
    /// Collapse a settled (or still pending) fetch into the view state.
    pub fn from_settled(settled: Option<&Result<DashboardData, ApiError>>) -> Self {
        match settled {
            None => DashboardState::Loading,
            Some(Ok(data)) => DashboardState::Ready(data.clone()),
            Some(Err(err)) => DashboardState::Failed(err.to_string()),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DashboardState::Ready(_))
    }
}
