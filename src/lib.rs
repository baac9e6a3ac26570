// Library interface for padboard
// This allows integration tests to access internal modules

pub mod aggregate;
pub mod chart;
pub mod errors;
pub mod records;
pub mod ui;

// Re-export commonly used types
pub use aggregate::{PayloadRange, SuccessBreakdown, aggregate_successes, filter_by_payload_and_site};
pub use chart::{ChartSpec, PieSpec, ScatterSpec};
pub use errors::DashboardError;
pub use records::{ALL_SITES, LaunchRecord, Outcome, RecordStore, SiteOption, build_site_options};
