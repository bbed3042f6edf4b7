pub mod breakdown;
pub mod distribution;
pub mod equity;
pub mod patterns;
pub mod report;
pub mod rounding;
pub mod summary;
pub mod win_rate;

pub use breakdown::{breakdown, CategoryStat, Dimension, SortPolicy};
pub use distribution::DistributionSlice;
pub use equity::EquityPoint;
pub use patterns::{DimensionReport, WinShare};
pub use report::{AnalyticsReport, JournalAnalyzer};
pub use summary::JournalSummary;
pub use win_rate::WinRatePoint;
