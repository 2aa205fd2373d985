pub mod aggregation_service;
pub mod chart_service;
pub mod format;
pub mod progress;
pub mod summary_service;
