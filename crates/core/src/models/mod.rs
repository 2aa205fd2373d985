pub mod auth;
pub mod category;
pub mod chart;
pub mod financing;
pub mod goal;
pub mod report;
pub mod snapshot;
pub mod summary;
pub mod transaction;
