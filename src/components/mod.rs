pub mod charts;
pub mod common;
pub mod dashboard;
pub mod filters;
pub mod list_stats_table;
pub mod recordings_table;
