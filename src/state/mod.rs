pub mod dashboard;
pub mod ui;

pub use ui::*;
