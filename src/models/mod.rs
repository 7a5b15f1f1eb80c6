pub mod list_stat;
pub mod mailing;
pub mod recording;

pub use list_stat::*;
pub use mailing::*;
pub use recording::*;
