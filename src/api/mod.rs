pub mod client;
pub mod lists;
pub mod mailing;
pub mod mock;
pub mod recordings;

pub use client::*;
