pub use client::BbrClient;
pub use error::{BbrError, Result};

pub mod client;
pub mod error;
pub mod export;
pub mod model;
pub mod name;
pub mod roster;
pub(crate) mod scraper;
pub mod score;
