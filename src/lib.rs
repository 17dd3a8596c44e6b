pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{HouseConfig, LocalStorage};

pub use crate::core::engine::ReportEngine;
pub use crate::core::report::{HtmlRenderer, JsonRenderer, TextRenderer};
pub use domain::model::{House, Room, DEFAULT_PRICE_PER_CUBIC_METER};
pub use domain::report::{HouseReport, ReportFormat};
pub use domain::sample::sample_house;
pub use utils::error::{HouseError, Result};
