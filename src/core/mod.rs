pub mod engine;
pub mod format;
pub mod report;

pub use crate::domain::model::{House, Room};
pub use crate::domain::ports::{ReportRenderer, Storage};
pub use crate::domain::report::{HouseReport, ReportFormat, RoomReport};
pub use crate::utils::error::Result;
