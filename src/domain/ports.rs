use crate::domain::report::{HouseReport, ReportFormat};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait ReportRenderer {
    fn format(&self) -> ReportFormat;
    fn render(&self, report: &HouseReport) -> Result<String>;
}
