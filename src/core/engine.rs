use crate::core::report::renderer_for;
use crate::core::{House, HouseReport, ReportFormat, ReportRenderer, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct ReportEngine {
    renderer: Box<dyn ReportRenderer>,
}

impl ReportEngine {
    pub fn new(renderer: impl ReportRenderer + 'static) -> Self {
        Self {
            renderer: Box::new(renderer),
        }
    }

    pub fn for_format(format: ReportFormat) -> Result<Self> {
        Ok(Self {
            renderer: renderer_for(format)?,
        })
    }

    pub fn format(&self) -> ReportFormat {
        self.renderer.format()
    }

    pub fn render(&self, house: &House) -> Result<String> {
        house.validate()?;

        tracing::info!(
            "🏠 {} - {} rooms, total volume {} m³, total price {}",
            house.address(),
            house.rooms().len(),
            house.total_volume(),
            house.total_price()
        );

        let report = HouseReport::from_house(house);
        tracing::debug!("Rendering {} report", self.renderer.format());
        self.renderer.render(&report)
    }

    pub fn write_report<S: Storage>(&self, house: &House, storage: &S, file_name: &str) -> Result<String> {
        let rendered = self.render(house)?;
        let path = storage.write_file(file_name, rendered.as_bytes())?;
        tracing::info!("📁 Report written to: {}", path);
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::TextRenderer;
    use crate::domain::model::Room;
    use crate::utils::error::HouseError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl Storage for MemoryStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.borrow().get(path).cloned().ok_or_else(|| {
                HouseError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()))
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<String> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(format!("memory://{}", path))
        }
    }

    #[test]
    fn test_write_report_goes_through_storage() {
        let mut house = House::new("Dam 1, Amsterdam", 1000.0).unwrap();
        house.add_room(Room::new("Attic", 4.0, 3.0, 2.0).unwrap()).unwrap();

        let storage = MemoryStorage::default();
        let engine = ReportEngine::new(TextRenderer);
        let path = engine.write_report(&house, &storage, "attic.txt").unwrap();

        assert_eq!(path, "memory://attic.txt");
        let written = String::from_utf8(storage.read_file("attic.txt").unwrap()).unwrap();
        assert!(written.contains("Total Volume: 24 m³"));
        assert!(written.contains("Total House Price: €24,000.00"));
    }

    #[test]
    fn test_for_format_picks_renderer() {
        let engine = ReportEngine::for_format(ReportFormat::Json).unwrap();
        assert_eq!(engine.format(), ReportFormat::Json);
        let json = engine.render(&House::with_default_price("Lot 7")).unwrap();
        assert!(json.contains("\"total_price\": 0.0"));
    }
}
