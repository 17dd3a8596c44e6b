use crate::core::format::{format_currency, format_number};
use crate::core::{HouseReport, ReportFormat, ReportRenderer};
use crate::utils::error::Result;
use serde::Serialize;
use tera::{Context, Tera};

const HTML_TEMPLATE_NAME: &str = "report.html";
const HTML_TEMPLATE: &str = include_str!("templates/report.html");

#[derive(Debug, Serialize)]
struct RoomView {
    name: String,
    length: String,
    width: String,
    height: String,
    volume: String,
}

/// Display strings for the templates, so number formatting lives in one place.
#[derive(Debug, Serialize)]
struct ReportView {
    address: String,
    price_per_cubic_meter: String,
    rooms: Vec<RoomView>,
    total_volume: String,
    total_price: String,
    generated_at: String,
}

impl From<&HouseReport> for ReportView {
    fn from(report: &HouseReport) -> Self {
        Self {
            address: report.address.clone(),
            price_per_cubic_meter: format_number(report.price_per_cubic_meter),
            rooms: report
                .rooms
                .iter()
                .map(|room| RoomView {
                    name: room.name.clone(),
                    length: format_number(room.length),
                    width: format_number(room.width),
                    height: format_number(room.height),
                    volume: format_number(room.volume),
                })
                .collect(),
            total_volume: format_number(report.total_volume),
            total_price: format_currency(report.total_price),
            generated_at: report.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

pub struct HtmlRenderer {
    tera: Tera,
}

impl HtmlRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        // the .html suffix turns on tera's autoescaping for room names and addresses
        tera.add_raw_template(HTML_TEMPLATE_NAME, HTML_TEMPLATE)?;
        Ok(Self { tera })
    }
}

impl ReportRenderer for HtmlRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Html
    }

    fn render(&self, report: &HouseReport) -> Result<String> {
        let context = Context::from_serialize(ReportView::from(report))?;
        let html = self.tera.render(HTML_TEMPLATE_NAME, &context)?;
        Ok(html)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl ReportRenderer for JsonRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }

    fn render(&self, report: &HouseReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl ReportRenderer for TextRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }

    fn render(&self, report: &HouseReport) -> Result<String> {
        let view = ReportView::from(report);
        let mut lines = vec![
            "House Volume and Price Calculator".to_string(),
            String::new(),
            format!("Address: {}", view.address),
            format!("Price per m³: €{}", view.price_per_cubic_meter),
            String::new(),
            format!("Rooms in {}:", view.address),
        ];

        for room in &view.rooms {
            lines.push(format!(
                "- {} - Dimensions: {}m x {}m x {}m - Volume: {} m³",
                room.name, room.length, room.width, room.height, room.volume
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total Volume: {} m³", view.total_volume));
        lines.push(format!("Total House Price: €{}", view.total_price));
        lines.push(String::new());

        Ok(lines.join("\n"))
    }
}

pub fn renderer_for(format: ReportFormat) -> Result<Box<dyn ReportRenderer>> {
    let renderer: Box<dyn ReportRenderer> = match format {
        ReportFormat::Html => Box::new(HtmlRenderer::new()?),
        ReportFormat::Json => Box::new(JsonRenderer),
        ReportFormat::Text => Box::new(TextRenderer),
    };
    Ok(renderer)
}
