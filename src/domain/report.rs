use crate::domain::model::{House, Room};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Text,
}

impl ReportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Text => "txt",
        }
    }

    pub fn default_file_name(&self) -> String {
        format!("house-report.{}", self.extension())
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Text => "text",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomReport {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub volume: f64,
}

impl From<&Room> for RoomReport {
    fn from(room: &Room) -> Self {
        Self {
            name: room.name().to_string(),
            length: room.length(),
            width: room.width(),
            height: room.height(),
            volume: room.volume(),
        }
    }
}

/// Read-only snapshot of a house, the only thing renderers ever see.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HouseReport {
    pub address: String,
    pub price_per_cubic_meter: f64,
    pub rooms: Vec<RoomReport>,
    pub total_volume: f64,
    pub total_price: f64,
    pub generated_at: DateTime<Utc>,
}

impl HouseReport {
    pub fn from_house(house: &House) -> Self {
        Self::with_timestamp(house, Utc::now())
    }

    pub fn with_timestamp(house: &House, generated_at: DateTime<Utc>) -> Self {
        Self {
            address: house.address().to_string(),
            price_per_cubic_meter: house.price_per_cubic_meter(),
            rooms: house.rooms().iter().map(RoomReport::from).collect(),
            total_volume: house.total_volume(),
            total_price: house.total_price(),
            generated_at,
        }
    }
}
