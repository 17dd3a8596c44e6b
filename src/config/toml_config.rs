use crate::domain::model::{House, Room, DEFAULT_PRICE_PER_CUBIC_METER};
use crate::domain::report::ReportFormat;
use crate::utils::error::{HouseError, Result};
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_positive_number,
    validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseConfig {
    pub house: HouseSection,
    #[serde(default)]
    pub rooms: Vec<RoomConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseSection {
    pub address: Option<String>,
    pub price_per_cubic_meter: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<ReportFormat>,
    pub path: Option<String>,
    pub file_name: Option<String>,
}

impl HouseConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HouseError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn address(&self) -> Result<&str> {
        validate_required_field("house.address", &self.house.address).map(String::as_str)
    }

    pub fn price_per_cubic_meter(&self) -> f64 {
        self.house
            .price_per_cubic_meter
            .unwrap_or(DEFAULT_PRICE_PER_CUBIC_METER)
    }

    pub fn output_format(&self) -> Option<ReportFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.path.as_deref())
    }

    pub fn output_file_name(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.file_name.as_deref())
    }

    /// Builds the house with rooms in file order.
    pub fn to_house(&self) -> Result<House> {
        let mut house = House::new(self.address()?, self.price_per_cubic_meter())?;
        for room in &self.rooms {
            house.add_room(Room::new(room.name.clone(), room.length, room.width, room.height)?)?;
        }
        Ok(house)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("house.address", self.address()?)?;

        if let Some(price) = self.house.price_per_cubic_meter {
            validate_positive_number("house.price_per_cubic_meter", price)?;
        }

        for (index, room) in self.rooms.iter().enumerate() {
            validate_non_empty_string(&format!("rooms[{}].name", index), &room.name)?;
            validate_positive_number(&format!("rooms[{}].length", index), room.length)?;
            validate_positive_number(&format!("rooms[{}].width", index), room.width)?;
            validate_positive_number(&format!("rooms[{}].height", index), room.height)?;
        }

        if let Some(path) = self.output_path() {
            validate_path("output.path", path)?;
        }

        if let Some(file_name) = self.output_file_name() {
            let format = self.output_format().unwrap_or_default();
            validate_file_extension("output.file_name", file_name, &[format.extension()])?;
        }

        Ok(())
    }
}

impl Validate for HouseConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
