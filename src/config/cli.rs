use crate::config::toml_config::HouseConfig;
use crate::domain::model::House;
use crate::domain::report::ReportFormat;
use crate::domain::sample::sample_house;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_path, validate_positive_number, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "house-volume")]
#[command(about = "Calculates the volume and price of a house and renders a report")]
pub struct CliConfig {
    /// Path to a TOML house file; the built-in sample house is used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Report format, overrides [output].format
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Price per cubic meter, overrides [house].price_per_cubic_meter
    #[arg(long)]
    pub price: Option<f64>,

    /// Directory to write the report to; the report goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<String>,

    /// Report file name inside the output directory
    #[arg(long)]
    pub file_name: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// Where and how the report is written once CLI and file settings are merged.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub format: ReportFormat,
    pub output_path: Option<String>,
    pub file_name: String,
}

impl CliConfig {
    pub fn load_house_config(&self) -> Result<Option<HouseConfig>> {
        let Some(path) = &self.config else {
            return Ok(None);
        };

        tracing::info!("📁 Loading house from: {}", path);
        let config = HouseConfig::from_file(path)?;
        config.validate()?;
        Ok(Some(config))
    }

    pub fn build_house(&self, file: Option<&HouseConfig>) -> Result<House> {
        let mut house = match file {
            Some(config) => config.to_house()?,
            None => {
                tracing::info!("No house file given, using the sample house");
                sample_house()?
            }
        };

        if let Some(price) = self.price {
            tracing::info!("🔧 Price per m³ overridden to: {}", price);
            house.set_price_per_cubic_meter(price)?;
        }

        Ok(house)
    }

    pub fn report_settings(&self, file: Option<&HouseConfig>) -> ReportSettings {
        let format = self
            .format
            .or_else(|| file.and_then(HouseConfig::output_format))
            .unwrap_or_default();

        let output_path = self
            .output
            .clone()
            .or_else(|| file.and_then(|f| f.output_path().map(str::to_string)));

        // a file name from the house file only applies to the format that file renders
        let file_name = self
            .file_name
            .clone()
            .or_else(|| {
                file.filter(|f| f.output_format().unwrap_or_default() == format)
                    .and_then(|f| f.output_file_name().map(str::to_string))
            })
            .unwrap_or_else(|| format.default_file_name());

        ReportSettings {
            format,
            output_path,
            file_name,
        }
    }
}

impl Validate for ReportSettings {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output_path {
            validate_path("output.path", path)?;
        }
        validate_file_extension("file_name", &self.file_name, &[self.format.extension()])
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(price) = self.price {
            validate_positive_number("--price", price)?;
        }
        if let Some(path) = &self.config {
            validate_path("--config", path)?;
        }
        if let Some(path) = &self.output {
            validate_path("--output", path)?;
        }
        if let Some(name) = &self.file_name {
            validate_path("--file-name", name)?;
        }
        Ok(())
    }
}
