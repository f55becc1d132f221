pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_DATA_DIR: &str = ".";
pub const DEFAULT_FILE: &str = "students.json";
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "student-roster")]
#[command(about = "Interactive student roster with JSON persistence")]
pub struct CliConfig {
    /// Directory that save/load file names are resolved against
    #[arg(long)]
    pub data_dir: Option<String>,

    /// File used by `save` when no file name is given
    #[arg(long)]
    pub default_file: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Roster file to load before the first prompt
    #[arg(long)]
    pub load: Option<String>,

    /// Skip the welcome banner and command list
    #[arg(long)]
    pub no_banner: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective runtime settings after merging defaults, the TOML file and
/// command line flags, in that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: String,
    pub default_file: String,
    pub banner: bool,
    pub log_level: Option<String>,
    pub log_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            default_file: DEFAULT_FILE.to_string(),
            banner: true,
            log_level: None,
            log_format: LOG_FORMATS[0].to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        let mut settings = Self::default();

        if let Some(storage) = &config.storage {
            if let Some(data_dir) = &storage.data_dir {
                settings.data_dir = data_dir.clone();
            }
            if let Some(default_file) = &storage.default_file {
                settings.default_file = default_file.clone();
            }
        }
        if let Some(banner) = config.shell.as_ref().and_then(|s| s.banner) {
            settings.banner = banner;
        }
        if let Some(logging) = &config.logging {
            settings.log_level = logging.level.clone();
            if let Some(format) = &logging.format {
                settings.log_format = format.clone();
            }
        }

        settings
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => {
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Self::from_toml(&config)
            }
            None => Self::default(),
        };

        if let Some(data_dir) = &cli.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(default_file) = &cli.default_file {
            settings.default_file = default_file.clone();
        }
        if cli.no_banner {
            settings.banner = false;
        }

        Ok(settings)
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn default_file(&self) -> &str {
        &self.default_file
    }

    fn show_banner(&self) -> bool {
        self.banner
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_path("storage.data_dir", &self.data_dir)?;
        validation::validate_path("storage.default_file", &self.default_file)?;
        validation::validate_file_extension("storage.default_file", &self.default_file, &["json"])?;
        validation::validate_one_of("logging.format", &self.log_format, &LOG_FORMATS)?;
        Ok(())
    }
}
