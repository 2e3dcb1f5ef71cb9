pub mod dataset;
pub mod toml_config;

use crate::core::DisplayOptions;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use std::path::PathBuf;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "group-outcomes")]
#[command(about = "Print every possible outcome of the remaining group-stage matches")]
pub struct CliConfig {
    /// Name of the dataset directory under the data root
    #[arg(short, long)]
    pub data: Option<String>,

    /// Directory holding the datasets
    #[arg(long)]
    pub data_root: Option<PathBuf>,

    /// Print full team names instead of codes
    #[arg(short, long)]
    pub fullnames: bool,

    /// Do not colourise output, use text markers instead
    #[arg(short = 'c', long)]
    pub nocolour: bool,

    /// Show the results leading to each outcome
    #[arg(short, long)]
    pub winpath: bool,

    /// Only show this group
    #[arg(short = 'G', long)]
    pub group: Option<String>,

    /// TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Effective settings after merging the settings file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_root: PathBuf,
    pub dataset: String,
    pub full_names: bool,
    pub colour: bool,
    pub win_path: bool,
    pub group: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            data_root: PathBuf::from(&config.data.root),
            dataset: config.data.dataset.clone(),
            full_names: config.display.fullnames,
            colour: config.display.colour,
            win_path: config.display.winpath,
            group: None,
        }
    }

    /// 命令列參數覆蓋設定檔；`NO_COLOR` 一律關閉顏色
    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                tracing::info!("📁 Loading settings from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };
        file.validate()?;

        let mut settings = Self::from_toml(&file);
        if let Some(root) = &cli.data_root {
            settings.data_root = root.clone();
        }
        if let Some(dataset) = &cli.data {
            settings.dataset = dataset.clone();
        }
        settings.full_names |= cli.fullnames;
        settings.win_path |= cli.winpath;
        settings.colour &= !cli.nocolour && std::env::var_os("NO_COLOR").is_none();
        settings.group = cli.group.clone();

        Ok(settings)
    }

    pub fn dataset_dir(&self) -> PathBuf {
        self.data_root.join(&self.dataset)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("data_root", &self.data_root.to_string_lossy())?;
        validate_path("dataset", &self.dataset)?;
        if let Some(group) = &self.group {
            validate_non_empty_string("group", group)?;
        }
        Ok(())
    }
}

impl DisplayOptions for Settings {
    fn full_names(&self) -> bool {
        self.full_names
    }

    fn colour(&self) -> bool {
        self.colour
    }

    fn win_path(&self) -> bool {
        self.win_path
    }

    fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.dataset_dir(), PathBuf::from("data").join("qatar-2022"));
        assert!(settings.colour);
        assert!(!settings.full_names);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_settings_validation() {
        let settings = Settings {
            group: Some(" ".to_string()),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_overrides_settings_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[data]\ndataset = \"russia-2018\"\n[display]\nwinpath = true\n")
            .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let cli = CliConfig::parse_from([
            "group-outcomes",
            "--config",
            path.as_str(),
            "-f",
            "-c",
            "-G",
            "c",
            "--data-root",
            "/srv/data",
        ]);
        let settings = Settings::from_cli(&cli).unwrap();

        assert_eq!(settings.dataset, "russia-2018");
        assert_eq!(settings.data_root, PathBuf::from("/srv/data"));
        assert!(settings.full_names);
        assert!(settings.win_path);
        assert!(!settings.colour);
        assert_eq!(settings.group.as_deref(), Some("c"));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_cli_dataset_flag() {
        let cli = CliConfig::parse_from(["group-outcomes", "-d", "brazil-2014", "-w"]);
        let settings = Settings::from_cli(&cli).unwrap();
        assert_eq!(settings.dataset, "brazil-2014");
        assert!(settings.win_path);
        assert!(!settings.full_names);
    }
}
