pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::app::printer::{Printer, RenderOptions};
pub use crate::config::{dataset::DataDirectory, toml_config::TomlConfig, Settings};
pub use crate::core::{classify::Tier, engine::OutcomeEngine, engine::RunSummary, outcomes::Outcomes};
pub use crate::utils::error::{OutcomeError, Result};
