//! Configuration management for clockrep.
//!
//! Settings live in `config.json` inside the per-user data directory resolved
//! by [`DataStorage`]. The file is optional: a missing file yields
//! [`Config::default`], and every section falls back to its own defaults.
//!
//! ## Sections
//!
//! - **clockify**: page size and request timeout for provider calls
//! - **report**: company name, logo and decimal separator used by the renderer
//! - **accounts**: named provider credentials, selected with `--account`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use clockrep::libs::config::Config;
//!
//! let config = Config::read()?;
//! let report = config.report.clone().unwrap_or_default();
//! println!("Reports are issued by {}", report.company_name);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::clockify::ClockifyConfig;
use crate::libs::credentials::Credentials;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Selectable section of the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Presentation settings for rendered reports.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Printed next to the logo in the report header.
    pub company_name: String,

    /// PNG or JPEG placed top-left on the first page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_path: Option<PathBuf>,

    /// Separator between whole and fractional hours, `,` for German-style reports.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

fn default_decimal_separator() -> char {
    ','
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            company_name: String::new(),
            logo_path: None,
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl ReportConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "report".to_string(),
            name: "Report layout".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);

        let logo: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLogoPath.to_string())
            .default(default.logo_path.map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            company_name: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCompanyName.to_string())
                .default(default.company_name)
                .allow_empty(true)
                .interact_text()?,
            logo_path: if logo.trim().is_empty() { None } else { Some(PathBuf::from(logo.trim())) },
            decimal_separator: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDecimalSeparator.to_string())
                .default(default.decimal_separator)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clockify: Option<ClockifyConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub accounts: BTreeMap<String, Credentials>,
}

impl Config {
    /// Loads the configuration file, or defaults when it does not exist yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Interactive setup wizard. Existing values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ClockifyConfig::module(),
            ReportConfig::module(),
            ConfigModule {
                key: "account".to_string(),
                name: "Account".to_string(),
            },
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "clockify" => config.clockify = Some(ClockifyConfig::init(&config.clockify)?),
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                "account" => {
                    let name: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptAccountName.to_string())
                        .default("default".to_string())
                        .interact_text()?;
                    let account = Credentials::init(config.accounts.get(&name))?;
                    config.accounts.insert(name, account);
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
