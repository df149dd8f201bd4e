//! Provider credentials and where they come from.
//!
//! The caller picks a [`CredentialsSource`] once (environment for scripted
//! runs, a named account from the configuration file otherwise) and hands the
//! resolved [`Credentials`] to the Clockify client constructor.

use crate::libs::{config::Config, error::ReportError, messages::Message};
use crate::msg_print;
use dialoguer::{theme::ColorfulTheme, Input, Password};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://api.clockify.me/api/v1";

pub const ENV_API_KEY: &str = "CLOCKIFY_API_KEY";
pub const ENV_WORKSPACE_ID: &str = "CLOCKIFY_WORKSPACE_ID";
pub const ENV_BASE_URL: &str = "CLOCKIFY_BASE_URL";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Credentials {
    pub api_key: String,
    pub workspace_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsSource {
    /// `CLOCKIFY_*` variables, with a `.env` file loaded first.
    Env,
    /// Named entry under `accounts` in the configuration file.
    Store(String),
}

impl CredentialsSource {
    pub fn from_account(account: Option<String>) -> Self {
        match account {
            Some(name) => Self::Store(name),
            None => Self::Env,
        }
    }
}

impl Credentials {
    pub fn resolve(source: &CredentialsSource, config: &Config) -> Result<Self, ReportError> {
        match source {
            CredentialsSource::Env => {
                let _ = dotenv::dotenv();
                Self::from_lookup(|key| std::env::var(key).ok())
            }
            CredentialsSource::Store(name) => config
                .accounts
                .get(name)
                .cloned()
                .ok_or_else(|| ReportError::UnknownAccount(name.clone())),
        }
    }

    /// Builds credentials from an environment-like lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ReportError::MissingCredential(key.to_string()))
        };

        Ok(Self {
            api_key: required(ENV_API_KEY)?,
            workspace_id: required(ENV_WORKSPACE_ID)?,
            base_url: lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()).unwrap_or_else(default_base_url),
        })
    }

    /// Prompts for an account, using `existing` values as defaults.
    pub fn init(existing: Option<&Self>) -> anyhow::Result<Self> {
        let existing = existing.cloned().unwrap_or(Self {
            api_key: String::new(),
            workspace_id: String::new(),
            base_url: default_base_url(),
        });
        msg_print!(Message::ConfigModuleAccount);

        let api_key = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiKey.to_string())
            .allow_empty_password(!existing.api_key.is_empty())
            .interact()?;

        Ok(Self {
            api_key: if api_key.is_empty() { existing.api_key } else { api_key },
            workspace_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptWorkspaceId.to_string())
                .default(existing.workspace_id)
                .interact_text()?,
            base_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptBaseUrl.to_string())
                .default(existing.base_url)
                .interact_text()?,
        })
    }
}
