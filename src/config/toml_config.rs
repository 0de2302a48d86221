use crate::core::rsvp_form::{DEFAULT_EVENTS, STORAGE_KEY};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, RsvpError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORE_PATH: &str = "./vplanit-store.json";
pub const DEFAULT_EVENT_LIST: [&str; 5] = ["Haldi", "Mehendi", "Sangeet", "Wedding", "Reception"];

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TomlConfig {
    pub storage: StorageConfig,
    pub invitation: InvitationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_STORE_PATH.to_string(),
            key: STORAGE_KEY.to_string(),
        }
    }
}

/// What the invitation page is pre-filled with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    pub family_name: String,
    pub contact_phone: String,
    pub events: Vec<String>,
    pub default_events: Vec<String>,
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            family_name: String::new(),
            contact_phone: String::new(),
            events: DEFAULT_EVENT_LIST.iter().map(|e| e.to_string()).collect(),
            default_events: DEFAULT_EVENTS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub json: bool,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RsvpError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RSVP_PHONE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RsvpError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn store_path(&self) -> &str {
        &self.storage.path
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("storage.path", &self.storage.path)?;
        validation::validate_non_empty_string("storage.key", &self.storage.key)?;
        validation::validate_unique_names("invitation.events", &self.invitation.events)?;
        validation::validate_subset(
            "invitation.default_events",
            &self.invitation.default_events,
            &self.invitation.events,
        )?;
        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn storage_key(&self) -> &str {
        &self.storage.key
    }

    fn events(&self) -> &[String] {
        &self.invitation.events
    }

    fn default_events(&self) -> &[String] {
        &self.invitation.default_events
    }

    fn family_name(&self) -> &str {
        &self.invitation.family_name
    }

    fn contact_phone(&self) -> &str {
        &self.invitation.contact_phone
    }
}
