//! TOML configuration for the CLI.

use crate::format::{ColorChoice, Formattable, OutputFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use url::Url;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Style configuration
    #[serde(default)]
    pub style: StyleConfig,
    /// Hub endpoint configuration
    #[serde(default)]
    pub hub: HubConfig,
}

/// Style configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Output format: pretty, json, yaml
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    /// When to color output: auto, always, never
    #[serde(default)]
    pub color: ColorChoice,
}

fn default_format() -> OutputFormat {
    OutputFormat::Pretty
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Pretty,
            color: ColorChoice::Auto,
        }
    }
}

/// Hub endpoint configuration section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubConfig {
    /// Base URL of the hub API
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Default number of tag records per request
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Fixed User-Agent header; none sent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_base_url() -> String {
    libhubtag::DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    libhubtag::DEFAULT_PAGE_SIZE
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
            user_agent: None,
        }
    }
}

/// Path of the config file under the platform config directory
pub fn get_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("hubtag")
        .join("config.toml")
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &PathBuf) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> Result<(), String> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, toml_str).map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Looks up a dotted key, e.g. "hub.page_size"
    pub fn get_value(&self, key: &str) -> Option<String> {
        match key {
            "style.format" => Some(self.style.format.as_str().to_string()),
            "style.color" => Some(self.style.color.as_str().to_string()),
            "hub.base_url" => Some(self.hub.base_url.clone()),
            "hub.page_size" => Some(self.hub.page_size.to_string()),
            "hub.user_agent" => self.hub.user_agent.clone(),
            _ => None,
        }
    }

    /// Sets a dotted key from its string representation
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "style.format" => {
                self.style.format = OutputFormat::from(value);
                Ok(())
            }
            "style.color" => {
                self.style.color = ColorChoice::from(value);
                Ok(())
            }
            "hub.base_url" => {
                Url::parse(value).map_err(|e| format!("Invalid base URL '{}': {}", value, e))?;
                self.hub.base_url = value.to_string();
                Ok(())
            }
            "hub.page_size" => {
                let n: u32 = value
                    .parse()
                    .map_err(|_| format!("Invalid page size '{}'", value))?;
                if n == 0 {
                    return Err("Page size must be greater than zero".to_string());
                }
                self.hub.page_size = n;
                Ok(())
            }
            "hub.user_agent" => {
                self.hub.user_agent = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                };
                Ok(())
            }
            _ => Err(format!("Unknown configuration key '{}'", key)),
        }
    }
}

impl Formattable for Config {
    fn format_pretty(&self) -> String {
        let mut output = format!(
            "[style]\nformat = \"{}\"\ncolor = \"{}\"\n",
            self.style.format.as_str(),
            self.style.color.as_str()
        );

        output.push_str("\n[hub]\n");
        output.push_str(&format!("base_url = \"{}\"\n", self.hub.base_url));
        output.push_str(&format!("page_size = {}\n", self.hub.page_size));
        if let Some(ref user_agent) = self.hub.user_agent {
            output.push_str(&format!("user_agent = \"{}\"\n", user_agent));
        }

        output
    }
}
