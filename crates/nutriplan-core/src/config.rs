//! Client configuration
//!
//! The browser build has no file system, so the configuration is embedded at
//! compile time from `config/client.yml` and parsed once on first use.

use crate::request::PreferenceOption;
use once_cell::sync::Lazy;
use serde::Deserialize;

const EMBEDDED_CONFIG: &str = include_str!("../../../config/client.yml");

/// Loaded configuration together with any warnings raised while loading it
pub struct ClientConfigHandle {
    pub config: ClientConfig,
    pub warnings: Vec<String>,
}

/// Configuration parsed from the embedded YAML, falling back to defaults
pub static CLIENT_CONFIG: Lazy<ClientConfigHandle> =
    Lazy::new(|| match ClientConfig::from_yaml_str(EMBEDDED_CONFIG) {
        Ok((config, warnings)) => ClientConfigHandle { config, warnings },
        Err(e) => ClientConfigHandle {
            config: ClientConfig::default(),
            warnings: vec![format!("Using built-in client config: {}", e)],
        },
    });

/// Shortcut for the embedded configuration
pub fn client_config() -> &'static ClientConfig {
    &CLIENT_CONFIG.config
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClientConfig {
    pub api: ApiConfig,
    pub export: ExportConfig,
    pub calories: CalorieConfig,
    pub preferences: Vec<PreferenceOption>,
}

/// Where the meal plan service lives
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for endpoint paths; empty means same origin
    pub base_url: String,
    pub generate_path: String,
    pub export_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            generate_path: "/generate".to_string(),
            export_path: "/export_pdf".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn generate_url(&self) -> String {
        join_url(&self.base_url, &self.generate_path)
    }

    pub fn export_url(&self) -> String {
        join_url(&self.base_url, &self.export_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// PDF download settings
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    pub filename: String,
    pub mime: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: "nutriplan_meal_plan.pdf".to_string(),
            mime: "application/pdf".to_string(),
        }
    }
}

/// Calorie slider range
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct CalorieConfig {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Default for CalorieConfig {
    fn default() -> Self {
        Self {
            min: 1200,
            max: 4000,
            step: 50,
            default: 2000,
        }
    }
}

impl CalorieConfig {
    fn sanitize(&mut self, warnings: &mut Vec<String>) {
        if self.min > self.max {
            warnings.push(format!(
                "calories.min ({}) is above calories.max ({}), swapping",
                self.min, self.max
            ));
            std::mem::swap(&mut self.min, &mut self.max);
        }
        if self.step == 0 {
            warnings.push("calories.step must be positive, using 1".to_string());
            self.step = 1;
        }
        let clamped = self.default.clamp(self.min, self.max);
        if clamped != self.default {
            warnings.push(format!(
                "calories.default ({}) outside {}..={}, using {}",
                self.default, self.min, self.max, clamped
            ));
            self.default = clamped;
        }
    }
}

impl ClientConfig {
    /// Parse and sanitize a YAML document, returning sanitization warnings.
    pub fn from_yaml_str(yaml: &str) -> Result<(Self, Vec<String>), String> {
        let config: ClientConfig = serde_yaml::from_str(yaml)
            .map_err(|e| format!("Failed to parse client config YAML: {}", e))?;
        Ok(config.sanitize())
    }

    fn sanitize(mut self) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        self.calories.sanitize(&mut warnings);

        if self.export.filename.trim().is_empty() {
            warnings.push("export.filename is empty, using default".to_string());
            self.export.filename = ExportConfig::default().filename;
        }

        let before = self.preferences.len();
        self.preferences.retain(|p| !p.value.trim().is_empty());
        if self.preferences.len() != before {
            warnings.push("Dropped preferences with an empty value".to_string());
        }

        (self, warnings)
    }
}
