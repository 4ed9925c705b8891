//! Configuration loading and management

use crate::core::deep_link::DEFAULT_WHATSAPP_PHONE;
use crate::core::error::{ConfigError, StorefrontResult};
use crate::core::message::Branding;
use serde::{Deserialize, Serialize};

fn default_bind_address() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_whatsapp_phone() -> String {
    DEFAULT_WHATSAPP_PHONE.to_string()
}

fn default_brand_name() -> String {
    Branding::default().brand_name
}

fn default_site_url() -> String {
    Branding::default().site_url
}

/// Service configuration
///
/// Every field has a default, so an empty document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Path prefix for the API routes (e.g. "/api"); empty mounts them at the root
    #[serde(default)]
    pub api_prefix: String,

    /// Shop number that receives order messages
    #[serde(default = "default_whatsapp_phone")]
    pub whatsapp_phone: String,

    /// Store name shown in the message header
    #[serde(default = "default_brand_name")]
    pub brand_name: String,

    /// Storefront URL shown in the message footer
    #[serde(default = "default_site_url")]
    pub site_url: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            api_prefix: String::new(),
            whatsapp_phone: default_whatsapp_phone(),
            brand_name: default_brand_name(),
            site_url: default_site_url(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> StorefrontResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> StorefrontResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.whatsapp_phone.is_empty()
            || !self.whatsapp_phone.chars().all(|c| c.is_ascii_digit())
        {
            return Err(ConfigError::InvalidValue {
                field: "whatsapp_phone".to_string(),
                value: self.whatsapp_phone.clone(),
                message: "must be a non-empty string of digits".to_string(),
            });
        }

        if !self.api_prefix.is_empty()
            && (!self.api_prefix.starts_with('/') || self.api_prefix.ends_with('/'))
        {
            return Err(ConfigError::InvalidValue {
                field: "api_prefix".to_string(),
                value: self.api_prefix.clone(),
                message: "must start with '/' and not end with '/'".to_string(),
            });
        }

        Ok(())
    }

    /// Header and footer text for order messages
    pub fn branding(&self) -> Branding {
        Branding {
            brand_name: self.brand_name.clone(),
            site_url: self.site_url.clone(),
        }
    }
}
