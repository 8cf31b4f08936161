//! Configuration loading and management

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the HTTP listener binds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Log filter used when `RUST_LOG` is unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Records preloaded into the in-memory stores at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

/// Complete application configuration
///
/// Every section is optional in YAML; missing sections take their defaults.
///
/// ```yaml
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:
///   filter: grubdash=debug,tower_http=info
/// seed:
///   dishes:
///     - id: d1
///       name: Dolcelatte and chickpea spaghetti
///       description: Spaghetti topped with a blend of dolcelatte and fresh chickpeas
///       price: 19
///       image_url: https://images.example.com/spaghetti.jpg
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_yaml_file(path),
            None => Ok(Self::default()),
        }
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::OrderStatus;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.logging.filter, "info");
        assert!(config.seed.dishes.is_empty());
        assert!(config.seed.orders.is_empty());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AppConfig::from_yaml_str("  \n").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let yaml = r#"
server:
  port: 8080
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_seed_records() {
        let yaml = r#"
seed:
  dishes:
    - id: d1
      name: Falafel
      description: Chickpea fritters
      price: 8
      image_url: https://example.com/falafel.png
  orders:
    - id: o1
      deliverTo: 308 Negra Arroyo Lane
      mobileNumber: (505) 143-3369
      status: pending
      dishes:
        - dishId: d1
          quantity: 2
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.seed.dishes.len(), 1);
        assert_eq!(config.seed.dishes[0].price, 8);
        assert_eq!(config.seed.orders[0].deliver_to, "308 Negra Arroyo Lane");
        assert_eq!(config.seed.orders[0].status, Some(OrderStatus::Pending));
        assert_eq!(config.seed.orders[0].dishes[0].quantity, 2);
    }

    #[test]
    fn test_seed_order_with_unknown_status_fails() {
        let yaml = r#"
seed:
  orders:
    - id: o1
      deliverTo: a
      mobileNumber: b
      status: teleported
      dishes: []
"#;
        assert!(AppConfig::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_invalid_yaml_fails() {
        assert!(AppConfig::from_yaml_str("server: [unclosed").is_err());
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::from_yaml_file("/nonexistent/grubdash.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/grubdash.yaml"));
    }
}
