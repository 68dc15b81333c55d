use std::{fs, sync::Arc};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::fs::config_dir;

const FILE_NAME: &str = "core.toml";

/// Handle to the shared core configuration
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// The core configuration, serialized to TOML.
///
/// `endpoint` is the base URL of the spreadsheet row store that every remote
/// operation targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub endpoint: String,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://sheetdb.io/api/v1/medstock".into(),
        }
    }
}

impl CoreConfig {
    pub fn load() -> Self {
        let path = config_dir().join(FILE_NAME);

        if path.exists() {
            let contents = fs::read_to_string(path).unwrap();
            toml::from_str(&contents).unwrap_or_default()
        } else {
            let cfg = Self::default();
            cfg.save();
            cfg
        }
    }

    pub fn save(&self) {
        let contents = toml::to_string_pretty(self).unwrap();

        // Make sure config_dir exists
        fs::create_dir_all(config_dir()).unwrap();

        fs::write(config_dir().join(FILE_NAME), contents).unwrap();
    }

    #[cfg(test)]
    /// A configuration that never touches the filesystem.
    pub(crate) fn mock() -> Self {
        Self {
            endpoint: "http://localhost:9999/rows".into(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_endpoint_is_set() {
        assert!(!CoreConfig::default().endpoint.is_empty());
    }

    #[test]
    fn test_parses_toml() {
        let cfg: CoreConfig =
            toml::from_str("endpoint = \"https://example.com/api/v1/rows\"").unwrap();

        assert_eq!(cfg.endpoint, "https://example.com/api/v1/rows");
    }

    #[test]
    fn test_roundtrips_through_toml() {
        let cfg = CoreConfig::mock();
        let parsed: CoreConfig = toml::from_str(&toml::to_string_pretty(&cfg).unwrap()).unwrap();

        assert_eq!(parsed.endpoint, cfg.endpoint);
    }
}
