use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use fonward_core::carrier::CarrierTrie;
use fonward_core::domain::normalize_phone_for_dialing;
use fonward_core::error::CoreError;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "fonward";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub forward_to: Option<String>,
    pub sms: SmsConfig,
    pub carriers: Vec<CarrierEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct SmsConfig {
    pub suppress_unsupported_warning: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CarrierEntry {
    pub prefix: String,
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            forward_to: None,
            sms: SmsConfig::default(),
            carriers: default_carrier_table(),
        }
    }
}

impl AppConfig {
    /// Builds the lookup trie from the configured table. Call once during
    /// startup; the trie is read-only afterwards.
    pub fn carrier_trie(&self) -> Result<CarrierTrie> {
        CarrierTrie::from_table(
            self.carriers
                .iter()
                .map(|entry| (entry.prefix.as_str(), entry.name.as_str())),
        )
        .map_err(|err| match err {
            CoreError::InvalidPrefix(prefix) => ConfigError::InvalidCarrierPrefix(prefix),
        })
    }
}

/// Austrian mobile operator dial prefixes, used when the config file does
/// not provide its own table. International form, country code included.
pub fn default_carrier_table() -> Vec<CarrierEntry> {
    [
        ("43650", "T-Mobile"),
        ("43660", "Drei"),
        ("43664", "A1"),
        ("43676", "Magenta"),
        ("43677", "HoT"),
        ("43680", "BoB"),
        ("43681", "Yesss"),
        ("43688", "Drei"),
        ("43699", "Drei"),
    ]
    .into_iter()
    .map(|(prefix, name)| CarrierEntry {
        prefix: prefix.to_string(),
        name: name.to_string(),
    })
    .collect()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("config file permissions too permissive: {0}")]
    InsecurePermissions(PathBuf),
    #[error("invalid forward_to number: {0:?}")]
    InvalidForwardTarget(String),
    #[error("invalid carrier prefix: {0:?}")]
    InvalidCarrierPrefix(String),
    #[error("empty carrier name for prefix {0:?}")]
    EmptyCarrierName(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    forward_to: Option<String>,
    sms: Option<SmsFile>,
    carriers: Option<Vec<CarrierEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SmsFile {
    suppress_unsupported_warning: Option<bool>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    ensure_permissions(path)?;
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(forward_to) = parsed.forward_to {
        if normalize_phone_for_dialing(&forward_to).is_none() {
            return Err(ConfigError::InvalidForwardTarget(forward_to));
        }
        config.forward_to = Some(forward_to.trim().to_string());
    }

    if let Some(sms) = parsed.sms {
        if let Some(suppress) = sms.suppress_unsupported_warning {
            config.sms.suppress_unsupported_warning = suppress;
        }
    }

    if let Some(carriers) = parsed.carriers {
        for entry in &carriers {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::EmptyCarrierName(entry.prefix.clone()));
            }
        }
        config.carriers = carriers;
    }

    // A bad prefix is a fatal startup error, not a lookup-time condition.
    config.carrier_trie()?;

    Ok(config)
}

#[cfg(unix)]
fn ensure_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let metadata = fs::metadata(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mode = metadata.permissions().mode();
    if mode & 0o077 != 0 {
        return Err(ConfigError::InsecurePermissions(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(not(unix))]
fn ensure_permissions(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, CarrierEntry, ConfigError, ConfigFile, SmsFile};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn restrict_permissions(path: &Path) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path).expect("metadata").permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms).expect("chmod");
        }
    }

    fn entry(prefix: &str, name: &str) -> CarrierEntry {
        CarrierEntry {
            prefix: prefix.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            forward_to: Some("+43 664 555 1212".to_string()),
            sms: Some(SmsFile {
                suppress_unsupported_warning: Some(true),
            }),
            carriers: Some(vec![entry("43", "Austria"), entry("4316", "Vienna Fixed")]),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.forward_to.as_deref(), Some("+43 664 555 1212"));
        assert!(merged.sms.suppress_unsupported_warning);
        assert_eq!(merged.carriers.len(), 2);
    }

    #[test]
    fn merge_config_keeps_default_carriers_when_absent() {
        let parsed = ConfigFile {
            forward_to: None,
            sms: None,
            carriers: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(merged
            .carriers
            .iter()
            .any(|entry| entry.prefix == "43664" && entry.name == "A1"));
    }

    #[test]
    fn merge_config_rejects_non_digit_prefix() {
        let parsed = ConfigFile {
            forward_to: None,
            sms: None,
            carriers: Some(vec![entry("4a3", "Broken")]),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCarrierPrefix(prefix) if prefix == "4a3"));
    }

    #[test]
    fn merge_config_rejects_undialable_forward_target() {
        let parsed = ConfigFile {
            forward_to: Some("not a number".to_string()),
            sms: None,
            carriers: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidForwardTarget(_)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "forward_to = \"+436641234567\"\n\n[[carriers]]\nprefix = \"43\"\nname = \"Austria\"\n",
        )
        .expect("write config");
        restrict_permissions(&path);

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.forward_to.as_deref(), Some("+436641234567"));
        assert_eq!(config.carriers, vec![entry("43", "Austria")]);
    }

    #[test]
    fn trie_from_config_resolves_longest_prefix() {
        let parsed = ConfigFile {
            forward_to: None,
            sms: None,
            carriers: Some(vec![entry("43", "Austria"), entry("43664", "A1")]),
        };
        let config = merge_config(parsed).expect("merge");
        let trie = config.carrier_trie().expect("trie");
        assert_eq!(
            trie.longest_prefix("436641234567").carrier.as_deref(),
            Some("A1")
        );
        assert_eq!(
            trie.longest_prefix("431512345").carrier.as_deref(),
            Some("Austria")
        );
    }
}
