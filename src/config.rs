use crate::error::{BridgeError, Result};
use lazy_static::lazy_static;
use parking_lot::RwLock;
use std::env;
use std::fs;
use std::path::Path;

lazy_static! {
    static ref CONFIG: RwLock<Config> = RwLock::new(Config::load());
}

const CONFIG_FILE: &str = "mediabridge.toml";

/// Allocation defaults for [`crate::frame::blank_frame_from`].
///
/// A process-wide copy is loaded from the environment and
/// `./mediabridge.toml`; the plain conversion and frame functions never read
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Every plane's line size is rounded up to a multiple of this.
    /// Must be a power of two; `1` means rows are tightly packed.
    pub stride_alignment: usize,
    /// Y, U and V bytes used by [`crate::frame::blank_frame_from`].
    pub blank_fill: (u8, u8, u8),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stride_alignment: 1,
            blank_fill: (0, 0, 0),
        }
    }
}

impl Config {
    /// Builds a config from defaults, then environment variables, then
    /// `./mediabridge.toml` if it exists.
    ///
    /// Malformed values are logged and skipped so that a bad environment never
    /// prevents the library from working.
    fn load() -> Self {
        Self::load_from(Path::new("."))
    }

    fn load_from(dir: &Path) -> Self {
        let mut config = Config::default();

        if let Ok(value) = env::var("MEDIABRIDGE_STRIDE_ALIGN") {
            match parse_alignment(&value) {
                Ok(alignment) => config.stride_alignment = alignment,
                Err(e) => log::warn!("ignoring MEDIABRIDGE_STRIDE_ALIGN: {}", e),
            }
        }
        if let Ok(value) = env::var("MEDIABRIDGE_BLANK_FILL") {
            match parse_fill(&value) {
                Ok(fill) => config.blank_fill = fill,
                Err(e) => log::warn!("ignoring MEDIABRIDGE_BLANK_FILL: {}", e),
            }
        }

        let path = dir.join(CONFIG_FILE);
        if let Ok(content) = fs::read_to_string(&path) {
            match config.merge_str(&content) {
                Ok(merged) => {
                    log::debug!("loaded config from {}", path.display());
                    config = merged;
                }
                Err(e) => log::warn!("ignoring config file {}: {}", path.display(), e),
            }
        }

        config
    }

    /// Reads `path` and applies its entries on top of `self`.
    pub fn merge_file<P: AsRef<Path>>(&self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        self.merge_str(&content)
    }

    /// Applies `key = value` lines on top of `self`. Comments, blank lines and
    /// unknown keys are ignored.
    pub fn merge_str(&self, content: &str) -> Result<Self> {
        let mut config = *self;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let value = value.trim().trim_matches('"').trim_matches('\'');
            match key.trim() {
                "stride_alignment" => config.stride_alignment = parse_alignment(value)?,
                "blank_fill" => config.blank_fill = parse_fill(value)?,
                _ => {}
            }
        }
        Ok(config)
    }

    /// Re-reads the environment and config files into the global config.
    pub fn reload() {
        let new_config = Config::load();
        *CONFIG.write() = new_config;
    }
}

/// Returns a snapshot of the global configuration.
pub fn current() -> Config {
    *CONFIG.read()
}

/// Replaces the global configuration after validating it.
pub fn set(config: Config) -> Result<()> {
    if !config.stride_alignment.is_power_of_two() {
        return Err(BridgeError::Config(format!(
            "stride_alignment must be a power of two, got {}",
            config.stride_alignment
        )));
    }
    *CONFIG.write() = config;
    Ok(())
}

fn parse_alignment(value: &str) -> Result<usize> {
    let alignment: usize = value
        .trim()
        .parse()
        .map_err(|_| BridgeError::Config(format!("invalid stride_alignment: {:?}", value)))?;
    if !alignment.is_power_of_two() {
        return Err(BridgeError::Config(format!(
            "stride_alignment must be a power of two, got {}",
            alignment
        )));
    }
    Ok(alignment)
}

fn parse_fill(value: &str) -> Result<(u8, u8, u8)> {
    let parts: Vec<&str> = value.split(',').map(str::trim).collect();
    let &[y, u, v] = parts.as_slice() else {
        return Err(BridgeError::Config(format!(
            "blank_fill must be \"y,u,v\", got {:?}",
            value
        )));
    };
    let byte = |s: &str| {
        s.parse::<u8>()
            .map_err(|_| BridgeError::Config(format!("invalid blank_fill component: {:?}", s)))
    };
    Ok((byte(y)?, byte(u)?, byte(v)?))
}

/// Creates a default config template file if it doesn't exist
pub fn create_default_config_template<P: AsRef<Path>>(path: P) -> std::io::Result<()> {
    if !path.as_ref().exists() {
        let template = r#"# mediabridge configuration

# Row alignment, in bytes, for frames built with blank_frame_from.
stride_alignment = 1

# Y,U,V fill for frames built with blank_frame_from.
blank_fill = "0,0,0"
"#;
        fs::write(path, template)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_str() {
        let config = Config::default()
            .merge_str("# comment\nstride_alignment = 16\nblank_fill = \"16,128,128\"\nother = 1\n")
            .unwrap();
        assert_eq!(config.stride_alignment, 16);
        assert_eq!(config.blank_fill, (16, 128, 128));
    }

    #[test]
    fn test_merge_str_rejects_bad_values() {
        assert!(Config::default().merge_str("stride_alignment = 3").is_err());
        assert!(Config::default().merge_str("stride_alignment = 0").is_err());
        assert!(Config::default().merge_str("blank_fill = \"1,2\"").is_err());
        assert!(Config::default().merge_str("blank_fill = \"1,2,300\"").is_err());
    }

    #[test]
    fn test_template_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mediabridge.toml");
        create_default_config_template(&path).unwrap();

        let config = Config::default().merge_file(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_only_own_file_is_loaded() {
        let empty = tempfile::tempdir().unwrap();
        let baseline = Config::load_from(empty.path());

        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.toml"), "stride_alignment = 64\n").unwrap();
        assert_eq!(Config::load_from(dir.path()), baseline);

        fs::write(dir.path().join("mediabridge.toml"), "stride_alignment = 64\n").unwrap();
        assert_eq!(Config::load_from(dir.path()).stride_alignment, 64);
    }

    // The only test that replaces the global config; nothing else in the
    // crate reads it.
    #[test]
    fn test_set_current_and_reload() {
        let bad = Config {
            stride_alignment: 6,
            ..Config::default()
        };
        assert!(matches!(set(bad), Err(BridgeError::Config(_))));

        let custom = Config {
            stride_alignment: 64,
            blank_fill: (16, 128, 128),
        };
        set(custom).unwrap();
        assert_eq!(current(), custom);

        Config::reload();
        assert_eq!(current(), Config::load());
    }
}
