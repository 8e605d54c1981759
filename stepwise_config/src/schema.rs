use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use stepwise_session::DEFAULT_LIFETIME_HOURS;
use tracing::debug;

const CONFIG_DIR_NAME: &str = "stepwise";
const CONFIG_FILE_NAME: &str = "config.json";

/// Where [`Config::load_or_default`] found its values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// No file existed at this path.
    Defaults(PathBuf),
}

#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BotConfig {
    #[serde(default = "BotConfig::default_name")]
    pub name: String,
    #[serde(default = "BotConfig::default_quote")]
    pub quote: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: Self::default_name(),
            quote: Self::default_quote(),
        }
    }
}

impl BotConfig {
    fn default_name() -> String {
        "Stepwise Bot".to_string()
    }

    fn default_quote() -> String {
        "Small steps daily beat motivation.".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Directory for session files; `~/stepwise/sessions` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Idle hours before a session is forgotten, `0` for never.
    #[serde(default = "SessionConfig::default_lifetime_hours")]
    pub lifetime_hours: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dir: None,
            lifetime_hours: Self::default_lifetime_hours(),
        }
    }
}

impl SessionConfig {
    const fn default_lifetime_hours() -> u32 {
        DEFAULT_LIFETIME_HOURS
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "LoggingConfig::default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LoggingConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(CONFIG_DIR_NAME))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'stepwise init' to create config.",
                config_path.display()
            );
        }

        Self::from_path(&config_path)
    }

    /// Load the config file, or the built-in defaults when there is none.
    ///
    /// Nothing is logged here: this runs before the subscriber is installed,
    /// so the caller reports the returned [`ConfigSource`].
    pub fn load_or_default() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_or_default_from(&Self::config_path()?)
    }

    pub fn load_or_default_from(path: &Path) -> anyhow::Result<(Self, ConfigSource)> {
        if path.exists() {
            Ok((Self::from_path(path)?, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())))
        }
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        debug!("Reading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Directory session files are kept in.
    pub fn session_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.session.dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Self::config_dir()?.join("sessions")),
        }
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        Self::default().write_to(&config_path)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Optionally change the bot name and banner quote");
        println!("   2. Run 'stepwise chat' to start a conversation");
        println!();
        println!("🔧 Configuration options:");
        println!("   - session.dir: where session files are stored");
        println!("   - session.lifetime_hours: idle hours before a session resets (0 = never)");
        println!("   - logging.level: log filter used when RUST_LOG is unset");
        println!();
        Ok(())
    }

    pub fn write_to(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").expect("empty config should parse");
        assert_eq!(config, Config::default());
        assert_eq!(config.bot.name, "Stepwise Bot");
        assert_eq!(config.session.lifetime_hours, DEFAULT_LIFETIME_HOURS);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_sections_keep_other_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"bot": {"name": "Coach"}, "session": {"dir": "/tmp/s"}}"#)
                .expect("partial config should parse");

        assert_eq!(config.bot.name, "Coach");
        assert_eq!(config.bot.quote, "Small steps daily beat motivation.");
        assert_eq!(config.session.lifetime_hours, 6);
        assert_eq!(
            config.session_dir().expect("explicit dir"),
            PathBuf::from("/tmp/s")
        );
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_write_then_read() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.session.lifetime_hours = 0;
        config.write_to(&path).expect("write config");

        assert_eq!(Config::from_path(&path).expect("read config"), config);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_load_or_default_reports_source() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("config.json");

        let (config, source) = Config::load_or_default_from(&path).expect("defaults");
        assert_eq!(config, Config::default());
        assert_eq!(source, ConfigSource::Defaults(path.clone()));

        let mut custom = Config::default();
        custom.bot.name = "Coach".to_string();
        custom.write_to(&path).expect("write config");

        let (config, source) = Config::load_or_default_from(&path).expect("file");
        assert_eq!(config, custom);
        assert_eq!(source, ConfigSource::File(path));
    }
}
