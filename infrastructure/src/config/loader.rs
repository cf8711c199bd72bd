//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    providers::{Format, Serialized, Toml},
    Figment,
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery, merging and env overrides
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (`OLLAMA_BASE_URL`, `USE_WEIGHTED_MODEL`,
    ///    `AGENT_TIMEOUT`, `DEBATE_ROUNDS`, `MAX_DEBATE_EXCHANGES`)
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./council.toml` or `./.council.toml`
    /// 4. Global: `~/.config/agent-council/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["council.toml", ".council.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        let mut config: FileConfig = figment.extract().map_err(Box::new)?;
        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load only default configuration plus env overrides (for --no-config)
    pub fn load_defaults() -> FileConfig {
        let mut config = FileConfig::default();
        Self::apply_env_overrides(&mut config);
        config
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("agent-council").join("config.toml"))
    }

    /// Environment variables override whatever the files said
    fn apply_env_overrides(config: &mut FileConfig) {
        if let Ok(url) = std::env::var("OLLAMA_BASE_URL") {
            if !url.is_empty() {
                config.ollama.base_url = url;
            }
        }
        if let Ok(value) = std::env::var("USE_WEIGHTED_MODEL") {
            config.council.use_weighted_model = value.to_lowercase() == "true";
        }
        if let Some(timeout) = Self::env_number("AGENT_TIMEOUT") {
            config.council.agent_timeout_secs = timeout;
        }
        if let Some(rounds) = Self::env_number("DEBATE_ROUNDS") {
            config.council.debate_rounds = rounds as usize;
        }
        if let Some(exchanges) = Self::env_number("MAX_DEBATE_EXCHANGES") {
            config.council.max_debate_exchanges = exchanges as usize;
        }
    }

    fn env_number(name: &str) -> Option<u64> {
        std::env::var(name).ok().and_then(|v| v.parse().ok())
    }
}
