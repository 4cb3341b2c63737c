use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "condoboard.toml",
    "config/condoboard.toml",
    "crates/config/condoboard.toml",
    "../condoboard.toml",
    "../config/condoboard.toml",
    "../crates/config/condoboard.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub drafting: DraftingConfig,
    pub seed: SeedConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drafting: DraftingConfig::default(),
            seed: SeedConfig::default(),
        }
    }
}

/// Configuration options for the AI notice-drafting collaborator.
///
/// ```
/// use condoboard_config::DraftingConfig;
///
/// let drafting = DraftingConfig::default();
/// assert_eq!(drafting.base_url, "https://openrouter.ai/api/v1");
/// assert_eq!(drafting.request_timeout_seconds, 30);
/// assert!(drafting.api_key.is_none());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftingConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "DraftingConfig::default_base_url")]
    pub base_url: String,
    #[serde(default = "DraftingConfig::default_model")]
    pub model: String,
    #[serde(default = "DraftingConfig::default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl DraftingConfig {
    fn default_base_url() -> String {
        "https://openrouter.ai/api/v1".to_string()
    }

    fn default_model() -> String {
        "google/gemini-2.5-flash".to_string()
    }

    const fn default_request_timeout() -> u64 {
        30
    }
}

impl Default for DraftingConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: Self::default_base_url(),
            model: Self::default_model(),
            request_timeout_seconds: Self::default_request_timeout(),
        }
    }
}

/// Controls whether the in-memory store is populated with the fixed sample
/// records at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default = "SeedConfig::default_sample_data")]
    pub sample_data: bool,
}

impl SeedConfig {
    const fn default_sample_data() -> bool {
        true
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { sample_data: true }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use condoboard_config::load;
///
/// std::env::remove_var("CONDOBOARD_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.drafting.base_url.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("drafting.base_url", defaults.drafting.base_url.clone())
        .unwrap()
        .set_default("drafting.model", defaults.drafting.model.clone())
        .unwrap()
        .set_default(
            "drafting.request_timeout_seconds",
            i64::try_from(defaults.drafting.request_timeout_seconds).unwrap_or(i64::MAX),
        )
        .unwrap()
        .set_default("seed.sample_data", defaults.seed.sample_data)
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("CONDOBOARD")
        .prefix_separator("_")
        .separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("CONDOBOARD_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via CONDOBOARD_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded condoboard configuration");
    Ok(config)
}
