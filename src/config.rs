use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure for GiftGenie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub gemini: GeminiConfig,
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    /// File holding the persisted favorites as a JSON array.
    pub path: String,
}

impl Config {
    /// Load configuration from file with environment variable overrides.
    /// ALWAYS returns a valid config - never fails.
    pub fn load() -> Self {
        // .env in the working directory or its parent
        let env_paths = ["../.env", ".env"];
        let mut env_loaded = false;
        for path in &env_paths {
            if dotenvy::from_path(path).is_ok() {
                tracing::info!("Loaded .env from: {}", path);
                env_loaded = true;
                break;
            }
        }
        if !env_loaded {
            tracing::debug!("No .env file found - continuing with env vars only");
        }

        let config_path =
            env::var("GIFTGENIE_CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            match fs::read_to_string(&config_path) {
                Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
                    Ok(config) => {
                        tracing::info!("Loaded configuration from {}", config_path);
                        config
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to parse config file {}: {} - using defaults",
                            config_path,
                            e
                        );
                        Self::default()
                    }
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to read config file {}: {} - using defaults",
                        config_path,
                        e
                    );
                    Self::default()
                }
            }
        } else {
            tracing::debug!("Config file not found at {} - using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides();

        // Validate configuration - log warnings but don't fail
        if let Err(e) = config.validate() {
            tracing::warn!("Config validation warnings: {} - continuing anyway", e);
        }

        config
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = env::var("GEMINI_API_KEY") {
            self.gemini.api_key = api_key;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            self.gemini.model = model;
        }
        if let Ok(path) = env::var("GIFTGENIE_FAVORITES_PATH") {
            self.favorites.path = path;
        }
    }

    fn validate(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.gemini.api_key.is_empty() || self.gemini.api_key == "PLACEHOLDER_GEMINI_API_KEY" {
            return Err("GEMINI_API_KEY environment variable must be set".into());
        }
        if self.gemini.model.is_empty() {
            return Err("Gemini model name cannot be empty".into());
        }
        if self.favorites.path.is_empty() {
            return Err("Favorites path cannot be empty".into());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig {
                api_key: String::new(),
                model: "gemini-3-flash-preview".to_string(),
            },
            favorites: FavoritesConfig {
                path: "giftgenie_favorites.json".to_string(),
            },
        }
    }
}
