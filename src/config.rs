use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, path::Path};

const DEFAULT_CONFIG_FILE_NAME: &str = "prscribe.yaml";
const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
const DEFAULT_MODEL_ENDPOINT: &str = "http://localhost:11434/api/generate";
const DEFAULT_MODEL_NAME: &str = "llama3.2";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub token: Option<String>,
    pub owner: String,
    pub repo: String,
    #[serde(alias = "prNumber")]
    pub pr_number: u64,
    #[serde(alias = "apiBaseUrl", default = "Config::default_api_base_url")]
    pub api_base_url: String,
    #[serde(alias = "modelEndpoint", default = "Config::default_model_endpoint")]
    pub model_endpoint: String,
    #[serde(alias = "modelName", default = "Config::default_model_name")]
    pub model_name: String,
    #[serde(alias = "dryRun", default)]
    pub dry_run: bool,
}

impl Config {
    pub async fn load() -> Result<Config> {
        Config::load_from(DEFAULT_CONFIG_FILE_NAME).await
    }

    pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        let config_string = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Cannot read {}", path.display()))?;

        let mut config = Config::from_yaml(&config_string)?;
        config.token = resolve_token(config.token, env::var(TOKEN_ENV_VAR).ok());

        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Config> {
        let config = serde_yaml::from_str::<Config>(yaml)?;

        Ok(config)
    }

    pub fn token(&self) -> Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow!(
                "no GitHub token configured, set `token` or the {} environment variable",
                TOKEN_ENV_VAR
            )
        })
    }

    fn default_api_base_url() -> String {
        DEFAULT_API_BASE_URL.to_owned()
    }

    fn default_model_endpoint() -> String {
        DEFAULT_MODEL_ENDPOINT.to_owned()
    }

    fn default_model_name() -> String {
        DEFAULT_MODEL_NAME.to_owned()
    }
}

/// The token from the file wins over the environment; blank values count as missing.
fn resolve_token(from_file: Option<String>, from_env: Option<String>) -> Option<String> {
    from_file
        .filter(|token| !token.trim().is_empty())
        .or(from_env.filter(|token| !token.trim().is_empty()))
}
