use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const LOCAL_CONFIG_FILE: &str = ".jira-screens.toml";

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Config {
    /// Jira site URL (e.g., "https://example.atlassian.net")
    pub url: Option<String>,
    pub email: Option<String>,
    pub token: Option<String>,
    /// Field keys excluded from every screen on top of the built-in ones
    #[serde(default)]
    pub filter_fields: Vec<String>,
}

/// Validated connection settings
#[derive(Debug)]
pub struct Credentials<'a> {
    pub url: &'a str,
    pub email: &'a str,
    pub token: &'a str,
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let explicit_path = config_path.as_deref();
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
        }

        let figment =
            file_figment(&config_paths(explicit_path)).merge(Env::prefixed("JIRA_").only(&[
                "url", "email", "token",
            ]));

        figment
            .extract()
            .map_err(|e| anyhow!("Failed to load config: {}", e))
    }

    pub fn merge_with_cli(
        &mut self,
        cli_url: Option<String>,
        cli_email: Option<String>,
        cli_token: Option<String>,
    ) {
        if let Some(url) = cli_url {
            self.url = Some(url);
        }
        if let Some(email) = cli_email {
            self.email = Some(email);
        }
        if let Some(token) = cli_token {
            self.token = Some(token);
        }
    }

    /// Connection settings, or an error naming the first missing one
    pub fn credentials(&self) -> Result<Credentials<'_>> {
        let missing = |what: &str, flag: &str, env: &str| {
            anyhow!(
                "Jira {} not configured. Set via --{}, {} env var, or config file",
                what,
                flag,
                env
            )
        };

        Ok(Credentials {
            url: self
                .url
                .as_deref()
                .ok_or_else(|| missing("URL", "url", "JIRA_URL"))?,
            email: self
                .email
                .as_deref()
                .ok_or_else(|| missing("email", "email", "JIRA_EMAIL"))?,
            token: self
                .token
                .as_deref()
                .ok_or_else(|| missing("token", "token", "JIRA_TOKEN"))?,
        })
    }
}

/// Defaults plus every existing file, later files winning
fn file_figment(paths: &[PathBuf]) -> Figment {
    paths
        .iter()
        .filter(|path| path.exists())
        .fold(
            Figment::new().merge(Serialized::defaults(Config::default())),
            |figment, path| figment.merge(Toml::file(path)),
        )
}

fn config_paths(explicit: Option<&Path>) -> Vec<PathBuf> {
    if let Some(path) = explicit {
        return vec![path.to_path_buf()];
    }

    let mut paths = Vec::new();
    if let Some(path) = get_user_config_path() {
        paths.push(path);
    }
    if let Ok(dir) = std::env::current_dir() {
        paths.push(dir.join(LOCAL_CONFIG_FILE));
    }
    paths
}

fn get_user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jira-screens").map(|d| d.config_dir().join("config.toml"))
}
