//! Lightweight configuration loader and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + an optional
//! explicit file + `APP_*` env vars. Nested keys in env vars are separated by
//! `__`, e.g. `APP_HACKERNEWS__MAX_COMMENTS=10`.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::Error;

pub struct Config {
    figment: Figment,
}

impl Config {
    /// Load from the current working directory.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(Path::new("."), None)
    }

    /// Load `config.toml` layers from `base`, then `extra` (if any), then env.
    pub fn load_from(base: &Path, extra: Option<&Path>) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file(base.join("config.toml")));
        match env_name.as_str() {
            "dev" | "development" => {
                figment = figment.merge(Toml::file(base.join("config.dev.toml")))
            }
            "prod" | "production" => {
                figment = figment.merge(Toml::file(base.join("config.prod.toml")))
            }
            "test" | "testing" => {
                figment = figment.merge(Toml::file(base.join("config.test.toml")))
            }
            _ => {}
        }
        if let Some(path) = extra {
            let path = expand_path(path.to_string_lossy());
            if !path.exists() {
                return Err(Error::InvalidConfig(format!(
                    "config file {} does not exist",
                    path.display()
                ))
                .into());
            }
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.validate()?;
        Ok(config)
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Like [`Config::get`], but an absent section yields `T::default()`.
    pub fn section<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if self.figment.contains(key) {
            self.get(key)
        } else {
            Ok(T::default())
        }
    }

    pub fn classifier(&self) -> anyhow::Result<ClassifierSettings> {
        self.section("classifier")
    }

    pub fn hackernews(&self) -> anyhow::Result<HackerNewsSettings> {
        self.section("hackernews")
    }

    pub fn state(&self) -> anyhow::Result<StateSettings> {
        self.section("state")
    }

    fn validate(&self) -> anyhow::Result<()> {
        let classifier = self.classifier()?;
        if classifier.summary_max_len < 4 {
            return Err(Error::InvalidConfig(
                "classifier.summary_max_len must be at least 4".into(),
            )
            .into());
        }
        let hn = self.hackernews()?;
        if hn.max_comments == 0 {
            return Err(
                Error::InvalidConfig("hackernews.max_comments must be positive".into()).into(),
            );
        }
        if hn.concurrency == 0 {
            return Err(
                Error::InvalidConfig("hackernews.concurrency must be positive".into()).into(),
            );
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    pub summary_max_len: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            summary_max_len: 150,
        }
    }
}

/// Settings for the "Who is hiring" fetch step.
///
/// `thread_ids` is ordered newest first; only the first `threads_per_run`
/// entries are visited on each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HackerNewsSettings {
    pub api_base: String,
    pub item_url: String,
    pub thread_ids: Vec<u64>,
    pub threads_per_run: usize,
    pub max_comments: usize,
    pub concurrency: usize,
    pub timeout_secs: u64,
}

impl Default for HackerNewsSettings {
    fn default() -> Self {
        Self {
            api_base: "https://hacker-news.firebaseio.com/v0".to_string(),
            item_url: "https://news.ycombinator.com/item".to_string(),
            thread_ids: vec![
                42575537, // January 2025
                42057092, // December 2024
                41709301, // November 2024
            ],
            threads_per_run: 1,
            max_comments: 30,
            concurrency: 4,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSettings {
    pub path: String,
}

impl Default for StateSettings {
    fn default() -> Self {
        Self {
            path: "data/state.json".to_string(),
        }
    }
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() {
        p
    } else {
        base.join(p)
    }
}
