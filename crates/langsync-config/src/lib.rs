use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid config: {0} must be greater than zero")]
    Invalid(&'static str),
}

/// Layout of a site. Directory entries are relative to `site_root`
/// unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub site_root: PathBuf,
    #[serde(default = "default_posts_dir")]
    pub posts_dir: PathBuf,
    #[serde(default = "default_tags_dir")]
    pub tags_dir: PathBuf,
    #[serde(default = "default_categories_dir")]
    pub categories_dir: PathBuf,
    #[serde(default = "default_pages_dir")]
    pub pages_dir: PathBuf,
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,
    /// Bytes read from the head of each post when looking for front matter.
    #[serde(default = "default_read_limit")]
    pub read_limit: usize,
}

fn default_posts_dir() -> PathBuf {
    PathBuf::from("_posts")
}

fn default_tags_dir() -> PathBuf {
    PathBuf::from("_tags_clet")
}

fn default_categories_dir() -> PathBuf {
    PathBuf::from("_categs_clet")
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("_pages_clet")
}

fn default_posts_per_page() -> usize {
    10
}

fn default_read_limit() -> usize {
    1024
}

impl Config {
    /// Default layout rooted at `site_root`
    pub fn for_site_root<P: Into<PathBuf>>(site_root: P) -> Self {
        Self {
            site_root: site_root.into(),
            posts_dir: default_posts_dir(),
            tags_dir: default_tags_dir(),
            categories_dir: default_categories_dir(),
            pages_dir: default_pages_dir(),
            posts_per_page: default_posts_per_page(),
            read_limit: default_read_limit(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in every configured path
        for path in [
            &mut config.site_root,
            &mut config.posts_dir,
            &mut config.tags_dir,
            &mut config.categories_dir,
            &mut config.pages_dir,
        ] {
            if let Some(expanded) = Self::expand_path(path) {
                *path = expanded;
            }
        }

        config.validate()?;
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/langsync");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.posts_per_page == 0 {
            return Err(ConfigError::Invalid("posts_per_page"));
        }
        if self.read_limit == 0 {
            return Err(ConfigError::Invalid("read_limit"));
        }
        Ok(())
    }

    pub fn posts_path(&self) -> PathBuf {
        self.site_root.join(&self.posts_dir)
    }

    pub fn tags_path(&self) -> PathBuf {
        self.site_root.join(&self.tags_dir)
    }

    pub fn categories_path(&self) -> PathBuf {
        self.site_root.join(&self.categories_dir)
    }

    pub fn pages_path(&self) -> PathBuf {
        self.site_root.join(&self.pages_dir)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
