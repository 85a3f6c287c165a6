//! Options module - Transform options and project config file

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::config;

/// Options controlling the optional normalizations of the tpl pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Rewrite `:data` into `data`, bracing bare object bodies
    #[serde(alias = "transformDataAttr")]
    pub transform_data_attr: bool,
}

/// Options shared by all template transforms of a pass.
///
/// The tpl transform accepts them for signature compatibility only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateOptions {}

/// Contents of `tplnorm.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    #[serde(default)]
    pub template: TemplateOptions,

    /// Missing table disables every optional normalization
    #[serde(default)]
    pub transform: Option<TransformOptions>,
}

impl ProjectConfig {
    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content).context(format!("Failed to parse config: {}", path.display()))
    }

    /// Search `start` and its parents for a config file
    pub fn discover(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(config::files::CONFIG);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Load the explicit config, or the discovered one, or fall back to defaults.
    ///
    /// Returns the path the config was read from, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                Self::discover(&cwd)
            }
        };

        match path {
            Some(path) => Ok((Self::load(&path)?, Some(path))),
            None => Ok((Self::default(), None)),
        }
    }

    /// Effective transform options, with `force_data_attr` overriding the file
    pub fn transform_options(&self, force_data_attr: bool) -> Option<TransformOptions> {
        if force_data_attr {
            return Some(TransformOptions {
                transform_data_attr: true,
            });
        }

        self.transform.clone()
    }
}
