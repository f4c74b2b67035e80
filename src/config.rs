//! Run configuration.
//!
//! The language allow-list and output file names can be overridden from a YAML
//! file; every key is optional and falls back to the defaults below.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub headwords: String,
    pub statuses: String,
    pub multiword: String,
    pub hyphenated: String,
    pub twowords: String,
    pub redlinks: String,
    pub orphans: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            headwords: "headwords.json".to_string(),
            statuses: "statuses.txt".to_string(),
            multiword: "bonus_multiword.txt".to_string(),
            hyphenated: "bonus_hyphenated.txt".to_string(),
            twowords: "bonus_twowords.txt".to_string(),
            redlinks: "bonus_redlinks.txt".to_string(),
            orphans: "bonus_orphans.txt".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Entry languages to keep.
    pub languages: Vec<String>,
    /// Language whose senses get the `TRANSLINGUAL` tag.
    pub translingual: String,
    pub outputs: OutputFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: vec!["English".to_string(), "Translingual".to_string()],
            translingual: "Translingual".to_string(),
            outputs: OutputFiles::default(),
        }
    }
}

const DEFAULT_CONFIG_CANDIDATES: [&str; 2] = [
    "config/headwords.yaml",
    "../../config/headwords.yaml",
];

impl Config {
    pub fn from_yaml(path: &Path) -> Result<Self> {
        let mut file = File::open(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("failed to open: {}", e),
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("failed to read: {}", e),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: format!("failed to parse YAML: {}", e),
        })
    }

    /// Load `explicit` if given, otherwise the first default location that
    /// exists, otherwise the built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_yaml(path);
        }

        match DEFAULT_CONFIG_CANDIDATES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
        {
            Some(path) => {
                tracing::debug!(path = %path.display(), "using config file");
                Self::from_yaml(&path)
            }
            None => Ok(Self::default()),
        }
    }
}
