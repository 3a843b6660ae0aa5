
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::types::{DataType, SortingType};
use crate::errors::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "sorting.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub default_data_type: DataType,
    pub default_sorting_type: SortingType,
    pub file_logging_enabled: bool,
    pub logs_dir: PathBuf,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            default_data_type: DataType::default(),
            default_sorting_type: SortingType::default(),
            file_logging_enabled: false,
            logs_dir: PathBuf::from("logs"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    path: Option<PathBuf>,
    data: ConfigFile,
}

impl Config {
    /// Loads `sorting.json` from the working directory when present,
    /// built-in defaults otherwise.
    pub fn load_default() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path: Some(path),
            data,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn default_data_type(&self) -> DataType {
        self.data.default_data_type
    }
    pub fn default_sorting_type(&self) -> SortingType {
        self.data.default_sorting_type
    }
    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled
    }
    pub fn logs_dir(&self) -> &Path {
        &self.data.logs_dir
    }
}
