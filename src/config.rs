//! Runtime settings. Everything has a sensible default so the app runs with
//! no configuration at all; environment variables only override.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

use crate::units::TemperatureUnit;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".chemistry-lab";
/// Logical name of the bundled element store.
pub const DEFAULT_STORE_NAME: &str = "chem";
/// Log file written inside the data directory.
const LOG_FILE_NAME: &str = "chemistry-lab.log";

const DATA_DIR_VAR: &str = "CHEMLAB_DATA_DIR";
const STORE_VAR: &str = "CHEMLAB_STORE";
const ASSET_DIR_VAR: &str = "CHEMLAB_ASSET_DIR";
const UNITS_VAR: &str = "CHEMLAB_UNITS";

#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the store file and the log.
    pub data_dir: PathBuf,
    /// Logical store name; the file is `<data_dir>/<store_name>.db`.
    pub store_name: String,
    /// Where pictures and 3D models are looked up by file name.
    pub asset_dir: PathBuf,
    /// Unit the detail screen starts in.
    pub default_unit: TemperatureUnit,
}

impl Settings {
    /// Settings rooted at an explicit data directory with every other value
    /// defaulted.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self {
            asset_dir: data_dir.join("assets"),
            data_dir,
            store_name: DEFAULT_STORE_NAME.to_string(),
            default_unit: TemperatureUnit::Celsius,
        }
    }

    /// Read overrides from the environment on top of the defaults.
    pub fn from_env() -> Result<Self> {
        let data_dir = default_data_dir()?;
        let mut settings = Self::with_data_dir(data_dir);

        if let Some(name) = non_empty_var(STORE_VAR) {
            settings.store_name = name;
        }
        if let Some(dir) = non_empty_var(ASSET_DIR_VAR) {
            settings.asset_dir = PathBuf::from(dir);
        }
        if let Some(raw) = non_empty_var(UNITS_VAR) {
            let selector: i64 = raw
                .trim()
                .parse()
                .with_context(|| format!("{UNITS_VAR} must be 0, 1 or 2, got `{raw}`"))?;
            settings.default_unit = TemperatureUnit::from_selector(selector);
        }

        Ok(settings)
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// Resolve the data directory: `CHEMLAB_DATA_DIR` if set, otherwise a dot
/// folder in the user's home.
pub fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = non_empty_var(DATA_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}
