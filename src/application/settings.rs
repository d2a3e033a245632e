//! Functions for loading settings.

use std::fs;
use std::path::Path;

use crate::errors::*;
use crate::input::prelude::Key;
use crate::window::WindowParams;

/// A structure containing configuration data, which are used to specify
/// hardware setup stuff to create the window and the key that closes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowParams,
    pub exit_key: Key,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            window: WindowParams::default(),
            exit_key: Key::Escape,
        }
    }
}

impl Settings {
    /// Loads settings from a utf-8 encoded json file. Missing fields take their
    /// default values.
    pub fn load<T: AsRef<Path>>(path: T) -> Result<Settings> {
        let path = path.as_ref();
        let buf = fs::read_to_string(path)
            .map_err(|err| Error::Settings(format!("{}: {}", path.display(), err)))?;

        Settings::from_json(&buf)
    }

    pub fn from_json(buf: &str) -> Result<Settings> {
        let settings: Settings = serde_json::from_str(buf)?;
        Ok(settings)
    }
}
