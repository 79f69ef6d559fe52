use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::scaffold_error::{ScaffoldError, ScaffoldResult};

pub const DEFAULT_PROTOTYPE_DIR: &str = "src/examples/example_physics";
pub const DEFAULT_OUTPUT_ROOT: &str = "src/examples";
pub const DEFAULT_MARKER_TOKEN: &str = "example_physics";

/// where to copy from, where to copy to and what to rename
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// the prototype project, every file in here gets copied
    pub prototype_dir: PathBuf,
    /// new projects are made as direct children of this
    pub output_root: PathBuf,
    /// the prototype's own name, replaced in file names and contents
    pub marker_token: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            prototype_dir: PathBuf::from(DEFAULT_PROTOTYPE_DIR),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            marker_token: String::from(DEFAULT_MARKER_TOKEN),
        }
    }
}

impl ScaffoldConfig {
    pub fn new<P, O>(prototype_dir: P, output_root: O, marker: &str) -> Self
    where
        P: Into<PathBuf>,
        O: Into<PathBuf>,
    {
        Self {
            prototype_dir: prototype_dir.into(),
            output_root: output_root.into(),
            marker_token: marker.to_owned(),
        }
    }

    pub fn from_toml_str(config_str: &str) -> ScaffoldResult<Self> {
        let config: ScaffoldConfig = toml::from_str(config_str)?;

        config.validate()?;

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> ScaffoldResult<Self> {
        let path = path.as_ref();

        let config_str = fs::read_to_string(path)
            .map_err(|err| ScaffoldError::io(path, err))?;

        Self::from_toml_str(&config_str)
    }

    // an empty marker would match between every character
    pub fn validate(&self) -> ScaffoldResult<()> {
        if self.marker_token.is_empty() {
            return Err(ScaffoldError::Config(String::from(
                "marker_token can not be empty",
            )));
        }

        Ok(())
    }

    pub fn project_dir(&self, project_name: &str) -> PathBuf {
        self.output_root.join(project_name)
    }
}
