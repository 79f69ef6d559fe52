#![allow(dead_code)]
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::{tempdir, TempDir};

use crate::config::ScaffoldConfig;

pub const FAKE_MARKER: &str = "example_physics";

pub const FAKE_APP_HEADER: &str = concat!(
    "#include \"example_physics.h\"\n",
    "namespace octet {\n",
    "  class example_physics_app {\n",
    "    // example_physics example_physics\n",
    "  };\n",
    "}\n",
);

// crlf endings and no trailing newline on the last line
pub const FAKE_MAIN: &str = concat!(
    "#include \"example_physics_prototype.h\"\r\n",
    "int main() { return example_physics_main(); }",
);

pub const FAKE_README: &str = "no marker in here\n";

#[derive(Default)]
pub struct TempSetup {
    path: PathBuf,
    temp: Option<TempDir>,
}

impl TempSetup {
    pub fn setup(&mut self) -> PathBuf {
        self.temp = Some(tempdir().unwrap());
        self.path = self.temp.as_ref().unwrap().path().to_owned();

        self.path.clone()
    }

    pub fn pathbuf(&self) -> PathBuf {
        self.path.clone()
    }

    // lay out <root>/src/examples/example_physics like a real checkout
    pub fn make_fake_prototype(&self) -> io::Result<ScaffoldConfig> {
        let config = make_fake_config(&self.path);

        fs::create_dir_all(&config.prototype_dir)?;

        let proto = &config.prototype_dir;

        fs::write(proto.join("example_physics_prototype.h"), FAKE_APP_HEADER)?;
        fs::write(proto.join("main.cpp"), FAKE_MAIN)?;
        fs::write(proto.join("README.txt"), FAKE_README)?;

        Ok(config)
    }
}

impl Drop for TempSetup {
    fn drop(&mut self) {
        if let Some(temp) = self.temp.take() {
            temp.close().expect("cant close file");
        }
    }
}

pub fn make_fake_config(root: &Path) -> ScaffoldConfig {
    let output_root = root.join("src").join("examples");

    let prototype_dir = output_root.join(FAKE_MARKER);

    ScaffoldConfig::new(prototype_dir, output_root, FAKE_MARKER)
}
