use std::{
    fs::{self, File, OpenOptions},
    io::{BufRead, BufReader, BufWriter, ErrorKind, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info};

use crate::{
    config::ScaffoldConfig,
    scaffold_error::{ScaffoldError, ScaffoldResult},
};

/// what happened to a single destination file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Written(PathBuf),
    /// it was already there, it is left as is even if it is stale
    Skipped(PathBuf),
}

impl FileOutcome {
    pub fn path(&self) -> &Path {
        match self {
            FileOutcome::Written(path) | FileOutcome::Skipped(path) => path,
        }
    }
}

/// makes new projects by copying the prototype and renaming its marker
#[derive(Debug, Clone)]
pub struct Scaffolder {
    config: ScaffoldConfig,
}

impl Scaffolder {
    pub fn new(config: ScaffoldConfig) -> ScaffoldResult<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &ScaffoldConfig {
        &self.config
    }

    // every occurrence, not just the first
    pub fn rename(&self, source: &str, project_name: &str) -> String {
        if source.contains(&self.config.marker_token) {
            source.replace(&self.config.marker_token, project_name)
        } else {
            source.to_owned()
        }
    }

    /// make `output_root/project_name` from the prototype, files that already
    /// exist are never touched, every destination path is written to `out`
    pub fn create_or_update_project<W: Write>(
        &self,
        project_name: &str,
        out: &mut W,
    ) -> ScaffoldResult<Vec<FileOutcome>> {
        // an empty name would put the files in the output root itself
        if project_name.is_empty() {
            return Err(ScaffoldError::EmptyProjectName);
        }

        let prototype_dir = &self.config.prototype_dir;

        if !prototype_dir.is_dir() {
            return Err(ScaffoldError::PrototypeMissing(prototype_dir.clone()));
        }

        let project_dir = self.config.project_dir(project_name);

        make_project_dir(&project_dir)?;

        let mut outcomes = vec![];

        for entry_name in prototype_file_names(prototype_dir)? {
            let dest_name = self.rename(&entry_name, project_name);
            let dest_path = project_dir.join(&dest_name);

            writeln!(out, "{}", dest_path.display())
                .map_err(|err| ScaffoldError::io(&dest_path, err))?;

            let exists = dest_path
                .try_exists()
                .map_err(|err| ScaffoldError::io(&dest_path, err))?;

            if exists {
                debug!(path = %dest_path.display(), "already exists, skipping");

                outcomes.push(FileOutcome::Skipped(dest_path));
                continue;
            }

            let source_path = prototype_dir.join(&entry_name);

            self.copy_renamed(&source_path, &dest_path, project_name)?;

            info!(path = %dest_path.display(), "wrote");

            outcomes.push(FileOutcome::Written(dest_path));
        }

        Ok(outcomes)
    }

    fn copy_renamed(
        &self,
        source_path: &Path,
        dest_path: &Path,
        project_name: &str,
    ) -> ScaffoldResult<()> {
        let source = File::open(source_path)
            .map_err(|err| ScaffoldError::io(source_path, err))?;

        // create_new so a file that shows up after the probe is not clobbered
        let dest = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(dest_path)
            .map_err(|err| ScaffoldError::io(dest_path, err))?;

        let mut reader = BufReader::new(source);
        let mut writer = BufWriter::new(dest);

        let mut line = String::new();

        loop {
            line.clear();

            // read_line keeps the line ending so crlf files stay crlf
            let read = reader
                .read_line(&mut line)
                .map_err(|err| ScaffoldError::io(source_path, err))?;

            if read == 0 {
                break;
            }

            writer
                .write_all(self.rename(&line, project_name).as_bytes())
                .map_err(|err| ScaffoldError::io(dest_path, err))?;
        }

        writer
            .flush()
            .map_err(|err| ScaffoldError::io(dest_path, err))
    }
}

// works like mkdir, but an existing directory is fine
fn make_project_dir(project_dir: &Path) -> ScaffoldResult<()> {
    if project_dir.is_dir() {
        return Ok(());
    }

    if project_dir.exists() {
        return Err(ScaffoldError::ProjectDir {
            path: project_dir.to_owned(),
            source: ErrorKind::AlreadyExists.into(),
        });
    }

    fs::create_dir(project_dir).map_err(|err| ScaffoldError::ProjectDir {
        path: project_dir.to_owned(),
        source: err,
    })?;

    debug!(path = %project_dir.display(), "made project directory");

    Ok(())
}

// sorted so the output is the same on every file system
fn prototype_file_names(prototype_dir: &Path) -> ScaffoldResult<Vec<String>> {
    let read_dir = fs::read_dir(prototype_dir)
        .map_err(|err| ScaffoldError::io(prototype_dir, err))?;

    let mut names = vec![];

    for entry in read_dir {
        let entry = entry.map_err(|err| ScaffoldError::io(prototype_dir, err))?;
        let path = entry.path();

        if !path.is_file() {
            debug!(path = %path.display(), "not a file, skipping");
            continue;
        }

        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => {
                return Err(ScaffoldError::io(
                    &path,
                    std::io::Error::new(
                        ErrorKind::InvalidData,
                        format!("file name is not utf-8 -- {:?}", name),
                    ),
                ));
            }
        }
    }

    names.sort();

    Ok(names)
}
