use std::{env, ffi::OsString, io::Write};

use clap::{CommandFactory, Parser};
use tracing::debug;

use crate::{scaffold::Scaffolder, scaffold_error::ScaffoldResult};

/// makes or updates a new example project in the examples root
///
/// every file in the prototype is copied in to the new project with the
/// prototype's name replaced by the project name, files that already exist
/// are left alone
#[derive(Parser, Default, Debug)]
#[command(
    name = "make_example",
    disable_help_flag = true,
    override_usage = "make_example [--help] NAME [NAME ...]"
)]
pub struct MakeExampleArgs {
    /// the projects to make, each one gets its own directory
    #[arg(
        value_name = "NAME",
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub names: Vec<String>,
}

/// how a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// no names or `--help` was given, nothing was touched
    Usage,
    /// every name was made, in order
    Completed(Vec<String>),
    /// the run stopped at an option, only `completed` was made
    Unrecognised {
        option: String,
        completed: Vec<String>,
    },
}

impl MakeExampleArgs {
    /// take the args as given, without the program name
    ///
    /// clap only renders the usage, it would drop a `--` and stop at `--help`
    /// before `dispatch` gets to see them
    pub fn from_args_os<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let names = args
            .into_iter()
            .map(|arg| {
                let arg: OsString = arg.into();

                arg.to_string_lossy().into_owned()
            })
            .collect();

        Self { names }
    }
}

pub fn parse_args() -> MakeExampleArgs {
    MakeExampleArgs::from_args_os(env::args_os().skip(1))
}

pub fn usage() -> String {
    MakeExampleArgs::command().render_help().to_string()
}

/// run every name through the scaffolder in order, paths and messages go to
/// `out`
pub fn dispatch<W: Write>(
    args: &[String],
    scaffolder: &Scaffolder,
    out: &mut W,
) -> ScaffoldResult<Dispatch> {
    if args.is_empty() || args.iter().any(|arg| arg == "--help") {
        return Ok(Dispatch::Usage);
    }

    let mut completed = vec![];

    for arg in args {
        if arg.starts_with('-') {
            debug!(option = %arg, "stopping at unrecognised option");

            return Ok(Dispatch::Unrecognised {
                option: arg.to_owned(),
                completed,
            });
        }

        scaffolder.create_or_update_project(arg, out)?;

        completed.push(arg.to_owned());
    }

    Ok(Dispatch::Completed(completed))
}
