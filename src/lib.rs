//! make new example projects from a prototype project

pub mod args;
pub mod config;
pub mod logging;
pub mod scaffold;
pub mod scaffold_error;
#[cfg(test)]
mod test_utils;

pub use crate::{
    args::{dispatch, Dispatch},
    config::ScaffoldConfig,
    scaffold::{FileOutcome, Scaffolder},
    scaffold_error::{ScaffoldErrType, ScaffoldError, ScaffoldResult},
};
