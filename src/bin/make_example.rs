//! just a wrapper around the lib interface and the cli interface
use std::{io, process};

use make_example::{
    args::{parse_args, usage},
    dispatch,
    logging::init_logging,
    Dispatch, ScaffoldConfig, Scaffolder,
};

// the real `main()` so we can clean up before `process::exit()`
fn run() -> bool {
    init_logging();

    let args = parse_args();

    let scaffolder = match Scaffolder::new(ScaffoldConfig::default()) {
        Ok(val) => val,
        Err(err) => {
            eprintln!("{}", err);

            return false;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match dispatch(&args.names, &scaffolder, &mut out) {
        Ok(Dispatch::Usage) => {
            println!("{}", usage());

            true
        }
        Ok(Dispatch::Completed(_)) => true,
        Ok(Dispatch::Unrecognised { option, .. }) => {
            println!("unrecognised option {}", option);

            false
        }
        Err(err) => {
            eprintln!("{}", err);

            false
        }
    }
}

fn main() {
    if !run() {
        process::exit(1);
    }
}
