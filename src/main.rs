#![forbid(unsafe_code)]

//! argkit: print how a command line is parsed
//!
//! Every argument given to the binary is parsed and echoed back, either as
//! aligned `name  value` lines (styled with `--color`) or as JSONL records
//! with `--jsonl`.

use argkit::ArgumentStore;
use argkit::output::{HumanFormatter, JsonlFormatter};
use log::debug;
use std::process::ExitCode;

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

fn main() -> ExitCode {
    env_logger::init();

    let arguments = ArgumentStore::from_env();
    debug!("parsed arguments: {:?}", arguments.all());

    ExitCode::from(run(&arguments))
}

fn run(arguments: &ArgumentStore) -> u8 {
    if arguments.has("jsonl", None) {
        match JsonlFormatter::new().format(arguments.all()) {
            Ok(output) => print!("{}", output),
            Err(e) => {
                eprintln!("Error: failed to serialize arguments: {}", e);
                return EXIT_ERROR;
            }
        }
    } else {
        print!("{}", HumanFormatter::new(arguments).format(arguments.all()));
    }

    EXIT_SUCCESS
}
