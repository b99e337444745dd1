extern crate clap;
extern crate stopwatch;

use std::{
    io::{self, Read, Write},
    process,
};

use cli::logger;
use statec;

use self::{clap::ArgMatches, stopwatch::Stopwatch};

/// Reads an FSM description from stdin and writes the generated source to
/// stdout. Diagnostics and warnings go to stderr; any error exits non-zero
/// without emitting code.
pub fn compile(matches: &ArgMatches) {
    let mut sw = Stopwatch::start_new();

    let package = matches.value_of("package").unwrap_or("fsm");

    let mut input = String::new();
    if let Err(err) = io::stdin().read_to_string(&mut input) {
        logger::fatal(&format!("Failed to read standard input: {}", err));
    }

    match statec::compile(&input, package) {
        Ok(compilation) => {
            for warning in &compilation.warnings {
                logger::warning(warning);
            }

            print!("{}", compilation.code);
            if let Err(err) = io::stdout().flush() {
                logger::fatal(&format!("Failed to write standard output: {}", err));
            }

            sw.stop();
            debug!("Compiled {} input bytes in {}ms", input.len(), sw.elapsed_ms());
        }
        Err(err) => {
            logger::diagnostics(&err);
            process::exit(1);
        }
    }
}
