extern crate clap;

use self::clap::{App, Arg, ArgMatches};

mod cmd;
mod logger;

pub fn run() {
    let matches = build_app();

    logger::init(&matches);

    cmd::compile(&matches);
}

fn build_app<'matches>() -> ArgMatches<'matches> {
    App::new("statec")
        .version(env!("CARGO_PKG_VERSION"))
        .author("statec contributors")
        .about("Compiles state machine descriptions into State-pattern source")
        .arg(
            Arg::with_name("package")
                .short("p")
                .long("package")
                .help("Sets the package name of the generated source")
                .takes_value(true)
                .value_name("NAME"),
        )
        .arg(
            Arg::with_name("logfile")
                .long("logfile")
                .help("Sets the log output file")
                .takes_value(true)
                .value_name("FILE"),
        )
        .arg(
            Arg::with_name("loglevel")
                .long("loglevel")
                .help("Sets the log level")
                .takes_value(true)
                .value_name("LEVEL")
                .possible_values(&["error", "warn", "info", "debug", "trace"])
                .requires("logfile"),
        )
        .get_matches()
}
