extern crate clap;
extern crate colored;
extern crate log4rs;

use std::process;

use log::LevelFilter;

use statec::{CompileError, SemanticError};

use self::{
    clap::ArgMatches,
    colored::{ColoredString, Colorize},
    log4rs::{
        append::file::FileAppender,
        config::{Appender, Config, Root},
        encode::pattern::PatternEncoder,
    },
};

static DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

lazy_static! {
    static ref PREFIX_FATAL: ColoredString = "fatal".on_bright_red();
    static ref PREFIX_WARN: ColoredString = "warning".yellow();
}

/// Configures the log file sink when `--logfile` asks for one. Only the
/// compiler's own diagnostic lines and plain messages are routed here; the
/// colored prefixes exist solely on stderr, so the log needs no
/// sanitization.
pub fn init(matches: &ArgMatches) {
    if let Some(log_file) = matches.value_of("logfile") {
        let log_level = match matches.value_of("loglevel") {
            Some("error") => LevelFilter::Error,
            Some("warn") => LevelFilter::Warn,
            Some("info") => LevelFilter::Info,
            Some("debug") => LevelFilter::Debug,
            Some("trace") => LevelFilter::Trace,
            _ => DEFAULT_LOG_LEVEL,
        };

        let encoder = PatternEncoder::new("{d(%Y-%m-%d %H:%M:%S)} {l} - {m}{n}");

        let file_appender = match FileAppender::builder()
            .encoder(Box::new(encoder))
            .build(log_file)
        {
            Ok(file_appender) => file_appender,
            Err(err) => fatal(&format!("Failed to build log file appender: {}", err)),
        };

        let config_res = Config::builder()
            .appender(Appender::builder().build("file", Box::new(file_appender)))
            .build(Root::builder().appender("file").build(log_level));

        let config = match config_res {
            Ok(config) => config,
            Err(err) => fatal(&format!("Failed to build logger configuration: {}", err)),
        };

        if let Err(err) = log4rs::init_config(config) {
            fatal(&format!("Failed to initialize logger: {}", err));
        }
    }

    info!("Launching statec");
}

/// Prints the diagnostics which halted a compile, one line each, uncolored:
/// the line format is the compiler's contract with whatever reads stderr.
pub fn diagnostics(err: &CompileError) {
    for line in err.diagnostics() {
        eprintln!("{}", line);
        error!("{}", line);
    }
}

pub fn warning(warning: &SemanticError) {
    eprintln!("{}: {}", *PREFIX_WARN, warning);
    warn!("{}", warning);
}

pub fn fatal(string: &str) -> ! {
    eprintln!("{}: {}", *PREFIX_FATAL, string);
    error!("{}", string);
    process::exit(1)
}
