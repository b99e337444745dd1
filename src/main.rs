#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

extern crate statec;

mod cli;

fn main() {
    cli::run();
}
