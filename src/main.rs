use clap::Parser;
use tradeboard::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
