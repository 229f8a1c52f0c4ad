//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use helios_cli::CliError;

fn main() {
    if let Err(err) = helios_cli::run() {
        if let CliError::ArgumentParsing(clap_err) = &err {
            clap_err.exit();
        }
        eprintln!("helios: {err}");
        std::process::exit(1);
    }
}
