//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = cicerone_cli::run() {
        eprintln!("cicerone: {err}");
        std::process::exit(1);
    }
}
