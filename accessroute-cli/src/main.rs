//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stderr)
        .init();
    if let Err(err) = accessroute_cli::run() {
        eprintln!("accessroute: {err}");
        std::process::exit(1);
    }
}
