//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::io::Write;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = waymark_cli::run() {
        log::error!("{err}");
        #[expect(
            clippy::let_underscore_must_use,
            reason = "nothing sensible remains to be done if stderr is closed"
        )]
        let _ = writeln!(std::io::stderr(), "waymark: {err}");
        std::process::exit(1);
    }
}
