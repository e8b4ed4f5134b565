// src/logging.rs
// =============================================================================
// Sets up `env_logger` as the backend for the `log` macros.
//
// RUST_LOG, when set, wins. Otherwise other crates log at warn and ours at a
// level picked from -v / -q.
// =============================================================================

use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Maps the CLI verbosity flags to a level for this crate.
pub fn level_for(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Warn;
    }
    match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    let env = Env::default().filter_or("RUST_LOG", "warn");
    let mut builder = Builder::from_env(env);

    if std::env::var("RUST_LOG").is_err() {
        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("m_check", level_for(verbose, quiet));
    }

    builder.format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()));
    builder.init();
}
