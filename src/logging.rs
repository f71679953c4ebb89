//! Logger setup shared by the binaries.

use log::LevelFilter;

/// Initialize the logger from `RUST_LOG`, defaulting to debug level.
///
/// Debug output is trimmed later by [`apply_verbosity`] once the
/// configuration has been read.
pub fn init() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().filter_or("RUST_LOG", "debug"),
    )
    .format_target(false)
    .try_init();
}

/// Drop debug output unless `verbose` is set. An explicit `RUST_LOG` wins.
pub fn apply_verbosity(verbose: bool) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    log::set_max_level(level);
}
