//! Logger setup for the wikicoord binary.

/// Installs env_logger: `Debug` when verbose, otherwise warnings and errors only.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
