use log::LevelFilter;

/// Initialize logging for the command line tool.
///
/// Logs at `Info` unless `verbose` is set, in which case per-round details are shown at `Debug`.
/// An explicit `RUST_LOG` overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    // A second initialization (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
    log::debug!("logger initialized at {level:?} level");
}
