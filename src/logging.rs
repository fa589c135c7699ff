use log::LevelFilter;

pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn initialize_logging(level: LevelFilter) {
    env_logger::builder()
        .filter_level(level)
        .parse_default_env() // RUST_LOG wins over -v
        .init();
}
