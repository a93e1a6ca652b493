use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

pub fn build_logger_for_level(level: LevelFilter) {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .filter(None, level)
        .init();
}

pub fn build_logger() {
    let mut builder = Builder::from_default_env();
    builder
        .format(|buf, record| writeln!(buf, "c {} - {}", record.level(), record.args()))
        .init();
}

/// Maps a repeated `-v` count to a level; zero defers to `RUST_LOG`.
pub fn level_for_verbosity(verbosity: u8) -> Option<LevelFilter> {
    match verbosity {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}
