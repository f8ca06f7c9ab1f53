// Diagnostic logging goes to stderr so it never mixes with the
// calculator transcript on stdout. `RUST_LOG`, when set, overrides the
// level chosen on the command line.

use log::LevelFilter;

pub fn init(level: LevelFilter) {
    let result = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();
    if result.is_err() {
        log::debug!("logger already initialised");
    }
}
