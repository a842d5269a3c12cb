use tracing::Level;

/// Installs the stderr subscriber shared by both tools. `verbose` lowers the
/// threshold from WARN to DEBUG.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
