use tracing_subscriber::EnvFilter;

/// Log to stderr so spinners and report output on stdout stay readable.
/// `RUST_LOG` wins over the `--verbose` default.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sentitube=debug,sentitube_core=debug"
    } else {
        "sentitube=warn,sentitube_core=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}
