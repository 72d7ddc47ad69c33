use std::io::stderr;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging for the command-line tool.
///
/// Events go to stderr so the rendered name forms on stdout stay clean for
/// piping. `RUST_LOG` still wins over the level picked here.
pub fn setup(debug: bool) {
    let directive = if debug {
        "namewise=debug"
    } else {
        "namewise=info"
    };
    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_ansi(true)
                .with_filter(
                    EnvFilter::from_default_env().add_directive(directive.parse().unwrap()),
                ),
        )
        .init();
}
