//! Tracing initialisation for the `objtext` binary.

use std::sync::Once;

use tracing::Dispatch;

/// Filter directives, e.g. `OBJTEXT_LOG=objtext_lexer_core=trace`.
pub const LOG_ENV: &str = "OBJTEXT_LOG";
/// Set to `1` for indented, span-structured output.
pub const LOG_TREE_ENV: &str = "OBJTEXT_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber.
///
/// Call this once at startup. Safe to call multiple times. Does nothing
/// unless `OBJTEXT_LOG` or `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Some(directives) = std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        let registry = tracing_subscriber::registry().with(EnvFilter::new(directives));

        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1");
        let installed = if tree {
            registry
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .try_init()
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .try_init()
        };
        if let Err(e) = installed {
            eprintln!("warning: tracing already initialised: {e}");
        }
    });
}

/// A standalone trace-level sink for injecting into a scanner.
///
/// Unlike [`init_tracing`] this touches no global state; only scanners built
/// with it log through it.
pub fn scan_dispatch(ansi: bool) -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .with_ansi(ansi)
        .with_writer(std::io::stderr)
        .finish();
    Dispatch::new(subscriber)
}
