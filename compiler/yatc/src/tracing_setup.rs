use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// Does nothing unless `RUST_LOG` is set, so normal runs only write program
/// output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            // Another subscriber may already be installed (tests).
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(tree)
                .try_init();
        }
    });
}
