use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter; prompts own stdout, so only warnings reach stderr unless `RUST_LOG` says otherwise.
const DEFAULT_DIRECTIVE: &str = "menu_planner_rs=warn";

/// Initializes the global tracing subscriber once. Logs go to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .try_init();
    });
}
