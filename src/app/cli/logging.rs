use std::env;
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "LARAPRESS_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Install the stderr tracing subscriber once per process.
///
/// `--verbose` forces debug for larapress. Otherwise `RUST_LOG` wins, then
/// `LARAPRESS_LOG`, then `warn`.
pub fn init(verbose: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter = if verbose {
            directives("debug")
        } else if env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            directives(&env::var(LOG_ENV).unwrap_or_else(|_| DEFAULT_LEVEL.to_string()))
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    });
}

fn directives(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("larapress={level},reqwest=warn"))
        .unwrap_or_else(|_| EnvFilter::new(format!("larapress={DEFAULT_LEVEL}")))
}
