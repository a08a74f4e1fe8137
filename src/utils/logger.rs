use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVES: &str = "pantry_client=info";
const VERBOSE_DIRECTIVES: &str = "pantry_client=debug,info";

/// `RUST_LOG` wins; otherwise the crate logs at info, or debug when verbose.
fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_DIRECTIVES
        } else {
            DEFAULT_DIRECTIVES
        })
    })
}

/// Human-readable logs on stderr; stdout is reserved for the JSON response.
pub fn init_cli_logger(verbose: bool) {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(fmt_layer)
        .init();
}

/// One JSON object per event, for log collectors.
pub fn init_json_logger() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(env_filter(false).to_string(), DEFAULT_DIRECTIVES);
        assert!(env_filter(true).to_string().contains("pantry_client=debug"));
    }
}
