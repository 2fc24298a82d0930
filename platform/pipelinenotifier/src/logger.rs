use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const DEFAULT_FILTER: &str = "pipelinenotifier=info";

/// Pipeline Notifier Logger
///
/// `RUST_LOG` overrides the default filter, `LOG_FORMAT=json` switches to json lines.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let json = std::env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let layer = if json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|_err| eprintln!("Unable to set global default subscriber"));
}
