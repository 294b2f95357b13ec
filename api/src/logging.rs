use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber for the site server.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks between info and debug
/// for this crate. `json` switches to one JSON object per line for log shipping.
pub fn init_server_logger(verbose: bool, json: bool) {
    let default_filter = if verbose {
        "manzil_api=debug,api=debug,site_server=debug,info"
    } else {
        "manzil_api=info,api=info,site_server=info,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer.compact()).init();
    }
}
