use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter, Registry};

/// Composes the bunyan-formatted JSON subscriber the signup flow logs through.
/// `default_filter` applies only when `RUST_LOG` is unset; the sink is generic
/// so the binary writes to stderr while tests write to a buffer or `sink()`.
pub fn get_subscriber<Sink>(
    name: String,
    default_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(name, sink))
}

/// Installs the subscriber process-wide and routes `log` records from our
/// dependencies into it. Panics if called more than once per process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) {
    LogTracer::init().expect("Failed to set LogTracer");
    set_global_default(subscriber).expect("Failed to set subscriber");
}
